/// Handles argument parsing and file output.
pub mod cli;

/// Constants shared across the crate.
pub mod constants;

/// Module descriptors and their loader.
pub mod descriptor;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Section banners, include guards and the template engine.
pub mod renderer;

/// C function signatures and the declaration extractor.
pub mod signature;

/// Header, source, test-skeleton and fake templates.
pub mod template;

pub use descriptor::{FakeRequest, ModuleDescriptor};
pub use error::{Error, Result};
pub use signature::{Parameter, Signature};
pub use template::{Generator, TestVariant};
