//! Module descriptors: the records every template renders from
//!
//! - `types`: `ModuleDescriptor` and `FakeRequest`
//! - `loader`: reading descriptors from YAML or JSON files

pub mod loader;
pub mod types;

pub use loader::load_descriptor;
pub use types::{FakeRequest, ModuleDescriptor};
