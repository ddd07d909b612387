//! Template rendering
//!
//! - `filters`: the `section_header` and `include_guard` text transforms
//! - `interface`: the `TemplateRenderer` trait
//! - `minijinja`: the MiniJinja-backed implementation with the built-in templates
//! - `templates`: sources of the built-in templates

pub mod filters;
pub mod interface;
pub mod minijinja;
pub mod templates;

pub use filters::{include_guard, section_header};
pub use interface::TemplateRenderer;
pub use self::minijinja::MiniJinjaRenderer;
