use super::filters::{include_guard, section_header};
use super::templates::BUILTIN;
use crate::{error::Result, renderer::interface::TemplateRenderer};
use log::trace;
use minijinja::Environment;

/// MiniJinja-based template rendering engine.
///
/// The environment is built once with the filters and built-in templates
/// installed; rendering only borrows it, so one renderer can be shared freely
/// between threads.
#[derive(Debug)]
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer with the filters and built-in templates registered.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        // Generated files end with a newline; keep the one the templates end with.
        env.set_keep_trailing_newline(true);

        env.add_filter("section_header", section_header);
        env.add_filter("include_guard", include_guard);

        let mut renderer = Self { env };
        for (name, source) in BUILTIN {
            renderer.add_template(name, source)?;
        }
        Ok(renderer)
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn add_template(&mut self, name: &str, template: &str) -> Result<()> {
        // Normalize the template name for cross-platform compatibility
        let normalized_name = name.replace('\\', "/");
        self.env.add_template_owned(normalized_name, template.to_string())?;
        Ok(())
    }

    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        trace!("Rendering template '{name}'");
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(context)?)
    }
}
