//! File templates
//!
//! This module turns descriptors into file text:
//! - `layout`: the common preamble/guard/includes/defines layout and the `Body` hook
//! - `module`: header and source bodies
//! - `skeleton`: unit-test skeletons
//! - `fake`: fakes generated from extracted signatures
//!
//! Rendering never touches the file system; every call is a pure function of its input.

pub mod fake;
pub mod layout;
pub mod module;
pub mod skeleton;

pub use layout::{Body, Section};
pub use module::{HeaderBody, SourceBody};
pub use skeleton::TestVariant;

use crate::constants::templates;
use crate::descriptor::{FakeRequest, ModuleDescriptor};
use crate::error::Result;
use crate::renderer::{include_guard, MiniJinjaRenderer, TemplateRenderer};
use log::debug;
use serde_json::json;

/// Creates the default template engine with the built-in templates registered.
pub fn get_template_engine() -> Result<MiniJinjaRenderer> {
    MiniJinjaRenderer::new()
}

/// Renders headers, sources, test skeletons and fakes.
#[derive(Debug)]
pub struct Generator<R = MiniJinjaRenderer> {
    engine: R,
}

impl Generator<MiniJinjaRenderer> {
    pub fn new() -> Result<Self> {
        Ok(Self { engine: get_template_engine()? })
    }
}

impl<R: TemplateRenderer> Generator<R> {
    /// Uses `engine` instead of the default renderer. It must provide the built-in template names.
    pub fn with_engine(engine: R) -> Self {
        Self { engine }
    }

    /// Renders a header: exported declarations, wrapped in an include guard derived from
    /// `filename` when the descriptor asks for one.
    pub fn render_header(&self, descriptor: &ModuleDescriptor, filename: &str) -> Result<String> {
        self.render_module(descriptor, filename, &HeaderBody)
    }

    /// Renders a source file: static declarations and empty definitions.
    pub fn render_source(&self, descriptor: &ModuleDescriptor, filename: &str) -> Result<String> {
        self.render_module(descriptor, filename, &SourceBody)
    }

    /// Renders the common layout around any body.
    pub fn render_module(
        &self,
        descriptor: &ModuleDescriptor,
        filename: &str,
        body: &dyn Body,
    ) -> Result<String> {
        descriptor.validate()?;
        debug!("Rendering '{filename}' for module '{}'", descriptor.module_name);

        let title = format!("{} module.", descriptor.module_name);
        let preamble =
            self.engine.render(templates::PREAMBLE, &preamble_context(descriptor, &title))?;
        let guard = descriptor.use_include_guard.then(|| include_guard(filename));
        Ok(layout::compose(preamble, descriptor, guard.as_deref(), body))
    }

    /// Renders a unit-test skeleton for the module.
    pub fn render_test(
        &self,
        descriptor: &ModuleDescriptor,
        variant: TestVariant,
    ) -> Result<String> {
        descriptor.validate()?;
        debug!("Rendering {variant:?} test skeleton for module '{}'", descriptor.module_name);

        let title = format!("Tests for the {} module.", descriptor.module_name);
        let context = skeleton::test_context(descriptor, preamble_context(descriptor, &title));
        self.engine.render(variant.template_name(), &context)
    }

    /// Renders a fake: the header include plus one empty definition per signature.
    pub fn render_fake(&self, request: &FakeRequest) -> Result<String> {
        let context = fake::fake_context(request)?;
        debug!("Rendering fake for '{}'", request.fake_include);
        self.engine.render(templates::FAKE, &context)
    }
}

/// Context of the comment block opening every file.
///
/// The `Written by` line names `written_by`, or the author when a different copyright
/// holder is credited; otherwise it is left out.
fn preamble_context(descriptor: &ModuleDescriptor, title: &str) -> serde_json::Value {
    let written_by = descriptor.written_by.clone().or_else(|| {
        descriptor
            .copyright_holder
            .as_ref()
            .filter(|holder| **holder != descriptor.author)
            .map(|_| descriptor.author.clone())
    });

    json!({
        "title": title,
        "project_name": descriptor.project_name,
        "year": descriptor.year,
        "author": descriptor.author,
        "copyright_holder": descriptor.copyright_holder,
        "written_by": written_by,
    })
}
