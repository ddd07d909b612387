//! Unit-test skeletons.
//!
//! The generated test file always contains one test that fails with
//! `No tests for module <name>`, so a forgotten skeleton never passes silently.

use crate::constants::{sections, templates};
use crate::descriptor::ModuleDescriptor;
use serde_json::json;

/// Which skeleton to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TestVariant {
    /// Test harness and module header includes, no section banners.
    #[default]
    Minimal,
    /// Banner-delimited Includes, Test Group Definition and Test Definitions sections,
    /// with the descriptor's own includes added to the Includes section.
    Full,
}

impl TestVariant {
    pub(crate) fn template_name(self) -> &'static str {
        match self {
            TestVariant::Minimal => templates::TEST_MINIMAL,
            TestVariant::Full => templates::TEST_FULL,
        }
    }
}

/// Adds what the skeleton templates need on top of the preamble context.
pub(crate) fn test_context(
    descriptor: &ModuleDescriptor,
    mut context: serde_json::Value,
) -> serde_json::Value {
    context["module_name"] = json!(descriptor.module_name);
    context["system_includes"] = json!(descriptor.system_includes);
    context["project_includes"] = json!(descriptor.project_includes);
    context["sections"] = json!({
        "includes": sections::INCLUDES,
        "test_group": sections::TEST_GROUP_DEFINITION,
        "tests": sections::TEST_DEFINITIONS,
    });
    context
}
