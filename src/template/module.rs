//! Header and source bodies for the common layout.

use super::layout::{Body, Section};
use crate::constants::{sections, STATIC_KEYWORD};
use crate::descriptor::ModuleDescriptor;
use crate::signature::Signature;

/// Exported declarations, one per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderBody;

impl Body for HeaderBody {
    fn sections(&self, descriptor: &ModuleDescriptor) -> Vec<Section> {
        Section::lines(
            sections::EXPORTED_FUNCTION_DECLARATIONS,
            descriptor.exported_functions.iter().map(|signature| format!("{signature};")),
        )
        .into_iter()
        .collect()
    }
}

/// Static forward declarations, then exported and static definitions with empty bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceBody;

impl Body for SourceBody {
    fn sections(&self, descriptor: &ModuleDescriptor) -> Vec<Section> {
        let statics: Vec<String> =
            descriptor.static_functions.iter().map(static_prototype).collect();

        [
            Section::lines(
                sections::STATIC_FUNCTION_DECLARATIONS,
                statics.iter().map(|prototype| format!("{prototype};")),
            ),
            Section::blocks(
                sections::EXPORTED_FUNCTION_DEFINITIONS,
                descriptor
                    .exported_functions
                    .iter()
                    .map(|signature| empty_definition(&signature.to_string())),
            ),
            Section::blocks(
                sections::STATIC_FUNCTION_DEFINITIONS,
                statics.iter().map(|prototype| empty_definition(prototype)),
            ),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

fn empty_definition(prototype: &str) -> String {
    format!("{prototype} {{\n}}")
}

/// Renders a static function's prototype with its storage class.
fn static_prototype(signature: &Signature) -> String {
    let already_static =
        signature.return_type().split_whitespace().next() == Some(STATIC_KEYWORD);
    if already_static {
        signature.to_string()
    } else {
        format!("{STATIC_KEYWORD} {signature}")
    }
}
