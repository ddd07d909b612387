//! The common file layout shared by headers and sources.
//!
//! A file is a preamble, an optional include-guard pair, the Includes and Defines and
//! Types sections, and whatever sections the [`Body`] contributes. Parts are separated
//! by exactly one blank line; sections with nothing in them are left out entirely.

use crate::constants::sections;
use crate::descriptor::ModuleDescriptor;
use crate::renderer::section_header;

/// A titled region of a generated file.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    title: &'static str,
    content: String,
}

impl Section {
    /// One entry per line, no blank lines between them. `None` when there are no entries.
    pub fn lines<I>(title: &'static str, entries: I) -> Option<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let content: String = entries.into_iter().map(|entry| entry + "\n").collect();
        (!content.is_empty()).then_some(Self { title, content })
    }

    /// Entries separated by one blank line, none after the last. `None` when there are no entries.
    pub fn blocks<I>(title: &'static str, entries: I) -> Option<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let entries: Vec<String> = entries.into_iter().collect();
        if entries.is_empty() {
            return None;
        }
        Some(Self { title, content: entries.join("\n\n") + "\n" })
    }

    pub fn title(&self) -> &str {
        self.title
    }

    pub fn render(&self) -> String {
        format!("{}\n\n{}", section_header(self.title), self.content)
    }
}

/// The module-specific part of a file.
pub trait Body {
    fn sections(&self, descriptor: &ModuleDescriptor) -> Vec<Section>;
}

/// Lays out a complete file around `body`.
///
/// # Arguments
/// * `preamble` - Rendered comment block, ending in a newline
/// * `descriptor` - Source of the includes, defines and types
/// * `guard` - Include-guard token; the same token opens and closes the file
/// * `body` - Strategy supplying the sections after Defines and Types
pub fn compose(
    preamble: String,
    descriptor: &ModuleDescriptor,
    guard: Option<&str>,
    body: &dyn Body,
) -> String {
    let mut parts = vec![preamble];

    if let Some(guard) = guard {
        parts.push(format!("#ifndef {guard}\n#define {guard}\n"));
    }

    parts.extend(
        common_sections(descriptor)
            .into_iter()
            .chain(body.sections(descriptor))
            .map(|section| section.render()),
    );

    if let Some(guard) = guard {
        parts.push(format!("#endif // {guard}\n"));
    }

    parts.join("\n")
}

fn common_sections(descriptor: &ModuleDescriptor) -> Vec<Section> {
    [includes(descriptor), defines_and_types(descriptor)].into_iter().flatten().collect()
}

fn includes(descriptor: &ModuleDescriptor) -> Option<Section> {
    let system = descriptor.system_includes.iter().map(|include| format!("#include <{include}>"));
    let project =
        descriptor.project_includes.iter().map(|include| format!("#include \"{include}\""));
    Section::lines(sections::INCLUDES, system.chain(project))
}

fn defines_and_types(descriptor: &ModuleDescriptor) -> Option<Section> {
    let defines: Vec<String> = descriptor
        .defines
        .iter()
        .map(|(name, value)| {
            if value.is_empty() {
                format!("#define {name}")
            } else {
                format!("#define {name} {value}")
            }
        })
        .collect();
    let types: Vec<String> = descriptor
        .types
        .iter()
        .map(|declaration| format!("{};", declaration.trim_end().trim_end_matches(';')))
        .collect();

    let groups = [defines, types]
        .into_iter()
        .filter(|group| !group.is_empty())
        .map(|group| group.join("\n"));
    Section::blocks(sections::DEFINES_AND_TYPES, groups)
}
