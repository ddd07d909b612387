//! Descriptor records

use crate::error::{Error, Result};
use crate::signature::{extract, Signature};
use indexmap::{IndexMap, IndexSet};
use log::info;
use serde::{Deserialize, Deserializer};

/// Everything needed to render the files of one C module.
///
/// Every collection keeps the order it was given in; nothing is sorted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModuleDescriptor {
    pub module_name: String,
    pub project_name: Option<String>,
    pub author: String,
    pub copyright_holder: Option<String>,
    pub written_by: Option<String>,
    pub year: i32,
    /// Rendered as `#include <...>`
    pub system_includes: IndexSet<String>,
    /// Rendered as `#include "..."`
    pub project_includes: IndexSet<String>,
    #[serde(deserialize_with = "deserialize_defines")]
    pub defines: IndexMap<String, String>,
    /// Raw type declarations, each rendered with a trailing `;`
    pub types: Vec<String>,
    /// Declared in the header and defined in the source
    pub exported_functions: Vec<Signature>,
    /// Forward-declared and defined in the source only
    pub static_functions: Vec<Signature>,
    pub use_include_guard: bool,
}

impl ModuleDescriptor {
    pub fn new(module_name: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            module_name: module_name.into(),
            author: author.into(),
            year,
            ..Self::default()
        }
    }

    pub fn with_system_include(mut self, include: impl Into<String>) -> Self {
        self.system_includes.insert(include.into());
        self
    }

    pub fn with_project_include(mut self, include: impl Into<String>) -> Self {
        self.project_includes.insert(include.into());
        self
    }

    pub fn with_define(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.defines.insert(name.into(), value.into());
        self
    }

    pub fn with_type(mut self, declaration: impl Into<String>) -> Self {
        self.types.push(declaration.into());
        self
    }

    pub fn with_exported(mut self, signature: Signature) -> Self {
        self.exported_functions.push(signature);
        self
    }

    pub fn with_static(mut self, signature: Signature) -> Self {
        self.static_functions.push(signature);
        self
    }

    pub fn with_include_guard(mut self, use_include_guard: bool) -> Self {
        self.use_include_guard = use_include_guard;
        self
    }

    /// Fails fast on anything that would render as malformed C.
    pub fn validate(&self) -> Result<()> {
        if self.module_name.trim().is_empty() {
            return Err(Error::InconsistentDescriptor {
                field: "module_name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        for (idx, signature) in self.exported_functions.iter().enumerate() {
            signature.validate(&format!("exported_functions[{idx}]"))?;
        }
        for (idx, signature) in self.static_functions.iter().enumerate() {
            signature.validate(&format!("static_functions[{idx}]"))?;
        }
        Ok(())
    }
}

/// Define values may be written as strings or numbers; both are kept as text.
fn deserialize_defines<'de, D>(
    deserializer: D,
) -> std::result::Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IndexMap::<String, serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(name, value)| {
            let text = match value {
                serde_json::Value::String(text) => text,
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            };
            (name, text)
        })
        .collect())
}

/// Input of the fake template: the header to include and the signatures to stub out.
#[derive(Debug, Clone, PartialEq)]
pub struct FakeRequest {
    pub fake_include: String,
    pub signatures: Vec<Signature>,
}

impl FakeRequest {
    pub fn new(fake_include: impl Into<String>, signatures: Vec<Signature>) -> Self {
        Self { fake_include: fake_include.into(), signatures }
    }

    /// Builds a request from the text of the header being faked.
    ///
    /// Lines the extractor cannot parse are skipped; they are logged and returned
    /// alongside the request so callers can surface them.
    pub fn from_header(fake_include: impl Into<String>, header: &str) -> (Self, Vec<Error>) {
        let extraction = extract(header);
        let request = Self::new(fake_include, extraction.signatures);
        info!(
            "Extracted {} declaration(s) for '{}', skipped {} line(s)",
            request.signatures.len(),
            request.fake_include,
            extraction.skipped.len()
        );
        (request, extraction.skipped)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fake_include.trim().is_empty() {
            return Err(Error::InconsistentDescriptor {
                field: "fake_include".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        for (idx, signature) in self.signatures.iter().enumerate() {
            signature.validate(&format!("signatures[{idx}]"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::Parameter;

    #[test]
    fn builder_preserves_insertion_order() {
        let descriptor = ModuleDescriptor::new("Filled", "Spencer Russell", 2015)
            .with_system_include("stdio.h")
            .with_system_include("stdbool.h")
            .with_system_include("stdio.h")
            .with_define("PI", "3.14159")
            .with_define("BUFLEN", "32");

        let includes: Vec<&str> = descriptor.system_includes.iter().map(String::as_str).collect();
        assert_eq!(includes, ["stdio.h", "stdbool.h"]);
        let defines: Vec<&str> = descriptor.defines.keys().map(String::as_str).collect();
        assert_eq!(defines, ["PI", "BUFLEN"]);
    }

    #[test]
    fn validate_rejects_empty_module_name() {
        let err = ModuleDescriptor::new("  ", "a", 2015).validate().unwrap_err();
        assert!(matches!(
            err,
            Error::InconsistentDescriptor { ref field, .. } if field == "module_name"
        ));
    }

    #[test]
    fn validate_locates_the_broken_signature() {
        let descriptor = ModuleDescriptor::new("M", "a", 2015)
            .with_static(Signature::new("void", "process", [Parameter::void()]))
            .with_static(Signature::new("int *", "", []));
        let err = descriptor.validate().unwrap_err();
        assert!(err.to_string().contains("static_functions[1].name"));
    }

    #[test]
    fn defines_accept_numbers_and_strings() {
        let descriptor: ModuleDescriptor = serde_yaml::from_str(
            "module_name: Filled\ndefines:\n  BUFLEN: 32\n  PI: 3.14159\n  NAME: \"\\\"x\\\"\"\n  EMPTY:\n",
        )
        .unwrap();
        let defines: Vec<(&str, &str)> =
            descriptor.defines.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(
            defines,
            [("BUFLEN", "32"), ("PI", "3.14159"), ("NAME", "\"x\""), ("EMPTY", "")]
        );
    }

    #[test]
    fn fake_request_from_header_keeps_order_and_reports_skips() {
        let header = "int first(void);\nvoid (*broken)(int);\nvoid second(int x);\n";
        let (request, skipped) = FakeRequest::from_header("Uart.h", header);
        let names: Vec<&str> = request.signatures.iter().map(Signature::name).collect();
        assert_eq!(names, ["first", "second"]);
        assert_eq!(skipped.len(), 1);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn fake_request_requires_an_include() {
        assert!(FakeRequest::new("", vec![]).validate().is_err());
    }
}
