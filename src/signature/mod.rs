//! Structured C function signatures
//!
//! This module contains the signature model and the scanner that recovers it from header text:
//! - `Parameter` / `Signature`: the `(type, name)` pairs and prototypes rendered into C text
//! - `parser`: line-oriented extraction of declarations from an existing header

pub mod parser;

pub use parser::{extract, extract_signatures, parse_declaration, parse_prototype, Extraction};

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Joins a type with the identifier it qualifies.
///
/// A type ending in `*` binds directly to the identifier (`void *thing`); any other
/// type is separated by exactly one space (`float x`). An empty identifier leaves the
/// type on its own, which is how an explicit `void` parameter list is stored.
pub fn join_declarator(ty: &str, name: &str) -> String {
    if name.is_empty() {
        ty.to_string()
    } else if ty.ends_with('*') {
        format!("{ty}{name}")
    } else {
        format!("{ty} {name}")
    }
}

/// One entry of a parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawParameter")]
pub struct Parameter {
    ty: String,
    name: String,
}

#[derive(Deserialize)]
struct RawParameter {
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    name: String,
}

impl From<RawParameter> for Parameter {
    fn from(raw: RawParameter) -> Self {
        Parameter::new(raw.ty, raw.name)
    }
}

impl Parameter {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self { ty: ty.into().trim().to_string(), name: name.into().trim().to_string() }
    }

    /// The unnamed `void` entry of a `name(void)` prototype.
    pub fn void() -> Self {
        Self::new("void", "")
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_declarator(&self.ty, &self.name))
    }
}

/// A C function prototype: return type, name and ordered parameters.
///
/// Signatures are immutable once built. Equality is structural, and the parameter
/// order is the C argument order. No `void` is inferred for an empty parameter list;
/// `name(void)` must carry [`Parameter::void`] explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "SignatureRepr")]
pub struct Signature {
    return_type: String,
    name: String,
    parameters: Vec<Parameter>,
}

/// Descriptor files may spell a signature as a prototype string or as a record.
#[derive(Deserialize)]
#[serde(untagged)]
enum SignatureRepr {
    Prototype(String),
    Structured {
        return_type: String,
        name: String,
        #[serde(default)]
        parameters: Vec<Parameter>,
    },
}

impl TryFrom<SignatureRepr> for Signature {
    type Error = Error;

    fn try_from(repr: SignatureRepr) -> Result<Self> {
        match repr {
            SignatureRepr::Prototype(text) => parse_prototype(&text),
            SignatureRepr::Structured { return_type, name, parameters } => {
                Ok(Signature::new(return_type, name, parameters))
            }
        }
    }
}

impl Signature {
    pub fn new(
        return_type: impl Into<String>,
        name: impl Into<String>,
        parameters: impl IntoIterator<Item = Parameter>,
    ) -> Self {
        Self {
            return_type: return_type.into().trim().to_string(),
            name: name.into().trim().to_string(),
            parameters: parameters.into_iter().collect(),
        }
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Checks that the signature can be rendered as C text.
    ///
    /// # Arguments
    /// * `field` - Location of this signature in its descriptor, used in the error
    ///
    /// # Returns
    /// * `Err(Error::InconsistentDescriptor)` - If the return type, the name or a
    ///   parameter type is empty
    pub fn validate(&self, field: &str) -> Result<()> {
        let missing = |part: String| Error::InconsistentDescriptor {
            field: format!("{field}.{part}"),
            reason: "must not be empty".to_string(),
        };

        if self.return_type.is_empty() {
            return Err(missing("return_type".to_string()));
        }
        if self.name.is_empty() {
            return Err(missing("name".to_string()));
        }
        if let Some(idx) = self.parameters.iter().position(|p| p.ty.is_empty()) {
            return Err(missing(format!("parameters[{idx}].type")));
        }
        Ok(())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parameters: Vec<String> = self.parameters.iter().map(ToString::to_string).collect();
        write!(
            f,
            "{}({})",
            join_declarator(&self.return_type, &self.name),
            parameters.join(", ")
        )
    }
}

impl FromStr for Signature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_prototype(s)
    }
}
