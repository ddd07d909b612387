//! Best-effort extraction of function declarations from header text.
//!
//! This is a line scanner, not a C parser. A declaration must sit on a single line in
//! the form `<return type> <name>(<parameters>);` at file scope, which includes the inside
//! of an `extern "C" { ... }` linkage block. Lines inside any other braces,
//! comments, preprocessor directives (including continuation lines) and `typedef`s are
//! ignored. Any other line that looks like a declaration but cannot be split into a
//! signature is skipped and reported in [`Extraction::skipped`]; extraction never fails
//! as a whole. Declarations spanning several lines and parameters containing nested
//! parentheses (function pointers) are not supported and end up in the skipped list.

use super::{Parameter, Signature};
use crate::error::{Error, Result};
use log::{debug, warn};
use regex::Regex;
use std::sync::LazyLock;

static FUNCTION_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier regex"));

static PARAMETER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\[[^\]]*\])*$").expect("valid parameter regex")
});

/// `extern "C" {` on one line.
static LINKAGE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^extern\s+"C(\+\+)?"\s*\{"#).expect("valid linkage regex")
});

/// `extern "C"` with its brace on the next line.
static LINKAGE_SPEC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^extern\s+"C(\+\+)?"$"#).expect("valid linkage regex"));

/// An open brace. Declarations inside a linkage block are still at file scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Linkage,
    Block,
}

/// Result of scanning a header.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Parsed declarations, in the order they appear in the header
    pub signatures: Vec<Signature>,
    /// One `Error::MalformedSignatureLine` per declaration-shaped line that was skipped
    pub skipped: Vec<Error>,
}

/// Scans header text and returns every declaration it could parse.
///
/// # Arguments
/// * `text` - Contents of a C header
///
/// # Returns
/// * `Extraction` - Signatures in header order plus the lines that were skipped
pub fn extract(text: &str) -> Extraction {
    let mut extraction = Extraction::default();
    let mut in_block_comment = false;
    let mut in_macro = false;
    let mut pending_linkage = false;
    let mut scopes: Vec<Scope> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;

        if in_macro {
            in_macro = raw.trim_end().ends_with('\\');
            continue;
        }

        let code = strip_comments(raw, &mut in_block_comment);
        let code = code.trim();
        if code.starts_with('#') {
            in_macro = code.ends_with('\\');
            continue;
        }

        let at_file_scope = scopes.iter().all(|scope| *scope == Scope::Linkage);
        let mut linkage_brace = pending_linkage || LINKAGE_BLOCK.is_match(code);
        if !code.is_empty() {
            pending_linkage = LINKAGE_SPEC.is_match(code);
        }
        for c in code.chars() {
            match c {
                '{' => {
                    let scope = if std::mem::take(&mut linkage_brace) {
                        Scope::Linkage
                    } else {
                        Scope::Block
                    };
                    scopes.push(scope);
                }
                '}' => {
                    scopes.pop();
                }
                _ => {}
            }
        }

        if code.is_empty() || !code.contains('(') {
            continue;
        }
        if !at_file_scope {
            debug!("Ignoring line {line_no} inside a block: '{code}'");
            continue;
        }
        if code.split_whitespace().next() == Some("typedef") {
            debug!("Ignoring typedef on line {line_no}");
            continue;
        }

        let parsed = if code.contains('{') {
            Err(malformed(line_no, code, "function definitions are not declarations"))
        } else {
            parse_declaration(line_no, code)
        };

        match parsed {
            Ok(signature) => extraction.signatures.push(signature),
            Err(err) => {
                warn!("Skipping line: {err}");
                extraction.skipped.push(err);
            }
        }
    }

    extraction
}

/// Scans header text and returns only the parsed signatures.
///
/// Skipped lines are still logged; use [`extract`] to inspect them.
pub fn extract_signatures(text: &str) -> Vec<Signature> {
    extract(text).signatures
}

/// Parses a single `type name(params);` declaration line.
///
/// # Arguments
/// * `line` - 1-based line number, used in the error
/// * `text` - The declaration text, terminated by `;`
pub fn parse_declaration(line: usize, text: &str) -> Result<Signature> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_suffix(';')
        .ok_or_else(|| malformed(line, trimmed, "declaration must end with ';'"))?;
    parse_shape(body).map_err(|reason| malformed(line, trimmed, &reason))
}

/// Parses a prototype such as `void *something(void *thing)`; the trailing `;` is optional.
pub fn parse_prototype(text: &str) -> Result<Signature> {
    let trimmed = text.trim();
    let body = trimmed.strip_suffix(';').unwrap_or(trimmed);
    parse_shape(body).map_err(|reason| malformed(1, trimmed, &reason))
}

fn malformed(line: usize, text: &str, reason: &str) -> Error {
    Error::MalformedSignatureLine {
        line,
        text: text.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_shape(text: &str) -> std::result::Result<Signature, String> {
    let text = text.trim();
    let open = text.find('(').ok_or("missing parameter list")?;
    let close = text.rfind(')').ok_or("unterminated parameter list")?;
    if close < open {
        return Err("unbalanced parentheses".to_string());
    }
    if !text[close + 1..].trim().is_empty() {
        return Err("unexpected text after parameter list".to_string());
    }

    let inner = &text[open + 1..close];
    if inner.contains(['(', ')']) {
        return Err("nested parentheses are not supported".to_string());
    }

    let (return_type, name) = split_declarator(&text[..open]);
    if name.is_empty() || return_type.is_empty() {
        return Err("expected a return type followed by a function name".to_string());
    }
    if !FUNCTION_NAME.is_match(&name) {
        return Err(format!("'{name}' is not a valid function name"));
    }

    let parameters = split_parameters(inner)?;
    Ok(Signature::new(return_type, name, parameters))
}

fn split_parameters(inner: &str) -> std::result::Result<Vec<Parameter>, String> {
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .enumerate()
        .map(|(idx, raw)| {
            let raw = raw.trim();
            if raw.is_empty() {
                return Err(format!("parameter {} is empty", idx + 1));
            }
            let (ty, name) = split_declarator(raw);
            if !name.is_empty() && !PARAMETER_NAME.is_match(&name) {
                return Err(format!("'{name}' is not a valid parameter name"));
            }
            Ok(Parameter::new(ty, name))
        })
        .collect()
}

/// Splits `type name` at the last whitespace boundary.
///
/// A `*` run in front of the name moves to the type (`point2 *p` gives `point2 *` and
/// `p`). Without whitespace, a `*` still separates type and name (`char*p`); a lone
/// token is a type with no name (`void`).
fn split_declarator(text: &str) -> (String, String) {
    let text = text.trim();
    match text.rfind(char::is_whitespace) {
        Some(idx) => {
            let head = text[..idx].trim_end();
            let tail = text[idx..].trim_start();
            let name = tail.trim_start_matches('*');
            let stars = &tail[..tail.len() - name.len()];
            if stars.is_empty() {
                (head.to_string(), name.to_string())
            } else {
                (format!("{head} {stars}"), name.to_string())
            }
        }
        None => match text.rfind('*') {
            Some(idx) => (text[..=idx].to_string(), text[idx + 1..].to_string()),
            None => (text.to_string(), String::new()),
        },
    }
}

/// Removes `//` and `/* */` comments, carrying block-comment state across lines.
fn strip_comments(line: &str, in_block_comment: &mut bool) -> String {
    let mut code = String::with_capacity(line.len());
    let mut rest = line;

    loop {
        if *in_block_comment {
            match rest.find("*/") {
                Some(end) => {
                    rest = &rest[end + 2..];
                    *in_block_comment = false;
                }
                None => return code,
            }
        } else {
            match (rest.find("/*"), rest.find("//")) {
                (Some(block), Some(eol)) if eol < block => {
                    code.push_str(&rest[..eol]);
                    return code;
                }
                (Some(block), _) => {
                    code.push_str(&rest[..block]);
                    code.push(' ');
                    rest = &rest[block + 2..];
                    *in_block_comment = true;
                }
                (None, Some(eol)) => {
                    code.push_str(&rest[..eol]);
                    return code;
                }
                (None, None) => {
                    code.push_str(rest);
                    return code;
                }
            }
        }
    }
}
