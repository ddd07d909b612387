use std::path::Path;

/// Turns a section title into a boxed comment banner.
///
/// The box is as wide as the title plus a fixed margin:
///
/// ```text
/// /************
///  * Includes *
///  ************/
/// ```
pub fn section_header(title: &str) -> String {
    let over_under = "*".repeat(title.chars().count());
    [
        format!("/**{over_under}**"),
        format!(" * {title} *"),
        format!(" **{over_under}**/"),
    ]
    .join("\n")
}

/// Derives the include-guard token for a file name.
///
/// Only the base name is used. Letters and digits are uppercased, everything else
/// (including the extension's `.`) becomes `_`, and the token is wrapped as
/// `__<NAME>_H`. A name that already ends in `_H` once mapped (`Filled.h`) is not
/// suffixed twice.
pub fn include_guard(filename: &str) -> String {
    let base = Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(filename);

    let mapped: String = base
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect();

    if mapped.ends_with("_H") {
        format!("__{mapped}")
    } else {
        format!("__{mapped}_H")
    }
}
