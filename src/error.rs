use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    /// A declaration-shaped line that does not have the `type name(params);` form.
    #[error("Malformed signature on line {line}: '{text}' ({reason})")]
    MalformedSignatureLine { line: usize, text: String, reason: String },

    /// A descriptor that would produce malformed C text.
    #[error("Inconsistent descriptor: field '{field}' {reason}")]
    InconsistentDescriptor { field: String, reason: String },

    #[error("Descriptor file '{path}' does not exist.")]
    DescriptorNotFound { path: String },

    #[error("Descriptor file '{path}' must be YAML (.yaml, .yml) or JSON (.json).")]
    UnsupportedDescriptorFormat { path: String },

    #[error("Cannot proceed: output file '{path}' already exists. Use --force to overwrite it.")]
    OutputExists { path: String },

    #[error("Header and source would both be written to '{path}'. Give --outfile a header path.")]
    OutputCollision { path: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the crate error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
