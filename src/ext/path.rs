use std::path::Path;

use crate::error::{Error, Result};

/// Extension trait for Path to provide checked string conversions
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains
    /// invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use embody::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("Filled.h");
    /// assert_eq!(path.to_str_checked().unwrap(), "Filled.h");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Returns the file stem as a string slice.
    ///
    /// # Returns
    /// * `Err(Error)` - If the path has no file name or it is not valid Unicode
    fn file_stem_checked(&self) -> Result<&str>;

    /// Returns the final component as a string slice.
    fn file_name_checked(&self) -> Result<&str>;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn file_stem_checked(&self) -> Result<&str> {
        self.file_stem().and_then(|stem| stem.to_str()).ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' has no usable file name",
                self.display()
            ))
        })
    }

    fn file_name_checked(&self) -> Result<&str> {
        self.file_name().and_then(|name| name.to_str()).ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' has no usable file name",
                self.display()
            ))
        })
    }
}
