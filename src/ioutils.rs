use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::ext::PathExt;

/// Ensures the output file is safe to write to.
pub fn ensure_writable<P: AsRef<Path>>(output: P, force: bool) -> Result<()> {
    let output = output.as_ref();
    if output.exists() && !force {
        return Err(Error::OutputExists { path: output.display().to_string() });
    }
    Ok(())
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Works out where a generated file goes.
///
/// # Arguments
/// * `input` - The file (or bare module name) the output is derived from
/// * `outfile` - Explicit output path; wins over everything else
/// * `outdir` - Output directory; defaults to the directory of `input`
/// * `prefix` - Prepended to the stem of `input`
/// * `extension` - Appended to the stem of `input`, including the leading `.`
///
/// # Examples
/// ```
/// use embody::ioutils::make_output_name;
/// use std::path::{Path, PathBuf};
///
/// let out = make_output_name(Path::new("/usr/local/src/hello.c"), None, None, "Test", ".txt");
/// assert_eq!(out.unwrap(), PathBuf::from("/usr/local/src/Testhello.txt"));
/// ```
pub fn make_output_name(
    input: &Path,
    outfile: Option<&Path>,
    outdir: Option<&Path>,
    prefix: &str,
    extension: &str,
) -> Result<PathBuf> {
    if let Some(outfile) = outfile {
        return Ok(outfile.to_path_buf());
    }

    let stem = input.file_stem_checked()?;
    let file_name = format!("{prefix}{stem}{extension}");
    let dir = match outdir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    Ok(dir.join(file_name))
}
