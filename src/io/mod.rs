//! File I/O for SD files and external property calculation.
//!
//! - [`sdf`] — Record splitting, field extraction and re-serialization
//! - [`calc`] — The `cxcalc` property calculator collaborator
//! - [`output_path`] — Where a scored file is written

use std::fs;
use std::path::{Path, PathBuf};

pub mod calc;
pub mod error;
pub mod sdf;

pub use calc::{CxCalc, PropertyCalculator};
pub use error::Error;

/// How to treat text after the last `$$$$` terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadMode {
    /// Drop an unterminated trailing fragment.
    #[default]
    Lenient,
    /// Fail with [`Error::UnterminatedRecord`].
    Strict,
}

/// Suffix appended to the input file stem to name the scored file.
pub const OUTPUT_SUFFIX: &str = "_out.sdf";

/// Path of the scored file for `input`.
///
/// Without `folder` the file lands next to the input. A relative `folder` is
/// resolved against the input's directory.
pub fn output_path(input: &Path, folder: Option<&Path>) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new(""));
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{stem}{OUTPUT_SUFFIX}");

    match folder {
        Some(dir) if dir.is_absolute() => dir.join(file_name),
        Some(dir) => parent.join(dir).join(file_name),
        None => parent.join(file_name),
    }
}

/// Like [`output_path`], creating the destination folder when missing.
pub fn prepare_output_path(input: &Path, folder: Option<&Path>) -> Result<PathBuf, Error> {
    let path = output_path(input, folder);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(path)
}
