//! Input normalization and output path mapping.
//!
//! Every input is turned into a path relative to the base directory, and the
//! page for `a/b.php` lands at `<output>/a/b.php.html`. Links between pages
//! are computed from those relative output paths only, so the generated
//! tree can be opened straight from disk.

use crate::error::{EngineError, Result};
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Resolves `input` against `base` and expresses it relative to `base`.
///
/// Inputs outside `base` keep `..` components.
///
/// # Errors
///
/// Returns [`EngineError::FileRead`] when the input does not exist.
pub fn normalize_input(input: &Path, base: &Path) -> Result<PathBuf> {
    let canonical = base
        .join(input)
        .canonicalize()
        .map_err(|e| EngineError::FileRead {
            path: input.to_path_buf(),
            source: e,
        })?;
    let base = base.canonicalize().map_err(|e| EngineError::FileRead {
        path: base.to_path_buf(),
        source: e,
    })?;
    Ok(pathdiff::diff_paths(&canonical, &base).unwrap_or(canonical))
}

/// Page path for a normalized input, relative to the output directory.
///
/// Only normal components are kept, so `../lib/x.php` maps to
/// `lib/x.php.html` and never escapes the output directory.
#[must_use]
pub fn output_relative(relative: &Path) -> PathBuf {
    let mut out: PathBuf = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect();
    let mut name = out.file_name().map(OsString::from).unwrap_or_default();
    name.push(".html");
    out.set_file_name(name);
    out
}

/// Link from the page at `from` to the page at `to`, both relative to the
/// output directory. Always uses `/` separators.
#[must_use]
pub fn link_href(from: &Path, to: &Path) -> String {
    let from_dir = from.parent().unwrap_or_else(|| Path::new(""));
    let relative = pathdiff::diff_paths(to, from_dir).unwrap_or_else(|| to.to_path_buf());
    to_slash(&relative)
}

/// Extension used to tag the code column (no dot, empty if none).
#[must_use]
pub fn extension(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// File name shown as page title.
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| to_slash(path), |n| n.to_string_lossy().into_owned())
}

/// `path` rendered with `/` separators.
#[must_use]
pub fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
