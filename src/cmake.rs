//! Patching of the top-level CMakeLists.txt.
//!
//! The build descriptor is handled lexically: a line mentioning the
//! `DESCRIPTION` directive is rewritten with the new description, every
//! other line gets the placeholder replaced.

use log::debug;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::constants::{CMAKE_FILE, DESCRIPTION_MARKER, PLACEHOLDER};
use crate::error::{Error, Result};
use crate::processor::normalize_newlines;

/// Formats the description directive, indented to `column`.
pub fn description_line(column: usize, description: &str) -> String {
    format!("{}{DESCRIPTION_MARKER} \"{description}\"\n", " ".repeat(column))
}

/// Returns the patched build descriptor.
///
/// # Arguments
/// * `content` - Original CMakeLists.txt content
/// * `config` - Supplies the project name and the description
pub fn patch_cmakelists(content: &str, config: &Config) -> String {
    normalize_newlines(content)
        .split_inclusive('\n')
        .map(|line| match line.find(DESCRIPTION_MARKER) {
            Some(column) => description_line(column, &config.description),
            None => line.replace(PLACEHOLDER, &config.project_name),
        })
        .collect()
}

/// Rewrites `<root>/CMakeLists.txt` in place.
///
/// # Errors
/// * `Error::MissingPathError` if the build descriptor does not exist
/// * `Error::IoError` if it cannot be read or written
pub fn patch_cmakelists_file<P: AsRef<Path>>(root: P, config: &Config) -> Result<()> {
    let path = root.as_ref().join(CMAKE_FILE);
    if !path.is_file() {
        return Err(Error::MissingPathError { path: path.display().to_string() });
    }

    let content = fs::read_to_string(&path).map_err(Error::IoError)?;
    debug!("Patching file: {}", path.display());
    fs::write(&path, patch_cmakelists(&content, config)).map_err(Error::IoError)
}
