//! Bulk substitution of the placeholder name across whole directory trees.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants::PLACEHOLDER;
use crate::error::{Error, Result};

/// Summary of one tree rewrite.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubstitutionReport {
    /// Every file that was rewritten, in walk order
    pub files: Vec<PathBuf>,
    /// Total number of placeholder occurrences replaced
    pub replacements: usize,
}

impl SubstitutionReport {
    fn merge(&mut self, other: SubstitutionReport) {
        self.files.extend(other.files);
        self.replacements += other.replacements;
    }
}

/// Replaces every literal occurrence of the placeholder with `project_name`.
///
/// # Returns
/// * `(String, usize)` - New content and the number of replaced occurrences
pub fn replace_placeholder(content: &str, project_name: &str) -> (String, usize) {
    let count = content.matches(PLACEHOLDER).count();
    (content.replace(PLACEHOLDER, project_name), count)
}

/// Converts `\r\n` and lone `\r` line terminators to `\n`.
pub fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

fn rewrite_file(path: &Path, project_name: &str) -> Result<usize> {
    let content = normalize_newlines(&fs::read_to_string(path).map_err(Error::IoError)?);
    let (content, count) = replace_placeholder(&content, project_name);
    fs::write(path, content).map_err(Error::IoError)?;
    Ok(count)
}

/// Rewrites every file below `tree` in place.
///
/// Directories are traversed, only files are rewritten. Symlinks to files
/// rewrite their target. A missing `tree` yields an empty report.
pub fn substitute_tree<P: AsRef<Path>>(
    tree: P,
    project_name: &str,
) -> Result<SubstitutionReport> {
    let tree = tree.as_ref();
    let mut report = SubstitutionReport::default();
    if !tree.exists() {
        debug!("Skipping missing tree {}", tree.display());
        return Ok(report);
    }

    for entry in WalkDir::new(tree).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let count = rewrite_file(path, project_name)?;
        debug!("Rewrote {} ({count} replacements)", path.display());
        report.files.push(path.to_path_buf());
        report.replacements += count;
    }
    Ok(report)
}

/// Rewrites each tree of `trees`, resolved against `root`.
pub fn substitute_trees<P, S>(
    root: P,
    trees: &[S],
    project_name: &str,
) -> Result<SubstitutionReport>
where
    P: AsRef<Path>,
    S: AsRef<Path>,
{
    let mut report = SubstitutionReport::default();
    for tree in trees {
        report.merge(substitute_tree(root.as_ref().join(tree), project_name)?);
    }
    Ok(report)
}
