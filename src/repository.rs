//! Git operations on the project being adapted.
//!
//! All changes go through the repository index: directories are moved the
//! way `git mv` moves them, modified files are staged, the bootstrap script
//! is untracked and the result is committed on `HEAD`.

use git2::{Commit, Delta, ErrorCode, Index, IndexEntry, Oid, Repository, Signature};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Number of bits of an index entry's flags that hold the path length.
const PATH_LENGTH_MASK: u16 = 0x0fff;

/// Git repository rooted at the project directory.
pub struct ProjectRepository {
    root: PathBuf,
    repository: Repository,
}

impl ProjectRepository {
    /// Opens the repository whose working tree is `root`.
    ///
    /// # Errors
    /// * `Error::RepositoryError` if `root` is not a git working tree
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        let repository = Repository::open(root).map_err(|source| Error::RepositoryError {
            path: root.display().to_string(),
            source,
        })?;
        debug!("Opened repository at '{}'", root.display());
        Ok(Self { root: root.to_path_buf(), repository })
    }

    /// Moves the directory `from` to `to`, both relative to the root, and
    /// records the move in the index. Tracked entries keep their staged
    /// content; nothing is committed.
    ///
    /// # Errors
    /// * `Error::MissingPathError` if `from` does not exist on disk
    /// * `Error::NotTrackedError` if nothing below `from` is tracked
    /// * `Error::IoError` if `to` already exists or the rename fails
    pub fn move_dir(&self, from: &str, to: &str) -> Result<()> {
        let source = self.root.join(from);
        let target = self.root.join(to);
        if !source.is_dir() {
            return Err(Error::MissingPathError { path: source.display().to_string() });
        }
        if target.exists() {
            return Err(Error::IoError(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("destination '{}' already exists", target.display()),
            )));
        }

        let mut index = self.repository.index()?;
        let prefix = format!("{}/", from.trim_end_matches('/'));
        let moved: Vec<IndexEntry> =
            index.iter().filter(|entry| entry.path.starts_with(prefix.as_bytes())).collect();
        if moved.is_empty() {
            return Err(Error::NotTrackedError { path: from.to_string() });
        }

        fs::rename(&source, &target).map_err(Error::IoError)?;

        let new_prefix = format!("{}/", to.trim_end_matches('/'));
        for entry in moved {
            let old_path = String::from_utf8_lossy(&entry.path).into_owned();
            let new_path = format!("{new_prefix}{}", &old_path[prefix.len()..]);
            index.remove_path(Path::new(&old_path))?;
            index.add(&rekey_entry(entry, &new_path))?;
            debug!("Moved '{old_path}' to '{new_path}'");
        }
        index.write()?;
        Ok(())
    }

    /// Lists tracked paths whose working tree content differs from the index.
    pub fn modified_paths(&self) -> Result<Vec<(PathBuf, Delta)>> {
        let index = self.repository.index()?;
        let diff = self.repository.diff_index_to_workdir(Some(&index), None)?;
        let paths = diff
            .deltas()
            .filter(|delta| {
                matches!(delta.status(), Delta::Modified | Delta::Typechange | Delta::Deleted)
            })
            .filter_map(|delta| {
                delta.old_file().path().map(|path| (path.to_path_buf(), delta.status()))
            })
            .collect();
        Ok(paths)
    }

    /// Stages every modified-but-unstaged path.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - The staged paths
    pub fn stage_modified(&self) -> Result<Vec<PathBuf>> {
        let modified = self.modified_paths()?;
        let mut index = self.repository.index()?;
        for (path, status) in &modified {
            if *status == Delta::Deleted {
                index.remove_path(path)?;
            } else {
                index.add_path(path)?;
            }
            debug!("Staged '{}'", path.display());
        }
        index.write()?;
        Ok(modified.into_iter().map(|(path, _)| path).collect())
    }

    /// Removes `path` from the index. The file itself stays on disk.
    ///
    /// # Errors
    /// * `Error::NotTrackedError` if `path` is not in the index
    pub fn untrack<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut index = self.repository.index()?;
        if index.get_path(path, 0).is_none() {
            return Err(Error::NotTrackedError { path: path.display().to_string() });
        }
        index.remove_path(path)?;
        index.write()?;
        debug!("Untracked '{}'", path.display());
        Ok(())
    }

    /// Commits the index on `HEAD`.
    ///
    /// The configured git identity is used as author and committer; when
    /// none is configured `fallback_author` is used with a local address.
    ///
    /// # Errors
    /// * `Error::NothingToCommitError` if the index matches `HEAD`
    pub fn commit(&self, message: &str, fallback_author: &str) -> Result<Oid> {
        let mut index = self.repository.index()?;
        let tree_id = write_tree(&mut index)?;
        let tree = self.repository.find_tree(tree_id)?;

        let parent = self.head_commit()?;
        if let Some(parent) = &parent {
            if parent.tree_id() == tree_id {
                return Err(Error::NothingToCommitError);
            }
        }

        let signature = match self.repository.signature() {
            Ok(signature) => signature,
            Err(_) => Signature::now(fallback_author, &format!("{fallback_author}@localhost"))?,
        };
        let parents: Vec<&Commit> = parent.iter().collect();
        let oid =
            self.repository.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;
        debug!("Created commit {oid}");
        Ok(oid)
    }

    fn head_commit(&self) -> Result<Option<Commit<'_>>> {
        match self.repository.head() {
            Ok(head) => Ok(Some(head.peel_to_commit()?)),
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => Ok(None),
            Err(e) => Err(Error::Git2Error(e)),
        }
    }
}

fn write_tree(index: &mut Index) -> Result<Oid> {
    index.write()?;
    Ok(index.write_tree()?)
}

/// Returns `entry` stored under `path`, with the path length flags updated.
fn rekey_entry(mut entry: IndexEntry, path: &str) -> IndexEntry {
    let length = path.len().min(PATH_LENGTH_MASK as usize) as u16;
    entry.flags = (entry.flags & !PATH_LENGTH_MASK) | length;
    entry.path = path.as_bytes().to_vec();
    entry
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str) -> IndexEntry {
        IndexEntry {
            ctime: git2::IndexTime::new(0, 0),
            mtime: git2::IndexTime::new(0, 0),
            dev: 0,
            ino: 0,
            mode: 0o100644,
            uid: 0,
            gid: 0,
            file_size: 0,
            id: Oid::zero(),
            flags: path.len() as u16,
            flags_extended: 0,
            path: path.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_rekey_entry_updates_path_length() {
        let moved = rekey_entry(entry("src/beman/exemplar/a.cpp"), "src/beman/x/a.cpp");
        assert_eq!(moved.path, b"src/beman/x/a.cpp".to_vec());
        assert_eq!(moved.flags & PATH_LENGTH_MASK, "src/beman/x/a.cpp".len() as u16);
    }
}
