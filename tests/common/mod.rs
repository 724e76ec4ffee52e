#![allow(dead_code)]

use git2::{IndexAddOption, Oid, Repository, Signature};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const TOP_CMAKELISTS: &str = r#"cmake_minimum_required(VERSION 3.25)

project(
    beman.exemplar # CMake Project Name, which is also the name of the top-level
    # targets (e.g., library, executable, etc.).
    DESCRIPTION "A Beman library exemplar"
    LANGUAGES CXX
)

add_subdirectory(src/beman/exemplar)
add_subdirectory(examples)
"#;

pub const EXAMPLE_SOURCE: &str = r#"#include <beman/exemplar/identity.hpp>

int main() { return beman::exemplar::identity()(0); }
"#;

/// Files of a minimal exemplar checkout.
pub const EXEMPLAR_FILES: [(&str, &str); 9] = [
    ("CMakeLists.txt", TOP_CMAKELISTS),
    ("README.md", "# beman.exemplar: A Beman library exemplar\n"),
    ("new_project_from_exemplar.py", "#!/usr/bin/env python3\n"),
    (
        "src/beman/exemplar/CMakeLists.txt",
        "add_library(beman.exemplar)\nadd_library(beman::exemplar ALIAS beman.exemplar)\n",
    ),
    (
        "src/beman/exemplar/identity.cpp",
        "#include <beman/exemplar/identity.hpp>\n",
    ),
    (
        "include/beman/exemplar/identity.hpp",
        "namespace beman::exemplar {\nstruct identity {};\n} // namespace beman::exemplar\n",
    ),
    (
        "tests/beman/exemplar/identity.test.cpp",
        "#include <beman/exemplar/identity.hpp>\n",
    ),
    ("examples/identity_direct_usage.cpp", EXAMPLE_SOURCE),
    ("examples/CMakeLists.txt", "target_link_libraries(example beman::exemplar)\n"),
];

pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let path = root.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// Commits everything in the working tree of `repo`.
pub fn commit_all(repo: &Repository, message: &str) -> Oid {
    let mut index = repo.index().unwrap();
    index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let signature = Signature::now("Test", "test@example.com").unwrap();
    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<_> = parent.iter().collect();
    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents).unwrap()
}

/// Creates a committed exemplar checkout in a temporary directory.
pub fn exemplar_checkout() -> (TempDir, Repository) {
    let temp_dir = TempDir::new().unwrap();
    write_files(temp_dir.path(), &EXEMPLAR_FILES);

    let repo = Repository::init(temp_dir.path()).unwrap();
    {
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();
    }
    commit_all(&repo, "Initial commit");
    (temp_dir, repo)
}

/// Relative paths of every file below `dir`.
pub fn files_below(dir: &Path) -> Vec<String> {
    walkdir::WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().strip_prefix(dir).unwrap().display().to_string())
        .collect()
}
