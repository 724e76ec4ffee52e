//! Common constants describing the exemplar layout.

/// Name used throughout the template project, replaced by the new project name
pub const PLACEHOLDER: &str = "exemplar";

/// Roots each holding an `exemplar` child directory
pub const SUBTREES: [&str; 3] = ["src/beman", "include/beman", "tests/beman"];

/// Trees rewritten in addition to the relocated subtrees
pub const EXTRA_TREES: [&str; 1] = ["examples"];

/// Generated documentation file
pub const README_FILE: &str = "README.md";

/// Top-level build descriptor
pub const CMAKE_FILE: &str = "CMakeLists.txt";

/// Marker of the build descriptor's description directive
pub const DESCRIPTION_MARKER: &str = "DESCRIPTION";

/// Bootstrap script shipped with the exemplar, only needed once
pub const SCRIPT_FILE: &str = "new_project_from_exemplar.py";

pub const COMMIT_MESSAGE: &str = "Ran new_project_from_exemplar.py on project.";

pub const DEFAULT_PAPER: &str = "TODO";
pub const DEFAULT_DESCRIPTION: &str = "TODO";
pub const DEFAULT_CPP_VERSION: u32 = 26;
