//! Orchestration of a complete adaptation run.

use git2::Oid;
use log::info;
use std::path::Path;

use crate::cmake::patch_cmakelists_file;
use crate::config::Config;
use crate::constants::{COMMIT_MESSAGE, EXTRA_TREES, PLACEHOLDER, SCRIPT_FILE, SUBTREES};
use crate::error::Result;
use crate::processor::substitute_trees;
use crate::readme::write_readme;
use crate::renderer::TemplateRenderer;
use crate::repository::ProjectRepository;

/// Turns the exemplar checkout at `root` into `config.project_name`.
///
/// # Flow
/// 1. Moves `<subtree>/exemplar` to `<subtree>/<project_name>` in git
/// 2. Regenerates README.md
/// 3. Patches CMakeLists.txt
/// 4. Replaces the placeholder in the moved subtrees and examples/
/// 5. Stages modified files, untracks the bootstrap script and commits
///
/// The first failing step aborts the run. Earlier changes stay on disk
/// and in the index; nothing is rolled back.
///
/// # Returns
/// * `Result<Oid>` - Id of the created commit
pub fn adapt_project<P: AsRef<Path>>(
    root: P,
    config: &Config,
    renderer: &dyn TemplateRenderer,
) -> Result<Oid> {
    let root = root.as_ref();
    let repository = ProjectRepository::open(root)?;

    // Move subtrees before making any concrete changes.
    for tree in SUBTREES {
        let from = format!("{tree}/{PLACEHOLDER}");
        let to = format!("{tree}/{}", config.project_name);
        info!("Moving '{from}' to '{to}'");
        repository.move_dir(&from, &to)?;
    }

    info!("Writing README.md");
    write_readme(root, renderer, config)?;

    info!("Patching CMakeLists.txt");
    patch_cmakelists_file(root, config)?;

    let trees: Vec<String> = SUBTREES
        .iter()
        .map(|tree| format!("{tree}/{}", config.project_name))
        .chain(EXTRA_TREES.iter().map(|tree| tree.to_string()))
        .collect();
    let report = substitute_trees(root, &trees, &config.project_name)?;
    info!(
        "Replaced {} occurrences of '{PLACEHOLDER}' in {} files",
        report.replacements,
        report.files.len()
    );

    let staged = repository.stage_modified()?;
    info!("Staged {} modified files", staged.len());

    repository.untrack(SCRIPT_FILE)?;

    let oid = repository.commit(COMMIT_MESSAGE, &config.owner)?;
    info!("Committed {oid}");
    Ok(oid)
}
