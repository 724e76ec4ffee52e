//! Generation of the new project's README.md.

use log::debug;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::constants::README_FILE;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;

/// README template. Slots: `project_name`, `owner`, `paper`,
/// `description` and `cpp_version`.
pub const README_TEMPLATE: &str = include_str!("../templates/README.md.j2");

/// Renders the README for the given configuration.
pub fn render_readme(renderer: &dyn TemplateRenderer, config: &Config) -> Result<String> {
    let context = serde_json::to_value(config)?;
    renderer.render(README_TEMPLATE, &context)
}

/// Replaces `<root>/README.md` with a freshly rendered one. Any previous
/// content is discarded.
pub fn write_readme<P: AsRef<Path>>(
    root: P,
    renderer: &dyn TemplateRenderer,
    config: &Config,
) -> Result<()> {
    let path = root.as_ref().join(README_FILE);
    let content = render_readme(renderer, config)?;
    debug!("Writing file: {}", path.display());
    fs::write(path, content).map_err(Error::IoError)
}
