//! beman-new entry point.
//! Parses arguments, sets up logging and runs the adaptation in the
//! current directory.

use beman_new::{
    adapter::adapt_project,
    cli::{get_args, Args},
    config::{current_user, Config},
    error::{default_error_handler, Result},
    logger::init_logger,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::from_args(args, current_user())?;
    let renderer = MiniJinjaRenderer::new();

    adapt_project(".", &config, &renderer)?;

    println!(
        r#"Success!
All references to 'exemplar' have been replaced with '{}'
throughout the project, and new_project_from_exemplar.py has been removed
from version control. The results of these changes have been committed.
Please go replace all instances of 'TODO' with the appropriate text,
especially in README.md."#,
        config.project_name
    );
    Ok(())
}
