//! Command-line interface implementation for beman-new.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};

use crate::constants::{DEFAULT_CPP_VERSION, DEFAULT_DESCRIPTION, DEFAULT_PAPER};

/// Command-line arguments structure for beman-new.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Adapts the Beman exemplar project for your use as a brand new project. Leaves 'TODO' in several places that need your attention (especially in README.md).",
    long_about = None
)]
pub struct Args {
    /// The name of your new project. This should be the same name as the
    /// Github repo name, for example 'my_proj' in 'git@github.com:me/my_proj.git'
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// The user or group in which this project's Github repo is found, for
    /// example 'me' in 'git@github.com:me/my_proj.git'. Defaults to your
    /// username on this system
    #[arg(long)]
    pub owner: Option<String>,

    /// The paper that this Beman project is implementing (e.g. P1234R5)
    #[arg(long, default_value = DEFAULT_PAPER)]
    pub paper: String,

    /// The C++ version required to build this project
    #[arg(long, default_value_t = DEFAULT_CPP_VERSION)]
    pub cpp_version: u32,

    /// The description of this project that should appear in the title of your README.md
    #[arg(long, default_value = DEFAULT_DESCRIPTION)]
    pub desc: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if the project name is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
