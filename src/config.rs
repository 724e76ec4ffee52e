//! Resolved configuration for a single adaptation run.
//! Built once from the command line; every later step only reads it.

use log::debug;
use serde::Serialize;

use crate::cli::Args;
use crate::error::{Error, Result};

/// Values interpolated into the README, the build descriptor and the
/// rewritten sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub project_name: String,
    pub owner: String,
    pub paper: String,
    pub cpp_version: u32,
    pub description: String,
}

impl Config {
    /// Builds the configuration from parsed arguments.
    ///
    /// # Arguments
    /// * `args` - Parsed command line arguments
    /// * `default_owner` - Owner used when `--owner` was not given
    ///
    /// # Errors
    /// * `Error::ConfigError` if neither an owner nor a default is available
    pub fn from_args(args: Args, default_owner: Option<String>) -> Result<Self> {
        let owner = match args.owner.or(default_owner) {
            Some(owner) => owner,
            None => {
                return Err(Error::ConfigError(
                    "cannot determine the current user name, pass --owner".to_string(),
                ))
            }
        };

        let config = Self {
            project_name: args.project_name,
            owner,
            paper: args.paper,
            cpp_version: args.cpp_version,
            description: args.desc,
        };
        debug!("Resolved configuration: {config:?}");
        Ok(config)
    }
}

/// Environment variables holding the login name, in lookup order.
pub const USER_VARIABLES: [&str; 4] = ["LOGNAME", "USER", "LNAME", "USERNAME"];

/// Returns the first non-empty login name `lookup` yields for
/// [`USER_VARIABLES`].
pub fn user_from_env<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    USER_VARIABLES.iter().filter_map(|&var| lookup(var)).find(|name| !name.is_empty())
}

/// Returns the account name of the user running the process.
///
/// The login environment variables are checked first, then the account
/// database entry of the current user.
pub fn current_user() -> Option<String> {
    user_from_env(|var| std::env::var(var).ok())
        .or_else(|| whoami::fallible::username().ok())
        .filter(|name| !name.is_empty())
}
