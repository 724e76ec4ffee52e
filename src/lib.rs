//! beman-new adapts a checkout of the Beman exemplar C++ library template
//! into a newly named project and commits the result.

/// Orchestration of a complete adaptation run
pub mod adapter;

/// Command-line interface module
pub mod cli;

/// Top-level CMakeLists.txt patching
pub mod cmake;

/// Resolved run configuration
pub mod config;

/// Fixed names of the exemplar layout
pub mod constants;

/// Error types and handling
pub mod error;

/// Logging setup
pub mod logger;

/// Placeholder substitution across directory trees
pub mod processor;

/// README.md generation
pub mod readme;

/// MiniJinja template rendering
pub mod renderer;

/// Git index and commit operations
pub mod repository;
