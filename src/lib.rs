/// Handles argument parsing and the generation workflow.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Project-wide constants.
pub mod constants;

/// Extension traits for std and ecosystem types.
pub mod ext;

/// Template parsing and rendering functionality.
pub mod renderer;

/// User input and interaction handling.
pub mod prompt;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Core template processing orchestration.
pub mod template;

/// Configuration handling for generoo templates.
pub mod config;

/// Answer validators
pub mod validation;

/// String case conversions applied to prompt answers.
pub mod transform;

/// Builds the run configuration from a template configuration.
pub mod resolver;

/// Saving and reloading run configurations.
pub mod persistence;

/// Choosing a template from an archetype library.
pub mod archetype;
