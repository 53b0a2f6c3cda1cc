use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON document. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML document. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to walk the template directory. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Failed to read user input. Original error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    /// A required field is missing or a token is not recognized. Aborts generation.
    #[error("Malformed template configuration: {0}.")]
    MalformedConfig(String),

    /// The previous run configuration could not be used. Never aborts generation.
    #[error("No usable run configuration at '{}': {reason}.", path.display())]
    MissingPriorConfig { path: PathBuf, reason: String },

    /// A numeric validation was applied to input that is not an integer.
    #[error("Expected an integer but got '{input}'. Original error: {source}")]
    NumericParse {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid regular expression in validation. Original error: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Prompt '{prompt}' did not receive a valid answer after {attempts} attempts.")]
    RetriesExhausted { prompt: String, attempts: usize },

    #[error("No scripted answer left for prompt '{0}'.")]
    InputExhausted(String),

    #[error("Unsupported command: goal '{goal}' with scope '{scope}'.")]
    UnsupportedCommand { goal: String, scope: String },

    #[error("Cannot proceed: no template, template configuration or archetype directory given.")]
    TemplateNotSpecified,

    #[error("No template configuration found in '{template_dir}'. Tried: {config_files}.")]
    TemplateConfigNotFound { template_dir: String, config_files: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with generoo's Error as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
