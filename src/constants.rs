//! Constants used throughout generoo

/// Hidden directory under the project root that holds the persisted run configuration
pub const CONFIG_DIR: &str = ".generoo";

/// Base name of the persisted run configuration
pub const RUN_CONFIGURATION_STEM: &str = "run-configuration";

/// Run configuration file names in order of preference
pub const RUN_CONFIGURATION_FILENAMES: &[&str] =
    &["run-configuration.yml", "run-configuration.yaml", "run-configuration.json"];

/// Suffix of a template configuration file, prefixed by the full scope name
pub const TEMPLATE_CONFIG_SUFFIX: &str = "-template-config";

/// Extensions tried, in order, when looking for a template configuration
pub const TEMPLATE_CONFIG_EXTENSIONS: &[&str] = &["json", "yml", "yaml"];

/// Directories that never represent an archetype language, framework or version
pub const EXCLUDED_ARCHETYPE_DIRS: &[&str] = &["common", "__pycache__"];

/// Conditional path markers
pub mod markers {
    pub const CONDITIONAL_OPEN: &str = "{{#";
    pub const CONDITIONAL_CLOSE: &str = "}}";
}

/// Accepted spellings of the CLI goal and scope
pub mod commands {
    pub const GENERATE_OPTIONS: &[&str] = &["generate", "gen", "g"];
    pub const PROJECT_OPTIONS: &[&str] = &["project", "proj", "pro", "p"];
}

/// Prompt presentation
pub mod prompt {
    pub const YES_NO_OPTIONS: &[&str] = &["y", "n"];
    pub const VALIDATION_PREAMBLE: &str =
        "The following validations must be met to continue: ";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
