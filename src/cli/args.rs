use crate::constants::{
    commands::{GENERATE_OPTIONS, PROJECT_OPTIONS},
    exit_codes, verbosity,
};
use crate::error::{Error, Result};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for generoo.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// What to do: generate (gen, g).
    #[arg(value_name = "GOAL")]
    pub goal: String,

    /// What to act on: project (proj, pro, p).
    #[arg(value_name = "SCOPE")]
    pub scope: String,

    /// Name of the project; also the directory it is generated into.
    #[arg(value_name = "NAME")]
    pub name: PathBuf,

    /// Run without merging a previous run configuration.
    #[arg(short, long = "no-config")]
    pub no_config: bool,

    /// Accept previous answers without asking again.
    #[arg(short, long = "auto-config")]
    pub auto_config: bool,

    /// Template configuration file.
    #[arg(short = 'c', long = "template-config", value_name = "PATH")]
    pub template_config: Option<PathBuf>,

    /// Template directory.
    #[arg(short, long, value_name = "DIR")]
    pub template: Option<PathBuf>,

    /// Previous run configuration to reuse instead of the project's own.
    #[arg(short, long = "run-configuration", value_name = "PATH")]
    pub run_configuration: Option<PathBuf>,

    /// Archetype library to choose a template from.
    #[arg(long, value_name = "DIR")]
    pub archetypes: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Recognized goal and scope pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GenerateProject,
}

impl Action {
    /// Prefix of the template configuration file used by this action
    pub fn config_scope(&self) -> &'static str {
        match self {
            Action::GenerateProject => "project",
        }
    }
}

impl Args {
    /// Maps the free-form goal and scope to an action.
    pub fn action(&self) -> Result<Action> {
        let matches = |options: &[&str], token: &str| {
            options.iter().any(|option| option.eq_ignore_ascii_case(token))
        };
        if matches(GENERATE_OPTIONS, &self.goal) && matches(PROJECT_OPTIONS, &self.scope) {
            Ok(Action::GenerateProject)
        } else {
            Err(Error::UnsupportedCommand { goal: self.goal.clone(), scope: self.scope.clone() })
        }
    }
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
