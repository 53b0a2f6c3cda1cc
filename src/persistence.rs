//! Persisting the run configuration under the generated project so that a
//! later regeneration can reuse its answers.

use std::path::{Path, PathBuf};

use crate::config::{ConfigFormat, RunConfiguration};
use crate::constants::{CONFIG_DIR, RUN_CONFIGURATION_FILENAMES, RUN_CONFIGURATION_STEM};
use crate::error::{Error, Result};
use crate::ioutils;

/// Path of the persisted run configuration for `format` under `project_root`.
pub fn run_configuration_path(project_root: &Path, format: ConfigFormat) -> PathBuf {
    project_root
        .join(CONFIG_DIR)
        .join(format!("{RUN_CONFIGURATION_STEM}.{}", format.extension()))
}

/// Writes `run_config` to `<project_root>/.generoo/run-configuration.<ext>`.
///
/// The configuration directory may already exist. Keys are written sorted and
/// any previous content is replaced.
pub fn save(
    project_root: &Path,
    run_config: &RunConfiguration,
    format: ConfigFormat,
) -> Result<PathBuf> {
    let config_dir = project_root.join(CONFIG_DIR);
    if config_dir.is_dir() {
        log::info!("Generoo configuration directory already exists.");
    } else {
        log::info!("Creating generoo configuration directory...");
        ioutils::create_dir_all(&config_dir)?;
    }

    let mut sorted = run_config.clone();
    sorted.sort_keys();

    let path = run_configuration_path(project_root, format);
    ioutils::write_file(&format.serialize(&sorted)?, &path)?;
    log::info!("Saved run configuration to '{}'", path.display());
    Ok(path)
}

/// Reads a persisted run configuration. Every failure is reported as
/// `MissingPriorConfig` so callers can fall back to a fresh run.
pub fn load(path: &Path) -> Result<RunConfiguration> {
    let missing = |reason: String| Error::MissingPriorConfig { path: path.to_path_buf(), reason };

    let content = std::fs::read_to_string(path).map_err(|e| missing(e.to_string()))?;
    ConfigFormat::from_path(path)
        .parse::<Option<RunConfiguration>>(&content)
        .map(Option::unwrap_or_default)
        .map_err(|e| missing(e.to_string()))
}

/// Finds the prior run configuration of a project.
///
/// An explicit path wins. Otherwise the known file names are tried in order
/// inside `<project_root>/.generoo`.
pub fn locate_prior(project_root: &Path, explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let config_dir = project_root.join(CONFIG_DIR);
    RUN_CONFIGURATION_FILENAMES
        .iter()
        .map(|name| config_dir.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| Error::MissingPriorConfig {
            path: config_dir,
            reason: format!("none of {} exists", RUN_CONFIGURATION_FILENAMES.join(", ")),
        })
}

/// Loads the prior run configuration, if any.
pub fn load_prior(project_root: &Path, explicit: Option<&Path>) -> Result<RunConfiguration> {
    load(&locate_prior(project_root, explicit)?)
}
