//! Picking a template from an archetype library laid out as
//! `<root>/<language>/<framework>/<version>/`.

use std::path::{Path, PathBuf};

use crate::constants::EXCLUDED_ARCHETYPE_DIRS;
use crate::error::{Error, Result};
use crate::ioutils::list_subdirectories;
use crate::prompt::ChoicePrompter;

pub const LANGUAGE_PROMPT: &str = "Please choose a language:";
pub const FRAMEWORK_PROMPT: &str = "Please choose a framework:";
pub const VERSION_PROMPT: &str = "Please choose a version:";

/// A selected archetype
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archetype {
    pub language: String,
    pub framework: String,
    pub version: String,
}

impl Archetype {
    /// The template directory of this archetype under `root`
    pub fn template_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.language).join(&self.framework).join(&self.version)
    }
}

fn choose<P: ChoicePrompter + ?Sized>(provider: &P, prompt: &str, dir: &Path) -> Result<String> {
    let mut choices = list_subdirectories(dir, EXCLUDED_ARCHETYPE_DIRS)?;
    if choices.is_empty() {
        return Err(Error::MalformedConfig(format!(
            "no archetype directories found in '{}'",
            dir.display()
        )));
    }
    let index = provider.prompt_choice(prompt, &choices)?;
    if index >= choices.len() {
        return Err(Error::Other(anyhow::anyhow!(
            "choice {index} is out of range for '{prompt}'"
        )));
    }
    Ok(choices.swap_remove(index))
}

/// Asks for a language, a framework of that language and a version of that
/// framework, one level of the archetype tree at a time.
pub fn select<P: ChoicePrompter + ?Sized>(provider: &P, root: &Path) -> Result<Archetype> {
    let language = choose(provider, LANGUAGE_PROMPT, root)?;
    let framework = choose(provider, FRAMEWORK_PROMPT, &root.join(&language))?;
    let version = choose(provider, VERSION_PROMPT, &root.join(&language).join(&framework))?;

    log::debug!("Selected archetype {language}/{framework}/{version}");
    Ok(Archetype { language, framework, version })
}
