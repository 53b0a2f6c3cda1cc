use std::path::PathBuf;

use crate::{error::Result, ioutils};

#[derive(Debug)]
pub enum TemplateOperation {
    /// Rendered text content for `target`
    Write { target: PathBuf, content: String, target_exists: bool },
    /// Non-text template copied byte for byte
    Copy { source: PathBuf, target: PathBuf, target_exists: bool },
    /// A conditional marker in the destination was not satisfied
    Skip { source: PathBuf, destination: String },
}

impl TemplateOperation {
    /// Returns the target path for this operation.
    ///
    /// # Returns
    /// * `Option<&PathBuf>` - The target path, or None when nothing is written
    pub fn target_path(&self) -> Option<&PathBuf> {
        match self {
            TemplateOperation::Write { target, .. } => Some(target),
            TemplateOperation::Copy { target, .. } => Some(target),
            TemplateOperation::Skip { .. } => None,
        }
    }

    /// Performs the operation, creating parent directories on demand and
    /// overwriting any existing file.
    pub fn execute(&self) -> Result<()> {
        match self {
            TemplateOperation::Write { target, content, .. } => {
                ioutils::write_file(content, target)
            }
            TemplateOperation::Copy { source, target, .. } => {
                ioutils::copy_file(source, target)
            }
            TemplateOperation::Skip { .. } => Ok(()),
        }
    }

    /// Gets a message describing the operation.
    pub fn get_message(&self) -> String {
        let overwriting = |exists: bool| if exists { " (overwriting existing file)" } else { "" };

        match self {
            TemplateOperation::Write { target, target_exists, .. } => {
                format!("Writing '{}'{}", target.display(), overwriting(*target_exists))
            }
            TemplateOperation::Copy { source, target, target_exists } => format!(
                "Copying '{}' to '{}'{}",
                source.display(),
                target.display(),
                overwriting(*target_exists)
            ),
            TemplateOperation::Skip { source, destination } => format!(
                "Skipping '{}': conditions for '{destination}' are not met",
                source.display()
            ),
        }
    }
}
