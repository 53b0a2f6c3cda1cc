use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::{Mapping, RunConfiguration};
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::renderer::TemplateRenderer;

use super::conditions;
use super::operation::TemplateOperation;

/// Walks template files and materializes them against a run configuration.
pub struct TemplateProcessor<'a> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,
    run_config: &'a RunConfiguration,

    /// Other
    context: serde_json::Value,
    excluded: Vec<PathBuf>,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, run_config: &'a RunConfiguration) -> Self {
        let context = serde_json::Value::Object(
            run_config.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        );
        Self { engine, run_config, context, excluded: Vec::new() }
    }

    /// Never emit `path` while walking, used for the template configuration
    /// file when it lives inside the template tree.
    pub fn excluding<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        self.excluded.push(fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()));
        self
    }

    fn is_excluded(&self, path: &Path) -> bool {
        if self.excluded.is_empty() {
            return false;
        }
        let path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        self.excluded.contains(&path)
    }

    /// Generates the project under `project_root`.
    ///
    /// With `mappings`, each mapping is handled on its own: a template
    /// directory is walked into its destination directory, a template file is
    /// rendered to its (templated) destination. Without mappings the whole
    /// template root is walked into the project root, or rendered as a single
    /// file when the root is a file.
    ///
    /// # Returns
    /// * `Result<Vec<TemplateOperation>>` - Every operation performed, skipped files included
    pub fn fill(
        &self,
        template_root: &Path,
        project_root: &Path,
        mappings: &[Mapping],
    ) -> Result<Vec<TemplateOperation>> {
        let mut operations = Vec::new();

        if mappings.is_empty() {
            if template_root.is_dir() {
                self.fill_dir(template_root, project_root, &mut operations)?;
            } else {
                let file_name = template_root.file_name().ok_or_else(|| {
                    Error::MalformedConfig(format!(
                        "template '{}' is neither a directory nor a file",
                        template_root.display()
                    ))
                })?;
                operations.push(self.apply(template_root, &project_root.join(file_name))?);
            }
            return Ok(operations);
        }

        for mapping in mappings {
            let template = template_root.join(&mapping.template);
            let destination = project_root.join(&mapping.destination);

            if template.is_dir() {
                if destination.exists() && !destination.is_dir() {
                    return Err(Error::MalformedConfig(format!(
                        "{} is a directory. {} must be a directory",
                        template.display(),
                        destination.display()
                    )));
                }
                self.fill_dir(&template, &destination, &mut operations)?;
            } else if template.is_file() {
                operations.push(self.apply(&template, &destination)?);
            } else {
                return Err(Error::MalformedConfig(format!(
                    "mapping template '{}' does not exist",
                    template.display()
                )));
            }
        }
        Ok(operations)
    }

    /// Walks `template_dir` bottom-up, files only. Symlinked files count as
    /// files. Directories are created implicitly by the files written into them.
    fn fill_dir(
        &self,
        template_dir: &Path,
        destination_dir: &Path,
        operations: &mut Vec<TemplateOperation>,
    ) -> Result<()> {
        for dir_entry in WalkDir::new(template_dir).contents_first(true) {
            let dir_entry = dir_entry?;
            if !dir_entry.path().is_file() || self.is_excluded(dir_entry.path()) {
                continue;
            }
            let relative = dir_entry.path().strip_prefix(template_dir).map_err(|e| {
                Error::Other(anyhow::anyhow!(
                    "'{}' is outside of '{}': {e}",
                    dir_entry.path().display(),
                    template_dir.display()
                ))
            })?;
            operations.push(self.apply(dir_entry.path(), &destination_dir.join(relative))?);
        }
        Ok(())
    }

    fn apply(&self, source: &Path, destination: &Path) -> Result<TemplateOperation> {
        let operation = self.process(source, destination)?;
        operation.execute()?;
        match operation {
            TemplateOperation::Skip { .. } => log::debug!("{}", operation.get_message()),
            _ => log::info!("{}", operation.get_message()),
        }
        Ok(operation)
    }

    /// Decides what to do with one template file.
    ///
    /// The conditional markers of `destination` are evaluated first; a file
    /// whose conditions fail is skipped. Otherwise the remaining destination
    /// is rendered as a path and the file content is rendered as text, or
    /// copied verbatim when it is not UTF-8.
    ///
    /// # Arguments
    /// * `source` - The template file
    /// * `destination` - Unrendered destination path, markers included
    ///
    /// # Returns
    /// * `Result<TemplateOperation>` - The operation to perform
    pub fn process(&self, source: &Path, destination: &Path) -> Result<TemplateOperation> {
        let (evaluated, passes) =
            conditions::evaluate(destination.to_str_checked()?, self.run_config);
        if !passes {
            return Ok(TemplateOperation::Skip {
                source: source.to_path_buf(),
                destination: evaluated,
            });
        }

        let target = PathBuf::from(self.engine.render_path(Path::new(&evaluated), &self.context)?);
        let target_exists = target.exists();
        log::trace!("Rendering '{}' -> '{}'", source.display(), target.display());

        match String::from_utf8(fs::read(source)?) {
            Ok(template_content) => Ok(TemplateOperation::Write {
                content: self.engine.render(&template_content, &self.context)?,
                target,
                target_exists,
            }),
            Err(_) => Ok(TemplateOperation::Copy {
                source: source.to_path_buf(),
                target,
                target_exists,
            }),
        }
    }
}
