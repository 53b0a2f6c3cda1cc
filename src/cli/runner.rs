use crate::{
    archetype,
    cli::{Action, Args},
    config::{apply_defaults, ConfigFormat, RunConfiguration, TemplateConfig},
    error::{Error, Result},
    persistence,
    prompt::{get_prompt_provider, PromptProvider},
    renderer::get_template_engine,
    resolver::ConfigurationResolver,
    template::processor::TemplateProcessor,
};
use std::path::{Path, PathBuf};

/// Where the templates come from for one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    pub template_dir: PathBuf,
    pub config_path: PathBuf,
}

/// Main CLI runner that orchestrates the entire generation workflow
pub struct Runner<'a> {
    args: Args,
    provider: &'a dyn PromptProvider,
}

impl<'a> Runner<'a> {
    pub fn new(args: Args, provider: &'a dyn PromptProvider) -> Self {
        Self { args, provider }
    }

    /// Executes the complete generation workflow and returns the resolved
    /// run configuration.
    pub fn run(self) -> Result<RunConfiguration> {
        let action = self.args.action()?;
        let project_root = self.args.name.as_path();

        let source = self.resolve_template_source(action)?;
        log::debug!(
            "Using template '{}' with configuration '{}'",
            source.template_dir.display(),
            source.config_path.display()
        );

        let mut template_config = TemplateConfig::from_file(&source.config_path)?;
        self.merge_prior_configuration(project_root, &mut template_config)?;

        let run_config = ConfigurationResolver::new(self.provider, self.args.auto_config)
            .resolve(&template_config)?;

        persistence::save(project_root, &run_config, ConfigFormat::default())?;

        let engine = get_template_engine();
        let operations = TemplateProcessor::new(&engine, &run_config)
            .excluding(&source.config_path)
            .fill(&source.template_dir, project_root, &template_config.mappings)?;
        log::debug!("Processed {} template files", operations.len());

        println!("Project generation completed successfully in {}.", project_root.display());
        Ok(run_config)
    }

    /// Works out the template directory and its configuration file from the
    /// template, template configuration and archetype options.
    pub fn resolve_template_source(&self, action: Action) -> Result<TemplateSource> {
        match (&self.args.template, &self.args.template_config) {
            (Some(template_dir), Some(config_path)) => Ok(TemplateSource {
                template_dir: template_dir.clone(),
                config_path: config_path.clone(),
            }),
            (Some(template_dir), None) => Ok(TemplateSource {
                config_path: TemplateConfig::locate(template_dir, action.config_scope())?,
                template_dir: template_dir.clone(),
            }),
            (None, Some(config_path)) => Ok(TemplateSource {
                template_dir: parent_dir(config_path),
                config_path: config_path.clone(),
            }),
            (None, None) => {
                let root = self.args.archetypes.as_ref().ok_or(Error::TemplateNotSpecified)?;
                let template_dir = archetype::select(self.provider, root)?.template_dir(root);
                Ok(TemplateSource {
                    config_path: TemplateConfig::locate(&template_dir, action.config_scope())?,
                    template_dir,
                })
            }
        }
    }

    /// Turns the previous answers into prompt defaults. A missing or
    /// unreadable previous configuration only means a fresh run.
    fn merge_prior_configuration(
        &self,
        project_root: &Path,
        template_config: &mut TemplateConfig,
    ) -> Result<()> {
        if self.args.no_config {
            log::debug!("Skipping previous run configuration");
            return Ok(());
        }
        match persistence::load_prior(project_root, self.args.run_configuration.as_deref()) {
            Ok(prior) => {
                log::info!("Reusing {} previous answers as defaults", prior.len());
                apply_defaults(template_config, &prior);
                Ok(())
            }
            Err(e @ Error::MissingPriorConfig { .. }) => {
                log::info!("No pre-existing generoo run configuration found. {e}");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let provider = get_prompt_provider();
    Runner::new(args, &provider).run().map(|_| ())
}
