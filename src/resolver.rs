//! Builds a run configuration from a template configuration

use crate::{
    config::{RunConfiguration, TemplateConfig},
    error::{Error, Result},
    prompt::{PromptProvider, PromptResolver},
};

/// Resolves variables, then prompts in declaration order.
pub struct ConfigurationResolver<'a> {
    prompts: PromptResolver<'a>,
}

impl<'a> ConfigurationResolver<'a> {
    pub fn new(provider: &'a dyn PromptProvider, auto_configure: bool) -> Self {
        Self { prompts: PromptResolver::new(provider, auto_configure) }
    }

    pub fn with_prompt_resolver(prompts: PromptResolver<'a>) -> Self {
        Self { prompts }
    }

    /// Produces a fresh run configuration. Nothing is persisted here.
    pub fn resolve(&self, template_config: &TemplateConfig) -> Result<RunConfiguration> {
        let mut run_config = RunConfiguration::new();

        for variable in &template_config.variables {
            if variable.name.is_empty() {
                return Err(Error::MalformedConfig(format!(
                    "a variable with value {} has an empty name",
                    variable.value
                )));
            }
            run_config.insert(variable.name.clone(), variable.value.clone());
        }
        log::debug!("Resolved {} variables", run_config.len());

        for prompt in &template_config.prompts {
            self.prompts.process(prompt, &mut run_config)?;
        }
        Ok(run_config)
    }
}
