//! Resolution of a single prompt and its follow-up subtree

use super::interface::{InputRequest, PromptProvider};
use crate::{
    config::{Prompt, RunConfiguration},
    error::{Error, Result},
    ext::ValueExt,
    transform, validation,
};
use serde_json::Value;

/// Acquires, validates and records prompt answers.
pub struct PromptResolver<'a> {
    provider: &'a dyn PromptProvider,
    auto_configure: bool,
    max_attempts: Option<usize>,
}

impl<'a> PromptResolver<'a> {
    pub fn new(provider: &'a dyn PromptProvider, auto_configure: bool) -> Self {
        Self { provider, auto_configure, max_attempts: None }
    }

    /// Bounds the validation retry loop. Without a bound an answer that never
    /// validates keeps the prompt asking forever.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts.max(1));
        self
    }

    /// Resolves `prompt`, stores its answer and transformations in
    /// `run_config`, then resolves every follow-up whose conditions accept
    /// the raw answer, in declaration order.
    pub fn process(&self, prompt: &Prompt, run_config: &mut RunConfiguration) -> Result<()> {
        check_required(prompt)?;

        let value = if self.auto_configure && prompt.r#override {
            log::debug!("Auto-configuring '{}' from the previous run", prompt.name);
            prompt.default.clone().unwrap_or(Value::Null)
        } else {
            self.ask(prompt)?
        };
        run_config.insert(prompt.name.clone(), value.clone());
        transform::apply(&prompt.name, &prompt.transformations, run_config)?;

        for follow_up in &prompt.follow_ups {
            if follow_up.conditions.is_empty() {
                log::debug!("Skipping follow-up '{}': it has no conditions", follow_up.name);
                continue;
            }
            if validation::is_valid_value(&value, &follow_up.conditions)? {
                self.process(follow_up, run_config)?;
            } else {
                log::debug!("Skipping follow-up '{}' for answer {value}", follow_up.name);
            }
        }
        Ok(())
    }

    fn ask(&self, prompt: &Prompt) -> Result<Value> {
        let default = prompt.default.as_ref().map(ValueExt::to_answer_string);
        let mut request = InputRequest::new(prompt.text.as_str())
            .with_default(default)
            .with_options(prompt.presented_options());
        let mut attempts = 0;

        loop {
            attempts += 1;
            let response = self.provider.prompt_text(&request)?;
            let value = if response.is_empty() {
                prompt.default.clone().unwrap_or(Value::String(response))
            } else {
                Value::String(response)
            };

            if validation::is_valid_value(&value, &prompt.validations)? {
                return Ok(value);
            }

            log::info!("Answer {value} for '{}' did not pass validation", prompt.name);
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(Error::RetriesExhausted { prompt: prompt.name.clone(), attempts });
            }
            if request.hint.is_none() {
                request = request.with_hint(validation::describe(&prompt.validations));
            }
        }
    }
}

fn check_required(prompt: &Prompt) -> Result<()> {
    if prompt.name.is_empty() {
        return Err(Error::MalformedConfig(format!(
            "prompt '{}' has an empty name",
            prompt.text
        )));
    }
    if prompt.text.is_empty() {
        return Err(Error::MalformedConfig(format!(
            "prompt '{}' has an empty text",
            prompt.name
        )));
    }
    Ok(())
}
