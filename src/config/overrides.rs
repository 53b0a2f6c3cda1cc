//! Merges a previous run configuration into prompt defaults

use crate::config::template::{Prompt, TemplateConfig};
use crate::config::RunConfiguration;

/// Replaces the default of every prompt, follow-ups included, whose name was
/// answered in `prior`, and marks it as overridden so that auto-configuration
/// can replay it without asking.
pub fn apply_defaults(template_config: &mut TemplateConfig, prior: &RunConfiguration) {
    let mut pending: Vec<&mut Prompt> = template_config.prompts.iter_mut().collect();

    while let Some(prompt) = pending.pop() {
        if let Some(previous) = prior.get(&prompt.name) {
            log::debug!("Overriding default of '{}' with {previous}", prompt.name);
            prompt.default = Some(previous.clone());
            prompt.r#override = true;
        }
        pending.extend(prompt.follow_ups.iter_mut());
    }
}
