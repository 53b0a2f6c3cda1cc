//! Dialoguer-based implementations of prompt interfaces
//!
//! This module provides concrete implementations of the prompt interfaces
//! using the dialoguer library for terminal user interaction.

use super::interface::{ChoicePrompter, InputRequest, TextPrompter};
use crate::error::Result;
use dialoguer::{Input, Select};

/// Dialoguer-based implementation of all prompt interfaces
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, request: &InputRequest) -> Result<String> {
        // The default is part of the displayed text and substituted by the
        // resolver, so an empty line is passed through untouched.
        Ok(Input::<String>::new()
            .with_prompt(request.display_text())
            .allow_empty(true)
            .interact_text()?)
    }
}

impl ChoicePrompter for DialoguerPrompter {
    fn prompt_choice(&self, prompt: &str, choices: &[String]) -> Result<usize> {
        Ok(Select::new().with_prompt(prompt).items(choices).default(0).interact()?)
    }
}
