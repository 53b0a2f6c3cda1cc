//! Prompt provider that answers from a script instead of a terminal
//!
//! Useful for automation, testing, or CI/CD environments. Answers are queued
//! per prompt text and consumed in order, so a test can feed an invalid answer
//! followed by a valid one.

use super::interface::{ChoicePrompter, InputRequest, TextPrompter};
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

/// Automatic prompt provider that gives predefined responses
#[derive(Debug, Default)]
pub struct AutomaticPrompter {
    text_responses: RefCell<HashMap<String, VecDeque<String>>>,
    choice_responses: HashMap<String, usize>,
    /// Answer used when no scripted response is left; `None` makes an
    /// unscripted prompt an error.
    fallback_text: Option<String>,
    asked: RefCell<Vec<InputRequest>>,
}

impl AutomaticPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a text response for the prompt with the given text
    pub fn with_text_response(self, prompt: &str, response: &str) -> Self {
        self.text_responses
            .borrow_mut()
            .entry(prompt.to_string())
            .or_default()
            .push_back(response.to_string());
        self
    }

    /// Add a predefined choice response for a specific prompt
    pub fn with_choice_response(mut self, prompt: &str, choice_index: usize) -> Self {
        self.choice_responses.insert(prompt.to_string(), choice_index);
        self
    }

    /// Answer every unscripted prompt with `response` (an empty string accepts
    /// each prompt's default)
    pub fn with_fallback(mut self, response: &str) -> Self {
        self.fallback_text = Some(response.to_string());
        self
    }

    /// Every text request received so far, in order
    pub fn asked(&self) -> Vec<InputRequest> {
        self.asked.borrow().clone()
    }

    /// How many times the prompt with the given text was asked
    pub fn times_asked(&self, prompt: &str) -> usize {
        self.asked.borrow().iter().filter(|r| r.text == prompt).count()
    }
}

impl TextPrompter for AutomaticPrompter {
    fn prompt_text(&self, request: &InputRequest) -> Result<String> {
        self.asked.borrow_mut().push(request.clone());

        let scripted = self
            .text_responses
            .borrow_mut()
            .get_mut(&request.text)
            .and_then(VecDeque::pop_front);

        let response = scripted
            .or_else(|| self.fallback_text.clone())
            .ok_or_else(|| Error::InputExhausted(request.text.clone()))?;

        log::info!("Auto-answering '{}' with: '{response}'", request.display_text());
        Ok(response)
    }
}

impl ChoicePrompter for AutomaticPrompter {
    fn prompt_choice(&self, prompt: &str, choices: &[String]) -> Result<usize> {
        let response = self.choice_responses.get(prompt).copied().unwrap_or(0);
        if response >= choices.len() {
            return Err(Error::InputExhausted(prompt.to_string()));
        }
        log::info!("Auto-choosing '{}' for '{prompt}'", choices[response]);
        Ok(response)
    }
}
