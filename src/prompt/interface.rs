//! Pure interfaces for acquiring user input
//!
//! These interfaces are independent of any specific terminal library; the
//! resolution engine only ever talks to a [`PromptProvider`].

use crate::error::Result;

/// One question as presented to the user
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputRequest {
    pub text: String,
    pub default: Option<String>,
    pub options: Vec<String>,
    /// Description of unmet validations, set when asking again
    pub hint: Option<String>,
}

impl InputRequest {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into(), ..Default::default() }
    }

    pub fn with_default(mut self, default: Option<String>) -> Self {
        self.default = default.filter(|d| !d.is_empty());
        self
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    pub fn with_hint<S: Into<String>>(mut self, hint: S) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// The full line shown to the user: `text (default) [a, b] (hint)`
    pub fn display_text(&self) -> String {
        let mut line = self.text.clone();
        if let Some(default) = &self.default {
            line.push_str(&format!(" ({default})"));
        }
        if !self.options.is_empty() {
            line.push_str(&format!(" [{}]", self.options.join(", ")));
        }
        if let Some(hint) = &self.hint {
            line.push_str(&format!(" ({hint})"));
        }
        line
    }
}

/// Abstract interface for reading one line of text.
///
/// Implementations return the raw response; an empty string means the user
/// accepted the default, which the caller substitutes.
pub trait TextPrompter {
    fn prompt_text(&self, request: &InputRequest) -> Result<String>;
}

/// Abstract interface for single choice selection
pub trait ChoicePrompter {
    fn prompt_choice(&self, prompt: &str, choices: &[String]) -> Result<usize>;
}

/// Combined interface that provides all prompt types
pub trait PromptProvider: TextPrompter + ChoicePrompter {}

// Blanket implementation for any type that implements all prompt interfaces
impl<T> PromptProvider for T where T: TextPrompter + ChoicePrompter {}
