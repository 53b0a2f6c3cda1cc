//! Template configuration model: variables, the prompt tree and file mappings

use crate::config::types::{Transformation, Type, Validation};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A constant copied verbatim into the run configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Variable {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// A question asked during resolution. Follow-ups make this a tree.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Prompt {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, rename = "type")]
    pub r#type: Type,
    /// Value used when the answer is empty, or replayed when `override` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validations: Vec<Validation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transformations: Vec<Transformation>,
    /// Rules checked against the parent's raw answer to decide whether this
    /// follow-up is asked at all
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Validation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub follow_ups: Vec<Prompt>,
    /// Set by [`crate::config::apply_defaults`] when a prior answer exists
    #[serde(default, rename = "override")]
    pub r#override: bool,
}

impl Prompt {
    pub fn new<S: Into<String>>(name: S, text: S) -> Self {
        Self { name: name.into(), text: text.into(), ..Default::default() }
    }

    pub fn with_type(mut self, r#type: Type) -> Self {
        self.r#type = r#type;
        self
    }

    pub fn with_default(mut self, default: impl Into<serde_json::Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validations.push(validation);
        self
    }

    pub fn with_transformation(mut self, transformation: Transformation) -> Self {
        self.transformations.push(transformation);
        self
    }

    pub fn with_condition(mut self, condition: Validation) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn with_follow_up(mut self, follow_up: Prompt) -> Self {
        self.follow_ups.push(follow_up);
        self
    }

    /// Options shown to the user. Boolean prompts always offer `y`/`n`.
    pub fn presented_options(&self) -> Vec<String> {
        match self.r#type {
            Type::Bool => crate::constants::prompt::YES_NO_OPTIONS
                .iter()
                .map(|o| o.to_string())
                .collect(),
            Type::Str => self.options.clone(),
        }
    }
}

/// Template file or directory and where its output goes, relative to the
/// template root and the project root respectively
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Mapping {
    pub template: PathBuf,
    pub destination: PathBuf,
}

/// The declarative input document driving one generation
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct TemplateConfig {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub variables: Vec<Variable>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub prompts: Vec<Prompt>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mappings: Vec<Mapping>,
}

/// Template configurations in the wild carry `variables: null` or an empty
/// YAML key; both mean "none".
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
