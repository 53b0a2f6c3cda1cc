//! Configuration management for generoo templates
//!
//! This module contains the configuration system components:
//! - `types`: Enums and small records used inside prompts
//! - `template`: The template configuration document (variables, prompts, mappings)
//! - `loader`: Document codecs and configuration file discovery
//! - `overrides`: Merging a previous run configuration into prompt defaults

pub mod loader;
pub mod overrides;
pub mod template;
pub mod types;

pub use loader::ConfigFormat;
pub use overrides::apply_defaults;
pub use template::{Mapping, Prompt, TemplateConfig, Variable};
pub use types::{Evaluation, Transformation, TransformationKind, Type, Validation};

/// Fully resolved key/value store driving one generation.
pub type RunConfiguration = indexmap::IndexMap<String, serde_json::Value>;
