//! String-case transformations over resolved prompt values
//!
//! Every conversion starts from the same word list: a separator is inserted
//! before each uppercase letter that is not the first character, the text is
//! split on `-`, `.`, `/`, `_`, `|` and whitespace, empty pieces are dropped
//! and each word is lower-cased.

use crate::{
    config::{RunConfiguration, Transformation, TransformationKind},
    error::{Error, Result},
    ext::ValueExt,
};
use serde_json::Value;

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '.' | '/' | '_' | '|') || c.is_whitespace()
}

/// Splits `input` into lower-case words.
pub fn split_words(input: &str) -> Vec<String> {
    let mut sanitized = String::with_capacity(input.len() + 4);
    for (index, letter) in input.chars().enumerate() {
        if letter.is_uppercase() && index > 0 {
            sanitized.push('|');
        }
        sanitized.extend(letter.to_lowercase());
    }

    sanitized
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn capitalized_words(input: &str) -> Vec<String> {
    split_words(input).iter().map(|w| capitalize(w)).collect()
}

pub fn convert_to_snake(input: &str) -> String {
    split_words(input).join("_")
}

pub fn convert_to_dashes(input: &str) -> String {
    split_words(input).join("-")
}

pub fn convert_to_periods(input: &str) -> String {
    split_words(input).join(".")
}

pub fn convert_to_slashes(input: &str) -> String {
    split_words(input).join("/")
}

pub fn convert_to_lower_with_spaces(input: &str) -> String {
    split_words(input).join(" ")
}

pub fn convert_to_caps_no_spaces(input: &str) -> String {
    capitalized_words(input).concat()
}

pub fn convert_to_caps_with_spaces(input: &str) -> String {
    capitalized_words(input).join(" ")
}

pub fn convert_to_camel(input: &str) -> String {
    let pascal = convert_to_caps_no_spaces(input);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl TransformationKind {
    /// The conversion implementing this kind.
    pub fn converter(&self) -> fn(&str) -> String {
        match self {
            TransformationKind::Snake => convert_to_snake,
            TransformationKind::Dashes => convert_to_dashes,
            TransformationKind::Slashes => convert_to_slashes,
            TransformationKind::Periods => convert_to_periods,
            TransformationKind::Lower => convert_to_lower_with_spaces,
            TransformationKind::Camel => convert_to_camel,
            TransformationKind::Capitalized => convert_to_caps_no_spaces,
            TransformationKind::CapitalizedWithSpaces => convert_to_caps_with_spaces,
        }
    }

    pub fn apply(&self, input: &str) -> String {
        (self.converter())(input)
    }
}

/// Writes one converted copy of `run_config[reference]` per transformation.
/// A destination key that already exists is overwritten.
pub fn apply(
    reference: &str,
    transformations: &[Transformation],
    run_config: &mut RunConfiguration,
) -> Result<()> {
    if transformations.is_empty() {
        return Ok(());
    }

    let source = run_config.get(reference).map(ValueExt::to_answer_string).ok_or_else(|| {
        Error::MalformedConfig(format!(
            "transformation source '{reference}' has no value in the run configuration"
        ))
    })?;

    for transformation in transformations {
        if transformation.name.is_empty() {
            return Err(Error::MalformedConfig(format!(
                "a transformation of '{reference}' has an empty name"
            )));
        }
        let converted = transformation.transformation.apply(&source);
        log::trace!(
            "{} of '{source}' -> {} = '{converted}'",
            transformation.transformation,
            transformation.name
        );
        if run_config.contains_key(&transformation.name) {
            log::warn!("Transformation '{}' overwrites an existing value", transformation.name);
        }
        run_config.insert(transformation.name.clone(), Value::String(converted));
    }
    Ok(())
}
