use crate::{
    config::{Evaluation, Validation},
    constants::prompt::VALIDATION_PREAMBLE,
    error::{Error, Result},
    ext::{yes_no_to_bool, ValueExt},
};
use regex::Regex;
use serde_json::Value;

/// Checks `input` against every rule, stopping at the first one that fails.
///
/// A `false` result is the recoverable "validation failure" that makes the
/// caller ask again. Errors are reserved for rules that cannot be evaluated:
/// a numeric comparison on non-integer input, an uncompilable pattern or a
/// rule whose `value` has the wrong shape.
pub fn is_valid(input: &str, rules: &[Validation]) -> Result<bool> {
    is_valid_value(&Value::String(input.to_string()), rules)
}

/// Same as [`is_valid`] for an answer already stored as a value. `BOOL`
/// rules classify the value with [`ValueExt::is_yes`], the same rule that
/// gates conditional paths, so a boolean `true` counts as yes.
pub fn is_valid_value(value: &Value, rules: &[Validation]) -> Result<bool> {
    let input = value.to_answer_string();
    for rule in rules {
        if !evaluate(value, &input, rule)? {
            log::debug!("'{input}' failed {} {}", rule.evaluation, rule.value);
            return Ok(false);
        }
    }
    Ok(true)
}

fn evaluate(value: &Value, input: &str, rule: &Validation) -> Result<bool> {
    match rule.evaluation {
        Evaluation::Regex => {
            let pattern = Regex::new(&rule.value.to_answer_string())?;
            Ok(pattern.find(input).is_some_and(|m| m.start() == 0))
        }
        Evaluation::GreaterThan => Ok(parse_integer(input)? as f64 > threshold(rule)?),
        Evaluation::LessThan => Ok((parse_integer(input)? as f64) < threshold(rule)?),
        Evaluation::Bool => Ok(value.is_yes() == expected_bool(rule)?),
    }
}

fn parse_integer(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|source| Error::NumericParse { input: input.to_string(), source })
}

fn threshold(rule: &Validation) -> Result<f64> {
    match &rule.value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| {
        Error::MalformedConfig(format!(
            "{} validation needs a numeric value, got {}",
            rule.evaluation, rule.value
        ))
    })
}

fn expected_bool(rule: &Validation) -> Result<bool> {
    match &rule.value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => Ok(yes_no_to_bool(s) || s.eq_ignore_ascii_case("true")),
        other => Err(Error::MalformedConfig(format!(
            "BOOL validation needs a boolean value, got {other}"
        ))),
    }
}

/// Human-readable summary of every rule, appended to a prompt after a
/// rejected answer.
pub fn describe(rules: &[Validation]) -> String {
    let sentences: Vec<String> = rules
        .iter()
        .map(|rule| match rule.evaluation {
            Evaluation::Regex => {
                format!("Must match regular expression: {}.", rule.value.to_answer_string())
            }
            Evaluation::GreaterThan => {
                format!("Must be greater than: {}.", rule.value.to_answer_string())
            }
            Evaluation::LessThan => {
                format!("Must be less than: {}.", rule.value.to_answer_string())
            }
            Evaluation::Bool => {
                format!("Must be a yes/no answer equal to: {}.", rule.value.to_answer_string())
            }
        })
        .collect();
    format!("{VALIDATION_PREAMBLE}{}", sentences.join(" "))
}
