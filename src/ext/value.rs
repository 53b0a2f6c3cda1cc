use serde_json::Value;

/// Classifies a yes/no answer: true only when the first character is `y` or `Y`.
pub fn yes_no_to_bool(response: &str) -> bool {
    response.chars().next().is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

/// Helpers for reading run configuration values as answers
pub trait ValueExt {
    /// The value as the user would have typed it: strings verbatim, `null` as
    /// empty, everything else in its JSON form (`true`, `42`).
    fn to_answer_string(&self) -> String;

    /// Yes/no classification of the value. Booleans are taken as-is, which
    /// lets YAML `true`/`false` flags gate paths.
    fn is_yes(&self) -> bool;
}

impl ValueExt for Value {
    fn to_answer_string(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    fn is_yes(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            other => yes_no_to_bool(&other.to_answer_string()),
        }
    }
}
