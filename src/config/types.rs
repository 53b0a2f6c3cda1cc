//! Basic types and enums for template configurations

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Kind of value a prompt collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum Type {
    /// Free text input
    #[default]
    Str,
    /// Yes/no input, presented with `[y, n]`
    Bool,
}

/// Predicate applied to a candidate answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum Evaluation {
    Regex,
    GreaterThan,
    LessThan,
    Bool,
}

/// String-case conversion applied to a resolved prompt value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum TransformationKind {
    Snake,
    Dashes,
    Slashes,
    Periods,
    Lower,
    Camel,
    Capitalized,
    CapitalizedWithSpaces,
}

/// A single validation rule; `value` is a pattern, a number or a boolean
/// depending on the evaluation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Validation {
    pub evaluation: Evaluation,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// Writes a converted copy of the enclosing prompt's value under `name`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Transformation {
    pub name: String,
    pub transformation: TransformationKind,
}

/// Implements the case-insensitive token table shared by the config enums.
macro_rules! token_enum {
    ($ty:ident, $what:literal, { $($variant:ident => $token:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_token(&self) -> &'static str {
                match self {
                    $($ty::$variant => $token,)+
                }
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(if s.eq_ignore_ascii_case($token) {
                    return Ok($ty::$variant);
                })+
                Err(Error::MalformedConfig(format!(
                    "did not recognize the {} provided: '{s}'",
                    $what
                )))
            }
        }

        impl TryFrom<String> for $ty {
            type Error = Error;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.as_token().to_string()
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_token())
            }
        }
    };
}

token_enum!(Type, "prompt type", {
    Str => "STRING",
    Bool => "BOOL",
});

token_enum!(Evaluation, "evaluation type for validations", {
    Regex => "REGEX",
    GreaterThan => "GREATER_THAN",
    LessThan => "LESS_THAN",
    Bool => "BOOL",
});

token_enum!(TransformationKind, "transformation type", {
    Snake => "SNAKE",
    Dashes => "DASHES",
    Slashes => "SLASHES",
    Periods => "PERIODS",
    Lower => "LOWER",
    Camel => "CAMEL",
    Capitalized => "CAPITALIZED",
    CapitalizedWithSpaces => "CAPITALIZED_WITH_SPACES",
});
