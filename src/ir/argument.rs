use crate::error::WireError;
use serde::{Deserialize, Serialize};

const TAG_PARAMETER: &str = "Parameter";
const TAG_LITERAL: &str = "String";
const TAG_UNSET: &str = "";
// Older editors persisted their presentation state.
const TAG_SUGGESTED: &str = "Suggested";

/// The value bound to one method input (or to a JSON return).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ArgValue {
    /// A reference to a stack binding. An empty or unknown name is a valid,
    /// unresolved reference.
    Parameter(String),
    /// A literal text value.
    Literal(String),
    #[default]
    Unset,
}

impl ArgValue {
    pub fn parameter(name: impl Into<String>) -> Self {
        ArgValue::Parameter(name.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        ArgValue::Literal(value.into())
    }

    /// The referenced binding name, for `Parameter` values.
    pub fn reference(&self) -> Option<&str> {
        match self {
            ArgValue::Parameter(name) => Some(name),
            ArgValue::Literal(_) | ArgValue::Unset => None,
        }
    }
}

/// A named argument. Wire shape: `{name, arg_type, arg_type_value}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawArgument", into = "RawArgument")]
pub struct Argument {
    pub name: String,
    pub value: ArgValue,
}

impl Argument {
    pub fn new(name: impl Into<String>, value: ArgValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawArgument {
    #[serde(default)]
    name: String,
    #[serde(default)]
    arg_type: String,
    #[serde(default)]
    arg_type_value: String,
}

impl TryFrom<RawArgument> for Argument {
    type Error = WireError;

    fn try_from(raw: RawArgument) -> Result<Self, Self::Error> {
        let value = match raw.arg_type.as_str() {
            TAG_PARAMETER | TAG_SUGGESTED => ArgValue::Parameter(raw.arg_type_value),
            TAG_LITERAL => ArgValue::Literal(raw.arg_type_value),
            TAG_UNSET => ArgValue::Unset,
            other => return Err(WireError::UnknownArgType(other.to_string())),
        };
        Ok(Argument {
            name: raw.name,
            value,
        })
    }
}

impl From<Argument> for RawArgument {
    fn from(argument: Argument) -> Self {
        let (arg_type, arg_type_value) = match argument.value {
            ArgValue::Parameter(name) => (TAG_PARAMETER, name),
            ArgValue::Literal(value) => (TAG_LITERAL, value),
            ArgValue::Unset => (TAG_UNSET, String::new()),
        };
        RawArgument {
            name: argument.name,
            arg_type: arg_type.to_string(),
            arg_type_value,
        }
    }
}
