use super::{ArgValue, Argument, new_id};
use serde::{Deserialize, Deserializer, Serialize};

/// One step of an endpoint.
///
/// Encoded as a single-key object, `{"CallMethod": {...}}` or `{"JsonReturn": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    CallMethod(CallMethod),
    JsonReturn(JsonReturn),
}

/// Calls a catalog method and optionally binds its first output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CallMethod {
    #[serde(default)]
    pub id: String,
    #[serde(default, alias = "config")]
    pub config_id: String,
    #[serde(default, alias = "method")]
    pub method_name: String,
    #[serde(
        default,
        alias = "out_variable_name",
        deserialize_with = "empty_as_none"
    )]
    pub output_name: Option<String>,
    #[serde(default)]
    pub arguments: Vec<Argument>,
}

/// Returns a value as the JSON response of the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JsonReturn {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub argument: Argument,
}

impl CallMethod {
    /// A fresh call with nothing selected yet.
    pub fn create() -> Instruction {
        Instruction::CallMethod(CallMethod {
            id: new_id(),
            ..CallMethod::default()
        })
    }

    /// The argument supplied for the input named `input`, if any.
    pub fn argument(&self, input: &str) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.name == input)
    }
}

impl JsonReturn {
    /// A fresh return referencing nothing yet.
    pub fn create() -> Instruction {
        Instruction::JsonReturn(JsonReturn {
            id: new_id(),
            argument: Argument::new("", ArgValue::Parameter(String::new())),
        })
    }
}

impl Instruction {
    pub fn id(&self) -> &str {
        match self {
            Instruction::CallMethod(call) => &call.id,
            Instruction::JsonReturn(ret) => &ret.id,
        }
    }

    pub fn set_id(&mut self, id: String) {
        match self {
            Instruction::CallMethod(call) => call.id = id,
            Instruction::JsonReturn(ret) => ret.id = id,
        }
    }

    /// The name this instruction binds, if it is a call with an output name.
    pub fn output_name(&self) -> Option<&str> {
        match self {
            Instruction::CallMethod(call) => call.output_name.as_deref(),
            Instruction::JsonReturn(_) => None,
        }
    }

    /// All arguments carried by this instruction, in order.
    pub fn arguments(&self) -> &[Argument] {
        match self {
            Instruction::CallMethod(call) => &call.arguments,
            Instruction::JsonReturn(ret) => std::slice::from_ref(&ret.argument),
        }
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|name| !name.is_empty()))
}
