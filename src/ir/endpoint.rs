use super::Instruction;
use crate::error::WireError;
use serde::{Deserialize, Serialize};

/// An ordered instruction sequence plus its identity and routing metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
}

impl Endpoint {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, WireError> {
        serde_json::from_str(json).map_err(|e| WireError::Json(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, WireError> {
        serde_json::to_string_pretty(self).map_err(|e| WireError::Json(e.to_string()))
    }
}
