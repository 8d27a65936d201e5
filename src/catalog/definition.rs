use crate::error::{StoreError, WireError};
use crate::types::Type;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;

/// The read-only registry of configs and their method signatures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub configs: Vec<Config>,
}

/// A module configuration exposing a set of methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub methods: Vec<Method>,
}

/// A method signature. `input` and `output` accept a single object or a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub input: Vec<Input>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub output: Vec<Output>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// `None` when the catalog does not declare a type we can track.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<Type>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<Type>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, WireError> {
        serde_json::from_str(json).map_err(|e| WireError::Json(e.to_string()))
    }

    /// Loads a catalog document (`{"configs": [...]}`) from disk.
    pub fn from_file(path: &str) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path).map_err(|e| StoreError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::from_json(&content)?)
    }
}

impl Input {
    pub fn new(name: impl Into<String>, value_type: Option<Type>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            value_type,
        }
    }
}

impl Output {
    pub fn new(name: impl Into<String>, value_type: Option<Type>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            value_type,
        }
    }
}

fn one_or_many<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match OneOrMany::<T>::deserialize(deserializer)? {
        OneOrMany::Many(items) => items,
        OneOrMany::One(item) => vec![item],
    })
}
