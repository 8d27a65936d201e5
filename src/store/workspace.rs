use crate::catalog::Catalog;
use crate::error::{StoreError, WireError};
use crate::ir::Endpoint;
use serde::{Deserialize, Serialize};
use std::fs;

/// Everything a session starts from: the catalog and all saved endpoints.
///
/// Serialized as `{"configs": [...], "endpoints": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(flatten)]
    pub catalog: Catalog,
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

impl Workspace {
    pub fn from_json(json: &str) -> Result<Self, WireError> {
        serde_json::from_str(json).map_err(|e| WireError::Json(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, WireError> {
        serde_json::to_string_pretty(self).map_err(|e| WireError::Json(e.to_string()))
    }

    pub fn from_file(path: &str) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path).map_err(|e| StoreError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::from_json(&content)?)
    }

    pub fn endpoint(&self, name: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.name == name)
    }

    /// Like [`Workspace::endpoint`], but a miss is an error.
    pub fn require_endpoint(&self, name: &str) -> Result<&Endpoint, StoreError> {
        self.endpoint(name)
            .ok_or_else(|| StoreError::EndpointNotFound(name.to_string()))
    }
}
