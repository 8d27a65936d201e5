use super::{EndpointStore, Workspace, upsert_endpoint};
use crate::error::StoreError;
use crate::ir::Endpoint;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores a whole workspace as one pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn write(&self, workspace: &Workspace) -> Result<(), StoreError> {
        let json = workspace.to_json()?;
        fs::write(&self.path, json).map_err(|e| StoreError::Io {
            path: self.display_path(),
            message: e.to_string(),
        })
    }
}

impl EndpointStore for JsonFileStore {
    fn load(&self) -> Result<Workspace, StoreError> {
        Workspace::from_file(&self.display_path())
    }

    /// A missing file is treated as an empty workspace.
    fn save(&mut self, endpoint: Endpoint) -> Result<Endpoint, StoreError> {
        let mut workspace = if self.path.exists() {
            self.load()?
        } else {
            Workspace::default()
        };

        let endpoint = upsert_endpoint(&mut workspace.endpoints, endpoint);
        self.write(&workspace)?;

        log::info!(
            "Saved endpoint '{}' ({} instruction(s)) to '{}'",
            endpoint.name,
            endpoint.instructions.len(),
            self.display_path()
        );
        Ok(endpoint)
    }
}
