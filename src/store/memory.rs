use super::{EndpointStore, Workspace, upsert_endpoint};
use crate::error::StoreError;
use crate::ir::Endpoint;

/// An in-process store with the same save semantics as [`super::JsonFileStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    workspace: Workspace,
}

impl MemoryStore {
    pub fn new(workspace: Workspace) -> Self {
        Self { workspace }
    }
}

impl EndpointStore for MemoryStore {
    fn load(&self) -> Result<Workspace, StoreError> {
        Ok(self.workspace.clone())
    }

    fn save(&mut self, endpoint: Endpoint) -> Result<Endpoint, StoreError> {
        Ok(upsert_endpoint(&mut self.workspace.endpoints, endpoint))
    }
}
