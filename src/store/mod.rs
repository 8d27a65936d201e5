//! The persistence boundary.
//!
//! A store accepts a full endpoint document and echoes back its canonical
//! form. Callers must replace their working copy with that echo.

pub mod file;
pub mod memory;
pub mod workspace;

pub use file::*;
pub use memory::*;
pub use workspace::*;

use crate::error::StoreError;
use crate::ir::{Endpoint, Instruction, new_id};

/// Loads workspaces and saves endpoints.
pub trait EndpointStore {
    fn load(&self) -> Result<Workspace, StoreError>;

    /// Persists `endpoint` and returns the stored, canonical document.
    fn save(&mut self, endpoint: Endpoint) -> Result<Endpoint, StoreError>;
}

/// Normalizes an endpoint the way it is stored: missing ids are assigned,
/// empty output names are cleared and the url is trimmed.
pub fn canonicalize(mut endpoint: Endpoint) -> Endpoint {
    if endpoint.id.is_empty() {
        endpoint.id = new_id();
    }
    endpoint.url = endpoint.url.trim().to_string();
    for instruction in &mut endpoint.instructions {
        if instruction.id().is_empty() {
            instruction.set_id(new_id());
        }
        if let Instruction::CallMethod(call) = instruction {
            call.output_name = call.output_name.take().filter(|name| !name.is_empty());
        }
    }
    endpoint
}

/// Canonicalizes `endpoint` and replaces the stored endpoint it belongs to,
/// or appends it. Returns the stored document.
///
/// The slot is chosen before canonicalizing: an endpoint without an id is
/// matched by name and keeps the stored id if there is one.
pub(crate) fn upsert_endpoint(
    endpoints: &mut Vec<Endpoint>,
    mut endpoint: Endpoint,
) -> Endpoint {
    let slot = endpoints.iter().position(|stored| {
        if endpoint.id.is_empty() {
            stored.name == endpoint.name
        } else {
            stored.id == endpoint.id
        }
    });
    if let Some(index) = slot {
        if endpoint.id.is_empty() {
            endpoint.id = endpoints[index].id.clone();
        }
    }

    let endpoint = canonicalize(endpoint);
    match slot {
        Some(index) => endpoints[index] = endpoint.clone(),
        None => endpoints.push(endpoint.clone()),
    }
    endpoint
}
