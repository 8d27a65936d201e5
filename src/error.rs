use thiserror::Error;

/// Errors raised while decoding or encoding the JSON wire documents.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Failed to parse JSON document: {0}")]
    Json(String),

    #[error(
        "Unknown argument type tag '{0}', expected one of \"Parameter\", \"String\" or an empty tag"
    )]
    UnknownArgType(String),
}

/// Errors raised at the persistence boundary.
///
/// The editing core never produces these; they only surface when a workspace
/// document is read from or written to a store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Could not access '{path}': {message}")]
    Io { path: String, message: String },

    #[error(transparent)]
    Wire(#[from] WireError),

    #[error("Endpoint '{0}' not found in the workspace")]
    EndpointNotFound(String),
}
