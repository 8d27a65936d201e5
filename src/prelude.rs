//! Prelude module for convenient imports
//!
//! Re-exports the types most code touching endpoints needs: the IR, the
//! catalog, stacks and suggestions, the editor and the session.
//!
//! # Example
//!
//! ```rust,no_run
//! use kumitate::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let workspace = Workspace::from_file("path/to/workspace.json")?;
//! let endpoint = workspace.require_endpoint("user_list")?.clone();
//!
//! let session = EndpointSession::new(endpoint, &workspace.catalog);
//! for hint in session.hints() {
//!     println!("{}", hint);
//! }
//! # Ok(())
//! # }
//! ```

// Instruction model
pub use crate::ir::{
    ArgValue, Argument, CallMethod, Endpoint, Instruction, InstructionKind, JsonReturn,
};

// Catalog
pub use crate::catalog::{Catalog, Config, Input, Method, Output, Selection};

// Types, stacks and suggestions
pub use crate::types::{ArgumentState, Stack, Type, first_suggestion, suggest};

// Editing
pub use crate::editor::{CascadeReport, Edit, apply, rename_cascade};
pub use crate::session::{EndpointSession, Hint, check, scopes, stack_at};

// Persistence
pub use crate::store::{EndpointStore, JsonFileStore, MemoryStore, Workspace};

// Error types
pub use crate::error::{StoreError, WireError};

// Formatting
pub use crate::render::EndpointFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
