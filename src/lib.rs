//! # Kumitate - Typed Instruction IR for Endpoint Composition
//!
//! **Kumitate** models an endpoint as an ordered list of instructions (method
//! calls and JSON returns) over a statically tracked variable stack. It is the
//! core behind an endpoint editor: it threads a typed environment forward
//! through the instructions, suggests well-typed bindings for method inputs,
//! and keeps later references in sync when an output binding is renamed.
//!
//! Rendering, network transport and code generation are left to the caller.
//! Kumitate consumes a read-only [`catalog::Catalog`] of method signatures and
//! an [`ir::Endpoint`], and produces new instruction data.
//!
//! ## Core Workflow
//!
//! 1.  **Load**: Read a [`store::Workspace`] (catalog + endpoints) from JSON.
//! 2.  **Open a session**: Wrap one endpoint in a [`session::EndpointSession`].
//! 3.  **Edit**: Apply [`editor::Edit`]s. Method selection prefills arguments
//!     from the stack; output renames cascade to later references.
//! 4.  **Save**: Hand the endpoint to an [`store::EndpointStore`] and replace
//!     the working copy with the echoed document.
//!
//! Type mismatches and dangling references are never errors. They surface as
//! advisory [`session::Hint`]s.
//!
//! ## Quick Start
//!
//! ```rust
//! use kumitate::prelude::*;
//!
//! let catalog = Catalog::from_json(r#"{
//!     "configs": [{
//!         "id": "pg",
//!         "name": "postgres",
//!         "methods": [
//!             { "name": "get_connection", "input": [],
//!               "output": { "name": "connection", "type": { "Object": "Connection" } } },
//!             { "name": "execute_query",
//!               "input": [
//!                 { "name": "connection", "type": { "Object": "Connection" } },
//!                 { "name": "query", "type": { "String": "" } }
//!               ],
//!               "output": [] }
//!         ]
//!     }]
//! }"#).unwrap();
//!
//! let mut session = EndpointSession::new(Endpoint::new("users", "/api/users"), &catalog);
//! session.insert(0, InstructionKind::CallMethod);
//! session.edit(0, Edit::SelectConfig("pg".to_string()));
//! session.edit(0, Edit::SelectMethod("get_connection".to_string()));
//!
//! session.insert(1, InstructionKind::CallMethod);
//! session.edit(1, Edit::SelectConfig("pg".to_string()));
//! session.edit(1, Edit::SelectMethod("execute_query".to_string()));
//!
//! // The connection input was prefilled from the stack.
//! let Instruction::CallMethod(query) = &session.endpoint().instructions[1] else { unreachable!() };
//! assert_eq!(query.arguments[0].value, ArgValue::parameter("connection"));
//!
//! // Renaming the first output rewrites the reference.
//! session.edit(0, Edit::SetOutputName("conn".to_string()));
//! let Instruction::CallMethod(query) = &session.endpoint().instructions[1] else { unreachable!() };
//! assert_eq!(query.arguments[0].value, ArgValue::parameter("conn"));
//! ```

pub mod catalog;
pub mod editor;
pub mod error;
pub mod ir;
pub mod prelude;
pub mod render;
pub mod session;
pub mod store;
pub mod types;
