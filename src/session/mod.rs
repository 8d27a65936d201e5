//! Editing state for one endpoint.
//!
//! `EndpointSession` owns the working copy of an endpoint and keeps the
//! positional stacks, transitions, and rename-cascade consistent with each
//! other. The catalog is borrowed read-only for the whole session.

pub mod hints;
pub mod scope;

pub use hints::*;
pub use scope::*;

use crate::catalog::{Catalog, Selection};
use crate::editor::{self, CascadeReport, Edit};
use crate::ir::{Endpoint, Instruction, InstructionKind};
use crate::types::{Stack, suggest};

pub struct EndpointSession<'a> {
    catalog: &'a Catalog,
    endpoint: Endpoint,
    has_changes: bool,
}

impl<'a> EndpointSession<'a> {
    pub fn new(endpoint: Endpoint, catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            endpoint,
            has_changes: false,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// `true` once the working copy diverged from the last loaded or saved document.
    pub fn has_changes(&self) -> bool {
        self.has_changes
    }

    /// Consumes the session, yielding the working copy for persistence.
    pub fn into_endpoint(self) -> Endpoint {
        self.endpoint
    }

    /// One stack per instruction position, plus the final one.
    pub fn scopes(&self) -> Vec<Stack> {
        scopes(&self.endpoint.instructions, self.catalog)
    }

    pub fn stack_at(&self, index: usize) -> Stack {
        stack_at(&self.endpoint.instructions, self.catalog, index)
    }

    /// Applies `edit` to the instruction at `index`.
    ///
    /// When a call's output name changes, later references are renamed too.
    /// Returns whether anything changed; an out-of-range index changes nothing.
    pub fn edit(&mut self, index: usize, edit: Edit) -> bool {
        let Some(current) = self.endpoint.instructions.get(index) else {
            log::warn!(
                "Ignoring edit at position {} of endpoint '{}' with {} instruction(s)",
                index,
                self.endpoint.name,
                self.endpoint.instructions.len()
            );
            return false;
        };

        let stack = self.stack_at(index);
        let next = editor::apply(current, &edit, self.catalog, &stack);
        if next == *current {
            return false;
        }

        let old_output = current.output_name().map(str::to_string);
        let new_output = next.output_name().map(str::to_string);
        self.endpoint.instructions[index] = next;
        self.has_changes = true;

        if let Some(old) = old_output.as_deref() {
            if old_output != new_output {
                self.cascade(index, old, new_output.as_deref().unwrap_or_default());
            }
        }
        true
    }

    /// Runs the rename-cascade for an output rename at `index`.
    pub fn cascade(&mut self, index: usize, old: &str, new: &str) -> CascadeReport {
        let report = editor::rename_cascade(&mut self.endpoint.instructions, index, old, new);
        if report.rewritten > 0 {
            self.has_changes = true;
        }
        report
    }

    /// Inserts a blank instruction of `kind` at `index` (clamped to the end).
    /// Returns the position it landed at.
    pub fn insert(&mut self, index: usize, kind: InstructionKind) -> usize {
        let index = index.min(self.endpoint.instructions.len());
        self.endpoint.instructions.insert(index, kind.create());
        self.has_changes = true;
        index
    }

    pub fn remove(&mut self, index: usize) -> Option<Instruction> {
        if index >= self.endpoint.instructions.len() {
            return None;
        }
        self.has_changes = true;
        Some(self.endpoint.instructions.remove(index))
    }

    /// Moves the instruction at `from` so that it ends up at `to`.
    ///
    /// References are not rewritten; moving a consumer above its producer
    /// simply leaves an unresolved parameter.
    pub fn move_instruction(&mut self, from: usize, to: usize) -> bool {
        let len = self.endpoint.instructions.len();
        if from >= len || to >= len {
            return false;
        }
        if from != to {
            let instruction = self.endpoint.instructions.remove(from);
            self.endpoint.instructions.insert(to, instruction);
            self.has_changes = true;
        }
        true
    }

    /// Suggested bindings for the input `input_name` of the call at `index`.
    pub fn suggestions(&self, index: usize, input_name: &str) -> Vec<String> {
        let Some(Instruction::CallMethod(call)) = self.endpoint.instructions.get(index) else {
            return Vec::new();
        };
        let Selection::Method(_, method) = self.catalog.resolve(call) else {
            return Vec::new();
        };
        let expected = method
            .input(input_name)
            .and_then(|input| input.value_type.as_ref());
        suggest(expected, &self.stack_at(index))
    }

    pub fn hints(&self) -> Vec<Hint> {
        check(&self.endpoint.instructions, self.catalog)
    }

    /// Replaces the working copy with the document echoed by the store.
    ///
    /// The echo may differ from what was sent (ids are reassigned, fields
    /// normalized), so nothing from the old working copy is kept.
    pub fn mark_saved(&mut self, echoed: Endpoint) {
        self.endpoint = echoed;
        self.has_changes = false;
    }
}
