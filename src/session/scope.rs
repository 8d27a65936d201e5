use crate::catalog::{Catalog, Selection};
use crate::ir::Instruction;
use crate::types::{Stack, Type};

/// The binding an instruction introduces, if any.
///
/// Only a call whose method resolves, declares a typed first output, and has
/// an output name binds anything.
pub fn binding<'c>(instruction: &Instruction, catalog: &'c Catalog) -> Option<(String, &'c Type)> {
    match instruction {
        Instruction::CallMethod(call) => {
            let name = call.output_name.as_ref()?;
            let Selection::Method(_, method) = catalog.resolve(call) else {
                return None;
            };
            let value_type = method.primary_output()?.value_type.as_ref()?;
            Some((name.clone(), value_type))
        }
        Instruction::JsonReturn(_) => None,
    }
}

/// Folds the instruction list into one stack per position.
///
/// Entry `k` holds the bindings of instructions `0..k`; the extra last entry
/// holds the bindings of the whole list. Each entry is an independent snapshot.
pub fn scopes(instructions: &[Instruction], catalog: &Catalog) -> Vec<Stack> {
    let mut stacks = Vec::with_capacity(instructions.len() + 1);
    let mut stack = Stack::new();
    for instruction in instructions {
        stacks.push(stack.clone());
        if let Some((name, value_type)) = binding(instruction, catalog) {
            stack.set_variable(name, value_type.clone());
        }
    }
    stacks.push(stack);
    stacks
}

/// The stack visible to the instruction at `index` (clamped to the list end).
pub fn stack_at(instructions: &[Instruction], catalog: &Catalog, index: usize) -> Stack {
    instructions
        .iter()
        .take(index)
        .filter_map(|instruction| binding(instruction, catalog))
        .fold(Stack::new(), |mut stack, (name, value_type)| {
            stack.set_variable(name, value_type.clone());
            stack
        })
}
