use crate::catalog::{Catalog, Input, Method};
use crate::ir::{ArgValue, Argument, CallMethod, Instruction, JsonReturn};
use crate::types::{Stack, Type, first_suggestion};

/// A user edit on a single instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Points a call at another config. The method and arguments are kept as-is.
    SelectConfig(String),
    /// Selects a method and re-derives the arguments and the output name.
    SelectMethod(String),
    /// Renames the bound output. An empty name clears it.
    SetOutputName(String),
    /// Upserts the argument for one input, matched by input name.
    SetArgument { input: String, value: ArgValue },
    /// Replaces the value returned by a `JsonReturn`.
    SetReturn(ArgValue),
}

/// Applies `edit` to `instruction`, given the catalog and the stack visible at
/// the instruction's position.
///
/// Edits that do not apply to the instruction's variant return it unchanged.
pub fn apply(
    instruction: &Instruction,
    edit: &Edit,
    catalog: &Catalog,
    stack: &Stack,
) -> Instruction {
    match instruction {
        Instruction::CallMethod(call) => {
            Instruction::CallMethod(apply_to_call(call, edit, catalog, stack))
        }
        Instruction::JsonReturn(ret) => Instruction::JsonReturn(apply_to_return(ret, edit)),
    }
}

fn apply_to_call(call: &CallMethod, edit: &Edit, catalog: &Catalog, stack: &Stack) -> CallMethod {
    let mut next = call.clone();
    match edit {
        Edit::SelectConfig(config_id) => next.config_id = config_id.clone(),
        Edit::SelectMethod(method_name) => {
            next.method_name = method_name.clone();
            match catalog.method(&next.config_id, &next.method_name) {
                Some(method) => {
                    next.arguments = default_arguments(method, stack);
                    next.output_name = auto_output_name(method, stack);
                    log::debug!(
                        "Selected method '{}' with {} argument(s), output bound as {:?}",
                        method.name,
                        next.arguments.len(),
                        next.output_name
                    );
                }
                None => {
                    next.arguments.clear();
                    next.output_name = None;
                }
            }
        }
        Edit::SetOutputName(name) => {
            next.output_name = Some(name.clone()).filter(|n| !n.is_empty());
        }
        Edit::SetArgument { input, value } => upsert_argument(&mut next.arguments, input, value),
        Edit::SetReturn(_) => log::debug!("Ignoring a return edit on call '{}'", call.id),
    }
    next
}

fn apply_to_return(ret: &JsonReturn, edit: &Edit) -> JsonReturn {
    let mut next = ret.clone();
    match edit {
        Edit::SetReturn(value) => next.argument.value = value.clone(),
        Edit::SelectConfig(_)
        | Edit::SelectMethod(_)
        | Edit::SetOutputName(_)
        | Edit::SetArgument { .. } => {
            log::debug!("Ignoring a call edit on return '{}'", ret.id)
        }
    }
    next
}

/// One argument per declared input, in input order, prefilled from the stack.
pub fn default_arguments(method: &Method, stack: &Stack) -> Vec<Argument> {
    method
        .input
        .iter()
        .map(|input| Argument::new(input.name.clone(), default_value(input, stack)))
        .collect()
}

fn default_value(input: &Input, stack: &Stack) -> ArgValue {
    match &input.value_type {
        Some(expected @ Type::Object(_)) => {
            ArgValue::Parameter(first_suggestion(Some(expected), stack).unwrap_or_default())
        }
        Some(Type::String) => ArgValue::Literal(String::new()),
        None => ArgValue::Unset,
    }
}

/// The output name for a freshly selected method.
///
/// Uses the declared name of the first output; if that is already bound, the
/// smallest integer suffix from `0` that gives an unbound name. An output
/// declared without a name binds nothing.
pub fn auto_output_name(method: &Method, stack: &Stack) -> Option<String> {
    let base = &method.primary_output()?.name;
    if base.is_empty() {
        return None;
    }
    if !stack.contains(base) {
        return Some(base.clone());
    }
    (0usize..)
        .map(|suffix| format!("{}{}", base, suffix))
        .find(|candidate| !stack.contains(candidate))
}

fn upsert_argument(arguments: &mut Vec<Argument>, input: &str, value: &ArgValue) {
    match arguments.iter_mut().find(|a| a.name == input) {
        Some(existing) => existing.value = value.clone(),
        None => arguments.push(Argument::new(input, value.clone())),
    }
}
