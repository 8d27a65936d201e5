use super::scope::scopes;
use crate::catalog::{Catalog, Method};
use crate::ir::{ArgValue, Argument, CallMethod, Instruction};
use crate::types::{Stack, Type};
use ahash::AHashSet;
use std::fmt;

/// An advisory note about an incomplete or suspicious instruction.
///
/// Hints never block editing or saving; the store or a later generation step
/// decides what is actually invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    NoConfigSelected { index: usize },
    ConfigNotFound { index: usize, config_id: String },
    NoMethodSelected { index: usize },
    MethodNotFound { index: usize, config_id: String, method_name: String },
    MissingArgument { index: usize, input: String },
    UnknownArgument { index: usize, argument: String },
    EmptyParameter { index: usize, argument: String },
    UnresolvedParameter { index: usize, argument: String, reference: String },
    TypeMismatch { index: usize, argument: String, expected: Type, found: Type },
    EmptyReturn { index: usize },
}

impl Hint {
    /// Position of the instruction this hint is about.
    pub fn index(&self) -> usize {
        match self {
            Hint::NoConfigSelected { index }
            | Hint::ConfigNotFound { index, .. }
            | Hint::NoMethodSelected { index }
            | Hint::MethodNotFound { index, .. }
            | Hint::MissingArgument { index, .. }
            | Hint::UnknownArgument { index, .. }
            | Hint::EmptyParameter { index, .. }
            | Hint::UnresolvedParameter { index, .. }
            | Hint::TypeMismatch { index, .. }
            | Hint::EmptyReturn { index } => *index,
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::NoConfigSelected { index } => write!(f, "#{}: no config selected", index),
            Hint::ConfigNotFound { index, config_id } => {
                write!(f, "#{}: config '{}' is not in the catalog", index, config_id)
            }
            Hint::NoMethodSelected { index } => write!(f, "#{}: no method selected", index),
            Hint::MethodNotFound {
                index,
                config_id,
                method_name,
            } => write!(
                f,
                "#{}: method '{}' is not declared by config '{}'",
                index, method_name, config_id
            ),
            Hint::MissingArgument { index, input } => {
                write!(f, "#{}: input '{}' has no argument", index, input)
            }
            Hint::UnknownArgument { index, argument } => write!(
                f,
                "#{}: argument '{}' does not match any input of the method",
                index, argument
            ),
            Hint::EmptyParameter { index, argument } => {
                write!(f, "#{}: '{}' does not reference a variable yet", index, argument)
            }
            Hint::UnresolvedParameter {
                index,
                argument,
                reference,
            } => write!(
                f,
                "#{}: '{}' references '{}', which is not in scope",
                index, argument, reference
            ),
            Hint::TypeMismatch {
                index,
                argument,
                expected,
                found,
            } => write!(
                f,
                "#{}: '{}' expected {}, found {}",
                index, argument, expected, found
            ),
            Hint::EmptyReturn { index } => write!(f, "#{}: nothing is returned", index),
        }
    }
}

/// Collects the advisory hints for an instruction list.
pub fn check(instructions: &[Instruction], catalog: &Catalog) -> Vec<Hint> {
    let stacks = scopes(instructions, catalog);
    let mut hints = Vec::new();
    for (index, (instruction, stack)) in instructions.iter().zip(&stacks).enumerate() {
        match instruction {
            Instruction::CallMethod(call) => check_call(index, call, catalog, stack, &mut hints),
            Instruction::JsonReturn(ret) => match &ret.argument.value {
                ArgValue::Unset => hints.push(Hint::EmptyReturn { index }),
                value => check_value(index, &ret.argument.name, value, None, stack, &mut hints),
            },
        }
    }
    hints
}

fn check_call(
    index: usize,
    call: &CallMethod,
    catalog: &Catalog,
    stack: &Stack,
    hints: &mut Vec<Hint>,
) {
    if call.config_id.is_empty() {
        hints.push(Hint::NoConfigSelected { index });
        return;
    }
    let Some(config) = catalog.config(&call.config_id) else {
        hints.push(Hint::ConfigNotFound {
            index,
            config_id: call.config_id.clone(),
        });
        return;
    };
    if call.method_name.is_empty() {
        hints.push(Hint::NoMethodSelected { index });
        return;
    }
    let Some(method) = config.method(&call.method_name) else {
        hints.push(Hint::MethodNotFound {
            index,
            config_id: call.config_id.clone(),
            method_name: call.method_name.clone(),
        });
        return;
    };

    for input in &method.input {
        match call.argument(&input.name) {
            Some(argument) => check_value(
                index,
                &argument.name,
                &argument.value,
                input.value_type.as_ref(),
                stack,
                hints,
            ),
            None => hints.push(Hint::MissingArgument {
                index,
                input: input.name.clone(),
            }),
        }
    }

    hints.extend(
        unknown_arguments(&call.arguments, method).map(|argument| Hint::UnknownArgument {
            index,
            argument: argument.name.clone(),
        }),
    );
}

fn unknown_arguments<'a>(
    arguments: &'a [Argument],
    method: &'a Method,
) -> impl Iterator<Item = &'a Argument> + 'a {
    let declared: AHashSet<&str> = method.input.iter().map(|i| i.name.as_str()).collect();
    arguments
        .iter()
        .filter(move |argument| !declared.contains(argument.name.as_str()))
}

fn check_value(
    index: usize,
    argument: &str,
    value: &ArgValue,
    expected: Option<&Type>,
    stack: &Stack,
    hints: &mut Vec<Hint>,
) {
    let found = match value {
        ArgValue::Parameter(reference) if reference.is_empty() => {
            hints.push(Hint::EmptyParameter {
                index,
                argument: argument.to_string(),
            });
            return;
        }
        ArgValue::Parameter(reference) => match stack.get(reference) {
            Some(found) => found.clone(),
            None => {
                hints.push(Hint::UnresolvedParameter {
                    index,
                    argument: argument.to_string(),
                    reference: reference.clone(),
                });
                return;
            }
        },
        ArgValue::Literal(_) => Type::String,
        ArgValue::Unset => return,
    };

    if let Some(expected) = expected {
        if *expected != found {
            hints.push(Hint::TypeMismatch {
                index,
                argument: argument.to_string(),
                expected: expected.clone(),
                found,
            });
        }
    }
}
