use super::{Stack, Type};
use crate::ir::ArgValue;

/// Lists the stack names whose type matches `expected`, in insertion order.
///
/// Suggestions only exist for `Object` expectations. An absent or `String`
/// expectation always yields an empty list, and the caller falls back to
/// literal entry.
pub fn suggest(expected: Option<&Type>, stack: &Stack) -> Vec<String> {
    match expected {
        Some(expected @ Type::Object(_)) => stack
            .iter()
            .filter(|(_, bound)| *bound == expected)
            .map(|(name, _)| name.to_string())
            .collect(),
        Some(Type::String) | None => Vec::new(),
    }
}

/// The binding used to auto-fill an `Object` input.
pub fn first_suggestion(expected: Option<&Type>, stack: &Stack) -> Option<String> {
    suggest(expected, stack).into_iter().next()
}

/// How an argument should be presented in an editor.
///
/// `Suggested` is derived, never stored: it is a `Parameter` whose value is
/// currently one of the suggestions for the expected type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentState {
    Suggested,
    Parameter,
    Literal,
    Unset,
}

impl ArgumentState {
    pub fn of(value: &ArgValue, expected: Option<&Type>, stack: &Stack) -> Self {
        match value {
            ArgValue::Parameter(name) => {
                if suggest(expected, stack).iter().any(|s| s == name) {
                    ArgumentState::Suggested
                } else {
                    ArgumentState::Parameter
                }
            }
            ArgValue::Literal(_) => ArgumentState::Literal,
            ArgValue::Unset => ArgumentState::Unset,
        }
    }
}
