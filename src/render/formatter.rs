use crate::catalog::{Catalog, Selection};
use crate::ir::{ArgValue, Argument, CallMethod, Endpoint, Instruction};
use crate::types::Stack;
use itertools::Itertools;

/// Formats endpoints and stacks into human-readable listings.
pub struct EndpointFormatter;

impl EndpointFormatter {
    /// One line per instruction, prefixed with its position.
    pub fn format_endpoint(endpoint: &Endpoint, catalog: &Catalog) -> String {
        let header = format!("{} {}", endpoint.name, endpoint.url);
        std::iter::once(header)
            .chain(
                endpoint
                    .instructions
                    .iter()
                    .enumerate()
                    .map(|(i, instruction)| {
                        format!("{:>3}: {}", i, Self::format_instruction(instruction, catalog))
                    }),
            )
            .join("\n")
    }

    /// e.g. `users = postgres.execute_query(connection: $conn, query: "SELECT 1")`.
    pub fn format_instruction(instruction: &Instruction, catalog: &Catalog) -> String {
        match instruction {
            Instruction::CallMethod(call) => Self::format_call(call, catalog),
            Instruction::JsonReturn(ret) => {
                format!("return json({})", Self::format_value(&ret.argument.value))
            }
        }
    }

    fn format_call(call: &CallMethod, catalog: &Catalog) -> String {
        let target = match catalog.resolve(call) {
            Selection::Unselected => "?".to_string(),
            Selection::ConfigOnly(config) => format!("{}.?", config.name),
            Selection::Method(config, method) => format!("{}.{}", config.name, method.name),
        };
        let arguments = call.arguments.iter().map(Self::format_argument).join(", ");
        match &call.output_name {
            Some(name) => format!("{} = {}({})", name, target, arguments),
            None => format!("{}({})", target, arguments),
        }
    }

    fn format_argument(argument: &Argument) -> String {
        format!("{}: {}", argument.name, Self::format_value(&argument.value))
    }

    fn format_value(value: &ArgValue) -> String {
        match value {
            ArgValue::Parameter(name) if name.is_empty() => "?".to_string(),
            ArgValue::Parameter(name) => format!("${}", name),
            ArgValue::Literal(text) => format!("{:?}", text),
            ArgValue::Unset => "_".to_string(),
        }
    }

    /// e.g. `conn: object Connection, greeting: text`.
    pub fn format_stack(stack: &Stack) -> String {
        if stack.is_empty() {
            return "(empty)".to_string();
        }
        stack
            .iter()
            .map(|(name, value_type)| format!("{}: {}", name, value_type))
            .join(", ")
    }
}
