//! Common test utilities for building catalogs and instruction lists.
use kumitate::prelude::*;

/// A small catalog with two configs.
///
/// `shop`:
/// - `create_widget(label: text) -> widget: object Widget`
/// - `paint(p1: object Widget, p2: text) -> result: object Widget`
/// - `render(widget: object Widget, options: <untyped>) -> result: text`
/// - `log(message: text)`
///
/// `db`:
/// - `connect() -> connection: object Connection`
#[allow(dead_code)]
pub fn create_catalog() -> Catalog {
    Catalog {
        configs: vec![
            Config {
                id: "shop".to_string(),
                name: "shop".to_string(),
                path: "modules/shop".to_string(),
                description: String::new(),
                methods: vec![
                    method(
                        "create_widget",
                        vec![Input::new("label", Some(Type::String))],
                        Some(Output::new("widget", Some(Type::object("Widget")))),
                    ),
                    method(
                        "paint",
                        vec![
                            Input::new("p1", Some(Type::object("Widget"))),
                            Input::new("p2", Some(Type::String)),
                        ],
                        Some(Output::new("result", Some(Type::object("Widget")))),
                    ),
                    method(
                        "render",
                        vec![
                            Input::new("widget", Some(Type::object("Widget"))),
                            Input::new("options", None),
                        ],
                        Some(Output::new("result", Some(Type::String))),
                    ),
                    method("log", vec![Input::new("message", Some(Type::String))], None),
                ],
            },
            Config {
                id: "db".to_string(),
                name: "db".to_string(),
                path: "modules/db".to_string(),
                description: String::new(),
                methods: vec![method(
                    "connect",
                    vec![],
                    Some(Output::new("connection", Some(Type::object("Connection")))),
                )],
            },
        ],
    }
}

#[allow(dead_code)]
pub fn method(name: &str, input: Vec<Input>, output: Option<Output>) -> Method {
    Method {
        name: name.to_string(),
        description: String::new(),
        input,
        output: output.into_iter().collect(),
    }
}

/// Builds a `CallMethod` instruction with a readable id.
#[allow(dead_code)]
pub fn call(
    id: &str,
    config: &str,
    method: &str,
    output: Option<&str>,
    arguments: Vec<Argument>,
) -> Instruction {
    Instruction::CallMethod(CallMethod {
        id: id.to_string(),
        config_id: config.to_string(),
        method_name: method.to_string(),
        output_name: output.map(str::to_string),
        arguments,
    })
}

#[allow(dead_code)]
pub fn json_return(id: &str, value: ArgValue) -> Instruction {
    Instruction::JsonReturn(JsonReturn {
        id: id.to_string(),
        argument: Argument::new("", value),
    })
}

#[allow(dead_code)]
pub fn param(name: &str, reference: &str) -> Argument {
    Argument::new(name, ArgValue::parameter(reference))
}

#[allow(dead_code)]
pub fn literal(name: &str, value: &str) -> Argument {
    Argument::new(name, ArgValue::literal(value))
}

/// Unwraps a `CallMethod`, panicking on any other variant.
#[allow(dead_code)]
pub fn as_call(instruction: &Instruction) -> &CallMethod {
    match instruction {
        Instruction::CallMethod(call) => call,
        other => panic!("Expected a CallMethod, found {:?}", other),
    }
}

/// A three-step endpoint: create a widget, paint it, return the result.
#[allow(dead_code)]
pub fn create_widget_endpoint() -> Endpoint {
    Endpoint {
        id: "ep-1".to_string(),
        name: "widgets".to_string(),
        description: "Paints a widget".to_string(),
        url: "/api/widgets".to_string(),
        instructions: vec![
            call(
                "i-1",
                "shop",
                "create_widget",
                Some("widget"),
                vec![literal("label", "blue")],
            ),
            call(
                "i-2",
                "shop",
                "paint",
                Some("result"),
                vec![param("p1", "widget"), literal("p2", "red")],
            ),
            json_return("i-3", ArgValue::parameter("result")),
        ],
    }
}

/// A workspace document in the wire format, as the store keeps it.
#[allow(dead_code)]
pub const WORKSPACE_JSON: &str = r#"{
    "configs": [
        {
            "id": "pg",
            "name": "postgres",
            "path": "modules/postgres",
            "methods": [
                {
                    "name": "get_connection",
                    "description": "Opens a pooled connection",
                    "input": [],
                    "output": { "name": "connection", "description": "", "type": { "Object": "Connection" } }
                },
                {
                    "name": "execute_query",
                    "description": "Runs a query",
                    "input": [
                        { "name": "connection", "description": "", "type": { "Object": "Connection" } },
                        { "name": "query", "description": "", "type": { "String": "" } }
                    ],
                    "output": [
                        { "name": "result", "description": "", "type": { "Object": "Rows" } }
                    ]
                }
            ]
        }
    ],
    "endpoints": [
        {
            "id": "e-1",
            "name": "user_list",
            "description": "",
            "url": "/api/users/list",
            "instructions": [
                { "CallMethod": {
                    "id": "a",
                    "config": "pg",
                    "method": "get_connection",
                    "out_variable_name": "connection",
                    "arguments": []
                } },
                { "CallMethod": {
                    "id": "b",
                    "config_id": "pg",
                    "method_name": "execute_query",
                    "output_name": "result",
                    "arguments": [
                        { "name": "connection", "arg_type": "Parameter", "arg_type_value": "connection" },
                        { "name": "query", "arg_type": "String", "arg_type_value": "SELECT * FROM users" }
                    ]
                } },
                { "JsonReturn": {
                    "id": "c",
                    "argument": { "name": "", "arg_type": "Parameter", "arg_type_value": "result" }
                } }
            ]
        }
    ]
}"#;
