//! Tests for the instruction editing transitions.
mod common;
use common::*;
use kumitate::editor::{auto_output_name, default_arguments};
use kumitate::prelude::*;

fn blank_call(config: &str) -> Instruction {
    call("c", config, "", None, vec![])
}

#[test]
fn test_select_method_prefills_arguments_from_stack() {
    let catalog = create_catalog();
    let stack = Stack::new().with_variable("w", Type::object("Widget"));

    let next = apply(
        &blank_call("shop"),
        &Edit::SelectMethod("paint".to_string()),
        &catalog,
        &stack,
    );

    let call = as_call(&next);
    assert_eq!(call.method_name, "paint");
    assert_eq!(
        call.arguments,
        vec![
            Argument::new("p1", ArgValue::parameter("w")),
            Argument::new("p2", ArgValue::literal("")),
        ]
    );
    assert_eq!(call.output_name.as_deref(), Some("result"));
}

#[test]
fn test_select_method_without_suggestion_leaves_parameter_unresolved() {
    let catalog = create_catalog();
    let stack = Stack::new().with_variable("label", Type::String);

    let next = apply(
        &blank_call("shop"),
        &Edit::SelectMethod("render".to_string()),
        &catalog,
        &stack,
    );

    assert_eq!(
        as_call(&next).arguments,
        vec![
            Argument::new("widget", ArgValue::parameter("")),
            Argument::new("options", ArgValue::Unset),
        ]
    );
}

#[test]
fn test_select_method_replaces_previous_arguments() {
    let catalog = create_catalog();
    let old = call(
        "c",
        "shop",
        "paint",
        Some("result"),
        vec![param("p1", "x"), literal("p2", "y"), literal("stale", "z")],
    );

    let next = apply(
        &old,
        &Edit::SelectMethod("log".to_string()),
        &catalog,
        &Stack::new(),
    );

    let call = as_call(&next);
    assert_eq!(call.arguments, vec![literal("message", "")]);
    assert_eq!(call.output_name, None, "log has no output");
}

#[test]
fn test_select_unknown_method_degrades_to_unselected() {
    let catalog = create_catalog();
    let old = call("c", "shop", "paint", Some("result"), vec![param("p1", "x")]);

    let next = apply(
        &old,
        &Edit::SelectMethod("vanished".to_string()),
        &catalog,
        &Stack::new(),
    );

    let call = as_call(&next);
    assert_eq!(call.method_name, "vanished");
    assert!(call.arguments.is_empty());
    assert_eq!(call.output_name, None);
}

#[test]
fn test_output_name_dedup_uses_first_free_suffix() {
    let catalog = create_catalog();
    let paint = catalog.method("shop", "paint").unwrap();

    let stack = Stack::new().with_variable("result", Type::String);
    assert_eq!(auto_output_name(paint, &stack), Some("result0".to_string()));

    let stack = stack
        .with_variable("result0", Type::String)
        .with_variable("result2", Type::String);
    assert_eq!(auto_output_name(paint, &stack), Some("result1".to_string()));

    assert_eq!(
        auto_output_name(paint, &Stack::new()),
        Some("result".to_string())
    );
}

#[test]
fn test_unnamed_declared_output_binds_nothing() {
    let unnamed = method(
        "fetch",
        vec![],
        Some(Output::new("", Some(Type::object("Rows")))),
    );
    assert_eq!(auto_output_name(&unnamed, &Stack::new()), None);

    let mut catalog = create_catalog();
    catalog.configs[1].methods.push(unnamed);
    let next = apply(
        &blank_call("db"),
        &Edit::SelectMethod("fetch".to_string()),
        &catalog,
        &Stack::new(),
    );
    assert_eq!(as_call(&next).output_name, None);
}

#[test]
fn test_default_arguments_follow_input_order() {
    let catalog = create_catalog();
    let render = catalog.method("shop", "render").unwrap();
    let stack = Stack::new()
        .with_variable("a", Type::object("Widget"))
        .with_variable("b", Type::object("Widget"));

    let arguments = default_arguments(render, &stack);
    let names: Vec<_> = arguments.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["widget", "options"]);
    assert_eq!(arguments[0].value, ArgValue::parameter("a"));
}

#[test]
fn test_set_argument_upserts_one_argument() {
    let catalog = create_catalog();
    let old = call(
        "c",
        "shop",
        "paint",
        Some("result"),
        vec![param("p1", "w"), literal("p2", "")],
    );

    let updated = apply(
        &old,
        &Edit::SetArgument {
            input: "p2".to_string(),
            value: ArgValue::literal("red"),
        },
        &catalog,
        &Stack::new(),
    );
    assert_eq!(
        as_call(&updated).arguments,
        vec![param("p1", "w"), literal("p2", "red")]
    );
    assert_eq!(as_call(&updated).output_name.as_deref(), Some("result"));

    let appended = apply(
        &old,
        &Edit::SetArgument {
            input: "p3".to_string(),
            value: ArgValue::parameter("w"),
        },
        &catalog,
        &Stack::new(),
    );
    assert_eq!(as_call(&appended).arguments.len(), 3);
    assert_eq!(as_call(&appended).arguments[2], param("p3", "w"));
}

#[test]
fn test_select_config_keeps_method_and_arguments() {
    let catalog = create_catalog();
    let old = call("c", "shop", "paint", Some("result"), vec![param("p1", "w")]);

    let next = apply(
        &old,
        &Edit::SelectConfig("db".to_string()),
        &catalog,
        &Stack::new(),
    );

    let call = as_call(&next);
    assert_eq!(call.config_id, "db");
    assert_eq!(call.method_name, "paint");
    assert_eq!(call.arguments, vec![param("p1", "w")]);
    assert_eq!(catalog.resolve(call).method(), None);
}

#[test]
fn test_set_output_name_clears_on_empty() {
    let catalog = create_catalog();
    let old = call("c", "shop", "paint", Some("result"), vec![]);

    let renamed = apply(
        &old,
        &Edit::SetOutputName("painted".to_string()),
        &catalog,
        &Stack::new(),
    );
    assert_eq!(as_call(&renamed).output_name.as_deref(), Some("painted"));

    let cleared = apply(
        &old,
        &Edit::SetOutputName(String::new()),
        &catalog,
        &Stack::new(),
    );
    assert_eq!(as_call(&cleared).output_name, None);
}

#[test]
fn test_edits_for_other_variant_are_ignored() {
    let catalog = create_catalog();
    let ret = json_return("r", ArgValue::parameter("x"));
    let unchanged = apply(
        &ret,
        &Edit::SelectMethod("paint".to_string()),
        &catalog,
        &Stack::new(),
    );
    assert_eq!(unchanged, ret);

    let updated = apply(
        &ret,
        &Edit::SetReturn(ArgValue::literal("done")),
        &catalog,
        &Stack::new(),
    );
    assert_eq!(updated, json_return("r", ArgValue::literal("done")));

    let call = call("c", "shop", "paint", None, vec![]);
    let unchanged = apply(
        &call,
        &Edit::SetReturn(ArgValue::literal("done")),
        &catalog,
        &Stack::new(),
    );
    assert_eq!(unchanged, call);
}

#[test]
fn test_apply_does_not_touch_input_instruction() {
    let catalog = create_catalog();
    let old = blank_call("shop");
    let before = old.clone();

    let _ = apply(
        &old,
        &Edit::SelectMethod("paint".to_string()),
        &catalog,
        &Stack::new(),
    );
    assert_eq!(old, before);
}
