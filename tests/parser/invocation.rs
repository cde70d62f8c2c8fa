//! Invocation grammar tests: subcommands, parameters, lists.

use muster_foundation::{CallError, PlayerId, TableRoster, Value};
use muster_parser::parse_call;
use muster_schema::{Schema, SchemaBuilder};

fn roster() -> TableRoster {
    TableRoster::new()
}

fn caller() -> PlayerId {
    PlayerId(1)
}

fn pay_schema() -> Schema {
    let mut b = SchemaBuilder::new("pay");
    b.param_int("amount")
        .param_text("item")
        .optional_params()
        .param_bool("announce");
    b.build()
}

#[test]
fn required_then_optional_parameters() {
    let schema = pay_schema();

    let call = parse_call("5 bread", &schema, caller(), &roster());
    assert!(call.ok(), "unexpected error: {:?}", call.error);
    assert_eq!(call.param("amount"), Some(&Value::Int(5)));
    assert_eq!(call.param("item"), Some(&Value::from("bread")));
    assert_eq!(call.param("announce"), None);

    let call = parse_call("5 bread yes", &schema, caller(), &roster());
    assert_eq!(call.param("announce"), Some(&Value::Bool(true)));
}

#[test]
fn missing_required_parameter_is_fatal() {
    let schema = pay_schema();
    let call = parse_call("5", &schema, caller(), &roster());
    assert_eq!(
        call.error,
        Some(CallError::NoRequiredParam {
            param: "item".to_string()
        })
    );
    // Partially parsed values are not kept.
    assert!(call.params.is_empty());
}

#[test]
fn failed_optional_parameter_is_not_fatal() {
    let schema = pay_schema();
    // "maybe" is no boolean word; it is simply left alone, and then
    // reported as unused because nothing else can consume it.
    let call = parse_call("5 bread maybe", &schema, caller(), &roster());
    assert_eq!(
        call.error,
        Some(CallError::UnusedCommandParameters {
            rest: "maybe".to_string()
        })
    );
}

#[test]
fn sub_command_selection_backtracks() {
    let mut b = SchemaBuilder::new("region");
    b.param_text("name");
    b.sub_command("remove").param_text("name");
    let schema = b.build();

    let call = parse_call("remove spawn", &schema, caller(), &roster());
    assert_eq!(call.sub_command, "remove");
    assert_eq!(call.param("name"), Some(&Value::from("spawn")));

    // No declared subcommand matches; the word becomes the default
    // subcommand's first parameter.
    let call = parse_call("spawn", &schema, caller(), &roster());
    assert_eq!(call.sub_command, "");
    assert_eq!(call.param("name"), Some(&Value::from("spawn")));

    // Match is case-sensitive.
    let call = parse_call("Remove", &schema, caller(), &roster());
    assert_eq!(call.sub_command, "");
}

#[test]
fn greedy_list_stops_at_first_non_member() {
    let mut b = SchemaBuilder::new("kick");
    b.param_int_list("ids").optional_params().param_text("note");
    let schema = b.build();

    let call = parse_call("1 2 3 spam", &schema, caller(), &roster());
    assert!(call.ok(), "unexpected error: {:?}", call.error);
    let ids: Vec<i64> = call
        .param("ids")
        .and_then(Value::as_list)
        .expect("list")
        .iter()
        .filter_map(Value::as_int)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(call.param("note"), Some(&Value::from("spam")));
}

#[test]
fn required_list_needs_at_least_one_element() {
    let mut b = SchemaBuilder::new("kick");
    b.param_int_list("ids");
    let schema = b.build();

    let call = parse_call("nobody", &schema, caller(), &roster());
    assert_eq!(
        call.error,
        Some(CallError::NoRequiredParam {
            param: "ids".to_string()
        })
    );
}

#[test]
fn negative_numbers_are_values_not_options() {
    let mut b = SchemaBuilder::new("warp");
    b.param_int("dx").param_float("dy");
    b.option("relative", None);
    let schema = b.build();

    let call = parse_call("-3 -.5 --relative", &schema, caller(), &roster());
    assert!(call.ok(), "unexpected error: {:?}", call.error);
    assert_eq!(call.param("dx"), Some(&Value::Int(-3)));
    assert_eq!(call.param("dy"), Some(&Value::Float(-0.5)));
    assert!(call.has_option("relative"));
}

#[test]
fn quoted_and_bare_text() {
    let mut b = SchemaBuilder::new("rename");
    b.param_text("from").param_text("to");
    let schema = b.build();

    let call = parse_call(r#""Old Name" new_name"#, &schema, caller(), &roster());
    assert!(call.ok(), "unexpected error: {:?}", call.error);
    assert_eq!(call.param("from"), Some(&Value::from("Old Name")));
    assert_eq!(call.param("to"), Some(&Value::from("new_name")));
}

#[test]
fn remainder_swallows_the_rest() {
    let mut b = SchemaBuilder::new("say");
    b.param_remainder("message");
    let schema = b.build();

    let call = parse_call("hello --world [ok]", &schema, caller(), &roster());
    assert!(call.ok(), "unexpected error: {:?}", call.error);
    assert_eq!(call.param("message"), Some(&Value::from("hello --world [ok]")));
}

#[test]
fn object_parameter_lands_as_nested_map() {
    let mut b = SchemaBuilder::new("spawn");
    b.param_text("kind").optional_params().param_object("attrs");
    let schema = b.build();

    let call = parse_call(
        r#"boar {health: 40, drops: ["hide", "tusk"]}"#,
        &schema,
        caller(),
        &roster(),
    );
    assert!(call.ok(), "unexpected error: {:?}", call.error);
    let attrs = call.param("attrs").and_then(Value::as_map).expect("map");
    assert_eq!(attrs.get("health"), Some(&Value::Int(40)));
    let drops = attrs.get("drops").and_then(Value::as_list).expect("list");
    assert_eq!(drops.len(), 2);
}

#[test]
fn trailing_input_is_reported_verbatim() {
    let mut b = SchemaBuilder::new("ping");
    b.param_int("n");
    let schema = b.build();

    let call = parse_call("2 and some more", &schema, caller(), &roster());
    assert_eq!(
        call.error,
        Some(CallError::UnusedCommandParameters {
            rest: "and some more".to_string()
        })
    );
}

#[test]
fn schema_without_sub_commands_is_a_defect() {
    let schema = Schema {
        name: "broken".to_string(),
        ..Schema::default()
    };
    let call = parse_call("anything", &schema, caller(), &roster());
    assert_eq!(call.error, Some(CallError::NoSubCommands));
}
