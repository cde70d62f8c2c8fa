//! End-to-end flows across schema, parser, and help rendering.

use muster_foundation::{PlayerId, TableRoster, Value};
use muster_parser::parse_call;
use muster_schema::{render_help, Schema, SchemaBuilder};

/// A region-management command exercising most of the grammar:
/// subcommands, typed parameters, lists, objects, and options.
fn region_schema() -> Schema {
    let mut b = SchemaBuilder::new("region");
    b.summary("manage protected regions").group("admin");
    b.param_text("name");
    b.sub_command("create")
        .description("define a new region")
        .param_text("name")
        .param_float("x")
        .param_float("y")
        .optional_params()
        .param_object("attrs");
    b.sub_command("tag")
        .param_text("name")
        .param_text_list("tags");
    b.option("silent", None).description("no chat feedback");
    b.option("priority", Some('p')).param_int("level");
    b.build()
}

fn caller() -> PlayerId {
    PlayerId(1)
}

fn roster() -> TableRoster {
    TableRoster::new()
}

#[test]
fn create_with_nested_attributes() {
    let call = parse_call(
        r#"create spawn -10.5 44 {pvp: false, greeting: "welcome"} --priority 3"#,
        &region_schema(),
        caller(),
        &roster(),
    );
    assert!(call.ok(), "unexpected error: {:?}", call.error);
    assert_eq!(call.sub_command, "create");
    assert_eq!(call.param("x"), Some(&Value::Float(-10.5)));
    assert_eq!(call.param("y"), Some(&Value::Float(44.0)));

    let attrs = call.param("attrs").and_then(Value::as_map).expect("map");
    assert_eq!(attrs.get("pvp"), Some(&Value::Bool(false)));
    assert_eq!(attrs.get("greeting"), Some(&Value::from("welcome")));

    let priority = call.option_params("priority").expect("priority params");
    assert_eq!(priority.get("level"), Some(&Value::Int(3)));
}

#[test]
fn tag_collects_a_text_list() {
    let call = parse_call(
        "tag spawn pvp event winter --silent",
        &region_schema(),
        caller(),
        &roster(),
    );
    assert!(call.ok(), "unexpected error: {:?}", call.error);
    let tags: Vec<&str> = call
        .param("tags")
        .and_then(Value::as_list)
        .expect("list")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(tags, vec!["pvp", "event", "winter"]);
    assert!(call.has_option("silent"));
}

#[test]
fn default_sub_command_handles_plain_lookup() {
    let call = parse_call("spawn", &region_schema(), caller(), &roster());
    assert!(call.ok(), "unexpected error: {:?}", call.error);
    assert_eq!(call.sub_command, "");
    assert_eq!(call.param("name"), Some(&Value::from("spawn")));
}

#[test]
fn help_page_reflects_the_whole_grammar() {
    let page = render_help(&region_schema());

    assert!(page.contains("manage protected regions"));
    assert!(page.contains("/region create <name> <x> <y> [attrs]"));
    assert!(page.contains("/region tag <name> <tags...>"));
    assert!(page.contains("--priority, -p <level>"));
    assert!(page.contains("--silent, -s  no chat feedback"));
}
