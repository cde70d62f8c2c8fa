//! Option declaration and bundle tests.

use muster_foundation::{CallError, PlayerId, TableRoster, Value};
use muster_parser::parse_call;
use muster_schema::{Schema, SchemaBuilder};

fn roster() -> TableRoster {
    TableRoster::new()
}

fn caller() -> PlayerId {
    PlayerId(2)
}

/// `/give <item> [--silent] [--count <n> [each]] [--wrap]`
fn schema() -> Schema {
    let mut b = SchemaBuilder::new("give");
    b.param_text("item");
    b.option("silent", None);
    b.option("count", Some('n'))
        .param_int("n")
        .optional_params()
        .param_bool("each");
    b.option("wrap", None);
    b.build()
}

#[test]
fn options_interleave_with_parameters() {
    let call = parse_call("--silent apple", &schema(), caller(), &roster());
    assert!(call.ok(), "unexpected error: {:?}", call.error);
    assert!(call.has_option("silent"));
    assert_eq!(call.param("item"), Some(&Value::from("apple")));

    let call = parse_call("apple --silent", &schema(), caller(), &roster());
    assert!(call.ok(), "unexpected error: {:?}", call.error);
    assert!(call.has_option("silent"));
}

#[test]
fn option_parameters_follow_the_declaration() {
    let call = parse_call("apple --count 3 true", &schema(), caller(), &roster());
    assert!(call.ok(), "unexpected error: {:?}", call.error);
    let params = call.option_params("count").expect("count params");
    assert_eq!(params.get("n"), Some(&Value::Int(3)));
    assert_eq!(params.get("each"), Some(&Value::Bool(true)));
}

#[test]
fn a_new_option_ends_an_options_optional_block() {
    let call = parse_call("apple --count 3 --wrap", &schema(), caller(), &roster());
    assert!(call.ok(), "unexpected error: {:?}", call.error);
    let params = call.option_params("count").expect("count params");
    assert_eq!(params.get("n"), Some(&Value::Int(3)));
    assert_eq!(params.get("each"), None);
    assert!(call.has_option("wrap"));
}

#[test]
fn an_option_with_unmet_required_params_is_fatal() {
    // Input exhausted inside the block.
    let call = parse_call("apple --count", &schema(), caller(), &roster());
    assert_eq!(
        call.error,
        Some(CallError::NoRequiredParamForOption {
            option: "count".to_string()
        })
    );

    // Another option declared while the block still owes a value.
    let call = parse_call("apple --count --silent", &schema(), caller(), &roster());
    assert_eq!(
        call.error,
        Some(CallError::NoRequiredParamForOption {
            option: "count".to_string()
        })
    );
}

#[test]
fn an_option_required_list_admits_a_following_option() {
    let mut b = SchemaBuilder::new("deal");
    b.param_text("item");
    b.option("count", Some('n')).param_int_list("ns");
    b.option("silent", None);
    let schema = b.build();

    // The list's minimum element is satisfied, so the next option ends
    // the list instead of violating count's obligation.
    let call = parse_call("apple --count 1 2 --silent", &schema, caller(), &roster());
    assert!(call.ok(), "unexpected error: {:?}", call.error);
    let ns: Vec<i64> = call
        .option_params("count")
        .and_then(|m| m.get("ns"))
        .and_then(Value::as_list)
        .expect("list")
        .iter()
        .filter_map(Value::as_int)
        .collect();
    assert_eq!(ns, vec![1, 2]);
    assert!(call.has_option("silent"));
}

#[test]
fn a_new_option_ends_a_required_list_block_entirely() {
    let mut b = SchemaBuilder::new("deal");
    b.option("count", Some('n'))
        .param_int_list("ns")
        .optional_params()
        .param_bool("each");
    b.option("silent", None);
    let schema = b.build();

    // "true" follows the option that ended count's block, so it can no
    // longer be count's optional parameter.
    let call = parse_call("--count 1 --silent true", &schema, caller(), &roster());
    assert_eq!(
        call.error,
        Some(CallError::UnusedCommandParameters {
            rest: "true".to_string()
        })
    );
}

#[test]
fn unknown_options_are_fatal() {
    let call = parse_call("apple --shiny", &schema(), caller(), &roster());
    assert_eq!(
        call.error,
        Some(CallError::UnknownOption {
            text: "--shiny".to_string()
        })
    );

    let call = parse_call("apple -q", &schema(), caller(), &roster());
    assert_eq!(call.error, Some(CallError::UnknownShortOption { name: 'q' }));
}

#[test]
fn repeats_are_fatal_across_both_forms() {
    let call = parse_call("apple --silent --silent", &schema(), caller(), &roster());
    assert_eq!(
        call.error,
        Some(CallError::RepeatedOption {
            option: "silent".to_string()
        })
    );

    // Long form then short form of the same option.
    let call = parse_call("apple --wrap -w", &schema(), caller(), &roster());
    assert_eq!(
        call.error,
        Some(CallError::RepeatedOption {
            option: "wrap".to_string()
        })
    );
}

#[test]
fn bundles_expand_to_their_member_options() {
    let call = parse_call("apple -sw", &schema(), caller(), &roster());
    assert!(call.ok(), "unexpected error: {:?}", call.error);
    assert!(call.has_option("silent"));
    assert!(call.has_option("wrap"));
    assert!(call.option_params("silent").is_none());
}

#[test]
fn bundle_hands_trailing_input_to_its_parameterized_member() {
    let call = parse_call("apple -sn 4", &schema(), caller(), &roster());
    assert!(call.ok(), "unexpected error: {:?}", call.error);
    assert!(call.has_option("silent"));
    let params = call.option_params("count").expect("count params");
    assert_eq!(params.get("n"), Some(&Value::Int(4)));
}

#[test]
fn two_parameterized_options_in_one_bundle_are_ambiguous() {
    let mut b = SchemaBuilder::new("move");
    b.option("axis", None).param_int("v");
    b.option("bias", None).param_int("v");
    let schema = b.build();

    let call = parse_call("-ab 1 2", &schema, caller(), &roster());
    assert_eq!(
        call.error,
        Some(CallError::MultipleOptionsWithParams {
            bundle: "-ab".to_string()
        })
    );
}

#[test]
fn options_record_in_consumption_order() {
    let call = parse_call("--wrap apple --silent", &schema(), caller(), &roster());
    assert!(call.ok(), "unexpected error: {:?}", call.error);
    let names: Vec<&str> = call.options.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["wrap", "silent"]);
}

#[test]
fn failed_parse_discards_collected_options() {
    let call = parse_call("--silent --shiny", &schema(), caller(), &roster());
    assert!(!call.ok());
    assert!(call.options.is_empty());
    assert!(call.params.is_empty());
}
