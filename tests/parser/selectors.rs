//! Target selector resolution tests.

use muster_foundation::{CallError, CallErrorKind, PlayerId, TableRoster, Value};
use muster_parser::{parse_call, resolve_targets, SelectorError};
use muster_schema::{Schema, SchemaBuilder};

/// 5 players, 2 admins; the caller is the admin Dana (#4).
fn roster() -> (TableRoster, PlayerId) {
    let mut roster = TableRoster::new();
    roster.add(1, "Alice", false);
    roster.add(2, "Bob", false);
    roster.add(3, "Carol", true);
    let caller = roster.add(4, "Dana", true);
    roster.add(5, "Dave", false);
    (roster, caller)
}

/// `/heal <targets> [amount]`
fn heal_schema() -> Schema {
    let mut b = SchemaBuilder::new("heal");
    b.requires_target().optional_params().param_int("amount");
    b.build()
}

#[test]
fn single_selectors() {
    let (roster, caller) = roster();

    assert_eq!(
        resolve_targets("#2", caller, &roster).unwrap(),
        vec![PlayerId(2)]
    );
    assert_eq!(resolve_targets("@self", caller, &roster).unwrap(), vec![caller]);
    assert_eq!(resolve_targets("@", caller, &roster).unwrap(), vec![caller]);
    assert_eq!(
        resolve_targets("@admin", caller, &roster).unwrap(),
        vec![PlayerId(3), PlayerId(4)]
    );
    assert_eq!(resolve_targets("@all", caller, &roster).unwrap().len(), 5);
}

#[test]
fn name_prefix_matching() {
    let (roster, caller) = roster();

    // Case-insensitive prefix; both Dana and Dave match "da".
    assert_eq!(
        resolve_targets("da", caller, &roster).unwrap(),
        vec![PlayerId(4), PlayerId(5)]
    );
    assert_eq!(
        resolve_targets("\"Dav\"", caller, &roster).unwrap(),
        vec![PlayerId(5)]
    );
    assert!(resolve_targets("zz", caller, &roster).unwrap().is_empty());
}

#[test]
fn composition_is_an_ordered_fold() {
    let (roster, caller) = roster();

    // Admins except the caller.
    assert_eq!(
        resolve_targets("[@admin, !@self]", caller, &roster).unwrap(),
        vec![PlayerId(3)]
    );
    // Order follows selector order, duplicates are not re-inserted.
    assert_eq!(
        resolve_targets("[#5, @admin, #5]", caller, &roster).unwrap(),
        vec![PlayerId(5), PlayerId(3), PlayerId(4)]
    );
}

#[test]
fn leading_subtraction_starts_from_everyone() {
    let (roster, caller) = roster();

    assert_eq!(
        resolve_targets("!@admin", caller, &roster).unwrap(),
        vec![PlayerId(1), PlayerId(2), PlayerId(5)]
    );
    assert!(resolve_targets("!@all", caller, &roster).unwrap().is_empty());
}

#[test]
fn malformed_expressions() {
    let (roster, caller) = roster();

    assert_eq!(
        resolve_targets("[@all", caller, &roster),
        Err(SelectorError::UnmatchedBracket)
    );
    assert_eq!(
        resolve_targets("[]", caller, &roster),
        Err(SelectorError::EmptySelector)
    );
    assert_eq!(
        resolve_targets("#none", caller, &roster),
        Err(SelectorError::BadKey)
    );
    assert_eq!(
        resolve_targets("\"unfinished", caller, &roster),
        Err(SelectorError::UnterminatedName)
    );
}

#[test]
fn invocations_resolve_targets_before_parameters() {
    let (roster, caller) = roster();
    let schema = heal_schema();

    let call = parse_call("[@admin, !@self] 50", &schema, caller, &roster);
    assert!(call.ok(), "unexpected error: {:?}", call.error);
    assert_eq!(call.targets, vec![PlayerId(3)]);
    assert_eq!(call.param("amount"), Some(&Value::Int(50)));
}

#[test]
fn malformed_selector_fails_the_invocation() {
    let (roster, caller) = roster();
    let schema = heal_schema();

    let call = parse_call("[@admin 50", &schema, caller, &roster);
    assert_eq!(
        call.error.as_ref().map(CallError::kind),
        Some(CallErrorKind::IncorrectTargetList)
    );
}

#[test]
fn empty_result_is_its_own_error() {
    let (roster, caller) = roster();
    let schema = heal_schema();

    let call = parse_call("!@all 50", &schema, caller, &roster);
    assert_eq!(
        call.error,
        Some(CallError::EmptyTargetList {
            expr: "!@all".to_string()
        })
    );
}

#[test]
fn unknown_macro_parses_but_matches_no_one() {
    let (roster, caller) = roster();
    let schema = heal_schema();

    let call = parse_call("@ghosts", &schema, caller, &roster);
    assert_eq!(
        call.error,
        Some(CallError::EmptyTargetList {
            expr: "@ghosts".to_string()
        })
    );
}
