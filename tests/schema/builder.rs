//! Schema builder tests.

use muster_schema::{BoolStyle, Param, ParamKind, SchemaBuilder};

#[test]
fn implicit_default_sub_command_exists() {
    let mut b = SchemaBuilder::new("heal");
    let schema = b.build();

    assert_eq!(schema.name, "heal");
    assert_eq!(schema.sub_commands.len(), 1);
    assert_eq!(schema.sub_commands[0].name, "");
    assert!(schema.default_sub_command().is_some());
}

#[test]
fn params_split_between_required_and_optional() {
    let mut b = SchemaBuilder::new("give");
    b.param_text("item")
        .param_int("amount")
        .optional_params()
        .param_bool("announce")
        .param_float("weight");
    let schema = b.build();

    let sub = schema.default_sub_command().unwrap();
    assert_eq!(sub.required.len(), 2);
    assert_eq!(sub.optional.len(), 2);
    assert_eq!(sub.required[0].kind, ParamKind::Text);
    assert_eq!(sub.optional[1].kind, ParamKind::Float);
}

#[test]
fn sub_command_switching_and_reopening() {
    let mut b = SchemaBuilder::new("region");
    b.param_text("name");
    b.sub_command("remove").param_text("name");
    b.sub_command("list");
    // Re-open the default subcommand; it must stay the first one.
    b.sub_command("").optional_params().param_bool("force");
    let schema = b.build();

    assert_eq!(schema.sub_commands.len(), 3);
    assert_eq!(schema.sub_commands[0].name, "");
    assert_eq!(schema.sub_commands[0].required.len(), 1);
    assert_eq!(schema.sub_commands[0].optional.len(), 1);
    assert_eq!(schema.sub_commands[1].name, "remove");
    assert_eq!(schema.sub_commands[2].name, "list");
}

#[test]
fn option_declarations() {
    let mut b = SchemaBuilder::new("give");
    b.option("silent", None).description("no chat feedback");
    b.option("count", Some('n')).param_int("n");
    let schema = b.build();

    assert_eq!(schema.options.len(), 2);
    let silent = schema.long_option("silent").unwrap();
    assert_eq!(silent.short_name, 's');
    assert!(!silent.has_params());
    let count = schema.short_option('n').unwrap();
    assert_eq!(count.long_name, "count");
    assert!(count.has_params());
}

#[test]
fn conflicting_option_names_are_rejected() {
    let mut b = SchemaBuilder::new("give");
    b.option("silent", Some('s'));
    // Same short name, different long name.
    b.option("sort", Some('s'));
    // Same long name, different short name.
    b.option("silent", Some('z'));
    // Too-short long name.
    b.option("s", None);
    let schema = b.build();

    assert_eq!(schema.options.len(), 1);
    assert_eq!(schema.options[0].long_name, "silent");
}

#[test]
fn remainder_must_be_last() {
    let mut b = SchemaBuilder::new("say");
    b.param_remainder("message").param_int("volume");
    let schema = b.build();

    let sub = schema.default_sub_command().unwrap();
    assert_eq!(sub.required.len(), 1);
    assert_eq!(sub.required[0].kind, ParamKind::Remainder);
}

#[test]
fn custom_variable_names_and_styles() {
    let mut b = SchemaBuilder::new("pvp");
    b.param(
        Param::new("enabled", ParamKind::Bool)
            .with_variable_name("pvp_enabled")
            .with_bool_style(BoolStyle::OnOff),
    );
    let schema = b.build();

    let param = &schema.default_sub_command().unwrap().required[0];
    assert_eq!(param.key(), "pvp_enabled");
    assert_eq!(param.display_name, "enabled");
    assert_eq!(param.bool_style.labels(), ("on", "off"));
}

#[test]
fn build_commits_open_draft_and_is_repeatable() {
    let mut b = SchemaBuilder::new("warp");
    b.sub_command("to").param_text("place");
    let first = b.build();
    let second = b.build();

    assert_eq!(first, second);
    assert!(first.sub_command("to").is_some());
}
