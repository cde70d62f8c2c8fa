//! Auto-generated help-page rendering.
//!
//! Pure `Schema -> String` formatting; routing and coloring are the
//! host's concern.

use std::fmt::Write;

use crate::param::{Param, ParamKind};
use crate::schema::{CmdOption, Schema, SubCommand};

/// Renders the help page for one command schema.
#[must_use]
pub fn render_help(schema: &Schema) -> String {
    let mut out = String::new();

    let _ = write!(out, "/{}", schema.name);
    if !schema.summary.is_empty() {
        let _ = write!(out, " - {}", schema.summary);
    }
    if !schema.group.is_empty() {
        let _ = write!(out, " ({})", schema.group);
    }
    out.push('\n');

    for sub in &schema.sub_commands {
        let _ = writeln!(out, "  {}", usage_line(schema, sub));
        if !sub.description.is_empty() {
            let _ = writeln!(out, "      {}", sub.description);
        }
    }

    if !schema.options.is_empty() {
        out.push_str("  options:\n");
        for opt in &schema.options {
            let _ = writeln!(out, "    {}", option_line(opt));
        }
    }

    out
}

/// Renders the one-line usage for a subcommand.
#[must_use]
pub fn usage_line(schema: &Schema, sub: &SubCommand) -> String {
    let mut line = format!("/{}", schema.name);
    if schema.requires_target {
        line.push_str(" <targets>");
    }
    if !sub.name.is_empty() {
        line.push(' ');
        line.push_str(&sub.name);
    }
    for param in &sub.required {
        line.push(' ');
        line.push_str(&param_marker(param, true));
    }
    for param in &sub.optional {
        line.push(' ');
        line.push_str(&param_marker(param, false));
    }
    line
}

fn option_line(opt: &CmdOption) -> String {
    let mut line = format!("--{}, -{}", opt.long_name, opt.short_name);
    for param in &opt.required {
        line.push(' ');
        line.push_str(&param_marker(param, true));
    }
    for param in &opt.optional {
        line.push(' ');
        line.push_str(&param_marker(param, false));
    }
    if !opt.description.is_empty() {
        line.push_str("  ");
        line.push_str(&opt.description);
    }
    line
}

fn param_marker(param: &Param, required: bool) -> String {
    let mut name = match param.kind {
        ParamKind::Bool => {
            let (yes, no) = param.bool_style.labels();
            format!("{}:{yes}|{no}", param.display_name)
        }
        ParamKind::Remainder => format!("{}...", param.display_name),
        _ => param.display_name.clone(),
    };
    if param.allows_list {
        name.push_str("...");
    }
    if required {
        format!("<{name}>")
    } else {
        format!("[{name}]")
    }
}
