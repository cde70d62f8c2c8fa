//! The draft-based schema builder.
//!
//! The builder keeps exactly one subcommand-or-option *draft* selected
//! for editing at a time. Parameter pushers append to the selected
//! draft; selecting a different subcommand or option commits the current
//! draft into the schema first. [`SchemaBuilder::build`] performs the
//! same commit, so a forgotten final selection switch never loses data.

use log::warn;

use crate::param::{Param, ParamKind};
use crate::schema::{CmdOption, Schema, SubCommand};

/// The entity currently selected for editing.
#[derive(Debug)]
enum Draft {
    Sub(SubCommand),
    Opt(CmdOption),
}

#[derive(Debug)]
struct DraftState {
    target: Draft,
    /// One-way switch: once optional parameters begin for this draft,
    /// no more required ones may be added.
    optional_phase: bool,
    /// Position to restore a re-selected definition to on commit, so
    /// editing an existing subcommand never changes which one is the
    /// default.
    restore_at: Option<usize>,
}

/// Stateful builder accumulating a command [`Schema`].
///
/// Construction selects an implicit empty-name subcommand, so a command
/// that never calls [`sub_command`](Self::sub_command) still ends up
/// with one (default) subcommand.
#[derive(Debug)]
pub struct SchemaBuilder {
    schema: Schema,
    draft: Option<DraftState>,
}

impl SchemaBuilder {
    /// Creates a builder for the command with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: Schema {
                name: name.into(),
                ..Schema::default()
            },
            draft: Some(DraftState {
                target: Draft::Sub(SubCommand::new("")),
                optional_phase: false,
                restore_at: None,
            }),
        }
    }

    /// Sets the help-page group label.
    pub fn group(&mut self, group: impl Into<String>) -> &mut Self {
        self.schema.group = group.into();
        self
    }

    /// Sets the one-line summary.
    pub fn summary(&mut self, summary: impl Into<String>) -> &mut Self {
        self.schema.summary = summary.into();
        self
    }

    /// Declares that invocations start with a target-selector expression.
    pub fn requires_target(&mut self) -> &mut Self {
        self.schema.requires_target = true;
        self
    }

    /// Sets the description of the currently selected draft.
    pub fn description(&mut self, text: impl Into<String>) -> &mut Self {
        match &mut self.draft {
            Some(state) => match &mut state.target {
                Draft::Sub(sub) => sub.description = text.into(),
                Draft::Opt(opt) => opt.description = text.into(),
            },
            None => warn!("description() with no subcommand or option selected"),
        }
        self
    }

    /// Selects a subcommand for editing, committing the current draft.
    ///
    /// If a subcommand with this name was already committed it is
    /// re-opened in place; otherwise a fresh one is created.
    pub fn sub_command(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.commit_draft();

        let (sub, restore_at) = match self
            .schema
            .sub_commands
            .iter()
            .position(|s| s.name == name)
        {
            Some(pos) => (self.schema.sub_commands.remove(pos), Some(pos)),
            None => (SubCommand::new(name), None),
        };
        self.draft = Some(DraftState {
            target: Draft::Sub(sub),
            optional_phase: false,
            restore_at,
        });
        self
    }

    /// Selects an option for editing, committing the current draft.
    ///
    /// The long name must be at least two characters; the short name
    /// defaults to the long name's first character. A declaration whose
    /// name pair conflicts with an existing option (same long name with
    /// a different short name, or vice versa) is rejected with a logged
    /// warning and leaves both the schema and the current draft
    /// untouched.
    pub fn option(&mut self, long_name: impl Into<String>, short_name: Option<char>) -> &mut Self {
        let long_name = long_name.into();
        if long_name.chars().count() < 2 {
            warn!("rejecting option '--{long_name}': long name must be at least 2 characters");
            return self;
        }
        let Some(derived) = long_name.chars().next() else {
            // Unreachable given the length check, but stay total.
            return self;
        };
        let short_name = short_name.unwrap_or(derived);

        // Long and short names must form a bijective pair, both against
        // committed options and against an option draft in progress.
        if self.conflicts_with_declared(&long_name, short_name) {
            warn!("rejecting option '--{long_name}'/'-{short_name}': name pair conflicts with an existing option");
            return self;
        }

        self.commit_draft();
        let (opt, restore_at) = match self
            .schema
            .options
            .iter()
            .position(|o| o.long_name == long_name)
        {
            Some(pos) => (self.schema.options.remove(pos), Some(pos)),
            None => (CmdOption::new(long_name, short_name), None),
        };
        self.draft = Some(DraftState {
            target: Draft::Opt(opt),
            optional_phase: false,
            restore_at,
        });
        self
    }

    fn conflicts_with_declared(&self, long_name: &str, short_name: char) -> bool {
        let clash = |o: &CmdOption| {
            (o.long_name == long_name) != (o.short_name == short_name)
        };
        if self.schema.options.iter().any(clash) {
            return true;
        }
        match &self.draft {
            Some(DraftState {
                target: Draft::Opt(opt),
                ..
            }) => clash(opt),
            _ => false,
        }
    }

    /// Switches the current draft to optional parameters.
    ///
    /// One-way per draft: once called, subsequent pushes go to the
    /// optional list until the selection changes.
    pub fn optional_params(&mut self) -> &mut Self {
        match &mut self.draft {
            Some(state) => state.optional_phase = true,
            None => warn!("optional_params() with no subcommand or option selected"),
        }
        self
    }

    /// Appends a parameter to the selected draft.
    ///
    /// Pushes after a `Remainder` parameter in the same list are
    /// rejected with a logged warning; a remainder swallows all input,
    /// so nothing can follow it.
    pub fn param(&mut self, param: Param) -> &mut Self {
        let Some(state) = &mut self.draft else {
            warn!(
                "dropping parameter '{}': no subcommand or option selected",
                param.display_name
            );
            return self;
        };
        let (required, optional) = match &mut state.target {
            Draft::Sub(sub) => (&mut sub.required, &mut sub.optional),
            Draft::Opt(opt) => (&mut opt.required, &mut opt.optional),
        };
        let list = if state.optional_phase {
            optional
        } else {
            required
        };
        if list.last().is_some_and(|p| p.kind == ParamKind::Remainder) {
            warn!(
                "dropping parameter '{}': nothing may follow a remainder parameter",
                param.display_name
            );
            return self;
        }
        list.push(param);
        self
    }

    /// Appends a boolean parameter.
    pub fn param_bool(&mut self, name: impl Into<String>) -> &mut Self {
        self.param(Param::new(name, ParamKind::Bool))
    }

    /// Appends a boolean list parameter.
    pub fn param_bool_list(&mut self, name: impl Into<String>) -> &mut Self {
        self.param(Param::new(name, ParamKind::Bool).list())
    }

    /// Appends an integer parameter.
    pub fn param_int(&mut self, name: impl Into<String>) -> &mut Self {
        self.param(Param::new(name, ParamKind::Int))
    }

    /// Appends an integer list parameter.
    pub fn param_int_list(&mut self, name: impl Into<String>) -> &mut Self {
        self.param(Param::new(name, ParamKind::Int).list())
    }

    /// Appends a floating-point parameter.
    pub fn param_float(&mut self, name: impl Into<String>) -> &mut Self {
        self.param(Param::new(name, ParamKind::Float))
    }

    /// Appends a floating-point list parameter.
    pub fn param_float_list(&mut self, name: impl Into<String>) -> &mut Self {
        self.param(Param::new(name, ParamKind::Float).list())
    }

    /// Appends a text parameter.
    pub fn param_text(&mut self, name: impl Into<String>) -> &mut Self {
        self.param(Param::new(name, ParamKind::Text))
    }

    /// Appends a text list parameter.
    pub fn param_text_list(&mut self, name: impl Into<String>) -> &mut Self {
        self.param(Param::new(name, ParamKind::Text).list())
    }

    /// Appends a remainder parameter, which consumes all remaining input.
    pub fn param_remainder(&mut self, name: impl Into<String>) -> &mut Self {
        self.param(Param::new(name, ParamKind::Remainder))
    }

    /// Appends an object parameter.
    pub fn param_object(&mut self, name: impl Into<String>) -> &mut Self {
        self.param(Param::new(name, ParamKind::Object))
    }

    /// Appends an object list parameter.
    pub fn param_object_list(&mut self, name: impl Into<String>) -> &mut Self {
        self.param(Param::new(name, ParamKind::Object).list())
    }

    /// Appends an array parameter.
    pub fn param_array(&mut self, name: impl Into<String>) -> &mut Self {
        self.param(Param::new(name, ParamKind::Array))
    }

    /// Appends an array list parameter.
    pub fn param_array_list(&mut self, name: impl Into<String>) -> &mut Self {
        self.param(Param::new(name, ParamKind::Array).list())
    }

    /// Commits the current draft into the schema.
    ///
    /// Invoked on every selection switch and on [`build`](Self::build);
    /// a no-op when no draft is open, so repeated builds are idempotent.
    fn commit_draft(&mut self) {
        let Some(state) = self.draft.take() else {
            return;
        };
        match state.target {
            Draft::Sub(sub) => match state.restore_at {
                Some(pos) => self.schema.sub_commands.insert(pos, sub),
                None => self.schema.sub_commands.push(sub),
            },
            Draft::Opt(opt) => match state.restore_at {
                Some(pos) => self.schema.options.insert(pos, opt),
                None => self.schema.options.push(opt),
            },
        }
    }

    /// Commits the current draft and returns the accumulated schema.
    ///
    /// May be called repeatedly; builder state is not reset, so further
    /// selections keep extending the same schema.
    pub fn build(&mut self) -> Schema {
        self.commit_draft();
        self.schema.clone()
    }
}
