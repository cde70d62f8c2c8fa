//! The invocation parser.
//!
//! Consumes one line of player input against a command [`Schema`] and
//! produces a [`CallData`]. The grammar interleaves option declarations
//! with parameter values: before every value attempt (except for a
//! remainder parameter, which always wins) the engine first tries to
//! read `--long` or `-bundle` option syntax, with one deliberate
//! ambiguity carve-out: a dash followed by digits or a dot is a
//! negative number, never an option.
//!
//! Failure semantics: the first fatal condition wins, parsing halts
//! immediately, and partially collected values for the failing
//! parameter are discarded. Running out of input while parsing optional
//! parameters is not an error.

use muster_foundation::{ArgList, ArgMap, CallError, PlayerId, Roster, Value};
use muster_schema::{CmdOption, Param, ParamKind, Schema, SubCommand};

use crate::call::{CallData, OptionTable};
use crate::cursor::Cursor;
use crate::json;
use crate::selector;
use crate::session::{ParseSession, Slot};

/// Parses one invocation from an input string.
///
/// Convenience wrapper over [`parse_call_with`] for hosts that have the
/// line as a plain string.
#[must_use]
pub fn parse_call(
    input: &str,
    schema: &Schema,
    caller: PlayerId,
    roster: &dyn Roster,
) -> CallData {
    let mut cursor = Cursor::new(input);
    parse_call_with(&mut cursor, schema, caller, roster)
}

/// Parses one invocation from an existing cursor.
///
/// The cursor is consumed to completion on success; on failure it is
/// left wherever the fatal condition was met.
#[must_use]
pub fn parse_call_with(
    cur: &mut Cursor<'_>,
    schema: &Schema,
    caller: PlayerId,
    roster: &dyn Roster,
) -> CallData {
    if !cur.is_ok() {
        return CallData::failed(CallError::BadParser);
    }
    let Some(default_sub) = schema.default_sub_command() else {
        return CallData::failed(CallError::NoSubCommands);
    };

    let mut targets = Vec::new();
    if schema.requires_target {
        cur.skip_spaces();
        let mark = cur.mark();
        match selector::parse_targets(cur, caller, roster) {
            Ok(set) if set.is_empty() => {
                let expr = cur.since(mark).trim().to_string();
                return CallData::failed(CallError::EmptyTargetList { expr });
            }
            Ok(set) => targets = set,
            Err(_) => {
                cur.reset(mark);
                let expr = cur.rest().trim().to_string();
                return CallData::failed(CallError::IncorrectTargetList { expr });
            }
        }
    }

    // Subcommand selection: if the first token is no declared name, it
    // belongs to the default subcommand's parameters instead.
    cur.skip_spaces();
    let mark = cur.mark();
    let token = cur.take_word();
    let sub = match schema.sub_command(token) {
        Some(s) if !token.is_empty() => s,
        _ => {
            cur.reset(mark);
            default_sub
        }
    };

    let mut engine = Engine {
        schema,
        session: ParseSession::new(),
        options: OptionTable::new(),
    };

    match engine.parse_sub(cur, sub) {
        Ok(params) => CallData {
            targets,
            sub_command: sub.name.clone(),
            params,
            options: engine.options,
            error: None,
        },
        Err(error) => {
            let mut call = CallData::failed(error);
            call.targets = targets;
            call.sub_command = sub.name.clone();
            call
        }
    }
}

/// One parse attempt's working state.
struct Engine<'a> {
    schema: &'a Schema,
    session: ParseSession,
    options: OptionTable,
}

impl<'a> Engine<'a> {
    /// Parses the subcommand's parameter arrays and checks that nothing
    /// is left over.
    fn parse_sub(
        &mut self,
        cur: &mut Cursor<'_>,
        sub: &'a SubCommand,
    ) -> Result<ArgMap, CallError> {
        let params = self.parse_block(cur, &sub.required, &sub.optional, None)?;
        cur.skip_spaces();
        if !cur.at_end() {
            return Err(CallError::UnusedCommandParameters {
                rest: cur.rest().to_string(),
            });
        }
        Ok(params)
    }

    /// Parses one parameter array: all required parameters in order,
    /// then optional ones greedily, then trailing option declarations.
    ///
    /// Shared between subcommands (`owner` is `None`) and option blocks
    /// (`owner` is the option being filled). A required failure is
    /// fatal; an optional failure rolls the cursor back and stops.
    fn parse_block(
        &mut self,
        cur: &mut Cursor<'_>,
        required: &'a [Param],
        optional: &'a [Param],
        owner: Option<&'a CmdOption>,
    ) -> Result<ArgMap, CallError> {
        let prev_open = self.session.open_option.take();
        if let Some(opt) = owner {
            if !opt.required.is_empty() {
                self.session.open_option = Some(opt.long_name.clone());
            }
        }

        let mut out = ArgMap::new();

        for (index, param) in required.iter().enumerate() {
            if param.kind == ParamKind::Remainder {
                cur.skip_spaces();
                out.insert(param.key(), Value::Str(cur.take_rest().to_string()));
                continue;
            }
            self.attempt_options(cur)?;
            self.session.slot = if index + 1 == required.len() {
                Slot::LastNecessary
            } else {
                Slot::Necessary
            };
            let Some(first) = parse_scalar(cur, param) else {
                return Err(match owner {
                    Some(opt) => CallError::NoRequiredParamForOption {
                        option: opt.long_name.clone(),
                    },
                    None => CallError::NoRequiredParam {
                        param: param.display_name.clone(),
                    },
                });
            };
            if self.session.slot == Slot::LastNecessary {
                // The final required parameter has its minimum value;
                // the block owes nothing more, so a new option
                // declaration is legitimate again.
                self.session.open_option = None;
            }
            if param.allows_list {
                let mut list = ArgList::new();
                list.push(first);
                let ended_by_option = self.collect_list_tail(cur, param, owner, &mut list)?;
                out.insert(param.key(), Value::List(list));
                if ended_by_option {
                    self.session.open_option = prev_open;
                    return Ok(out);
                }
            } else {
                out.insert(param.key(), first);
            }
        }

        // Required obligations end here; from now on a new option
        // declaration is legitimate again.
        self.session.open_option = None;
        self.session.slot = Slot::Extra;

        for param in optional {
            if param.kind == ParamKind::Remainder {
                cur.skip_spaces();
                out.insert(param.key(), Value::Str(cur.take_rest().to_string()));
                continue;
            }
            let consumed = self.attempt_options(cur)?;
            if consumed > 0 && owner.is_some() {
                // A new option terminates an option's own block.
                self.session.open_option = prev_open;
                return Ok(out);
            }
            let mark = cur.mark();
            let Some(first) = parse_scalar(cur, param) else {
                cur.reset(mark);
                break;
            };
            if param.allows_list {
                let mut list = ArgList::new();
                list.push(first);
                let ended_by_option = self.collect_list_tail(cur, param, owner, &mut list)?;
                out.insert(param.key(), Value::List(list));
                if ended_by_option {
                    self.session.open_option = prev_open;
                    return Ok(out);
                }
            } else {
                out.insert(param.key(), first);
            }
        }

        // Trailing option declarations.
        self.attempt_options(cur)?;
        self.session.open_option = prev_open;
        Ok(out)
    }

    /// Greedily extends a list parameter until a value fails to parse.
    ///
    /// Returns true if, inside an option's block, a new option
    /// declaration ended the collection.
    fn collect_list_tail(
        &mut self,
        cur: &mut Cursor<'_>,
        param: &'a Param,
        owner: Option<&'a CmdOption>,
        list: &mut ArgList,
    ) -> Result<bool, CallError> {
        let slot = self.session.slot;
        loop {
            let consumed = self.attempt_options(cur)?;
            self.session.slot = slot;
            if consumed > 0 && owner.is_some() {
                return Ok(true);
            }
            let mark = cur.mark();
            match parse_scalar(cur, param) {
                Some(value) => list.push(value),
                None => {
                    cur.reset(mark);
                    return Ok(false);
                }
            }
        }
    }

    /// Attempts option declarations until none match.
    ///
    /// Returns how many were consumed. A dash followed by digits or a
    /// dot is a negative number and never starts an option.
    fn attempt_options(&mut self, cur: &mut Cursor<'_>) -> Result<usize, CallError> {
        let mut consumed = 0;
        loop {
            let mark = cur.mark();
            cur.skip_spaces();
            if cur.eat_literal("--") {
                self.guard_open_option()?;
                self.parse_long_option(cur)?;
                consumed += 1;
                continue;
            }
            if cur.eat_literal("-") {
                match cur.peek() {
                    Some(c) if !c.is_ascii_digit() && c != '.' && !c.is_whitespace() => {
                        self.guard_open_option()?;
                        self.parse_bundle(cur)?;
                        consumed += 1;
                        continue;
                    }
                    _ => {
                        cur.reset(mark);
                        break;
                    }
                }
            }
            cur.reset(mark);
            break;
        }
        Ok(consumed)
    }

    /// An option declaration while another option still has unmet
    /// required parameters is fatal.
    fn guard_open_option(&self) -> Result<(), CallError> {
        match &self.session.open_option {
            Some(option) => Err(CallError::NoRequiredParamForOption {
                option: option.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Resolves a `--long` declaration; the cursor sits after the dashes.
    fn parse_long_option(&mut self, cur: &mut Cursor<'_>) -> Result<(), CallError> {
        let schema = self.schema;
        let name = cur.take_word();
        let Some(opt) = schema.long_option(name) else {
            return Err(CallError::UnknownOption {
                text: format!("--{name}"),
            });
        };
        if self.session.is_used(&opt.long_name) {
            return Err(CallError::RepeatedOption {
                option: opt.long_name.clone(),
            });
        }
        self.session.mark_used(&opt.long_name);
        self.enter_option(cur, opt)
    }

    /// Resolves a `-abc` short-option bundle; the cursor sits after the
    /// dash.
    ///
    /// Every character must name a distinct unused option. At most one
    /// option in the bundle may declare parameters; that one consumes
    /// the trailing input.
    fn parse_bundle(&mut self, cur: &mut Cursor<'_>) -> Result<(), CallError> {
        let schema = self.schema;
        let bundle = cur.take_word().to_string();
        let mut parameterized: Option<&'a CmdOption> = None;

        for ch in bundle.chars() {
            let Some(opt) = schema.short_option(ch) else {
                return Err(CallError::UnknownShortOption { name: ch });
            };
            if self.session.is_used(&opt.long_name) {
                return Err(CallError::RepeatedOption {
                    option: opt.long_name.clone(),
                });
            }
            self.session.mark_used(&opt.long_name);
            if opt.has_params() {
                if parameterized.is_some() {
                    return Err(CallError::MultipleOptionsWithParams {
                        bundle: format!("-{bundle}"),
                    });
                }
                parameterized = Some(opt);
            }
            // Placeholder keeps the bundle's declaration order; a
            // parameterized option overwrites it in place below.
            self.options.insert(opt.long_name.clone(), None);
        }

        if let Some(opt) = parameterized {
            let values = self.parse_block(cur, &opt.required, &opt.optional, Some(opt))?;
            self.options.insert(opt.long_name.clone(), Some(values));
        }
        Ok(())
    }

    /// Consumes an already-resolved option's parameter block.
    fn enter_option(&mut self, cur: &mut Cursor<'_>, opt: &'a CmdOption) -> Result<(), CallError> {
        // Record the declaration before its block, so options nested in
        // the block land after it in the table.
        self.options.insert(opt.long_name.clone(), None);
        if opt.has_params() {
            let values = self.parse_block(cur, &opt.required, &opt.optional, Some(opt))?;
            self.options.insert(opt.long_name.clone(), Some(values));
        }
        Ok(())
    }
}

/// Parses one value of the parameter's kind.
///
/// Purely speculative: on failure the cursor is restored and `None`
/// returned; fatality is the caller's decision.
fn parse_scalar(cur: &mut Cursor<'_>, param: &Param) -> Option<Value> {
    let mark = cur.mark();
    cur.skip_spaces();
    let value = match param.kind {
        ParamKind::Bool => parse_bool(cur),
        ParamKind::Int => {
            let word = cur.take_word();
            word.parse::<i64>().ok().map(Value::Int)
        }
        ParamKind::Float => {
            let word = cur.take_word();
            word.parse::<f64>().ok().map(Value::Float)
        }
        ParamKind::Text => parse_text(cur),
        ParamKind::Object => json::parse_object(cur).map(Value::Map),
        ParamKind::Array => json::parse_array(cur).map(Value::List),
        ParamKind::Remainder => Some(Value::Str(cur.take_rest().to_string())),
    };
    if value.is_none() {
        cur.reset(mark);
    }
    value
}

fn parse_bool(cur: &mut Cursor<'_>) -> Option<Value> {
    let word = cur.take_word().to_lowercase();
    match word.as_str() {
        "true" | "enable" | "on" | "yes" => Some(Value::Bool(true)),
        "false" | "disable" | "off" | "no" => Some(Value::Bool(false)),
        _ => None,
    }
}

fn parse_text(cur: &mut Cursor<'_>) -> Option<Value> {
    if cur.peek() == Some('"') {
        return cur.take_quoted().map(Value::Str);
    }
    let word = cur.take_word();
    if word.is_empty() {
        None
    } else {
        Some(Value::Str(word.to_string()))
    }
}
