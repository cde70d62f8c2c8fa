//! Target selector grammar and evaluation.
//!
//! Selectors name sets of players: `#4` by numeric key, `Ali` or
//! `"Ali Baba"` by name prefix, `@self`/`@admin`/`@all` by role macro.
//! A `!` prefix subtracts instead of adds, and `[a, !b, @admin]`
//! composes selectors left to right over a roster snapshot.
//!
//! Evaluation is a fold: the first selector seeds the working set
//! (empty for additive, the full snapshot for subtractive), each later
//! selector inserts or removes its matches in order, without
//! deduplicating or reordering what is already there.

use thiserror::Error;

use muster_foundation::{PlayerId, Roster};

use crate::cursor::Cursor;

/// Characters that end a bare selector token.
const SELECTOR_ENDS: &[char] = &[',', ']', '[', ' ', '\t', '\n', '\r'];

/// A malformed selector expression.
///
/// The invocation layer reports any of these as `IncorrectTargetList`;
/// the distinction exists for diagnostics and tests.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    /// A `[` list was never closed (or ran into unexpected text).
    #[error("unmatched '[' in target selector")]
    UnmatchedBracket,
    /// A selector body was empty (`[]`, `[a,,b]`, a lone `!`).
    #[error("empty selector")]
    EmptySelector,
    /// `#` was not followed by a usable numeric key.
    #[error("expected a numeric player key after '#'")]
    BadKey,
    /// A quoted player name was never terminated.
    #[error("unterminated quoted player name")]
    UnterminatedName,
    /// Text remained after a complete selector expression.
    #[error("unexpected trailing text after target selector")]
    TrailingInput,
}

#[derive(Clone, Debug, PartialEq)]
enum Body {
    /// `#4`: exact numeric key.
    Key(u32),
    /// `@word`: role macro (empty word means the caller).
    Macro(String),
    /// Bare or quoted text, matched as a case-insensitive name prefix.
    Name(String),
}

#[derive(Clone, Debug, PartialEq)]
struct Selector {
    negated: bool,
    body: Body,
}

/// Resolves a standalone selector expression against a roster snapshot.
///
/// The whole input must be one expression; trailing text is an error.
/// An `Ok` result may be empty; the caller distinguishes "matched no
/// one" from "did not parse".
///
/// # Errors
///
/// Returns a [`SelectorError`] if the expression is malformed.
pub fn resolve_targets(
    expr: &str,
    caller: PlayerId,
    roster: &dyn Roster,
) -> Result<Vec<PlayerId>, SelectorError> {
    let mut cur = Cursor::new(expr);
    let targets = parse_targets(&mut cur, caller, roster)?;
    cur.skip_spaces();
    if !cur.at_end() {
        return Err(SelectorError::TrailingInput);
    }
    Ok(targets)
}

/// Parses one selector expression from the cursor and resolves it.
///
/// Consumes exactly the expression, leaving any following invocation
/// text for the caller.
///
/// # Errors
///
/// Returns a [`SelectorError`] if the expression is malformed.
pub fn parse_targets(
    cur: &mut Cursor<'_>,
    caller: PlayerId,
    roster: &dyn Roster,
) -> Result<Vec<PlayerId>, SelectorError> {
    let selectors = parse_expression(cur)?;
    Ok(evaluate(&selectors, caller, roster))
}

fn parse_expression(cur: &mut Cursor<'_>) -> Result<Vec<Selector>, SelectorError> {
    cur.skip_spaces();
    if !cur.eat_literal("[") {
        return Ok(vec![parse_selector(cur)?]);
    }

    let mut selectors = Vec::new();
    loop {
        cur.skip_spaces();
        selectors.push(parse_selector(cur)?);
        cur.skip_spaces();
        if cur.eat_literal(",") {
            continue;
        }
        if cur.eat_literal("]") {
            return Ok(selectors);
        }
        return Err(SelectorError::UnmatchedBracket);
    }
}

fn parse_selector(cur: &mut Cursor<'_>) -> Result<Selector, SelectorError> {
    let negated = cur.eat_literal("!");
    let body = match cur.peek() {
        Some('#') => {
            cur.advance();
            match cur.take_int().map(u32::try_from) {
                Some(Ok(key)) => Body::Key(key),
                _ => return Err(SelectorError::BadKey),
            }
        }
        Some('@') => {
            cur.advance();
            Body::Macro(cur.take_until(SELECTOR_ENDS).to_lowercase())
        }
        Some('"') => match cur.take_quoted() {
            Some(name) if !name.is_empty() => Body::Name(name),
            Some(_) => return Err(SelectorError::EmptySelector),
            None => return Err(SelectorError::UnterminatedName),
        },
        _ => {
            let word = cur.take_until(SELECTOR_ENDS);
            if word.is_empty() {
                return Err(SelectorError::EmptySelector);
            }
            Body::Name(word.to_string())
        }
    };
    Ok(Selector { negated, body })
}

fn evaluate(selectors: &[Selector], caller: PlayerId, roster: &dyn Roster) -> Vec<PlayerId> {
    let snapshot = roster.players();

    // The first selector seeds the working set: additive starts empty,
    // subtractive starts from the full snapshot.
    let mut set: Vec<PlayerId> = match selectors.first() {
        Some(sel) if sel.negated => snapshot.clone(),
        _ => Vec::new(),
    };

    for sel in selectors {
        let matched = matches(&sel.body, caller, roster, &snapshot);
        if sel.negated {
            set.retain(|p| !matched.contains(p));
        } else {
            for player in matched {
                if !set.contains(&player) {
                    set.push(player);
                }
            }
        }
    }
    set
}

fn matches(
    body: &Body,
    caller: PlayerId,
    roster: &dyn Roster,
    snapshot: &[PlayerId],
) -> Vec<PlayerId> {
    match body {
        Body::Key(key) => snapshot.iter().filter(|p| p.key() == *key).copied().collect(),
        Body::Macro(word) => match word.as_str() {
            "" | "self" | "me" => vec![caller],
            "admin" => snapshot.iter().filter(|p| roster.is_admin(**p)).copied().collect(),
            "all" => snapshot.to_vec(),
            // Unknown macros are syntactically valid and match no one.
            _ => Vec::new(),
        },
        Body::Name(prefix) => {
            let prefix = prefix.to_lowercase();
            snapshot
                .iter()
                .filter(|p| roster.display_name(**p).to_lowercase().starts_with(&prefix))
                .copied()
                .collect()
        }
    }
}
