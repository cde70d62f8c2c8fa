//! JSON-shaped value sub-grammar.
//!
//! `Object` and `Array` parameters accept JSON-like literals typed
//! straight into chat: `{durability: 50, name: "axe"}` or `[1, 2, 3]`.
//! Keys may be quoted or bare identifiers. Results land in the nested
//! [`Value`] tree; `null` maps to an empty text value.
//!
//! The grammar shares the invocation cursor and its backtracking
//! contract: on any malformed input the cursor is restored to where the
//! sub-parse began and `None` is returned.

use muster_foundation::{ArgList, ArgMap, Value};

use crate::cursor::Cursor;

/// Parses a `{...}` object into an ordered map.
#[must_use]
pub fn parse_object(cur: &mut Cursor<'_>) -> Option<ArgMap> {
    let mark = cur.mark();
    cur.skip_spaces();
    if !cur.eat_literal("{") {
        cur.reset(mark);
        return None;
    }

    let mut map = ArgMap::new();
    cur.skip_spaces();
    if cur.eat_literal("}") {
        return Some(map);
    }

    loop {
        cur.skip_spaces();
        let Some(key) = parse_key(cur) else {
            cur.reset(mark);
            return None;
        };
        cur.skip_spaces();
        if !cur.eat_literal(":") {
            cur.reset(mark);
            return None;
        }
        let Some(value) = parse_value(cur) else {
            cur.reset(mark);
            return None;
        };
        map.insert(key, value);

        cur.skip_spaces();
        if cur.eat_literal(",") {
            continue;
        }
        if cur.eat_literal("}") {
            return Some(map);
        }
        cur.reset(mark);
        return None;
    }
}

/// Parses a `[...]` array into an ordered list.
#[must_use]
pub fn parse_array(cur: &mut Cursor<'_>) -> Option<ArgList> {
    let mark = cur.mark();
    cur.skip_spaces();
    if !cur.eat_literal("[") {
        cur.reset(mark);
        return None;
    }

    let mut list = ArgList::new();
    cur.skip_spaces();
    if cur.eat_literal("]") {
        return Some(list);
    }

    loop {
        let Some(value) = parse_value(cur) else {
            cur.reset(mark);
            return None;
        };
        list.push(value);

        cur.skip_spaces();
        if cur.eat_literal(",") {
            continue;
        }
        if cur.eat_literal("]") {
            return Some(list);
        }
        cur.reset(mark);
        return None;
    }
}

/// Parses any JSON-shaped value.
#[must_use]
pub fn parse_value(cur: &mut Cursor<'_>) -> Option<Value> {
    cur.skip_spaces();
    match cur.peek()? {
        '{' => parse_object(cur).map(Value::Map),
        '[' => parse_array(cur).map(Value::List),
        '"' => cur.take_quoted().map(Value::Str),
        _ => parse_scalar_word(cur),
    }
}

/// Delimiters that end a bare word inside object/array syntax.
const WORD_ENDS: &[char] = &[',', ':', '}', ']', ' ', '\t', '\n', '\r'];

fn parse_key(cur: &mut Cursor<'_>) -> Option<String> {
    if cur.peek() == Some('"') {
        return cur.take_quoted().filter(|k| !k.is_empty());
    }
    let word = cur.take_until(WORD_ENDS);
    if word.is_empty() {
        None
    } else {
        Some(word.to_string())
    }
}

fn parse_scalar_word(cur: &mut Cursor<'_>) -> Option<Value> {
    let mark = cur.mark();
    let word = cur.take_until(WORD_ENDS);

    match word {
        "" => {
            cur.reset(mark);
            None
        }
        "true" => Some(Value::Bool(true)),
        "false" => Some(Value::Bool(false)),
        "null" => Some(Value::Str(String::new())),
        _ => {
            if let Ok(n) = word.parse::<i64>() {
                return Some(Value::Int(n));
            }
            if let Ok(n) = word.parse::<f64>() {
                return Some(Value::Float(n));
            }
            cur.reset(mark);
            None
        }
    }
}
