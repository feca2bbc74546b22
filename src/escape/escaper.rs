use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

use super::argument::Argument;
use super::error::{EscapeError, EscapeResult};
use super::flags::EscapeFlags;

/// Literal text of the interpreter's null value.
pub const NONE_LITERAL: &str = "None";

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"\r?\n").expect("line break pattern");
}

/// Converts one argument into its source-literal form.
///
/// Null, primitive and variable arguments ignore `flags` entirely; only
/// object arguments go through the text pipeline.
pub fn escape_argument(argument: &Argument, flags: EscapeFlags) -> EscapeResult<String> {
    match argument {
        Argument::Null => Ok(NONE_LITERAL.to_string()),
        Argument::Variable(expression) => Ok(expression.clone()),
        Argument::Int(value) => Ok(value.to_string()),
        Argument::UInt(value) => Ok(value.to_string()),
        Argument::Float(value) => Ok(float_literal(*value)),
        Argument::Bool(value) => Ok(bool_literal(*value).to_string()),
        Argument::Object(text) => escape_text(text, flags),
    }
}

/// Runs the text pipeline: quote, then comma-escape, then raw-wrap.
pub fn escape_text(text: &str, flags: EscapeFlags) -> EscapeResult<String> {
    flags.validate()?;

    let mut text = text.to_string();
    if flags.contains(EscapeFlags::QUOTES) {
        check_quoted_body(&text, flags)?;
        let single_line = LINE_BREAK.replace_all(&text, NoExpand(r"\n"));
        text = format!("\"{}\"", single_line.replace('"', "\\\""));
    }
    if flags.contains(EscapeFlags::ESCAPE_BUILTIN) {
        text = text.replace(',', "\\,");
    }
    if flags.contains(EscapeFlags::RAW_STRING) {
        check_raw_body(&text, flags)?;
        text = format!("r'{}'", text);
    }
    Ok(text)
}

/// True when the remote side rendered a value as its null literal.
pub fn is_none_literal(value: &str) -> bool {
    value == NONE_LITERAL
}

pub fn bool_literal(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Shortest round-trip form; non-finite values become `float(...)` calls.
pub fn float_literal(value: f64) -> String {
    if value.is_nan() {
        "float('nan')".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "float('inf')".to_string()
        } else {
            "float('-inf')".to_string()
        }
    } else {
        format!("{:?}", value)
    }
}

// Backslashes pass through unescaped under quotes, so an odd run of them
// must not swallow the closing quote or an escaped embedded quote.
fn check_quoted_body(text: &str, flags: EscapeFlags) -> EscapeResult<()> {
    let mut run = 0usize;
    for c in text.chars() {
        match c {
            '\\' => run += 1,
            '"' if run % 2 == 1 => {
                return Err(EscapeError::invalid_combination(
                    flags,
                    "quoted text has a double quote after an unpaired backslash",
                ));
            }
            _ => run = 0,
        }
    }
    if run % 2 == 1 {
        return Err(EscapeError::invalid_combination(
            flags,
            "quoted text ends with an unpaired backslash",
        ));
    }
    Ok(())
}

// A single-quoted raw literal cannot hold a quote, a line break or a
// trailing odd backslash.
fn check_raw_body(text: &str, flags: EscapeFlags) -> EscapeResult<()> {
    if text.contains('\'') {
        return Err(EscapeError::invalid_combination(
            flags,
            "raw string text contains a single quote",
        ));
    }
    if text.contains(['\n', '\r']) {
        return Err(EscapeError::invalid_combination(
            flags,
            "raw string text contains a line break",
        ));
    }
    let trailing = text.chars().rev().take_while(|c| *c == '\\').count();
    if trailing % 2 == 1 {
        return Err(EscapeError::invalid_combination(
            flags,
            "raw string text ends with an unpaired backslash",
        ));
    }
    Ok(())
}
