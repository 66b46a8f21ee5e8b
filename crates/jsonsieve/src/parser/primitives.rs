//! Resumable readers for primitive lexemes and object keys.
//!
//! A reader inspects the front of the unconsumed text and either recognizes
//! a complete lexeme or returns [`Progress::NeedMore`] without touching the
//! buffer. Because nothing is consumed until the lexeme is complete, a
//! reader re-driven after more bytes arrive simply retries from the same
//! position.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;
use crate::value::Value;

use super::node::Progress;
use super::{buffer, scanner, Context};

/// A JSON number lexeme. The terminator lookahead is applied separately:
/// a match alone could still be extended by bytes that have not arrived.
static NUMBER_LEXEME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?").expect("number lexeme regex")
});

/// A character that can legally follow a number or literal.
fn is_terminator(ch: char) -> bool {
    buffer::is_json_whitespace(ch) || matches!(ch, ',' | '}' | ']')
}

fn decode_string(lexeme: &str, path: &str) -> Result<String, ParseError> {
    serde_json::from_str(lexeme).map_err(|err| ParseError::Lexical {
        path: path.to_owned(),
        message: err.to_string(),
    })
}

/// Reads one JSON string value and emits it.
#[derive(Debug)]
pub(crate) struct StringReader {
    path: String,
}

impl StringReader {
    pub(crate) fn new(path: String) -> Self {
        Self { path }
    }

    pub(crate) fn advance(&mut self, cx: &mut Context<'_>) -> Result<Progress, ParseError> {
        let Some(end) = scanner::string_end(cx.buf.rest()) else {
            return Ok(Progress::NeedMore);
        };
        let decoded = decode_string(&cx.buf.rest()[..=end], &self.path)?;
        cx.buf.consume(end + 1);
        let value = Value::String(decoded);
        cx.emit(&self.path, &value);
        Ok(Progress::Value(value))
    }
}

/// Reads one JSON number and emits it.
#[derive(Debug)]
pub(crate) struct NumberReader {
    path: String,
}

impl NumberReader {
    pub(crate) fn new(path: String) -> Self {
        Self { path }
    }

    pub(crate) fn advance(&mut self, cx: &mut Context<'_>) -> Result<Progress, ParseError> {
        let rest = cx.buf.rest();
        let Some(found) = NUMBER_LEXEME.find(rest) else {
            return Ok(Progress::NeedMore);
        };
        let Some(next) = rest[found.end()..].chars().next() else {
            return Ok(Progress::NeedMore);
        };
        if !is_terminator(next) {
            return Ok(Progress::NeedMore);
        }
        let number: f64 = found.as_str().parse().map_err(|_| ParseError::Lexical {
            path: self.path.clone(),
            message: format!("invalid number `{}`", found.as_str()),
        })?;
        let end = found.end();
        cx.buf.consume(end);
        let value = Value::Number(number);
        cx.emit(&self.path, &value);
        Ok(Progress::Value(value))
    }
}

/// Reads `true`, `false`, or `null` and emits the corresponding scalar.
#[derive(Debug)]
pub(crate) struct LiteralReader {
    path: String,
    keyword: &'static str,
    value: Value,
}

impl LiteralReader {
    pub(crate) fn new(path: String, first: char) -> Self {
        let (keyword, value) = match first {
            't' => ("true", Value::Boolean(true)),
            'f' => ("false", Value::Boolean(false)),
            _ => ("null", Value::Null),
        };
        Self {
            path,
            keyword,
            value,
        }
    }

    pub(crate) fn advance(&mut self, cx: &mut Context<'_>) -> Result<Progress, ParseError> {
        let rest = cx.buf.rest();
        let shared = rest
            .bytes()
            .zip(self.keyword.bytes())
            .take_while(|(a, b)| a == b)
            .count();
        if shared < self.keyword.len() {
            if shared < rest.len() {
                // A contradicting character arrived; no future bytes can fix it.
                return Err(ParseError::Lexical {
                    path: self.path.clone(),
                    message: format!("invalid literal, expected `{}`", self.keyword),
                });
            }
            return Ok(Progress::NeedMore);
        }
        let Some(next) = rest[self.keyword.len()..].chars().next() else {
            return Ok(Progress::NeedMore);
        };
        if !is_terminator(next) {
            return Ok(Progress::NeedMore);
        }
        cx.buf.consume(self.keyword.len());
        let value = self.value.clone();
        cx.emit(&self.path, &value);
        Ok(Progress::Value(value))
    }
}

/// Reads `"key" WS ':'` atomically. Keys are not emitted.
#[derive(Debug)]
pub(crate) struct KeyReader {
    /// Path of the owning object, for error context.
    path: String,
}

impl KeyReader {
    pub(crate) fn new(path: String) -> Self {
        Self { path }
    }

    pub(crate) fn advance(&mut self, cx: &mut Context<'_>) -> Result<Progress, ParseError> {
        let rest = cx.buf.rest();
        let Some(end) = scanner::string_end(rest) else {
            return Ok(Progress::NeedMore);
        };
        let bytes = rest.as_bytes();
        let mut colon = end + 1;
        while colon < bytes.len() && matches!(bytes[colon], b' ' | b'\t' | b'\n' | b'\r') {
            colon += 1;
        }
        match bytes.get(colon) {
            Some(b':') => {
                let key = decode_string(&rest[..=end], &self.path)?;
                cx.buf.consume(colon + 1);
                Ok(Progress::Key(key))
            }
            // Colon not visible yet (or preceded by stray data): keep waiting.
            _ => Ok(Progress::NeedMore),
        }
    }
}
