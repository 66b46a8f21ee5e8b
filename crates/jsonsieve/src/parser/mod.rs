//! The streaming engine.
//!
//! [`StreamingParser`] owns the decoded input buffer, the compiled patterns,
//! and a tree of parser/consumer nodes rooted at the top-level value. Each
//! [`feed`](StreamingParser::feed) appends bytes and re-drives the root once;
//! the root loops internally through as many child completions as the buffer
//! allows and parks when it runs dry. Suspension is simply a node returning
//! `NeedMore` to its caller — there are no threads, no I/O, and no blocking
//! anywhere in the engine.
//!
//! Every value completion anywhere in the tree is offered to the emission
//! filter; the filter forwards a `(path, value)` pair iff some pattern
//! matches the path. This single chokepoint is also how bulk-captured
//! subtrees reach the caller.

mod buffer;
mod node;
mod primitives;
mod scanner;
mod structural;

use crate::error::{ParseError, PatternError};
use crate::event::MatchEvent;
use crate::path;
use crate::pattern::{self, PathPattern};
use crate::value::Value;

use buffer::ChunkBuffer;
use node::{Node, Progress};

/// Shared per-drive state handed down the node tree: the input buffer, the
/// compiled patterns (consulted for strategy selection), and the emission
/// filter's output.
pub(crate) struct Context<'a> {
    pub(crate) buf: &'a mut ChunkBuffer,
    pub(crate) patterns: &'a [PathPattern],
    out: &'a mut Vec<MatchEvent>,
}

impl Context<'_> {
    /// The emission filter: forwards the pair iff some pattern matches.
    pub(crate) fn emit(&mut self, path: &str, value: &Value) {
        if self.patterns.iter().any(|pattern| pattern.matches(path)) {
            self.out.push(MatchEvent {
                path: path.to_owned(),
                value: value.clone(),
            });
        }
    }
}

/// A push-driven, incremental JSON parser that emits the `(path, value)`
/// pairs selected by a set of JSONPath patterns.
///
/// Feed byte chunks with [`feed`](Self::feed); each call returns the events
/// that became complete, in source order. Signal end-of-input with
/// [`finish`](Self::finish), which verifies the document closed cleanly.
///
/// Errors are terminal: once `feed` fails, the session is latched and every
/// further call re-raises the same error.
///
/// # Examples
///
/// ```
/// use jsonsieve::{StreamingParser, Value};
///
/// let mut parser = StreamingParser::new(["$.name", "$.age"]).unwrap();
/// let events = parser.feed(br#"{"name":"Alice","age":30,"pets":[]}"#).unwrap();
/// parser.finish().unwrap();
///
/// assert_eq!(events[0].path, "$.name");
/// assert_eq!(events[0].value, Value::String("Alice".into()));
/// assert_eq!(events[1].path, "$.age");
/// assert_eq!(events[1].value, Value::Number(30.0));
/// ```
#[derive(Debug)]
pub struct StreamingParser {
    buffer: ChunkBuffer,
    patterns: Vec<PathPattern>,
    root: Option<Node>,
    root_done: bool,
    failed: Option<ParseError>,
}

impl StreamingParser {
    /// Compiles the pattern list and builds an engine for one parse session.
    ///
    /// # Errors
    ///
    /// Fails if the list is empty or any pattern is rejected by
    /// [`PathPattern::parse`](crate::PathPattern::parse).
    pub fn new<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            buffer: ChunkBuffer::new(),
            patterns: pattern::compile_patterns(patterns)?,
            root: None,
            root_done: false,
            failed: None,
        })
    }

    /// Appends a chunk of UTF-8 bytes and returns the events that became
    /// complete. Chunks may split the input anywhere, including inside
    /// multi-byte sequences and escapes.
    ///
    /// # Errors
    ///
    /// Returns the first structural or lexical error encountered; the
    /// session is then latched and re-raises it on every later call.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Vec<MatchEvent>, ParseError> {
        if let Some(error) = &self.failed {
            return Err(error.clone());
        }
        self.buffer.push(chunk);
        let mut out = Vec::new();
        if let Err(error) = self.drive(&mut out) {
            self.failed = Some(error.clone());
            return Err(error);
        }
        Ok(out)
    }

    fn drive(&mut self, out: &mut Vec<MatchEvent>) -> Result<(), ParseError> {
        if self.root_done {
            // Anything after the root is diagnosed at finish.
            return Ok(());
        }
        if self.root.is_none() {
            self.buffer.consume_whitespace();
            let Some(start) = self.buffer.peek() else {
                return Ok(());
            };
            self.root = Some(node::select_child(
                start,
                String::from(path::ROOT),
                &self.patterns,
            )?);
        }
        let Self {
            buffer,
            patterns,
            root,
            root_done,
            ..
        } = self;
        let Some(root) = root.as_mut() else {
            return Ok(());
        };
        let mut cx = Context {
            buf: buffer,
            patterns: patterns.as_slice(),
            out,
        };
        if !matches!(root.advance(&mut cx)?, Progress::NeedMore) {
            *root_done = true;
        }
        Ok(())
    }

    /// Signals end-of-input and verifies the session closed cleanly.
    ///
    /// # Errors
    ///
    /// - [`ParseError::EmptyInput`] if no value ever started;
    /// - [`ParseError::UnexpectedEndOfInput`] if the top-level value is
    ///   unfinished;
    /// - [`ParseError::TrailingData`] if non-whitespace follows the value;
    /// - the latched error if the session already failed.
    pub fn finish(mut self) -> Result<(), ParseError> {
        if let Some(error) = self.failed {
            return Err(error);
        }
        if self.root.is_none() {
            return Err(ParseError::EmptyInput);
        }
        if !self.root_done {
            return Err(ParseError::UnexpectedEndOfInput);
        }
        self.buffer.consume_whitespace();
        match self.buffer.peek() {
            Some(extra) => Err(ParseError::TrailingData(extra)),
            None => Ok(()),
        }
    }
}
