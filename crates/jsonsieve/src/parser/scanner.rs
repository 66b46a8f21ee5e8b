//! Escape-aware bracket scanning for bulk capture and skipping.
//!
//! Both strategies share one algorithm: walk the unconsumed text, tracking
//! string-literal state so brackets inside strings are not counted and
//! escaped quotes do not close strings, until the bracket depth returns to
//! zero. Outside strings the walk is a three-byte character-class search
//! (`"` plus the bracket pair); inside strings it is a quote search with a
//! backslash-parity lookbehind. All searched bytes are ASCII, so byte
//! positions always land on character boundaries.
//!
//! Scan progress persists across chunks: when the text runs out before the
//! close is found, the scanner parks at the end and resumes there once more
//! bytes arrive.

use bstr::ByteSlice;

use crate::error::ParseError;
use crate::value::Value;

use super::node::Progress;
use super::Context;

/// Returns `true` if the quote at `quote` is preceded by an odd number of
/// backslashes, i.e. the quote is escaped.
pub(crate) fn quote_is_escaped(bytes: &[u8], quote: usize) -> bool {
    let mut backslashes = 0;
    while backslashes < quote && bytes[quote - 1 - backslashes] == b'\\' {
        backslashes += 1;
    }
    backslashes % 2 == 1
}

/// Byte index of the unescaped quote closing the string lexeme that starts
/// at byte 0 of `text`, or `None` if it has not arrived yet.
pub(crate) fn string_end(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut from = 1;
    loop {
        let offset = bytes[from..].find_byte(b'"')?;
        let quote = from + offset;
        if quote_is_escaped(bytes, quote) {
            from = quote + 1;
        } else {
            return Some(quote);
        }
    }
}

/// Resumable depth-counting scan over one structural value.
#[derive(Debug)]
pub(crate) struct BracketScan {
    open: u8,
    close: u8,
    depth: usize,
    in_string: bool,
    pos: usize,
}

impl BracketScan {
    pub(crate) fn new(open: char) -> Self {
        let (open, close) = if open == '{' {
            (b'{', b'}')
        } else {
            (b'[', b']')
        };
        Self {
            open,
            close,
            depth: 0,
            in_string: false,
            pos: 0,
        }
    }

    /// Advances over `text` (the unconsumed buffer, whose first byte is the
    /// opening bracket) and returns the byte index of the matching close
    /// once it is visible.
    pub(crate) fn find_close(&mut self, text: &str) -> Option<usize> {
        let bytes = text.as_bytes();
        while self.pos < bytes.len() {
            if self.in_string {
                let Some(offset) = bytes[self.pos..].find_byte(b'"') else {
                    self.pos = bytes.len();
                    return None;
                };
                let quote = self.pos + offset;
                self.pos = quote + 1;
                if !quote_is_escaped(bytes, quote) {
                    self.in_string = false;
                }
            } else {
                let Some(offset) = bytes[self.pos..].find_byteset([b'"', self.open, self.close])
                else {
                    self.pos = bytes.len();
                    return None;
                };
                let at = self.pos + offset;
                self.pos = at + 1;
                match bytes[at] {
                    b'"' => self.in_string = true,
                    b if b == self.open => self.depth += 1,
                    _ => {
                        self.depth -= 1;
                        if self.depth == 0 {
                            return Some(at);
                        }
                    }
                }
            }
        }
        None
    }
}

/// Captures a whole structural value and decodes it in one step.
///
/// Used when the value's own path is matched and nothing beneath it is
/// matched separately: scanning to the close bracket and handing the
/// captured text to the host decoder is cheaper than descending child by
/// child.
#[derive(Debug)]
pub(crate) struct BulkParser {
    path: String,
    scan: BracketScan,
}

impl BulkParser {
    pub(crate) fn new(path: String, open: char) -> Self {
        Self {
            path,
            scan: BracketScan::new(open),
        }
    }

    pub(crate) fn advance(&mut self, cx: &mut Context<'_>) -> Result<Progress, ParseError> {
        let Some(close) = self.scan.find_close(cx.buf.rest()) else {
            return Ok(Progress::NeedMore);
        };
        let value: Value =
            serde_json::from_str(&cx.buf.rest()[..=close]).map_err(|err| ParseError::Lexical {
                path: self.path.clone(),
                message: err.to_string(),
            })?;
        cx.buf.consume(close + 1);
        cx.emit(&self.path, &value);
        Ok(Progress::Value(value))
    }
}

/// Consumes a structural value no pattern cares about, without decoding.
#[derive(Debug)]
pub(crate) struct SkipConsumer {
    scan: BracketScan,
}

impl SkipConsumer {
    pub(crate) fn new(open: char) -> Self {
        Self {
            scan: BracketScan::new(open),
        }
    }

    pub(crate) fn advance(&mut self, cx: &mut Context<'_>) -> Result<Progress, ParseError> {
        let Some(close) = self.scan.find_close(cx.buf.rest()) else {
            return Ok(Progress::NeedMore);
        };
        cx.buf.consume(close + 1);
        Ok(Progress::Skipped)
    }
}
