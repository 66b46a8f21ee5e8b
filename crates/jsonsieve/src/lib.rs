//! A streaming, incremental JSON parser that filters its output through a
//! set of JSONPath patterns.
//!
//! [`StreamingParser`] consumes UTF-8 byte chunks and produces the sequence
//! of `(path, value)` pairs whose paths match at least one of the configured
//! patterns. The input is never materialized as a whole: the parser walks the
//! document as bytes arrive and, for each object or array it encounters,
//! picks one of three strategies based on what the patterns could still
//! match at or below that position:
//!
//! - **incremental** — descend child by child, because some pattern matches
//!   strictly below this value;
//! - **bulk** — scan to the matching close bracket and decode the captured
//!   text in one step, because the value itself is wanted and nothing below
//!   it is matched separately;
//! - **skip** — scan past the value without decoding anything, because no
//!   pattern matches at or below it.
//!
//! Chunk boundaries may fall anywhere, including inside multi-byte UTF-8
//! sequences, string escapes, numbers, and literals; emissions are identical
//! for every partition of the same byte stream.
//!
//! ```
//! use jsonsieve::StreamingParser;
//!
//! let mut parser = StreamingParser::new(["$.users[*]"]).unwrap();
//! let mut events = parser.feed(br#"{"users":[{"id":1}"#).unwrap();
//! events.extend(parser.feed(br#",{"id":2}]}"#).unwrap());
//! parser.finish().unwrap();
//!
//! assert_eq!(events.len(), 2);
//! assert_eq!(events[0].path, "$.users[0]");
//! assert_eq!(events[1].path, "$.users[1]");
//! ```

mod error;
mod event;
mod path;
mod pattern;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ParseError, PatternError};
pub use event::MatchEvent;
pub use parser::StreamingParser;
pub use pattern::{PathPattern, PatternKind};
pub use value::{Array, Map, Value};
