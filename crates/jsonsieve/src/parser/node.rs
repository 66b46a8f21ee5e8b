//! The per-value node variant and the strategy decision.

use crate::error::ParseError;
use crate::pattern::PathPattern;
use crate::value::Value;

use super::primitives::{KeyReader, LiteralReader, NumberReader, StringReader};
use super::scanner::{BulkParser, SkipConsumer};
use super::structural::{ArrayParser, ObjectParser};
use super::Context;

/// Outcome of driving a node once.
#[derive(Debug)]
pub(crate) enum Progress {
    /// The node needs more input; nothing was consumed past its last mark.
    NeedMore,
    /// The node finished and produced a value (already offered for emission).
    Value(Value),
    /// A key reader finished; keys are never emitted.
    Key(String),
    /// A skip consumer finished; it produces no result.
    Skipped,
}

/// One parser or consumer, attached to one value position.
#[derive(Debug)]
pub(crate) enum Node {
    String(StringReader),
    Number(NumberReader),
    Literal(LiteralReader),
    Key(KeyReader),
    Object(ObjectParser),
    Array(ArrayParser),
    Bulk(BulkParser),
    Skip(SkipConsumer),
}

impl Node {
    pub(crate) fn advance(&mut self, cx: &mut Context<'_>) -> Result<Progress, ParseError> {
        match self {
            Node::String(reader) => reader.advance(cx),
            Node::Number(reader) => reader.advance(cx),
            Node::Literal(reader) => reader.advance(cx),
            Node::Key(reader) => reader.advance(cx),
            Node::Object(parser) => parser.advance(cx),
            Node::Array(parser) => parser.advance(cx),
            Node::Bulk(parser) => parser.advance(cx),
            Node::Skip(consumer) => consumer.advance(cx),
        }
    }
}

/// Picks the node for the value starting with `start` at `path`.
///
/// For structural values this is the central optimization: descend only if
/// some pattern matches strictly below `path`; capture the whole subtree if
/// `path` itself is matched; otherwise skip it without building anything.
pub(crate) fn select_child(
    start: char,
    path: String,
    patterns: &[PathPattern],
) -> Result<Node, ParseError> {
    Ok(match start {
        '"' => Node::String(StringReader::new(path)),
        '-' | '0'..='9' => Node::Number(NumberReader::new(path)),
        't' | 'f' | 'n' => Node::Literal(LiteralReader::new(path, start)),
        '{' | '[' => {
            if patterns.iter().any(|p| p.has_matching_descendants(&path)) {
                if start == '{' {
                    Node::Object(ObjectParser::new(path))
                } else {
                    Node::Array(ArrayParser::new(path))
                }
            } else if patterns.iter().any(|p| p.matches(&path)) {
                Node::Bulk(BulkParser::new(path, start))
            } else {
                Node::Skip(SkipConsumer::new(start))
            }
        }
        other => {
            return Err(ParseError::UnexpectedCharacter { found: other, path });
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::compile_patterns;

    fn kinds(patterns: &[&str], start: char, path: &str) -> &'static str {
        let patterns = compile_patterns(patterns.iter().copied()).unwrap();
        match select_child(start, path.to_owned(), &patterns).unwrap() {
            Node::String(_) => "string",
            Node::Number(_) => "number",
            Node::Literal(_) => "literal",
            Node::Key(_) => "key",
            Node::Object(_) | Node::Array(_) => "incremental",
            Node::Bulk(_) => "bulk",
            Node::Skip(_) => "skip",
        }
    }

    #[test]
    fn structural_strategy_follows_the_matcher() {
        // A pattern matching below the path forces descent.
        assert_eq!(kinds(&["$.users[*]"], '{', "$"), "incremental");
        assert_eq!(kinds(&["$.users[*]"], '[', "$.users"), "incremental");
        // A pattern matching the path itself captures the whole subtree.
        assert_eq!(kinds(&["$.users[*]"], '{', "$.users[0]"), "bulk");
        // No pattern at or below: skip.
        assert_eq!(kinds(&["$.users[*]"], '{', "$.extra"), "skip");
    }

    #[test]
    fn primitive_starts_pick_readers() {
        assert_eq!(kinds(&["$.a"], '"', "$.a"), "string");
        assert_eq!(kinds(&["$.a"], '-', "$.a"), "number");
        assert_eq!(kinds(&["$.a"], '7', "$.a"), "number");
        assert_eq!(kinds(&["$.a"], 't', "$.a"), "literal");
        assert_eq!(kinds(&["$.a"], 'n', "$.a"), "literal");
    }

    #[test]
    fn invalid_start_is_rejected() {
        let patterns = compile_patterns(["$.a"]).unwrap();
        let err = select_child('*', "$".to_owned(), &patterns).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedCharacter { found: '*', .. }
        ));
    }
}
