//! Incremental object and array parsers.
//!
//! An incremental parser descends into its children because some pattern
//! matches strictly below its own path. It drives one child at a time,
//! integrates each completed result into its accumulator, and emits the
//! accumulator at the closing bracket. Children that were skipped leave no
//! entry behind.

use crate::error::ParseError;
use crate::path;
use crate::value::{Array, Map, Value};

use super::node::{self, Node, Progress};
use super::primitives::KeyReader;
use super::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ObjectPhase {
    /// After `{`: a key or `}`.
    FirstPairOrClose,
    /// After a comma: a key.
    Key,
    /// After a key's colon: a value.
    Value,
    /// After a completed pair: `,` or `}`.
    DelimOrClose,
}

#[derive(Debug)]
pub(crate) struct ObjectParser {
    path: String,
    entries: Map,
    pending_key: Option<String>,
    phase: ObjectPhase,
    child: Option<Box<Node>>,
    opened: bool,
}

impl ObjectParser {
    pub(crate) fn new(path: String) -> Self {
        Self {
            path,
            entries: Map::new(),
            pending_key: None,
            phase: ObjectPhase::FirstPairOrClose,
            child: None,
            opened: false,
        }
    }

    pub(crate) fn advance(&mut self, cx: &mut Context<'_>) -> Result<Progress, ParseError> {
        if !self.opened {
            cx.buf.consume(1); // '{'
            self.opened = true;
        }
        loop {
            if let Some(child) = self.child.as_mut() {
                match child.advance(cx)? {
                    Progress::NeedMore => return Ok(Progress::NeedMore),
                    Progress::Key(key) => {
                        self.pending_key = Some(key);
                        self.phase = ObjectPhase::Value;
                    }
                    Progress::Value(value) => {
                        if let Some(key) = self.pending_key.take() {
                            self.entries.insert(key, value);
                        }
                        self.phase = ObjectPhase::DelimOrClose;
                    }
                    Progress::Skipped => {
                        self.pending_key = None;
                        self.phase = ObjectPhase::DelimOrClose;
                    }
                }
                self.child = None;
                continue;
            }

            cx.buf.consume_whitespace();
            let Some(ch) = cx.buf.peek() else {
                return Ok(Progress::NeedMore);
            };
            match ch {
                '}' => match self.phase {
                    ObjectPhase::FirstPairOrClose | ObjectPhase::DelimOrClose => {
                        cx.buf.consume(1);
                        let value = Value::Object(core::mem::take(&mut self.entries));
                        cx.emit(&self.path, &value);
                        return Ok(Progress::Value(value));
                    }
                    ObjectPhase::Key => {
                        return Err(ParseError::TrailingComma {
                            close: '}',
                            path: self.path.clone(),
                        });
                    }
                    ObjectPhase::Value => {
                        return Err(ParseError::UnexpectedCharacter {
                            found: '}',
                            path: self.path.clone(),
                        });
                    }
                },
                ',' => {
                    if self.phase == ObjectPhase::DelimOrClose {
                        cx.buf.consume(1);
                        self.phase = ObjectPhase::Key;
                    } else {
                        return Err(ParseError::UnexpectedComma {
                            path: self.path.clone(),
                        });
                    }
                }
                '"' if matches!(
                    self.phase,
                    ObjectPhase::FirstPairOrClose | ObjectPhase::Key
                ) =>
                {
                    self.child = Some(Box::new(Node::Key(KeyReader::new(self.path.clone()))));
                }
                _ if self.phase == ObjectPhase::Value => {
                    let key = self.pending_key.as_deref().unwrap_or_default();
                    let child_path = path::key_path(&self.path, key);
                    self.child = Some(Box::new(node::select_child(ch, child_path, cx.patterns)?));
                }
                _ => {
                    return Err(ParseError::UnexpectedCharacter {
                        found: ch,
                        path: self.path.clone(),
                    });
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrayPhase {
    /// After `[`: a value or `]`.
    FirstElementOrClose,
    /// After a comma: a value.
    Element,
    /// After a completed element: `,` or `]`.
    DelimOrClose,
}

#[derive(Debug)]
pub(crate) struct ArrayParser {
    path: String,
    elements: Array,
    index: usize,
    phase: ArrayPhase,
    child: Option<Box<Node>>,
    opened: bool,
}

impl ArrayParser {
    pub(crate) fn new(path: String) -> Self {
        Self {
            path,
            elements: Array::new(),
            index: 0,
            phase: ArrayPhase::FirstElementOrClose,
            child: None,
            opened: false,
        }
    }

    pub(crate) fn advance(&mut self, cx: &mut Context<'_>) -> Result<Progress, ParseError> {
        if !self.opened {
            cx.buf.consume(1); // '['
            self.opened = true;
        }
        loop {
            if let Some(child) = self.child.as_mut() {
                match child.advance(cx)? {
                    Progress::NeedMore => return Ok(Progress::NeedMore),
                    Progress::Value(value) => {
                        self.elements.push(value);
                        self.index += 1;
                        self.phase = ArrayPhase::DelimOrClose;
                    }
                    Progress::Skipped => {
                        self.index += 1;
                        self.phase = ArrayPhase::DelimOrClose;
                    }
                    Progress::Key(_) => unreachable!("arrays do not read keys"),
                }
                self.child = None;
                continue;
            }

            cx.buf.consume_whitespace();
            let Some(ch) = cx.buf.peek() else {
                return Ok(Progress::NeedMore);
            };
            match ch {
                ']' => match self.phase {
                    ArrayPhase::FirstElementOrClose | ArrayPhase::DelimOrClose => {
                        cx.buf.consume(1);
                        let value = Value::Array(core::mem::take(&mut self.elements));
                        cx.emit(&self.path, &value);
                        return Ok(Progress::Value(value));
                    }
                    ArrayPhase::Element => {
                        return Err(ParseError::TrailingComma {
                            close: ']',
                            path: self.path.clone(),
                        });
                    }
                },
                ',' => {
                    if self.phase == ArrayPhase::DelimOrClose {
                        cx.buf.consume(1);
                        self.phase = ArrayPhase::Element;
                    } else {
                        return Err(ParseError::UnexpectedComma {
                            path: self.path.clone(),
                        });
                    }
                }
                _ if matches!(
                    self.phase,
                    ArrayPhase::FirstElementOrClose | ArrayPhase::Element
                ) =>
                {
                    let child_path = path::index_path(&self.path, self.index);
                    self.child = Some(Box::new(node::select_child(ch, child_path, cx.patterns)?));
                }
                _ => {
                    return Err(ParseError::UnexpectedCharacter {
                        found: ch,
                        path: self.path.clone(),
                    });
                }
            }
        }
    }
}
