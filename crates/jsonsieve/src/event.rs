//! The delivered unit of output.

use crate::value::Value;

/// One filtered emission: a decoded value together with the JSONPath locator
/// of its position in the input.
///
/// Events are delivered in strict source order — object pairs in the order
/// they appear, array elements in index order — and every delivered path
/// matches at least one configured pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEvent {
    /// JSONPath locator of the value, e.g. `$.users[3].name`.
    pub path: String,
    /// The decoded value at that position.
    pub value: Value,
}
