mod arbitrary;
mod chunk_helpers;
mod property_partition;

use crate::{MatchEvent, ParseError, StreamingParser, Value};

/// Feeds `chunks` in order, finalizes, and returns every delivered event.
pub(crate) fn feed_chunks<'a, I>(chunks: I, patterns: &[&str]) -> Result<Vec<MatchEvent>, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut parser = StreamingParser::new(patterns.iter().copied()).expect("patterns compile");
    let mut events = Vec::new();
    for chunk in chunks {
        events.extend(parser.feed(chunk.as_bytes())?);
    }
    parser.finish()?;
    Ok(events)
}

/// Feeds the whole payload as one chunk.
pub(crate) fn collect(payload: &str, patterns: &[&str]) -> Result<Vec<MatchEvent>, ParseError> {
    feed_chunks([payload], patterns)
}

/// Feeds the payload one byte at a time, splitting inside multi-byte
/// sequences, escapes, numbers, and literals.
pub(crate) fn collect_bytewise(
    payload: &str,
    patterns: &[&str],
) -> Result<Vec<MatchEvent>, ParseError> {
    let mut parser = StreamingParser::new(patterns.iter().copied()).expect("patterns compile");
    let mut events = Vec::new();
    for byte in payload.as_bytes() {
        events.extend(parser.feed(&[*byte])?);
    }
    parser.finish()?;
    Ok(events)
}

/// Splits `payload` into `parts` chunks along character boundaries.
pub(crate) fn produce_chunks(payload: &str, parts: usize) -> Vec<String> {
    let chars: Vec<char> = payload.chars().collect();
    let size = chars.len().div_ceil(parts).max(1);
    chars
        .chunks(size)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

pub(crate) fn event(path: &str, value: Value) -> MatchEvent {
    MatchEvent {
        path: path.to_owned(),
        value,
    }
}

pub(crate) fn obj(entries: &[(&str, Value)]) -> Value {
    Value::Object(
        entries
            .iter()
            .map(|(key, value)| ((*key).to_owned(), value.clone()))
            .collect(),
    )
}

pub(crate) fn arr(items: &[Value]) -> Value {
    Value::Array(items.to_vec())
}
