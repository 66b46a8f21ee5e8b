use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::{collect, collect_bytewise};
use crate::{StreamingParser, Value};

/// Property: feeding a document in arbitrary chunk sizes must yield exactly
/// the emissions of a whole-input feed.
#[test]
fn partition_emissions_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value, splits: Vec<usize>) -> bool {
        // Wrap the value so scalars always see a terminator and `$.v`
        // selects the whole generated subtree.
        let doc = format!("{{\"v\":{value}}}");
        let patterns = &["$.v"];

        let whole = collect(&doc, patterns).unwrap();
        if whole.len() != 1 || whole[0].path != "$.v" || whole[0].value != value {
            return false;
        }
        if collect_bytewise(&doc, patterns).unwrap() != whole {
            return false;
        }

        // Feed the text in arbitrarily sized UTF-8-safe chunks derived from
        // `splits`.
        let mut parser = StreamingParser::new(patterns.iter().copied()).unwrap();
        let mut events = Vec::new();
        let chars: Vec<char> = doc.chars().collect();
        let mut idx = 0;
        let mut remaining = chars.len();
        for s in splits {
            if remaining == 0 {
                break;
            }
            let size = 1 + (s % remaining);
            let chunk: String = chars[idx..idx + size].iter().collect();
            events.extend(parser.feed(chunk.as_bytes()).unwrap());
            idx += size;
            remaining -= size;
        }
        if remaining > 0 {
            let chunk: String = chars[idx..].iter().collect();
            events.extend(parser.feed(chunk.as_bytes()).unwrap());
        }
        parser.finish().unwrap();

        events == whole
    }

    QuickCheck::new()
        .tests(300)
        .quickcheck(prop as fn(Value, Vec<usize>) -> bool);
}

/// Property: rendering any value and decoding it again is the identity.
#[quickcheck]
fn render_decode_roundtrip(value: Value) -> bool {
    let rendered = value.to_string();
    let decoded: Value = serde_json::from_str(&rendered).unwrap();
    decoded == value
}
