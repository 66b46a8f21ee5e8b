use super::produce_chunks;

#[test]
fn produce_chunks_example() {
    let payload = "[\"foo\",\"bar\"]";
    let chunks = produce_chunks(payload, 5);
    assert_eq!(chunks, vec!["[\"f", "oo\"", ",\"b", "ar\"", "]"]);
    assert_eq!(chunks.concat(), payload);
}

#[test]
fn produce_chunks_multibyte() {
    let payload = "[\"f😊o\",\"b🚀r\"]";
    for parts in 1..=payload.chars().count() {
        let chunks = produce_chunks(payload, parts);
        let mut idx = 0;
        for chunk in &chunks {
            idx += chunk.len();
            assert!(payload.is_char_boundary(idx));
        }
        assert_eq!(chunks.concat(), payload);
    }
}
