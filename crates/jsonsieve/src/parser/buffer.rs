//! Decoded input buffer.
//!
//! `ChunkBuffer` accumulates incoming bytes and exposes them as UTF-8 text
//! with a moving consumption head. Decoding is streaming: a multi-byte
//! scalar split across chunk boundaries is withheld until its continuation
//! bytes arrive, an invalid sequence decodes to U+FFFD, and one leading BOM
//! is stripped. Consumed text is released opportunistically; unconsumed text
//! is never lost.

/// JSON whitespace: space, tab, line feed, carriage return.
pub(crate) const fn is_json_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

#[derive(Debug, Default)]
pub(crate) struct ChunkBuffer {
    text: String,
    head: usize,
    /// Undecoded tail bytes of an incomplete UTF-8 scalar.
    carry: Vec<u8>,
    bom_checked: bool,
}

impl ChunkBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends raw bytes; every complete scalar becomes visible text.
    pub(crate) fn push(&mut self, chunk: &[u8]) {
        let carried;
        let mut data: &[u8] = if self.carry.is_empty() {
            chunk
        } else {
            self.carry.extend_from_slice(chunk);
            carried = core::mem::take(&mut self.carry);
            &carried
        };

        while !data.is_empty() {
            match core::str::from_utf8(data) {
                Ok(valid) => {
                    self.append(valid);
                    break;
                }
                Err(err) => {
                    let (valid, rest) = data.split_at(err.valid_up_to());
                    self.append(&String::from_utf8_lossy(valid));
                    match err.error_len() {
                        // Invalid sequence: substitute and keep decoding.
                        Some(len) => {
                            self.append("\u{FFFD}");
                            data = &rest[len..];
                        }
                        // Incomplete scalar at the tail: withhold it.
                        None => {
                            self.carry.extend_from_slice(rest);
                            break;
                        }
                    }
                }
            }
        }
    }

    fn append(&mut self, decoded: &str) {
        let mut decoded = decoded;
        if !self.bom_checked && !decoded.is_empty() {
            self.bom_checked = true;
            decoded = decoded.strip_prefix('\u{FEFF}').unwrap_or(decoded);
        }
        self.text.push_str(decoded);
    }

    /// The unconsumed text.
    pub(crate) fn rest(&self) -> &str {
        &self.text[self.head..]
    }

    /// First unconsumed character, if any.
    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Removes `bytes` from the front of the unconsumed text. The count must
    /// land on a character boundary the caller has observed.
    pub(crate) fn consume(&mut self, bytes: usize) {
        self.head += bytes;
        debug_assert!(self.text.is_char_boundary(self.head));
        if self.head > 4096 && self.head > self.text.len() / 2 {
            self.text.drain(..self.head);
            self.head = 0;
        }
    }

    /// Removes the longest prefix of JSON whitespace.
    pub(crate) fn consume_whitespace(&mut self) {
        let rest = self.rest();
        let skipped = rest.len() - rest.trim_start_matches(is_json_whitespace).len();
        if skipped > 0 {
            self.consume(skipped);
        }
    }
}
