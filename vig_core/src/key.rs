use crate::error::CipherError;

/// A validated, non-empty cipher key.
///
/// Holds one additive offset (0–255) per key position. Construction is the
/// only place emptiness can occur, so every `Key` in circulation supports the
/// cyclic schedule `offsets[i % keylength]` without a modulo-by-zero.
///
/// Key bytes are unsigned magnitudes, not characters: a key string containing
/// non-ASCII bytes contributes those bytes' full 0–255 values as offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    offsets: Vec<u8>,
}

impl Key {
    /// Build a key from raw offset bytes.
    ///
    /// Fails with [`CipherError::EmptyKey`] on a zero-length sequence.
    pub fn new(offsets: impl Into<Vec<u8>>) -> Result<Self, CipherError> {
        let offsets = offsets.into();
        if offsets.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        Ok(Self { offsets })
    }

    /// Build a key from a textual key string, one offset per byte of its
    /// UTF-8 encoding.
    pub fn from_text(text: &str) -> Result<Self, CipherError> {
        Self::new(text.as_bytes())
    }

    /// Parse an explicit shift list of the form `"N/M/O"`, one offset per
    /// `/`-separated token, each in 0–255.
    ///
    /// Fails with [`CipherError::BadShift`] on the first token that does not
    /// parse, and with [`CipherError::EmptyKey`] on an empty spec.
    pub fn from_shifts(spec: &str) -> Result<Self, CipherError> {
        if spec.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        let mut offsets = Vec::new();
        for token in spec.split('/') {
            let n = token
                .trim()
                .parse::<u8>()
                .map_err(|e| CipherError::BadShift {
                    token: token.to_string(),
                    reason: e.to_string(),
                })?;
            offsets.push(n);
        }
        Self::new(offsets)
    }

    /// Number of key positions before the schedule repeats.
    #[inline]
    pub fn keylength(&self) -> usize {
        self.offsets.len()
    }

    /// Offset applied at stream position `i`: `offsets[i % keylength]`.
    ///
    /// The schedule is conceptually infinite and cyclic; it is indexed, never
    /// materialized.
    #[inline]
    pub fn offset_at(&self, i: usize) -> u8 {
        self.offsets[i % self.offsets.len()]
    }

    /// The key's offsets in schedule order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.offsets
    }

    /// The same key with every offset negated modulo 256.
    ///
    /// Encoding with the inverted key is identical to decoding with the
    /// original, and vice versa.
    pub fn inverted(&self) -> Self {
        Self {
            offsets: self.offsets.iter().map(|b| b.wrapping_neg()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_key_is_its_utf8_bytes() {
        let key = Key::from_text("Ab").unwrap();
        assert_eq!(key.as_bytes(), &[65, 98]);
        assert_eq!(key.keylength(), 2);
    }

    #[test]
    fn empty_text_key_is_rejected() {
        assert_eq!(Key::from_text(""), Err(CipherError::EmptyKey));
        assert_eq!(Key::new(Vec::<u8>::new()), Err(CipherError::EmptyKey));
    }

    #[test]
    fn schedule_cycles_by_index() {
        let key = Key::new(vec![5, 9, 13]).unwrap();
        assert_eq!(key.offset_at(0), 5);
        assert_eq!(key.offset_at(2), 13);
        assert_eq!(key.offset_at(3), 5);
        assert_eq!(key.offset_at(301), 9);
    }

    #[test]
    fn shift_list_parses() {
        let key = Key::from_shifts("3/0/255").unwrap();
        assert_eq!(key.as_bytes(), &[3, 0, 255]);
    }

    #[test]
    fn shift_list_rejects_out_of_range_and_junk() {
        assert!(matches!(
            Key::from_shifts("3/256"),
            Err(CipherError::BadShift { token, .. }) if token == "256"
        ));
        assert!(matches!(
            Key::from_shifts("a/1"),
            Err(CipherError::BadShift { token, .. }) if token == "a"
        ));
        assert_eq!(Key::from_shifts(""), Err(CipherError::EmptyKey));
    }

    #[test]
    fn inverted_negates_mod_256() {
        let key = Key::new(vec![0, 1, 255, 128]).unwrap();
        assert_eq!(key.inverted().as_bytes(), &[0, 255, 1, 128]);
        assert_eq!(key.inverted().inverted(), key);
    }
}
