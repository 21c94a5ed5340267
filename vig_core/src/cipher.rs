use crate::error::CipherError;
use crate::key::Key;

/// The polyalphabetic byte transform.
///
/// Each output byte depends only on the input byte at the same position and
/// the key offset scheduled for that position — there is no chaining state
/// across positions. Consequently the output always has exactly the input's
/// length, and the transform is pure: identical key and input give identical
/// output.
///
/// All arithmetic wraps modulo 256 (unsigned 8-bit). Wraparound is defined
/// behavior, never an error.
#[derive(Debug, Clone)]
pub struct Vigenere {
    key: Key,
}

impl Vigenere {
    pub fn new(key: Key) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Shift every input byte forward by its scheduled key offset:
    /// `out[i] = (in[i] + key[i % keylength]) mod 256`.
    pub fn encode(&self, input: &[u8]) -> Vec<u8> {
        input
            .iter()
            .enumerate()
            .map(|(i, &b)| b.wrapping_add(self.key.offset_at(i)))
            .collect()
    }

    /// Inverse transform: shift every input byte back by its scheduled
    /// offset, normalizing into 0–255.
    pub fn decode(&self, input: &[u8]) -> Vec<u8> {
        input
            .iter()
            .enumerate()
            .map(|(i, &b)| b.wrapping_sub(self.key.offset_at(i)))
            .collect()
    }
}

/// One-shot encode with a raw key byte slice.
///
/// Fails with [`CipherError::EmptyKey`] before touching the input; no partial
/// output is ever produced.
pub fn encode(key: &[u8], input: &[u8]) -> Result<Vec<u8>, CipherError> {
    Ok(Vigenere::new(Key::new(key)?).encode(input))
}

/// One-shot decode with a raw key byte slice. Same precondition as [`encode`].
pub fn decode(key: &[u8], input: &[u8]) -> Result<Vec<u8>, CipherError> {
    Ok(Vigenere::new(Key::new(key)?).decode(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_matches_decode_with_inverted_key() {
        let key = Key::from_text("squeamish").unwrap();
        let data: Vec<u8> = (0..=255).collect();
        let cipher = Vigenere::new(key.clone());
        let inverse = Vigenere::new(key.inverted());
        assert_eq!(cipher.decode(&data), inverse.encode(&data));
    }

    #[test]
    fn offsets_apply_per_position() {
        let cipher = Vigenere::new(Key::new(vec![10, 20]).unwrap());
        assert_eq!(cipher.encode(&[1, 1, 1]), vec![11, 21, 11]);
        assert_eq!(cipher.decode(&[11, 21, 11]), vec![1, 1, 1]);
    }

    #[test]
    fn decode_normalizes_below_zero() {
        // 0 - 1 wraps to 255
        let cipher = Vigenere::new(Key::new(vec![1]).unwrap());
        assert_eq!(cipher.decode(&[0]), vec![255]);
    }
}
