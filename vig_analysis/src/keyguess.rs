use anyhow::ensure;

/// Score for one key position after a key recovery attempt.
#[derive(Debug, Clone, Copy)]
pub struct ColumnScore {
    /// Bytes in this column (ciphertext positions `i % key_len == column`).
    pub len: usize,
    /// How many of them un-shift to plausible plaintext at the best offset.
    pub plausible: usize,
    /// The winning offset for this column.
    pub offset: u8,
}

/// Result of a key recovery attempt for one assumed key length.
#[derive(Debug, Clone)]
pub struct KeyGuess {
    /// Best offset per key position, in schedule order.
    pub offsets: Vec<u8>,
    /// Per-position column statistics.
    pub columns: Vec<ColumnScore>,
}

impl KeyGuess {
    /// The guessed key rendered as an `"N/M/O"` shift list.
    pub fn as_shift_list(&self) -> String {
        self.offsets
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// The guessed key as text, if every offset is itself a plausible
    /// plaintext byte (i.e. the key was probably typed, not random).
    pub fn as_text(&self) -> Option<String> {
        if self.offsets.iter().all(|&b| plausible_plaintext(b)) {
            String::from_utf8(self.offsets.clone()).ok()
        } else {
            None
        }
    }
}

/// A byte that could plausibly appear in ASCII plaintext: the printable
/// range plus tab, newline, and carriage return.
#[inline]
pub fn plausible_plaintext(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\r') || (32..=127).contains(&b)
}

/// Recover the most likely key of length `key_len` from `ciphertext`.
///
/// The ciphertext is split into `key_len` columns; every byte in one column
/// was shifted by the same key offset. For each column, every offset in
/// `0..alphabet` is tried: the column is un-shifted by that offset
/// (subtraction normalized into `0..alphabet`) and scored by how many bytes
/// land in the plausible-ASCII set. The highest-scoring offset wins; ties
/// keep the lowest offset.
///
/// `alphabet` is the modulus of the cipher being attacked, at most 256; use
/// 256 for the full byte cipher.
pub fn guess_key(ciphertext: &[u8], key_len: usize, alphabet: u16) -> anyhow::Result<KeyGuess> {
    ensure!(key_len >= 1, "key length must be at least 1");
    ensure!(
        (1..=256).contains(&alphabet),
        "alphabet size must be in 1..=256, got {}",
        alphabet
    );
    ensure!(
        ciphertext.len() >= key_len,
        "ciphertext of {} bytes is shorter than assumed key length {}",
        ciphertext.len(),
        key_len
    );

    let mut columns: Vec<Vec<u8>> = vec![Vec::with_capacity(ciphertext.len() / key_len + 1); key_len];
    for (i, &b) in ciphertext.iter().enumerate() {
        columns[i % key_len].push(b);
    }

    let mut offsets = Vec::with_capacity(key_len);
    let mut scores = Vec::with_capacity(key_len);

    for column in &columns {
        let mut best_count = 0usize;
        let mut best_offset = 0u8;

        for offset in 0..alphabet {
            let count = column
                .iter()
                .filter(|&&b| {
                    let d = (b as i32 - offset as i32).rem_euclid(alphabet as i32) as u8;
                    plausible_plaintext(d)
                })
                .count();
            if count > best_count {
                best_count = count;
                best_offset = offset as u8;
            }
        }

        offsets.push(best_offset);
        scores.push(ColumnScore {
            len: column.len(),
            plausible: best_count,
            offset: best_offset,
        });
    }

    Ok(KeyGuess {
        offsets,
        columns: scores,
    })
}
