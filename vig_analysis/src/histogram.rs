/// Frequency table of byte values over a buffer.
///
/// Covers the full 0–255 range, so unobserved values report a count of zero.
#[derive(Debug, Clone)]
pub struct Histogram {
    counts: [u64; 256],
    total: u64,
}

impl Histogram {
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &b in data {
            counts[b as usize] += 1;
        }
        Self {
            counts,
            total: data.len() as u64,
        }
    }

    /// Occurrences of `value`.
    #[inline]
    pub fn count(&self, value: u8) -> u64 {
        self.counts[value as usize]
    }

    /// Total bytes counted.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Fraction of the buffer equal to `value`; 0.0 for an empty buffer.
    pub fn proportion(&self, value: u8) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(value) as f64 / self.total as f64
    }

    /// Number of distinct byte values observed — the effective alphabet size.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// All 256 counts, indexed by byte value.
    pub fn counts(&self) -> &[u64; 256] {
        &self.counts
    }
}
