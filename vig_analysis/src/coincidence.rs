use anyhow::ensure;

use crate::histogram::Histogram;

/// Byte-wise index of coincidence of the whole buffer, scaled by the
/// observed alphabet size:
///
/// ```text
/// IC = c * Σ n_i * (n_i - 1) / (N * (N - 1))
/// ```
///
/// `n_i` — count of byte value i, `N` — total bytes, `c` — distinct byte
/// values observed. Roughly 1.0 for uniformly distributed data and higher
/// for skewed distributions such as natural-language text, which is what
/// makes it useful for telling cipher output from cleartext.
pub fn index_of_coincidence(data: &[u8]) -> anyhow::Result<f64> {
    ensure!(
        data.len() >= 2,
        "index of coincidence needs at least 2 bytes, got {}",
        data.len()
    );
    let hist = Histogram::from_bytes(data);
    let pairs: f64 = hist
        .counts()
        .iter()
        .map(|&c| {
            let n = c as f64;
            n * (n - 1.0)
        })
        .sum();
    let total = data.len() as f64;
    Ok(pairs * hist.distinct() as f64 / (total * (total - 1.0)))
}

/// Average unscaled per-column index of coincidence under an assumed key
/// length.
///
/// The ciphertext is split into `key_len` columns (position `i` goes to
/// column `i % key_len`), so every byte within one column was shifted by the
/// same key offset. A shift permutes a column's histogram without flattening
/// it, so at the true key length each column keeps the cleartext's skew and
/// the average IC spikes; at wrong lengths the columns mix shifts and the
/// average stays near the uniform floor.
pub fn average_column_ic(data: &[u8], key_len: usize) -> anyhow::Result<f64> {
    ensure!(key_len >= 1, "key length must be at least 1");
    ensure!(
        data.len() >= 2 * key_len,
        "need at least 2 bytes per column: {} bytes for key length {}",
        data.len(),
        key_len
    );

    let mut counts = vec![[0u64; 256]; key_len];
    for (i, &b) in data.iter().enumerate() {
        counts[i % key_len][b as usize] += 1;
    }

    let mut ic_sum = 0.0;
    for column in &counts {
        let mut pairs = 0.0;
        let mut total = 0.0;
        for &c in column.iter() {
            let n = c as f64;
            total += n;
            pairs += n * (n - 1.0);
        }
        ic_sum += pairs / (total * (total - 1.0));
    }
    Ok(ic_sum / key_len as f64)
}

/// Sweep assumed key lengths and report `(length, average column IC)` for
/// each length in `min_len..=max_len`. The highest average marks the most
/// likely key length.
pub fn estimate_key_length(
    data: &[u8],
    min_len: usize,
    max_len: usize,
) -> anyhow::Result<Vec<(usize, f64)>> {
    ensure!(
        min_len >= 1 && min_len <= max_len,
        "invalid key length range {}..={}",
        min_len,
        max_len
    );
    (min_len..=max_len)
        .map(|len| Ok((len, average_column_ic(data, len)?)))
        .collect()
}

/// The assumed key length with the highest average column IC.
pub fn best_key_length(data: &[u8], min_len: usize, max_len: usize) -> anyhow::Result<usize> {
    let sweep = estimate_key_length(data, min_len, max_len)?;
    let (best, _) = sweep
        .iter()
        .copied()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .ok_or_else(|| anyhow::anyhow!("empty key length sweep"))?;
    Ok(best)
}
