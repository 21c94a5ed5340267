/// Integration tests for the cipher's observable contract:
/// the transform preserves length, depends only on `(input[i], key[i % len])`,
/// wraps modulo 256, and `decode` exactly inverts `encode` for every
/// non-empty key.
use vig_core::{decode, encode, CipherError, Key, Vigenere};

/// Generate `len` deterministic bytes using a simple LCG.
fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = seed;
    (0..len)
        .map(|_| {
            rng = rng
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (rng >> 56) as u8
        })
        .collect()
}

#[test]
fn round_trip_restores_input() {
    let data = pseudo_random_bytes(64 * 1024 + 7, 0xDEAD_BEEF);
    for key in [&b"k"[..], &b"longer key with spaces"[..], &[0, 255, 128, 1][..]] {
        let cipher = encode(key, &data).unwrap();
        assert_eq!(
            decode(key, &cipher).unwrap(),
            data,
            "decode(encode(input)) should restore input for key {:?}",
            key
        );
    }
}

#[test]
fn round_trip_of_empty_input() {
    let cipher = encode(b"key", &[]).unwrap();
    assert_eq!(cipher, Vec::<u8>::new());
    assert_eq!(decode(b"key", &cipher).unwrap(), Vec::<u8>::new());
}

#[test]
fn length_is_preserved() {
    let key = b"abc";
    for len in [0usize, 1, 2, 3, 4, 1000, 65537] {
        let data = pseudo_random_bytes(len, len as u64 + 1);
        assert_eq!(encode(key, &data).unwrap().len(), len);
        assert_eq!(decode(key, &data).unwrap().len(), len);
    }
}

#[test]
fn encode_is_deterministic() {
    let data = pseudo_random_bytes(4096, 42);
    let first = encode(b"repeatable", &data).unwrap();
    let second = encode(b"repeatable", &data).unwrap();
    assert_eq!(first, second);
}

#[test]
fn addition_wraps_modulo_256() {
    // 1 + 255 = 256 wraps to 0
    assert_eq!(encode(&[255], &[1]).unwrap(), vec![0]);
    // and the inverse normalizes back up
    assert_eq!(decode(&[255], &[0]).unwrap(), vec![1]);
}

#[test]
fn key_is_applied_cyclically() {
    assert_eq!(encode(&[1, 2], &[0, 0, 0, 0]).unwrap(), vec![1, 2, 1, 2]);
}

#[test]
fn zero_key_is_identity() {
    let data = pseudo_random_bytes(512, 7);
    assert_eq!(encode(&[0], &data).unwrap(), data);
    assert_eq!(decode(&[0], &data).unwrap(), data);
}

#[test]
fn empty_key_fails_before_processing() {
    assert_eq!(encode(&[], &[1, 2, 3]), Err(CipherError::EmptyKey));
    assert_eq!(decode(&[], &[1, 2, 3]), Err(CipherError::EmptyKey));
    // even for empty input: the key is validated first
    assert_eq!(encode(&[], &[]), Err(CipherError::EmptyKey));
}

#[test]
fn single_byte_key_shifts_uniformly() {
    // key "A" (65) over "hi" (104, 105)
    assert_eq!(encode(&[65], &[104, 105]).unwrap(), vec![169, 170]);
}

#[test]
fn non_ascii_key_bytes_are_unsigned_magnitudes() {
    // a high-bit key byte must shift by its full value, not a signed one
    let key = Key::new(vec![0xF0]).unwrap();
    let cipher = Vigenere::new(key);
    assert_eq!(cipher.encode(&[0x20]), vec![0x10]); // 0x20 + 0xF0 = 0x110 → 0x10
    assert_eq!(cipher.decode(&[0x10]), vec![0x20]);
}

#[test]
fn text_key_matches_equivalent_shift_list() {
    let data = pseudo_random_bytes(300, 3);
    let from_text = Vigenere::new(Key::from_text("AB").unwrap());
    let from_shifts = Vigenere::new(Key::from_shifts("65/66").unwrap());
    assert_eq!(from_text.encode(&data), from_shifts.encode(&data));
}
