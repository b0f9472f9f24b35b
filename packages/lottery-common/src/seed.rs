use sha2::{Digest, Sha256};

/// Mix an ordered list of entropy parts into a 32-byte seed.
///
/// Each part is length-prefixed (u64 big-endian) before hashing so that the
/// part boundaries are unambiguous:
/// `seed = sha256( len(p0) || p0 || len(p1) || p1 || ... )`
pub fn mix_entropy(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update((part.len() as u64).to_be_bytes());
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Reduce a 32-byte seed to an index in `[0, count)`.
///
/// Takes the first 16 seed bytes as a big-endian u128 and reduces modulo
/// `count`. `count` must be non-zero; the caller guards the empty case.
pub fn winner_index(seed: &[u8; 32], count: u64) -> u64 {
    debug_assert!(count > 0, "winner_index called with zero count");
    let mut ticket = [0u8; 16];
    ticket.copy_from_slice(&seed[0..16]);
    (u128::from_be_bytes(ticket) % count as u128) as u64
}
