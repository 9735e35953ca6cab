//! Short code derivation.
//!
//! A code is a prefix of the lowercase hex SHA-256 digest of the URL's bytes.
//! Derivation is deterministic: the same URL always yields the same code, with
//! no salt and no dependency on time or store state.

use sha2::{Digest, Sha256};

/// Number of hex characters in a freshly derived code.
pub const CODE_LENGTH: usize = 4;

/// Number of hex characters added on each collision retry.
pub const CODE_GROWTH_STEP: usize = 2;

/// Length of the full hex digest, the longest code that can be produced.
pub const DIGEST_HEX_LENGTH: usize = 64;

/// Returns the lowercase hex SHA-256 digest of `url`.
pub fn digest_hex(url: &str) -> String {
    hex::encode(Sha256::digest(url.as_bytes()))
}

/// Derives the public short code for `url`.
///
/// # Examples
///
/// ```ignore
/// // SHA-256("abc") = ba7816bf...
/// assert_eq!(generate_code("abc"), "ba78");
/// ```
pub fn generate_code(url: &str) -> String {
    let mut digest = digest_hex(url);
    digest.truncate(CODE_LENGTH);
    digest
}

/// Returns every code `url` may be stored under, shortest first.
///
/// The first candidate equals [`generate_code`]. Later candidates are longer
/// prefixes of the same digest and are only used when a different URL already
/// owns the shorter code.
pub fn code_candidates(url: &str) -> impl Iterator<Item = String> {
    let digest = digest_hex(url);

    (CODE_LENGTH..=DIGEST_HEX_LENGTH)
        .step_by(CODE_GROWTH_STEP)
        .map(move |len| digest[..len].to_string())
}
