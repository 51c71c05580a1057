//! Hashing helpers for deriving message digests.
//!
//! Defined against the [`Digest`] trait from the [`RustCrypto`] project;
//! the hash itself comes from the [`sha2`] crate, this module only wires
//! it up. Signing operates on the big-endian integer interpretation of a
//! 32-byte digest, which is what [`message_hash`] produces.
//!
//! [`Digest`]: digest::Digest
//! [`RustCrypto`]: https://github.com/RustCrypto/hashes

use digest::Digest;
use num_bigint::BigUint;
use sha2::Sha256;

/// Two rounds of SHA-256, the digest Bitcoin applies to messages.
///
/// # Example
///
/// ```
/// use curvefun::hash::hash256;
/// let digest = hash256(b"Programming Bitcoin!");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn hash256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(data)).into()
}

/// The double-SHA256 digest of `data` as a big-endian integer.
///
/// This is the `z` that signing and verification take: an integer in
/// `[0, 2²⁵⁶)` derived from the message.
pub fn message_hash(data: &[u8]) -> BigUint {
    BigUint::from_bytes_be(&hash256(data))
}
