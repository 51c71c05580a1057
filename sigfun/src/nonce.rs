//! Nonce generation.
//!
//! Nonce choice is where ECDSA implementations get broken in practice: a
//! repeated `k` across two signatures with the same key reveals the
//! private scalar outright, and even a small bias leaks it to an attacker
//! who can collect enough signatures. [`sign`] therefore takes the nonce
//! as an explicit argument and this module provides the two safe ways to
//! produce one: [`deterministic`], an RFC 6979-style HMAC-SHA256
//! derivation from the secret and the digest (the same message and key
//! always yield the same nonce, so there is nothing to repeat), and
//! [`random`], rejection sampling from a caller-supplied CSPRNG.
//!
//! [`sign`]: crate::sign

use curvefun::secp256k1;
use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::RngCore;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn hmac_digest(key: &[u8; 32], parts: &[&[u8]]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("hmac accepts any key length");
    for part in parts {
        mac.update(part);
    }
    mac.finalize().into_bytes().into()
}

fn be32(value: &BigUint) -> [u8; 32] {
    let bytes = value.to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    out
}

/// Derives a nonce in `[1, N)` from the secret and the message digest,
/// in the manner of [RFC 6979].
///
/// HMAC-SHA256 chains the secret and digest into a keystream and takes
/// the first output that falls inside the group order. Deterministic:
/// signing the same digest with the same secret always produces the
/// same nonce, which makes signatures reproducible and leaves no room
/// for a broken RNG.
///
/// [RFC 6979]: https://datatracker.ietf.org/doc/html/rfc6979
pub fn deterministic(secret: &BigUint, digest: &BigUint) -> BigUint {
    let n = &*secp256k1::N;
    let secret_bytes = be32(&(secret % n));
    let z_bytes = {
        let mut z = digest.clone();
        if z.bits() > 256 {
            z %= n;
        } else if z > *n {
            z -= n;
        }
        be32(&z)
    };

    let mut k = [0u8; 32];
    let mut v = [1u8; 32];
    k = hmac_digest(&k, &[&v, &[0u8], &secret_bytes, &z_bytes]);
    v = hmac_digest(&k, &[&v]);
    k = hmac_digest(&k, &[&v, &[1u8], &secret_bytes, &z_bytes]);
    v = hmac_digest(&k, &[&v]);
    loop {
        v = hmac_digest(&k, &[&v]);
        let candidate = BigUint::from_bytes_be(&v);
        if !candidate.is_zero() && candidate < *n {
            return candidate;
        }
        k = hmac_digest(&k, &[&v, &[0u8]]);
        v = hmac_digest(&k, &[&v]);
    }
}

/// Samples a uniformly random nonce in `[1, N)` from `rng`.
///
/// Rejection sampling: candidates outside the order are discarded rather
/// than reduced, so no value is twice as likely as another. The rng must
/// be cryptographically secure; the nonce is as secret as the key.
pub fn random(rng: &mut impl RngCore) -> BigUint {
    let n = &*secp256k1::N;
    loop {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        let candidate = BigUint::from_bytes_be(&bytes);
        if !candidate.is_zero() && candidate < *n {
            return candidate;
        }
    }
}
