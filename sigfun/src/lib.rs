//! ECDSA-style signing and verification over [`curvefun`]'s secp256k1 group.
//!
//! A signature binds a 32-byte message digest `z` (see
//! [`curvefun::hash::message_hash`]) to a private scalar `e` through a
//! one-time nonce `k`:
//!
//! 1. `R = k·G`, `r = R.x`
//! 2. `s = (z + r·e) · k⁻¹ mod N`
//!
//! where `N` is the order of the group — a different modulus than the
//! coordinate field's prime, and the only modulus this crate reduces by.
//! The caller supplies `k`; [`nonce`] provides a deterministic derivation
//! and a random one. **Never reuse a nonce across signatures with the
//! same key** — two signatures sharing a `k` hand the private scalar to
//! anyone who can subtract.
//!
//! ```
//! use curvefun::{hash::message_hash, secp256k1};
//! use num_bigint::BigUint;
//!
//! let secret = BigUint::from(12345u32);
//! let z = message_hash(b"Programming Bitcoin!");
//! let k = sigfun::nonce::deterministic(&secret, &z);
//!
//! let signature = sigfun::sign(&secret, &z, &k)?;
//! let public_key = secp256k1::mul_generator(&secret);
//! assert!(sigfun::verify(&public_key, &z, &signature));
//! # Ok::<_, sigfun::SignError>(())
//! ```

#![allow(non_snake_case)]

use core::fmt;
use curvefun::{secp256k1, Point};
use num_bigint::BigUint;
use num_traits::Zero;

pub mod nonce;
mod signature;

pub use signature::Signature;

/// Error returned when signing fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignError {
    /// The nonce was outside `[1, N)`, or it produced a zero `r` or `s`.
    /// Either way the caller must pick a fresh nonce and retry; signing
    /// never retries internally.
    InvalidNonce,
    /// The private scalar was outside `[1, N)`.
    InvalidSecretKey,
}

impl fmt::Display for SignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignError::InvalidNonce => write!(f, "nonce unusable, pick a fresh one and retry"),
            SignError::InvalidSecretKey => write!(f, "private scalar not in [1, N)"),
        }
    }
}

impl std::error::Error for SignError {}

/// `v⁻¹ mod N` via Fermat (`N` is prime).
fn order_inverse(v: &BigUint) -> BigUint {
    let n = &*secp256k1::N;
    v.modpow(&(n - 2u32), n)
}

/// Signs the digest `z` with the private scalar `e` and the nonce `k`.
///
/// `r` is the x-coordinate of `k·G` and `s = (z + r·e)·k⁻¹ mod N`,
/// normalized to the low half of the order so that `(r, s)` and
/// `(r, N−s)` cannot both circulate as distinct valid signatures.
///
/// Fails with [`SignError::InvalidSecretKey`] when `e` is outside
/// `[1, N)` and with [`SignError::InvalidNonce`] when `k` is outside
/// `[1, N)` or lands on a zero `r` or `s`. Retrying with a different
/// nonce is the caller's decision.
pub fn sign(e: &BigUint, z: &BigUint, k: &BigUint) -> Result<Signature, SignError> {
    let n = &*secp256k1::N;
    if e.is_zero() || e >= n {
        return Err(SignError::InvalidSecretKey);
    }
    if k.is_zero() || k >= n {
        return Err(SignError::InvalidNonce);
    }

    let R = secp256k1::mul_generator(k);
    let r = R
        .x()
        .expect("a nonce in [1, N) cannot reach the identity")
        .value()
        .clone();
    let s = ((z + &r * e) * order_inverse(k)) % n;
    if r.is_zero() || s.is_zero() {
        return Err(SignError::InvalidNonce);
    }
    let s = if s > (n >> 1u32) { n - s } else { s };
    Ok(Signature { r, s })
}

/// Verifies `signature` over the digest `z` against `public_key`.
///
/// Computes `u = z·s⁻¹ mod N`, `v = r·s⁻¹ mod N` and accepts iff the
/// x-coordinate of `u·G + v·Pub` equals `r`. Signatures with `r` or `s`
/// outside `[1, N)` are rejected outright. Both the low-`s` form
/// produced by [`sign`] and its high-`s` mirror verify.
pub fn verify(public_key: &Point, z: &BigUint, signature: &Signature) -> bool {
    let n = &*secp256k1::N;
    let (r, s) = signature.as_tuple();
    if r.is_zero() || r >= n || s.is_zero() || s >= n {
        return false;
    }

    let s_inv = order_inverse(s);
    let u = (z * &s_inv) % n;
    let v = (r * &s_inv) % n;
    let uG = secp256k1::mul_generator(&u);
    let vP = match secp256k1::mul(public_key, &v) {
        Ok(point) => point,
        Err(_) => return false,
    };
    match uG.add(&vP) {
        Ok(total) => total.x().map_or(false, |x| x.value() == r),
        Err(_) => return false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use curvefun::{hash::message_hash, TEST_SOUNDNESS};
    use rand::RngCore;

    fn uint(decimal: &str) -> BigUint {
        BigUint::parse_bytes(decimal.as_bytes(), 10).unwrap()
    }

    #[test]
    fn known_vector() {
        let e = BigUint::from(12345u32);
        let z = message_hash(b"Programming Bitcoin!");
        let k = BigUint::from(1234567890u64);
        let signature = sign(&e, &z, &k).unwrap();
        assert_eq!(
            signature.r,
            uint("19635924277356798752105674083697999930996555344818160161847497917044432760610")
        );
        assert_eq!(
            signature.s,
            uint("13449928304528854552621297743528922715969746175462178470032064141974217735194")
        );
        assert!(verify(&secp256k1::mul_generator(&e), &z, &signature));
    }

    #[test]
    fn repeated_sign_and_verify() {
        let mut rng = rand::thread_rng();
        for _ in 0..TEST_SOUNDNESS {
            let mut message = [0u8; 32];
            rng.fill_bytes(&mut message);
            let secret = crate::nonce::random(&mut rng);
            let z = message_hash(&message);
            let k = crate::nonce::random(&mut rng);
            let signature = sign(&secret, &z, &k).unwrap();
            let public_key = secp256k1::mul_generator(&secret);
            assert!(verify(&public_key, &z, &signature));
        }
    }

    #[test]
    fn s_is_always_low() {
        let mut rng = rand::thread_rng();
        let half = &*secp256k1::N >> 1u32;
        for _ in 0..TEST_SOUNDNESS {
            let secret = crate::nonce::random(&mut rng);
            let k = crate::nonce::random(&mut rng);
            let signature = sign(&secret, &message_hash(b"low s"), &k).unwrap();
            assert!(signature.s <= half);
        }
    }

    #[test]
    fn high_s_mirror_still_verifies() {
        let e = BigUint::from(12345u32);
        let z = message_hash(b"Programming Bitcoin!");
        let k = BigUint::from(1234567890u64);
        let signature = sign(&e, &z, &k).unwrap();
        let mirrored = Signature {
            r: signature.r.clone(),
            s: &*secp256k1::N - &signature.s,
        };
        assert!(verify(&secp256k1::mul_generator(&e), &z, &mirrored));
    }

    #[test]
    fn out_of_range_nonce_is_rejected() {
        let e = BigUint::from(12345u32);
        let z = message_hash(b"anything");
        assert_eq!(sign(&e, &z, &BigUint::zero()), Err(SignError::InvalidNonce));
        assert_eq!(
            sign(&e, &z, &secp256k1::N),
            Err(SignError::InvalidNonce)
        );
    }

    #[test]
    fn out_of_range_secret_is_rejected() {
        let z = message_hash(b"anything");
        let k = BigUint::from(42u32);
        assert_eq!(
            sign(&BigUint::zero(), &z, &k),
            Err(SignError::InvalidSecretKey)
        );
        assert_eq!(
            sign(&secp256k1::N, &z, &k),
            Err(SignError::InvalidSecretKey)
        );
    }

    #[test]
    fn tampering_breaks_verification() {
        let e = BigUint::from(12345u32);
        let z = message_hash(b"Programming Bitcoin!");
        let k = BigUint::from(1234567890u64);
        let signature = sign(&e, &z, &k).unwrap();
        let public_key = secp256k1::mul_generator(&e);

        assert!(!verify(&public_key, &message_hash(b"programming bitcoin!"), &signature));

        let swapped = Signature {
            r: signature.s.clone(),
            s: signature.r.clone(),
        };
        assert!(!verify(&public_key, &z, &swapped));

        let other_key = secp256k1::mul_generator(&BigUint::from(54321u32));
        assert!(!verify(&other_key, &z, &signature));
    }

    #[test]
    fn zero_r_or_s_is_rejected_by_verify() {
        let e = BigUint::from(12345u32);
        let z = message_hash(b"anything");
        let public_key = secp256k1::mul_generator(&e);
        let zero_r = Signature {
            r: BigUint::zero(),
            s: BigUint::from(1u32),
        };
        let zero_s = Signature {
            r: BigUint::from(1u32),
            s: BigUint::zero(),
        };
        assert!(!verify(&public_key, &z, &zero_r));
        assert!(!verify(&public_key, &z, &zero_s));
    }
}
