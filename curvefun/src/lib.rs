//! Finite field and elliptic curve arithmetic optimized for clarity.
//!
//! `curvefun` implements arithmetic in prime-order fields, the
//! chord-tangent group law on short Weierstrass curves `y² = x³ + a·x + b`
//! over those fields, and the [secp256k1] curve constants used by Bitcoin.
//! Every value carries its modulus (and, for points, its curve
//! coefficients) at runtime, so the same types work over the toy 223-order
//! field used for exercises and over the 256-bit secp256k1 base field.
//! Combining values from different fields or curves is a typed error, not
//! undefined behaviour.
//!
//! Big integer arithmetic is delegated to [`num_bigint`]; hashing to the
//! [`digest`]/[`sha2`] crates. This crate implements neither from scratch.
//!
//! # Warning
//!
//! Arithmetic on heap-allocated big integers is variable-time. Nothing in
//! this crate attempts to hide secrets from a timing side channel; do not
//! use it where a hardened constant-time implementation is required.
//!
//! [secp256k1]: crate::secp256k1

#![deny(missing_docs)]

pub mod hash;
pub mod secp256k1;

mod field;
mod point;

pub use field::{FieldElement, FieldError};
pub use num_bigint;
pub use point::{Point, PointError};

#[doc(hidden)]
pub const TEST_SOUNDNESS: usize = 20;
