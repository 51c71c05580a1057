//! Constants and constructors for the secp256k1 curve.
//!
//! secp256k1 is the curve `y² = x³ + 7` over the prime field of order
//! `p = 2²⁵⁶ − 2³² − 977`, with a generator `G` whose group has prime
//! order [`N`], as specified in [_SEC 2: Recommended Elliptic Curve
//! Domain Parameters_] and used by Bitcoin. The constants here are
//! process-wide read-only singletons; everything built from them is a
//! plain [`FieldElement`]/[`Point`] pre-bound to the right modulus and
//! coefficients.
//!
//! [_SEC 2: Recommended Elliptic Curve Domain Parameters_]: https://www.secg.org/sec2-v2.pdf

use crate::{FieldElement, FieldError, Point, PointError};
use lazy_static::lazy_static;
use num_bigint::{BigInt, BigUint};

lazy_static! {
    /// The base field prime `p = 2²⁵⁶ − 2³² − 977`.
    pub static ref P: BigUint = BigUint::parse_bytes(
        b"fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        16,
    )
    .expect("valid hex");

    /// The order of the group generated by [`struct@G`].
    ///
    /// Scalar and nonce arithmetic in signing happens modulo `N`, a
    /// different modulus than the coordinate field's [`struct@P`]. Keeping the
    /// two apart is the caller's job; this module only ever reduces
    /// point coefficients by `N`.
    pub static ref N: BigUint = BigUint::parse_bytes(
        b"fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
        16,
    )
    .expect("valid hex");

    /// The generator point.
    ///
    /// ```
    /// use curvefun::secp256k1::{G, N, infinity, mul};
    /// assert_eq!(mul(&G, &N).unwrap(), infinity());
    /// ```
    pub static ref G: Point = point(
        BigUint::parse_bytes(
            b"79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            16,
        )
        .expect("valid hex"),
        BigUint::parse_bytes(
            b"483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
            16,
        )
        .expect("valid hex"),
    )
    .expect("the generator is on the curve");
}

fn coefficients() -> (FieldElement, FieldElement) {
    let a = FieldElement::zero(P.clone()).expect("p is large");
    let b = FieldElement::new(BigUint::from(7u32), P.clone()).expect("p is large");
    (a, b)
}

/// Builds an element of the base field, i.e. bound to [`struct@P`].
pub fn field_element(value: BigUint) -> Result<FieldElement, FieldError> {
    FieldElement::new(value, P.clone())
}

/// Builds a point on `y² = x³ + 7` over the base field.
pub fn point(x: BigUint, y: BigUint) -> Result<Point, PointError> {
    let (a, b) = coefficients();
    Point::new(field_element(x)?, field_element(y)?, a, b)
}

/// The identity of the secp256k1 group.
pub fn infinity() -> Point {
    let (a, b) = coefficients();
    Point::infinity(a, b).expect("coefficients share a field")
}

/// Multiplies a secp256k1 point by `k`, reducing `k` modulo [`N`] first.
///
/// The reduction is what makes `mul(&G, &N)` the identity: the group
/// walks back to where it started every `N` steps. The generic
/// [`Point::scalar_mul`] has no notion of order, so the reduction lives
/// here, next to the curve that defines it.
pub fn mul(point: &Point, k: &BigUint) -> Result<Point, PointError> {
    let k = k % &*N;
    point.scalar_mul(&BigInt::from(k))
}

/// `k·G`, with `k` reduced modulo [`N`].
pub fn mul_generator(k: &BigUint) -> Point {
    mul(&G, k).expect("generator arithmetic stays on one curve")
}

/// A square root in the base field, via `v^((p+1)/4)`.
///
/// secp256k1's prime is ≡ 3 mod 4, which makes this exponentiation a
/// square root whenever `v` is a quadratic residue. When `v` has no
/// root the result is garbage; callers who cannot rule that out must
/// check `sqrt(v)² = v` themselves. The other root is the negation of
/// the returned one.
pub fn sqrt(v: &FieldElement) -> Result<FieldElement, FieldError> {
    if v.prime() != &*P {
        return Err(FieldError::FieldMismatch);
    }
    let exponent = (&*P + 1u32) >> 2u32;
    Ok(v.pow(&BigInt::from(exponent)))
}
