//! The chord-tangent group law on short Weierstrass curves
use crate::field::{FieldElement, FieldError};
use core::fmt;
use num_bigint::{BigInt, Sign};
use num_traits::Zero;

/// A point on the curve `y² = x³ + a·x + b` over a prime field, or the
/// point at infinity.
///
/// The curve coefficients `a` and `b` are part of the point's identity,
/// the same way a [`FieldElement`] carries its modulus: two points can
/// only be added if their coefficients (and underlying field) agree, and
/// construction fails unless the coordinates actually satisfy the curve
/// equation. The point at infinity — the identity of the group — has no
/// coordinates but still belongs to a specific curve.
///
/// # Example
///
/// ```
/// use curvefun::{FieldElement, Point};
/// use num_bigint::BigUint;
///
/// let p = BigUint::from(223u32);
/// let fe = |v: u32| FieldElement::new(BigUint::from(v), p.clone()).unwrap();
/// let point = Point::new(fe(192), fe(105), fe(0), fe(7))?;
/// assert_eq!(point.add(&point.negate())?, Point::infinity(fe(0), fe(7))?);
/// # Ok::<_, curvefun::PointError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    x: Option<FieldElement>,
    y: Option<FieldElement>,
    a: FieldElement,
    b: FieldElement,
}

/// Error returned by [`Point`] construction and arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointError {
    /// The coordinates do not satisfy `y² = x³ + a·x + b`.
    NotOnCurve,
    /// The operands of an addition belong to different curves.
    CurveMismatch,
    /// The underlying field arithmetic failed (mixed moduli, typically).
    Field(FieldError),
}

impl fmt::Display for PointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointError::NotOnCurve => write!(f, "coordinates are not on the curve"),
            PointError::CurveMismatch => write!(f, "cannot combine points on different curves"),
            PointError::Field(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PointError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PointError::Field(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FieldError> for PointError {
    fn from(e: FieldError) -> Self {
        PointError::Field(e)
    }
}

impl Point {
    /// Creates the point `(x, y)` on the curve with coefficients `a`, `b`.
    ///
    /// Fails with [`PointError::NotOnCurve`] unless `y² = x³ + a·x + b`
    /// holds in the field, and with [`PointError::Field`] when the
    /// coordinates and coefficients do not share a modulus.
    pub fn new(
        x: FieldElement,
        y: FieldElement,
        a: FieldElement,
        b: FieldElement,
    ) -> Result<Self, PointError> {
        let rhs = x.mul(&x)?.mul(&x)?.add(&a.mul(&x)?)?.add(&b)?;
        if y.mul(&y)?.sub(&rhs)?.is_zero() {
            Ok(Point {
                x: Some(x),
                y: Some(y),
                a,
                b,
            })
        } else {
            Err(PointError::NotOnCurve)
        }
    }

    /// The point at infinity on the curve with coefficients `a`, `b`.
    pub fn infinity(a: FieldElement, b: FieldElement) -> Result<Self, PointError> {
        if a.prime() != b.prime() {
            return Err(PointError::Field(FieldError::FieldMismatch));
        }
        Ok(Point {
            x: None,
            y: None,
            a,
            b,
        })
    }

    /// Whether this is the identity of the group.
    pub fn is_infinity(&self) -> bool {
        self.x.is_none()
    }

    /// The x-coordinate, `None` for the point at infinity.
    pub fn x(&self) -> Option<&FieldElement> {
        self.x.as_ref()
    }

    /// The y-coordinate, `None` for the point at infinity.
    pub fn y(&self) -> Option<&FieldElement> {
        self.y.as_ref()
    }

    /// The curve coefficients `(a, b)`.
    pub fn curve(&self) -> (&FieldElement, &FieldElement) {
        (&self.a, &self.b)
    }

    /// The additive inverse: `(x, -y)`. Infinity is its own inverse.
    pub fn negate(&self) -> Self {
        Point {
            x: self.x.clone(),
            y: self.y.as_ref().map(|y| -y),
            a: self.a.clone(),
            b: self.b.clone(),
        }
    }

    fn identity(&self) -> Self {
        Point {
            x: None,
            y: None,
            a: self.a.clone(),
            b: self.b.clone(),
        }
    }

    /// Adds two points with the chord-tangent law.
    ///
    /// Fails with [`PointError::CurveMismatch`] when the operands live on
    /// different curves. The cases, in order: either operand is the
    /// identity; a vertical chord (`x₁ = x₂`, `y₁ ≠ y₂`); a chord through
    /// distinct x-coordinates; a vertical tangent (`y = 0`); the general
    /// tangent (doubling).
    pub fn add(&self, rhs: &Self) -> Result<Self, PointError> {
        if self.a != rhs.a || self.b != rhs.b {
            return Err(PointError::CurveMismatch);
        }
        let (x1, y1) = match (&self.x, &self.y) {
            (Some(x), Some(y)) => (x, y),
            _ => return Ok(rhs.clone()),
        };
        let (x2, y2) = match (&rhs.x, &rhs.y) {
            (Some(x), Some(y)) => (x, y),
            _ => return Ok(self.clone()),
        };

        if x1 == x2 && y1 != y2 {
            // rhs is the inverse of self
            return Ok(self.identity());
        }

        let slope = if x1 != x2 {
            y2.sub(y1)?.div(&x2.sub(x1)?)?
        } else {
            if y1.is_zero() {
                // doubling a point whose tangent is vertical
                return Ok(self.identity());
            }
            let three = BigInt::from(3);
            let two = BigInt::from(2);
            x1.mul(x1)?
                .scalar_mul(&three)
                .add(&self.a)?
                .div(&y1.scalar_mul(&two))?
        };
        let x3 = slope.mul(&slope)?.sub(x1)?.sub(x2)?;
        let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;
        Ok(Point {
            x: Some(x3),
            y: Some(y3),
            a: self.a.clone(),
            b: self.b.clone(),
        })
    }

    /// Multiplies the point by an arbitrary integer coefficient.
    ///
    /// Uses double-and-add over the coefficient's binary expansion, so a
    /// 256-bit coefficient costs a few hundred group operations rather
    /// than 2²⁵⁶ additions. A zero coefficient yields the identity; a
    /// negative coefficient multiplies the point's inverse. The generic
    /// group has no notion of order — callers who know it (see
    /// [`secp256k1::mul`]) reduce the coefficient before calling this.
    ///
    /// [`secp256k1::mul`]: crate::secp256k1::mul
    pub fn scalar_mul(&self, coefficient: &BigInt) -> Result<Self, PointError> {
        let mut current = if coefficient.sign() == Sign::Minus {
            self.negate()
        } else {
            self.clone()
        };
        let mut coef = coefficient.magnitude().clone();
        let mut result = self.identity();
        while !coef.is_zero() {
            if coef.bit(0) {
                result = result.add(&current)?;
            }
            current = current.add(&current)?;
            coef >>= 1u32;
        }
        Ok(result)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.x, &self.y) {
            (Some(x), Some(y)) => write!(f, "Point({}, {})", x.value(), y.value()),
            _ => write!(f, "Point(infinity)"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::BigUint;

    // y² = x³ + 7 over F₂₂₃, the exercise curve
    fn fe(value: u64) -> FieldElement {
        FieldElement::new(BigUint::from(value), BigUint::from(223u32)).unwrap()
    }

    fn point(x: u64, y: u64) -> Point {
        Point::new(fe(x), fe(y), fe(0), fe(7)).unwrap()
    }

    fn infinity() -> Point {
        Point::infinity(fe(0), fe(7)).unwrap()
    }

    #[test]
    fn on_curve() {
        for (x, y) in [(192, 105), (17, 56), (1, 193)] {
            assert!(Point::new(fe(x), fe(y), fe(0), fe(7)).is_ok());
        }
    }

    #[test]
    fn off_curve() {
        for (x, y) in [(200, 119), (42, 99)] {
            assert_eq!(
                Point::new(fe(x), fe(y), fe(0), fe(7)),
                Err(PointError::NotOnCurve)
            );
        }
    }

    #[test]
    fn perturbed_y_is_rejected() {
        let y = fe(105).add(&fe(1)).unwrap();
        assert_eq!(
            Point::new(fe(192), y, fe(0), fe(7)),
            Err(PointError::NotOnCurve)
        );
    }

    #[test]
    fn identity_laws() {
        let p = point(192, 105);
        assert_eq!(infinity().add(&p).unwrap(), p);
        assert_eq!(p.add(&infinity()).unwrap(), p);
        assert_eq!(p.add(&p.negate()).unwrap(), infinity());
    }

    #[test]
    fn add_distinct_points() {
        assert_eq!(
            point(170, 142).add(&point(60, 139)).unwrap(),
            point(220, 181)
        );
        assert_eq!(point(47, 71).add(&point(117, 141)).unwrap(), point(60, 139));
        assert_eq!(point(143, 98).add(&point(76, 66)).unwrap(), point(47, 71));
    }

    #[test]
    fn doubling() {
        assert_eq!(point(192, 105).add(&point(192, 105)).unwrap(), point(49, 71));
        assert_eq!(point(143, 98).add(&point(143, 98)).unwrap(), point(64, 168));
    }

    #[test]
    fn scalar_mul_matches_repeated_addition() {
        let p = point(47, 71);
        let mut acc = infinity();
        for n in 0..=21u32 {
            assert_eq!(p.scalar_mul(&BigInt::from(n)).unwrap(), acc);
            acc = acc.add(&p).unwrap();
        }
    }

    #[test]
    fn scalar_mul_ladder() {
        let p = point(47, 71);
        assert_eq!(p.scalar_mul(&BigInt::from(2)).unwrap(), point(36, 111));
        assert_eq!(p.scalar_mul(&BigInt::from(4)).unwrap(), point(194, 51));
        assert_eq!(p.scalar_mul(&BigInt::from(8)).unwrap(), point(116, 55));
        // (47, 71) generates a subgroup of order 21
        assert_eq!(p.scalar_mul(&BigInt::from(21)).unwrap(), infinity());
        assert_eq!(p.scalar_mul(&BigInt::from(20)).unwrap(), point(47, 152));
    }

    #[test]
    fn negative_coefficient_multiplies_the_inverse() {
        let p = point(47, 71);
        assert_eq!(
            p.scalar_mul(&BigInt::from(-5)).unwrap(),
            p.negate().scalar_mul(&BigInt::from(5)).unwrap()
        );
        assert_eq!(p.scalar_mul(&BigInt::from(-1)).unwrap(), p.negate());
    }

    #[test]
    fn zero_coefficient_is_identity() {
        assert_eq!(
            point(47, 71).scalar_mul(&BigInt::from(0)).unwrap(),
            infinity()
        );
    }

    #[test]
    fn curve_mismatch_fails() {
        // (0, 26) lies on y² = x³ + 5x + 7 over the same field
        let other = Point::new(fe(0), fe(26), fe(5), fe(7)).unwrap();
        assert_eq!(point(47, 71).add(&other), Err(PointError::CurveMismatch));
    }

    #[test]
    fn equality_includes_curve_tags() {
        let p = point(47, 71);
        assert_eq!(p, point(47, 71));
        assert_ne!(p, point(60, 139));
    }
}
