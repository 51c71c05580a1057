//! Arithmetic in ℤ/pℤ (the integers modulo a prime)
use core::{fmt, ops::Neg};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// An element of a finite field of prime order.
///
/// A `FieldElement` is an integer in `[0, p)` together with the modulus `p`
/// it lives under. The modulus is part of the value's identity: every
/// binary operation checks that both operands come from the same field and
/// fails with [`FieldError::FieldMismatch`] otherwise. Elements are
/// immutable; arithmetic returns fresh elements reduced into `[0, p)`.
///
/// No primality check is performed on `p`. If the modulus is composite the
/// ring operations still work but inversion (and therefore [`div`]) is
/// meaningless.
///
/// # Example
///
/// ```
/// use curvefun::FieldElement;
/// use num_bigint::BigUint;
///
/// let a = FieldElement::new(BigUint::from(7u32), BigUint::from(13u32))?;
/// let b = FieldElement::new(BigUint::from(12u32), BigUint::from(13u32))?;
/// assert_eq!(a.add(&b)?, FieldElement::new(BigUint::from(6u32), BigUint::from(13u32))?);
/// # Ok::<_, curvefun::FieldError>(())
/// ```
///
/// [`div`]: FieldElement::div
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement {
    value: BigUint,
    prime: BigUint,
}

/// Error returned by [`FieldElement`] construction and arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The value handed to [`FieldElement::new`] was not in `[0, p)`, or
    /// the modulus was below 2.
    InvalidElement,
    /// The operands of a binary operation belong to different fields.
    FieldMismatch,
    /// A multiplicative inverse of zero was requested.
    DivisionByZero,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidElement => write!(f, "value not in field range [0, p)"),
            FieldError::FieldMismatch => write!(f, "cannot combine elements of different fields"),
            FieldError::DivisionByZero => write!(f, "zero has no multiplicative inverse"),
        }
    }
}

impl std::error::Error for FieldError {}

impl FieldElement {
    /// Creates the element `value` of the field of order `prime`.
    ///
    /// Fails with [`FieldError::InvalidElement`] when `value ≥ prime` or
    /// `prime < 2`. The caller is responsible for `prime` actually being
    /// prime.
    pub fn new(value: BigUint, prime: BigUint) -> Result<Self, FieldError> {
        if prime < BigUint::from(2u32) || value >= prime {
            return Err(FieldError::InvalidElement);
        }
        Ok(FieldElement { value, prime })
    }

    /// The additive identity of the field of order `prime`.
    pub fn zero(prime: BigUint) -> Result<Self, FieldError> {
        Self::new(BigUint::zero(), prime)
    }

    /// The multiplicative identity of the field of order `prime`.
    pub fn one(prime: BigUint) -> Result<Self, FieldError> {
        Self::new(BigUint::one(), prime)
    }

    /// The integer representative in `[0, p)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The field modulus.
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// Whether this is the additive identity.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn same_field(&self, rhs: &Self) -> Result<(), FieldError> {
        if self.prime == rhs.prime {
            Ok(())
        } else {
            Err(FieldError::FieldMismatch)
        }
    }

    fn lift(&self, value: BigUint) -> Self {
        debug_assert!(value < self.prime);
        FieldElement {
            value,
            prime: self.prime.clone(),
        }
    }

    /// `(self + rhs) mod p`.
    pub fn add(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.same_field(rhs)?;
        Ok(self.lift((&self.value + &rhs.value) % &self.prime))
    }

    /// `(self - rhs) mod p`, normalized into `[0, p)`.
    pub fn sub(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.same_field(rhs)?;
        // lift above the modulus first; BigUint cannot go negative
        Ok(self.lift(((&self.prime + &self.value) - &rhs.value) % &self.prime))
    }

    /// `(self * rhs) mod p`.
    pub fn mul(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.same_field(rhs)?;
        Ok(self.lift((&self.value * &rhs.value) % &self.prime))
    }

    /// `self` raised to an arbitrary integer exponent.
    ///
    /// The exponent is first reduced modulo `p - 1` (Fermat's little
    /// theorem: `a^(p-1) = 1` for `a ≠ 0`), which is what gives negative
    /// exponents their meaning: `x.pow(-1)` is the multiplicative inverse
    /// of `x`. The reduced exponent then goes through
    /// [`BigUint::modpow`]'s square-and-multiply.
    ///
    /// A zero exponent yields `1` for every base, including zero — the
    /// `0⁰ = 1` convention.
    ///
    /// # Example
    ///
    /// ```
    /// use curvefun::FieldElement;
    /// use num_bigint::{BigInt, BigUint};
    ///
    /// let x = FieldElement::new(BigUint::from(17u32), BigUint::from(31u32))?;
    /// assert_eq!(
    ///     x.pow(&BigInt::from(-3)).mul(&x.pow(&BigInt::from(3)))?,
    ///     FieldElement::one(BigUint::from(31u32))?,
    /// );
    /// # Ok::<_, curvefun::FieldError>(())
    /// ```
    pub fn pow(&self, exponent: &BigInt) -> Self {
        let phi = BigInt::from(&self.prime - 1u32);
        let mut reduced = exponent % &phi;
        if reduced.sign() == Sign::Minus {
            reduced += &phi;
        }
        let reduced = reduced
            .to_biguint()
            .expect("non-negative after normalization");
        self.lift(self.value.modpow(&reduced, &self.prime))
    }

    /// `(self / rhs) mod p`, i.e. multiplication by `rhs^(p-2)`.
    ///
    /// Fails with [`FieldError::DivisionByZero`] when `rhs` is the zero
    /// element.
    pub fn div(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.same_field(rhs)?;
        if rhs.value.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        let inverse = rhs.value.modpow(&(&self.prime - 2u32), &self.prime);
        Ok(self.lift((&self.value * inverse) % &self.prime))
    }

    /// `(self * k) mod p` for an arbitrary integer `k`, negative included.
    pub fn scalar_mul(&self, k: &BigInt) -> Self {
        let prime = BigInt::from(self.prime.clone());
        let mut value = (BigInt::from(self.value.clone()) * k) % &prime;
        if value.sign() == Sign::Minus {
            value += &prime;
        }
        self.lift(value.to_biguint().expect("non-negative after normalization"))
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        self.lift((&self.prime - &self.value) % &self.prime)
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -&self
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mod {}", self.value, self.prime)
    }
}
