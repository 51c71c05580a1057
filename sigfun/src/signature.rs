use core::fmt;
use num_bigint::BigUint;

/// An ECDSA-style signature.
///
/// The pair `(r, s)`: `r` is the x-coordinate of the nonce point `k·G`
/// and `s = (z + r·e)·k⁻¹ mod N`. Both are integers in `[1, N)`;
/// [`sign`] additionally keeps `s` in the low half of the order.
///
/// [`sign`]: crate::sign
#[derive(Clone, PartialEq, Eq)]
pub struct Signature {
    /// x-coordinate of the nonce point `R = k·G`.
    pub r: BigUint,
    /// `(z + r·e)·k⁻¹ mod N`.
    pub s: BigUint,
}

impl Signature {
    /// Borrows the signature as its `(r, s)` pair.
    pub fn as_tuple(&self) -> (&BigUint, &BigUint) {
        (&self.r, &self.s)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({:064x}, {:064x})", self.r, self.s)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
