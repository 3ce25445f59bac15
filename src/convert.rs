//! Exact conversion into the `num` big-rational stack.

use crate::Rat;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

impl Rat {
    /// Evaluate the digit stream as an exact [`BigRational`].
    ///
    /// With prefix value `P`, period value `T` of length `L` starting at
    /// index `q`, and radix `r`, the repeating suffix sums (as a geometric
    /// series taken exactly) to `T / (1 - 256^L)`, so the whole stream is
    ///
    /// ```text
    /// (P·(1 - 256^L) + 256^q·T) / ((1 - 256^L) · 256^r)
    /// ```
    ///
    /// The negative series denominator is what folds the `0xff` tail of a
    /// negative value into an ordinary signed numerator.
    pub fn to_big_rational(&self) -> BigRational {
        let base = BigInt::from(256u16);

        let mut prefix = BigInt::zero();
        let mut scale = BigInt::one();
        for &d in &self.mantissa[..self.period] {
            prefix += &scale * BigInt::from(d);
            scale *= &base;
        }
        // scale is now 256^q.

        let mut tail = BigInt::zero();
        let mut power = BigInt::one();
        for &d in &self.mantissa[self.period..] {
            tail += &power * BigInt::from(d);
            power *= &base;
        }
        // power is now 256^L.

        let series = BigInt::one() - power;
        let numer = prefix * &series + scale * tail;
        let denom = series * num_traits::pow(base, self.radix);
        BigRational::new(numer, denom)
    }
}

impl From<&Rat> for BigRational {
    fn from(value: &Rat) -> Self {
        value.to_big_rational()
    }
}
