//! Two's complement at infinity: complement, negation, subtraction.

use crate::Rat;

impl Rat {
    /// Digitwise complement. Radix and period are preserved exactly; the
    /// result is not re-canonicalized, so the complement of a normalized
    /// value may itself admit a shorter form.
    ///
    /// Because the infinite suffix of a non-negative value is `0x00` and
    /// that of a negative value is `0xff`, complement swaps the two sign
    /// extensions.
    pub fn complement(&self) -> Rat {
        Rat {
            mantissa: self.mantissa.iter().map(|&d| !d).collect(),
            radix: self.radix,
            period: self.period,
        }
    }

    /// Exact negation: complement, then add one.
    pub fn negate(&self) -> Rat {
        self.complement().add(&Rat::from_u64(1))
    }

    /// Exact difference `self - other`.
    pub fn sub(&self, other: &Rat) -> Rat {
        self.add(&other.negate())
    }
}
