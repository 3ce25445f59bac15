//! Long division over base 256 via per-digit modular inverses.

use crate::Rat;

/// Multiplicative inverses mod 256 of the odd residues, indexed by `x >> 1`.
///
/// Built at compile time by Newton lifting: an odd `x` is its own inverse
/// mod 8, and each `inv ← inv·(2 − x·inv)` step doubles the number of
/// correct low bits.
const ODD_INVERSES: [u8; 128] = odd_inverses();

const fn odd_inverses() -> [u8; 128] {
    let mut table = [0u8; 128];
    let mut k = 0;
    while k < 128 {
        let x = (2 * k + 1) as u8;
        let mut inv = x;
        let mut round = 0;
        while round < 3 {
            inv = inv.wrapping_mul(2u8.wrapping_sub(x.wrapping_mul(inv)));
            round += 1;
        }
        table[k] = inv;
        k += 1;
    }
    table
}

impl Rat {
    /// Exact quotient `self / divisor`.
    ///
    /// Preparation rewrites the pair until the divisor is an odd integer,
    /// so that every one of its digits has an inverse mod 256: both sides
    /// are scaled by 256 while the divisor has fractional digits, divided
    /// by 256 while its low digit is zero, and doubled while its low digit
    /// is even. The accumulated radix of the dividend is reclaimed as the
    /// radix of the quotient.
    ///
    /// The main loop then emits one quotient digit per step: the unique
    /// `y` with `divisor[0]·y ≡ dividend[0] (mod 256)`. Subtracting
    /// `y·divisor` cancels the dividend's low digit and a right shift
    /// advances to the next position. The quotient period closes when a
    /// `(dividend, digit)` pair repeats.
    ///
    /// # Panics
    ///
    /// Panics when `divisor` is zero.
    pub fn div(&self, divisor: &Rat) -> Rat {
        assert!(!divisor.is_zero(), "division by zero");

        let mut a = self.clone();
        let mut b = divisor.clone();
        loop {
            if b.radix > 0 {
                a = a.mul256();
                b = b.mul256();
            } else if b.mantissa[0] == 0 {
                a = a.div256();
                b = b.div256();
            } else if b.mantissa[0] & 1 == 0 {
                a = a.add(&a);
                b = b.add(&b);
            } else {
                break;
            }
        }
        let radix = a.radix + b.radix;
        a.radix = 0;
        b.radix = 0;
        tracing::trace!(
            "divisor reduced to odd integer: {} digits, quotient radix {}",
            b.mantissa.len(),
            radix
        );

        let inverse = ODD_INVERSES[(b.mantissa[0] >> 1) as usize];
        let mut quotient: Vec<u8> = Vec::new();
        let mut seen: Vec<(Rat, u8)> = Vec::new();
        loop {
            let y = a.mantissa[0].wrapping_mul(inverse);
            if let Some(i) = seen.iter().position(|(d, digit)| *digit == y && d == &a) {
                tracing::trace!(
                    "quotient cycle closed after {} digits (period {})",
                    quotient.len(),
                    i
                );
                return Rat {
                    mantissa: quotient,
                    radix,
                    period: i,
                }
                .normalize();
            }
            seen.push((a.clone(), y));
            quotient.push(y);
            a = a.sub(&Rat::from_u8(y).mul(&b)).rshift();
        }
    }
}
