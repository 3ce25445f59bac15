//! Schoolbook addition over two periodic digit streams.

use crate::Rat;

/// Iteration state of the adder: pending carry plus both stream cursors.
/// Termination is by re-occurrence of this tuple.
type SumState = (u8, usize, usize);

impl Rat {
    /// Exact sum of two values.
    ///
    /// The operand with the smaller radix is lifted to the common radix by
    /// implicit zero digits below its low end; output digits then come from
    /// a single carry-propagating scan of both streams. The scan stops as
    /// soon as its state tuple repeats, which pins down the period of the
    /// result.
    pub fn add(&self, other: &Rat) -> Rat {
        let (a, b) = if self.radix <= other.radix {
            (self, other)
        } else {
            (other, self)
        };
        let pad = b.radix - a.radix;
        let a_len = a.mantissa.len() + pad;
        let a_period = a.period + pad;
        let digit_a = |i: usize| if i < pad { 0u8 } else { a.mantissa[i - pad] };

        let mut digits: Vec<u8> = Vec::new();
        let mut seen: Vec<SumState> = Vec::new();
        let mut cursor_a = 0usize;
        let mut cursor_b = 0usize;
        let mut acc: u16 = 0;

        loop {
            seen.push((acc as u8, cursor_a, cursor_b));

            acc += digit_a(cursor_a) as u16 + b.mantissa[cursor_b] as u16;
            digits.push((acc & 0xff) as u8);
            acc >>= 8;

            cursor_a = if cursor_a + 1 == a_len {
                a_period
            } else {
                cursor_a + 1
            };
            cursor_b = b.step(cursor_b);

            let state: SumState = (acc as u8, cursor_a, cursor_b);
            if let Some(i) = seen.iter().position(|s| *s == state) {
                return Rat {
                    mantissa: digits,
                    radix: b.radix,
                    period: i,
                }
                .normalize();
            }
        }
    }
}
