//! Schoolbook multiplication with cycle detection on both loops.
//!
//! The carry of a digit-stream product is not a byte: multiplying periodic
//! streams makes the carry itself a periodic value. Both loops therefore
//! carry a full [`Rat`] in their state and compare it structurally when
//! testing for a repeated state.

use crate::Rat;

/// State of either multiplier loop: cursors into both operands plus the
/// pending carry value.
#[derive(Clone)]
struct MulState {
    cursor_a: usize,
    cursor_b: usize,
    carry: Rat,
}

impl MulState {
    fn matches(&self, cursor_a: usize, cursor_b: usize, carry: &Rat) -> bool {
        self.cursor_a == cursor_a && self.cursor_b == cursor_b && &self.carry == carry
    }
}

impl Rat {
    /// Exact product of two values.
    ///
    /// The outer loop emits one result digit per iteration: the low digit
    /// of `a[i]·b[0] + carry`. The inner loop walks the remaining digits of
    /// `b`, accumulating the digit buffer of the next outer carry, and
    /// closes when its own state repeats; the matched history index becomes
    /// the period start of that carry. The outer loop closes the same way,
    /// fixing the period of the product.
    pub fn mul(&self, other: &Rat) -> Rat {
        let mut out_digits: Vec<u8> = Vec::new();
        let mut outer_seen: Vec<MulState> = Vec::new();
        let mut cursor_a = 0usize;
        let mut cursor_b = 0usize;
        let mut carry = Rat::zero();

        loop {
            if let Some(i) = outer_seen
                .iter()
                .position(|s| s.matches(cursor_a, cursor_b, &carry))
            {
                tracing::trace!(
                    "product cycle closed after {} digits (period {}, {} outer states)",
                    out_digits.len(),
                    i,
                    outer_seen.len()
                );
                return Rat {
                    mantissa: out_digits,
                    radix: self.radix + other.radix,
                    period: i,
                }
                .normalize();
            }
            outer_seen.push(MulState {
                cursor_a,
                cursor_b,
                carry: carry.clone(),
            });

            let first = Rat::from_u64(
                self.mantissa[cursor_a] as u64 * other.mantissa[cursor_b] as u64,
            )
            .add(&carry);
            out_digits.push(first.mantissa[0]);

            let mut inner_seen: Vec<MulState> = Vec::new();
            let mut inner_cursor = other.step(cursor_b);
            let mut inner_carry = first.rshift();
            let mut carry_digits: Vec<u8> = Vec::new();

            loop {
                if let Some(i) = inner_seen
                    .iter()
                    .position(|s| s.matches(cursor_a, inner_cursor, &inner_carry))
                {
                    carry = Rat {
                        mantissa: carry_digits,
                        radix: 0,
                        period: i,
                    }
                    .normalize();
                    cursor_a = self.step(cursor_a);
                    cursor_b = 0;
                    break;
                }
                inner_seen.push(MulState {
                    cursor_a,
                    cursor_b: inner_cursor,
                    carry: inner_carry.clone(),
                });

                let product = Rat::from_u64(
                    self.mantissa[cursor_a] as u64 * other.mantissa[inner_cursor] as u64,
                )
                .add(&inner_carry);
                carry_digits.push(product.mantissa[0]);
                inner_carry = product.rshift();
                inner_cursor = other.step(inner_cursor);
            }
        }
    }
}
