//! Canonicalization of digit buffers to their shortest equivalent form.

use crate::Rat;

impl Rat {
    /// Reduce to the canonical shortest representation of the same value.
    ///
    /// Four passes, in order: a radix point overhanging the buffer is
    /// re-anchored by unrolling period digits, leading fractional zeros
    /// are trimmed, prefix digits that merely restate the period
    /// wrap-around are absorbed into it, and a period that is the
    /// repetition of a shorter block is collapsed to that block.
    /// Idempotent.
    pub fn normalize(&self) -> Rat {
        let mut m = self.mantissa.clone();
        let mut radix = self.radix;
        let mut period = self.period;

        // Pass 0: a radix point beyond the buffer end is re-anchored by
        // unrolling period digits onto the high end until it fits. Keeps
        // radix <= len, so equal values cannot differ in how far the
        // radix overhangs the buffer.
        while radix > m.len() {
            let wrap = m[period];
            m.push(wrap);
            period += 1;
        }

        // Pass 1: a zero in the lowest fractional position carries no
        // information; dropping it shortens both the prefix and the
        // fraction. The period itself is never trimmed.
        let trim = m
            .iter()
            .take_while(|&&d| d == 0)
            .count()
            .min(radix)
            .min(period);
        m.drain(..trim);
        radix -= trim;
        period -= trim;

        // Pass 2: when the last prefix digit equals the last mantissa
        // digit, the period can start one digit earlier and the buffer
        // shrink by one. The period length is invariant under each step.
        while period >= 1 && m.len() > radix && m[period - 1] == m[m.len() - 1] {
            m.pop();
            period -= 1;
        }

        // Pass 3: collapse a composite period to its primitive block,
        // smallest divisor first.
        let plen = m.len() - period;
        for d in 1..plen {
            if plen % d != 0 || period + d < radix {
                continue;
            }
            if (0..plen).all(|i| m[period + i] == m[period + i % d]) {
                m.truncate(period + d);
                break;
            }
        }

        Rat {
            mantissa: m,
            radix,
            period,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_fractional_zeros() {
        let half_sum = Rat {
            mantissa: vec![0x00, 0x01, 0x00],
            radix: 1,
            period: 2,
        };
        assert_eq!(half_sum.normalize(), Rat::from_i64(1));
    }

    #[test]
    fn test_absorbs_prefix_into_period() {
        let wide = Rat {
            mantissa: vec![0xff, 0xff],
            radix: 0,
            period: 1,
        };
        let n = wide.normalize();
        assert_eq!(n.digits(), &[0xff]);
        assert_eq!(n.period_start(), 0);
    }

    #[test]
    fn test_collapses_composite_period() {
        let doubled = Rat {
            mantissa: vec![0x12, 0x34, 0x12, 0x34],
            radix: 0,
            period: 0,
        };
        let n = doubled.normalize();
        assert_eq!(n.digits(), &[0x12, 0x34]);
        assert_eq!(n.period_start(), 0);
    }

    #[test]
    fn test_all_passes_chain() {
        // 0x05 repeating, written with a redundant prefix copy and a
        // doubled period.
        let messy = Rat {
            mantissa: vec![0x05, 0x05, 0x05, 0x05, 0x05],
            radix: 0,
            period: 1,
        };
        let n = messy.normalize();
        assert_eq!(n.digits(), &[0x05]);
        assert_eq!(n.period_start(), 0);
    }

    #[test]
    fn test_preserves_canonical_forms() {
        for v in [
            Rat::zero(),
            Rat::from_i64(1),
            Rat::from_i64(-100),
            Rat::from_i64(500),
        ] {
            assert_eq!(v.normalize(), v);
        }
    }

    #[test]
    fn test_idempotent() {
        let raw = Rat {
            mantissa: vec![0x00, 0x07, 0x07, 0x07],
            radix: 1,
            period: 2,
        };
        let once = raw.normalize();
        assert_eq!(once.normalize(), once);
    }

    #[test]
    fn test_unrolls_overhanging_radix() {
        let overhung = Rat {
            mantissa: vec![0x01, 0x00],
            radix: 3,
            period: 1,
        };
        let n = overhung.normalize();
        assert_eq!(n.digits(), &[0x01, 0x00, 0x00]);
        assert_eq!(n.radix(), 3);
        assert_eq!(n.period_start(), 2);
        assert_eq!(n, Rat::from_ratio(1, 16_777_216));
    }

    #[test]
    fn test_radix_bound_blocks_absorption() {
        // A pure sub-unit value may keep radix == len; absorption must not
        // shrink the buffer past the radix point.
        let sub_unit = Rat {
            mantissa: vec![0x01, 0x00],
            radix: 2,
            period: 1,
        };
        assert_eq!(sub_unit.normalize(), sub_unit);
    }
}
