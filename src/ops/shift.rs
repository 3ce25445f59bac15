//! Single-digit shifts and radix moves: division and multiplication by 256.

use crate::Rat;

impl Rat {
    /// Drop the lowest-significance digit, dividing by 256 and discarding
    /// the residue below the new low position.
    ///
    /// A value whose buffer is purely periodic has no prefix digit to drop;
    /// rotating the buffer left by one produces the identical stream
    /// advanced one position.
    pub fn rshift(&self) -> Rat {
        let shifted = if self.period == 0 {
            let mut m = Vec::with_capacity(self.mantissa.len());
            m.extend_from_slice(&self.mantissa[1..]);
            m.push(self.mantissa[0]);
            Rat {
                mantissa: m,
                radix: self.radix,
                period: 0,
            }
        } else {
            Rat {
                mantissa: self.mantissa[1..].to_vec(),
                radix: self.radix,
                period: self.period - 1,
            }
        };
        shifted.normalize()
    }

    /// Exact division by 256, performed by moving the radix point.
    ///
    /// A zero low digit can simply be dropped (a rotation when the buffer
    /// is purely periodic). Otherwise the radix increments; when the radix
    /// point would pass the end of the buffer, one period digit is unrolled
    /// onto the high end first so the radix stays within the mantissa.
    pub fn div256(&self) -> Rat {
        let shifted = if self.mantissa[0] == 0 {
            if self.period > 0 {
                Rat {
                    mantissa: self.mantissa[1..].to_vec(),
                    radix: self.radix,
                    period: self.period - 1,
                }
            } else {
                let mut m = self.mantissa[1..].to_vec();
                m.push(0);
                Rat {
                    mantissa: m,
                    radix: self.radix,
                    period: 0,
                }
            }
        } else {
            Rat {
                mantissa: self.mantissa.clone(),
                radix: self.radix + 1,
                period: self.period,
            }
        };
        shifted.normalize()
    }

    /// Exact multiplication by 256: the inverse radix move.
    pub(crate) fn mul256(&self) -> Rat {
        if self.radix > 0 {
            let mut scaled = self.clone();
            scaled.radix -= 1;
            scaled
        } else {
            let mut m = Vec::with_capacity(self.mantissa.len() + 1);
            m.push(0);
            m.extend_from_slice(&self.mantissa);
            Rat {
                mantissa: m,
                radix: 0,
                period: self.period + 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rshift_integers() {
        assert_eq!(Rat::from_i64(1000).rshift(), Rat::from_i64(3));
        assert_eq!(Rat::from_i64(3).rshift(), Rat::zero());
        assert_eq!(Rat::from_i64(-1000).rshift(), Rat::from_i64(-4));
    }

    #[test]
    fn test_rshift_rotates_pure_period() {
        let v = Rat {
            mantissa: vec![0x01, 0x02],
            radix: 0,
            period: 0,
        };
        let r = v.rshift();
        assert_eq!(r.digits(), &[0x02, 0x01]);
        assert_eq!(r.period_start(), 0);
        // One full rotation restores the original stream.
        assert_eq!(r.rshift(), v);
    }

    #[test]
    fn test_div256_drops_zero_digit() {
        assert_eq!(Rat::from_i64(256).div256(), Rat::from_i64(1));
        assert_eq!(Rat::from_i64(0x1_0000).div256(), Rat::from_i64(256));
    }

    #[test]
    fn test_div256_moves_radix() {
        let scaled = Rat::from_i64(1).div256();
        assert_eq!(scaled.digits(), &[0x01, 0x00]);
        assert_eq!(scaled.radix(), 1);
        assert_eq!(scaled, Rat::from_ratio(1, 256));
    }

    #[test]
    fn test_div256_round_trips_with_mul256() {
        for n in [1i64, 7, 255, 256, 1000, -5] {
            let v = Rat::from_i64(n);
            assert_eq!(v.div256().mul256().normalize(), v);
        }
    }

    #[test]
    fn test_div256_past_buffer_end() {
        // 1/65536 keeps radix == buffer length; a further shift unrolls a
        // period digit rather than remapping the radix.
        let v = Rat::from_ratio(1, 65_536);
        assert_eq!(v.digits(), &[0x01, 0x00]);
        assert_eq!(v.radix(), 2);
        let deeper = v.div256();
        assert_eq!(deeper, Rat::from_ratio(1, 16_777_216));
        assert_eq!(deeper.radix(), 3);
    }

    #[test]
    fn test_mul256_inserts_low_digit() {
        let v = Rat::from_i64(3).mul256();
        assert_eq!(v.digits(), &[0x00, 0x03, 0x00]);
        assert_eq!(v.normalize(), Rat::from_i64(768));
    }
}
