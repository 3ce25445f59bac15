//! Compact binary wire format.
//!
//! The header width is chosen by the digit count: up to 16 digits pack the
//! radix and period start into one nibble-split byte, and each larger size
//! bucket widens the pair to little-endian u8, u16, u32, or u64 fields. The
//! digits follow the header verbatim, low digit first.
//!
//! A compact writer may elide a trailing period byte when the period is the
//! single digit `0x00`; the decoder reconstructs it, for every bucket, from
//! the tell-tale of a period start equal to the digit count.

use crate::error::{Error, Result};
use crate::Rat;

impl Rat {
    /// Encode into the compact wire format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let n = self.mantissa.len();
        let mut buf: Vec<u8>;
        if n <= 0x10 {
            buf = Vec::with_capacity(1 + n);
            buf.push((self.radix as u8) | ((self.period as u8) << 4));
        } else if n <= 0x100 {
            buf = Vec::with_capacity(2 + n);
            buf.push(self.radix as u8);
            buf.push(self.period as u8);
        } else if n <= 0x1_0000 {
            buf = Vec::with_capacity(4 + n);
            buf.extend_from_slice(&(self.radix as u16).to_le_bytes());
            buf.extend_from_slice(&(self.period as u16).to_le_bytes());
        } else if (n as u64) <= 0x1_0000_0000 {
            buf = Vec::with_capacity(8 + n);
            buf.extend_from_slice(&(self.radix as u32).to_le_bytes());
            buf.extend_from_slice(&(self.period as u32).to_le_bytes());
        } else {
            buf = Vec::with_capacity(16 + n);
            buf.extend_from_slice(&(self.radix as u64).to_le_bytes());
            buf.extend_from_slice(&(self.period as u64).to_le_bytes());
        }
        buf.extend_from_slice(&self.mantissa);
        buf
    }

    /// Decode a value previously produced by [`Rat::to_bytes`].
    ///
    /// The size bucket is recovered from the total length. Fails only when
    /// the buffer is shorter than the minimum header plus payload.
    pub fn from_bytes(buf: &[u8]) -> Result<Rat> {
        if buf.len() < 2 {
            return Err(Error::Truncated);
        }
        let (radix, period, digits) = if buf.len() <= 0x10 + 1 {
            (
                (buf[0] & 0x0f) as usize,
                (buf[0] >> 4) as usize,
                &buf[1..],
            )
        } else if buf.len() <= 0x100 + 2 {
            (buf[0] as usize, buf[1] as usize, &buf[2..])
        } else if buf.len() <= 0x1_0000 + 4 {
            (
                u16::from_le_bytes([buf[0], buf[1]]) as usize,
                u16::from_le_bytes([buf[2], buf[3]]) as usize,
                &buf[4..],
            )
        } else if (buf.len() as u64) <= 0x1_0000_0000 + 8 {
            (
                u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]) as usize,
                u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]) as usize,
                &buf[8..],
            )
        } else {
            (
                u64::from_le_bytes([
                    buf[0], buf[1], buf[2], buf[3], buf[4], buf[5], buf[6], buf[7],
                ]) as usize,
                u64::from_le_bytes([
                    buf[8], buf[9], buf[10], buf[11], buf[12], buf[13], buf[14], buf[15],
                ]) as usize,
                &buf[16..],
            )
        };

        let mut mantissa = digits.to_vec();
        if period == mantissa.len() {
            // The single-zero period byte was elided; restore it.
            mantissa.push(0);
        }
        Ok(Rat {
            mantissa,
            radix,
            period,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibble_header_vectors() {
        assert_eq!(Rat::from_ratio(3, 5).to_bytes(), vec![0x10, 0x67, 0x66]);
        assert_eq!(Rat::from_ratio(100, 3).to_bytes(), vec![0x10, 0xcc, 0xaa]);
        assert_eq!(Rat::from_i64(0).to_bytes(), vec![0x00, 0x00]);
        assert_eq!(Rat::from_i64(-1).to_bytes(), vec![0x00, 0xff]);
        assert_eq!(Rat::from_i64(100).to_bytes(), vec![0x10, 0x64, 0x00]);
        assert_eq!(Rat::from_i64(-5).to_bytes(), vec![0x10, 0xfb, 0xff]);
        assert_eq!(
            Rat::from_i64(10_000).to_bytes(),
            vec![0x20, 0x10, 0x27, 0x00]
        );
        assert_eq!(
            Rat::from_ratio(3000, 32).to_bytes(),
            vec![0x21, 0xc0, 0x5d, 0x00]
        );
    }

    #[test]
    fn test_too_short() {
        assert_eq!(Rat::from_bytes(&[]), Err(Error::Truncated));
        assert_eq!(Rat::from_bytes(&[0]), Err(Error::Truncated));
    }

    #[test]
    fn test_round_trip_small() {
        for n in [0i64, 1, -1, 100, -100, 10_000, -65_537] {
            let v = Rat::from_i64(n);
            assert_eq!(Rat::from_bytes(&v.to_bytes()), Ok(v));
        }
        for (p, q) in [(3i64, 5i64), (100, 3), (3000, 32), (-7, 11)] {
            let v = Rat::from_ratio(p, q);
            assert_eq!(Rat::from_bytes(&v.to_bytes()), Ok(v));
        }
    }

    #[test]
    fn test_elided_period_byte_is_restored() {
        // A compact writer may drop a trailing zero period byte; the digit
        // count then equals the period start and the decoder restores it.
        let decoded = Rat::from_bytes(&[0x10, 0x64]).unwrap();
        assert_eq!(decoded, Rat::from_i64(100));
    }

    #[test]
    fn test_wide_header_buckets() {
        // 17 digits forces the two-byte header.
        let mut digits = vec![0x11u8; 16];
        digits.push(0x00);
        let v = Rat {
            mantissa: digits,
            radix: 3,
            period: 16,
        };
        let bytes = v.to_bytes();
        assert_eq!(bytes.len(), 2 + 17);
        assert_eq!(bytes[0], 3);
        assert_eq!(bytes[1], 16);
        assert_eq!(Rat::from_bytes(&bytes), Ok(v));

        // 300 digits forces the u16 header.
        let mut digits = vec![0x22u8; 299];
        digits.push(0x00);
        let v = Rat {
            mantissa: digits,
            radix: 2,
            period: 299,
        };
        let bytes = v.to_bytes();
        assert_eq!(bytes.len(), 4 + 300);
        assert_eq!(&bytes[0..4], &[2, 0, 0x2b, 0x01]);
        assert_eq!(Rat::from_bytes(&bytes), Ok(v));
    }

    #[test]
    fn test_header_overhead_bound() {
        for n in [0i64, 1, -100, 99_999] {
            let v = Rat::from_i64(n);
            assert!(v.to_bytes().len() <= v.digits().len() + 16);
        }
    }
}
