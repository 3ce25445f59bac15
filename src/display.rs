//! Human-readable digit dump.
//!
//! Two lowercase hex nibbles per digit, low digit first, with three sigils:
//! `.` marks the radix point, `'` marks the period start, and `!` marks the
//! position where both coincide. `1` prints as `.01'00`, `-100` as
//! `.9c'ff`, `0` as `!00`.

use crate::Rat;
use std::fmt::{self, Write};

impl fmt::Display for Rat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, digit) in self.mantissa.iter().enumerate() {
            if i == self.radix && i == self.period {
                f.write_char('!')?;
            } else if i == self.radix {
                f.write_char('.')?;
            } else if i == self.period {
                f.write_char('\'')?;
            }
            write!(f, "{digit:02x}")?;
        }
        Ok(())
    }
}
