//! Arithmetic over periodic digit streams.
//!
//! Each operator is a coinductive digit generator: it walks the operand
//! streams, emits result digits, and terminates when its full iteration
//! state (cursors plus pending carry) repeats. The matched history index
//! becomes the period start of the result.

mod add;
mod div;
mod mul;
mod neg;
mod shift;

use crate::Rat;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Add for &Rat {
    type Output = Rat;

    fn add(self, rhs: &Rat) -> Rat {
        Rat::add(self, rhs)
    }
}

impl Add for Rat {
    type Output = Rat;

    fn add(self, rhs: Rat) -> Rat {
        Rat::add(&self, &rhs)
    }
}

impl Sub for &Rat {
    type Output = Rat;

    fn sub(self, rhs: &Rat) -> Rat {
        Rat::sub(self, rhs)
    }
}

impl Sub for Rat {
    type Output = Rat;

    fn sub(self, rhs: Rat) -> Rat {
        Rat::sub(&self, &rhs)
    }
}

impl Mul for &Rat {
    type Output = Rat;

    fn mul(self, rhs: &Rat) -> Rat {
        Rat::mul(self, rhs)
    }
}

impl Mul for Rat {
    type Output = Rat;

    fn mul(self, rhs: Rat) -> Rat {
        Rat::mul(&self, &rhs)
    }
}

impl Div for &Rat {
    type Output = Rat;

    fn div(self, rhs: &Rat) -> Rat {
        Rat::div(self, rhs)
    }
}

impl Div for Rat {
    type Output = Rat;

    fn div(self, rhs: Rat) -> Rat {
        Rat::div(&self, &rhs)
    }
}

impl Neg for &Rat {
    type Output = Rat;

    fn neg(self) -> Rat {
        self.negate()
    }
}

impl Neg for Rat {
    type Output = Rat;

    fn neg(self) -> Rat {
        self.negate()
    }
}

impl num_traits::Zero for Rat {
    fn zero() -> Self {
        Rat::zero()
    }

    fn is_zero(&self) -> bool {
        Rat::is_zero(self)
    }
}

impl num_traits::One for Rat {
    fn one() -> Self {
        Rat::from_u64(1)
    }
}
