//! # rat256 - exact rational arithmetic over periodic base-256 expansions
//!
//! Every value is a finite string of base-256 digits together with a suffix
//! that repeats forever toward the high-significance end: the radix-256
//! analogue of a repeating decimal. Every rational number has such an
//! expansion, so the representation is exact and arithmetic is closed; no
//! rounding ever happens.
//!
//! There is no sign bit. A value is negative exactly when its repeating
//! suffix is `0xff` and non-negative when it is `0x00` -- two's complement
//! carried out to infinitely many digits, so negation is "invert every
//! digit, add one" just as for machine integers.
//!
//! Each arithmetic operator is a digit-stream generator that terminates by
//! cycle detection: it records its iteration state (stream cursors plus the
//! pending carry) and stops as soon as a state repeats, which is what pins
//! down the period of the result. Multiplication and division carry whole
//! values, not bytes, in their loop states.
//!
//! ## Layout
//!
//! - [`Rat`] -- the digit-buffer value type and its constructors
//! - [`ops`] -- the adder, shifts, multiplier, and long divider
//! - canonicalization -- [`Rat::normalize`], reduction to the shortest form
//! - codec -- [`Rat::to_bytes`] / [`Rat::from_bytes`], the compact format
//! - interop -- [`Rat::to_big_rational`] into the `num` stack
//!
//! ## Example
//!
//! ```
//! use rat256::Rat;
//!
//! let one = Rat::from_i64(1);
//! assert_eq!(one.to_string(), ".01'00");
//!
//! let third = Rat::from_ratio(1, 3);
//! assert_eq!(third.mul(&Rat::from_i64(3)), one);
//!
//! // 1/3 is the 256-adic ...aaaaab, and its whole encoding is three bytes.
//! assert_eq!(third.to_bytes(), vec![0x10, 0xab, 0xaa]);
//! assert_eq!(Rat::from_bytes(&third.to_bytes()).unwrap(), third);
//! ```
//!
//! Values are immutable after construction and may be shared freely across
//! threads for read-only use. Division by zero panics; decoding is the only
//! fallible operation.

pub mod error;
pub mod ops;

mod canonical;
mod codec;
mod convert;
mod display;
mod rat;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::{Error, Result};
pub use rat::Rat;
