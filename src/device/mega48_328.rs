//! ATmega48/88/168/328, Arduino Uno pin numbering

use super::{p, PinEntry};
use crate::gpio::Bank::{self, B, C, D};

/// GPIO banks of the family
pub const BANKS: &[Bank] = &[B, C, D];

/// Serial clock output, PB5
pub const SCK: (Bank, u8) = (B, 5);

/// Master out slave in, PB3
pub const MOSI: (Bank, u8) = (B, 3);

/// Board pins 0..=19
#[rustfmt::skip]
pub const PINS: &[PinEntry] = &[
    // D0..D7
    p(D, 0), p(D, 1), p(D, 2), p(D, 3), p(D, 4), p(D, 5), p(D, 6), p(D, 7),
    // D8..D13
    p(B, 0), p(B, 1), p(B, 2), p(B, 3), p(B, 4), p(B, 5),
    // A0..A5
    p(C, 0), p(C, 1), p(C, 2), p(C, 3), p(C, 4), p(C, 5),
];
