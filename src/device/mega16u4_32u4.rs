//! ATmega16U4/32U4, Arduino Leonardo pin numbering

use super::{p, PinEntry};
use crate::gpio::Bank::{self, B, C, D, E, F};

/// GPIO banks of the family
pub const BANKS: &[Bank] = &[B, C, D, E, F];

/// Serial clock output, PB1
pub const SCK: (Bank, u8) = (B, 1);

/// Master out slave in, PB2
pub const MOSI: (Bank, u8) = (B, 2);

/// Board pins 0..=30
#[rustfmt::skip]
pub const PINS: &[PinEntry] = &[
    // D0..D7
    p(D, 2), p(D, 3), p(D, 1), p(D, 0), p(D, 4), p(C, 6), p(D, 7), p(E, 6),
    // D8..D13
    p(B, 4), p(B, 5), p(B, 6), p(B, 7), p(D, 6), p(C, 7),
    // D14..D17: MISO, SCK, MOSI, SS
    p(B, 3), p(B, 1), p(B, 2), p(B, 0),
    // A0..A5
    p(F, 7), p(F, 6), p(F, 5), p(F, 4), p(F, 1), p(F, 0),
    // A6..A11
    p(D, 4), p(D, 7), p(B, 4), p(B, 5), p(B, 6), p(D, 6),
    // TX LED
    p(D, 5),
];
