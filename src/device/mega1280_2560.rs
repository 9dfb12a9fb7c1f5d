//! ATmega1280/2560, Arduino Mega pin numbering

use super::{p, PinEntry};
use crate::gpio::Bank::{self, A, B, C, D, E, F, G, H, J, K, L};

/// GPIO banks of the family
pub const BANKS: &[Bank] = &[A, B, C, D, E, F, G, H, J, K, L];

/// Serial clock output, PB1
pub const SCK: (Bank, u8) = (B, 1);

/// Master out slave in, PB2
pub const MOSI: (Bank, u8) = (B, 2);

/// Board pins 0..=69
#[rustfmt::skip]
pub const PINS: &[PinEntry] = &[
    // D0..D9
    p(E, 0), p(E, 1), p(E, 4), p(E, 5), p(G, 5),
    p(E, 3), p(H, 3), p(H, 4), p(H, 5), p(H, 6),
    // D10..D21
    p(B, 4), p(B, 5), p(B, 6), p(B, 7), p(J, 1), p(J, 0),
    p(H, 1), p(H, 0), p(D, 3), p(D, 2), p(D, 1), p(D, 0),
    // D22..D29
    p(A, 0), p(A, 1), p(A, 2), p(A, 3), p(A, 4), p(A, 5), p(A, 6), p(A, 7),
    // D30..D37
    p(C, 7), p(C, 6), p(C, 5), p(C, 4), p(C, 3), p(C, 2), p(C, 1), p(C, 0),
    // D38..D41
    p(D, 7), p(G, 2), p(G, 1), p(G, 0),
    // D42..D49
    p(L, 7), p(L, 6), p(L, 5), p(L, 4), p(L, 3), p(L, 2), p(L, 1), p(L, 0),
    // D50..D53
    p(B, 3), p(B, 2), p(B, 1), p(B, 0),
    // A0..A7
    p(F, 0), p(F, 1), p(F, 2), p(F, 3), p(F, 4), p(F, 5), p(F, 6), p(F, 7),
    // A8..A15
    p(K, 0), p(K, 1), p(K, 2), p(K, 3), p(K, 4), p(K, 5), p(K, 6), p(K, 7),
];
