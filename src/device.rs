//! Device tables
//!
//! Register addresses and board pin assignments of the selected ATmega
//! family. Exactly one family module is compiled in, picked by the Cargo
//! device features.

use crate::gpio::Bank;
use crate::register::Address;

/// SPI control register
pub const SPCR: Address = 0x4C;
/// SPI status register
pub const SPSR: Address = 0x4D;
/// SPI data register
pub const SPDR: Address = 0x4E;

/// Entry of a board pin table: the bank of the pin and its single-bit mask.
/// `None` marks a number that is not a pin.
pub type PinEntry = Option<(Bank, u8)>;

const fn p(bank: Bank, bit: u8) -> PinEntry {
    Some((bank, 1 << bit))
}

cfg_if::cfg_if! {
    if #[cfg(feature = "mega48_328")] {
        mod mega48_328;
        pub use mega48_328::{BANKS, MOSI, PINS, SCK};
    } else if #[cfg(feature = "mega1280_2560")] {
        mod mega1280_2560;
        pub use mega1280_2560::{BANKS, MOSI, PINS, SCK};
    } else if #[cfg(feature = "mega16u4_32u4")] {
        mod mega16u4_32u4;
        pub use mega16u4_32u4::{BANKS, MOSI, PINS, SCK};
    }
}

/// Look up the bank and bit mask of a board pin
pub fn pin_entry(pin: u8) -> PinEntry {
    PINS.get(pin as usize).copied().flatten()
}
