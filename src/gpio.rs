//! General Purpose Input / Output used as chip select
//!
//! A chip-select line is a single bit of one GPIO bank. It can be obtained
//! in three ways:
//!
//! - from a board pin number, looked up in the pin table of the selected
//!   device ([`ChipSelect::from_pin`]);
//! - from a [`Bank`] and a bit index ([`ChipSelect::new`]);
//! - from the data-space address of a `PORTx` register and a bit index
//!   ([`ChipSelect::from_port_address`]). The direction register is taken
//!   right below the output register, as laid out by the hardware.
//!
//! Resolution never fails loudly. A line that cannot be resolved, or that
//! points outside the banks of the device, yields a [`ChipSelect`] that
//! reports itself as invalid and is never driven.
//!
//! The line is active low: [`ChipSelect::select`] clears the bit and
//! [`ChipSelect::unselect`] sets it.

mod bank_def;

pub use bank_def::*;

use crate::device;
use crate::register::{Address, RegisterAccess};

impl Bank {
    /// Returns `true` if the bank exists on the selected device
    pub fn is_available(self) -> bool {
        device::BANKS.contains(&self)
    }

    /// Find the bank of the device whose output and direction registers
    /// are `port` and `ddr`
    pub fn from_registers(port: Address, ddr: Address) -> Option<Bank> {
        device::BANKS
            .iter()
            .copied()
            .find(|bank| bank.port() == port && bank.ddr() == ddr)
    }
}

/// Position of the set bit of a single-bit `mask`, counted from the least
/// significant bit. A zero mask yields 8.
#[inline]
pub const fn bit_index(mask: u8) -> u8 {
    mask.trailing_zeros() as u8
}

/// Resolve a board pin into its bank and bit index
pub fn resolve(pin: u8) -> Option<(Bank, u8)> {
    let (bank, mask) = device::pin_entry(pin)?;
    let index = bit_index(mask);
    (index < 8).then_some((bank, index))
}

/// Check that `(port, ddr)` are the registers of one of the device banks and
/// that `pin` is a bit of those registers
pub fn validate(port: Address, ddr: Address, pin: u8) -> bool {
    pin < 8 && Bank::from_registers(port, ddr).is_some()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Line {
    bank: Bank,
    pin: u8,
}

impl Line {
    #[inline(always)]
    fn mask(&self) -> u8 {
        1 << self.pin
    }
}

/// Software controlled, active low chip-select line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChipSelect {
    line: Option<Line>,
    invert_rw: bool,
}

impl ChipSelect {
    /// Chip select on board pin `pin`.
    ///
    /// The line is valid whenever the pin table of the device knows the
    /// pin.
    pub fn from_pin(pin: u8) -> Self {
        ChipSelect {
            line: resolve(pin).map(|(bank, pin)| Line { bank, pin }),
            invert_rw: false,
        }
    }

    /// Chip select on bit `pin` of `bank`.
    ///
    /// `invert_rw` selects the inverted command convention, where the top
    /// bit of the register address is set for writes instead of reads.
    pub fn new(bank: Bank, pin: u8, invert_rw: bool) -> Self {
        Self::from_port_address(bank.port(), pin, invert_rw)
    }

    /// Chip select on bit `pin` of the `PORTx` register at `port`.
    pub fn from_port_address(port: Address, pin: u8, invert_rw: bool) -> Self {
        let ddr = port.wrapping_sub(1);
        let line = if validate(port, ddr, pin) {
            Bank::from_registers(port, ddr).map(|bank| Line { bank, pin })
        } else {
            None
        };

        ChipSelect { line, invert_rw }
    }

    /// Returns `true` if the line resolved to a usable bank and bit
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.line.is_some()
    }

    /// Returns `true` if the inverted read/write convention is used
    #[inline]
    pub fn invert_rw(&self) -> bool {
        self.invert_rw
    }

    /// The bank of the line, if valid
    pub fn bank(&self) -> Option<Bank> {
        self.line.map(|line| line.bank)
    }

    /// The bit index of the line, if valid
    pub fn pin(&self) -> Option<u8> {
        self.line.map(|line| line.pin)
    }

    /// Make the line an output and leave it deasserted.
    ///
    /// Returns `false` without touching any register if the line is not
    /// valid.
    pub fn configure<R: RegisterAccess>(&self, regs: &R) -> bool {
        match self.line {
            Some(line) => {
                regs.set_bits(line.bank.ddr(), line.mask());
                self.unselect(regs);
                true
            }
            None => false,
        }
    }

    /// Assert the line (drive it low)
    #[inline]
    pub fn select<R: RegisterAccess>(&self, regs: &R) {
        if let Some(line) = self.line {
            regs.clear_bits(line.bank.port(), line.mask());
        }
    }

    /// Deassert the line (drive it high)
    #[inline]
    pub fn unselect<R: RegisterAccess>(&self, regs: &R) {
        if let Some(line) = self.line {
            regs.set_bits(line.bank.port(), line.mask());
        }
    }
}
