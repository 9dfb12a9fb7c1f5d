//! Process wide bus configuration
//!
//! The ATmega has a single SPI peripheral, shared by every chip-select
//! line. Its electrical configuration lives in a [`SharedBus`], which
//! programs the hardware the first time any driver is started and never
//! again afterwards.

use core::cell::Cell;

use critical_section::Mutex;

use super::spi_def::{CPHA, CPOL, DORD, MSTR, SPE, SPI2X, SPR_MASK};
use super::{Config, Endianness, Phase, Polarity};
use crate::device::{self, SPCR, SPSR};
use crate::register::RegisterAccess;

/// Prescaler setting of the SPI clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockDivider {
    /// Value of the SPR1:SPR0 field of SPCR
    pub spr: u8,
    /// Value of the SPI2X bit of SPSR
    pub double_speed: bool,
}

/// Exponent of the power of two nearest above `divider`: the position of
/// the highest set bit, plus one if any lower bit is set.
fn divider_power(divider: u32) -> Option<u32> {
    if divider == 0 {
        return None;
    }
    let top = u32::BITS - 1 - divider.leading_zeros();
    if divider & !(1 << top) != 0 {
        Some(top + 1)
    } else {
        Some(top)
    }
}

/// Compute the prescaler setting for a bus clock of `spi_freq` fed from a
/// core clock of `core_clock`.
pub fn calc_divider(core_clock: u32, spi_freq: u32) -> ClockDivider {
    let divider = core_clock.checked_div(spi_freq).map_or(u32::MAX, |d| d / 2);

    match divider_power(divider) {
        Some(power) if power >= 7 => ClockDivider {
            spr: 0b11,
            double_speed: false,
        },
        Some(power) => {
            let double_speed = power & 1 == 1;
            // A divider of 1 underflows the field, which wraps to 0b11
            let spr = if double_speed {
                (power - 1) / 2
            } else {
                (power / 2).wrapping_sub(1)
            };
            ClockDivider {
                spr: spr as u8 & SPR_MASK,
                double_speed,
            }
        }
        // No bit set counts as power -1: odd, with the field wrapped to 0b11
        None => ClockDivider {
            spr: 0b11,
            double_speed: true,
        },
    }
}

/// SPCR value enabling the peripheral as a master with `config`
fn control_bits(config: &Config, divider: ClockDivider) -> u8 {
    let mut spcr = SPE | MSTR | (divider.spr & SPR_MASK);
    if config.endianness == Endianness::LsbFirst {
        spcr |= DORD;
    }
    if config.mode.polarity == Polarity::IdleHigh {
        spcr |= CPOL;
    }
    if config.mode.phase == Phase::CaptureOnSecondTransition {
        spcr |= CPHA;
    }
    spcr
}

/// The SPI peripheral, configured once for every driver sharing it
pub struct SharedBus {
    config: Config,
    initialized: Mutex<Cell<bool>>,
}

impl SharedBus {
    /// A bus that will be programmed with `config`
    pub const fn new(config: Config) -> Self {
        SharedBus {
            config,
            initialized: Mutex::new(Cell::new(false)),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns `true` once the hardware has been programmed
    pub fn is_initialized(&self) -> bool {
        critical_section::with(|cs| self.initialized.borrow(cs).get())
    }

    /// Prescaler setting derived from the configuration
    pub fn divider(&self) -> ClockDivider {
        calc_divider(self.config.core_clock.raw(), self.config.frequency.raw())
    }

    /// Program the SPI peripheral unless it has already been done.
    ///
    /// Drives the SCK and MOSI pins of the device as outputs, then writes
    /// SPCR and the SPI2X bit of SPSR. Returns `true` if this call did the
    /// programming.
    pub fn initialize_once<R: RegisterAccess>(&self, regs: &R) -> bool {
        critical_section::with(|cs| {
            let initialized = self.initialized.borrow(cs);
            if initialized.get() {
                return false;
            }

            for (bank, pin) in [device::SCK, device::MOSI] {
                regs.set_bits(bank.ddr(), 1 << pin);
            }

            let divider = self.divider();
            let spcr = control_bits(&self.config, divider);
            regs.write(SPCR, spcr);
            if divider.double_speed {
                regs.set_bits(SPSR, SPI2X);
            } else {
                regs.clear_bits(SPSR, SPI2X);
            }

            diag_debug!(
                "spi: configured, spcr={} double speed={}",
                spcr,
                divider.double_speed
            );

            initialized.set(true);
            true
        })
    }
}
