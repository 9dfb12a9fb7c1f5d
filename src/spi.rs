//! Serial Peripheral Interface (SPI)
//!
//! This module drives the ATmega SPI peripheral as a master and provides
//! register level access to the devices attached to it. Each device is
//! reached through its own software chip-select line, wrapped in an
//! [`SpiBus`]. Every method is blocking and frames exactly one transaction:
//! the chip select is asserted, bytes are exchanged one at a time, and the
//! chip select is released again, also when the transaction fails.
//!
//! # Usage
//!
//! ## Initialization
//! The electrical configuration of the bus is shared by all devices and is
//! described once, in a [`SharedBus`]:
//!
//! ```ignore
//! use atmega_spi_hal::spi::{self, SharedBus};
//! use atmega_spi_hal::time::Hertz;
//!
//! static BUS: SharedBus = SharedBus::new(
//!     spi::Config::new(spi::MODE_0).frequency(Hertz::MHz(4)),
//! );
//! ```
//!
//! A device is then created from the board pin used as its chip select, or
//! from an explicit bank and bit, and started with [`SpiBus::begin`]. The
//! first `begin` of any device programs the peripheral.
//!
//! ```ignore
//! use atmega_spi_hal::gpio::Bank;
//! use atmega_spi_hal::register::Mmio;
//! use atmega_spi_hal::spi::SpiBus;
//!
//! let regs = unsafe { Mmio::new() };
//! let mut imu = SpiBus::from_pin(regs, &timer, &BUS, 10);
//! let mut radio = SpiBus::new(regs, &timer, &BUS, Bank::D, 7, true);
//!
//! imu.begin()?;
//! radio.begin()?;
//! ```
//!
//! ## Register access
//! The first byte of a transaction is a command byte holding the register
//! address. Its top bit tells reads from writes: it is cleared for writes
//! and set for reads, or the opposite for devices created with `invert_rw`.
//!
//! ```ignore
//! imu.write(0x20, 0x0F)?;
//! imu.write_register(0x23, &[0x01, 0x80])?;
//!
//! let mut sample = [0u8; 6];
//! imu.read_register(0x28, &mut sample)?;
//! ```
//!
//! Each byte of a read is preceded by a short pause (see
//! [`Config::read_settle`]) that gives slow devices time to load their
//! shift register.
//!
//! ## Errors
//! A byte exchange fails when the peripheral reports a write collision or
//! does not complete within [`Config::timeout`]. Failures are returned as
//! [`Error`] values. Bad chip selects and timeouts are also reported as
//! text to the [`ErrorSink`] of the device, if one was attached with
//! [`SpiBus::with_sink`].
//!
//! ## embedded-hal
//! [`SpiBus`] implements the [`SpiDevice`][spi_device] trait of
//! [embedded-hal][embedded_hal]. A transaction is framed by a single chip
//! select assertion.
//!
//! [embedded_hal]: https://docs.rs/embedded-hal/1.0.0/embedded_hal/spi/index.html
//! [spi_device]: https://docs.rs/embedded-hal/1.0.0/embedded_hal/spi/trait.SpiDevice.html

pub use embedded_hal::spi::{
    Mode, Phase, Polarity, MODE_0, MODE_1, MODE_2, MODE_3,
};

use crate::delay;
use crate::device::{SPDR, SPSR};
use crate::diag::{ErrorSink, NoSink};
use crate::gpio::{Bank, ChipSelect};
use crate::register::{Address, RegisterAccess};
use crate::time::{Instant, MicroSeconds, Monotonic};

mod bus;
mod config;
mod hal;
pub mod spi_def;

pub use bus::{calc_divider, ClockDivider, SharedBus};
pub use config::{
    Config, Endianness, DEFAULT_CORE_CLOCK, DEFAULT_FREQUENCY,
    DEFAULT_READ_SETTLE, DEFAULT_TIMEOUT,
};

use spi_def::{SPIF, WCOL};

/// Value returned by [`SpiBus::read`] when the read failed
pub const READ_FAILED: u8 = 0xFF;

/// Pause between the last byte of a read and the release of the chip select
const READ_HOLD: MicroSeconds = MicroSeconds::micros(1);

/// Top bit of a command byte
const RW_BIT: u8 = 1 << 7;

/// SPI error
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// The chip select did not resolve to a usable pin
    BadChipSelect,
    /// A byte exchange did not complete in time
    Timeout,
    /// The peripheral reported a write collision
    Collision,
}

impl Error {
    /// Short tag of the error, as used in diagnostic messages
    pub fn tag(&self) -> &'static str {
        match self {
            Error::BadChipSelect => "badCs",
            Error::Timeout => "timeout",
            Error::Collision => "collision",
        }
    }

    /// Message announced to the [`ErrorSink`], for the errors that are
    /// announced at all
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Error::BadChipSelect => Some("spi:err:badCs"),
            Error::Timeout => Some("spi:err:timeout"),
            Error::Collision => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Command byte writing register `reg`
pub const fn write_command(reg: u8, invert_rw: bool) -> u8 {
    if invert_rw {
        reg | RW_BIT
    } else {
        reg & !RW_BIT
    }
}

/// Command byte reading register `reg`
pub const fn read_command(reg: u8, invert_rw: bool) -> u8 {
    write_command(reg, !invert_rw)
}

/// A device on the SPI bus, addressed through its own chip-select line
pub struct SpiBus<'a, REG, T, S = NoSink> {
    regs: REG,
    timer: T,
    sink: S,
    bus: &'a SharedBus,
    cs: ChipSelect,
}

impl<'a, REG, T> SpiBus<'a, REG, T, NoSink>
where
    REG: RegisterAccess,
    T: Monotonic,
{
    /// Device selected by board pin `pin`.
    ///
    /// If the pin is unknown to the device the handle is still created, but
    /// [`begin`](Self::begin) reports a bad chip select and every
    /// transaction fails.
    pub fn from_pin(regs: REG, timer: T, bus: &'a SharedBus, pin: u8) -> Self {
        Self::with_chip_select(regs, timer, bus, ChipSelect::from_pin(pin))
    }

    /// Device selected by bit `pin` of `bank`
    pub fn new(
        regs: REG,
        timer: T,
        bus: &'a SharedBus,
        bank: Bank,
        pin: u8,
        invert_rw: bool,
    ) -> Self {
        let cs = ChipSelect::new(bank, pin, invert_rw);
        Self::with_chip_select(regs, timer, bus, cs)
    }

    /// Device selected by bit `pin` of the `PORTx` register at `port`
    pub fn from_port_address(
        regs: REG,
        timer: T,
        bus: &'a SharedBus,
        port: Address,
        pin: u8,
        invert_rw: bool,
    ) -> Self {
        let cs = ChipSelect::from_port_address(port, pin, invert_rw);
        Self::with_chip_select(regs, timer, bus, cs)
    }

    /// Device selected by an already resolved chip select
    pub fn with_chip_select(
        regs: REG,
        timer: T,
        bus: &'a SharedBus,
        cs: ChipSelect,
    ) -> Self {
        SpiBus {
            regs,
            timer,
            sink: NoSink,
            bus,
            cs,
        }
    }
}

impl<'a, REG, T, S> SpiBus<'a, REG, T, S>
where
    REG: RegisterAccess,
    T: Monotonic,
    S: ErrorSink,
{
    /// Announce diagnostics to `sink` instead
    pub fn with_sink<S2: ErrorSink>(self, sink: S2) -> SpiBus<'a, REG, T, S2> {
        SpiBus {
            regs: self.regs,
            timer: self.timer,
            sink,
            bus: self.bus,
            cs: self.cs,
        }
    }

    /// Start the device.
    ///
    /// Drives the chip select as a deasserted output and programs the
    /// shared bus if no other device did it yet. With an invalid chip
    /// select nothing is touched and [`Error::BadChipSelect`] is reported.
    pub fn begin(&mut self) -> Result<(), Error> {
        if !self.cs.configure(&self.regs) {
            self.report(Error::BadChipSelect);
            return Err(Error::BadChipSelect);
        }
        self.bus.initialize_once(&self.regs);
        Ok(())
    }

    /// Returns `true` if the chip select is usable
    pub fn is_connected(&self) -> bool {
        self.cs.is_valid()
    }

    pub fn chip_select(&self) -> &ChipSelect {
        &self.cs
    }

    pub fn shared_bus(&self) -> &'a SharedBus {
        self.bus
    }

    /// Send a single command byte
    pub fn command(&mut self, cmd: u8) -> Result<(), Error> {
        self.framed(|spi| spi.exchange_byte(cmd).map(|_| ()))
    }

    /// Write `value` to register `reg`
    pub fn write(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        self.write_register(reg, &[value])
    }

    /// Write `words` to the device, starting at register `reg`.
    ///
    /// The transfer stops at the first failed byte, leaving the remaining
    /// bytes unsent.
    pub fn write_register(&mut self, reg: u8, words: &[u8]) -> Result<(), Error> {
        let cmd = write_command(reg, self.cs.invert_rw());
        self.framed(|spi| {
            spi.exchange_byte(cmd)?;
            for &word in words {
                spi.exchange_byte(word)?;
            }
            Ok(())
        })
    }

    /// Read register `reg`, or [`READ_FAILED`] if the read failed.
    ///
    /// A register holding `0xFF` cannot be told from a failure through this
    /// method, use [`try_read`](Self::try_read) where that matters.
    pub fn read(&mut self, reg: u8) -> u8 {
        self.try_read(reg).unwrap_or(READ_FAILED)
    }

    /// Read register `reg`
    pub fn try_read(&mut self, reg: u8) -> Result<u8, Error> {
        let mut word = [0u8];
        self.read_register(reg, &mut word)?;
        Ok(word[0])
    }

    /// Fill `words` from the device, starting at register `reg`
    pub fn read_register(
        &mut self,
        reg: u8,
        words: &mut [u8],
    ) -> Result<(), Error> {
        let cmd = read_command(reg, self.cs.invert_rw());
        self.command_read(cmd, words)
    }

    /// Send command byte `cmd`, then clock in `words`.
    ///
    /// Each byte is preceded by the read settle delay of the bus, and the
    /// chip select is held for one more microsecond after the last one.
    pub fn command_read(
        &mut self,
        cmd: u8,
        words: &mut [u8],
    ) -> Result<(), Error> {
        let settle = self.bus.config().read_settle;
        self.framed(|spi| {
            spi.exchange_byte(cmd)?;
            for word in words.iter_mut() {
                delay::spin_for(&spi.timer, settle);
                *word = spi.exchange_byte(0)?;
            }
            delay::spin_for(&spi.timer, READ_HOLD);
            Ok(())
        })
    }

    /// Exchange one byte with the device.
    ///
    /// Writes `word` to the data register and waits for the transfer to
    /// complete. This does not touch the chip select, it is meant to be
    /// called inside a frame.
    pub fn exchange_byte(&mut self, word: u8) -> Result<u8, Error> {
        self.regs.write(SPDR, word);
        let status = self.wait_complete();
        // Reading the data register also clears the status flags
        let received = self.regs.read(SPDR);
        status.map(|()| received)
    }

    /// Releases the register access, the timer and the sink
    pub fn free(self) -> (REG, T, S) {
        (self.regs, self.timer, self.sink)
    }

    /// Poll the status register until the transfer completes or collides,
    /// for at most the configured timeout
    fn wait_complete(&mut self) -> Result<(), Error> {
        let timeout = self.bus.config().timeout;
        let start = Instant::now(&self.timer);
        loop {
            let spsr = self.regs.read(SPSR);
            if spsr & WCOL != 0 {
                diag_debug!("spi: write collision");
                return Err(Error::Collision);
            }
            if spsr & SPIF != 0 {
                return Ok(());
            }
            if start.elapsed(&self.timer) >= timeout {
                break;
            }
        }
        self.report(Error::Timeout);
        Err(Error::Timeout)
    }

    /// Run `f` with the chip select asserted. The chip select is released
    /// before the result of `f` is returned.
    fn framed<R, F>(&mut self, f: F) -> Result<R, Error>
    where
        F: FnOnce(&mut Self) -> Result<R, Error>,
    {
        if !self.cs.is_valid() {
            return Err(Error::BadChipSelect);
        }
        self.cs.select(&self.regs);
        let result = f(self);
        self.cs.unselect(&self.regs);
        result
    }

    fn report(&mut self, error: Error) {
        if let Some(message) = error.message() {
            diag_warn!("{}", message);
            self.sink.report(message);
        }
    }
}
