//! Register access to SPI peripherals on AVR ATmega microcontrollers.
//!
//! The crate drives the ATmega hardware SPI as a master and frames
//! register reads and writes with a software chip-select line. Each
//! [`spi::SpiBus`] owns one chip-select pin, while the electrical
//! configuration of the bus is shared through a [`spi::SharedBus`] that is
//! programmed only once.
//!
//! ```ignore
//! use atmega_spi_hal::prelude::*;
//! use atmega_spi_hal::spi::{self, SharedBus, SpiBus};
//! use atmega_spi_hal::register::Mmio;
//!
//! static BUS: SharedBus = SharedBus::new(
//!     spi::Config::new(spi::MODE_0).frequency(Hertz::MHz(4)),
//! );
//!
//! let regs = unsafe { Mmio::new() };
//! let mut sensor = SpiBus::from_pin(regs, &timer, &BUS, 10);
//! sensor.begin()?;
//! sensor.write(0x20, 0x0F)?;
//! let id = sensor.try_read(0x0F)?;
//! ```
#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "device-selected"))]
compile_error!(
    "This crate requires one of the following device features enabled:
        atmega48a, atmega48pa
        atmega88a, atmega88pa
        atmega168a, atmega168pa
        atmega328, atmega328p
        atmega1280, atmega2560
        atmega16u4, atmega32u4
"
);

#[cfg(any(
    all(feature = "mega48_328", feature = "mega1280_2560"),
    all(feature = "mega48_328", feature = "mega16u4_32u4"),
    all(feature = "mega1280_2560", feature = "mega16u4_32u4"),
))]
compile_error!("Cannot select devices from more than one family");

#[cfg(feature = "device-selected")]
#[macro_use]
mod macros;

#[cfg(feature = "device-selected")]
pub mod device;

#[cfg(feature = "device-selected")]
pub mod prelude;

#[cfg(feature = "device-selected")]
pub mod register;

#[cfg(feature = "device-selected")]
pub mod time;

#[cfg(feature = "device-selected")]
pub mod delay;

#[cfg(feature = "device-selected")]
pub mod diag;

#[cfg(feature = "device-selected")]
pub mod gpio;

#[cfg(feature = "device-selected")]
pub mod spi;
