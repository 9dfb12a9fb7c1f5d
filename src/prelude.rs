//! Prelude

pub use crate::time::{Hertz, MicroSeconds};

pub use embedded_hal::delay::DelayNs as _atmega_spi_hal_delay_DelayNs;
pub use embedded_hal::spi::SpiDevice as _atmega_spi_hal_spi_SpiDevice;
pub use fugit::{ExtU32 as _, RateExtU32 as _};
