use crate::time::{Hertz, MicroSeconds};

use super::Mode;

/// Core clock assumed when none is configured (16 MHz crystal)
pub const DEFAULT_CORE_CLOCK: Hertz = Hertz::MHz(16);
/// Bus clock requested when none is configured
pub const DEFAULT_FREQUENCY: Hertz = Hertz::MHz(4);
/// Bound on a single byte exchange
pub const DEFAULT_TIMEOUT: MicroSeconds = MicroSeconds::micros(1_000);
/// Pause before clocking in each byte of a register read
pub const DEFAULT_READ_SETTLE: MicroSeconds = MicroSeconds::micros(100);

/// The order in which the bits of a byte are shifted out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Endianness {
    /// Least significant bit first
    LsbFirst,
    /// Most significant bit first. MSB first is the default SPI behavior.
    MsbFirst,
}

/// A structure for specifying SPI configuration.
///
/// This structure uses builder semantics to generate the configuration.
/// All builders are `const`, so that a configuration can be handed to a
/// `static` [`SharedBus`](super::SharedBus).
///
/// `Example`
/// ```ignore
/// use atmega_spi_hal::spi::{Config, Endianness, MODE_3};
/// use atmega_spi_hal::time::Hertz;
///
/// const CONFIG: Config = Config::new(MODE_3)
///     .core_clock(Hertz::MHz(8))
///     .frequency(Hertz::kHz(500))
///     .endianness(Endianness::LsbFirst);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Config {
    pub(super) mode: Mode,
    pub(super) endianness: Endianness,
    pub(super) core_clock: Hertz,
    pub(super) frequency: Hertz,
    pub(super) timeout: MicroSeconds,
    pub(super) read_settle: MicroSeconds,
}

impl Config {
    /// Create a default configuration for the SPI interface.
    ///
    /// Arguments:
    /// * `mode` - The SPI mode to configure.
    pub const fn new(mode: Mode) -> Self {
        Config {
            mode,
            endianness: Endianness::MsbFirst,
            core_clock: DEFAULT_CORE_CLOCK,
            frequency: DEFAULT_FREQUENCY,
            timeout: DEFAULT_TIMEOUT,
            read_settle: DEFAULT_READ_SETTLE,
        }
    }

    /// Frequency of the CPU clock feeding the SPI prescaler
    #[must_use]
    pub const fn core_clock(mut self, core_clock: Hertz) -> Self {
        self.core_clock = core_clock;
        self
    }

    /// Requested bus clock.
    ///
    /// Note:
    /// * The hardware only divides the core clock by powers of two, so the
    ///   requested frequency is rounded to one of those.
    #[must_use]
    pub const fn frequency(mut self, frequency: Hertz) -> Self {
        self.frequency = frequency;
        self
    }

    /// Select the bit order used for data transfers
    #[must_use]
    pub const fn endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }

    /// Time a single byte exchange may take before it is abandoned
    #[must_use]
    pub const fn timeout(mut self, timeout: MicroSeconds) -> Self {
        self.timeout = timeout;
        self
    }

    /// Time left to the peripheral before each byte of a register read
    #[must_use]
    pub const fn read_settle(mut self, read_settle: MicroSeconds) -> Self {
        self.read_settle = read_settle;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(super::MODE_0)
    }
}

impl From<Mode> for Config {
    fn from(mode: Mode) -> Self {
        Self::new(mode)
    }
}
