//! Delay providers
//!
//! # Examples
//!
//! ## Delay
//!
//! ```ignore
//! let mut delay = Delay::new(timer);
//!
//! delay.delay_us(100);
//!
//! // Release the timer from the delay
//! let timer = delay.free();
//! ```

use embedded_hal::delay::DelayNs;

use crate::time::{Instant, MicroSeconds, Monotonic};

/// Busy wait on `timer` until `duration` has elapsed
pub(crate) fn spin_for<T: Monotonic>(timer: &T, duration: MicroSeconds) {
    let start = Instant::now(timer);
    while start.elapsed(timer) < duration {}
}

/// Whole microseconds covering `ns` nanoseconds
pub(crate) fn calc_micros(ns: u32) -> u32 {
    ns.div_ceil(1_000)
}

/// A [`Monotonic`] counter as a delay provider
pub struct Delay<T> {
    timer: T,
}

impl<T: Monotonic> Delay<T> {
    /// Busy wait delays on top of `timer`
    pub fn new(timer: T) -> Self {
        Delay { timer }
    }

    /// Releases the timer
    pub fn free(self) -> T {
        self.timer
    }
}

impl<T: Monotonic> DelayNs for Delay<T> {
    fn delay_ns(&mut self, ns: u32) {
        spin_for(&self.timer, MicroSeconds::from_ticks(calc_micros(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        spin_for(&self.timer, MicroSeconds::from_ticks(us));
    }
}
