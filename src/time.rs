//! Time units and the elapsed-time source

pub use fugit::{HertzU32 as Hertz, MicrosDurationU32 as MicroSeconds};

/// Free running microsecond counter.
///
/// The counter is allowed to wrap around. It is typically backed by a
/// hardware timer overflow interrupt, like the `micros()` counter of the
/// Arduino core.
pub trait Monotonic {
    /// Microseconds since an arbitrary, fixed origin
    fn now_micros(&self) -> u32;
}

impl<T: Monotonic + ?Sized> Monotonic for &T {
    #[inline(always)]
    fn now_micros(&self) -> u32 {
        (**self).now_micros()
    }
}

/// A measurement of a monotonically nondecreasing clock
#[derive(Clone, Copy)]
pub struct Instant {
    now: u32,
}

impl Instant {
    /// Capture the current time of `timer`
    pub fn now<T: Monotonic>(timer: &T) -> Self {
        Instant {
            now: timer.now_micros(),
        }
    }

    /// Time elapsed on `timer` since the `Instant` was created
    pub fn elapsed<T: Monotonic>(&self, timer: &T) -> MicroSeconds {
        MicroSeconds::from_ticks(timer.now_micros().wrapping_sub(self.now))
    }
}
