//! Diagnostic reporting
//!
//! Failures are returned to the caller as [`Error`](crate::spi::Error)
//! values. A subset of them (a bad chip select at `begin` and byte exchange
//! timeouts) is also announced as a text message, `spi:err:<tag>`, to an
//! [`ErrorSink`] provided by the application, for example a serial console.

/// Receiver of diagnostic messages
pub trait ErrorSink {
    /// Handle one diagnostic message
    fn report(&mut self, message: &str);
}

impl<S: ErrorSink + ?Sized> ErrorSink for &mut S {
    fn report(&mut self, message: &str) {
        (**self).report(message)
    }
}

/// Sink dropping every message
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSink;

impl ErrorSink for NoSink {
    #[inline(always)]
    fn report(&mut self, _message: &str) {}
}

/// Sink forwarding messages to a closure
pub struct FnSink<F>(pub F);

impl<F: FnMut(&str)> ErrorSink for FnSink<F> {
    fn report(&mut self, message: &str) {
        (self.0)(message)
    }
}
