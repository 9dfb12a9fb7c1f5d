/// Emit a warning through the enabled logging backends. Expands to nothing
/// when neither `log` nor `defmt` is enabled.
macro_rules! diag_warn {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        log::warn!($($arg)+);

        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)+);
    }};
}

/// Same as [`diag_warn`] at debug level
macro_rules! diag_debug {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        log::debug!($($arg)+);

        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)+);
    }};
}
