//! Byte-wide register access
//!
//! Every register the driver touches is an 8-bit location in the AVR data
//! space. The driver never dereferences addresses itself: it goes through
//! [`RegisterAccess`], which is implemented by [`Mmio`] for the real
//! hardware and by simulated peripherals in tests.

/// Data-space address of an 8-bit register
pub type Address = u16;

/// Volatile access to 8-bit registers
pub trait RegisterAccess {
    /// Read the register at `address`
    fn read(&self, address: Address) -> u8;

    /// Write `value` to the register at `address`
    fn write(&self, address: Address, value: u8);

    /// Read-modify-write of the register at `address`
    #[inline(always)]
    fn modify<F>(&self, address: Address, f: F)
    where
        F: FnOnce(u8) -> u8,
    {
        let value = self.read(address);
        self.write(address, f(value));
    }

    /// Set the bits of `mask` in the register at `address`
    #[inline(always)]
    fn set_bits(&self, address: Address, mask: u8) {
        self.modify(address, |r| r | mask);
    }

    /// Clear the bits of `mask` in the register at `address`
    #[inline(always)]
    fn clear_bits(&self, address: Address, mask: u8) {
        self.modify(address, |r| r & !mask);
    }
}

impl<R: RegisterAccess + ?Sized> RegisterAccess for &R {
    #[inline(always)]
    fn read(&self, address: Address) -> u8 {
        (**self).read(address)
    }

    #[inline(always)]
    fn write(&self, address: Address, value: u8) {
        (**self).write(address, value)
    }
}

/// Memory mapped registers of the running device
#[derive(Debug, Clone, Copy)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Access the memory mapped registers of the device.
    ///
    /// # Safety
    ///
    /// The program must be running on the device selected through the
    /// crate features, so that every address handed to [`RegisterAccess`]
    /// is a valid I/O register.
    pub const unsafe fn new() -> Self {
        Mmio { _private: () }
    }
}

impl RegisterAccess for Mmio {
    #[inline(always)]
    fn read(&self, address: Address) -> u8 {
        // Safety: `Mmio::new` requires the addresses to be device registers.
        unsafe { core::ptr::read_volatile(address as usize as *const u8) }
    }

    #[inline(always)]
    fn write(&self, address: Address, value: u8) {
        // Safety: `Mmio::new` requires the addresses to be device registers.
        unsafe { core::ptr::write_volatile(address as usize as *mut u8, value) }
    }
}
