use embedded_hal::spi::{
    Error as HalError, ErrorKind, ErrorType, Operation, SpiDevice,
};

use super::{Error, SpiBus};
use crate::delay;
use crate::diag::ErrorSink;
use crate::register::RegisterAccess;
use crate::time::{MicroSeconds, Monotonic};

impl HalError for Error {
    fn kind(&self) -> ErrorKind {
        match self {
            Error::BadChipSelect => ErrorKind::ChipSelectFault,
            Error::Timeout => ErrorKind::Other,
            Error::Collision => ErrorKind::Other,
        }
    }
}

impl<REG, T, S> ErrorType for SpiBus<'_, REG, T, S> {
    type Error = Error;
}

impl<REG, T, S> SpiBus<'_, REG, T, S>
where
    REG: RegisterAccess,
    T: Monotonic,
    S: ErrorSink,
{
    fn perform_operation(
        &mut self,
        operation: &mut Operation<'_, u8>,
    ) -> Result<(), Error> {
        match operation {
            Operation::Read(words) => {
                for word in words.iter_mut() {
                    *word = self.exchange_byte(0)?;
                }
            }
            Operation::Write(words) => {
                for &word in words.iter() {
                    self.exchange_byte(word)?;
                }
            }
            Operation::Transfer(read, write) => {
                // Clock out zeroes past the end of `write`, drop what comes
                // in past the end of `read`
                let len = core::cmp::max(read.len(), write.len());
                for i in 0..len {
                    let out = write.get(i).copied().unwrap_or(0);
                    let word = self.exchange_byte(out)?;
                    if let Some(slot) = read.get_mut(i) {
                        *slot = word;
                    }
                }
            }
            Operation::TransferInPlace(words) => {
                for word in words.iter_mut() {
                    *word = self.exchange_byte(*word)?;
                }
            }
            Operation::DelayNs(ns) => {
                let micros = delay::calc_micros(*ns);
                delay::spin_for(&self.timer, MicroSeconds::from_ticks(micros));
            }
        }
        Ok(())
    }
}

impl<REG, T, S> SpiDevice<u8> for SpiBus<'_, REG, T, S>
where
    REG: RegisterAccess,
    T: Monotonic,
    S: ErrorSink,
{
    fn transaction(
        &mut self,
        operations: &mut [Operation<'_, u8>],
    ) -> Result<(), Self::Error> {
        self.framed(|spi| {
            for operation in operations.iter_mut() {
                spi.perform_operation(operation)?;
            }
            Ok(())
        })
    }
}
