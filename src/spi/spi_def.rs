//! Bit layout of the SPI control and status registers

/// SPCR: SPI enable
pub const SPE: u8 = 1 << 6;
/// SPCR: data order, LSB first when set
pub const DORD: u8 = 1 << 5;
/// SPCR: master mode
pub const MSTR: u8 = 1 << 4;
/// SPCR: clock polarity, idle high when set
pub const CPOL: u8 = 1 << 3;
/// SPCR: clock phase, sample on the trailing edge when set
pub const CPHA: u8 = 1 << 2;
/// SPCR: clock rate select field
pub const SPR_MASK: u8 = 0b11;

/// SPSR: transfer complete
pub const SPIF: u8 = 1 << 7;
/// SPSR: write collision
pub const WCOL: u8 = 1 << 6;
/// SPSR: double speed
pub const SPI2X: u8 = 1 << 0;
