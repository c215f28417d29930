//! Hardware interface traits and error types.
//!
//! The event core never touches peripherals directly. It drives these small
//! traits instead, so the same core runs against the RP2040 peripherals and
//! against recording mocks on the host.
//!
//! Apart from [`NvStorage`], the interface is infallible: output, echo and
//! pin reads are assumed to always succeed eventually.

use rgb::RGB16;

/// Error type for non-volatile storage operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PersistenceError {
    /// Reading a byte failed.
    Read,
    /// Writing (or erasing) failed.
    Write,
    /// Address outside the storage region.
    OutOfRange,
}

/// PWM color output.
pub trait ColorOutput {
    /// Drive the three channels with the given duty values.
    fn set_output(&mut self, color: RGB16);
}

/// Serial transmit side, used to echo accepted command bytes.
pub trait SerialTx {
    /// Send one byte, waiting for the transmitter if necessary.
    fn send_byte(&mut self, byte: u8);
}

/// Serial receive side, polled for buffered bytes.
pub trait ByteSource {
    /// Take the next received byte, if one is waiting.
    fn try_receive_byte(&mut self) -> Option<u8>;
}

/// The push button pin.
pub trait ButtonInput {
    /// Sample the electrical level: `true` when high.
    ///
    /// The button is wired with a pull-up, so a low level means pressed.
    fn read_button_level(&mut self) -> bool;
}

/// Byte-addressable non-volatile storage (EEPROM or an emulation of it).
///
/// Erased cells read back as `0xFF`.
pub trait NvStorage {
    /// Read the byte stored at `addr`.
    fn read_slot(&mut self, addr: u8) -> Result<u8, PersistenceError>;

    /// Store `value` at `addr`.
    fn write_slot(&mut self, addr: u8, value: u8) -> Result<(), PersistenceError>;
}

/// Everything the event core drives while handling an event.
///
/// Implemented automatically for any type providing the three parts.
pub trait Hardware: ColorOutput + SerialTx + NvStorage {}

impl<T: ColorOutput + SerialTx + NvStorage> Hardware for T {}
