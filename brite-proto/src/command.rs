//! Single-byte command encoding and decoding.
//!
//! Every command travels as exactly one byte:
//!
//! ```text
//! bit7 bit6 bit5 bit4..0
//! SAVE LOAD PALT  ADDRESS
//! ```
//!
//! Exactly one of the three command bits must be set. Zero bits, or two or
//! more (including all three, reserved for an extended mode), decode to
//! [`Command::Invalid`]. A single flipped command bit therefore turns a valid
//! command into an invalid one instead of silently selecting another.

/// Mask selecting the three command bits.
pub const COMMAND_MASK: u8 = 0b1110_0000;

/// Mask selecting the 5-bit slot/index field.
pub const ADDRESS_MASK: u8 = 0b0001_1111;

/// Command bit for [`Command::Save`].
pub const SAVE_BIT: u8 = 0b1000_0000;

/// Command bit for [`Command::Load`].
pub const LOAD_BIT: u8 = 0b0100_0000;

/// Command bit for [`Command::PaletteSelect`].
pub const PALETTE_BIT: u8 = 0b0010_0000;

/// Highest address the 5-bit field can carry.
pub const MAX_ADDRESS: u8 = ADDRESS_MASK;

/// Number of save slots addressable by the protocol.
pub const SLOT_COUNT: usize = MAX_ADDRESS as usize + 1;

/// Errors produced by the command protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolError {
    /// Zero or more than one command bit set.
    InvalidEncoding,
    /// Address does not fit the 5-bit field (encoding only).
    AddressOutOfRange,
}

/// A decoded serial command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub enum Command {
    /// Store the active color index in save slot `n`.
    Save(u8),
    /// Recall the color index stored in save slot `n`.
    Load(u8),
    /// Select palette `n`. Accepted and echoed, but has no effect.
    PaletteSelect(u8),
    /// Not exactly one command bit set.
    Invalid,
}

impl Command {
    /// Whether the command decoded successfully and should be echoed.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Command::Invalid)
    }

    /// Address field carried by the command, if any.
    #[inline]
    #[must_use]
    pub const fn address(self) -> Option<u8> {
        match self {
            Command::Save(a) | Command::Load(a) | Command::PaletteSelect(a) => Some(a),
            Command::Invalid => None,
        }
    }

    /// Encode the command back into its wire byte.
    ///
    /// `Invalid` has no wire form and yields [`ProtocolError::InvalidEncoding`].
    pub const fn encode(self) -> Result<u8, ProtocolError> {
        let (bit, address) = match self {
            Command::Save(a) => (SAVE_BIT, a),
            Command::Load(a) => (LOAD_BIT, a),
            Command::PaletteSelect(a) => (PALETTE_BIT, a),
            Command::Invalid => return Err(ProtocolError::InvalidEncoding),
        };
        if address > MAX_ADDRESS {
            return Err(ProtocolError::AddressOutOfRange);
        }
        Ok(bit | address)
    }
}

/// Decode one received byte into a [`Command`].
///
/// Pure and total: every byte maps to exactly one variant.
///
/// # Example
///
/// ```
/// use brite_proto::{decode, Command};
///
/// assert_eq!(decode(0x92), Command::Save(0x12));
/// assert_eq!(decode(0x4A), Command::Load(0x0A));
/// assert_eq!(decode(0xFF), Command::Invalid);
/// ```
#[inline]
pub const fn decode(byte: u8) -> Command {
    let address = byte & ADDRESS_MASK;
    match byte & COMMAND_MASK {
        SAVE_BIT => Command::Save(address),
        LOAD_BIT => Command::Load(address),
        PALETTE_BIT => Command::PaletteSelect(address),
        _ => Command::Invalid,
    }
}

/// Decode a byte, reporting an invalid command bit pattern as an error.
#[inline]
pub fn try_decode(byte: u8) -> Result<Command, ProtocolError> {
    match decode(byte) {
        Command::Invalid => Err(ProtocolError::InvalidEncoding),
        cmd => Ok(cmd),
    }
}

impl TryFrom<u8> for Command {
    type Error = ProtocolError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        try_decode(byte)
    }
}
