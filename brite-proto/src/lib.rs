//! Serial protocol for the Brite single-button RGB light.
//!
//! This crate provides everything needed to talk to the light over its
//! byte-oriented serial channel:
//!
//! - **Commands**: one byte per command
//!   - [`decode()`] - Pure, total byte-to-[`Command`] decoder
//!   - [`try_decode()`] - Same, reporting [`ProtocolError::InvalidEncoding`]
//!   - [`Command::encode()`] - Produce the wire byte (host tools, tests)
//!
//! - **Color picker**: raw duty-cycle stream used by the picker firmware
//!   - [`ColorPicker`] - Blue/green/red byte accumulator
//!
//! # Protocol Format
//!
//! ```text
//! bit7 bit6 bit5 bit4..0
//! SAVE LOAD PALT  ADDRESS
//! ```
//!
//! Exactly one of bits 7/6/5 must be set. `ADDRESS` is a 5-bit slot index
//! (0-31). A successfully decoded byte is echoed back verbatim by the device
//! once its effect is applied; an invalid byte is not echoed and makes the
//! light blink an alert color instead.
//!
//! # Example
//!
//! ```
//! use brite_proto::{decode, Command};
//!
//! let save = Command::Save(3).encode().unwrap();
//! assert_eq!(save, 0x83);
//! assert_eq!(decode(save), Command::Save(3));
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod command;
pub mod picker;

pub use command::{
    decode, try_decode, Command, ProtocolError, ADDRESS_MASK, COMMAND_MASK, LOAD_BIT,
    MAX_ADDRESS, PALETTE_BIT, SAVE_BIT, SLOT_COUNT,
};
pub use picker::{ColorPicker, PickerChannel};
