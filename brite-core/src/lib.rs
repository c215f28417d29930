//! Platform-agnostic event core for the Brite RGB light.
//!
//! This crate holds all of the light's state and timing logic without any
//! platform-specific dependencies. It runs in embedded `no_std` firmware and
//! on the host for testing.
//!
//! # Overview
//!
//! - [`hal`]: Hardware traits ([`ColorOutput`], [`SerialTx`], [`NvStorage`], ...)
//! - [`palette`]: The fixed color table ([`Palette`])
//! - [`config`]: Timing and storage layout ([`CoreConfig`])
//! - [`button`]: Edge debouncing ([`DebounceMonitor`])
//! - [`color`]: Active color index ([`ColorState`])
//! - [`persistence`]: Deferred write of the active color ([`PersistenceScheduler`])
//! - [`alert`]: Blink sequence for invalid commands ([`ErrorDisplay`])
//! - [`dispatch`]: The single-owner state machine ([`EventCore`])
//!
//! # Event Flow
//!
//! ```text
//! ButtonEdge ──► DebounceMonitor ──► ButtonPressed ──► advance ──► arm persistence
//! ByteReceived ──► decode ──► Save / Load / PaletteSelect ──► echo
//!                         └──► Invalid ──► blink alert (no echo)
//! TimerTick ──► debounce window, alert phases, persistence window
//! ```
//!
//! # Example
//!
//! ```rust
//! use brite_core::{ColorOutput, CoreConfig, Event, EventCore, NvStorage, Palette,
//!                  PersistenceError, SerialTx};
//! use rgb::RGB16;
//!
//! struct Board { mem: [u8; 256], echoed: Option<u8> }
//!
//! impl ColorOutput for Board {
//!     fn set_output(&mut self, _color: RGB16) {}
//! }
//! impl SerialTx for Board {
//!     fn send_byte(&mut self, byte: u8) { self.echoed = Some(byte); }
//! }
//! impl NvStorage for Board {
//!     fn read_slot(&mut self, addr: u8) -> Result<u8, PersistenceError> {
//!         Ok(self.mem[addr as usize])
//!     }
//!     fn write_slot(&mut self, addr: u8, value: u8) -> Result<(), PersistenceError> {
//!         self.mem[addr as usize] = value;
//!         Ok(())
//!     }
//! }
//!
//! let mut board = Board { mem: [0xFF; 256], echoed: None };
//! let mut core = EventCore::new(Palette::DEFAULT, CoreConfig::DEFAULT).unwrap();
//! core.boot(&mut board).unwrap();
//!
//! core.handle(&mut board, Event::ButtonPressed).unwrap();
//! core.handle(&mut board, Event::ByteReceived(0x83)).unwrap(); // Save(3)
//! assert_eq!(board.mem[0x13], 1);
//! assert_eq!(board.echoed, Some(0x83));
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting and logging (for embedded targets)

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod fmt;

pub mod alert;
pub mod button;
pub mod color;
pub mod config;
pub mod dispatch;
pub mod event;
pub mod hal;
pub mod palette;
pub mod persistence;

// Re-export main types at crate root
pub use alert::{AlertProgress, ErrorDisplay};
pub use brite_proto::{decode, Command, ProtocolError};
pub use button::{ButtonEvent, DebounceMonitor};
pub use color::ColorState;
pub use config::{ConfigError, CoreConfig, ACTIVE_COLOR_ADDRESS};
pub use dispatch::{CoreError, EventCore};
pub use event::Event;
pub use hal::{
    ButtonInput, ByteSource, ColorOutput, Hardware, NvStorage, PersistenceError, SerialTx,
};
pub use palette::{Palette, DEFAULT_COLORS, ERASED};
pub use persistence::PersistenceScheduler;
