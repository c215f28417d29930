//! Brite single-button serial RGB light for RP2040.
//!
//! This crate provides the embedded side of the light: the PWM output, the
//! UART command channel, the flash-emulated store and the button, wired to
//! the platform-agnostic [`brite_core::EventCore`].
//!
//! # Overview
//!
//! The firmware runs on a Raspberry Pi Pico (RP2040) and:
//! 1. Shows the last persisted palette color at power-up
//! 2. Steps through the palette on each debounced button press
//! 3. Accepts one-byte Save/Load commands over UART (9600 baud, 8N1) and
//!    echoes each valid byte once it has been applied
//! 4. Blinks red on an invalid command byte
//! 5. Writes the active color to flash once it has been left alone long enough
//!
//! # Hardware Configuration
//!
//! | Function | GPIO | Description |
//! |----------|------|-------------|
//! | PWM1 A   | 2    | Red channel |
//! | PWM1 B   | 3    | Green channel |
//! | PWM2 A   | 4    | Blue channel |
//! | UART1 TX | 8    | Command echo |
//! | UART1 RX | 9    | Command bytes |
//! | Button   | 15   | To ground, internal pull-up |
//!
//! # Architecture
//!
//! The firmware uses the Embassy async runtime with three tasks:
//!
//! - **UART Task**: Reads bytes and queues them
//! - **Button Task**: Waits for pin edges and queues the sampled level
//! - **Dispatch Task**: Owns the [`EventCore`](brite_core::EventCore) and the
//!   [`Board`], and feeds it bytes, edges and ticks
//!
//! Queues are static [`Channel`](embassy_sync::channel::Channel)s. The
//! dispatcher always takes pending bytes before edges and ticks. When no task
//! is ready the executor sleeps the core until the next interrupt.
//!
//! # Modules
//!
//! - [`board`]: The combined hardware handed to the core ([`Board`])
//! - [`button`]: Button pin and edge forwarding ([`PinButton`])
//! - [`config`]: Baud rate, tick period, PWM and flash constants
//! - [`output`]: PWM color output ([`PwmColorOutput`])
//! - [`serial`]: UART echo and receive queue ([`UartEcho`], [`QueuedBytes`])
//! - [`storage`]: Flash-backed byte store ([`FlashEeprom`])
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)

#![no_std]

#[cfg(all(feature = "dev-panic", feature = "prod-panic"))]
compile_error!("Cannot enable both `dev-panic` and `prod-panic` features - they install conflicting panic handlers");

pub mod board;
pub mod button;
pub mod config;
pub mod output;
pub mod serial;
pub mod storage;

pub use board::Board;
pub use button::{forward_edges, EdgeQueue, PinButton};
pub use output::PwmColorOutput;
pub use serial::{forward_bytes, ByteQueue, QueuedBytes, UartEcho};
pub use storage::FlashEeprom;
