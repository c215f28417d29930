//! UART echo and receive for the command channel.
//!
//! # Pins
//!
//! Uses UART1:
//! - GPIO 8: TX (command echo)
//! - GPIO 9: RX (command bytes)

use brite_core::{ByteSource, SerialTx};
use defmt::warn;
use embassy_rp::uart::{Async, UartRx, UartTx};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::config::BYTE_QUEUE_LEN;

/// Queue between the UART receive task and the dispatcher.
pub type ByteQueue = Channel<CriticalSectionRawMutex, u8, BYTE_QUEUE_LEN>;

/// Echo side of the UART.
///
/// A byte is one character time at the configured baud rate, so the write
/// is done blocking from inside the handler.
pub struct UartEcho<'d> {
    tx: UartTx<'d, Async>,
}

impl<'d> UartEcho<'d> {
    #[must_use]
    pub fn new(tx: UartTx<'d, Async>) -> Self {
        Self { tx }
    }
}

impl SerialTx for UartEcho<'_> {
    fn send_byte(&mut self, byte: u8) {
        if let Err(e) = self.tx.blocking_write(&[byte]) {
            warn!("echo of {=u8:#x} failed: {:?}", byte, e);
        }
    }
}

/// Non-blocking view of the received-byte queue.
pub struct QueuedBytes<'a> {
    queue: &'a ByteQueue,
}

impl<'a> QueuedBytes<'a> {
    #[must_use]
    pub fn new(queue: &'a ByteQueue) -> Self {
        Self { queue }
    }
}

impl ByteSource for QueuedBytes<'_> {
    fn try_receive_byte(&mut self) -> Option<u8> {
        self.queue.try_receive().ok()
    }
}

/// Read bytes from the UART forever, pushing each into `queue`.
///
/// Receive errors (framing, overrun, break) drop the byte and are logged.
pub async fn forward_bytes(mut rx: UartRx<'_, Async>, queue: &ByteQueue) -> ! {
    let mut byte = [0u8; 1];
    loop {
        match rx.read(&mut byte).await {
            Ok(()) => queue.send(byte[0]).await,
            Err(e) => warn!("UART receive error: {:?}", e),
        }
    }
}
