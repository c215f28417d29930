//! Push button on GPIO 15 (active low, internal pull-up).

use brite_core::ButtonInput;
use defmt::warn;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;

use crate::config::EDGE_QUEUE_LEN;

/// Queue of raw edges, carrying whether the pin read low after the edge.
pub type EdgeQueue = Channel<CriticalSectionRawMutex, bool, EDGE_QUEUE_LEN>;

/// A button wired between a pulled-up pin and ground.
pub struct PinButton<P> {
    pin: P,
}

impl<P: InputPin + Wait> PinButton<P> {
    #[must_use]
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Wait for the next edge in either direction.
    pub async fn wait_for_edge(&mut self) {
        if self.pin.wait_for_any_edge().await.is_err() {
            warn!("button edge wait failed");
        }
    }
}

impl<P: InputPin> ButtonInput for PinButton<P> {
    /// A pin that cannot be read is reported high (released).
    fn read_button_level(&mut self) -> bool {
        self.pin.is_high().unwrap_or(true)
    }
}

/// Report every edge on `button` to `queue` with the level sampled after it.
///
/// Bounce is not filtered here; the event core debounces.
pub async fn forward_edges<P: InputPin + Wait>(mut button: PinButton<P>, queue: &EdgeQueue) -> ! {
    loop {
        button.wait_for_edge().await;
        let level_is_low = !button.read_button_level();
        queue.send(level_is_low).await;
    }
}
