//! Events consumed by the event core.

/// A hardware event, handled to completion by
/// [`EventCore::handle`](crate::EventCore::handle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Raw edge on the button pin, with the level sampled when it fired.
    ButtonEdge { level_is_low: bool },
    /// A debounced press (normally produced from `ButtonEdge`).
    ButtonPressed,
    /// One byte arrived on the serial channel.
    ByteReceived(u8),
    /// Periodic tick, one time unit.
    TimerTick,
}
