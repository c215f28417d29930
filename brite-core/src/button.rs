//! Debounced button monitor.
//!
//! Turns raw pin edges into clean press/release events. A qualifying edge
//! latches the new state and closes the edge input for a quiescence window
//! counted in ticks; nothing blocks while the window is open. Edges arriving
//! during the window are contact bounce and are dropped, but the level of the
//! last one is remembered and re-examined when the window reopens, so a
//! release that happened mid-window is not lost.

/// A debounced button transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Pressed,
    Released,
}

/// Edge-latching debounce state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceMonitor {
    /// Last honored edge was a press not yet matched by a release.
    pressed: bool,
    /// Ticks left before edges are honored again.
    hold_remaining: u32,
    /// Level of the most recent edge dropped during the window.
    deferred_level_low: Option<bool>,
    hold_ticks: u32,
}

impl DebounceMonitor {
    /// Create a released monitor with a quiescence window of `hold_ticks`.
    #[must_use]
    pub const fn new(hold_ticks: u32) -> Self {
        Self {
            pressed: false,
            hold_remaining: 0,
            deferred_level_low: None,
            hold_ticks,
        }
    }

    /// Process an edge interrupt. `level_is_low` is the pin level sampled
    /// when the edge fired (low means pressed).
    pub fn on_edge(&mut self, level_is_low: bool) -> Option<ButtonEvent> {
        if self.is_holding() {
            self.deferred_level_low = Some(level_is_low);
            return None;
        }

        match (level_is_low, self.pressed) {
            (true, false) => {
                self.latch(true);
                Some(ButtonEvent::Pressed)
            }
            (false, true) => {
                self.latch(false);
                Some(ButtonEvent::Released)
            }
            _ => None,
        }
    }

    /// Advance the quiescence window by one tick.
    ///
    /// When the window closes, the last edge dropped during it is replayed.
    pub fn on_tick(&mut self) -> Option<ButtonEvent> {
        if self.hold_remaining == 0 {
            return None;
        }
        self.hold_remaining -= 1;
        if self.hold_remaining > 0 {
            return None;
        }
        self.deferred_level_low
            .take()
            .and_then(|level_is_low| self.on_edge(level_is_low))
    }

    fn latch(&mut self, pressed: bool) {
        self.pressed = pressed;
        self.hold_remaining = self.hold_ticks;
        self.deferred_level_low = None;
    }

    #[inline]
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether edge handling is currently suspended.
    #[inline]
    #[must_use]
    pub const fn is_holding(&self) -> bool {
        self.hold_remaining > 0
    }
}
