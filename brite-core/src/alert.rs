//! Error display: blink an alert color after an invalid command.
//!
//! The sequence is tick-driven. `start` shows the alert color at once; every
//! half period the output toggles between the alert color and off, for
//! `cycles` on/off pairs. After the final off phase the sequence reports
//! [`AlertProgress::Finished`] and the caller restores the active color.

use crate::hal::ColorOutput;
use rgb::RGB16;

const OFF: RGB16 = RGB16 { r: 0, g: 0, b: 0 };

/// Result of advancing the alert by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertProgress {
    /// No alert running.
    Idle,
    /// Alert still owns the display.
    Running,
    /// Last phase just ended; the display must be restored.
    Finished,
}

/// Blink sequence state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorDisplay {
    color: RGB16,
    cycles: u8,
    half_period_ticks: u32,
    /// Current phase, even = on, odd = off. `None` when idle.
    phase: Option<u16>,
    ticks_in_phase: u32,
}

impl ErrorDisplay {
    #[must_use]
    pub const fn new(color: RGB16, cycles: u8, half_period_ticks: u32) -> Self {
        Self {
            color,
            cycles,
            half_period_ticks,
            phase: None,
            ticks_in_phase: 0,
        }
    }

    /// Start (or restart) the sequence and show the first on phase.
    pub fn start<O: ColorOutput>(&mut self, output: &mut O) {
        self.phase = Some(0);
        self.ticks_in_phase = 0;
        output.set_output(self.color);
    }

    /// Advance by one tick, toggling the output at phase boundaries.
    pub fn on_tick<O: ColorOutput>(&mut self, output: &mut O) -> AlertProgress {
        let Some(phase) = self.phase else {
            return AlertProgress::Idle;
        };

        self.ticks_in_phase += 1;
        if self.ticks_in_phase < self.half_period_ticks {
            return AlertProgress::Running;
        }

        self.ticks_in_phase = 0;
        let next = phase + 1;
        if next >= self.total_phases() {
            self.phase = None;
            return AlertProgress::Finished;
        }

        self.phase = Some(next);
        output.set_output(if next % 2 == 0 { self.color } else { OFF });
        AlertProgress::Running
    }

    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.phase.is_some()
    }

    /// Ticks from `start` until [`AlertProgress::Finished`], saturating at
    /// `u32::MAX`.
    #[inline]
    #[must_use]
    pub const fn duration_ticks(&self) -> u32 {
        (self.total_phases() as u32).saturating_mul(self.half_period_ticks)
    }

    #[inline]
    const fn total_phases(&self) -> u16 {
        self.cycles as u16 * 2
    }
}
