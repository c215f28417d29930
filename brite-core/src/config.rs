//! Core timing and layout configuration.

use brite_proto::MAX_ADDRESS;
use rgb::RGB16;

/// Non-volatile address holding the active color index.
pub const ACTIVE_COLOR_ADDRESS: u8 = 0;

/// Default first address of the save slot region.
pub const DEFAULT_SLOT_BASE: u8 = 0x10;

/// Default debounce quiescence window, in ticks.
pub const DEFAULT_DEBOUNCE_TICKS: u32 = 50;

/// Default settle time before the active color is persisted, in ticks.
pub const DEFAULT_PERSIST_WAIT_TICKS: u32 = 900;

/// Default number of on/off cycles in the error alert.
pub const DEFAULT_ALERT_CYCLES: u8 = 5;

/// Default duration of each alert on or off phase, in ticks.
pub const DEFAULT_ALERT_HALF_PERIOD_TICKS: u32 = 100;

/// Default alert color: red at full duty for the stock PWM period.
pub const DEFAULT_ALERT_COLOR: RGB16 = RGB16 { r: 0x01A0, g: 0, b: 0 };

/// Errors reported by [`CoreConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The slot region would overlap the active color address.
    SlotBaseOverlapsActive,
    /// `slot_base + 31` does not fit the 8-bit address space.
    SlotRangeOverflow,
    /// A tick period or cycle count is zero.
    ZeroPeriod,
}

/// Timing and layout parameters of the event core.
///
/// One tick is one time unit; the firmware ticks every millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreConfig {
    /// First non-volatile address of the save slots.
    pub slot_base: u8,
    /// Ticks during which edges are ignored after a press or release.
    pub debounce_ticks: u32,
    /// Quiet ticks required before the active color is written.
    pub persist_wait_ticks: u32,
    /// Number of on/off blinks shown for an invalid command.
    pub alert_cycles: u8,
    /// Length of each alert on and off phase.
    pub alert_half_period_ticks: u32,
    /// Color shown during the on phases of the alert.
    pub alert_color: RGB16,
}

impl CoreConfig {
    pub const DEFAULT: Self = Self {
        slot_base: DEFAULT_SLOT_BASE,
        debounce_ticks: DEFAULT_DEBOUNCE_TICKS,
        persist_wait_ticks: DEFAULT_PERSIST_WAIT_TICKS,
        alert_cycles: DEFAULT_ALERT_CYCLES,
        alert_half_period_ticks: DEFAULT_ALERT_HALF_PERIOD_TICKS,
        alert_color: DEFAULT_ALERT_COLOR,
    };

    #[must_use]
    pub const fn with_slot_base(mut self, slot_base: u8) -> Self {
        self.slot_base = slot_base;
        self
    }

    #[must_use]
    pub const fn with_debounce_ticks(mut self, ticks: u32) -> Self {
        self.debounce_ticks = ticks;
        self
    }

    #[must_use]
    pub const fn with_persist_wait_ticks(mut self, ticks: u32) -> Self {
        self.persist_wait_ticks = ticks;
        self
    }

    #[must_use]
    pub const fn with_alert(mut self, color: RGB16, cycles: u8, half_period_ticks: u32) -> Self {
        self.alert_color = color;
        self.alert_cycles = cycles;
        self.alert_half_period_ticks = half_period_ticks;
        self
    }

    /// Check the layout and timing for consistency.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_base == ACTIVE_COLOR_ADDRESS {
            return Err(ConfigError::SlotBaseOverlapsActive);
        }
        if self.slot_base.checked_add(MAX_ADDRESS).is_none() {
            return Err(ConfigError::SlotRangeOverflow);
        }
        if self.persist_wait_ticks == 0 || self.alert_cycles == 0 || self.alert_half_period_ticks == 0
        {
            return Err(ConfigError::ZeroPeriod);
        }
        Ok(())
    }

    /// Non-volatile address of save slot `slot`.
    ///
    /// `slot` is a 5-bit protocol address, so with a validated config the
    /// sum never overflows.
    #[inline]
    #[must_use]
    pub const fn slot_address(&self, slot: u8) -> u8 {
        self.slot_base.wrapping_add(slot & MAX_ADDRESS)
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
