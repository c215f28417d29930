//! EventCore: turns hardware events into color changes, echoes and writes.

use brite_proto::{decode, Command};

use crate::alert::{AlertProgress, ErrorDisplay};
use crate::button::{ButtonEvent, DebounceMonitor};
use crate::color::ColorState;
use crate::config::{ConfigError, CoreConfig, ACTIVE_COLOR_ADDRESS};
use crate::event::Event;
use crate::hal::{ButtonInput, ByteSource, Hardware, PersistenceError};
use crate::palette::Palette;
use crate::persistence::PersistenceScheduler;

/// Error type for event handling.
///
/// Never fatal: the caller logs it and keeps dispatching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CoreError {
    /// Non-volatile storage failed.
    Persistence(PersistenceError),
}

impl From<PersistenceError> for CoreError {
    fn from(err: PersistenceError) -> Self {
        CoreError::Persistence(err)
    }
}

/// The whole mutable state of the light, owned by a single dispatcher.
///
/// Each call to [`handle`](Self::handle) processes one event to completion
/// against the hardware passed in. There are no globals; the dispatcher that
/// owns this value is the only writer.
///
/// # Error Handling
///
/// Invalid command bytes are recovered locally with the blink alert and are
/// not reported. Storage failures are returned as [`CoreError`] and leave the
/// color state unchanged.
#[derive(Debug, Clone, Copy)]
pub struct EventCore {
    config: CoreConfig,
    color: ColorState,
    button: DebounceMonitor,
    persistence: PersistenceScheduler,
    alert: ErrorDisplay,
}

impl EventCore {
    /// Create a core with index 0 active and all timers idle.
    pub fn new(palette: Palette, config: CoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            color: ColorState::new(palette),
            button: DebounceMonitor::new(config.debounce_ticks),
            persistence: PersistenceScheduler::new(config.persist_wait_ticks),
            alert: ErrorDisplay::new(
                config.alert_color,
                config.alert_cycles,
                config.alert_half_period_ticks,
            ),
        })
    }

    /// Recall the persisted color and show it.
    ///
    /// If the store cannot be read, index 0 is shown and the error returned.
    pub fn boot<H: Hardware>(&mut self, hw: &mut H) -> Result<(), CoreError> {
        match hw.read_slot(ACTIVE_COLOR_ADDRESS) {
            Ok(raw) => {
                self.color.load(raw, hw);
                info!(
                    "recalled color {} (stored {=u8:#x})",
                    self.color.active_index(),
                    raw
                );
                Ok(())
            }
            Err(e) => {
                self.color.load(crate::palette::ERASED, hw);
                warn!("color recall failed: {}", e);
                Err(e.into())
            }
        }
    }

    /// Process a single event.
    pub fn handle<H: Hardware>(&mut self, hw: &mut H, event: Event) -> Result<(), CoreError> {
        trace!("event: {}", event);
        match event {
            Event::ButtonEdge { level_is_low } => {
                if let Some(ButtonEvent::Pressed) = self.button.on_edge(level_is_low) {
                    self.on_button_pressed(hw);
                }
                Ok(())
            }
            Event::ButtonPressed => {
                self.on_button_pressed(hw);
                Ok(())
            }
            Event::ByteReceived(byte) => self.on_byte(hw, byte),
            Event::TimerTick => self.on_tick(hw),
        }
    }

    /// Sample the button level and handle it as an edge.
    pub fn handle_button_edge<H: Hardware, B: ButtonInput>(
        &mut self,
        hw: &mut H,
        button: &mut B,
    ) -> Result<(), CoreError> {
        let level_is_low = !button.read_button_level();
        self.handle(hw, Event::ButtonEdge { level_is_low })
    }

    /// Handle every byte currently waiting in `source`, in arrival order.
    ///
    /// All bytes are processed even if one fails; the first error is
    /// returned. `Ok` carries the number of bytes handled.
    pub fn drain_serial<H: Hardware, S: ByteSource>(
        &mut self,
        hw: &mut H,
        source: &mut S,
    ) -> Result<usize, CoreError> {
        let mut count = 0;
        let mut first_err = None;
        while let Some(byte) = source.try_receive_byte() {
            count += 1;
            if let Err(e) = self.on_byte(hw, byte) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(count),
        }
    }

    fn on_button_pressed<H: Hardware>(&mut self, hw: &mut H) {
        if self.alert.is_active() {
            self.color.step();
        } else {
            self.color.advance(hw);
        }
        self.persistence.on_color_changed();
        debug!("button: color {}", self.color.active_index());
    }

    fn on_byte<H: Hardware>(&mut self, hw: &mut H, byte: u8) -> Result<(), CoreError> {
        let command = decode(byte);
        match command {
            Command::Save(slot) => {
                hw.write_slot(self.config.slot_address(slot), self.color.active_index())?;
            }
            Command::Load(slot) => {
                let raw = hw.read_slot(self.config.slot_address(slot))?;
                if self.alert.is_active() {
                    self.color.set_from_raw(raw);
                } else {
                    self.color.load(raw, hw);
                }
            }
            Command::PaletteSelect(_) => {}
            Command::Invalid => {
                warn!("invalid command byte {=u8:#x}", byte);
                self.alert.start(hw);
                return Ok(());
            }
        }
        debug!("{} -> color {}", command, self.color.active_index());
        hw.send_byte(byte);
        Ok(())
    }

    fn on_tick<H: Hardware>(&mut self, hw: &mut H) -> Result<(), CoreError> {
        if let Some(ButtonEvent::Pressed) = self.button.on_tick() {
            self.on_button_pressed(hw);
        }
        if self.alert.on_tick(hw) == AlertProgress::Finished {
            self.color.apply(hw);
        }
        self.persistence
            .on_tick(self.color.active_index(), hw)
            .map(|_| ())
            .map_err(CoreError::from)
    }

    #[inline]
    #[must_use]
    pub const fn active_index(&self) -> u8 {
        self.color.active_index()
    }

    #[inline]
    #[must_use]
    pub const fn color_state(&self) -> &ColorState {
        &self.color
    }

    #[inline]
    #[must_use]
    pub const fn debounce(&self) -> &DebounceMonitor {
        &self.button
    }

    #[inline]
    #[must_use]
    pub const fn persistence(&self) -> &PersistenceScheduler {
        &self.persistence
    }

    #[inline]
    #[must_use]
    pub const fn alert(&self) -> &ErrorDisplay {
        &self.alert
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &CoreConfig {
        &self.config
    }
}
