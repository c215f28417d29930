//! Recording mock hardware shared by the integration tests.

#![allow(dead_code)]

use brite_core::{
    ColorOutput, CoreConfig, Event, EventCore, NvStorage, Palette, PersistenceError, SerialTx,
};
use rgb::RGB16;

/// Everything the core did to the hardware, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Output(RGB16),
    Echo(u8),
    Write { addr: u8, value: u8 },
}

pub struct MockHardware {
    pub mem: [u8; 256],
    pub effects: Vec<Effect>,
    pub fail_next_write: bool,
}

impl MockHardware {
    /// Fresh hardware with fully erased storage.
    pub fn new() -> Self {
        Self {
            mem: [0xFF; 256],
            effects: Vec::new(),
            fail_next_write: false,
        }
    }

    pub fn clear_effects(&mut self) {
        self.effects.clear();
    }

    pub fn echoes(&self) -> Vec<u8> {
        self.effects
            .iter()
            .filter_map(|e| match e {
                Effect::Echo(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    pub fn outputs(&self) -> Vec<RGB16> {
        self.effects
            .iter()
            .filter_map(|e| match e {
                Effect::Output(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.effects
            .iter()
            .filter_map(|e| match e {
                Effect::Write { addr, value } => Some((*addr, *value)),
                _ => None,
            })
            .collect()
    }
}

impl ColorOutput for MockHardware {
    fn set_output(&mut self, color: RGB16) {
        self.effects.push(Effect::Output(color));
    }
}

impl SerialTx for MockHardware {
    fn send_byte(&mut self, byte: u8) {
        self.effects.push(Effect::Echo(byte));
    }
}

impl NvStorage for MockHardware {
    fn read_slot(&mut self, addr: u8) -> Result<u8, PersistenceError> {
        Ok(self.mem[addr as usize])
    }

    fn write_slot(&mut self, addr: u8, value: u8) -> Result<(), PersistenceError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(PersistenceError::Write);
        }
        self.mem[addr as usize] = value;
        self.effects.push(Effect::Write { addr, value });
        Ok(())
    }
}

/// A booted core on erased hardware, effects cleared.
pub fn booted() -> (EventCore, MockHardware) {
    let mut hw = MockHardware::new();
    let mut core = EventCore::new(Palette::DEFAULT, CoreConfig::DEFAULT).unwrap();
    core.boot(&mut hw).unwrap();
    hw.clear_effects();
    (core, hw)
}

/// Press the button `n` times through the debounced event.
pub fn press(core: &mut EventCore, hw: &mut MockHardware, n: usize) {
    for _ in 0..n {
        core.handle(hw, Event::ButtonPressed).unwrap();
    }
}

pub fn tick(core: &mut EventCore, hw: &mut MockHardware, n: u32) {
    for _ in 0..n {
        core.handle(hw, Event::TimerTick).unwrap();
    }
}

/// Move the active index to `index` using button presses.
pub fn select(core: &mut EventCore, hw: &mut MockHardware, index: u8) {
    while core.active_index() != index {
        press(core, hw, 1);
    }
}
