//! Board constants for the Raspberry Pi Pico build.
//!
//! Pin assignments are documented here and wired in the binaries; the
//! peripherals themselves are typed by embassy, so only numbers live here.

use embassy_rp::pwm::Config as PwmConfig;
use fixed::types::U12F4;
use fixed_macro::fixed;

/// Serial baud rate (8N1).
pub const BAUD_RATE: u32 = 9_600;

/// Length of one core tick.
pub const TICK_PERIOD_MS: u64 = 1;

/// PWM counter top. Palette and alert duties are expressed against this.
pub const PWM_TOP: u16 = 0x01A0;

/// PWM clock divider.
pub const PWM_DIVIDER: U12F4 = fixed!(4: U12F4);

/// Total on-board flash (W25Q16 on the Pico).
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// Number of addressable bytes in the emulated store.
pub const STORE_LEN: usize = 256;

/// Flash offset of the store: the last erase sector, reserved in memory.x.
pub const STORE_OFFSET: u32 = (FLASH_SIZE - embassy_rp::flash::ERASE_SIZE) as u32;

/// Capacity of the received-byte queue.
pub const BYTE_QUEUE_LEN: usize = 16;

/// Capacity of the button edge queue.
pub const EDGE_QUEUE_LEN: usize = 4;

/// PWM configuration shared by all three color channels, all outputs off.
#[must_use]
pub fn pwm_config() -> PwmConfig {
    let mut config = PwmConfig::default();
    config.top = PWM_TOP;
    config.divider = PWM_DIVIDER;
    config.compare_a = 0;
    config.compare_b = 0;
    config
}
