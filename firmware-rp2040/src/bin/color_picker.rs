//! Color picker firmware.
//!
//! Shares the light's PWM and UART wiring but has no button, palette or
//! store. Every received byte sets one channel's duty directly, cycling
//! blue, green, red, which makes it easy to try colors from a terminal
//! before putting them in the palette.

#![no_std]
#![no_main]

use brite_core::ColorOutput;
use brite_proto::ColorPicker;
use brite_rp2040::config::{self, BAUD_RATE};
use brite_rp2040::PwmColorOutput;
use defmt::{debug, info, unwrap, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART1;
use embassy_rp::pwm::Pwm;
use embassy_rp::uart::{Config as UartConfig, UartRx};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    UART1_IRQ => embassy_rp::uart::InterruptHandler<UART1>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Color picker starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    let (red, green) =
        Pwm::new_output_ab(p.PWM_SLICE1, p.PIN_2, p.PIN_3, config::pwm_config()).split();
    let (blue, _) = Pwm::new_output_a(p.PWM_SLICE2, p.PIN_4, config::pwm_config()).split();
    let mut light = PwmColorOutput::new(unwrap!(red), unwrap!(green), unwrap!(blue));

    let mut uart_config = UartConfig::default();
    uart_config.baudrate = BAUD_RATE;
    let mut rx = UartRx::new(p.UART1, p.PIN_9, Irqs, p.DMA_CH1, uart_config);

    let mut picker = ColorPicker::new();
    let mut byte = [0u8; 1];

    info!("Color picker ready, send blue/green/red duty bytes");

    loop {
        match rx.read(&mut byte).await {
            Ok(()) => {
                let color = picker.push_byte(byte[0]);
                light.set_output(color);
                if picker.is_complete() {
                    debug!("color r={} g={} b={}", color.r, color.g, color.b);
                }
            }
            Err(e) => {
                // Realign so the next byte lands on blue
                warn!("UART receive error: {:?}, expecting blue next", e);
                picker.resync();
            }
        }
    }
}
