//! PWM color output.
//!
//! Drives three PWM channels from an [`RGB16`] whose components are raw duty
//! values against the slice top ([`PWM_TOP`](crate::config::PWM_TOP)).
//! Values above the channel maximum are clamped.

use brite_core::ColorOutput;
use defmt::warn;
use embedded_hal::pwm::SetDutyCycle;
use rgb::RGB16;

/// Three PWM channels forming one RGB light.
pub struct PwmColorOutput<R, G, B> {
    red: R,
    green: G,
    blue: B,
}

impl<R, G, B> PwmColorOutput<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    #[must_use]
    pub fn new(red: R, green: G, blue: B) -> Self {
        Self { red, green, blue }
    }
}

fn set_channel<C: SetDutyCycle>(channel: &mut C, duty: u16) {
    let duty = duty.min(channel.max_duty_cycle());
    if channel.set_duty_cycle(duty).is_err() {
        warn!("PWM duty {} rejected", duty);
    }
}

impl<R, G, B> ColorOutput for PwmColorOutput<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn set_output(&mut self, color: RGB16) {
        set_channel(&mut self.red, color.r);
        set_channel(&mut self.green, color.g);
        set_channel(&mut self.blue, color.b);
    }
}
