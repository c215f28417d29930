//! The hardware handed to the event core.

use brite_core::{ColorOutput, NvStorage, PersistenceError, SerialTx};
use embedded_hal::pwm::SetDutyCycle;
use rgb::RGB16;

use crate::output::PwmColorOutput;
use crate::serial::UartEcho;
use crate::storage::FlashEeprom;

/// PWM light, UART echo and flash store, owned by the dispatcher.
pub struct Board<'d, R, G, B> {
    pub light: PwmColorOutput<R, G, B>,
    pub echo: UartEcho<'d>,
    pub store: FlashEeprom<'d>,
}

impl<R, G, B> ColorOutput for Board<'_, R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn set_output(&mut self, color: RGB16) {
        self.light.set_output(color);
    }
}

impl<R, G, B> SerialTx for Board<'_, R, G, B> {
    fn send_byte(&mut self, byte: u8) {
        self.echo.send_byte(byte);
    }
}

impl<R, G, B> NvStorage for Board<'_, R, G, B> {
    fn read_slot(&mut self, addr: u8) -> Result<u8, PersistenceError> {
        self.store.read_slot(addr)
    }

    fn write_slot(&mut self, addr: u8, value: u8) -> Result<(), PersistenceError> {
        self.store.write_slot(addr, value)
    }
}
