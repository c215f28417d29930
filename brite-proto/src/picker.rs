//! Raw color picker stream.
//!
//! Used by the color picker firmware: each received byte is taken as a PWM
//! duty value for one channel, cycling blue, green, red. The display is
//! updated after every byte, so a partial triple shows up channel by channel.

use rgb::RGB16;

/// Channel the next byte will be written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PickerChannel {
    Blue,
    Green,
    Red,
}

impl PickerChannel {
    #[inline]
    const fn next(self) -> Self {
        match self {
            PickerChannel::Blue => PickerChannel::Green,
            PickerChannel::Green => PickerChannel::Red,
            PickerChannel::Red => PickerChannel::Blue,
        }
    }
}

/// Accumulates raw duty bytes into a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPicker {
    color: RGB16,
    next: PickerChannel,
}

impl ColorPicker {
    /// Start with all channels off, expecting blue first.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            color: RGB16 { r: 0, g: 0, b: 0 },
            next: PickerChannel::Blue,
        }
    }

    /// Write `byte` to the pending channel and return the color to display.
    pub fn push_byte(&mut self, byte: u8) -> RGB16 {
        let duty = u16::from(byte);
        match self.next {
            PickerChannel::Blue => self.color.b = duty,
            PickerChannel::Green => self.color.g = duty,
            PickerChannel::Red => self.color.r = duty,
        }
        self.next = self.next.next();
        self.color
    }

    /// Channel the next byte will be written to.
    #[inline]
    #[must_use]
    pub const fn next_channel(&self) -> PickerChannel {
        self.next
    }

    /// Whether the last byte completed a blue/green/red triple.
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.next, PickerChannel::Blue)
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> RGB16 {
        self.color
    }

    /// Drop any partial triple and expect blue next. The color is kept.
    pub fn resync(&mut self) {
        self.next = PickerChannel::Blue;
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new()
    }
}
