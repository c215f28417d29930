//! Active color state.

use crate::hal::ColorOutput;
use crate::palette::Palette;
use rgb::RGB16;

/// The active palette index and the palette it indexes.
///
/// The index is always in `0..palette.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorState {
    palette: Palette,
    active_index: u8,
}

impl ColorState {
    /// Start at index 0. Nothing is shown until [`apply`](Self::apply).
    #[must_use]
    pub const fn new(palette: Palette) -> Self {
        Self {
            palette,
            active_index: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn active_index(&self) -> u8 {
        self.active_index
    }

    /// Color at the active index.
    #[inline]
    #[must_use]
    pub const fn color(&self) -> RGB16 {
        self.palette.color(self.active_index)
    }

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Move to the next palette entry and show it.
    pub fn advance<O: ColorOutput>(&mut self, output: &mut O) -> u8 {
        self.step();
        self.apply(output);
        self.active_index
    }

    /// Select the color encoded by a raw stored byte and show it.
    ///
    /// `0xFF` (erased) selects index 0; other values are taken modulo the
    /// palette length.
    pub fn load<O: ColorOutput>(&mut self, raw: u8, output: &mut O) -> u8 {
        self.set_from_raw(raw);
        self.apply(output);
        self.active_index
    }

    /// Push the active color to the output.
    pub fn apply<O: ColorOutput>(&self, output: &mut O) {
        output.set_output(self.color());
    }

    /// Like [`advance`](Self::advance), without touching the output.
    pub fn step(&mut self) -> u8 {
        self.active_index = self.palette.next_index(self.active_index);
        self.active_index
    }

    /// Like [`load`](Self::load), without touching the output.
    pub fn set_from_raw(&mut self, raw: u8) -> u8 {
        self.active_index = self.palette.resolve_index(raw);
        self.active_index
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::vec::Vec;

    #[derive(Default)]
    struct MockOutput {
        shown: Vec<RGB16>,
    }

    impl ColorOutput for MockOutput {
        fn set_output(&mut self, color: RGB16) {
            self.shown.push(color);
        }
    }

    #[test]
    fn test_advance_applies_next_color() {
        let mut state = ColorState::new(Palette::DEFAULT);
        let mut out = MockOutput::default();
        assert_eq!(state.advance(&mut out), 1);
        assert_eq!(out.shown, [Palette::DEFAULT.color(1)]);
    }

    #[test]
    fn test_advance_wraps() {
        let mut state = ColorState::new(Palette::DEFAULT);
        let mut out = MockOutput::default();
        state.set_from_raw(6);
        assert_eq!(state.advance(&mut out), 0);
    }

    #[test]
    fn test_load_erased_selects_zero() {
        let mut state = ColorState::new(Palette::DEFAULT);
        let mut out = MockOutput::default();
        state.set_from_raw(4);
        assert_eq!(state.load(0xFF, &mut out), 0);
        assert_eq!(out.shown, [Palette::DEFAULT.color(0)]);
    }

    #[test]
    fn test_load_folds_out_of_range() {
        let mut state = ColorState::new(Palette::DEFAULT);
        let mut out = MockOutput::default();
        assert_eq!(state.load(9, &mut out), 2);
        assert_eq!(state.load(3, &mut out), 3);
    }

    #[test]
    fn test_step_does_not_touch_output() {
        let mut state = ColorState::new(Palette::DEFAULT);
        state.step();
        state.set_from_raw(5);
        assert_eq!(state.active_index(), 5);
        let mut out = MockOutput::default();
        state.apply(&mut out);
        assert_eq!(out.shown, [Palette::DEFAULT.color(5)]);
    }
}
