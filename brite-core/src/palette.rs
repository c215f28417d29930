//! The fixed color palette.

use rgb::RGB16;

/// Value of an erased non-volatile cell.
pub const ERASED: u8 = 0xFF;

/// Colors shipped with the light, as PWM duty values.
pub const DEFAULT_COLORS: [RGB16; 7] = [
    RGB16 { r: 0, g: 0, b: 0 },
    RGB16 { r: 50, g: 0, b: 0 },
    RGB16 { r: 50, g: 50, b: 0 },
    RGB16 { r: 0, g: 50, b: 0 },
    RGB16 { r: 0, g: 50, b: 50 },
    RGB16 { r: 0, g: 0, b: 50 },
    RGB16 { r: 50, g: 0, b: 50 },
];

/// Ordered list of selectable colors.
///
/// Never empty, and small enough that every index fits in one stored byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: &'static [RGB16],
}

impl Palette {
    /// The built-in seven color palette.
    pub const DEFAULT: Self = Self {
        colors: &DEFAULT_COLORS,
    };

    /// Wrap a color table.
    ///
    /// Returns `None` for an empty table or one with more than 255 entries.
    #[must_use]
    pub const fn new(colors: &'static [RGB16]) -> Option<Self> {
        if colors.is_empty() || colors.len() > u8::MAX as usize {
            None
        } else {
            Some(Self { colors })
        }
    }

    /// Number of colors, always at least one.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> u8 {
        self.colors.len() as u8
    }

    /// Always `false`: a palette is never empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Color at `index`, wrapping out-of-range indices.
    #[inline]
    #[must_use]
    pub const fn color(&self, index: u8) -> RGB16 {
        self.colors[(index % self.len()) as usize]
    }

    /// Index following `index`, wrapping to zero.
    #[inline]
    #[must_use]
    pub const fn next_index(&self, index: u8) -> u8 {
        ((index as u16 + 1) % self.len() as u16) as u8
    }

    /// Map a raw stored byte onto a valid index.
    ///
    /// An erased cell resolves to 0. Other out-of-range values are folded
    /// with modulo instead of being rejected, so corrupted or foreign
    /// content still selects a color.
    #[inline]
    #[must_use]
    pub const fn resolve_index(&self, raw: u8) -> u8 {
        if raw == ERASED {
            0
        } else {
            raw % self.len()
        }
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &'static [RGB16] {
        self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}
