//! Packed pixel color
//!
//! Every pixel travels through the pipeline as one `u32` word with a fixed
//! byte layout:
//!
//! | bits   | lane    |
//! |--------|---------|
//! | 7..0   | red     |
//! | 15..8  | green   |
//! | 23..16 | blue    |
//! | 31..24 | padding |
//!
//! Gamma correction and the chain remap both operate on this layout, so it is
//! part of the public contract.

use smart_leds::RGB8;

/// Packed 32-bit pixel color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Self = Self(0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Pack red, green and blue channels. The padding byte is zero.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self::from_lanes([r, g, b, 0])
    }

    /// Gray color with the same level in every channel
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Wrap an already packed word
    pub const fn from_packed(word: u32) -> Self {
        Self(word)
    }

    /// Build a color from its four byte lanes, lowest byte first
    pub const fn from_lanes(lanes: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(lanes))
    }

    /// Packed word
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Byte lanes `[r, g, b, padding]`
    pub const fn lanes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    pub const fn r(self) -> u8 {
        self.lanes()[0]
    }

    pub const fn g(self) -> u8 {
        self.lanes()[1]
    }

    pub const fn b(self) -> u8 {
        self.lanes()[2]
    }

    /// Unused high byte
    pub const fn padding(self) -> u8 {
        self.lanes()[3]
    }

    /// Word in the form a bit-serial transport shifts out.
    ///
    /// The transport sends the top 24 bits, so the packed color is moved up by
    /// one byte and the low byte is framing padding.
    pub const fn wire_word(self) -> u32 {
        self.0 << 8
    }
}

impl From<u32> for Color {
    fn from(word: u32) -> Self {
        Self(word)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<RGB8> for Color {
    fn from(rgb: RGB8) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Color> for RGB8 {
    fn from(color: Color) -> Self {
        RGB8::new(color.r(), color.g(), color.b())
    }
}
