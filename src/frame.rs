//! Logical glyph frame
//!
//! A frame is a group of 14 LEDs in the shape of the letter K. Index `i` is
//! a fixed position in the glyph outline:
//!
//! ```text
//!  0          10
//!  1        9
//!  2     8
//!  3  7
//!  4    11
//!  5       12
//!  6          13
//! ```

use core::fmt;

use crate::color::Color;

/// Number of LEDs in a logical frame
pub const FRAME_LEN: usize = 14;

/// Error returned by checked frame access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Index is outside `0..FRAME_LEN`
    IndexOutOfRange { index: usize },
    /// Source slice does not hold exactly `FRAME_LEN` colors
    LengthMismatch { len: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index } => {
                write!(f, "frame index {index} is out of range 0..{FRAME_LEN}")
            }
            Self::LengthMismatch { len } => {
                write!(f, "frame needs exactly {FRAME_LEN} colors, got {len}")
            }
        }
    }
}

impl core::error::Error for FrameError {}

/// Fixed-size frame of glyph colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame {
    pixels: [Color; FRAME_LEN],
}

impl Frame {
    /// Create a frame with every LED off
    pub const fn new() -> Self {
        Self::filled(Color::BLACK)
    }

    /// Create a frame with every LED set to `color`
    pub const fn filled(color: Color) -> Self {
        Self {
            pixels: [color; FRAME_LEN],
        }
    }

    /// Build a frame from a slice of exactly `FRAME_LEN` colors
    pub fn try_from_slice(colors: &[Color]) -> Result<Self, FrameError> {
        let pixels: [Color; FRAME_LEN] = colors
            .try_into()
            .map_err(|_| FrameError::LengthMismatch { len: colors.len() })?;
        Ok(Self { pixels })
    }

    /// Overwrite every LED with `color`
    pub fn fill(&mut self, color: Color) {
        self.pixels = [color; FRAME_LEN];
    }

    /// Set a single LED
    ///
    /// Out of range indices are rejected rather than wrapped, so a bad index
    /// can never land on another LED.
    pub fn set(&mut self, index: usize, color: Color) -> Result<(), FrameError> {
        let pixel = self
            .pixels
            .get_mut(index)
            .ok_or(FrameError::IndexOutOfRange { index })?;
        *pixel = color;
        Ok(())
    }

    /// Get a single LED, or `None` when out of range
    pub fn get(&self, index: usize) -> Option<Color> {
        self.pixels.get(index).copied()
    }

    pub const fn as_array(&self) -> &[Color; FRAME_LEN] {
        &self.pixels
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.pixels.iter().copied()
    }
}

impl From<[Color; FRAME_LEN]> for Frame {
    fn from(pixels: [Color; FRAME_LEN]) -> Self {
        Self { pixels }
    }
}

impl TryFrom<&[Color]> for Frame {
    type Error = FrameError;

    fn try_from(colors: &[Color]) -> Result<Self, Self::Error> {
        Self::try_from_slice(colors)
    }
}
