//! Physical wiring of the glyph
//!
//! Logical frames are reshaped on write to match the hardware. The breadboard
//! build uses a ring of 24 LEDs, of which 14 are lit, instead of wiring a
//! whole bunch of LEDs in the right order and pattern. The PCB routes the
//! chain through the glyph in logical order.

use crate::frame::FRAME_LEN;

/// Number of LEDs on the physical chain
pub const PIXEL_COUNT: usize = 24;

/// Serial bit rate of the LED chain
pub const BIT_RATE_HZ: u32 = 800_000;

const BREADBOARD_REMAP: [usize; FRAME_LEN] = [21, 22, 23, 0, 1, 2, 3, 12, 8, 9, 10, 16, 15, 14];
const PCB_REMAP: [usize; FRAME_LEN] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13];

/// Supported hardware wiring variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Topology {
    /// 24-LED ring on a breadboard
    #[default]
    Breadboard,
    /// Dedicated badge PCB
    Pcb,
}

impl Topology {
    pub const ALL: [Self; 2] = [Self::Breadboard, Self::Pcb];

    /// Chain position for each logical frame index
    pub const fn remap(self) -> &'static [usize; FRAME_LEN] {
        match self {
            Self::Breadboard => &BREADBOARD_REMAP,
            Self::Pcb => &PCB_REMAP,
        }
    }

    /// Chain position of a logical index, or `None` when out of range
    pub const fn physical_index(self, logical: usize) -> Option<usize> {
        if logical < FRAME_LEN {
            Some(self.remap()[logical])
        } else {
            None
        }
    }

    /// GPIO driving the chain data line
    pub const fn data_pin(self) -> u8 {
        match self {
            Self::Breadboard => 0,
            Self::Pcb => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breadboard => "breadboard",
            Self::Pcb => "pcb",
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|topology| topology.as_str() == s)
    }
}
