use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PixelTransmitter;
use crate::color::Color;
use crate::frame::Frame;
use crate::gamma::correct_color;
use crate::topology::{BIT_RATE_HZ, PIXEL_COUNT, Topology};

/// Default idle time after a frame, long enough for WS2812 strips to latch
pub const DEFAULT_FRAME_LATCH: Duration = Duration::from_millis(1);

/// Default idle time after a full-chain clear
pub const DEFAULT_CLEAR_HOLD: Duration = Duration::from_millis(10);

/// Configuration for the glyph renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphConfig {
    /// Hardware wiring variant
    pub topology: Topology,
    /// Serial bit rate of the chain
    pub bit_rate_hz: u32,
    /// Idle time requested after each rendered frame
    pub frame_latch: Duration,
    /// Idle time requested after a clear
    pub clear_hold: Duration,
}

impl GlyphConfig {
    pub const fn new(topology: Topology) -> Self {
        Self {
            topology,
            bit_rate_hz: BIT_RATE_HZ,
            frame_latch: DEFAULT_FRAME_LATCH,
            clear_hold: DEFAULT_CLEAR_HOLD,
        }
    }
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self::new(Topology::default())
    }
}

/// Glyph renderer - reshapes logical frames onto the physical chain
///
/// Owns the physical pixel buffer and the transmitter. The buffer keeps raw
/// (uncorrected) colors between calls; only the 14 mapped positions are
/// overwritten by [`Renderer::render`], the rest keep whatever they held.
pub struct Renderer<T: PixelTransmitter> {
    output: T,
    config: GlyphConfig,
    pixels: [Color; PIXEL_COUNT],
}

impl<T: PixelTransmitter> Renderer<T> {
    /// Create a renderer with a black pixel buffer
    pub fn new(output: T, config: &GlyphConfig) -> Self {
        Self {
            output,
            config: *config,
            pixels: [Color::BLACK; PIXEL_COUNT],
        }
    }

    /// Write out a frame
    ///
    /// Remaps the frame onto the chain, gamma-corrects all 24 positions and
    /// sends them in chain order, followed by a latch.
    pub fn render(&mut self, frame: &Frame) {
        let remap = self.config.topology.remap();
        for (color, &position) in frame.iter().zip(remap) {
            self.pixels[position] = color;
        }

        for pixel in self.pixels {
            self.output.transmit(correct_color(pixel));
        }
        self.output.latch(self.config.frame_latch);

        #[cfg(feature = "esp32-log")]
        println!("[Renderer.render] ending frame");
    }

    /// Set the whole chain to a single color
    ///
    /// Bypasses remap and gamma. Positions a frame cannot reach keep this
    /// color on later renders.
    pub fn clear(&mut self, color: Color) {
        self.pixels = [color; PIXEL_COUNT];
        for _ in 0..PIXEL_COUNT {
            self.output.transmit(color);
        }
        self.output.latch(self.config.clear_hold);

        #[cfg(feature = "esp32-log")]
        println!("[Renderer.clear] chain set to {:#010x}", color.packed());
    }

    /// Raw pixel buffer in chain order
    pub const fn pixels(&self) -> &[Color; PIXEL_COUNT] {
        &self.pixels
    }

    /// Gamma-corrected pixels in chain order, as last sent by `render`
    pub fn corrected_pixels(&self) -> [Color; PIXEL_COUNT] {
        self.pixels.map(correct_color)
    }

    pub const fn config(&self) -> &GlyphConfig {
        &self.config
    }

    /// Get a reference to the transmitter.
    pub const fn output(&self) -> &T {
        &self.output
    }

    /// Get a mutable reference to the transmitter.
    pub fn output_mut(&mut self) -> &mut T {
        &mut self.output
    }

    /// Consume the renderer and return the transmitter.
    pub fn into_output(self) -> T {
        self.output
    }
}
