#![no_std]

pub mod boot_animation;
pub mod channel;
pub mod color;
pub mod frame;
pub mod gamma;
pub mod output;
pub mod renderer;
pub mod topology;

pub use boot_animation::{AnimationStep, BootAnimation};
pub use channel::{FifoTransmitter, TxChannel, TxWord};
pub use color::Color;
pub use frame::{FRAME_LEN, Frame, FrameError};
pub use gamma::{correct, correct_color, ws2812_lut};
pub use output::SmartLedsOutput;
pub use renderer::{GlyphConfig, Renderer};
pub use topology::{PIXEL_COUNT, Topology};

pub use embassy_time::{Duration, Instant};

/// Abstract pixel transmitter
///
/// Implement this trait to push pixels onto a physical LED chain.
/// The renderer is generic over this trait.
pub trait PixelTransmitter {
    /// Send one pixel, blocking while the transport is busy
    fn transmit(&mut self, pixel: Color);

    /// Mark the end of a frame; the line must stay idle for at least `hold`
    fn latch(&mut self, hold: Duration);
}
