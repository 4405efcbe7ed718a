//! `smart-leds` output adapter
//!
//! Lets the renderer drive any `SmartLedsWrite` implementation (RMT, SPI,
//! PIO drivers). Pixels are collected until the frame boundary and then
//! written as one burst; the driver handles reset timing itself.

use embassy_time::Duration;
use heapless::Vec;
use smart_leds::{RGB8, SmartLedsWrite};

use crate::PixelTransmitter;
use crate::color::Color;
use crate::topology::PIXEL_COUNT;

/// Transmitter backed by a `smart-leds` driver
pub struct SmartLedsOutput<W> {
    writer: W,
    pending: Vec<RGB8, PIXEL_COUNT>,
}

impl<W> SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    RGB8: Into<W::Color>,
{
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            pending: Vec::new(),
        }
    }

    /// Number of pixels waiting for the next latch
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush(&mut self) {
        // WS2812 has no ack channel, a failed burst is simply lost.
        let _ = self.writer.write(self.pending.iter().copied());
        self.pending.clear();
    }
}

impl<W> PixelTransmitter for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    RGB8: Into<W::Color>,
{
    fn transmit(&mut self, pixel: Color) {
        let rgb = RGB8::from(pixel);
        if let Err(rgb) = self.pending.push(rgb) {
            self.flush();
            let _ = self.pending.push(rgb);
        }
    }

    fn latch(&mut self, _hold: Duration) {
        if !self.pending.is_empty() {
            self.flush();
        }
    }
}
