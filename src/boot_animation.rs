//! Boot animation
//!
//! Ramps the whole glyph from black up through gray. Like the rest of the
//! crate it never sleeps: each [`BootAnimation::tick`] renders one step and
//! tells the caller how long to wait before the next one.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Color;
use crate::frame::Frame;
use crate::{PixelTransmitter, Renderer};

/// Number of animation steps
pub const BOOT_STEPS: u8 = 25;

/// Gray level added per step
pub const BOOT_STEP_LEVEL: u8 = 10;

/// Time each step stays on the glyph
pub const BOOT_STEP_DURATION: Duration = Duration::from_millis(100);

/// Result of an animation tick
#[derive(Debug, Clone, Copy)]
pub struct AnimationStep {
    /// Index of the step that was just rendered
    pub index: u8,
    /// The deadline for the next step.
    pub next_deadline: Instant,
    /// How long to wait until the next step (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Gray ramp shown while the badge boots
#[derive(Debug, Clone)]
pub struct BootAnimation {
    steps: u8,
    step_level: u8,
    step_duration: Duration,
    next_step: u8,
    next_deadline: Instant,
    frame: Frame,
}

impl BootAnimation {
    pub const fn new() -> Self {
        Self::with_timing(BOOT_STEPS, BOOT_STEP_LEVEL, BOOT_STEP_DURATION)
    }

    pub const fn with_timing(steps: u8, step_level: u8, step_duration: Duration) -> Self {
        Self {
            steps,
            step_level,
            step_duration,
            next_step: 0,
            next_deadline: Instant::from_millis(0),
            frame: Frame::new(),
        }
    }

    /// Gray color shown at `step`, saturating at full white
    pub const fn step_color(&self, step: u8) -> Color {
        Color::gray(step.saturating_mul(self.step_level))
    }

    pub const fn is_finished(&self) -> bool {
        self.next_step >= self.steps
    }

    /// Restart from the first step
    pub fn reset(&mut self) {
        self.next_step = 0;
        self.next_deadline = Instant::from_millis(0);
        self.frame = Frame::new();
    }

    /// Render the next step.
    ///
    /// Returns `None` once every step has been shown. The caller is
    /// responsible for waiting until `next_deadline` before calling `tick`
    /// again.
    pub fn tick<T: PixelTransmitter>(
        &mut self,
        now: Instant,
        renderer: &mut Renderer<T>,
    ) -> Option<AnimationStep> {
        if self.is_finished() {
            return None;
        }

        // Restart the schedule after a stall instead of bursting through steps
        let max_drift = self.step_duration.as_millis() * 2;
        if now.as_millis() > self.next_deadline.as_millis() + max_drift {
            self.next_deadline = now;
        }

        let index = self.next_step;
        self.frame.fill(self.step_color(index));
        renderer.render(&self.frame);
        self.next_step += 1;

        #[cfg(feature = "esp32-log")]
        println!("[BootAnimation.tick] frame: {}", index);

        self.next_deadline += self.step_duration;
        let sleep_duration = if self.next_deadline.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_deadline.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        Some(AnimationStep {
            index,
            next_deadline: self.next_deadline,
            sleep_duration,
        })
    }
}

impl Default for BootAnimation {
    fn default() -> Self {
        Self::new()
    }
}
