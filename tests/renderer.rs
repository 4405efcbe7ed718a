mod tests {
    use myrtio_glyph::gamma::{GAMMA_TABLE, correct_color};
    use myrtio_glyph::{
        Color, Duration, FRAME_LEN, Frame, GlyphConfig, PIXEL_COUNT, PixelTransmitter, Renderer,
        Topology,
    };

    const BREADBOARD_UNMAPPED: [usize; 10] = [4, 5, 6, 7, 11, 13, 17, 18, 19, 20];

    /// Transmitter that records everything sent to it
    #[derive(Default)]
    struct Recorder {
        pixels: Vec<Color>,
        latches: Vec<Duration>,
    }

    impl Recorder {
        /// Pixels of the most recent burst
        fn last_burst(&self) -> &[Color] {
            &self.pixels[self.pixels.len() - PIXEL_COUNT..]
        }
    }

    impl PixelTransmitter for Recorder {
        fn transmit(&mut self, pixel: Color) {
            self.pixels.push(pixel);
        }

        fn latch(&mut self, hold: Duration) {
            self.latches.push(hold);
        }
    }

    fn breadboard() -> Renderer<Recorder> {
        Renderer::new(Recorder::default(), &GlyphConfig::new(Topology::Breadboard))
    }

    #[test]
    fn test_render_black_frame() {
        let mut renderer = breadboard();
        renderer.render(&Frame::new());

        let output = renderer.output();
        assert_eq!(output.pixels, vec![Color::BLACK; PIXEL_COUNT]);
        assert_eq!(output.latches, vec![Duration::from_millis(1)]);
    }

    #[test]
    fn test_render_remaps_and_corrects() {
        let mut renderer = breadboard();
        let color = Color::new(128, 64, 255);
        renderer.render(&Frame::filled(color));

        let burst = renderer.output().last_burst();
        for &position in Topology::Breadboard.remap() {
            assert_eq!(burst[position], Color::new(37, 5, 255));
            assert_eq!(renderer.pixels()[position], color);
        }
        for position in BREADBOARD_UNMAPPED {
            assert_eq!(burst[position], Color::BLACK);
            assert_eq!(renderer.pixels()[position], Color::BLACK);
        }
    }

    #[test]
    fn test_render_single_led() {
        let mut renderer = breadboard();
        let mut frame = Frame::new();
        frame.set(0, Color::WHITE).unwrap();
        frame.set(13, Color::new(200, 0, 0)).unwrap();
        renderer.render(&frame);

        let burst = renderer.output().last_burst();
        assert_eq!(burst[21], Color::WHITE);
        assert_eq!(burst[14], Color::new(129, 0, 0));
        let lit = burst.iter().filter(|&&pixel| pixel != Color::BLACK).count();
        assert_eq!(lit, 2);
    }

    #[test]
    fn test_render_dim_gray() {
        let mut renderer = breadboard();
        renderer.render(&Frame::filled(Color::gray(10)));

        let level = GAMMA_TABLE[10];
        let expected = Color::from_lanes([level, level, level, GAMMA_TABLE[0]]);
        for &position in Topology::Breadboard.remap() {
            assert_eq!(renderer.corrected_pixels()[position], expected);
            assert_eq!(renderer.output().last_burst()[position], expected);
        }
    }

    #[test]
    fn test_render_corrects_padding_byte() {
        let mut renderer = breadboard();
        renderer.render(&Frame::filled(Color::from_lanes([100, 100, 100, 100])));

        let burst = renderer.output().last_burst();
        assert_eq!(burst[21].lanes(), [19, 19, 19, 19]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut renderer = breadboard();
        let frame = Frame::filled(Color::new(250, 28, 64));
        renderer.render(&frame);
        let first = renderer.output().last_burst().to_vec();
        renderer.render(&frame);
        let second = renderer.output().last_burst().to_vec();

        assert_eq!(first, second);
        assert_eq!(renderer.output().pixels.len(), 2 * PIXEL_COUNT);
        assert_eq!(renderer.output().latches.len(), 2);
    }

    #[test]
    fn test_render_leaves_unmapped_slots() {
        let mut renderer = breadboard();
        let stale = Color::new(200, 0, 0);
        renderer.clear(stale);
        renderer.render(&Frame::filled(Color::new(0, 0, 255)));

        for position in BREADBOARD_UNMAPPED {
            assert_eq!(renderer.pixels()[position], stale);
            assert_eq!(
                renderer.output().last_burst()[position],
                correct_color(stale)
            );
        }
        for &position in Topology::Breadboard.remap() {
            assert_eq!(renderer.pixels()[position], Color::new(0, 0, 255));
        }
    }

    #[test]
    fn test_render_overwrites_previous_frame() {
        let mut renderer = breadboard();
        renderer.render(&Frame::filled(Color::WHITE));
        renderer.render(&Frame::new());

        assert_eq!(renderer.output().last_burst(), &[Color::BLACK; PIXEL_COUNT][..]);
    }

    #[test]
    fn test_clear_bypasses_gamma() {
        let mut renderer = breadboard();
        let color = Color::new(128, 10, 200);
        renderer.clear(color);

        let output = renderer.output();
        assert_eq!(output.pixels, vec![color; PIXEL_COUNT]);
        assert_eq!(output.latches, vec![Duration::from_millis(10)]);
        assert_eq!(renderer.pixels(), &[color; PIXEL_COUNT]);
    }

    #[test]
    fn test_clear_black_blanks_chain() {
        let mut renderer = breadboard();
        renderer.render(&Frame::filled(Color::WHITE));
        renderer.clear(Color::BLACK);

        assert_eq!(renderer.output().last_burst(), &[Color::BLACK; PIXEL_COUNT][..]);
    }

    #[test]
    fn test_pcb_topology() {
        let config = GlyphConfig::new(Topology::Pcb);
        let mut renderer = Renderer::new(Recorder::default(), &config);
        let mut frame = Frame::new();
        for index in 0..FRAME_LEN {
            frame.set(index, Color::WHITE).unwrap();
        }
        renderer.render(&frame);

        let burst = renderer.output().last_burst();
        assert!(burst[..FRAME_LEN].iter().all(|&pixel| pixel == Color::WHITE));
        assert!(burst[FRAME_LEN..].iter().all(|&pixel| pixel == Color::BLACK));
        assert_eq!(renderer.config().topology, Topology::Pcb);
    }

    #[test]
    fn test_custom_latch() {
        let config = GlyphConfig {
            frame_latch: Duration::from_millis(5),
            ..GlyphConfig::default()
        };
        let mut renderer = Renderer::new(Recorder::default(), &config);
        renderer.render(&Frame::new());

        let recorder = renderer.into_output();
        assert_eq!(recorder.latches, vec![Duration::from_millis(5)]);
    }
}
