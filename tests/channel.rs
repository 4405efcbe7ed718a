mod tests {
    use myrtio_glyph::channel::{Channel, TryReceiveError, TrySendError};
    use myrtio_glyph::gamma::correct_color;
    use myrtio_glyph::{
        Color, Duration, FifoTransmitter, Frame, GlyphConfig, PIXEL_COUNT, Renderer, Topology,
        TxChannel, TxWord,
    };

    #[test]
    fn test_channel_bounded() {
        let channel: Channel<u8, 2> = Channel::new();
        let sender = channel.sender();
        let receiver = channel.receiver();

        assert_eq!(sender.try_send(1), Ok(()));
        assert_eq!(sender.try_send(2), Ok(()));
        assert_eq!(sender.try_send(3), Err(TrySendError(3)));
        assert_eq!(channel.len(), 2);

        assert_eq!(receiver.try_receive(), Ok(1));
        assert_eq!(receiver.try_receive(), Ok(2));
        assert_eq!(receiver.try_receive(), Err(TryReceiveError));
        assert!(channel.is_empty());
    }

    #[test]
    fn test_fifo_transmitter_frame() {
        let channel: TxChannel<32> = TxChannel::new();
        let transmitter = FifoTransmitter::new(channel.sender());
        let mut renderer = Renderer::new(transmitter, &GlyphConfig::new(Topology::Breadboard));

        let color = Color::new(128, 64, 255);
        renderer.render(&Frame::filled(color));
        assert_eq!(channel.len(), PIXEL_COUNT + 1);

        let receiver = channel.receiver();
        let mut words = Vec::new();
        while let Ok(word) = receiver.try_receive() {
            words.push(word);
        }

        let corrected = correct_color(color).wire_word();
        assert_eq!(words[21], TxWord::Pixel(corrected));
        assert_eq!(words[4], TxWord::Pixel(0));
        assert_eq!(words[PIXEL_COUNT], TxWord::Latch(Duration::from_millis(1)));
    }

    #[test]
    fn test_fifo_transmitter_clear_words() {
        let channel: TxChannel<32> = TxChannel::new();
        let mut renderer = Renderer::new(
            FifoTransmitter::new(channel.sender()),
            &GlyphConfig::default(),
        );
        renderer.clear(Color::new(0x11, 0x22, 0x33));

        let receiver = channel.receiver();
        for _ in 0..PIXEL_COUNT {
            assert_eq!(receiver.try_receive(), Ok(TxWord::Pixel(0x3322_1100)));
        }
        assert_eq!(
            receiver.try_receive(),
            Ok(TxWord::Latch(Duration::from_millis(10)))
        );
        assert_eq!(receiver.try_receive(), Err(TryReceiveError));
    }
}
