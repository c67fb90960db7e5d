mod tests {
    use myrtio_strip_light::{
        LightConfig, LightController, LightError, Rgb, SmartLedsSink, SmartLedsSinkError,
        StripSink, color::rgb_to_u32, sink::DEFAULT_SINK_BRIGHTNESS,
    };
    use smart_leds::SmartLedsWrite;

    #[derive(Debug, Default)]
    struct MockWriter {
        writes: Vec<Vec<Rgb>>,
        broken: bool,
    }

    impl SmartLedsWrite for MockWriter {
        type Error = ();
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.broken {
                return Err(());
            }
            self.writes.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    #[test]
    fn test_render_writes_frame() {
        let mut sink: SmartLedsSink<MockWriter, 8> = SmartLedsSink::new(MockWriter::default());
        assert_eq!(sink.brightness(), DEFAULT_SINK_BRIGHTNESS);

        sink.render(&[rgb_to_u32(Rgb::new(255, 0, 0)); 3]).unwrap();
        assert_eq!(sink.writer().writes, vec![vec![Rgb::new(255, 0, 0); 3]]);
    }

    #[test]
    fn test_brightness_rewrites_last_frame() {
        let mut sink: SmartLedsSink<MockWriter, 8> = SmartLedsSink::new(MockWriter::default());

        // Nothing rendered yet, nothing to rewrite
        sink.set_brightness(128).unwrap();
        assert!(sink.writer().writes.is_empty());

        sink.render(&[rgb_to_u32(Rgb::new(255, 128, 0)); 2]).unwrap();
        sink.set_brightness(0).unwrap();

        let writes = &sink.writer().writes;
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0], vec![Rgb::new(128, 64, 0); 2]);
        assert_eq!(writes[1], vec![Rgb::new(0, 0, 0); 2]);
    }

    #[test]
    fn test_frame_too_long() {
        let mut sink: SmartLedsSink<MockWriter, 2> = SmartLedsSink::new(MockWriter::default());
        assert_eq!(
            sink.render(&[0; 3]),
            Err(SmartLedsSinkError::FrameTooLong(3))
        );
    }

    #[test]
    fn test_driver_error() {
        let writer = MockWriter {
            broken: true,
            ..MockWriter::default()
        };
        let mut sink: SmartLedsSink<MockWriter, 2> = SmartLedsSink::new(writer);
        assert_eq!(sink.render(&[0; 2]), Err(SmartLedsSinkError::Driver(())));
    }

    #[test]
    fn test_controller_over_smart_leds() {
        let config = LightConfig::new("Shelf").unwrap().with_leds(4);
        let sink: SmartLedsSink<MockWriter, 16> = SmartLedsSink::new(MockWriter::default());
        let mut controller: LightController<_, 16> = LightController::new(sink, config).unwrap();

        controller.set_brightness(50).unwrap();
        controller.set_saturation(100).unwrap();
        controller.set_hue(120).unwrap();

        let writes = &controller.sink().writer().writes;
        assert_eq!(controller.sink().brightness(), 128);
        assert_eq!(writes.last().unwrap(), &vec![Rgb::new(0, 128, 0); 4]);

        let mut broken = controller.into_sink().into_inner();
        broken.broken = true;
        let config = LightConfig::new("Shelf").unwrap().with_leds(4);
        let mut controller: LightController<_, 16> =
            LightController::new(SmartLedsSink::<_, 16>::new(broken), config).unwrap();
        assert_eq!(controller.set_hue(10), Err(LightError::SinkUnavailable));
    }
}
