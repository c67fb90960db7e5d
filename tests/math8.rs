mod tests {
    use myrtio_strip_light::math8::{percent8, scale8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
        assert_eq!(scale8(255, 255), 255);
    }

    #[test]
    fn test_percent8() {
        assert_eq!(percent8(0), 0);
        assert_eq!(percent8(1), 3);
        assert_eq!(percent8(50), 128);
        assert_eq!(percent8(99), 252);
        assert_eq!(percent8(100), 255);
        assert_eq!(percent8(200), 255);
    }
}
