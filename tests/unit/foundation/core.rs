use super::*;

#[test]
fn fps_from_tick_delay() {
    let fps = Fps::from_tick_ms(20).unwrap();
    assert_eq!(fps.as_f64(), 50.0);
    assert!((fps.frame_duration_secs() - 0.02).abs() < 1e-12);
    assert!(Fps::from_tick_ms(0).is_err());
    assert!(Fps::new(0, 1).is_err());
}

#[test]
fn canvas_rejects_empty_and_oversized() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());

    let c = Canvas::new(360, 720).unwrap();
    assert_eq!(c.min_side(), 360.0);
    assert_eq!(c.h(), 720.0);
}

#[test]
fn opaque_premul_is_identity() {
    let c = Rgba8::opaque(0x31, 0x1B, 0x92);
    assert_eq!(c.premul(), c.to_array());

    let half = Rgba8 {
        r: 255,
        g: 0,
        b: 0,
        a: 128,
    };
    assert_eq!(half.premul(), [128, 0, 0, 128]);
}
