use super::*;
use crate::foundation::core::Canvas;
use kurbo::Shape as _;

fn assert_near(px: [u8; 4], want: Rgba8) {
    let want = want.premul();
    for c in 0..4 {
        assert!(
            px[c].abs_diff(want[c]) <= 2,
            "pixel {px:?} not near {want:?}"
        );
    }
}

#[test]
fn round_caps_extend_past_the_endpoints() {
    let butt = stroke_outline(Point::new(0.0, 0.0), Point::new(0.0, -10.0), 4.0, Cap::Butt);
    let round = stroke_outline(Point::new(0.0, 0.0), Point::new(0.0, -10.0), 4.0, Cap::Round);

    let b = butt.bounding_box();
    let r = round.bounding_box();
    assert!((b.width() - 4.0).abs() < 0.1);
    assert!((b.height() - 10.0).abs() < 0.1);
    assert!((r.height() - 14.0).abs() < 0.1);
}

#[test]
fn clear_and_rect_rasterize_with_their_colors() {
    let bg = Rgba8::opaque(0xBD, 0xBD, 0xBD);
    let fg = Rgba8::opaque(0x31, 0x1B, 0x92);
    let list = DisplayList {
        canvas: Canvas::new(32, 32).unwrap(),
        ops: vec![
            DrawOp::Clear { color: bg },
            DrawOp::FillRect {
                rect: Rect::new(0.0, 0.0, 8.0, 8.0),
                transform: Affine::translate((16.0, 16.0)),
                color: fg,
            },
        ],
    };

    let frame = CpuBackend::new().render(&list).unwrap();
    assert_eq!(frame.width, 32);
    assert_eq!(frame.data.len(), 32 * 32 * 4);
    assert!(frame.premultiplied);
    assert_near(frame.pixel(1, 1).unwrap(), bg);
    assert_near(frame.pixel(20, 20).unwrap(), fg);
    assert_near(frame.pixel(12, 20).unwrap(), bg);
}

#[test]
fn mirrored_rect_is_filled_above_the_origin() {
    let fg = Rgba8::opaque(255, 0, 0);
    let list = DisplayList {
        canvas: Canvas::new(32, 32).unwrap(),
        ops: vec![DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, 8.0, 8.0),
            transform: Affine::translate((8.0, 16.0)) * Affine::scale_non_uniform(1.0, -1.0),
            color: fg,
        }],
    };
    let frame = CpuBackend::new().render(&list).unwrap();
    assert_near(frame.pixel(12, 12).unwrap(), fg);
    assert_eq!(frame.pixel(12, 20).unwrap(), [0, 0, 0, 0]);
}

#[test]
fn line_is_stroked_under_its_transform() {
    let fg = Rgba8::opaque(0, 0, 255);
    let list = DisplayList {
        canvas: Canvas::new(40, 40).unwrap(),
        ops: vec![DrawOp::Line {
            from: Point::ZERO,
            to: Point::new(0.0, -10.0),
            transform: Affine::translate((20.0, 20.0)) * Affine::rotate(90f64.to_radians()),
            width: 4.0,
            cap: Cap::Round,
            color: fg,
        }],
    };
    let frame = CpuBackend::new().render(&list).unwrap();
    // Rotated clockwise the line runs from (20,20) to (30,20).
    assert_near(frame.pixel(25, 20).unwrap(), fg);
    assert_eq!(frame.pixel(20, 10).unwrap(), [0, 0, 0, 0]);
}

#[test]
fn backend_reuses_its_surface_across_sizes() {
    let mut backend = CpuBackend::new();
    let small = DisplayList {
        canvas: Canvas::new(4, 4).unwrap(),
        ops: vec![DrawOp::Clear {
            color: Rgba8::opaque(1, 2, 3),
        }],
    };
    let big = DisplayList {
        canvas: Canvas::new(8, 6).unwrap(),
        ops: Vec::new(),
    };
    assert_eq!(backend.render(&small).unwrap().data.len(), 4 * 4 * 4);
    let frame = backend.render(&big).unwrap();
    assert_eq!(frame.data.len(), 8 * 6 * 4);
    assert!(frame.data.iter().all(|&b| b == 0));
}
