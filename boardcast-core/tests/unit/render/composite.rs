use super::*;

use crate::foundation::core::Rgba8;

const WHITE: Rgba8 = Rgba8 {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};

fn pixel(canvas: &FrameCanvas, y: u32, x: u32) -> [u8; 4] {
    let i = ((y * canvas.width() + x) * 4) as usize;
    canvas.data()[i..i + 4].try_into().unwrap()
}

#[test]
fn from_raw_checks_length() {
    assert!(ImageRgba::from_raw(2, 2, vec![0; 16]).is_ok());
    assert!(ImageRgba::from_raw(2, 2, vec![0; 15]).is_err());
}

#[test]
fn fill_requires_matching_size() {
    let mut canvas = FrameCanvas::new(4, 4);
    assert!(canvas.fill(&ImageRgba::solid(4, 4, WHITE)).is_ok());
    assert_eq!(pixel(&canvas, 3, 3), [255, 255, 255, 255]);
    assert!(canvas.fill(&ImageRgba::solid(2, 4, WHITE)).is_err());
}

#[test]
fn opaque_draw_replaces_pixels() {
    let mut canvas = FrameCanvas::new(4, 4);
    draw_centered(&mut canvas, &ImageRgba::solid(2, 2, WHITE), Coord::new(2, 2), 1.0);
    assert_eq!(pixel(&canvas, 1, 1), [255, 255, 255, 255]);
    assert_eq!(pixel(&canvas, 2, 2), [255, 255, 255, 255]);
    // Outside the 2x2 patch.
    assert_eq!(pixel(&canvas, 3, 3), [0, 0, 0, 0]);
    assert_eq!(pixel(&canvas, 0, 0), [0, 0, 0, 0]);
}

#[test]
fn half_opacity_blends_toward_the_source() {
    let mut canvas = FrameCanvas::new(2, 2);
    canvas.fill(&ImageRgba::solid(2, 2, Rgba8::BLACK)).unwrap();
    draw_centered(&mut canvas, &ImageRgba::solid(2, 2, WHITE), Coord::new(1, 1), 0.5);
    let [r, g, b, a] = pixel(&canvas, 0, 0);
    for c in [r, g, b] {
        assert!((c as i32 - 128).abs() <= 1, "channel {c} should be ~128");
    }
    assert_eq!(a, 255);
}

#[test]
fn zero_opacity_and_transparent_source_are_noops() {
    let mut canvas = FrameCanvas::new(2, 2);
    draw_centered(&mut canvas, &ImageRgba::solid(2, 2, WHITE), Coord::new(1, 1), 0.0);
    assert_eq!(pixel(&canvas, 0, 0), [0, 0, 0, 0]);

    let clear = ImageRgba::solid(2, 2, Rgba8::default());
    draw_centered(&mut canvas, &clear, Coord::new(1, 1), 1.0);
    assert_eq!(pixel(&canvas, 0, 0), [0, 0, 0, 0]);
}

#[test]
fn offscreen_draws_clip_instead_of_panicking() {
    let mut canvas = FrameCanvas::new(4, 4);
    let img = ImageRgba::solid(4, 4, WHITE);
    draw_centered(&mut canvas, &img, Coord::new(0, 0), 1.0);
    draw_centered(&mut canvas, &img, Coord::new(-10, -10), 1.0);
    draw_centered(&mut canvas, &img, Coord::new(100, 100), 1.0);
    // The corner overlapped by the first draw got painted.
    assert_eq!(pixel(&canvas, 0, 0), [255, 255, 255, 255]);
    assert_eq!(pixel(&canvas, 3, 3), [0, 0, 0, 0]);
}
