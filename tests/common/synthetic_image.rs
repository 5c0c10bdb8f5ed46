use sprite_matte::image::RgbaImage8;

/// Near-white, partially translucent canvas as found in the source sheets.
pub const CANVAS: [u8; 4] = [255, 255, 255, 180];
/// Dark, slightly translucent outline stroke.
pub const OUTLINE: [u8; 4] = [30, 30, 30, 150];
/// Opaque body color.
pub const FILL: [u8; 4] = [200, 80, 60, 255];

/// Disc of radius `r` centred at (`cx`, `cy`) on a canvas: an `OUTLINE` ring
/// around an opaque `FILL` interior.
pub fn disc_sprite(width: usize, height: usize, cx: usize, cy: usize, r: usize) -> RgbaImage8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(r >= 2, "radius too small for an outline");

    let mut img = RgbaImage8::filled(width, height, CANVAS);
    let (r_out, r_in) = ((r * r) as i64, ((r - 1) * (r - 1)) as i64);
    for y in 0..height {
        for x in 0..width {
            let dx = x as i64 - cx as i64;
            let dy = y as i64 - cy as i64;
            let d2 = dx * dx + dy * dy;
            if d2 <= r_in {
                img.set(x, y, FILL);
            } else if d2 <= r_out {
                img.set(x, y, OUTLINE);
            }
        }
    }
    img
}

/// Serpentine maze: opaque walls on odd columns, each with a single gap that
/// alternates between the bottom and top rows, on a `CANVAS` background.
pub fn serpentine(size: usize) -> RgbaImage8 {
    let mut img = RgbaImage8::filled(size, size, CANVAS);
    for x in (1..size).step_by(2) {
        let gap = if x % 4 == 1 { size - 1 } else { 0 };
        for y in (0..size).filter(|&y| y != gap) {
            img.set(x, y, [0, 0, 0, 255]);
        }
    }
    img
}
