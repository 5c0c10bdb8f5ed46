mod common;

use common::synthetic_image::{disc_sprite, serpentine, FILL, OUTLINE};
use proptest::prelude::*;
use sprite_matte::image::{RgbaImage8, VisitedGrid};
use sprite_matte::stages::{bounding_box, classify_background, compact};
use sprite_matte::{matte_sprite, BoundingBox, MatteOptions, SENTINEL};

#[test]
fn disc_sprite_is_cut_out_and_trimmed() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (cx, cy, r) = (40usize, 25usize, 12usize);
    let sprite = disc_sprite(96, 64, cx, cy, r);

    let out = matte_sprite(sprite, &MatteOptions::default()).expect("matting succeeds");
    assert_eq!(
        out.bbox,
        BoundingBox {
            top: cy - r,
            bottom: cy + r + 1,
            left: cx - r,
            right: cx + r + 1,
        }
    );
    assert_eq!((out.image.w, out.image.h), (2 * r + 1, 2 * r + 1));

    // Canvas corners of the crop are ignorable background.
    assert_eq!(out.image.get(0, 0), SENTINEL);
    // Outline reached by the fill is promoted to opaque; the body is untouched.
    assert_eq!(out.image.get(0, r), [OUTLINE[0], OUTLINE[1], OUTLINE[2], 255]);
    assert_eq!(out.image.get(r, r), FILL);
    // The whole outline is reachable through translucent pixels, so no
    // partial alpha survives anywhere in the cutout.
    assert!(out.image.data.iter().all(|px| px[3] == 0 || px[3] == 255));
    assert!(out.flood.foreground > 0);
    assert!(out.flood.background > 0);
}

#[test]
fn serpentine_corridor_is_fully_traversed() {
    let size = 33;
    let mut img = serpentine(size);
    let mut visited = VisitedGrid::new(size, size);
    let stats = classify_background(&mut img, &mut visited, 127).unwrap();

    let walls = 16 * (size - 1);
    assert_eq!(stats.background, size * size - walls);
    assert_eq!(stats.barriers, walls);
    assert_eq!(visited.count_visited(), size * size);
    for y in 0..size {
        for x in (0..size).step_by(2) {
            assert_eq!(img.alpha(x, y), 0, "corridor pixel ({x}, {y})");
        }
    }
}

#[test]
fn flood_handles_4096_square_without_recursion_limits() {
    let n = 4096;
    let mut img = RgbaImage8::filled(n, n, [250, 250, 250, 100]);
    img.set(n - 1, n - 1, [0, 0, 0, 255]);
    let mut visited = VisitedGrid::new(n, n);

    let stats = classify_background(&mut img, &mut visited, 127).unwrap();
    assert_eq!(stats.background, n * n - 1);
    assert_eq!(stats.barriers, 1);
    assert_eq!(img.alpha(n / 2, n / 2), 0);
    assert_eq!(img.get(n - 1, n - 1), [0, 0, 0, 255]);
}

#[test]
fn pipeline_output_is_a_fixed_point() {
    let sprite = disc_sprite(64, 64, 30, 34, 10);
    let once = matte_sprite(sprite, &MatteOptions::default()).unwrap().image;
    let twice = matte_sprite(once.clone(), &MatteOptions::default())
        .unwrap()
        .image;
    assert_eq!(once, twice);
}

#[test]
fn compact_of_sentinel_only_image_returns_it_whole() {
    let img = RgbaImage8::filled(13, 9, SENTINEL);
    let (out, bbox) = compact(img.clone()).unwrap();
    assert_eq!(out, img);
    assert_eq!(bbox, BoundingBox::full(13, 9));
}

proptest! {
    #[test]
    fn single_content_pixel_bounds_exactly(
        (w, h, x0, y0) in (1usize..40, 1usize..40)
            .prop_flat_map(|(w, h)| (Just(w), Just(h), 0..w, 0..h)),
        px in any::<[u8; 4]>().prop_filter("must differ from sentinel", |p| *p != SENTINEL),
    ) {
        let mut img = RgbaImage8::filled(w, h, SENTINEL);
        img.set(x0, y0, px);
        let bbox = bounding_box(&img);
        prop_assert_eq!(bbox, BoundingBox { top: y0, bottom: y0 + 1, left: x0, right: x0 + 1 });

        let (out, _) = compact(img).unwrap();
        prop_assert_eq!((out.w, out.h), (1, 1));
        prop_assert_eq!(out.get(0, 0), px);
    }
}
