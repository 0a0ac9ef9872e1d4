//! End-to-end cutout scenarios.
//!
//! Each test pushes encoded bytes through the full pipeline: decode,
//! matte, encode to PNG, decode again, then checks the surviving pixels.

use decal_core::{PixelGrid, Rgb};
use decal_matte::{cut_out, CanvasSize, KeyColor, MatteParams};
use decal_media::{decode_bytes, encode_png};

// ── Helpers ────────────────────────────────────────────────────

fn run_pipeline(source: PixelGrid, params: &MatteParams) -> PixelGrid {
    let bytes = encode_png(&source).unwrap();
    let decoded = decode_bytes(&bytes).unwrap();
    let result = cut_out(decoded, params);
    let encoded = encode_png(&result.pixels).unwrap();
    decode_bytes(&encoded).unwrap()
}

fn green_field_with_red_square(size: u32, square: std::ops::Range<u32>) -> PixelGrid {
    let mut grid = PixelGrid::filled(size, size, Rgb::GREEN);
    for y in square.clone() {
        for x in square.clone() {
            grid.put_rgba(x, y, [255, 0, 0, 255]);
        }
    }
    grid
}

// ── Scenario: pure key image ───────────────────────────────────

#[test]
fn pure_key_image_comes_back_fully_transparent() {
    let source = PixelGrid::filled(100, 100, Rgb::GREEN);
    let params = MatteParams {
        similarity: 40.0,
        ..MatteParams::default()
    };
    let cutout = run_pipeline(source, &params);

    assert_eq!(cutout.width(), 100);
    assert_eq!(cutout.height(), 100);
    for idx in 0..cutout.len() {
        assert_eq!(cutout.alpha_at(idx), 0);
    }
}

// ── Scenario: centered red square ──────────────────────────────

#[test]
fn centered_square_keeps_opacity_with_a_feathered_rim() {
    let source = green_field_with_red_square(200, 70..130);
    let cutout = run_pipeline(source, &MatteParams::default());

    let square = 70u32..130;
    let interior = 71u32..129;
    for y in 0..200u32 {
        for x in 0..200u32 {
            let alpha = cutout.rgba(x, y)[3];
            let in_square = square.contains(&x) && square.contains(&y);
            let in_interior = interior.contains(&x) && interior.contains(&y);
            let beside_square = !in_square
                && ((square.contains(&x) && (y == 69 || y == 130))
                    || (square.contains(&y) && (x == 69 || x == 130)));

            if in_interior {
                assert_eq!(alpha, 255, "interior ({x},{y})");
            } else if in_square || beside_square {
                assert!(alpha > 0 && alpha < 255, "rim ({x},{y}) got {alpha}");
            } else {
                assert_eq!(alpha, 0, "background ({x},{y})");
            }
        }
    }

    // Red is 120 degrees off the key hue, so spill suppression leaves
    // the subject's color alone, even on its edges.
    let [r, g, b, _] = cutout.rgba(70, 100);
    assert_eq!((r, g, b), (255, 0, 0));
}

// ── Scenario: custom key with letterbox ────────────────────────

#[test]
fn blue_key_letterboxes_onto_the_fixed_canvas() {
    let mut source = PixelGrid::filled(300, 100, Rgb::BLUE);
    for y in 30..70 {
        for x in 100..200 {
            source.put_rgba(x, y, [255, 255, 255, 255]);
        }
    }
    let params = MatteParams {
        key_color: KeyColor::parse_lossy("#0000ff"),
        canvas: Some(CanvasSize::new(370, 320)),
        ..MatteParams::default()
    };
    let cutout = run_pipeline(source, &params);

    assert_eq!(cutout.width(), 370);
    assert_eq!(cutout.height(), 320);

    // The 300x100 source scales by 1.2333 to 370x123, centered: rows
    // above and below the fitted band are pure letterbox margin.
    for y in [0u32, 50, 90, 230, 280, 319] {
        for x in 0..370u32 {
            assert_eq!(cutout.rgba(x, y)[3], 0, "margin ({x},{y})");
        }
    }

    // The white subject lands centered and survives matting.
    let [r, g, b, a] = cutout.rgba(185, 160);
    assert_eq!(a, 255);
    assert!(r > 200 && g > 200 && b > 200);

    // The blue field around it is gone.
    assert_eq!(cutout.rgba(20, 160)[3], 0);
    assert_eq!(cutout.rgba(350, 160)[3], 0);
}

// ── Cross-cutting properties ───────────────────────────────────

#[test]
fn image_with_no_key_color_round_trips_unchanged() {
    let mut source = PixelGrid::filled(40, 40, Rgb::new(200, 30, 40));
    for y in 10..20 {
        for x in 10..20 {
            source.put_rgba(x, y, [30, 40, 220, 255]);
        }
    }
    let original = source.as_raw().to_vec();
    let cutout = run_pipeline(source, &MatteParams::default());

    assert_eq!(cutout.as_raw(), original.as_slice());
}

#[test]
fn enclosed_hole_clears_end_to_end() {
    // A red frame sealing off a 5x5 pure-green pocket.
    let mut source = PixelGrid::filled(20, 20, Rgb::new(200, 30, 40));
    for y in 8..13 {
        for x in 8..13 {
            source.put_rgba(x, y, [0, 255, 0, 255]);
        }
    }
    let cutout = run_pipeline(source, &MatteParams::default());

    for y in 9..12u32 {
        for x in 9..12u32 {
            assert_eq!(cutout.rgba(x, y)[3], 0, "pocket ({x},{y})");
        }
    }
    // The frame stays fully opaque away from the pocket rim.
    assert_eq!(cutout.rgba(0, 0)[3], 255);
    assert_eq!(cutout.rgba(19, 19)[3], 255);
    assert_eq!(cutout.rgba(4, 10)[3], 255);
}

#[test]
fn similarity_zero_still_clears_the_exact_key() {
    let source = PixelGrid::filled(30, 30, Rgb::GREEN);
    let params = MatteParams {
        similarity: 0.0,
        ..MatteParams::default()
    };
    let cutout = run_pipeline(source, &params);
    for idx in 0..cutout.len() {
        assert_eq!(cutout.alpha_at(idx), 0);
    }
}

#[test]
fn higher_similarity_clears_at_least_as_much() {
    // A green field 30 degrees off the key hue: matched at similarity
    // 80 (68 degree cone), rejected at similarity 0 (20 degrees).
    let mut source = PixelGrid::filled(30, 30, Rgb::new(40, 200, 120));
    for y in 12..18 {
        for x in 12..18 {
            source.put_rgba(x, y, [200, 30, 40, 255]);
        }
    }

    let strict = cut_out(
        source.clone(),
        &MatteParams {
            similarity: 0.0,
            ..MatteParams::default()
        },
    );
    let loose = cut_out(
        source,
        &MatteParams {
            similarity: 80.0,
            ..MatteParams::default()
        },
    );

    assert!(loose.stats.cleared() >= strict.stats.cleared());
    assert!(loose.stats.cleared() > 0);
}
