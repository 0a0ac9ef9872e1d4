//! Integration tests for the media boundary.
//!
//! Verifies that the decode/encode edges honor the failure semantics the
//! matte passes rely on: decode failures are surfaced, encode keeps the
//! alpha channel intact, and files round-trip through disk.

use std::io::Cursor;

use decal_core::{DecalError, PixelGrid, Rgb};
use decal_matte::{cut_out, MatteParams};
use decal_media::{decode_bytes, encode_png, open_image, save_png};
use image::{ImageFormat, RgbImage};

// ── Decode edge ────────────────────────────────────────────────

#[test]
fn corrupt_bytes_surface_a_decode_error() {
    let err = decode_bytes(&[0xde, 0xad, 0xbe, 0xef]).unwrap_err();
    assert!(matches!(err, DecalError::Decode(_)));
}

#[test]
fn jpeg_sources_decode_to_opaque_grids() {
    // JPEG has no alpha channel; the decoder normalizes to RGBA anyway.
    let mut jpeg = Cursor::new(Vec::new());
    RgbImage::from_pixel(6, 4, image::Rgb([0, 255, 0]))
        .write_to(&mut jpeg, ImageFormat::Jpeg)
        .unwrap();

    let grid = decode_bytes(&jpeg.into_inner()).unwrap();
    assert_eq!(grid.width(), 6);
    assert_eq!(grid.height(), 4);
    for idx in 0..grid.len() {
        assert_eq!(grid.alpha_at(idx), 255);
    }
}

#[test]
fn jpeg_green_still_keys_out() {
    // Compression noise lands well inside the fast-path radius.
    let mut jpeg = Cursor::new(Vec::new());
    RgbImage::from_pixel(16, 16, image::Rgb([0, 255, 0]))
        .write_to(&mut jpeg, ImageFormat::Jpeg)
        .unwrap();

    let grid = decode_bytes(&jpeg.into_inner()).unwrap();
    let result = cut_out(grid, &MatteParams::default());
    for idx in 0..result.pixels.len() {
        assert_eq!(result.pixels.alpha_at(idx), 0);
    }
}

// ── Encode edge ────────────────────────────────────────────────

#[test]
fn cutout_alpha_survives_the_png_encode() {
    let mut grid = PixelGrid::filled(6, 6, Rgb::GREEN);
    for y in 2..4 {
        for x in 2..4 {
            grid.put_rgba(x, y, [200, 30, 40, 255]);
        }
    }
    let result = cut_out(grid, &MatteParams::default());
    let expected = result.pixels.alpha_snapshot();

    let decoded = decode_bytes(&encode_png(&result.pixels).unwrap()).unwrap();
    assert_eq!(decoded.alpha_snapshot(), expected);
}

// ── Disk round trip ────────────────────────────────────────────

#[test]
fn save_and_reopen_preserves_the_grid() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let path = tmp.path().join("cutout.png");

    let mut grid = PixelGrid::new(5, 3);
    for y in 0..3 {
        for x in 0..5 {
            grid.put_rgba(x, y, [(x * 50) as u8, (y * 80) as u8, 77, (x * 60) as u8]);
        }
    }
    save_png(&grid, &path).unwrap();
    let reopened = open_image(&path).unwrap();

    assert_eq!(reopened, grid);
}

#[test]
fn opening_a_directory_fails() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    assert!(open_image(tmp.path()).is_err());
}
