//! Header parsing, blank-canvas construction, and pixel access.

use bmpshop::{BitmapBuffer, BmpError, Rgb8, parse_header};

// ── blank canvases ───────────────────────────────────────────────────

#[test]
fn blank_canvas_is_all_black() {
    let bmp = BitmapBuffer::create_blank(5, 4).unwrap();
    for y in 0..4 {
        for x in 0..5 {
            assert_eq!(bmp.get_pixel(x, y).unwrap(), Rgb8::new(0, 0, 0));
        }
    }
}

#[test]
fn blank_canvas_survives_reparse() {
    let bmp = BitmapBuffer::create_blank(25, 3).unwrap();
    let info = bmp.info();
    let reparsed = BitmapBuffer::from_bytes(bmp.into_bytes()).unwrap();
    assert_eq!(reparsed.info(), info);
    assert_eq!(reparsed.row_stride(), 76);
    assert_eq!(reparsed.row_padding(), 1);
}

#[test]
fn blank_rejects_zero_dimensions() {
    assert!(matches!(
        BitmapBuffer::create_blank(0, 5),
        Err(BmpError::InvalidDimensions { width: 0, height: 5 })
    ));
    assert!(matches!(
        BitmapBuffer::create_blank(5, 0),
        Err(BmpError::InvalidDimensions { width: 5, height: 0 })
    ));
}

// ── pixel access ─────────────────────────────────────────────────────

#[test]
fn set_then_get_round_trips_at_corners() {
    let mut bmp = BitmapBuffer::create_blank(7, 5).unwrap();
    let corners = [(0, 0), (6, 0), (0, 4), (6, 4)];
    for (i, &(x, y)) in corners.iter().enumerate() {
        let px = Rgb8::new(10 * i as u8 + 1, 20 * i as u8 + 2, 30 * i as u8 + 3);
        bmp.set_pixel(x, y, px).unwrap();
        assert_eq!(bmp.get_pixel(x, y).unwrap(), px);
    }
}

#[test]
fn pixels_are_stored_bgr() {
    let mut bmp = BitmapBuffer::create_blank(2, 1).unwrap();
    bmp.set_pixel(0, 0, Rgb8::new(200, 100, 50)).unwrap();
    let off = bmp.pixel_data_offset();
    assert_eq!(&bmp.as_bytes()[off..off + 3], &[50, 100, 200]);
}

#[test]
fn access_outside_the_image_is_rejected() {
    let mut bmp = BitmapBuffer::create_blank(4, 3).unwrap();
    for (x, y) in [(4, 0), (0, 3), (-1, 0), (0, -1), (100, 100)] {
        assert!(matches!(
            bmp.get_pixel(x, y),
            Err(BmpError::OutOfBounds { width: 4, height: 3, .. })
        ));
        assert!(matches!(
            bmp.set_pixel(x, y, Rgb8::new(1, 1, 1)),
            Err(BmpError::OutOfBounds { .. })
        ));
    }
    // The last valid coordinate still works.
    bmp.set_pixel(3, 2, Rgb8::new(9, 9, 9)).unwrap();
}

// ── header validation ────────────────────────────────────────────────

#[test]
fn rejects_bad_signature() {
    let mut bytes = BitmapBuffer::create_blank(2, 2).unwrap().into_bytes();
    bytes[0] = b'X';
    assert!(matches!(
        parse_header(&bytes),
        Err(BmpError::UnsupportedFormat(_))
    ));
}

#[test]
fn rejects_wrong_bit_depth() {
    let mut bytes = BitmapBuffer::create_blank(2, 2).unwrap().into_bytes();
    bytes[28] = 32;
    assert!(matches!(
        parse_header(&bytes),
        Err(BmpError::UnsupportedFormat(_))
    ));
}

#[test]
fn rejects_compressed_data() {
    let mut bytes = BitmapBuffer::create_blank(2, 2).unwrap().into_bytes();
    bytes[30] = 1; // BI_RLE8
    assert!(matches!(
        parse_header(&bytes),
        Err(BmpError::UnsupportedFormat(_))
    ));
}

#[test]
fn rejects_wrong_plane_count() {
    let mut bytes = BitmapBuffer::create_blank(2, 2).unwrap().into_bytes();
    bytes[26] = 2;
    assert!(matches!(
        parse_header(&bytes),
        Err(BmpError::UnsupportedFormat(_))
    ));
}

#[test]
fn rejects_buffer_shorter_than_declared_pixels() {
    let bytes = BitmapBuffer::create_blank(4, 4).unwrap().into_bytes();
    let truncated = &bytes[..bytes.len() - 10];
    assert!(matches!(
        parse_header(truncated),
        Err(BmpError::UnsupportedFormat(_))
    ));
}

#[test]
fn rejects_negative_dimensions() {
    let mut bytes = BitmapBuffer::create_blank(2, 2).unwrap().into_bytes();
    // Top-down BMPs store a negative height; unsupported here.
    bytes[22..26].copy_from_slice(&(-2i32).to_le_bytes());
    assert!(matches!(
        parse_header(&bytes),
        Err(BmpError::InvalidDimensions { height: -2, .. })
    ));
}

#[test]
fn parse_reports_geometry() {
    let bmp = BitmapBuffer::create_blank(64, 2).unwrap();
    let info = parse_header(bmp.as_bytes()).unwrap();
    assert_eq!(info.width, 64);
    assert_eq!(info.height, 2);
    assert_eq!(info.row_stride, 192);
    assert_eq!(info.row_padding, 0);
    assert_eq!(info.pixel_data_offset, 138);
}
