use std::io::Cursor;

use super::*;

fn png(width: u32, height: u32, rgba: Vec<u8>) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(width, height, rgba).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_dimensions_and_premul() {
    let prepared = decode_image(&png(2, 1, vec![100, 50, 200, 128, 9, 9, 9, 0])).unwrap();
    assert_eq!((prepared.width, prepared.height), (2, 1));
    assert_eq!(
        prepared.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128,
            0,
            0,
            0,
            0
        ]
    );
}

#[test]
fn garbage_bytes_are_an_error() {
    let err = decode_image(b"not an image").unwrap_err();
    assert!(matches!(err, crate::foundation::error::PortalError::Other(_)));
}
