//! Shared 10x10 fixture with a known color distribution.

#![allow(dead_code)]

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];
pub const GREEN: [u8; 4] = [0, 255, 0, 255];
pub const YELLOW: [u8; 4] = [255, 255, 0, 255];
pub const BLACK: [u8; 4] = [0, 0, 0, 255];
pub const MAGENTA: [u8; 4] = [255, 0, 255, 255];
pub const GRAY: [u8; 4] = [194, 194, 194, 255];
pub const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Counts: R 30, B 25, G 20, Y 10, K 5, M 4, A 4, W 2.
const ROWS: [&str; 10] = [
    "RBBBBBBBBR",
    "RRBBBBBBBY",
    "GGBBBBBBBY",
    "GGGGGGBBBY",
    "GGGGGGGGGY",
    "GGGYYYMMMM",
    "YYYRRRRRAW",
    "RRRRRRRAAW",
    "RRRRRKKKKA",
    "RRRRRRRRKR",
];

fn code_to_rgba(code: u8) -> [u8; 4] {
    match code {
        b'R' => RED,
        b'B' => BLUE,
        b'G' => GREEN,
        b'Y' => YELLOW,
        b'K' => BLACK,
        b'M' => MAGENTA,
        b'A' => GRAY,
        b'W' => WHITE,
        other => panic!("unknown fixture code {}", other as char),
    }
}

pub fn fixture() -> RgbaImage {
    RgbaImage::from_fn(10, 10, |x, y| {
        Rgba(code_to_rgba(ROWS[y as usize].as_bytes()[x as usize]))
    })
}

pub fn fixture_png() -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    fixture()
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("encode fixture");
    bytes.into_inner()
}

/// `#RRGGBB` of a raw pixel.
pub fn hex(rgba: [u8; 4]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgba[0], rgba[1], rgba[2])
}

/// Fixture colors with their counts, most frequent first, ties in scan order.
pub fn expected_descending() -> Vec<(String, u32)> {
    [
        (RED, 30),
        (BLUE, 25),
        (GREEN, 20),
        (YELLOW, 10),
        (BLACK, 5),
        (MAGENTA, 4),
        (GRAY, 4),
        (WHITE, 2),
    ]
    .into_iter()
    .map(|(rgba, count)| (hex(rgba), count))
    .collect()
}
