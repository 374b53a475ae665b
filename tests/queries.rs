mod common;

use color_histogram::{
    ColorProcessor, color_from_rgba, delta_e, hex_string, nearest_color, parse_hex_color,
};
use common::{fixture, fixture_png, hex};

#[test]
fn pixel_queries_return_original_colors() {
    let processor = ColorProcessor::new(fixture());
    let cases = [
        ((1.0, 1.0), common::RED),
        ((3.0, 0.0), common::BLUE),
        ((1.0, 2.0), common::GREEN),
        ((9.0, 2.0), common::YELLOW),
        ((9.0, 5.0), common::MAGENTA),
        ((8.0, 6.0), common::GRAY),
        ((6.0, 8.0), common::BLACK),
        ((9.0, 6.0), common::WHITE),
    ];
    for ((x, y), rgba) in cases {
        let color = processor.query_color_at_pixel(x, y);
        assert_eq!(color.map(hex_string), Some(hex(rgba)), "({x}, {y})");
    }
}

#[test]
fn corners_are_in_bounds() {
    let processor = ColorProcessor::new(fixture());
    for (x, y) in [(0.0, 0.0), (9.0, 0.0), (0.0, 9.0), (9.0, 9.0), (9.99, 9.99)] {
        assert_eq!(processor.query_color_at_pixel(x, y), Some(color_from_rgba(common::RED)));
    }
}

#[test]
fn out_of_bounds_queries_are_none() {
    let processor = ColorProcessor::new(fixture());
    for (x, y) in [(-1.0, 0.0), (0.0, -0.1), (10.0, 0.0), (0.0, 10.0), (f64::INFINITY, 1.0)] {
        assert_eq!(processor.query_color_at_pixel(x, y), None, "({x}, {y})");
    }
}

#[test]
fn pixel_queries_ignore_rescale() {
    let image = image::RgbaImage::from_fn(600, 600, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 7, 255])
    });
    let processor = ColorProcessor::new(image);
    assert_eq!(processor.analysis_dimensions(), (300, 300));
    let color = processor.query_color_at_pixel(599.0, 301.0).map(hex_string);
    assert_eq!(color.as_deref(), Some("#572D07"));
}

#[test]
fn encoded_pixel_query() {
    let processor = ColorProcessor::from_encoded(&fixture_png()).unwrap();
    let color = processor.query_color_at_pixel(8.5, 6.5).map(hex_string);
    assert_eq!(color, Some(hex(common::GRAY)));
}

#[test]
fn delta_e_of_identical_colors_is_zero() {
    for rgba in [common::RED, common::GRAY, common::BLACK, common::WHITE] {
        let color = color_from_rgba(rgba);
        assert!(delta_e(color, color).abs() < 1e-4, "{rgba:?}");
    }
}

#[test]
fn nearest_picks_perceptually_closest_candidate() {
    let target = parse_hex_color("#FF0000").unwrap();
    let candidates = ["#0000FF", "#FE0101", "#00FF00", "#FF8080"]
        .map(|h| parse_hex_color(h).unwrap());
    let found = nearest_color(target, candidates).unwrap();
    assert_eq!(found.hex(), "#FE0101");
    assert!(found.delta_e < 1.0);
}

#[test]
fn nearest_with_exact_match_has_zero_distance() {
    let target = color_from_rgba(common::GRAY);
    let candidates = [common::WHITE, common::GRAY, common::BLACK].map(color_from_rgba);
    let found = nearest_color(target, candidates).unwrap();
    assert_eq!(found.color, target);
    assert!(found.delta_e.abs() < 1e-4);
}

#[test]
fn nearest_over_empty_candidates_is_none() {
    let target = color_from_rgba(common::RED);
    assert!(nearest_color(target, Vec::new()).is_none());
}
