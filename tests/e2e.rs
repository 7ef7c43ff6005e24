//! End-to-end pipeline tests: decode a fixture from disk, transform it,
//! encode the result, and decode it again.
//!
//! Output files are JPEG, so reloaded values are checked with a small
//! codec tolerance where the content is not guaranteed bit-exact.

use pixelshade::grid::PixelSource;
use pixelshade::io::{load_rgb, output_path, save_rgb};
use pixelshade::transforms::{Channel, Transform};
use std::path::{Path, PathBuf};

fn write_solid_png(path: &Path, width: u32, height: u32, rgb: [u8; 3]) {
    image::RgbImage::from_pixel(width, height, image::Rgb(rgb))
        .save(path)
        .expect("failed to write fixture image");
}

fn assert_channels_near(actual: pixelshade::grid::Pixel, expected: [u8; 3], tolerance: i32) {
    for (got, want) in [actual.r, actual.g, actual.b].into_iter().zip(expected) {
        assert!(
            (got as i32 - want as i32).abs() <= tolerance,
            "channel {got} not within {tolerance} of {want}"
        );
    }
}

#[test]
fn invert_white_image_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("white.png");
    write_solid_png(&input, 2, 2, [255, 255, 255]);

    let source = load_rgb(&input).unwrap();
    let transform = Transform::Invert;
    let result = transform.apply(&source);
    let output = output_path(&input, &transform);
    save_rgb(&result, &output).unwrap();

    assert_eq!(output, dir.path().join("white_invert.jpg"));
    let reloaded = load_rgb(&output).unwrap();
    assert_eq!(reloaded.dimensions(), (2, 2));
    for y in 0..2 {
        for x in 0..2 {
            assert_channels_near(reloaded.pixel_at(x, y).unwrap(), [0, 0, 0], 2);
        }
    }
}

#[test]
fn brightness_on_black_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("black.png");
    write_solid_png(&input, 1, 1, [0, 0, 0]);

    let source = load_rgb(&input).unwrap();
    let transform = Transform::Brightness(60);
    let result = transform.apply(&source);

    // Exact before encoding.
    assert_eq!(
        result.pixel_at(0, 0).unwrap(),
        pixelshade::grid::Pixel::new(60, 60, 60)
    );

    let output = output_path(&input, &transform);
    save_rgb(&result, &output).unwrap();
    assert_eq!(output, dir.path().join("black_brightness_60.jpg"));

    let reloaded = load_rgb(&output).unwrap();
    assert_channels_near(reloaded.pixel_at(0, 0).unwrap(), [60, 60, 60], 3);
}

#[test]
fn dimensions_preserved_for_every_transform() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("gradient.png");
    let img = image::RgbImage::from_fn(7, 5, |x, y| {
        image::Rgb([(x * 30) as u8, (y * 40) as u8, 128])
    });
    img.save(&input).unwrap();

    let source = load_rgb(&input).unwrap();
    let transforms = [
        Transform::Grayscale,
        Transform::Invert,
        Transform::Brightness(-20),
        Transform::ColorFilter(Channel::Green),
        Transform::Contrast(3.0),
    ];

    for transform in transforms {
        let result = transform.apply(&source);
        assert_eq!(
            result.dimensions(),
            (7, 5),
            "{transform} changed the image dimensions"
        );
    }
}

#[test]
fn output_lands_next_to_nested_input() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("shots");
    std::fs::create_dir(&nested).unwrap();
    let input = nested.join("scene.png");
    write_solid_png(&input, 3, 3, [10, 200, 90]);

    let source = load_rgb(&input).unwrap();
    let transform = Transform::ColorFilter(Channel::Red);
    let result = transform.apply(&source);
    let output = output_path(&input, &transform);
    save_rgb(&result, &output).unwrap();

    let expected: PathBuf = nested.join("scene_color_filter_RED.jpg");
    assert_eq!(output, expected);
    assert!(expected.exists());
}

#[test]
fn missing_intensity_is_rejected_before_any_decode() {
    // Selector validation happens on its own; a bad request must never
    // produce an output file.
    let err = Transform::from_selector(1, None).unwrap_err();
    assert!(err.to_string().contains("brightness"));
    assert!(err.to_string().contains("intensity"));
}
