use covergen::canvas::{normalize, pad, sample_background, stretch, FitPolicy};
use covergen::TargetSize;
use image::{DynamicImage, GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};

fn target() -> TargetSize {
    TargetSize::default()
}

#[test]
fn every_source_shape_normalizes_to_target() {
    let shapes = [(1, 1), (1, 2000), (2000, 1), (419, 1001), (1000, 420)];
    for (w, h) in shapes {
        let source = DynamicImage::ImageRgb8(RgbImage::from_pixel(w, h, Rgb([40, 40, 40])));
        for policy in [FitPolicy::Pad, FitPolicy::Stretch] {
            let out = normalize(&source, target(), policy);
            assert_eq!(out.dimensions(), (1000, 420), "{w}x{h} via {policy:?}");
        }
    }
}

#[test]
fn wide_source_gets_vertical_letterbox_bands() {
    // 2000x500 -> ratio min(0.5, 0.84) = 0.5 -> content 1000x250 with 85px
    // bands above and below, filled from the background sample.
    let mut source = RgbImage::from_pixel(2000, 500, Rgb([0, 0, 200]));
    // A contrasting stripe proves the content is centered, not cropped.
    for x in 0..2000 {
        for y in 240..260 {
            source.put_pixel(x, y, Rgb([255, 255, 0]));
        }
    }
    let source = DynamicImage::ImageRgb8(source);
    let out = pad(&source, target()).to_rgb8();

    let band = *out.get_pixel(500, 10);
    let expected_band = sample_background(&source);
    assert_eq!(band, expected_band);
    assert_eq!(out.get_pixel(500, 40), &expected_band);
    // The stripe lands in the middle of the content region.
    assert_eq!(out.get_pixel(500, 210), &Rgb([255, 255, 0]));
}

#[test]
fn pad_uses_alpha_as_paste_mask() {
    // A fully transparent source leaves the background fill visible.
    let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        500,
        210,
        Rgba([255, 0, 0, 0]),
    ));
    let out = pad(&source, target());
    assert_eq!(out.dimensions(), (1000, 420));
    // Output keeps the source's alpha mode.
    assert!(matches!(out, DynamicImage::ImageRgba8(_)));
}

#[test]
fn stretch_fills_without_padding() {
    // A solid source stretched to target stays solid everywhere: no border,
    // no background fill.
    let source = DynamicImage::ImageRgb8(RgbImage::from_pixel(123, 77, Rgb([9, 200, 30])));
    let out = stretch(&source, target()).to_rgb8();
    for (_, _, pixel) in out.enumerate_pixels() {
        assert_eq!(pixel, &Rgb([9, 200, 30]));
    }
}

#[test]
fn upscaling_small_sources_is_supported() {
    let source = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 4, Rgb([100, 100, 100])));
    let out = pad(&source, target());
    assert_eq!(out.dimensions(), (1000, 420));
}

#[test]
fn sample_background_averages_mixed_content() {
    // Half black, half white: the sampled tone lands near mid-gray.
    let mut source = RgbImage::new(100, 100);
    for (x, _, pixel) in source.enumerate_pixels_mut() {
        *pixel = if x < 50 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) };
    }
    let Rgb([r, g, b]) = sample_background(&DynamicImage::ImageRgb8(source));
    for channel in [r, g, b] {
        assert!((100..=160).contains(&channel), "channel {channel} not mid-range");
    }
}
