use criterion::{black_box, criterion_group, criterion_main, Criterion};

use covergen::canvas::{self, FitPolicy};
use covergen::font::FontLibrary;
use covergen::layout;
use covergen::TargetSize;
use image::{DynamicImage, Rgb, RgbImage};

fn bench_wrap(c: &mut Criterion) {
    let font = FontLibrary::bundled().sized(46.0);
    let title = "A Very Long Title That Will Definitely Need To Wrap Across Several Lines For The Banner";

    c.bench_function("wrap_title_600px", |b| {
        b.iter(|| layout::wrap(black_box(title), &font, black_box(600)))
    });
}

fn bench_layout_block(c: &mut Criterion) {
    let title_font = FontLibrary::bundled().sized(48.0);
    let subtitle_font = FontLibrary::bundled().sized(22.0);
    let title = "Continuous Delivery Without The Drama Across Many Environments";
    let subtitle = "Pipelines, approvals, and rollbacks that behave under pressure";

    c.bench_function("layout_block_bounded", |b| {
        b.iter(|| {
            layout::layout_block(
                black_box(title),
                Some(black_box(subtitle)),
                &title_font,
                &subtitle_font,
                600,
                220,
            )
        })
    });
}

fn bench_normalize(c: &mut Criterion) {
    let source = DynamicImage::ImageRgb8(RgbImage::from_pixel(2000, 500, Rgb([32, 64, 96])));
    let target = TargetSize::default();

    c.bench_function("pad_2000x500", |b| {
        b.iter(|| canvas::normalize(black_box(&source), target, FitPolicy::Pad))
    });
    c.bench_function("stretch_2000x500", |b| {
        b.iter(|| canvas::normalize(black_box(&source), target, FitPolicy::Stretch))
    });
}

criterion_group!(benches, bench_wrap, bench_layout_block, bench_normalize);
criterion_main!(benches);
