use criterion::{Criterion, black_box, criterion_group, criterion_main};
use wordseg::detector::kernel::build_kernel;
use wordseg::{BBox, DetectorParams, GrayImage, detect, sort_multiline};

/// White page with a grid of black word-like rectangles
fn synthetic_page(size: usize) -> GrayImage {
    let mut img = GrayImage::new(size, size, 255);
    let mut y = size / 8;
    while y + 20 < size {
        let mut x = size / 10;
        while x + 60 < size {
            for yy in y..y + 20 {
                for xx in x..x + 60 {
                    img.set(xx, yy, 0);
                }
            }
            x += 100;
        }
        y += 60;
    }
    img
}

fn bench_build_kernel(c: &mut Criterion) {
    c.bench_function("build_kernel_25", |b| {
        b.iter(|| build_kernel(black_box(25), black_box(11.0), black_box(7.0)))
    });
}

fn bench_detect_small(c: &mut Criterion) {
    let img = synthetic_page(256);
    let params = DetectorParams {
        sigma: 25.0,
        theta: 5.0,
        ..Default::default()
    };
    c.bench_function("detect_256x256", |b| {
        b.iter(|| detect(black_box(&img), black_box(&params)))
    });
}

fn bench_detect_medium(c: &mut Criterion) {
    let img = synthetic_page(512);
    let params = DetectorParams {
        sigma: 25.0,
        theta: 5.0,
        ..Default::default()
    };
    c.bench_function("detect_512x512", |b| {
        b.iter(|| detect(black_box(&img), black_box(&params)))
    });
}

fn bench_sort_multiline(c: &mut Criterion) {
    let mut detections = Vec::new();
    for line in 0..20 {
        for word in 0..15 {
            let bbox = BBox::new(word * 70, line * 40 + (word % 3), 60, 20);
            detections.push(wordseg::Detection::new(bbox, GrayImage::new(60, 20, 0)));
        }
    }
    c.bench_function("sort_multiline_300_words", |b| {
        b.iter(|| sort_multiline(black_box(detections.clone()), black_box(2)))
    });
}

criterion_group!(
    benches,
    bench_build_kernel,
    bench_detect_small,
    bench_detect_medium,
    bench_sort_multiline
);
criterion_main!(benches);
