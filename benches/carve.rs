// benches/carve.rs -- criterion benchmarks for the search and the
// full find-and-remove loop on a synthetic scene.

#[macro_use]
extern crate criterion;

use criterion::Criterion;
use image::{ImageBuffer, Pixel, Rgb, RgbImage};
use seamcarve::{SeamCarver, SeamFinder};

fn scene(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        let r = (x * 255 / width) as u8;
        let g = (y * 255 / height) as u8;
        let b = ((x * y) % 256) as u8;
        *Rgb::from_slice(&[r, g, b])
    })
}

fn bench_find_vertical_seam(c: &mut Criterion) {
    let carver = SeamCarver::new(scene(128, 96));
    c.bench_function("find_vertical_seam 128x96", move |b| {
        b.iter(|| carver.find_vertical_seam())
    });
}

fn bench_find_horizontal_seam(c: &mut Criterion) {
    let carver = SeamCarver::new(scene(128, 96));
    c.bench_function("find_horizontal_seam 128x96", move |b| {
        b.iter(|| carver.find_horizontal_seam())
    });
}

fn bench_carve_ten_seams(c: &mut Criterion) {
    c.bench_function("carve 128x96 -> 118x86", |b| {
        b.iter(|| {
            let mut carver = SeamCarver::new(scene(128, 96));
            carver.carve(118, 86).unwrap();
            carver.into_picture()
        })
    });
}

criterion_group!(
    benches,
    bench_find_vertical_seam,
    bench_find_horizontal_seam,
    bench_carve_ten_seams
);
criterion_main!(benches);
