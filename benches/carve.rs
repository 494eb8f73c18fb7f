// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[macro_use]
extern crate criterion;

use criterion::Criterion;
use image::{ImageBuffer, Rgb, RgbImage};
use seamcarve::{calculate_energy, find_seam, seamcarve, solve, Orientation};

fn textured(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([
            ((x * 37 + y * 91) % 256) as u8,
            ((x * y * 13) % 256) as u8,
            ((x + y) * 5 % 256) as u8,
        ])
    })
}

fn energy_benchmark(c: &mut Criterion) {
    let image = textured(128, 96);
    c.bench_function("energy 128x96", move |b| b.iter(|| calculate_energy(&image)));
}

fn solver_benchmark(c: &mut Criterion) {
    let energy = calculate_energy(&textured(128, 96));
    c.bench_function("solve vertical 128x96", move |b| {
        b.iter(|| solve(&energy, Orientation::Vertical))
    });
}

fn seam_benchmark(c: &mut Criterion) {
    let image = textured(128, 96);
    c.bench_function("find horizontal seam 128x96", move |b| {
        b.iter(|| find_seam(&image, Orientation::Horizontal))
    });
}

fn carve_benchmark(c: &mut Criterion) {
    let image = textured(64, 48);
    c.bench_function("carve 64x48 by 8x8", move |b| {
        b.iter(|| seamcarve(&image, 8, 8))
    });
}

criterion_group!(
    benches,
    energy_benchmark,
    solver_benchmark,
    seam_benchmark,
    carve_benchmark
);
criterion_main!(benches);
