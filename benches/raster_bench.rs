// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use trirast::core::image::{bitmap::encode_bitmap, PixelBuffer};
use trirast::core::raster::{draw_line, rasterize_triangle, Vec2};

fn bench_triangle(c: &mut Criterion) {
    let mut image = PixelBuffer::new(800, 600).unwrap();

    c.bench_function("triangle_gouraud_800x600", |b| {
        b.iter(|| {
            rasterize_triangle(
                black_box(&mut image),
                black_box(Vec2::new(200.0, 100.0)),
                black_box(Vec2::new(600.0, 300.0)),
                black_box(Vec2::new(300.0, 500.0)),
                0xFFFF0000,
                0xFF00FF00,
                0xFF0000FF,
            )
        })
    });

    c.bench_function("triangle_small_x1000", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let o = (i % 780) as f32;
                rasterize_triangle(
                    &mut image,
                    Vec2::new(o, 10.0),
                    Vec2::new(o + 16.0, 14.0),
                    Vec2::new(o + 4.0, 28.0),
                    0xFFFF0000,
                    0xFF00FF00,
                    0xFF0000FF,
                );
            }
        })
    });
}

fn bench_line(c: &mut Criterion) {
    let mut image = PixelBuffer::new(800, 600).unwrap();

    c.bench_function("line_diagonal", |b| {
        b.iter(|| {
            draw_line(
                black_box(&mut image),
                Vec2::new(0.0, 0.0),
                Vec2::new(799.0, 599.0),
                0xFF000000,
            )
        })
    });
}

fn bench_bitmap(c: &mut Criterion) {
    let mut image = PixelBuffer::new(800, 600).unwrap();
    image.clear(0xFFFFFFFF);
    let mut out = Vec::with_capacity(800 * 600 * 4 + 54);

    c.bench_function("encode_bitmap_800x600", |b| {
        b.iter(|| {
            out.clear();
            encode_bitmap(black_box(&image), &mut out).unwrap();
        })
    });
}

criterion_group!(benches, bench_triangle, bench_line, bench_bitmap);
criterion_main!(benches);
