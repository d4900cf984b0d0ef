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

//! Gouraud-shaded triangle rasterization
//!
//! # Algorithm
//!
//! Half-space rasterization with incremental edge evaluation:
//!
//! 1. Compute the bounding box and clamp it to the image
//! 2. Evaluate the three edge functions (plus fill-rule bias) once, at the
//!    center of the box's top-left pixel
//! 3. Walk the box row by row. Stepping one pixel right or down changes each
//!    edge function by a constant, so every pixel costs three additions
//! 4. A pixel is inside when all three weights are ≥ 0; its color is the
//!    barycentric blend of the vertex colors, per channel
//!
//! # References
//!
//! - [Barycentric Coordinates](https://www.scratchapixel.com/lessons/3d-basic-rendering/ray-tracing-rendering-a-triangle/barycentric-coordinates)

use super::edge::{edge_function, fill_rule_bias};
use super::primitives::Vec2;
use crate::core::image::{pack_color, Color, PixelBuffer};

/// Triangles with `|2 × area|` below this are skipped as degenerate
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-6;

/// True if twice the signed area is non-finite or too small to rasterize
#[inline(always)]
pub(crate) fn is_degenerate_area(total_area: f64) -> bool {
    !total_area.is_finite() || total_area.abs() < DEGENERATE_AREA_EPSILON
}

/// Rasterize a triangle with per-vertex colors
///
/// Colors are packed ARGB and are interpolated independently per channel
/// using barycentric weights. Both windings are accepted; a clockwise
/// triangle is filled exactly like its counter-clockwise counterpart.
///
/// # Arguments
///
/// * `image` - Target pixel buffer, modified in place
/// * `v0`, `v1`, `v2` - Vertex positions in screen space
/// * `c0`, `c1`, `c2` - Packed ARGB color of each vertex
///
/// # Returns
///
/// Number of pixels written. Degenerate triangles (zero area or non-finite
/// coordinates) and triangles entirely outside the image write nothing.
///
/// # Fill Rule
///
/// Samples exactly on an edge are owned by the triangle only if the edge is a
/// top or left edge, so two triangles sharing an edge never both write, or
/// both skip, a pixel on it.
///
/// # Examples
///
/// ```
/// use trirast::core::image::PixelBuffer;
/// use trirast::core::raster::{rasterize_triangle, Vec2};
///
/// let mut image = PixelBuffer::new(800, 600).unwrap();
/// image.clear(0xFFFFFFFF);
///
/// let written = rasterize_triangle(
///     &mut image,
///     Vec2::new(200.0, 100.0),
///     Vec2::new(600.0, 300.0),
///     Vec2::new(300.0, 500.0),
///     0xFFFF0000, // Red
///     0xFF00FF00, // Green
///     0xFF0000FF, // Blue
/// );
/// assert!(written > 0);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn rasterize_triangle(
    image: &mut PixelBuffer,
    v0: Vec2,
    v1: Vec2,
    v2: Vec2,
    c0: u32,
    c1: u32,
    c2: u32,
) -> usize {
    log::trace!(
        "Rasterizing triangle: ({}, {}), ({}, {}), ({}, {}) colors={:08X},{:08X},{:08X}",
        v0.x,
        v0.y,
        v1.x,
        v1.y,
        v2.x,
        v2.y,
        c0,
        c1,
        c2
    );

    // Twice the signed area; also the sum of the three edge weights
    let total_area = edge_function(v1, v2, v0);
    if is_degenerate_area(total_area) {
        log::trace!("Skipping degenerate triangle (area={})", total_area);
        return 0;
    }

    // Normalize winding so inside means all weights >= 0
    let (v1, v2, c1, c2, total_area) = if total_area < 0.0 {
        (v2, v1, c2, c1, -total_area)
    } else {
        (v1, v2, c1, c2, total_area)
    };

    // Bounding box, clamped to the image
    let max_x_limit = image.width() as i32 - 1;
    let max_y_limit = image.height() as i32 - 1;
    let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i32).max(0);
    let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i32).min(max_x_limit);
    let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i32).max(0);
    let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i32).min(max_y_limit);

    if min_x > max_x || min_y > max_y {
        return 0;
    }

    // Change in each weight when stepping one pixel right / one pixel down
    let col_step = [
        v1.y as f64 - v2.y as f64,
        v2.y as f64 - v0.y as f64,
        v0.y as f64 - v1.y as f64,
    ];
    let row_step = [
        v2.x as f64 - v1.x as f64,
        v0.x as f64 - v2.x as f64,
        v1.x as f64 - v0.x as f64,
    ];

    let bias = [
        fill_rule_bias(v1, v2),
        fill_rule_bias(v2, v0),
        fill_rule_bias(v0, v1),
    ];

    let p0 = Vec2::new(min_x as f32 + 0.5, min_y as f32 + 0.5);
    let mut w_row = [
        edge_function(v1, v2, p0) + bias[0],
        edge_function(v2, v0, p0) + bias[1],
        edge_function(v0, v1, p0) + bias[2],
    ];

    let inv_total_area = 1.0 / total_area;
    let channels = [c0, c1, c2].map(|c| Color::from(c).channels());

    let mut written = 0;
    for y in min_y..=max_y {
        let mut w = w_row;
        for x in min_x..=max_x {
            if w[0] >= 0.0 && w[1] >= 0.0 && w[2] >= 0.0 {
                let alpha = w[0] * inv_total_area;
                let beta = w[1] * inv_total_area;
                let gamma = 1.0 - alpha - beta;

                let color = interpolate(&channels, alpha, beta, gamma);
                if image.set_pixel(x, y, color) {
                    written += 1;
                }
            }
            step(&mut w, &col_step);
        }
        step(&mut w_row, &row_step);
    }

    written
}

#[inline(always)]
fn step(weights: &mut [f64; 3], delta: &[f64; 3]) {
    for (w, d) in weights.iter_mut().zip(delta) {
        *w += d;
    }
}

/// Blend three `[a, r, g, b]` colors by barycentric weight and repack
///
/// Each channel is clamped to 0-255 and truncated toward zero.
#[inline(always)]
fn interpolate(channels: &[[f64; 4]; 3], alpha: f64, beta: f64, gamma: f64) -> u32 {
    let mix = |i: usize| {
        let value = channels[0][i] * alpha + channels[1][i] * beta + channels[2][i] * gamma;
        value.clamp(0.0, 255.0) as i32
    };
    pack_color(mix(0), mix(1), mix(2), mix(3))
}
