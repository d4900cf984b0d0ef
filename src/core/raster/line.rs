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

//! Line rendering
//!
//! Bresenham's line algorithm over integer pixel coordinates. Endpoints are
//! truncated toward zero and both are drawn. Every pixel goes through the
//! buffer's bounds check, so lines may start or end outside the image.
//!
//! # References
//!
//! - [Bresenham's Line Algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)

use super::primitives::Vec2;
use crate::core::image::PixelBuffer;

/// Draw a solid line from `start` to `end`
///
/// # Returns
///
/// Number of pixels written (pixels outside the image are skipped).
///
/// # Examples
///
/// ```
/// use trirast::core::image::PixelBuffer;
/// use trirast::core::raster::{draw_line, Vec2};
///
/// let mut image = PixelBuffer::new(16, 16).unwrap();
/// let written = draw_line(&mut image, Vec2::new(0.0, 0.0), Vec2::new(15.0, 15.0), 0xFF000000);
/// assert_eq!(written, 16);
/// ```
pub fn draw_line(image: &mut PixelBuffer, start: Vec2, end: Vec2, color: u32) -> usize {
    if !start.is_finite() || !end.is_finite() {
        log::trace!("Skipping line with non-finite endpoint");
        return 0;
    }

    // i64 so that differences of saturated i32 endpoints cannot overflow
    let (x0, y0) = (start.x as i32 as i64, start.y as i32 as i64);
    let (x1, y1) = (end.x as i32 as i64, end.y as i32 as i64);

    log::trace!("Drawing line: ({}, {}) -> ({}, {})", x0, y0, x1, y1);

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;
    let mut written = 0;

    loop {
        if let (Ok(px), Ok(py)) = (i32::try_from(x), i32::try_from(y)) {
            if image.set_pixel(px, py, color) {
                written += 1;
            }
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    written
}

/// Draw connected line segments through `points`
///
/// Shared endpoints are drawn once per segment, so the returned count can
/// include the same pixel more than once.
pub fn draw_polyline(image: &mut PixelBuffer, points: &[Vec2], color: u32) -> usize {
    points
        .windows(2)
        .map(|segment| draw_line(image, segment[0], segment[1], color))
        .sum()
}
