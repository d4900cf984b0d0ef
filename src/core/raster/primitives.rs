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

//! Rasterizer primitive types

use serde::{Deserialize, Serialize};

use super::edge::edge_function;
use super::triangle::{is_degenerate_area, rasterize_triangle};
use crate::core::image::PixelBuffer;

/// A 2D point in floating-point screen space
///
/// # Coordinate System
///
/// - Origin (0, 0) is the top-left corner of the image
/// - X increases to the right
/// - Y increases downward
/// - Pixel `(x, y)` is sampled at its center `(x + 0.5, y + 0.5)`
///
/// Serialized as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct Vec2 {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Vec2 {
    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True if both coordinates are finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

/// Three vertices with one packed ARGB color each
///
/// # Examples
///
/// ```
/// use trirast::core::image::PixelBuffer;
/// use trirast::core::raster::{Triangle, Vec2};
///
/// let mut image = PixelBuffer::new(64, 64).unwrap();
/// let triangle = Triangle::new(
///     [Vec2::new(4.0, 4.0), Vec2::new(60.0, 8.0), Vec2::new(10.0, 60.0)],
///     [0xFFFF0000, 0xFF00FF00, 0xFF0000FF],
/// );
///
/// let written = triangle.rasterize(&mut image);
/// assert!(written > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertex positions
    pub vertices: [Vec2; 3],
    /// Packed ARGB color of each vertex
    pub colors: [u32; 3],
}

impl Triangle {
    /// Create a triangle from positions and per-vertex colors
    pub const fn new(vertices: [Vec2; 3], colors: [u32; 3]) -> Self {
        Self { vertices, colors }
    }

    /// True if the triangle has (near) zero area or non-finite vertices
    ///
    /// Degenerate triangles write no pixels when rasterized.
    pub fn is_degenerate(&self) -> bool {
        let [v0, v1, v2] = self.vertices;
        is_degenerate_area(edge_function(v1, v2, v0))
    }

    /// Rasterize into `image`, returning the number of pixels written
    pub fn rasterize(&self, image: &mut PixelBuffer) -> usize {
        let [v0, v1, v2] = self.vertices;
        let [c0, c1, c2] = self.colors;
        rasterize_triangle(image, v0, v1, v2, c0, c1, c2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_array_conversion() {
        let v = Vec2::from([1.5, -2.0]);
        assert_eq!(v, Vec2::new(1.5, -2.0));
        assert_eq!(<[f32; 2]>::from(v), [1.5, -2.0]);
    }

    #[test]
    fn test_vec2_is_finite() {
        assert!(Vec2::new(0.0, 1.0).is_finite());
        assert!(!Vec2::new(f32::NAN, 1.0).is_finite());
        assert!(!Vec2::new(0.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_triangle_is_degenerate() {
        let colors = [0xFF000000; 3];
        let collinear = Triangle::new(
            [Vec2::new(1.0, 1.0), Vec2::new(5.0, 5.0), Vec2::new(9.0, 9.0)],
            colors,
        );
        let point = Triangle::new([Vec2::new(3.0, 3.0); 3], colors);
        let nan = Triangle::new(
            [Vec2::new(f32::NAN, 0.0), Vec2::new(5.0, 0.0), Vec2::new(0.0, 5.0)],
            colors,
        );
        let solid = Triangle::new(
            [Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0), Vec2::new(0.0, 5.0)],
            colors,
        );

        let mut image = PixelBuffer::new(16, 16).unwrap();
        for triangle in [collinear, point, nan] {
            assert!(triangle.is_degenerate());
            assert_eq!(triangle.rasterize(&mut image), 0);
        }
        assert!(!solid.is_degenerate());
        assert!(solid.rasterize(&mut image) > 0);
    }

    #[test]
    fn test_triangle_rasterize_matches_free_function() {
        let vertices = [
            Vec2::new(2.0, 2.0),
            Vec2::new(30.0, 5.0),
            Vec2::new(8.0, 28.0),
        ];
        let colors = [0xFFFF0000, 0xFF00FF00, 0xFF0000FF];

        let mut a = PixelBuffer::new(32, 32).unwrap();
        let mut b = PixelBuffer::new(32, 32).unwrap();

        let n_a = Triangle::new(vertices, colors).rasterize(&mut a);
        let n_b = rasterize_triangle(
            &mut b,
            vertices[0],
            vertices[1],
            vertices[2],
            colors[0],
            colors[1],
            colors[2],
        );

        assert_eq!(n_a, n_b);
        assert_eq!(a, b);
    }
}
