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

//! Edge functions and the top-left fill rule
//!
//! # Edge Function
//!
//! For a directed edge `A → B` and a point `P`, the edge function is the 2D
//! cross product `(B - A) × (P - A)`. Its sign tells which half-plane `P` is
//! in, and its magnitude is twice the area of triangle `ABP`.
//!
//! # Fill Rule
//!
//! A sample exactly on an edge (edge function == 0) belongs to the triangle
//! only if that edge is a "top" or "left" edge. Two triangles sharing an edge
//! traverse it in opposite directions, so exactly one of them classifies it
//! as top-left and owns the boundary pixels.
//!
//! Edge weights are evaluated in `f64`. In `f32` the bias is lost to rounding
//! once a weight exceeds about 2048.
//!
//! # References
//!
//! - [Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)](https://dl.acm.org/doi/10.1145/378456.378457)
//! - [Scratchapixel: Rasterization](https://www.scratchapixel.com/lessons/3d-basic-rendering/rasterization-practical-implementation)

use super::primitives::Vec2;

/// Bias added to the edge weight of edges that are not top-left
///
/// Pushes samples lying exactly on such an edge just outside the triangle.
pub const FILL_RULE_BIAS: f64 = -1e-4;

/// Evaluate the edge function of `p` against the directed edge `a → b`
///
/// Returns `(b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)`.
///
/// # Examples
///
/// ```
/// use trirast::core::raster::{edge_function, Vec2};
///
/// let a = Vec2::new(0.0, 0.0);
/// let b = Vec2::new(10.0, 0.0);
///
/// assert!(edge_function(a, b, Vec2::new(5.0, 5.0)) > 0.0);
/// assert!(edge_function(a, b, Vec2::new(5.0, -5.0)) < 0.0);
/// assert_eq!(edge_function(a, b, Vec2::new(5.0, 0.0)), 0.0);
/// ```
#[inline(always)]
pub fn edge_function(a: Vec2, b: Vec2, p: Vec2) -> f64 {
    let (ax, ay) = (a.x as f64, a.y as f64);
    (b.x as f64 - ax) * (p.y as f64 - ay) - (b.y as f64 - ay) * (p.x as f64 - ax)
}

/// Classify the directed edge `start → end` under the top-left rule
///
/// - Top edge: horizontal and pointing right (`Δy == 0 && Δx > 0`)
/// - Left edge: pointing up (`Δy < 0`)
#[inline(always)]
pub fn is_top_left(start: Vec2, end: Vec2) -> bool {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let is_top_edge = dy == 0.0 && dx > 0.0;
    let is_left_edge = dy < 0.0;
    is_top_edge || is_left_edge
}

/// Fill-rule bias for the directed edge `start → end`
///
/// `0.0` for top-left edges, [`FILL_RULE_BIAS`] otherwise.
#[inline(always)]
pub fn fill_rule_bias(start: Vec2, end: Vec2) -> f64 {
    if is_top_left(start, end) {
        0.0
    } else {
        FILL_RULE_BIAS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_function_sign() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);

        // (3, 4) × (p - a)
        assert_eq!(edge_function(a, b, Vec2::new(0.0, 5.0)), 3.0 * 4.0 - 4.0 * -1.0);
        assert_eq!(edge_function(a, b, Vec2::new(5.0, 0.0)), 3.0 * -1.0 - 4.0 * 4.0);
        assert_eq!(edge_function(a, b, Vec2::new(7.0, 9.0)), 0.0);
    }

    #[test]
    fn test_edge_function_is_antisymmetric() {
        let a = Vec2::new(2.5, -1.0);
        let b = Vec2::new(-3.0, 6.0);
        let p = Vec2::new(0.25, 0.75);
        assert_eq!(edge_function(a, b, p), -edge_function(b, a, p));
    }

    #[test]
    fn test_edge_function_twice_area() {
        // Right triangle with legs 10 and 10 has area 50
        let area2 = edge_function(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 10.0),
        );
        assert_eq!(area2, 100.0);
    }

    #[test]
    fn test_top_edge() {
        assert!(is_top_left(Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0)));
        // Horizontal pointing left is a bottom edge
        assert!(!is_top_left(Vec2::new(5.0, 0.0), Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_left_edge() {
        assert!(is_top_left(Vec2::new(0.0, 10.0), Vec2::new(0.0, 0.0)));
        assert!(is_top_left(Vec2::new(3.0, 10.0), Vec2::new(-2.0, 1.0)));
        // Pointing down is a right edge
        assert!(!is_top_left(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0)));
        assert!(!is_top_left(Vec2::new(0.0, 0.0), Vec2::new(-4.0, 1.0)));
    }

    #[test]
    fn test_opposite_directions_exclusive() {
        let edges = [
            (Vec2::new(0.0, 0.0), Vec2::new(8.0, 8.0)),
            (Vec2::new(4.5, 0.0), Vec2::new(4.5, 8.0)),
            (Vec2::new(0.0, 4.5), Vec2::new(8.0, 4.5)),
            (Vec2::new(1.0, 7.0), Vec2::new(6.0, -3.0)),
        ];

        for (a, b) in edges {
            assert_ne!(is_top_left(a, b), is_top_left(b, a));
        }
    }

    #[test]
    fn test_fill_rule_bias() {
        assert_eq!(fill_rule_bias(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)), 0.0);
        assert_eq!(
            fill_rule_bias(Vec2::new(1.0, 0.0), Vec2::new(0.0, 0.0)),
            FILL_RULE_BIAS
        );
    }
}
