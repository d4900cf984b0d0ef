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

//! Software rasterizer
//!
//! Converts primitives into pixels of a [`PixelBuffer`](crate::core::image::PixelBuffer).
//!
//! - [`rasterize_triangle`]: Gouraud-shaded triangles with the top-left fill rule
//! - [`draw_line`] / [`draw_polyline`]: Bresenham lines
//! - [`edge_function`] / [`is_top_left`]: the half-space tests the triangle
//!   rasterizer is built on
//!
//! All drawing is single-threaded and writes in place; nothing here allocates
//! per pixel.

mod edge;
mod line;
mod primitives;
mod triangle;

pub use edge::{edge_function, fill_rule_bias, is_top_left, FILL_RULE_BIAS};
pub use line::{draw_line, draw_polyline};
pub use primitives::{Triangle, Vec2};
pub use triangle::{rasterize_triangle, DEGENERATE_AREA_EPSILON};
