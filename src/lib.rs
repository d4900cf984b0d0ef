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

//! trirast: a software triangle rasterizer
//!
//! Fills triangles into an in-memory ARGB pixel buffer using edge functions
//! with the top-left fill rule, and writes the result as an uncompressed
//! 32-bit BMP file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`core::image`]: Pixel buffer, ARGB color codec, BMP writer/reader
//! - [`core::raster`]: Edge functions, triangle and line rasterizers
//! - [`core::scene`]: TOML scene descriptions
//! - [`core::error`]: Error type shared by all fallible operations
//!
//! # Example
//!
//! ```no_run
//! use trirast::core::image::{write_image, PixelBuffer};
//! use trirast::core::raster::{rasterize_triangle, Vec2};
//!
//! let mut image = PixelBuffer::new(800, 600)?;
//! image.clear(0xFFFFFFFF);
//!
//! rasterize_triangle(
//!     &mut image,
//!     Vec2::new(200.0, 100.0),
//!     Vec2::new(600.0, 300.0),
//!     Vec2::new(300.0, 500.0),
//!     0xFFFF0000,
//!     0xFF00FF00,
//!     0xFF0000FF,
//! );
//!
//! write_image(&image, "output.bmp");
//! # Ok::<(), trirast::RasterError>(())
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`core::error::Result<T>`] which is an alias for
//! `Result<T, RasterError>`.

pub mod core;

// Re-export commonly used types
pub use core::error::{RasterError, Result};
