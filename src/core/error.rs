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

//! Error types for the rasterizer
//!
//! All fallible operations in the crate return [`Result<T>`], an alias for
//! `std::result::Result<T, RasterError>`.

use thiserror::Error;

/// Errors produced while allocating images, parsing scenes, or reading bitmaps
#[derive(Debug, Error)]
pub enum RasterError {
    /// Pixel buffer dimensions are zero or too large to address
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },

    /// Underlying file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bitmap data is malformed or uses an unsupported layout
    #[error("Invalid bitmap: {0}")]
    InvalidBitmap(String),

    /// Scene file could not be deserialized
    #[error("Failed to parse scene: {0}")]
    SceneParse(String),

    /// Scene deserialized but describes something that cannot be rendered
    #[error("Invalid scene: {0}")]
    InvalidScene(String),
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, RasterError>;
