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

//! Image storage and serialization
//!
//! - [`PixelBuffer`]: owned row-major grid of packed ARGB pixels
//! - [`Color`] / [`pack_color`]: channel packing and unpacking
//! - [`bitmap`]: uncompressed 32-bit BMP writer and reader

pub mod bitmap;
mod buffer;
mod color;

pub use bitmap::{read_bitmap, save_bitmap, write_image};
pub use buffer::PixelBuffer;
pub use color::{pack_color, Color};
