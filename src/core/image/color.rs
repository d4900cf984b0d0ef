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

//! Packed ARGB color codec
//!
//! Pixels are stored as 32-bit words with one 8-bit channel per byte:
//! - Bits 24-31: Alpha
//! - Bits 16-23: Red
//! - Bits 8-15: Green
//! - Bits 0-7: Blue

/// Pack four channels into a 32-bit ARGB word
///
/// Each channel is masked to its low 8 bits, so out-of-range inputs wrap
/// instead of being rejected.
///
/// # Examples
///
/// ```
/// use trirast::core::image::pack_color;
///
/// assert_eq!(pack_color(0xFF, 0x12, 0x34, 0x56), 0xFF12_3456);
/// assert_eq!(pack_color(0xFF, 0x100, 0, 0), 0xFF00_0000); // red wraps to 0
/// ```
#[inline(always)]
pub fn pack_color(a: i32, r: i32, g: i32, b: i32) -> u32 {
    (((a & 0xFF) as u32) << 24)
        | (((r & 0xFF) as u32) << 16)
        | (((g & 0xFF) as u32) << 8)
        | ((b & 0xFF) as u32)
}

/// An unpacked ARGB color with 8 bits per channel
///
/// # Examples
///
/// ```
/// use trirast::core::image::Color;
///
/// let color = Color::from_u32(0x80FF4020);
/// assert_eq!(color.a, 0x80);
/// assert_eq!(color.r, 0xFF);
/// assert_eq!(color.g, 0x40);
/// assert_eq!(color.b, 0x20);
/// assert_eq!(color.to_u32(), 0x80FF4020);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    /// Alpha channel (0-255)
    pub a: u8,
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Color {
    /// Opaque white, the default clear color
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF, 0xFF);

    /// Create a color from individual channels
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Unpack a 32-bit ARGB word
    pub const fn from_u32(value: u32) -> Self {
        Self {
            a: (value >> 24) as u8,
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Pack into a 32-bit ARGB word
    pub fn to_u32(self) -> u32 {
        pack_color(self.a as i32, self.r as i32, self.g as i32, self.b as i32)
    }

    /// Channels as `[a, r, g, b]`, in the order the rasterizer interpolates them
    pub(crate) fn channels(self) -> [f64; 4] {
        [self.a as f64, self.r as f64, self.g as f64, self.b as f64]
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_u32()
    }
}
