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

//! Owned pixel buffer
//!
//! A fixed-size grid of packed 32-bit ARGB pixels stored row-major with the
//! origin at the top-left corner. The buffer never reallocates after creation;
//! rasterizers only mutate its contents in place.

use crate::core::error::{RasterError, Result};

/// Width×height grid of packed ARGB pixels
///
/// Invariant: `pixels.len() == width * height`. All writes go through
/// [`PixelBuffer::set_pixel`], which bounds-checks signed coordinates before
/// computing the index `y * width + x`.
///
/// # Examples
///
/// ```
/// use trirast::core::image::PixelBuffer;
///
/// let mut image = PixelBuffer::new(800, 600).unwrap();
/// image.clear(0xFFFFFFFF);
///
/// assert!(image.set_pixel(10, 20, 0xFF000000));
/// assert_eq!(image.get_pixel(10, 20), Some(0xFF000000));
///
/// // Out-of-range writes are ignored
/// assert!(!image.set_pixel(-1, 0, 0));
/// assert!(!image.set_pixel(800, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Bytes per stored pixel
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Allocate a buffer of `width * height` pixels, initialized to zero
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidDimensions`] if either dimension is zero,
    /// or if the byte size would not fit in a 32-bit bitmap size field.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    /// Wrap existing pixel data
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidDimensions`] for unusable dimensions and
    /// [`RasterError::InvalidBitmap`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        let expected = Self::checked_len(width, height)?;
        if pixels.len() != expected {
            return Err(RasterError::InvalidBitmap(format!(
                "pixel data holds {} pixels, expected {}",
                pixels.len(),
                expected
            )));
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Pixel count for the given dimensions
    ///
    /// The byte size plus the 54-byte bitmap header must fit the 32-bit
    /// file size field.
    fn checked_len(width: u32, height: u32) -> Result<usize> {
        let fits = (width as u64)
            .checked_mul(height as u64)
            .and_then(|n| n.checked_mul(Self::BYTES_PER_PIXEL as u64))
            .is_some_and(|byte_len| byte_len <= (u32::MAX - 54) as u64);
        if width == 0 || height == 0 || !fits {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        Ok((width as usize) * (height as usize))
    }

    /// Width in pixels
    #[inline(always)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    #[inline(always)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total size of the pixel data in bytes
    pub fn byte_len(&self) -> usize {
        self.pixels.len() * Self::BYTES_PER_PIXEL
    }

    /// Fill every pixel with `color`
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Write a single pixel
    ///
    /// Coordinates outside the buffer are ignored. Returns `true` if the
    /// pixel was written.
    #[inline(always)]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) -> bool {
        match self.index_of(x, y) {
            Some(index) => {
                self.pixels[index] = color;
                true
            }
            None => false,
        }
    }

    /// Read a single pixel, or `None` if out of bounds
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index_of(x, y).map(|index| self.pixels[index])
    }

    /// Row-major pixel data, top row first
    pub fn as_slice(&self) -> &[u32] {
        &self.pixels
    }

    /// Consume the buffer and return its pixel data
    pub fn into_pixels(self) -> Vec<u32> {
        self.pixels
    }

    #[inline(always)]
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let (ux, uy) = (x as u32, y as u32);
        if x < 0 || y < 0 || ux >= self.width || uy >= self.height {
            return None;
        }
        Some((uy as usize) * (self.width as usize) + ux as usize)
    }
}
