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

//! Uncompressed 32-bit BMP encoding and decoding
//!
//! # File Layout
//!
//! | Offset | Size | Field                                   |
//! |--------|------|-----------------------------------------|
//! | 0      | 14   | File header (`"BM"`, file size, offset) |
//! | 14     | 40   | Info header (dimensions, 32 bpp, BI_RGB)|
//! | 54     | w×h×4| Packed ARGB pixels, little-endian       |
//!
//! Rows are stored in buffer order, top row first, even though the height
//! field is positive. Readers of files produced here must treat the first
//! stored row as row 0.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use super::buffer::PixelBuffer;
use crate::core::error::{RasterError, Result};

/// `"BM"` read as a little-endian u16
pub const BITMAP_FILE_TYPE: u16 = 0x4D42;

/// Size of the BITMAPFILEHEADER block
pub const FILE_HEADER_SIZE: u32 = 14;

/// Size of the BITMAPINFOHEADER block
pub const INFO_HEADER_SIZE: u32 = 40;

/// Offset of the pixel data from the start of the file
pub const HEADER_SIZE: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

const BITS_PER_PIXEL: u16 = 32;
const COMPRESSION_NONE: u32 = 0;

/// Combined file and info header of a 32-bit uncompressed bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapHeader {
    /// Total file size in bytes
    pub file_size: u32,
    /// Offset of the pixel data
    pub bitmap_offset: u32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels (negative for explicitly top-down files)
    pub height: i32,
    /// Bits per pixel
    pub bits_per_pixel: u16,
    /// Compression method (0 = none)
    pub compression: u32,
    /// Size of the pixel data in bytes
    pub size_of_bitmap: u32,
}

impl BitmapHeader {
    /// Header describing `image`
    pub fn for_image(image: &PixelBuffer) -> Self {
        // PixelBuffer guarantees byte_len + 54 fits in u32
        let size_of_bitmap = image.byte_len() as u32;
        Self {
            file_size: HEADER_SIZE + size_of_bitmap,
            bitmap_offset: HEADER_SIZE,
            width: image.width() as i32,
            height: image.height() as i32,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: COMPRESSION_NONE,
            size_of_bitmap,
        }
    }

    /// Serialize to the 54-byte on-disk representation
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE as usize] {
        let mut bytes = [0u8; HEADER_SIZE as usize];

        // BITMAPFILEHEADER; reserved fields at 6..10 stay zero
        bytes[0..2].copy_from_slice(&BITMAP_FILE_TYPE.to_le_bytes());
        bytes[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        bytes[10..14].copy_from_slice(&self.bitmap_offset.to_le_bytes());

        // BITMAPINFOHEADER; resolution and palette fields at 38..54 stay zero
        bytes[14..18].copy_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
        bytes[18..22].copy_from_slice(&self.width.to_le_bytes());
        bytes[22..26].copy_from_slice(&self.height.to_le_bytes());
        bytes[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
        bytes[28..30].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        bytes[30..34].copy_from_slice(&self.compression.to_le_bytes());
        bytes[34..38].copy_from_slice(&self.size_of_bitmap.to_le_bytes());

        bytes
    }

    /// Parse a header from the start of `data`
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidBitmap`] if the data is too short or the
    /// magic number is wrong.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE as usize {
            return Err(RasterError::InvalidBitmap(format!(
                "file is {} bytes, shorter than the {}-byte header",
                data.len(),
                HEADER_SIZE
            )));
        }

        let u16_at = |i: usize| u16::from_le_bytes([data[i], data[i + 1]]);
        let u32_at =
            |i: usize| u32::from_le_bytes([data[i], data[i + 1], data[i + 2], data[i + 3]]);
        let i32_at =
            |i: usize| i32::from_le_bytes([data[i], data[i + 1], data[i + 2], data[i + 3]]);

        let file_type = u16_at(0);
        if file_type != BITMAP_FILE_TYPE {
            return Err(RasterError::InvalidBitmap(format!(
                "bad file type 0x{:04X}",
                file_type
            )));
        }

        Ok(Self {
            file_size: u32_at(2),
            bitmap_offset: u32_at(10),
            width: i32_at(18),
            height: i32_at(22),
            bits_per_pixel: u16_at(28),
            compression: u32_at(30),
            size_of_bitmap: u32_at(34),
        })
    }
}

/// Encode `image` as a bitmap into any writer
///
/// # Errors
///
/// Propagates I/O errors from `writer`.
pub fn encode_bitmap<W: Write>(image: &PixelBuffer, mut writer: W) -> Result<()> {
    let header = BitmapHeader::for_image(image);
    writer.write_all(&header.to_bytes())?;

    let mut row = Vec::with_capacity(image.width() as usize * PixelBuffer::BYTES_PER_PIXEL);
    for pixels in image.as_slice().chunks_exact(image.width() as usize) {
        row.clear();
        for &pixel in pixels {
            row.extend_from_slice(&pixel.to_le_bytes());
        }
        writer.write_all(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write `image` to a bitmap file at `path`
///
/// # Errors
///
/// Returns [`RasterError::Io`] if the file cannot be created or written.
pub fn save_bitmap<P: AsRef<Path>>(image: &PixelBuffer, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    encode_bitmap(image, BufWriter::new(file))
}

/// Write `image` to `path`, reporting failures to the error log
///
/// Unlike [`save_bitmap`] this never fails: an unwritable destination is
/// logged with `log::error!` and the call returns normally. Returns `true`
/// if the file was written.
pub fn write_image<P: AsRef<Path>>(image: &PixelBuffer, path: P) -> bool {
    let path = path.as_ref();
    match save_bitmap(image, path) {
        Ok(()) => {
            log::info!(
                "Wrote {}x{} bitmap to {}",
                image.width(),
                image.height(),
                path.display()
            );
            true
        }
        Err(e) => {
            log::error!("Unable to write output file {}: {}", path.display(), e);
            false
        }
    }
}

/// Decode a 32-bit uncompressed bitmap
///
/// Rows are read in stored order; row 0 of the result is the first row in
/// the file.
///
/// # Errors
///
/// Returns [`RasterError::InvalidBitmap`] for unsupported formats or
/// truncated pixel data.
pub fn decode_bitmap(data: &[u8]) -> Result<PixelBuffer> {
    let header = BitmapHeader::parse(data)?;

    if header.bits_per_pixel != BITS_PER_PIXEL {
        return Err(RasterError::InvalidBitmap(format!(
            "unsupported bit depth {}",
            header.bits_per_pixel
        )));
    }
    if header.compression != COMPRESSION_NONE {
        return Err(RasterError::InvalidBitmap(format!(
            "unsupported compression {}",
            header.compression
        )));
    }

    let width = header.width.unsigned_abs();
    let height = header.height.unsigned_abs();
    let offset = header.bitmap_offset as usize;
    let len = (width as usize) * (height as usize);

    let end = len
        .checked_mul(PixelBuffer::BYTES_PER_PIXEL)
        .and_then(|n| n.checked_add(offset))
        .filter(|&end| end <= data.len())
        .ok_or_else(|| {
            RasterError::InvalidBitmap(format!(
                "pixel data for {}x{} truncated (file is {} bytes)",
                width,
                height,
                data.len()
            ))
        })?;

    let pixels = data[offset..end]
        .chunks_exact(PixelBuffer::BYTES_PER_PIXEL)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();

    PixelBuffer::from_pixels(width, height, pixels)
}

/// Read a bitmap file produced by [`save_bitmap`]
///
/// # Errors
///
/// Returns [`RasterError::Io`] if the file cannot be read, or
/// [`RasterError::InvalidBitmap`] if its contents are not a supported bitmap.
pub fn read_bitmap<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
    let mut data = Vec::new();
    File::open(path.as_ref())?.read_to_end(&mut data)?;
    decode_bitmap(&data)
}
