#![no_std]

//! `segment-text-bmp` reads uncompressed Windows bitmaps into a
//! [PixelGrid] that `segment-text` can blit onto a display buffer.
//!
//! Supported are 1, 4 and 8 bits per pixel through a color table, and 24
//! bits per pixel direct color. Colors are reduced to display codes with
//! one of the [Quantize] modes as the grid is built:
//!
//! ```no_run
//! use segment_text_bmp::{Bitmap, Quantize};
//!
//! let logo = Bitmap::from_path("logo.bmp")?.pixels(Quantize::Threshold)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
mod fs;
pub mod quantize;

use alloc::vec::Vec;
use core::{fmt, ops::Range};

use segment_text_core::{PixelGrid, PixelValue, Rgb};
use thiserror::Error;
use tracing::debug;

#[cfg(feature = "std")]
pub use fs::LoadError;
pub use quantize::Quantize;

/// Size of the file header plus the smallest (`BITMAPINFOHEADER`) info header.
const HEADER_LEN: usize = 54;

/// Largest width or height accepted.
const MAX_DIMENSION: i32 = 16384;

/// Errors from decoding a bitmap. None of them leave a partial grid behind.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum BmpError {
    #[error("not a BMP file")]
    BadSignature,

    #[error("compression method {0} is not supported")]
    Compressed(u32),

    #[error("{0} bits per pixel is not supported")]
    UnsupportedDepth(u16),

    #[error("invalid image size {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("file is truncated, needed {needed} bytes but got {len}")]
    Truncated { needed: usize, len: usize },

    #[error("pixel refers to color {index} but the color table has {len} entries")]
    PaletteIndex { index: usize, len: usize },

    #[error("header offsets point outside the addressable range")]
    BadOffset,
}

fn read_u16(data: &[u8], off: usize) -> u16 {
    u16::from_le_bytes([data[off], data[off + 1]])
}

fn read_u32(data: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([data[off], data[off + 1], data[off + 2], data[off + 3]])
}

fn read_i32(data: &[u8], off: usize) -> i32 {
    i32::from_le_bytes([data[off], data[off + 1], data[off + 2], data[off + 3]])
}

fn ensure_len(data: &[u8], needed: usize) -> Result<(), BmpError> {
    if data.len() < needed {
        return Err(BmpError::Truncated {
            needed,
            len: data.len(),
        });
    }
    Ok(())
}

/// The `len` bytes starting at `start`, if the file holds all of them.
fn region(data: &[u8], start: usize, len: usize) -> Result<Range<usize>, BmpError> {
    let end = start.checked_add(len).ok_or(BmpError::BadOffset)?;
    ensure_len(data, end)?;
    Ok(start..end)
}

/// A parsed bitmap file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    depth: u16,
    top_down: bool,
    file_size: usize,
    color_table: Vec<Rgb>,
    pixel_data: Vec<u8>,
}

impl Bitmap {
    /// Parse a complete BMP file held in memory.
    pub fn parse(data: &[u8]) -> Result<Self, BmpError> {
        ensure_len(data, 2)?;
        if &data[0..2] != b"BM" {
            return Err(BmpError::BadSignature);
        }
        ensure_len(data, HEADER_LEN)?;

        let compression = read_u32(data, 30);
        if compression != 0 {
            return Err(BmpError::Compressed(compression));
        }

        let depth = read_u16(data, 28);
        if !matches!(depth, 1 | 4 | 8 | 24) {
            return Err(BmpError::UnsupportedDepth(depth));
        }

        let width = read_i32(data, 18);
        let height = read_i32(data, 22);
        if width <= 0
            || width > MAX_DIMENSION
            || height == 0
            || height.unsigned_abs() > MAX_DIMENSION as u32
        {
            return Err(BmpError::InvalidDimensions { width, height });
        }
        let top_down = height < 0;
        let (width, height) = (width as usize, height.unsigned_abs() as usize);

        let color_table = if depth == 24 {
            Vec::new()
        } else {
            let colors = match read_u32(data, 46) as usize {
                0 => 1 << depth,
                n => n.min(1 << depth),
            };
            let start = (read_u32(data, 14) as usize)
                .checked_add(14)
                .ok_or(BmpError::BadOffset)?;
            let table = region(data, start, 4 * colors)?;

            // stored as blue, green, red, reserved
            data[table]
                .chunks_exact(4)
                .map(|entry| Rgb::new(entry[2], entry[1], entry[0]))
                .collect()
        };

        let row_size = Self::row_size_for(width, depth);
        let size = row_size.checked_mul(height).ok_or(BmpError::BadOffset)?;
        let pixels = region(data, read_u32(data, 10) as usize, size)?;

        debug!(width, height, depth, top_down, "parsed bitmap header");

        Ok(Self {
            width,
            height,
            depth,
            top_down,
            file_size: pixels.end,
            color_table,
            pixel_data: data[pixels].to_vec(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bits per pixel.
    pub fn depth(&self) -> u16 {
        self.depth
    }

    /// The color table, empty for 24-bit images.
    pub fn color_table(&self) -> &[Rgb] {
        &self.color_table
    }

    /// Bytes per stored row, including the padding to a multiple of 4.
    fn row_size_for(width: usize, depth: u16) -> usize {
        (width * usize::from(depth)).div_ceil(32) * 4
    }

    /// Decode every pixel, top row first, converting colors with `quantize`.
    ///
    /// Indexed images convert their color table once, so a failing
    /// [Quantize::User] function is reported once per table entry.
    pub fn pixels(&self, quantize: Quantize<'_>) -> Result<PixelGrid, BmpError> {
        let palette: Vec<PixelValue> =
            self.color_table.iter().map(|&c| quantize.apply(c)).collect();
        let row_size = Self::row_size_for(self.width, self.depth);
        let mut pixels = Vec::with_capacity(self.width * self.height);

        for row in 0..self.height {
            // rows are stored bottom-up unless the height was negative
            let stored = if self.top_down {
                row
            } else {
                self.height - 1 - row
            };
            let bytes = &self.pixel_data[stored * row_size..(stored + 1) * row_size];

            for col in 0..self.width {
                let value = match self.depth {
                    24 => {
                        let px = &bytes[col * 3..col * 3 + 3];
                        quantize.apply(Rgb::new(px[2], px[1], px[0]))
                    }
                    depth => {
                        let index = usize::from(match depth {
                            1 => (bytes[col / 8] >> (7 - col % 8)) & 0x01,
                            4 if col % 2 == 0 => bytes[col / 2] >> 4,
                            4 => bytes[col / 2] & 0x0F,
                            _ => bytes[col],
                        });
                        *palette.get(index).ok_or(BmpError::PaletteIndex {
                            index,
                            len: palette.len(),
                        })?
                    }
                };
                pixels.push(value);
            }
        }

        // dimensions are consistent by construction
        PixelGrid::new(self.width, self.height, pixels).map_err(|_| BmpError::InvalidDimensions {
            width: self.width as i32,
            height: self.height as i32,
        })
    }
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}B, [{} x {}], {}bpp",
            self.file_size, self.width, self.height, self.depth
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, vec, vec::Vec};

    use super::*;
    use segment_text_core::PixelValue::Code;

    /// Assemble a BMP file. `rows` are given bottom-up, already padded.
    fn bmp(width: i32, height: i32, depth: u16, palette: &[[u8; 4]], rows: &[&[u8]]) -> Vec<u8> {
        let table_len = 4 * palette.len();
        let data_len: usize = rows.iter().map(|r| r.len()).sum();
        let offset = (HEADER_LEN + table_len) as u32;

        let mut out = Vec::new();
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&(offset + data_len as u32).to_le_bytes());
        out.extend_from_slice(&[0; 4]);
        out.extend_from_slice(&offset.to_le_bytes());
        out.extend_from_slice(&40u32.to_le_bytes());
        out.extend_from_slice(&width.to_le_bytes());
        out.extend_from_slice(&height.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&depth.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&(data_len as u32).to_le_bytes());
        out.extend_from_slice(&[0; 8]);
        out.extend_from_slice(&(palette.len() as u32).to_le_bytes());
        out.extend_from_slice(&[0; 4]);
        assert_eq!(out.len(), HEADER_LEN);

        for entry in palette {
            out.extend_from_slice(entry);
        }
        for row in rows {
            out.extend_from_slice(row);
        }
        out
    }

    const BLACK_WHITE: [[u8; 4]; 2] = [[0, 0, 0, 0], [255, 255, 255, 0]];

    #[test]
    fn one_bit_two_by_two() {
        // bottom row: white, black; top row: black, white
        // each row is one data byte plus three bytes of padding
        let file = bmp(
            2,
            2,
            1,
            &BLACK_WHITE,
            &[&[0b1000_0000, 0xAA, 0xAA, 0xAA], &[0b0100_0000, 0xAA, 0xAA, 0xAA]],
        );
        let bitmap = Bitmap::parse(&file).unwrap();
        assert_eq!((bitmap.width(), bitmap.height(), bitmap.depth()), (2, 2, 1));

        let grid = bitmap.pixels(Quantize::Threshold).unwrap();
        let rows: Vec<Vec<PixelValue>> = grid.rows().map(<[PixelValue]>::to_vec).collect();
        assert_eq!(rows, [[Code(0), Code(1)], [Code(1), Code(0)]]);
    }

    #[test]
    fn one_bit_wide_row_spans_bytes() {
        // 10 pixels: all white but the last, two data bytes, two padding
        let file = bmp(10, 1, 1, &BLACK_WHITE, &[&[0xFF, 0b1000_0000, 0, 0]]);
        let grid = Bitmap::parse(&file).unwrap().pixels(Quantize::Threshold).unwrap();
        assert_eq!(grid.get(0, 8), Some(Code(1)));
        assert_eq!(grid.get(0, 9), Some(Code(0)));
    }

    #[test]
    fn four_bit_nibbles() {
        let palette: Vec<[u8; 4]> = (0..16u8).map(|i| [i * 16, i * 16, i * 16, 0]).collect();
        // 3 pixels: 0x1, 0x2, 0xF
        let file = bmp(3, 1, 4, &palette, &[&[0x12, 0xF0, 0, 0]]);
        let grid = Bitmap::parse(&file)
            .unwrap()
            .pixels(Quantize::User(&|rgb: Rgb| Some(u32::from(rgb.r / 16))))
            .unwrap();
        let row: Vec<_> = grid.rows().next().unwrap().to_vec();
        assert_eq!(row, [Code(1), Code(2), Code(15)]);
    }

    #[test]
    fn eight_bit_top_down() {
        let palette = [[0, 0, 0, 0], [0, 0, 255, 0], [255, 0, 0, 0]];
        // negative height: first stored row is the top row
        let file = bmp(1, -2, 8, &palette, &[&[1, 0, 0, 0], &[2, 0, 0, 0]]);
        let bitmap = Bitmap::parse(&file).unwrap();
        assert_eq!(bitmap.color_table()[1], Rgb::new(255, 0, 0));

        let grid = bitmap.pixels(Quantize::None).unwrap();
        assert_eq!(grid.get(0, 0), Some(PixelValue::Rgb(Rgb::new(255, 0, 0))));
        assert_eq!(grid.get(1, 0), Some(PixelValue::Rgb(Rgb::new(0, 0, 255))));
    }

    #[test]
    fn twenty_four_bit_bgr() {
        // 2 pixels per row, 6 bytes of color and 2 of padding
        let file = bmp(
            2,
            1,
            24,
            &[],
            &[&[0, 0, 255, 255, 255, 255, 0, 0]],
        );
        let grid = Bitmap::parse(&file).unwrap().pixels(Quantize::Rgb565).unwrap();
        assert_eq!(grid.get(0, 0), Some(Code(0xF800)));
        assert_eq!(grid.get(0, 1), Some(Code(0xFFFF)));
    }

    #[test]
    fn rejects_bad_files() {
        let good = bmp(2, 2, 1, &BLACK_WHITE, &[&[0; 4], &[0; 4]]);

        let mut bad = good.clone();
        bad[0] = b'X';
        assert_eq!(Bitmap::parse(&bad), Err(BmpError::BadSignature));

        let mut bad = good.clone();
        bad[30] = 1;
        assert_eq!(Bitmap::parse(&bad), Err(BmpError::Compressed(1)));

        let mut bad = good.clone();
        bad[28] = 16;
        assert_eq!(Bitmap::parse(&bad), Err(BmpError::UnsupportedDepth(16)));

        let mut bad = good.clone();
        bad[18..22].copy_from_slice(&0i32.to_le_bytes());
        assert!(matches!(Bitmap::parse(&bad), Err(BmpError::InvalidDimensions { .. })));

        assert!(matches!(
            Bitmap::parse(&good[..good.len() - 1]),
            Err(BmpError::Truncated { .. })
        ));
        assert!(matches!(Bitmap::parse(b"BM"), Err(BmpError::Truncated { .. })));
    }

    #[test]
    fn huge_offsets_are_errors() {
        let good = bmp(2, 2, 1, &BLACK_WHITE, &[&[0; 4], &[0; 4]]);

        // pixel data offset, then info header size which places the color table
        for field in [10, 14] {
            let mut bad = good.clone();
            bad[field..field + 4].copy_from_slice(&u32::MAX.to_le_bytes());
            // 32-bit targets overflow, wider ones simply run out of file
            assert!(matches!(
                Bitmap::parse(&bad),
                Err(BmpError::BadOffset | BmpError::Truncated { .. })
            ));
        }

        assert_eq!(region(&good, usize::MAX, 4), Err(BmpError::BadOffset));
        assert_eq!(region(&good, 62, 8), Ok(62..70));
    }

    #[test]
    fn palette_index_out_of_range() {
        // two-entry table, but the pixel asks for color 5
        let file = bmp(1, 1, 8, &BLACK_WHITE, &[&[5, 0, 0, 0]]);
        let bitmap = Bitmap::parse(&file).unwrap();
        assert_eq!(
            bitmap.pixels(Quantize::Threshold),
            Err(BmpError::PaletteIndex { index: 5, len: 2 })
        );
    }

    #[test]
    fn display_summary() {
        let file = bmp(2, 2, 1, &BLACK_WHITE, &[&[0; 4], &[0; 4]]);
        let bitmap = Bitmap::parse(&file).unwrap();
        assert_eq!(format!("{bitmap}"), "70B, [2 x 2], 1bpp");
    }

    #[test]
    fn rows_in_grid_order() {
        let file = bmp(1, 3, 8, &BLACK_WHITE, &[&[0, 0, 0, 0], &[1, 0, 0, 0], &[1, 0, 0, 0]]);
        let grid = Bitmap::parse(&file).unwrap().pixels(Quantize::Threshold).unwrap();
        let column: Vec<_> = (0..3).map(|row| grid.get(row, 0)).collect();
        assert_eq!(column, vec![Some(Code(1)), Some(Code(1)), Some(Code(0))]);
    }
}
