use alloc::{vec, vec::Vec};

use crate::Canvas;

/// An in-memory 1 bit per pixel frame buffer.
///
/// Pixels are packed horizontally, eight to a byte, most significant bit
/// first, each row starting on a fresh byte. This is the layout most
/// monochrome e-paper and OLED controllers accept as-is.
///
/// Any color with the low bit set turns a pixel on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoBuffer {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

impl MonoBuffer {
    /// A cleared buffer of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        let stride = (width as usize).div_ceil(8);
        Self {
            width,
            height,
            stride,
            data: vec![0; stride * height as usize],
        }
    }

    /// Wrap existing frame data. Returns `None` if `data` has the wrong length.
    pub fn from_bytes(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        let stride = (width as usize).div_ceil(8);
        (data.len() == stride * height as usize).then_some(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Raw frame data, ready to send to a display.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Number of pixels that are on.
    pub fn count_set(&self) -> usize {
        (0..self.height as i32)
            .flat_map(|y| (0..self.width as i32).map(move |x| (x, y)))
            .filter(|&(x, y)| self.pixel(x, y) == Some(1))
            .count()
    }

    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((y * self.stride + x / 8, 0x80 >> (x % 8)))
    }
}

impl Canvas for MonoBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some((idx, mask)) = self.locate(x, y) {
            if color & 1 != 0 {
                self.data[idx] |= mask;
            } else {
                self.data[idx] &= !mask;
            }
        }
    }

    fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.locate(x, y)
            .map(|(idx, mask)| u32::from(self.data[idx] & mask != 0))
    }

    fn fill(&mut self, color: u32) {
        let byte = if color & 1 != 0 { 0xFF } else { 0x00 };
        self.data.fill(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_pack_msb_first() {
        let mut buf = MonoBuffer::new(10, 2);
        assert_eq!(buf.stride(), 2);
        assert_eq!(buf.as_bytes().len(), 4);

        buf.set_pixel(0, 0, 1);
        buf.set_pixel(9, 1, 1);
        assert_eq!(buf.as_bytes(), &[0x80, 0x00, 0x00, 0x40]);

        buf.set_pixel(0, 0, 0);
        assert_eq!(buf.pixel(0, 0), Some(0));
        assert_eq!(buf.pixel(9, 1), Some(1));
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut buf = MonoBuffer::new(8, 8);
        buf.set_pixel(-1, 0, 1);
        buf.set_pixel(8, 0, 1);
        buf.set_pixel(0, 8, 1);
        assert_eq!(buf.count_set(), 0);
        assert_eq!(buf.pixel(8, 0), None);
    }

    #[test]
    fn fill_and_from_bytes() {
        let mut buf = MonoBuffer::new(12, 3);
        buf.fill(1);
        assert_eq!(buf.count_set(), 36);

        let copy = MonoBuffer::from_bytes(12, 3, buf.clone().into_bytes());
        assert_eq!(copy, Some(buf));
        assert_eq!(MonoBuffer::from_bytes(12, 3, vec![0; 5]), None);
    }

    #[test]
    fn default_primitives() {
        let mut buf = MonoBuffer::new(16, 16);
        buf.rect(2, 2, 4, 3, 1, false);
        // 4 + 4 on the long edges, 1 + 1 left in the short ones
        assert_eq!(buf.count_set(), 10);

        buf.fill(0);
        buf.rect(2, 2, 4, 3, 1, true);
        assert_eq!(buf.count_set(), 12);

        buf.fill(0);
        buf.line(0, 0, 5, 5, 1);
        assert_eq!(buf.count_set(), 6);
        assert_eq!(buf.pixel(3, 3), Some(1));

        buf.fill(0);
        buf.ellipse(8, 8, 3, 3, 1, false);
        assert_eq!(buf.pixel(11, 8), Some(1));
        assert_eq!(buf.pixel(8, 5), Some(1));
        assert_eq!(buf.pixel(8, 8), Some(0));

        buf.ellipse(8, 8, 3, 3, 1, true);
        assert_eq!(buf.pixel(8, 8), Some(1));
    }
}
