//! The 32 segments every glyph is assembled from.
//!
//! ```text
//!     basic 16 segments       next 16 segments
//!
//!        0     1
//!       ---- ----
//!      |\   |   /|              /   \
//!    7 | \F |8 /9| 2         13/  o  \10
//!      |  \ | /  |            /  1F   \
//!       -E-- --A-
//!      |  / | \  |            \  1E   /              \   /
//!    6 | /D |C \B| 3         12\  o  /11   ---- ----   X
//!      |/   |   \|              \   /       15   14   /   \
//!       ---- ----                o 1D               17    16
//!         5    4           1B|  1C|    |18
//!                            |    |    |
//!                             ---- ----
//!                              1A   19
//! ```
//!
//! The glyph's center is where 8, A, C and E meet. The cell spans -16..16
//! in both directions, with descenders reaching down to 24.

/// Segment endpoints `[x1, y1, x2, y2]` on the normalized grid.
pub static SEGMENTS: [[i8; 4]; 32] = [
    [-16, -16, 0, -16], // 0x00
    [0, -16, 16, -16],  // 0x01
    [16, -16, 16, 0],   // 0x02
    [16, 0, 16, 16],    // 0x03
    [16, 16, 0, 16],    // 0x04
    [0, 16, -16, 16],   // 0x05
    [-16, 16, -16, 0],  // 0x06
    [-16, 0, -16, -16], // 0x07
    [0, 0, 0, -16],     // 0x08
    [0, 0, 16, -16],    // 0x09
    [16, 0, 0, 0],      // 0x0A
    [0, 0, 16, 16],     // 0x0B
    [0, 0, 0, 16],      // 0x0C
    [0, 0, -16, 16],    // 0x0D
    [0, 0, -16, 0],     // 0x0E
    [0, 0, -16, -16],   // 0x0F
    [0, -16, 16, 0],    // 0x10
    [16, 0, 0, 16],     // 0x11
    [0, 16, -16, 0],    // 0x12
    [-16, 0, 0, -16],   // 0x13
    [16, 8, 0, 8],      // 0x14
    [0, 8, -16, 8],     // 0x15
    [16, 16, -16, 0],   // 0x16
    [-16, 16, 16, 0],   // 0x17
    [16, 16, 16, 24],   // 0x18
    [16, 24, 0, 24],    // 0x19
    [0, 24, -16, 24],   // 0x1A
    [-16, 24, -16, 16], // 0x1B
    [0, 24, 0, 16],     // 0x1C
    [0, 16, 0, 16],     // 0x1D
    [0, 8, 0, 8],       // 0x1E
    [0, -8, 0, -8],     // 0x1F
];

/// Offset from a segment to the segment that continues it in a straight
/// line, or 0 if it has none.
///
/// Pairs: 0 & 1, 4 & 5, 0x0A & 0x0E, 0x14 & 0x15, 0x19 & 0x1A.
static PAIRS: [u8; 32] = [
    1, 0, 0, 0, 1, 0, 0, 0, //
    0, 0, 4, 0, 0, 0, 0, 0, //
    0, 0, 0, 0, 1, 0, 0, 0, //
    0, 1, 0, 0, 0, 0, 0, 0, //
];

/// Segments from this index upward are drawn as dots.
pub const DOT_THRESHOLD: u8 = 29;

/// The segment that continues `index` in a straight line, if any.
pub fn partner(index: u8) -> Option<u8> {
    match PAIRS.get(usize::from(index)) {
        Some(&offset) if offset != 0 => Some(index + offset),
        _ => None,
    }
}

/// How a segment is drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// A thick bar between the two endpoints.
    Bar,
    /// A dot centered on the first endpoint.
    Dot,
}

impl SegmentKind {
    pub fn of(index: u8) -> Self {
        if index >= DOT_THRESHOLD {
            Self::Dot
        } else {
            Self::Bar
        }
    }
}

/// A segment of a glyph, after merging with its partner where both are on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GlyphSegment {
    /// Index of the (first) segment
    pub index: u8,
    pub kind: SegmentKind,
    /// Endpoints on the normalized grid
    pub coords: [i8; 4],
}

/// Decode a glyph mask into its segments, see [segments].
#[derive(Debug, Clone)]
pub struct Segments {
    mask: u32,
    index: u8,
}

/// Iterate over the active segments of `mask`, lowest bit first.
///
/// When a segment and its [partner] are both on, they come out as a single
/// segment running from the start of the first to the end of the second,
/// and the partner is not visited again.
pub fn segments(mask: u32) -> Segments {
    Segments { mask, index: 0 }
}

impl Iterator for Segments {
    type Item = GlyphSegment;

    fn next(&mut self) -> Option<GlyphSegment> {
        while self.index < 32 {
            let index = self.index;
            self.index += 1;

            if self.mask & (1 << index) == 0 {
                continue;
            }

            let mut coords = SEGMENTS[usize::from(index)];

            if let Some(other) = partner(index)
                && self.mask & (1 << other) != 0
            {
                self.mask &= !(1 << other);
                let end = SEGMENTS[usize::from(other)];
                coords[2] = end[2];
                coords[3] = end[3];
            }

            return Some(GlyphSegment {
                index,
                kind: SegmentKind::of(index),
                coords,
            });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn pairs_continue_each_other() {
        for index in 0..32u8 {
            if let Some(other) = partner(index) {
                let first = SEGMENTS[usize::from(index)];
                let second = SEGMENTS[usize::from(other)];
                // the first segment ends where its partner starts
                assert_eq!([first[2], first[3]], [second[0], second[1]], "{index}");
            }
        }

        let pairs: Vec<_> = (0..32).filter_map(|i| partner(i).map(|p| (i, p))).collect();
        assert_eq!(pairs, [(0, 1), (4, 5), (10, 14), (20, 21), (25, 26)]);
    }

    #[test]
    fn merged_pair_is_one_segment() {
        let decoded: Vec<_> = segments(0b11).collect();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].index, 0);
        assert_eq!(decoded[0].coords, [-16, -16, 16, -16]);
    }

    #[test]
    fn lone_partner_draws_alone() {
        let decoded: Vec<_> = segments(1 << 1).collect();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].coords, SEGMENTS[1]);

        let decoded: Vec<_> = segments(1 << 10).collect();
        assert_eq!(decoded[0].coords, SEGMENTS[10]);
    }

    #[test]
    fn distant_pair_merges() {
        let decoded: Vec<_> = segments((1 << 10) | (1 << 14)).collect();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].coords, [16, 0, -16, 0]);
    }

    #[test]
    fn every_pair_consumed_once() {
        let decoded: Vec<_> = segments(u32::MAX).map(|s| s.index).collect();
        assert_eq!(decoded.len(), 32 - 5);
        for absorbed in [1, 5, 14, 21, 26] {
            assert!(!decoded.contains(&absorbed));
        }
        // scan order is ascending
        assert!(decoded.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn dots_from_threshold() {
        assert_eq!(SegmentKind::of(28), SegmentKind::Bar);
        assert_eq!(SegmentKind::of(29), SegmentKind::Dot);
        assert_eq!(SegmentKind::of(31), SegmentKind::Dot);

        let kinds: Vec<_> = segments(0xE000_0000).map(|s| s.kind).collect();
        assert_eq!(kinds, [SegmentKind::Dot; 3]);
    }
}
