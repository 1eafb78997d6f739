use proptest::prelude::*;
use segment_text_core::{Line, Point, Renderer, Stroke, TextConfig, TextStyle, geometry};
use segment_text_seg32::{GlyphSet, Seg32Renderer, render_glyph, segments, segments::partner};

fn bar(x1: i32, y1: i32, x2: i32, y2: i32, boldness: i32) -> Stroke {
    Stroke::Bar {
        line: Line::new(Point::new(x1, y1), Point::new(x2, y2)),
        boldness,
    }
}

#[test]
fn zero_matches_hand_decoded_mask() {
    let origin = Point::new(50, 30);
    let strokes =
        Seg32Renderer::render_text("0", origin, &TextStyle::default(), GlyphSet::Standard);

    // 0x000022FF: segments 0-7, 9 and 0x0D. 0 absorbs 1 and 4 absorbs 5.
    // Default cell is 8 wide and 10 tall, so x halves and y scales by 10/16.
    let expected = [
        bar(-8, -10, 8, -10, 3), // 0 + 1
        bar(8, -10, 8, 0, 3),    // 2
        bar(8, 0, 8, 10, 3),     // 3
        bar(8, 10, -8, 10, 3),   // 4 + 5
        bar(-8, 10, -8, 0, 3),   // 6
        bar(-8, 0, -8, -10, 3),  // 7
        bar(0, 0, 8, -10, 3),    // 9
        bar(0, 0, -8, 10, 3),    // 0x0D
    ]
    .map(|stroke| match stroke {
        Stroke::Bar { line, boldness } => Stroke::Bar {
            line: line.translate(origin),
            boldness,
        },
        dot => dot,
    });

    assert_eq!(strokes, expected);
}

#[test]
fn runs_advance_along_the_angle() {
    let mut style = TextStyle::default();
    style.configure(TextConfig::new().angle(90).gap(3));

    let one = Seg32Renderer::render_text("|", Point::new(0, 0), &style, GlyphSet::Standard);
    let two = Seg32Renderer::render_text("||", Point::new(0, 0), &style, GlyphSet::Standard);
    assert_eq!(two.len(), 2 * one.len());

    let step = Point::new(0, 2 * 8 + 3 + 3);
    for (a, b) in one.iter().zip(&two[one.len()..]) {
        match (a, b) {
            (Stroke::Bar { line: a, .. }, Stroke::Bar { line: b, .. }) => {
                assert_eq!(a.translate(step), *b);
            }
            _ => panic!("'|' has no dots"),
        }
    }
}

#[test]
fn unknown_characters_render_as_the_box() {
    let style = TextStyle::default();
    let boxed = Seg32Renderer::render_text("\u{7F}", Point::new(0, 0), &style, GlyphSet::Standard);
    let unknown = Seg32Renderer::render_text("€", Point::new(0, 0), &style, GlyphSet::Standard);
    assert!(!boxed.is_empty());
    assert_eq!(boxed, unknown);
}

#[test]
fn space_draws_nothing_but_advances() {
    let style = TextStyle::default();
    let mut out = Vec::new();
    let next = render_glyph(GlyphSet::Standard.glyph_mask(' '), Point::new(5, 5), &style, &mut out);
    assert!(out.is_empty());
    assert_eq!(next, Point::new(26, 5));
}

proptest! {
    #[test]
    fn merging_removes_one_stroke_per_complete_pair(mask in any::<u32>()) {
        let complete_pairs = (0..32u8)
            .filter_map(|i| partner(i).map(|p| (i, p)))
            .filter(|&(i, p)| mask & (1 << i) != 0 && mask & (1 << p) != 0)
            .count();

        prop_assert_eq!(segments(mask).count(), mask.count_ones() as usize - complete_pairs);
    }

    #[test]
    fn rotation_applies_after_scaling(
        mask in any::<u32>(),
        angle in -360i32..360,
        height in 1i32..40,
        width in 1i32..40,
    ) {
        let style = TextStyle { height, width, boldness: 2, angle, gap: 1 };
        let mut out = Vec::new();
        render_glyph(mask, Point::new(0, 0), &style, &mut out);

        let expected: Vec<Stroke> = segments(mask)
            .map(|segment| {
                let line = geometry::adjust(segment.coords.map(i32::from), height, width)
                    .rotate(angle);
                match segment.kind {
                    segment_text_seg32::SegmentKind::Dot => Stroke::Dot {
                        center: line.from,
                        radius: style.dot_radius(),
                    },
                    segment_text_seg32::SegmentKind::Bar => Stroke::Bar { line, boldness: 2 },
                }
            })
            .collect();

        prop_assert_eq!(out, expected);
    }
}
