//! Hitbox extraction: absolute sheet rectangles → per-frame grid boxes.

use crate::model::{Extraction, FrameHitboxes, GridBox, RawHitbox, SpriteSheetDescriptor};

/// Where a sheet-space point lands: its frame cell and the offset inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePlacement {
    pub column: i64,
    pub row: i64,
    /// Row-major frame index, `row * columns + column`. Computed in `i128`
    /// so far out-of-sheet points cannot overflow.
    pub index: i128,
    pub relative_x: i64,
    pub relative_y: i64,
}

impl FramePlacement {
    /// Locate `(x, y)` on `sheet`. No bounds check: a point past the last
    /// column or row yields an index that names no real frame.
    ///
    /// `sheet` must have strictly positive dimensions.
    pub fn locate(sheet: &SpriteSheetDescriptor, x: i64, y: i64) -> Self {
        let column = x.div_euclid(sheet.frame_width);
        let row = y.div_euclid(sheet.frame_height);

        Self {
            column,
            row,
            index: row as i128 * sheet.columns as i128 + column as i128,
            // `x - column * frame_width`, without forming the product
            relative_x: x.rem_euclid(sheet.frame_width),
            relative_y: y.rem_euclid(sheet.frame_height),
        }
    }
}

/// Group every non-zero-type hitbox under its frame, quantized to grid units.
///
/// Type-0 boxes are only counted. Order inside each frame follows `hitboxes`.
/// `sheet` must have strictly positive dimensions.
pub fn extract_hitboxes(sheet: &SpriteSheetDescriptor, hitboxes: &[RawHitbox]) -> Extraction {
    let mut frames = FrameHitboxes::new();
    let mut discarded = 0;

    for hitbox in hitboxes {
        let at = FramePlacement::locate(sheet, hitbox.x, hitbox.y);

        if hitbox.kind == 0 {
            discarded += 1;
            continue;
        }

        let grid_box =
            GridBox::from_pixels(at.relative_x, at.relative_y, hitbox.w, hitbox.h, hitbox.kind);
        frames.push(at.index, grid_box);
    }

    Extraction { frames, discarded }
}

/// Editor palette name for a hitbox type code.
pub fn type_name(kind: i64) -> &'static str {
    match kind {
        0 => "Main",
        1 => "Attack",
        2 => "Special1",
        3 => "Special2",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: SpriteSheetDescriptor = SpriteSheetDescriptor {
        frame_width: 32,
        frame_height: 32,
        columns: 4,
    };

    fn hb(x: i64, y: i64, w: i64, h: i64, kind: i64) -> RawHitbox {
        RawHitbox { x, y, w, h, kind }
    }

    #[test]
    fn test_box_in_second_column() {
        let out = extract_hitboxes(&SHEET, &[hb(40, 0, 16, 8, 1)]);

        assert_eq!(out.discarded, 0);
        assert_eq!(out.frames.len(), 1);
        assert_eq!(
            out.frames.get(1),
            Some(
                &[GridBox {
                    x: 1,
                    y: 0,
                    w: 2,
                    h: 1,
                    kind: 1
                }][..]
            )
        );
    }

    #[test]
    fn test_type_zero_is_counted_not_emitted() {
        let out = extract_hitboxes(&SHEET, &[hb(5, 5, 5, 5, 0)]);
        assert!(out.frames.is_empty());
        assert_eq!(out.discarded, 1);
    }

    #[test]
    fn test_same_frame_keeps_input_order() {
        let out = extract_hitboxes(&SHEET, &[hb(0, 0, 16, 16, 2), hb(8, 16, 8, 8, 3)]);

        let boxes = out.frames.get(0).expect("frame 0");
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].kind, 2);
        assert_eq!(boxes[1].kind, 3);
        assert_eq!((boxes[1].x, boxes[1].y), (1, 2));
    }

    #[test]
    fn test_empty_input() {
        let out = extract_hitboxes(&SHEET, &[]);
        assert!(out.frames.is_empty());
        assert_eq!(out.discarded, 0);
    }

    #[test]
    fn test_second_row_index() {
        let at = FramePlacement::locate(&SHEET, 64, 32);
        assert_eq!((at.column, at.row, at.index), (2, 1, 6));
        assert_eq!((at.relative_x, at.relative_y), (0, 0));

        let out = extract_hitboxes(&SHEET, &[hb(64, 32, 8, 8, 1)]);
        assert!(out.frames.get(6).is_some());
    }

    #[test]
    fn test_index_stable_within_cell() {
        let first = FramePlacement::locate(&SHEET, 32, 64);
        for (x, y) in [(33, 64), (63, 64), (32, 95), (63, 95), (47, 80)] {
            assert_eq!(FramePlacement::locate(&SHEET, x, y).index, first.index, "({x}, {y})");
        }
    }

    #[test]
    fn test_relative_offsets_stay_inside_frame() {
        let sheet = SpriteSheetDescriptor {
            frame_width: 24,
            frame_height: 40,
            columns: 5,
        };
        for x in 0..sheet.frame_width * 5 {
            for y in (0..sheet.frame_height * 3).step_by(7) {
                let at = FramePlacement::locate(&sheet, x, y);
                assert!((0..sheet.frame_width).contains(&at.relative_x));
                assert!((0..sheet.frame_height).contains(&at.relative_y));
                assert!((0..15).contains(&at.index));
            }
        }
    }

    #[test]
    fn test_out_of_sheet_point_is_accepted() {
        // 5th column of a 4-column sheet wraps onto the next row's index.
        let out = extract_hitboxes(&SHEET, &[hb(128, 0, 8, 8, 1)]);
        assert!(out.frames.get(4).is_some());
    }

    #[test]
    fn test_far_out_of_sheet_point_does_not_overflow() {
        let sheet = SpriteSheetDescriptor {
            frame_width: 1,
            frame_height: 1,
            columns: 4,
        };
        let out = extract_hitboxes(&sheet, &[hb(0, 1_000_000_000, 8, 8, 1)]);
        assert_eq!(out.frames.get(4_000_000_000).map(<[_]>::len), Some(1));

        let at = FramePlacement::locate(&sheet, i64::MAX, i64::MAX);
        assert_eq!(at.index, i64::MAX as i128 * 4 + i64::MAX as i128);
        assert_eq!((at.relative_x, at.relative_y), (0, 0));

        let wide = SpriteSheetDescriptor {
            columns: i64::MAX,
            ..sheet
        };
        let at = FramePlacement::locate(&wide, i64::MIN, i64::MIN);
        assert_eq!(at.index, i64::MIN as i128 * i64::MAX as i128 + i64::MIN as i128);
    }

    #[test]
    fn test_mixed_input_counts() {
        let input = [
            hb(0, 0, 32, 32, 0),
            hb(4, 4, 16, 16, 1),
            hb(32, 0, 32, 32, 0),
            hb(36, 4, 16, 16, 1),
            hb(40, 8, 8, 8, 2),
        ];
        let out = extract_hitboxes(&SHEET, &input);

        assert_eq!(out.discarded, 2);
        assert_eq!(out.frames.box_count(), 3);
        assert_eq!(out.frames.get(0).map(<[_]>::len), Some(1));
        assert_eq!(out.frames.get(1).map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(type_name(0), "Main");
        assert_eq!(type_name(1), "Attack");
        assert_eq!(type_name(3), "Special2");
        assert_eq!(type_name(9), "Unknown");
    }
}
