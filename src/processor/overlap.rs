//! Detection of targets that claim the same atlas pixels.
//!
//! Overlaps are legal but order dependent: the later target sees the earlier
//! one's consumed marker instead of the original pixels.

use crate::model::PixelRect;

/// Index pairs `(earlier, later)` of intersecting rectangles.
pub fn find_overlaps(rects: &[PixelRect]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in rects.iter().enumerate() {
        for (j, b) in rects.iter().enumerate().skip(i + 1) {
            if a.intersects(b) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: u32, y: u32, w: u32, h: u32) -> PixelRect {
        PixelRect { x, y, w, h }
    }

    #[test]
    fn test_grid_has_no_overlaps() {
        let grid: Vec<_> = (0..16).map(|i| rect((i % 4) * 8, (i / 4) * 8, 8, 8)).collect();
        assert!(find_overlaps(&grid).is_empty());
    }

    #[test]
    fn test_reports_each_pair_once_in_declaration_order() {
        let rects = [rect(0, 0, 16, 16), rect(32, 0, 8, 8), rect(8, 8, 16, 16), rect(12, 12, 1, 1)];
        assert_eq!(find_overlaps(&rects), vec![(0, 2), (0, 3), (2, 3)]);
    }
}
