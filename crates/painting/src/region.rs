//! Flood-filled paint regions
//!
//! An [`ActiveRegion`] is the maximal 4-connected set of paintable pixels
//! reachable from a stroke's origin. It is computed once at pointer-down and
//! discarded at pointer-up; every brush stamp of the stroke is clipped to it.

use std::collections::{HashSet, VecDeque};

use glam::IVec2;
use tracing::debug;

use crate::mask::MaskGrid;

/// Set of pixel coordinates a single stroke is allowed to touch.
pub struct ActiveRegion {
    pixels: HashSet<IVec2>,
}

impl ActiveRegion {
    /// Compute the connected paintable region containing `seed`.
    ///
    /// Breadth-first traversal over the mask: pop a coordinate, skip it if
    /// already included, include it if paintable, then enqueue its in-bounds
    /// 4-neighbors. Runs in O(width * height) worst case.
    ///
    /// A non-paintable seed yields an empty region. Callers normally check
    /// the predicate before invoking, but the guard keeps the result
    /// well-defined either way.
    pub fn flood_fill(mask: &MaskGrid, seed: IVec2) -> Self {
        let mut pixels = HashSet::new();
        let mut worklist = VecDeque::new();
        worklist.push_back(seed);

        while let Some(current) = worklist.pop_front() {
            if pixels.contains(&current) {
                continue;
            }
            if !mask.is_paintable(current) {
                continue;
            }
            pixels.insert(current);

            if current.x > 0 {
                worklist.push_back(IVec2::new(current.x - 1, current.y));
            }
            if current.x < mask.width() as i32 - 1 {
                worklist.push_back(IVec2::new(current.x + 1, current.y));
            }
            if current.y > 0 {
                worklist.push_back(IVec2::new(current.x, current.y - 1));
            }
            if current.y < mask.height() as i32 - 1 {
                worklist.push_back(IVec2::new(current.x, current.y + 1));
            }
        }

        debug!(
            "flood_fill: seed=({}, {}) -> {} pixels",
            seed.x,
            seed.y,
            pixels.len()
        );
        Self { pixels }
    }

    /// Check whether `p` belongs to the region.
    #[inline]
    pub fn contains(&self, p: IVec2) -> bool {
        self.pixels.contains(&p)
    }

    /// Number of pixels in the region
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Iterate over the region's pixel coordinates (discovery order is
    /// not meaningful).
    pub fn iter(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.pixels.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 10x10 mask, all paintable except a 1-pixel black border.
    fn bordered_mask() -> MaskGrid {
        MaskGrid::from_fn(10, 10, |x, y| x > 0 && x < 9 && y > 0 && y < 9)
    }

    #[test]
    fn test_bordered_interior() {
        let mask = bordered_mask();
        let region = ActiveRegion::flood_fill(&mask, IVec2::new(5, 5));

        // 8x8 interior
        assert_eq!(region.len(), 64);
        for p in region.iter() {
            assert!(mask.is_paintable(p));
        }
        // The border is excluded
        assert!(!region.contains(IVec2::new(0, 5)));
        assert!(!region.contains(IVec2::new(5, 0)));
    }

    #[test]
    fn test_fill_does_not_leak_across_boundary() {
        // Two columns of paintable pixels separated by a black column
        let mask = MaskGrid::from_fn(3, 4, |x, _| x != 1);
        let region = ActiveRegion::flood_fill(&mask, IVec2::new(0, 0));

        assert_eq!(region.len(), 4);
        for y in 0..4 {
            assert!(region.contains(IVec2::new(0, y)));
            assert!(!region.contains(IVec2::new(2, y)));
        }
    }

    #[test]
    fn test_fill_reaches_all_connected_pixels() {
        // L-shaped corridor: only the top row and right column are paintable
        let mask = MaskGrid::from_fn(5, 5, |x, y| y == 0 || x == 4);
        let region = ActiveRegion::flood_fill(&mask, IVec2::new(0, 0));

        assert_eq!(region.len(), 9);
        assert!(region.contains(IVec2::new(4, 4)));
    }

    #[test]
    fn test_non_paintable_seed_is_empty() {
        let mask = bordered_mask();
        let region = ActiveRegion::flood_fill(&mask, IVec2::new(0, 0));
        assert!(region.is_empty());
    }

    #[test]
    fn test_out_of_bounds_seed_is_empty() {
        let mask = bordered_mask();
        let region = ActiveRegion::flood_fill(&mask, IVec2::new(-3, 20));
        assert!(region.is_empty());
    }

    #[test]
    fn test_single_pixel_region() {
        let mask = MaskGrid::from_fn(3, 3, |x, y| x == 1 && y == 1);
        let region = ActiveRegion::flood_fill(&mask, IVec2::new(1, 1));
        assert_eq!(region.len(), 1);
        assert!(region.contains(IVec2::new(1, 1)));
    }

    #[test]
    fn test_diagonal_is_not_connected() {
        // Two paintable pixels touching only at the corner
        let mask = MaskGrid::from_fn(2, 2, |x, y| x == y);
        let region = ActiveRegion::flood_fill(&mask, IVec2::new(0, 0));
        assert_eq!(region.len(), 1);
        assert!(!region.contains(IVec2::new(1, 1)));
    }
}
