//! Axis-aligned cuboid regions inside a grid.

use std::ops::Range;

use crate::shape::Shape;

/// A half-open axis-aligned block `[start, end)` on each of the three axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeRegion {
    /// Inclusive start index per axis (depth, height, width).
    pub start: [usize; 3],
    /// Exclusive end index per axis.
    pub end: [usize; 3],
}

impl CubeRegion {
    /// Computes the cube of edge `cube_size` centered in `shape`.
    ///
    /// Each axis uses floor division: `start = dim / 2 - cube_size / 2`,
    /// `end = start + cube_size`. For an even `cube_size` the block therefore
    /// sits one index toward the low side of the geometric center.
    ///
    /// Returns `None` when `cube_size` is zero or exceeds an extent of `shape`.
    #[must_use]
    pub fn centered(shape: &Shape, cube_size: usize) -> Option<Self> {
        if cube_size == 0 || cube_size > shape.min_extent() {
            return None;
        }

        let mut start = [0; 3];
        let mut end = [0; 3];
        for (axis, &dim) in shape.dims().iter().enumerate() {
            // dim / 2 >= cube_size / 2 whenever cube_size <= dim
            start[axis] = dim / 2 - cube_size / 2;
            end[axis] = start[axis] + cube_size;
        }

        let region = Self { start, end };
        log::trace!("centered cube {cube_size} in {shape}: {region:?}");
        Some(region)
    }

    /// Returns the index range covered on each axis.
    #[must_use]
    pub fn ranges(&self) -> [Range<usize>; 3] {
        [
            self.start[0]..self.end[0],
            self.start[1]..self.end[1],
            self.start[2]..self.end[2],
        ]
    }

    /// Returns the edge length on each axis.
    #[must_use]
    pub fn extents(&self) -> [usize; 3] {
        [
            self.end[0] - self.start[0],
            self.end[1] - self.start[1],
            self.end[2] - self.start[2],
        ]
    }

    /// Returns the number of cells inside the region.
    #[must_use]
    pub fn num_cells(&self) -> usize {
        self.extents().iter().product()
    }

    /// Returns whether (d, h, w) lies inside the region.
    #[must_use]
    pub fn contains(&self, d: usize, h: usize, w: usize) -> bool {
        let [rd, rh, rw] = self.ranges();
        rd.contains(&d) && rh.contains(&h) && rw.contains(&w)
    }

    /// Returns whether the region lies entirely inside `shape`.
    #[must_use]
    pub fn fits_in(&self, shape: &Shape) -> bool {
        self.end
            .iter()
            .zip(shape.dims())
            .all(|(&end, dim)| end <= dim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(dims: [usize; 3]) -> Shape {
        Shape::new(dims).unwrap()
    }

    #[test]
    fn test_centered_odd_is_symmetric() {
        let region = CubeRegion::centered(&shape([5, 5, 5]), 3).unwrap();
        assert_eq!(region.start, [1, 1, 1]);
        assert_eq!(region.end, [4, 4, 4]);
        assert_eq!(region.num_cells(), 27);
    }

    #[test]
    fn test_centered_even_leans_low() {
        // center 2, 2 - 1 = 1
        let region = CubeRegion::centered(&shape([4, 4, 4]), 2).unwrap();
        assert_eq!(region.start, [1, 1, 1]);
        assert_eq!(region.end, [3, 3, 3]);

        // odd extent, even cube: center 2, block [1, 3) rather than [1.5, 3.5)
        let region = CubeRegion::centered(&shape([5, 5, 5]), 2).unwrap();
        assert_eq!(region.start, [1, 1, 1]);
        assert_eq!(region.end, [3, 3, 3]);
    }

    #[test]
    fn test_centered_non_cubic() {
        let region = CubeRegion::centered(&shape([6, 4, 4]), 4).unwrap();
        assert_eq!(region.start, [1, 0, 0]);
        assert_eq!(region.end, [5, 4, 4]);
        assert_eq!(region.extents(), [4, 4, 4]);
        assert_eq!(region.num_cells(), 64);
    }

    #[test]
    fn test_centered_full_grid() {
        let s = shape([3, 3, 3]);
        let region = CubeRegion::centered(&s, 3).unwrap();
        assert_eq!(region.start, [0, 0, 0]);
        assert_eq!(region.end, [3, 3, 3]);
        assert!(region.fits_in(&s));
    }

    #[test]
    fn test_centered_rejects_bad_sizes() {
        assert!(CubeRegion::centered(&shape([5, 5, 5]), 0).is_none());
        assert!(CubeRegion::centered(&shape([3, 3, 3]), 5).is_none());
        assert!(CubeRegion::centered(&shape([6, 3, 6]), 4).is_none());
    }

    #[test]
    fn test_contains() {
        let region = CubeRegion::centered(&shape([5, 5, 5]), 3).unwrap();
        assert!(region.contains(1, 2, 3));
        assert!(!region.contains(0, 2, 3));
        assert!(!region.contains(1, 2, 4));
    }
}
