//! Dense 3D grids of scalar values.

use std::ops::{Index, IndexMut};

use crate::error::{FixtureError, Result};
use crate::region::CubeRegion;
use crate::shape::Shape;

/// A dense 3D grid stored in C-contiguous (depth, height, width) order.
///
/// The value for cell (d, h, w) is stored at `(d * height + h) * width + w`,
/// the same layout numpy uses for a `(depth, height, width)` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume<T> {
    shape: Shape,
    data: Vec<T>,
}

impl<T: Copy> Volume<T> {
    /// Creates a volume with every cell set to `value`.
    pub fn filled(shape: Shape, value: T) -> Self {
        Self {
            shape,
            data: vec![value; shape.num_cells()],
        }
    }

    /// Sets every cell inside `region` to `value`.
    ///
    /// # Panics
    /// Panics if the region extends past the volume's shape.
    pub fn fill_region(&mut self, region: &CubeRegion, value: T) {
        assert!(
            region.fits_in(&self.shape),
            "region {region:?} does not fit in shape {}",
            self.shape
        );

        let [rd, rh, rw] = region.ranges();
        for d in rd {
            for h in rh.clone() {
                let row_start = self.shape.flatten_index(d, h, rw.start);
                self.data[row_start..row_start + rw.len()].fill(value);
            }
        }
    }
}

impl<T: Copy + Default> Volume<T> {
    /// Creates a volume with every cell set to `T::default()` (zero for numbers).
    pub fn zeros(shape: Shape) -> Self {
        Self::filled(shape, T::default())
    }
}

impl<T> Volume<T> {
    /// Wraps existing C-contiguous data.
    pub fn from_vec(shape: Shape, data: Vec<T>) -> Result<Self> {
        if data.len() != shape.num_cells() {
            return Err(FixtureError::SizeMismatch {
                expected: shape.num_cells(),
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether the volume has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the cell at (d, h, w), or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, d: usize, h: usize, w: usize) -> Option<&T> {
        if self.shape.contains(d, h, w) {
            self.data.get(self.shape.flatten_index(d, h, w))
        } else {
            None
        }
    }

    /// Returns the cell at (d, h, w) mutably, or `None` if out of bounds.
    pub fn get_mut(&mut self, d: usize, h: usize, w: usize) -> Option<&mut T> {
        if self.shape.contains(d, h, w) {
            self.data.get_mut(self.shape.flatten_index(d, h, w))
        } else {
            None
        }
    }

    /// Returns the raw data in C-contiguous order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the volume, returning its raw data.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the 2D slice at depth `d` as a row-major `height * width` slice.
    #[must_use]
    pub fn slice_depth(&self, d: usize) -> Option<&[T]> {
        if d >= self.shape.depth() {
            return None;
        }
        let plane = self.shape.height() * self.shape.width();
        Some(&self.data[d * plane..(d + 1) * plane])
    }

    /// Iterates over `([d, h, w], &value)` pairs in storage order.
    pub fn iter_indexed(&self) -> impl Iterator<Item = ([usize; 3], &T)> + '_ {
        let shape = self.shape;
        self.data
            .iter()
            .enumerate()
            .map(move |(idx, value)| (shape.unflatten_index(idx), value))
    }
}

impl<T: PartialEq> Volume<T> {
    /// Counts the cells equal to `value`.
    #[must_use]
    pub fn count(&self, value: &T) -> usize {
        self.data.iter().filter(|v| *v == value).count()
    }
}

impl<T> Index<[usize; 3]> for Volume<T> {
    type Output = T;

    fn index(&self, [d, h, w]: [usize; 3]) -> &T {
        assert!(
            self.shape.contains(d, h, w),
            "index ({d}, {h}, {w}) out of bounds for shape {}",
            self.shape
        );
        &self.data[self.shape.flatten_index(d, h, w)]
    }
}

impl<T> IndexMut<[usize; 3]> for Volume<T> {
    fn index_mut(&mut self, [d, h, w]: [usize; 3]) -> &mut T {
        assert!(
            self.shape.contains(d, h, w),
            "index ({d}, {h}, {w}) out of bounds for shape {}",
            self.shape
        );
        let idx = self.shape.flatten_index(d, h, w);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(dims: [usize; 3]) -> Shape {
        Shape::new(dims).unwrap()
    }

    #[test]
    fn test_zeros() {
        let vol: Volume<i8> = Volume::zeros(shape([2, 3, 4]));
        assert_eq!(vol.len(), 24);
        assert!(!vol.is_empty());
        assert_eq!(vol.count(&0), 24);
    }

    #[test]
    fn test_get_and_index() {
        let mut vol: Volume<i8> = Volume::zeros(shape([2, 3, 4]));
        vol[[1, 2, 3]] = 7;
        assert_eq!(vol.get(1, 2, 3), Some(&7));
        assert_eq!(vol.as_slice()[23], 7);
        assert_eq!(vol.get(2, 0, 0), None);
        assert_eq!(vol.get(0, 3, 0), None);
        assert_eq!(vol.get(0, 0, 4), None);

        *vol.get_mut(0, 0, 1).unwrap() = -3;
        assert_eq!(vol[[0, 0, 1]], -3);
        assert!(vol.get_mut(5, 0, 0).is_none());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds() {
        let vol: Volume<i8> = Volume::zeros(shape([2, 2, 2]));
        // flat index 4 would exist, but (0, 0, 4) is not a cell
        let _ = vol[[0, 0, 4]];
    }

    #[test]
    fn test_from_vec_size_mismatch() {
        let err = Volume::from_vec(shape([2, 2, 2]), vec![0_i8; 7]).unwrap_err();
        assert!(matches!(
            err,
            FixtureError::SizeMismatch {
                expected: 8,
                actual: 7
            }
        ));
        assert!(Volume::from_vec(shape([2, 2, 2]), vec![0_i8; 8]).is_ok());
    }

    #[test]
    fn test_fill_region() {
        let s = shape([4, 5, 6]);
        let region = CubeRegion {
            start: [1, 2, 3],
            end: [3, 4, 5],
        };
        let mut vol = Volume::filled(s, 0_i8);
        vol.fill_region(&region, -1);

        assert_eq!(vol.count(&-1), region.num_cells());
        for ([d, h, w], &v) in vol.iter_indexed() {
            assert_eq!(v == -1, region.contains(d, h, w), "cell ({d}, {h}, {w})");
        }
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn test_fill_region_out_of_bounds() {
        let mut vol = Volume::filled(shape([2, 2, 2]), 0_i8);
        let region = CubeRegion {
            start: [0, 0, 0],
            end: [3, 1, 1],
        };
        vol.fill_region(&region, 1);
    }

    #[test]
    fn test_slice_depth() {
        let data: Vec<u8> = (0..24).collect();
        let vol = Volume::from_vec(shape([2, 3, 4]), data).unwrap();
        assert_eq!(vol.slice_depth(1).unwrap(), &(12..24).collect::<Vec<u8>>()[..]);
        assert!(vol.slice_depth(2).is_none());
        assert_eq!(vol.into_vec().len(), 24);
    }
}
