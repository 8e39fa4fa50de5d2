//! Grid extents in (depth, height, width) order.

use std::fmt;

use glam::UVec3;
use serde::{Deserialize, Serialize};

use crate::error::{FixtureError, Result};

/// The extents of a 3D grid, ordered (depth, height, width).
///
/// A `Shape` always has three strictly positive extents; every constructor
/// enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[usize; 3]", into = "[usize; 3]")]
pub struct Shape([usize; 3]);

impl Shape {
    /// Creates a shape from three extents.
    ///
    /// Fails with [`FixtureError::InvalidShape`] if any extent is zero, and
    /// with [`FixtureError::VolumeTooLarge`] if the cell count overflows `isize`.
    pub fn new(dims: [usize; 3]) -> Result<Self> {
        if dims.contains(&0) {
            return Err(FixtureError::InvalidShape {
                dims: dims.to_vec(),
            });
        }
        // Every flat index stays below this, so indexing arithmetic cannot overflow.
        dims.iter()
            .try_fold(1_usize, |acc, &dim| acc.checked_mul(dim))
            .filter(|&cells| isize::try_from(cells).is_ok())
            .ok_or_else(|| FixtureError::VolumeTooLarge {
                dims: dims.to_vec(),
            })?;
        Ok(Self(dims))
    }

    /// Creates a cubic shape with the same extent on every axis.
    pub fn uniform(dim: usize) -> Result<Self> {
        Self::new([dim; 3])
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.0[0]
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.0[1]
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.0[2]
    }

    /// Returns the extents as an array.
    #[must_use]
    pub fn dims(&self) -> [usize; 3] {
        self.0
    }

    /// Returns the smallest extent.
    #[must_use]
    pub fn min_extent(&self) -> usize {
        self.0[0].min(self.0[1]).min(self.0[2])
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn num_cells(&self) -> usize {
        self.0.iter().product()
    }

    /// Flattens a 3D index to a linear, C-contiguous index.
    ///
    /// The cell (d, h, w) lives at `(d * height + h) * width + w`.
    #[must_use]
    pub fn flatten_index(&self, d: usize, h: usize, w: usize) -> usize {
        (d * self.height() + h) * self.width() + w
    }

    /// Unflattens a linear index to a 3D index.
    #[must_use]
    pub fn unflatten_index(&self, idx: usize) -> [usize; 3] {
        let w = idx % self.width();
        let h = (idx / self.width()) % self.height();
        let d = idx / (self.width() * self.height());
        [d, h, w]
    }

    /// Returns whether (d, h, w) lies inside the grid.
    #[must_use]
    pub fn contains(&self, d: usize, h: usize, w: usize) -> bool {
        d < self.depth() && h < self.height() && w < self.width()
    }

    /// Returns the extents as a `UVec3`, for viewers that take grid dimensions
    /// as `u32` triples.
    ///
    /// Returns `None` if an extent does not fit in `u32`.
    #[must_use]
    pub fn as_uvec3(&self) -> Option<UVec3> {
        Some(UVec3::new(
            u32::try_from(self.depth()).ok()?,
            u32::try_from(self.height()).ok()?,
            u32::try_from(self.width()).ok()?,
        ))
    }
}

impl TryFrom<[usize; 3]> for Shape {
    type Error = FixtureError;

    fn try_from(dims: [usize; 3]) -> Result<Self> {
        Self::new(dims)
    }
}

impl TryFrom<&[usize]> for Shape {
    type Error = FixtureError;

    fn try_from(dims: &[usize]) -> Result<Self> {
        let dims: [usize; 3] = dims.try_into().map_err(|_| FixtureError::InvalidShape {
            dims: dims.to_vec(),
        })?;
        Self::new(dims)
    }
}

impl From<Shape> for [usize; 3] {
    fn from(shape: Shape) -> Self {
        shape.0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}
