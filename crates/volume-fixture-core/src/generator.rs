//! Centered-cube fixture generation.
//!
//! Produces a volume of background cells with one axis-aligned cube of a
//! different value at the grid center. Used as deterministic input for volume
//! viewers and isosurface extraction tests.

use crate::error::{FixtureError, Result};
use crate::options::FixtureOptions;
use crate::region::CubeRegion;
use crate::shape::Shape;
use crate::volume::Volume;

/// Creates a `(depth, height, width)` volume of zeros with a centered cube of -1.
///
/// The cube spans `[dim / 2 - cube_size / 2, .. + cube_size)` on every axis,
/// using floor division, so even cube sizes sit one cell toward the low side.
///
/// # Errors
/// - [`FixtureError::InvalidShape`] if `shape` does not have exactly 3
///   components.
/// - [`FixtureError::InvalidCubeSize`] if `cube_size <= 0` or `cube_size`
///   exceeds any component of `shape` (so a zero extent always lands here).
/// - [`FixtureError::VolumeTooLarge`] if the cell count does not fit in memory.
///
/// # Example
///
/// ```
/// use volume_fixture_core::create_centered_cube;
///
/// let volume = create_centered_cube(&[5, 5, 5], 3).unwrap();
/// assert_eq!(volume[[2, 2, 2]], -1);
/// assert_eq!(volume[[0, 0, 0]], 0);
/// assert_eq!(volume.count(&-1), 27);
/// ```
pub fn create_centered_cube(shape: &[usize], cube_size: i64) -> Result<Volume<i8>> {
    create_centered_cube_with(shape, cube_size, &FixtureOptions::default())
}

/// Like [`create_centered_cube`], with background and cube values taken from
/// `options`.
pub fn create_centered_cube_with(
    shape: &[usize],
    cube_size: i64,
    options: &FixtureOptions,
) -> Result<Volume<i8>> {
    create_centered_cube_valued(shape, cube_size, options.background, options.fill)
}

/// Generic form of [`create_centered_cube`] for any element type.
pub fn create_centered_cube_valued<T: Copy>(
    shape: &[usize],
    cube_size: i64,
    background: T,
    fill: T,
) -> Result<Volume<T>> {
    let dims: [usize; 3] = shape.try_into().map_err(|_| FixtureError::InvalidShape {
        dims: shape.to_vec(),
    })?;
    check_cube_size(&dims, cube_size)?;

    let shape = Shape::new(dims)?;
    let region = centered_region(&shape, cube_size)?;

    let mut volume = Volume::filled(shape, background);
    volume.fill_region(&region, fill);

    log::debug!(
        "generated {shape} fixture with cube {cube_size} at {:?}..{:?}",
        region.start,
        region.end
    );
    Ok(volume)
}

/// Rejects a cube edge that is non-positive or larger than any extent.
fn check_cube_size(dims: &[usize; 3], cube_size: i64) -> Result<()> {
    usize::try_from(cube_size)
        .ok()
        .filter(|&size| size > 0 && dims.iter().all(|&dim| size <= dim))
        .map(|_| ())
        .ok_or_else(|| FixtureError::InvalidCubeSize {
            cube_size,
            shape: dims.to_vec(),
        })
}

/// Validates `cube_size` against `shape` and returns the centered region.
pub fn centered_region(shape: &Shape, cube_size: i64) -> Result<CubeRegion> {
    usize::try_from(cube_size)
        .ok()
        .and_then(|size| CubeRegion::centered(shape, size))
        .ok_or_else(|| FixtureError::InvalidCubeSize {
            cube_size,
            shape: shape.dims().to_vec(),
        })
}
