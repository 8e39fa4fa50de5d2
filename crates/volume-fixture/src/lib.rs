//! volume-fixture: deterministic synthetic 3D volumes for testing
//! volume-visualization code.
//!
//! # Quick Start
//!
//! ```
//! use volume_fixture::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     // 6x4x4 grid of zeros with a 4x4x4 block of -1 in the middle
//!     let volume = create_centered_cube(&[6, 4, 4], 4)?;
//!     assert_eq!(volume.count(&-1), 64);
//!     assert_eq!(volume[[0, 0, 0]], 0);
//!     assert_eq!(volume[[1, 0, 0]], -1);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Layout
//!
//! A [`Volume`] stores cells in C-contiguous (depth, height, width) order, so
//! [`Volume::as_slice`] can be handed directly to consumers that expect a
//! flattened `(d * height + h) * width + w` field.

mod init;

pub use init::init_logging;

// Re-export core types
pub use volume_fixture_core::{
    centered_region, create_centered_cube, create_centered_cube_valued, create_centered_cube_with,
    error::{FixtureError, Result},
    CubeRegion, FixtureOptions, Shape, UVec3, Volume,
};
