//! Core types for volume-fixture.
//!
//! This crate provides the building blocks for synthetic volume test data:
//! - [`Shape`] for (depth, height, width) grid extents
//! - [`Volume`] for dense, C-contiguous 3D grids
//! - [`CubeRegion`] for axis-aligned blocks inside a grid
//! - [`create_centered_cube`] and its variants for the centered-cube fixture

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod generator;
pub mod options;
pub mod region;
pub mod shape;
pub mod volume;

pub use error::{FixtureError, Result};
pub use generator::{
    centered_region, create_centered_cube, create_centered_cube_valued, create_centered_cube_with,
};
pub use options::FixtureOptions;
pub use region::CubeRegion;
pub use shape::Shape;
pub use volume::Volume;

// Re-export glam types for convenience
pub use glam::UVec3;
