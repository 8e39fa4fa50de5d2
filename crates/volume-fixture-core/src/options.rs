//! Configuration options for fixture generation.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Cell values written by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureOptions {
    /// Value of every cell outside the cube (default 0).
    pub background: i8,
    /// Value of every cell inside the cube (default -1).
    pub fill: i8,
}

impl Default for FixtureOptions {
    fn default() -> Self {
        Self {
            background: 0,
            fill: -1,
        }
    }
}

impl FixtureOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the background value.
    pub fn with_background(mut self, background: i8) -> Self {
        self.background = background;
        self
    }

    /// Sets the cube value.
    pub fn with_fill(mut self, fill: i8) -> Self {
        self.fill = fill;
        self
    }

    /// Parses options from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
