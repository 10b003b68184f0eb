//! Height-banded vertex colours for the flyover terrain.

use serde::{Deserialize, Serialize};

use crate::constants::{GRASS_COLOR, ROCK_COLOR, SNOW_COLOR, WATER_COLOR};

/// Four colour bands over normalized elevation.
///
/// Elevation is rescaled to `[0, 1]` over the terrain's own range; a vertex
/// falls into the first band whose upper threshold exceeds its height.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElevationBands {
    /// Colours from lowest to highest band [R, G, B]
    pub colors: [[f32; 3]; 4],
    /// Upper edges of the first three bands, ascending, in `[0, 1]`
    pub thresholds: [f32; 3],
}

impl Default for ElevationBands {
    fn default() -> Self {
        Self {
            colors: [WATER_COLOR, GRASS_COLOR, ROCK_COLOR, SNOW_COLOR],
            thresholds: [0.25, 0.5, 0.75],
        }
    }
}

impl ElevationBands {
    /// Band index for `z` given the terrain's elevation range.
    ///
    /// A flat terrain (`min == max`) maps everything to the lowest band.
    pub fn band(&self, z: f32, min: f32, max: f32) -> usize {
        let span = max - min;
        let t = if span > 0.0 { (z - min) / span } else { 0.0 };
        self.thresholds
            .iter()
            .position(|&edge| t < edge)
            .unwrap_or(self.thresholds.len())
    }

    pub fn color(&self, z: f32, min: f32, max: f32) -> [f32; 3] {
        self.colors[self.band(z, min, max)]
    }
}
