//! Deterministic terrain classification.
//!
//! `generate_terrain` is a pure function of the tile coordinate: the same
//! (x, y) yields the same category on every call, every run, and every
//! platform, because it uses only IEEE-754 double precision sin/cos.
//! World determinism hangs off this property, so the formula and its
//! thresholds must not be "improved" casually.

use serde::{Deserialize, Serialize};

/// Terrain category of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainKind {
    /// Traversable only in boat mode; blocks enemies outright.
    Water,
    /// Beach strip between water and land; never carries objects.
    Sand,
    /// Default walkable terrain.
    Grass,
    /// Walkable; can carry both trees and rocks.
    Earth,
    /// High ground; can carry rocks.
    Stone,
}

impl TerrainKind {
    /// Canonical lowercase string key for configs/logging.
    pub const fn as_str(self) -> &'static str {
        match self {
            TerrainKind::Water => "water",
            TerrainKind::Sand => "sand",
            TerrainKind::Grass => "grass",
            TerrainKind::Earth => "earth",
            TerrainKind::Stone => "stone",
        }
    }

    /// Whether land actors may stand here.
    pub const fn is_walkable(self) -> bool {
        !matches!(self, TerrainKind::Water)
    }
}

/// Classify the terrain at a tile coordinate.
///
/// Trigonometric noise plus a low-frequency variation term, mapped onto
/// categories with strict `<` thresholds: a value exactly on a boundary
/// falls into the higher bucket.
pub fn generate_terrain(x: i32, y: i32) -> TerrainKind {
    let xf = x as f64;
    let yf = y as f64;

    let noise = (xf * 0.1).sin() * (yf * 0.1).cos() * 0.5 + 0.5;
    let variation = (xf * 0.05 + yf * 0.05).sin() * 0.2;
    let value = noise + variation;

    if value < 0.3 {
        TerrainKind::Water
    } else if value < 0.4 {
        TerrainKind::Sand
    } else if value < 0.7 {
        TerrainKind::Grass
    } else if value < 0.85 {
        TerrainKind::Earth
    } else {
        TerrainKind::Stone
    }
}
