//! Deterministic object placement on top of the terrain layer.

use crate::terrain::TerrainKind;
use serde::{Deserialize, Serialize};

/// Object occupying one tile, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Empty tile.
    None,
    /// Blocks movement; grows on grass and earth.
    Tree,
    /// Blocks movement; found on stone and earth.
    Rock,
}

impl ObjectKind {
    /// Canonical lowercase string key for configs/logging.
    pub const fn as_str(self) -> &'static str {
        match self {
            ObjectKind::None => "none",
            ObjectKind::Tree => "tree",
            ObjectKind::Rock => "rock",
        }
    }

    /// Whether this object blocks actor movement.
    pub const fn is_solid(self) -> bool {
        !matches!(self, ObjectKind::None)
    }
}

/// Decide the object at a tile, given the terrain there.
///
/// Pure function of (x, y, terrain). Water and sand never carry objects.
/// The remaining rules are checked in a fixed order with early returns;
/// an earth tile that qualifies as a tree never reaches the earth rock
/// rule. The ordering is part of the world's identity and is kept even
/// where the current thresholds make a branch unreachable.
pub fn generate_object(x: i32, y: i32, terrain: TerrainKind) -> ObjectKind {
    if matches!(terrain, TerrainKind::Water | TerrainKind::Sand) {
        return ObjectKind::None;
    }

    // Coordinate hash, fractional part in [0, 1).
    let hash = (x as f64 * 12.9898 + y as f64 * 78.233).sin() * 43758.5453;
    let value = hash - hash.floor();

    if matches!(terrain, TerrainKind::Grass | TerrainKind::Earth) && value < 0.1 {
        return ObjectKind::Tree;
    }

    if terrain == TerrainKind::Stone && value < 0.15 {
        return ObjectKind::Rock;
    }

    if terrain == TerrainKind::Earth && value > 0.9 {
        return ObjectKind::Rock;
    }

    ObjectKind::None
}
