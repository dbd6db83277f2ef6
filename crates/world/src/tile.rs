use serde::{Deserialize, Serialize};
use std::fmt;

/// Tile coordinate (x, y) in tile space.
///
/// Not a pixel position: world-space pixels divide by the tile size to
/// land here. Implements Ord for deterministic iteration in
/// BTreeMap/BTreeSet (sorts by x, then y).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TileCoord {
    /// Tile column.
    pub x: i32,
    /// Tile row.
    pub y: i32,
}

impl TileCoord {
    /// Construct from explicit tile coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Tile containing the given world-space pixel position.
    pub fn from_world(px: f64, py: f64, tile_size: f64) -> Self {
        Self {
            x: (px / tile_size).floor() as i32,
            y: (py / tile_size).floor() as i32,
        }
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
