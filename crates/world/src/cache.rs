//! Lazily populated world store.
//!
//! Tiles are generated on first access and memoized forever: once an
//! entry exists it never changes, which is what lets every other
//! subsystem treat world queries as cheap, stable facts. Nothing is ever
//! evicted; an unbounded session keeps every visited tile. That tradeoff
//! is deliberate, and because the generators are position-only pure
//! functions, eviction could be bolted on later without changing any
//! observable result.

use crate::objects::{generate_object, ObjectKind};
use crate::terrain::{generate_terrain, TerrainKind};
use crate::tile::TileCoord;
use std::collections::HashMap;
use tracing::trace;

/// Memoizing store mapping tile coordinates to generated content.
#[derive(Debug, Default)]
pub struct WorldCache {
    terrain: HashMap<TileCoord, TerrainKind>,
    objects: HashMap<TileCoord, ObjectKind>,
}

impl WorldCache {
    /// Create an empty cache; nothing is pre-generated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Terrain at a tile, generating and memoizing on first access.
    pub fn terrain_at(&mut self, tile: TileCoord) -> TerrainKind {
        *self.terrain.entry(tile).or_insert_with(|| {
            trace!(%tile, "generating terrain");
            generate_terrain(tile.x, tile.y)
        })
    }

    /// Object at a tile, generating and memoizing on first access.
    ///
    /// Forces the terrain entry for the tile as a side effect, since
    /// placement depends on it.
    pub fn object_at(&mut self, tile: TileCoord) -> ObjectKind {
        let terrain = self.terrain_at(tile);
        *self
            .objects
            .entry(tile)
            .or_insert_with(|| generate_object(tile.x, tile.y, terrain))
    }

    /// Whether a land actor may stand on this tile.
    pub fn is_walkable(&mut self, tile: TileCoord) -> bool {
        self.terrain_at(tile).is_walkable() && !self.object_at(tile).is_solid()
    }

    /// Number of memoized terrain entries. Monotonically increasing.
    pub fn terrain_entries(&self) -> usize {
        self.terrain.len()
    }

    /// Number of memoized object entries. Monotonically increasing.
    pub fn object_entries(&self) -> usize {
        self.objects.len()
    }
}
