#![warn(missing_docs)]
//! Collision probing against the lazily generated world.
//!
//! The world has no dynamic geometry: collisions are decided by sampling
//! tiles under an actor's bounding box. Solid objects reject a move
//! outright; water never rejects, it only flags the probe so the caller
//! can switch the actor into boat mode.

use glam::DVec2;
use wildshore_world::{ObjectKind, TerrainKind, TileCoord, WorldCache};

/// Fraction of the nominal actor size actually used as the hitbox.
/// Slightly forgiving on purpose; full-size boxes snag on tile corners.
pub const HITBOX_SCALE: f64 = 0.8;

/// Outcome of probing a candidate actor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionProbe {
    /// A sampled tile holds a solid object; the move must be rejected.
    pub blocked: bool,
    /// A sampled tile is water. Movement stays legal, but the actor is
    /// over water and the caller must apply boat mode.
    pub over_water: bool,
}

/// Probe the four corners of an actor's hitbox at a candidate position.
///
/// `pos` is the actor's top-left corner in world-space pixels. When a
/// solid object is found the probe returns immediately with
/// `blocked = true`; the `over_water` flag is only meaningful for
/// unblocked probes, which are the only ones whose side effects a caller
/// may apply (a rejected move never commits, so it never changes boat
/// state either).
pub fn probe_move(
    world: &mut WorldCache,
    pos: DVec2,
    actor_size: f64,
    tile_size: f64,
) -> CollisionProbe {
    let size = actor_size * HITBOX_SCALE;
    let corners = [
        pos,
        DVec2::new(pos.x + size, pos.y),
        DVec2::new(pos.x, pos.y + size),
        DVec2::new(pos.x + size, pos.y + size),
    ];

    let mut over_water = false;
    for corner in corners {
        let tile = TileCoord::from_world(corner.x, corner.y, tile_size);

        if world.terrain_at(tile) == TerrainKind::Water {
            over_water = true;
        }

        if world.object_at(tile).is_solid() {
            return CollisionProbe {
                blocked: true,
                over_water: false,
            };
        }
    }

    CollisionProbe {
        blocked: false,
        over_water,
    }
}

/// Point-sample walkability for actors without boat mode (enemies).
///
/// A single tile lookup: walkable means land terrain and no object.
pub fn point_walkable(world: &mut WorldCache, pos: DVec2, tile_size: f64) -> bool {
    let tile = TileCoord::from_world(pos.x, pos.y, tile_size);
    world.terrain_at(tile) != TerrainKind::Water
        && world.object_at(tile) == ObjectKind::None
}
