//! Player movement: per-axis collision commits and the spawn search.

use crate::player::Player;
use glam::DVec2;
use tracing::warn;
use wildshore_physics::probe_move;
use wildshore_world::{TerrainKind, TileCoord, WorldCache};

/// Spawn candidates are probed along the (3a, 3a) diagonal.
const SPAWN_STRIDE: i32 = 3;
const SPAWN_ATTEMPTS: i32 = 50;

/// Move the player one tick along an input direction.
///
/// The two axes commit independently, which is what makes walls slidable:
/// a diagonal push into a tree keeps the free axis moving. Boat mode is a
/// side effect of a committed probe only; a rejected move changes neither
/// position nor boat state.
///
/// `direction` is the already-normalized input vector. `is_moving`
/// reflects whether any position change actually committed this tick,
/// and `last_direction` tracks the raw intent so the sword still aims
/// while pinned against a wall.
pub fn apply_movement(
    player: &mut Player,
    world: &mut WorldCache,
    direction: DVec2,
    tile_size: f64,
) {
    if direction == DVec2::ZERO {
        player.is_moving = false;
        return;
    }
    player.last_direction = direction;
    let before = player.pos;

    let candidate = DVec2::new(player.pos.x + direction.x * player.speed, player.pos.y);
    let probe = probe_move(world, candidate, player.size, tile_size);
    if !probe.blocked {
        player.pos = candidate;
        player.set_over_water(probe.over_water);
    }

    let candidate = DVec2::new(player.pos.x, player.pos.y + direction.y * player.speed);
    let probe = probe_move(world, candidate, player.size, tile_size);
    if !probe.blocked {
        player.pos = candidate;
        player.set_over_water(probe.over_water);
    }

    player.is_moving = player.pos != before;
}

/// Find a spawn tile: the first grass or earth tile without an object
/// along the (3a, 3a) diagonal from the origin.
///
/// The deterministic terrain guarantees a hit within a few steps; if all
/// attempts somehow fail, the last candidate is used anyway so the
/// session still starts.
pub fn starting_position(world: &mut WorldCache, tile_size: f64) -> DVec2 {
    let mut tile = TileCoord::new(0, 0);
    for a in 0..SPAWN_ATTEMPTS {
        tile = TileCoord::new(a * SPAWN_STRIDE, a * SPAWN_STRIDE);
        let terrain = world.terrain_at(tile);
        if matches!(terrain, TerrainKind::Grass | TerrainKind::Earth) && world.is_walkable(tile) {
            return DVec2::new(tile.x as f64 * tile_size, tile.y as f64 * tile_size);
        }
    }
    warn!(%tile, "no clear spawn tile found, using last candidate");
    DVec2::new(tile.x as f64 * tile_size, tile.y as f64 * tile_size)
}
