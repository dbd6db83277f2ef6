//! Determinism validation worldtest.
//!
//! Validates that tile generation is completely deterministic:
//! - repeated queries return identical results
//! - access order does not affect generated content
//! - independent caches agree tile for tile
//! - threshold boundaries classify into the higher bucket

use std::collections::HashMap;
use wildshore_world::{
    generate_object, generate_terrain, ObjectKind, TerrainKind, TileCoord, WorldCache,
};

const REGION_RADIUS: i32 = 128; // 257x257 tiles
const VERIFICATION_ROUNDS: usize = 3;

#[test]
fn region_regenerates_identically() {
    let mut baseline = HashMap::new();
    for y in -REGION_RADIUS..=REGION_RADIUS {
        for x in -REGION_RADIUS..=REGION_RADIUS {
            let terrain = generate_terrain(x, y);
            let object = generate_object(x, y, terrain);
            baseline.insert(TileCoord::new(x, y), (terrain, object));
        }
    }

    for round in 0..VERIFICATION_ROUNDS {
        for (&tile, &(terrain, object)) in &baseline {
            assert_eq!(
                generate_terrain(tile.x, tile.y),
                terrain,
                "terrain mismatch at {tile} in round {round}"
            );
            assert_eq!(
                generate_object(tile.x, tile.y, terrain),
                object,
                "object mismatch at {tile} in round {round}"
            );
        }
    }
}

#[test]
fn access_order_does_not_change_content() {
    // Sequential sweep.
    let mut sequential = WorldCache::new();
    let mut expected = Vec::new();
    for y in -40..=40 {
        for x in -40..=40 {
            let tile = TileCoord::new(x, y);
            expected.push((tile, sequential.terrain_at(tile), sequential.object_at(tile)));
        }
    }

    // Deterministically shuffled sweep on a fresh cache.
    let mut shuffled = expected.clone();
    let len = shuffled.len();
    for i in 0..len {
        let j = (i.wrapping_mul(6364136223846793005) >> 3) % len;
        shuffled.swap(i, j);
    }

    let mut randomized = WorldCache::new();
    for (tile, terrain, object) in shuffled {
        // Objects first this time, to also exercise the terrain side effect.
        assert_eq!(randomized.object_at(tile), object, "object at {tile}");
        assert_eq!(randomized.terrain_at(tile), terrain, "terrain at {tile}");
    }
}

#[test]
fn boundary_values_fall_into_higher_bucket() {
    // The thresholds use strict `<`: a value of exactly 0.3 is sand, not
    // water, and so on. The origin row y=0 has variation = sin(x * 0.05) * 0.2
    // and noise = sin(x * 0.1) * 0.5 + 0.5; scanning it gives a dense set of
    // values around every threshold, and classification must agree with a
    // direct re-evaluation of the formula.
    for x in -10_000..10_000 {
        let xf = x as f64;
        let value = (xf * 0.1).sin() * 0.5 + 0.5 + (xf * 0.05).sin() * 0.2;
        let expected = if value < 0.3 {
            TerrainKind::Water
        } else if value < 0.4 {
            TerrainKind::Sand
        } else if value < 0.7 {
            TerrainKind::Grass
        } else if value < 0.85 {
            TerrainKind::Earth
        } else {
            TerrainKind::Stone
        };
        assert_eq!(generate_terrain(x, 0), expected, "x = {x}");
    }
}

#[test]
fn memoized_world_never_shrinks() {
    let mut cache = WorldCache::new();
    let mut last = 0;
    for y in 0..30 {
        for x in 0..30 {
            cache.object_at(TileCoord::new(x, y));
            let now = cache.terrain_entries();
            assert!(now >= last);
            last = now;
        }
    }
    assert_eq!(cache.terrain_entries(), 900);
    assert_eq!(cache.object_entries(), 900);
}

#[test]
fn earth_rock_branch_is_shadowed_by_tree_rule() {
    // An earth tile with hash value < 0.1 becomes a tree before the
    // earth-specific rock rule is consulted; with the current thresholds
    // the two ranges cannot overlap, so no earth tile is ever both.
    for y in -300..300 {
        for x in -300..300 {
            if generate_terrain(x, y) == TerrainKind::Earth {
                let hash = (x as f64 * 12.9898 + y as f64 * 78.233).sin() * 43758.5453;
                let value = hash - hash.floor();
                let object = generate_object(x, y, TerrainKind::Earth);
                if value < 0.1 {
                    assert_eq!(object, ObjectKind::Tree);
                } else if value > 0.9 {
                    assert_eq!(object, ObjectKind::Rock);
                } else {
                    assert_eq!(object, ObjectKind::None);
                }
            }
        }
    }
}
