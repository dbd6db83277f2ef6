//! Enemy templates, spawn policy, and per-tick AI.

use crate::player::Player;
use glam::DVec2;
use rand::Rng;
use tracing::{debug, info};
use wildshore_core::{FrameEvents, Tick, Tunables};
use wildshore_physics::point_walkable;
use wildshore_world::{TerrainKind, TileCoord, WorldCache};

/// Ticks of hit flash shown after an enemy takes damage.
pub const HIT_FLASH_TICKS: u32 = 10;

/// How far `last_move_change` is rewound when a wandering enemy bumps
/// into terrain: with the 120-tick wander interval this makes the next
/// re-roll eligible in 20 ticks instead of 120.
const COLLISION_REROLL_REWIND: i64 = 100;

/// Enemy species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    /// Tough, fast chaser with a chance to shrug off damage.
    Goblin,
    /// Slow chaser with medium health.
    Skeleton,
    /// Weak wanderer; never pursues.
    Slime,
}

impl EnemyKind {
    /// Every species, in spawn-roll order.
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Goblin, EnemyKind::Skeleton, EnemyKind::Slime];

    /// Canonical lowercase string key for configs/logging.
    pub const fn as_str(self) -> &'static str {
        match self {
            EnemyKind::Goblin => "goblin",
            EnemyKind::Skeleton => "skeleton",
            EnemyKind::Slime => "slime",
        }
    }

    /// Template stats for this species. Copied onto each instance at
    /// spawn time as a value snapshot; per-enemy health then mutates
    /// independently of the template.
    pub const fn stats(self) -> EnemyStats {
        match self {
            EnemyKind::Goblin => EnemyStats {
                size: 21.6,
                speed: 1.0,
                follow_player: true,
                detection_radius: 192.0, // 6 tiles
                max_health: 5,
                damage_resistance: 0.3,
            },
            EnemyKind::Skeleton => EnemyStats {
                size: 21.6,
                speed: 0.5,
                follow_player: true,
                detection_radius: 160.0, // 5 tiles
                max_health: 3,
                damage_resistance: 0.0,
            },
            EnemyKind::Slime => EnemyStats {
                size: 16.8,
                speed: 0.3,
                follow_player: false,
                detection_radius: 0.0,
                max_health: 2,
                damage_resistance: 0.0,
            },
        }
    }

    /// Base score for a kill, before the combo multiplier.
    pub const fn base_score(self) -> u64 {
        match self {
            EnemyKind::Goblin => 300,
            EnemyKind::Skeleton => 200,
            EnemyKind::Slime => 100,
        }
    }

    /// Base heart drop probability on death. Only consulted while the
    /// player is missing health, and doubled at exactly 1 health.
    pub const fn heart_drop_chance(self) -> f64 {
        match self {
            EnemyKind::Goblin => 0.25,
            EnemyKind::Skeleton => 0.15,
            EnemyKind::Slime => 0.10,
        }
    }
}

/// Numeric template copied onto each enemy at spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    /// Bounding-box edge length in pixels.
    pub size: f64,
    /// Movement speed, pixels per tick.
    pub speed: f64,
    /// Whether this species chases the player at all.
    pub follow_player: bool,
    /// Pursuit radius in pixels; zero for non-chasers.
    pub detection_radius: f64,
    /// Health at spawn.
    pub max_health: i32,
    /// Probability that incoming damage is halved.
    pub damage_resistance: f64,
}

/// A live enemy.
#[derive(Debug, Clone)]
pub struct Enemy {
    /// Species tag.
    pub kind: EnemyKind,
    /// World-space position.
    pub pos: DVec2,
    /// Stats snapshot taken from the template at spawn.
    pub stats: EnemyStats,
    /// Current health; the enemy is removed when this reaches zero.
    pub health: i32,
    /// Whether the enemy moves this tick.
    pub is_moving: bool,
    /// Current movement direction (unit vector when moving).
    pub move_direction: DVec2,
    /// Tick of the last wander re-roll. Signed: the collision rewind can
    /// push it below zero early in a session.
    pub last_move_change: i64,
    /// Ticks of hit flash remaining, for the renderer.
    pub hit_flash: u32,
}

impl Enemy {
    /// Instantiate a species at a position, copying its template stats.
    pub fn new(kind: EnemyKind, pos: DVec2) -> Self {
        let stats = kind.stats();
        Self {
            kind,
            pos,
            stats,
            health: stats.max_health,
            is_moving: false,
            move_direction: DVec2::ZERO,
            last_move_change: 0,
            hit_flash: 0,
        }
    }

    /// Euclidean distance to a world-space point.
    pub fn distance_to(&self, point: DVec2) -> f64 {
        self.pos.distance(point)
    }
}

/// Build a fresh enemy registry around the player.
///
/// Replaces, never appends: the caller assigns the result over the old
/// registry. Each of the `max_enemies` slots tries up to
/// `spawn_attempts` random positions within the spawn square; a slot
/// whose attempts are all invalid is skipped, so the registry may come
/// back short. That is a policy outcome, not an error.
pub fn spawn_enemies(
    world: &mut WorldCache,
    player_pos: DVec2,
    tunables: &Tunables,
    rng: &mut impl Rng,
) -> Vec<Enemy> {
    let range = tunables.spawn_range();
    let min_distance = tunables.min_spawn_distance();
    let tile_size = tunables.world.tile_size;

    let mut enemies = Vec::with_capacity(tunables.enemies.max_enemies);
    for _ in 0..tunables.enemies.max_enemies {
        let mut placed = None;
        for _ in 0..tunables.enemies.spawn_attempts {
            let candidate = player_pos
                + DVec2::new(rng.gen_range(-range..range), rng.gen_range(-range..range));

            let tile = TileCoord::from_world(candidate.x, candidate.y, tile_size);
            let valid = world.terrain_at(tile) != TerrainKind::Water
                && !world.object_at(tile).is_solid()
                && candidate.distance(player_pos) > min_distance;
            if valid {
                placed = Some(candidate);
                break;
            }
        }

        let Some(pos) = placed else {
            debug!("spawn slot exhausted its attempts, skipping");
            continue;
        };

        let kind = EnemyKind::ALL[rng.gen_range(0..EnemyKind::ALL.len())];
        enemies.push(Enemy::new(kind, pos));
    }

    info!(count = enemies.len(), "spawned enemies");
    enemies
}

/// Advance every enemy by one tick.
///
/// Per enemy, in order: hit-flash decay, contact damage against the
/// player, follow-or-wander decision, then collision-gated movement.
/// Contact damage can fire on every overlapping tick; only the player's
/// invulnerability window gates it. Enemies never get boat mode, so
/// water rejects their movement like a solid object does.
///
/// Returns true if contact damage killed the player this tick.
pub fn update_enemies(
    enemies: &mut [Enemy],
    world: &mut WorldCache,
    player: &mut Player,
    tick: Tick,
    tunables: &Tunables,
    rng: &mut impl Rng,
    events: &mut FrameEvents,
) -> bool {
    let tile_size = tunables.world.tile_size;
    let wander_interval = tunables.enemies.wander_interval_ticks as i64;
    let mut player_died = false;

    for enemy in enemies.iter_mut() {
        if enemy.hit_flash > 0 {
            enemy.hit_flash -= 1;
        }

        if !player.invulnerable {
            let contact_range = (player.size / 2.0 + enemy.stats.size / 2.0)
                * tunables.enemies.contact_radius_scale;
            if enemy.distance_to(player.pos) < contact_range {
                player_died |= player.take_damage(tunables.enemies.contact_damage, events);
            }
        }

        let should_follow = enemy.stats.follow_player
            && enemy.distance_to(player.pos) <= enemy.stats.detection_radius;

        if should_follow {
            let delta = player.pos - enemy.pos;
            let distance = delta.length();
            if distance > 0.0 {
                enemy.move_direction = delta / distance;
                enemy.is_moving = true;
            }
        } else if tick.signed() - enemy.last_move_change > wander_interval {
            if rng.gen::<f64>() < tunables.enemies.wander_stop_chance {
                enemy.is_moving = false;
            } else {
                let angle = rng.gen::<f64>() * std::f64::consts::TAU;
                enemy.move_direction = DVec2::new(angle.cos(), angle.sin());
                enemy.is_moving = true;
            }
            enemy.last_move_change = tick.signed();
        }

        if enemy.is_moving {
            let candidate = enemy.pos + enemy.move_direction * enemy.stats.speed;
            if point_walkable(world, candidate, tile_size) {
                enemy.pos = candidate;
            } else {
                // Bumped into water or an object: make the next wander
                // re-roll eligible early instead of grinding at the wall.
                enemy.last_move_change = tick.signed() - COLLISION_REROLL_REWIND;
            }
        }
    }

    player_died
}
