//! Tunable simulation constants.
//!
//! Everything gameplay-balancing lives here rather than as magic numbers
//! scattered through the subsystems. The aggregate deserializes from
//! `config/game.toml`; missing sections and fields fall back to the
//! compiled defaults.

use serde::{Deserialize, Serialize};

/// All tunable constants, grouped by subsystem.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Tunables {
    /// World grid parameters.
    pub world: WorldTunables,
    /// Player stats and state-machine durations.
    pub player: PlayerTunables,
    /// Enemy spawn policy and AI timing.
    pub enemies: EnemyTunables,
    /// Collectible drop parameters.
    pub collectibles: CollectibleTunables,
    /// Audio trigger thresholds.
    pub audio: AudioTunables,
}

/// World grid parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WorldTunables {
    /// Edge length of one tile in world-space pixels.
    pub tile_size: f64,
}

impl Default for WorldTunables {
    fn default() -> Self {
        Self { tile_size: 32.0 }
    }
}

/// Player stats and state-machine durations. All durations are in ticks.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerTunables {
    /// Nominal bounding-box edge length in pixels.
    pub size: f64,
    /// Movement speed on land, pixels per tick.
    pub walk_speed: f64,
    /// Movement speed while in the boat, pixels per tick.
    pub boat_speed: f64,
    /// Maximum (and starting) health.
    pub max_health: i32,
    /// Invulnerability window after taking damage (2 s at 60 fps).
    pub invulnerability_ticks: u32,
    /// Damage flash shown to the renderer after a hit.
    pub damage_flash_ticks: u32,
    /// How long a sword swing lasts.
    pub attack_duration_ticks: u32,
    /// Cooldown between swings.
    pub attack_cooldown_ticks: u32,
    /// Reach of the sword hit-scan in pixels.
    pub attack_range: f64,
    /// Minimum damage per swing (inclusive).
    pub min_damage: i32,
    /// Maximum damage per swing (inclusive).
    pub max_damage: i32,
    /// Probability of a critical hit.
    pub critical_chance: f64,
    /// Damage multiplier on a critical hit.
    pub critical_multiplier: i32,
    /// Grace period before an unextended combo resets.
    pub combo_ticks: u32,
    /// Grace period before leaving combat once no enemy is in range.
    pub combat_ticks: u32,
    /// Combat detection radius in tiles.
    pub combat_detection_tiles: f64,
}

impl Default for PlayerTunables {
    fn default() -> Self {
        Self {
            size: 24.0,
            walk_speed: 3.0,
            boat_speed: 1.5,
            max_health: 3,
            invulnerability_ticks: 120,
            damage_flash_ticks: 10,
            attack_duration_ticks: 15,
            attack_cooldown_ticks: 20,
            attack_range: 60.0, // 2.5x player size
            min_damage: 1,
            max_damage: 3,
            critical_chance: 0.1,
            critical_multiplier: 2,
            combo_ticks: 180,
            combat_ticks: 180,
            combat_detection_tiles: 5.0,
        }
    }
}

/// Enemy spawn policy and AI timing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EnemyTunables {
    /// Registry size cap per spawn pass.
    pub max_enemies: usize,
    /// Minimum spawn distance from the player, in tiles.
    pub min_spawn_distance_tiles: f64,
    /// Half-extent of the spawn square around the player, in tiles.
    pub spawn_range_tiles: f64,
    /// Placement attempts per registry slot before the slot is skipped.
    pub spawn_attempts: u32,
    /// Ticks between wander direction re-rolls.
    pub wander_interval_ticks: u32,
    /// Probability that a wander re-roll stops the enemy instead.
    pub wander_stop_chance: f64,
    /// Contact damage dealt to the player per overlapping tick.
    pub contact_damage: i32,
    /// Scale applied to the combined half-sizes for the contact check.
    pub contact_radius_scale: f64,
}

impl Default for EnemyTunables {
    fn default() -> Self {
        Self {
            max_enemies: 30,
            min_spawn_distance_tiles: 10.0,
            spawn_range_tiles: 50.0,
            spawn_attempts: 50,
            wander_interval_ticks: 120,
            wander_stop_chance: 0.2,
            contact_damage: 1,
            contact_radius_scale: 0.8,
        }
    }
}

/// Collectible drop parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CollectibleTunables {
    /// Heart bounding size in pixels.
    pub heart_size: f64,
    /// Health restored per heart.
    pub heart_heal: i32,
    /// Ticks a dropped heart stays in the world (10 s at 60 fps).
    pub heart_lifetime_ticks: u32,
}

impl Default for CollectibleTunables {
    fn default() -> Self {
        Self {
            heart_size: 15.0,
            heart_heal: 1,
            heart_lifetime_ticks: 600,
        }
    }
}

/// Audio trigger thresholds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioTunables {
    /// Distance in pixels under which the nearby-enemy cue fires.
    pub enemy_nearby_range: f64,
    /// Minimum ticks between nearby-enemy cues.
    pub enemy_nearby_interval_ticks: u32,
}

impl Default for AudioTunables {
    fn default() -> Self {
        Self {
            enemy_nearby_range: 64.0,
            enemy_nearby_interval_ticks: 120,
        }
    }
}

impl Tunables {
    /// Combat detection radius in pixels.
    pub fn combat_detection_range(&self) -> f64 {
        self.player.combat_detection_tiles * self.world.tile_size
    }

    /// Minimum spawn distance from the player in pixels.
    pub fn min_spawn_distance(&self) -> f64 {
        self.enemies.min_spawn_distance_tiles * self.world.tile_size
    }

    /// Spawn square half-extent in pixels.
    pub fn spawn_range(&self) -> f64 {
        self.enemies.spawn_range_tiles * self.world.tile_size
    }
}
