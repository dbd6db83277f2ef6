//! Lifetime-managed pickups dropped by defeated enemies.

use crate::player::Player;
use glam::DVec2;
use wildshore_core::tunables::CollectibleTunables;
use wildshore_core::{AudioCue, EffectEvent, FrameEvents};

/// A dropped heart waiting to be picked up or to expire.
#[derive(Debug, Clone, PartialEq)]
pub struct Heart {
    /// World-space position.
    pub pos: DVec2,
    /// Bounding size in pixels.
    pub size: f64,
    /// Health restored on pickup.
    pub heal: i32,
    /// Ticks remaining before the heart despawns.
    pub lifetime: u32,
}

/// Registry of live collectibles.
///
/// Holds the heart template copied from config at construction, so drops
/// spawned mid-session are immune to config reloads.
#[derive(Debug, Clone)]
pub struct CollectibleRegistry {
    hearts: Vec<Heart>,
    size: f64,
    heal: i32,
    lifetime: u32,
}

impl CollectibleRegistry {
    /// Empty registry with the heart template snapshot.
    pub fn new(tunables: &CollectibleTunables) -> Self {
        Self {
            hearts: Vec::new(),
            size: tunables.heart_size,
            heal: tunables.heart_heal,
            lifetime: tunables.heart_lifetime_ticks,
        }
    }

    /// Drop a heart at a world position.
    pub fn add_heart(&mut self, pos: DVec2) {
        self.hearts.push(Heart {
            pos,
            size: self.size,
            heal: self.heal,
            lifetime: self.lifetime,
        });
    }

    /// Live hearts, for the renderer.
    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    /// Number of live collectibles.
    pub fn len(&self) -> usize {
        self.hearts.len()
    }

    /// Whether no collectibles are live.
    pub fn is_empty(&self) -> bool {
        self.hearts.is_empty()
    }

    /// Advance every collectible by one tick: age out expired ones, then
    /// check player proximity.
    ///
    /// The pickup radius is asymmetric on purpose: the player side uses
    /// the full player size rather than half of it, which makes hearts
    /// generously easy to grab. A heart collected at full health is
    /// consumed without healing.
    pub fn update(&mut self, player: &mut Player, events: &mut FrameEvents) {
        let mut i = 0;
        while i < self.hearts.len() {
            let heart = &mut self.hearts[i];

            heart.lifetime -= 1;
            if heart.lifetime == 0 {
                self.hearts.remove(i);
                continue;
            }

            let distance = heart.pos.distance(player.pos);
            if distance < player.size + heart.size / 2.0 {
                let healed = player.health < player.max_health;
                if healed {
                    player.health = (player.health + heart.heal).min(player.max_health);
                    events.cue(AudioCue::HeartCollect);
                }
                events.effect(EffectEvent::HeartPickup {
                    x: heart.pos.x,
                    y: heart.pos.y,
                    healed,
                });
                self.hearts.remove(i);
                continue;
            }

            i += 1;
        }
    }
}
