//! The session: one world, one player, one registry of everything else.

use crate::collectibles::{CollectibleRegistry, Heart};
use crate::combat::resolve_attack;
use crate::enemies::{spawn_enemies, update_enemies, Enemy};
use crate::movement::{apply_movement, starting_position};
use crate::player::{update_combat_state, Player};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use wildshore_core::{AudioCue, EffectEvent, FrameEvents, InputFrame, Tick, Tunables};
use wildshore_world::WorldCache;

/// A running game: owns the world cache, all entities, the RNG, and the
/// tick counter, and advances them together one fixed step at a time.
///
/// All randomness flows through the single owned [`StdRng`], so a seeded
/// session replays identically given the same input frames.
pub struct GameSession {
    tunables: Tunables,
    world: WorldCache,
    player: Player,
    enemies: Vec<Enemy>,
    collectibles: CollectibleRegistry,
    rng: StdRng,
    tick: Tick,
    events: FrameEvents,
    enemy_nearby_cooldown: u32,
}

impl GameSession {
    /// Start a session with entropy-derived randomness.
    pub fn new(tunables: Tunables) -> Self {
        Self::with_rng(tunables, StdRng::from_entropy())
    }

    /// Start a deterministic session from a seed.
    pub fn with_seed(tunables: Tunables, seed: u64) -> Self {
        Self::with_rng(tunables, StdRng::seed_from_u64(seed))
    }

    fn with_rng(tunables: Tunables, mut rng: StdRng) -> Self {
        let mut world = WorldCache::new();
        let mut player = Player::new(&tunables);
        player.pos = starting_position(&mut world, tunables.world.tile_size);
        let enemies = spawn_enemies(&mut world, player.pos, &tunables, &mut rng);
        let collectibles = CollectibleRegistry::new(&tunables.collectibles);

        info!(
            x = player.pos.x,
            y = player.pos.y,
            enemies = enemies.len(),
            "session started"
        );

        Self {
            tunables,
            world,
            player,
            enemies,
            collectibles,
            rng,
            tick: Tick::ZERO,
            events: FrameEvents::new(),
            enemy_nearby_cooldown: 0,
        }
    }

    /// Advance the whole simulation by one tick.
    ///
    /// Fixed order: timers, combat state, attack resolution, player
    /// movement, enemy AI, collectibles. A lethal hit anywhere in the
    /// enemy pass triggers the respawn before collectibles run.
    pub fn update(&mut self, input: InputFrame) {
        self.tick = self.tick.next();
        self.player.tick_timers();

        let nearest = update_combat_state(&mut self.player, &self.enemies, &mut self.events);
        if self.enemy_nearby_cooldown > 0 {
            self.enemy_nearby_cooldown -= 1;
        }
        if let Some(distance) = nearest {
            if distance < self.tunables.audio.enemy_nearby_range && self.enemy_nearby_cooldown == 0
            {
                self.events.cue(AudioCue::EnemyNearby);
                self.enemy_nearby_cooldown = self.tunables.audio.enemy_nearby_interval_ticks;
            }
        }

        if input.attack && self.player.can_attack() {
            self.player.start_attack();
            resolve_attack(
                &mut self.player,
                &mut self.enemies,
                &mut self.collectibles,
                &mut self.rng,
                &mut self.events,
            );
        }
        self.player.tick_attack();

        apply_movement(
            &mut self.player,
            &mut self.world,
            input.direction,
            self.tunables.world.tile_size,
        );

        let player_died = update_enemies(
            &mut self.enemies,
            &mut self.world,
            &mut self.player,
            self.tick,
            &self.tunables,
            &mut self.rng,
            &mut self.events,
        );
        if player_died {
            self.respawn();
        }

        self.collectibles.update(&mut self.player, &mut self.events);
    }

    /// Game over: restore the player in place (score survives), find a
    /// fresh spawn tile, and rebuild the enemy registry around it. The
    /// world cache is kept; terrain is deterministic anyway.
    fn respawn(&mut self) {
        info!(score = self.player.score, tick = self.tick.0, "player died, respawning");
        self.player.reset();
        self.player.pos = starting_position(&mut self.world, self.tunables.world.tile_size);
        self.enemies = spawn_enemies(&mut self.world, self.player.pos, &self.tunables, &mut self.rng);
        self.collectibles = CollectibleRegistry::new(&self.tunables.collectibles);
        self.events.effect(EffectEvent::Respawn);
    }

    /// Current tick.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// The player entity.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Live enemies.
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Live collectibles.
    pub fn hearts(&self) -> &[Heart] {
        self.collectibles.hearts()
    }

    /// The memoized world, for cache statistics and rendering.
    pub fn world(&self) -> &WorldCache {
        &self.world
    }

    /// Take everything queued since the last drain.
    pub fn drain_events(&mut self) -> (Vec<AudioCue>, Vec<EffectEvent>) {
        self.events.drain()
    }
}
