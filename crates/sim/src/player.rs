//! Player state and its frame-by-frame transitions.
//!
//! Three orthogonal state machines live here: the attack cycle
//! (idle -> attacking -> cooldown), the invulnerability window after a
//! hit, and the combo/combat timers. All of them count ticks, never wall
//! clock.

use crate::enemies::Enemy;
use glam::DVec2;
use wildshore_core::{AudioCue, FrameEvents, Tunables};

/// The player entity. Created once per session; `reset` re-initializes
/// it in place on game over rather than replacing it.
///
/// Stats are copied out of [`Tunables`] at construction, the same value
/// snapshot the enemy templates get, so a mid-session config reload can
/// never change a live entity.
#[derive(Debug, Clone)]
pub struct Player {
    /// World-space position of the hitbox's top-left corner.
    pub pos: DVec2,
    /// Nominal bounding-box edge length.
    pub size: f64,
    /// Current movement speed; swaps between walk and boat speed.
    pub speed: f64,
    walk_speed: f64,
    boat_speed: f64,
    /// Whether movement committed this tick.
    pub is_moving: bool,
    /// Last nonzero input direction; aims the sword swing.
    pub last_direction: DVec2,
    /// Boat mode, entered automatically over water.
    pub in_boat: bool,

    /// Current health.
    pub health: i32,
    /// Health cap, also the respawn value.
    pub max_health: i32,
    /// Damage is ignored entirely while set.
    pub invulnerable: bool,
    /// Ticks of invulnerability remaining.
    pub invulnerability_time: u32,
    invulnerability_duration: u32,
    /// Ticks of damage flash remaining, for the renderer.
    pub damage_flash_time: u32,
    damage_flash_duration: u32,

    /// Whether a swing is in progress.
    pub is_attacking: bool,
    /// Ticks left in the current swing.
    pub attack_time: u32,
    attack_duration: u32,
    /// Ticks until the next swing is allowed.
    pub attack_cooldown: u32,
    attack_cooldown_duration: u32,
    /// Sword reach in pixels.
    pub attack_range: f64,
    /// Inclusive damage roll bounds.
    pub min_damage: i32,
    /// Inclusive damage roll bounds.
    pub max_damage: i32,
    /// Probability of a critical hit.
    pub critical_chance: f64,
    /// Damage multiplier on a critical hit.
    pub critical_multiplier: i32,

    /// Whether the player currently counts as in combat.
    pub in_combat: bool,
    /// Grace ticks before combat ends once no enemy is near.
    pub combat_timer: u32,
    combat_duration: u32,
    /// Radius in pixels within which enemies keep the player in combat.
    pub combat_detection_range: f64,

    /// Accumulated score. Survives death.
    pub score: u64,
    /// Consecutive-kill counter; multiplies kill scores.
    pub combo: u32,
    /// Ticks before the combo decays.
    pub combo_timer: u32,
    combo_duration: u32,
}

impl Player {
    /// Create a player at the origin with stats copied from config.
    pub fn new(tunables: &Tunables) -> Self {
        let p = &tunables.player;
        Self {
            pos: DVec2::ZERO,
            size: p.size,
            speed: p.walk_speed,
            walk_speed: p.walk_speed,
            boat_speed: p.boat_speed,
            is_moving: false,
            last_direction: DVec2::ZERO,
            in_boat: false,
            health: p.max_health,
            max_health: p.max_health,
            invulnerable: false,
            invulnerability_time: 0,
            invulnerability_duration: p.invulnerability_ticks,
            damage_flash_time: 0,
            damage_flash_duration: p.damage_flash_ticks,
            is_attacking: false,
            attack_time: 0,
            attack_duration: p.attack_duration_ticks,
            attack_cooldown: 0,
            attack_cooldown_duration: p.attack_cooldown_ticks,
            attack_range: p.attack_range,
            min_damage: p.min_damage,
            max_damage: p.max_damage,
            critical_chance: p.critical_chance,
            critical_multiplier: p.critical_multiplier,
            in_combat: false,
            combat_timer: 0,
            combat_duration: p.combat_ticks,
            combat_detection_range: tunables.combat_detection_range(),
            score: 0,
            combo: 0,
            combo_timer: 0,
            combo_duration: p.combo_ticks,
        }
    }

    /// Apply boat mode after a committed move. Entering water swaps to
    /// boat speed; returning to land restores walking. Rejected moves
    /// never call this.
    pub fn set_over_water(&mut self, over_water: bool) {
        if over_water {
            self.in_boat = true;
            self.speed = self.boat_speed;
        } else {
            self.in_boat = false;
            self.speed = self.walk_speed;
        }
    }

    /// Whether an attack input may start a swing this tick.
    pub fn can_attack(&self) -> bool {
        self.attack_cooldown == 0 && !self.is_attacking
    }

    /// Begin a swing. The hit-scan fires once, now, not during the
    /// animation; callers resolve combat immediately after this.
    pub fn start_attack(&mut self) {
        self.is_attacking = true;
        self.attack_time = self.attack_duration;
    }

    /// Advance the attack state machine by one tick.
    pub fn tick_attack(&mut self) {
        if self.attack_cooldown > 0 {
            self.attack_cooldown -= 1;
        }
        if self.is_attacking {
            self.attack_time = self.attack_time.saturating_sub(1);
            if self.attack_time == 0 {
                self.is_attacking = false;
                self.attack_cooldown = self.attack_cooldown_duration;
            }
        }
    }

    /// Apply damage to the player, honoring the invulnerability window.
    ///
    /// Returns true if this hit killed the player. While invulnerable the
    /// call is a complete no-op: no health change, no timer refresh.
    pub fn take_damage(&mut self, amount: i32, events: &mut FrameEvents) -> bool {
        if self.invulnerable {
            return false;
        }
        self.health -= amount;
        self.invulnerable = true;
        self.invulnerability_time = self.invulnerability_duration;
        self.damage_flash_time = self.damage_flash_duration;
        events.cue(AudioCue::Damage);
        self.health <= 0
    }

    /// Advance invulnerability, damage-flash, and combo timers.
    pub fn tick_timers(&mut self) {
        if self.invulnerable {
            self.invulnerability_time = self.invulnerability_time.saturating_sub(1);
            if self.invulnerability_time == 0 {
                self.invulnerable = false;
            }
            if self.damage_flash_time > 0 {
                self.damage_flash_time -= 1;
            }
        }
        if self.combo > 0 {
            self.combo_timer = self.combo_timer.saturating_sub(1);
            if self.combo_timer == 0 {
                self.combo = 0;
            }
        }
    }

    /// Record a kill: bump the combo and refresh its timer.
    ///
    /// Returns the combo value to multiply the kill score by, so the kill
    /// that takes the combo from 0 to 1 scores at x1.
    pub fn register_kill(&mut self) -> u32 {
        self.combo += 1;
        self.combo_timer = self.combo_duration;
        self.combo
    }

    /// Restore the player for a respawn. Health, attack, combat, and
    /// combo state reset; score and position are left to the caller.
    pub fn reset(&mut self) {
        self.health = self.max_health;
        self.invulnerable = false;
        self.invulnerability_time = 0;
        self.damage_flash_time = 0;
        self.is_attacking = false;
        self.attack_time = 0;
        self.attack_cooldown = 0;
        self.in_combat = false;
        self.combat_timer = 0;
        self.combo = 0;
        self.combo_timer = 0;
    }
}

/// Refresh the in-combat flag from enemy proximity and the attack state.
///
/// Entering and leaving combat are edge-triggered: the cues fire once per
/// transition and drive music selection in the audio collaborator.
/// Returns the distance to the nearest enemy inside the detection range,
/// which the session uses for the rate-limited nearby-enemy cue.
pub fn update_combat_state(
    player: &mut Player,
    enemies: &[Enemy],
    events: &mut FrameEvents,
) -> Option<f64> {
    let was_in_combat = player.in_combat;

    let nearest = enemies
        .iter()
        .map(|e| e.pos.distance(player.pos))
        .filter(|&d| d < player.combat_detection_range)
        .min_by(|a, b| a.total_cmp(b));

    if nearest.is_some() {
        player.in_combat = true;
        player.combat_timer = player.combat_duration;
    } else if player.combat_timer > 0 {
        player.combat_timer -= 1;
        if player.combat_timer == 0 {
            player.in_combat = false;
        }
    } else {
        player.in_combat = false;
    }

    // Attacking keeps the player in combat even with nothing in range.
    if player.is_attacking {
        player.in_combat = true;
        player.combat_timer = player.combat_duration;
    }

    if !was_in_combat && player.in_combat {
        events.cue(AudioCue::CombatStart);
    }
    if was_in_combat && !player.in_combat {
        events.cue(AudioCue::CombatEnd);
    }

    nearest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::EnemyKind;

    fn player() -> Player {
        Player::new(&Tunables::default())
    }

    #[test]
    fn test_attack_cycle_timing() {
        let mut p = player();
        assert!(p.can_attack());

        p.start_attack();
        assert!(p.is_attacking);
        assert!(!p.can_attack());

        // 15 ticks of swing.
        for _ in 0..15 {
            assert!(p.is_attacking);
            p.tick_attack();
        }
        assert!(!p.is_attacking);
        assert_eq!(p.attack_cooldown, 20);

        // 20 ticks of cooldown back to idle.
        for _ in 0..20 {
            assert!(!p.can_attack());
            p.tick_attack();
        }
        assert!(p.can_attack());
    }

    #[test]
    fn test_invulnerability_blocks_second_hit() {
        let mut p = player();
        let mut events = FrameEvents::new();

        assert!(!p.take_damage(1, &mut events));
        assert_eq!(p.health, 2);
        assert!(p.invulnerable);

        // Second hit within the window is a complete no-op.
        assert!(!p.take_damage(1, &mut events));
        assert_eq!(p.health, 2);
        assert_eq!(events.cues(), &[AudioCue::Damage]);

        // Window expires after 120 ticks, then damage lands again.
        for _ in 0..120 {
            p.tick_timers();
        }
        assert!(!p.invulnerable);
        assert!(!p.take_damage(1, &mut events));
        assert_eq!(p.health, 1);
    }

    #[test]
    fn test_lethal_hit_reports_death() {
        let mut p = player();
        let mut events = FrameEvents::new();
        p.health = 1;
        assert!(p.take_damage(1, &mut events));
    }

    #[test]
    fn test_combo_decays_after_grace_period() {
        let mut p = player();
        assert_eq!(p.register_kill(), 1);
        assert_eq!(p.register_kill(), 2);

        for _ in 0..179 {
            p.tick_timers();
        }
        assert_eq!(p.combo, 2);
        p.tick_timers();
        assert_eq!(p.combo, 0);
    }

    #[test]
    fn test_combat_state_edges() {
        let mut p = player();
        let mut events = FrameEvents::new();

        // Enemy just inside the 5-tile detection range.
        let enemy = Enemy::new(EnemyKind::Slime, DVec2::new(100.0, 0.0));
        let nearest = update_combat_state(&mut p, std::slice::from_ref(&enemy), &mut events);
        assert!(p.in_combat);
        assert_eq!(nearest, Some(100.0));
        assert_eq!(events.cues(), &[AudioCue::CombatStart]);

        // Enemy gone: combat lingers for the grace period, then ends once.
        events.drain();
        for _ in 0..179 {
            assert_eq!(update_combat_state(&mut p, &[], &mut events), None);
            assert!(p.in_combat);
        }
        update_combat_state(&mut p, &[], &mut events);
        assert!(!p.in_combat);
        assert_eq!(events.cues(), &[AudioCue::CombatEnd]);
    }

    #[test]
    fn test_attacking_forces_combat() {
        let mut p = player();
        let mut events = FrameEvents::new();
        p.start_attack();
        update_combat_state(&mut p, &[], &mut events);
        assert!(p.in_combat);
        assert_eq!(p.combat_timer, 180);
    }

    #[test]
    fn test_reset_keeps_score() {
        let mut p = player();
        let mut events = FrameEvents::new();
        p.score = 1200;
        p.register_kill();
        p.take_damage(3, &mut events);
        p.start_attack();

        p.reset();
        assert_eq!(p.health, p.max_health);
        assert!(!p.invulnerable);
        assert!(!p.is_attacking);
        assert_eq!(p.combo, 0);
        assert_eq!(p.score, 1200);
    }
}
