//! Attack resolution: the one-shot hit-scan fired at swing start.

use crate::collectibles::CollectibleRegistry;
use crate::enemies::{Enemy, HIT_FLASH_TICKS};
use crate::player::Player;
use glam::DVec2;
use rand::Rng;
use tracing::debug;
use wildshore_core::{AudioCue, EffectEvent, FrameEvents};

/// Per-enemy outcome of one swing, for the effects/audio layer.
#[derive(Debug, Clone, PartialEq)]
pub struct HitReport {
    /// Species that was struck.
    pub kind: crate::enemies::EnemyKind,
    /// World-space position of the enemy when struck.
    pub pos: DVec2,
    /// Damage dealt after critical and resistance adjustments.
    pub damage: i32,
    /// Critical roll succeeded.
    pub critical: bool,
    /// Resistance roll succeeded.
    pub resisted: bool,
    /// The enemy died and was removed from the registry.
    pub killed: bool,
    /// Score awarded (zero unless killed).
    pub score: u64,
}

/// Resolve a sword swing against every enemy in range.
///
/// Called exactly once per attack start. The swing is centered half a
/// player-size along the facing direction; an enemy is in range when its
/// distance to that center is under `attack_range + enemy size`.
///
/// Damage pipeline, in order: uniform roll in `[min, max]`, critical
/// multiplier (floored), resistance halving (floored, minimum 1). The
/// critical and resistance rolls are independent and can both apply.
/// Kills remove the enemy immediately, bump the combo BEFORE computing
/// the score multiplier, and may drop a heart when the player is hurt.
/// Enemies are evaluated in registry order, so two kills in one swing
/// score at consecutive combo values.
pub fn resolve_attack(
    player: &mut Player,
    enemies: &mut Vec<Enemy>,
    collectibles: &mut CollectibleRegistry,
    rng: &mut impl Rng,
    events: &mut FrameEvents,
) -> Vec<HitReport> {
    let attack_center = player.pos + player.last_direction * player.size * 0.5;
    let mut reports = Vec::new();

    let mut i = 0;
    while i < enemies.len() {
        let enemy = &mut enemies[i];
        if enemy.pos.distance(attack_center) >= player.attack_range + enemy.stats.size {
            i += 1;
            continue;
        }

        let mut damage = rng.gen_range(player.min_damage..=player.max_damage);

        let critical = rng.gen::<f64>() < player.critical_chance;
        if critical {
            damage *= player.critical_multiplier;
        }

        let resisted =
            enemy.stats.damage_resistance > 0.0 && rng.gen::<f64>() < enemy.stats.damage_resistance;
        if resisted {
            damage = (damage / 2).max(1);
        }

        enemy.hit_flash = HIT_FLASH_TICKS;
        enemy.health -= damage;
        let pos = enemy.pos;
        let kind = enemy.kind;

        events.effect(EffectEvent::DamageNumber {
            x: pos.x,
            y: pos.y,
            amount: damage,
            critical,
            resisted,
        });

        if enemy.health <= 0 {
            enemies.remove(i);
            events.cue(AudioCue::EnemyDefeat);

            let combo = player.register_kill();
            let score = kind.base_score() * u64::from(combo);
            player.score += score;
            events.effect(EffectEvent::KillBurst {
                x: pos.x,
                y: pos.y,
                score,
                combo,
            });

            maybe_drop_heart(player, kind, pos, collectibles, rng);

            debug!(kind = kind.as_str(), score, combo, "enemy defeated");
            reports.push(HitReport {
                kind,
                pos,
                damage,
                critical,
                resisted,
                killed: true,
                score,
            });
        } else {
            reports.push(HitReport {
                kind,
                pos,
                damage,
                critical,
                resisted,
                killed: false,
                score: 0,
            });
            i += 1;
        }
    }

    if reports.is_empty() {
        events.cue(AudioCue::Attack);
    } else {
        events.cue(AudioCue::EnemyHit);
    }

    reports
}

/// Roll the health-gated heart drop for a kill.
///
/// Never rolls at full health. The base chance depends on the species,
/// and doubles when the player sits at exactly 1 health.
fn maybe_drop_heart(
    player: &Player,
    kind: crate::enemies::EnemyKind,
    pos: DVec2,
    collectibles: &mut CollectibleRegistry,
    rng: &mut impl Rng,
) {
    if player.health >= player.max_health {
        return;
    }

    let mut chance = kind.heart_drop_chance();
    if player.health == 1 {
        chance *= 2.0;
    }

    if rng.gen::<f64>() < chance {
        collectibles.add_heart(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::EnemyKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use wildshore_core::Tunables;

    fn setup() -> (Player, CollectibleRegistry, StdRng, FrameEvents) {
        let tunables = Tunables::default();
        (
            Player::new(&tunables),
            CollectibleRegistry::new(&tunables.collectibles),
            StdRng::seed_from_u64(99),
            FrameEvents::new(),
        )
    }

    /// An enemy placed well inside swing range of a player at the origin.
    fn in_range(kind: EnemyKind) -> Enemy {
        Enemy::new(kind, DVec2::new(30.0, 0.0))
    }

    #[test]
    fn test_damage_stays_within_bounds_without_rolls() {
        let (mut player, mut hearts, mut rng, mut events) = setup();
        player.critical_chance = 0.0;

        // Skeletons have zero resistance; sample many swings.
        for _ in 0..200 {
            let mut enemies = vec![in_range(EnemyKind::Skeleton)];
            enemies[0].health = 1_000; // Never dies.
            let reports =
                resolve_attack(&mut player, &mut enemies, &mut hearts, &mut rng, &mut events);
            assert_eq!(reports.len(), 1);
            let r = &reports[0];
            assert!(!r.critical && !r.resisted);
            assert!(
                (player.min_damage..=player.max_damage).contains(&r.damage),
                "damage {} out of bounds",
                r.damage
            );
            assert_eq!(enemies[0].hit_flash, HIT_FLASH_TICKS);
        }
    }

    #[test]
    fn test_out_of_range_enemy_is_untouched() {
        let (mut player, mut hearts, mut rng, mut events) = setup();
        let mut enemies = vec![Enemy::new(EnemyKind::Slime, DVec2::new(500.0, 0.0))];

        let reports =
            resolve_attack(&mut player, &mut enemies, &mut hearts, &mut rng, &mut events);
        assert!(reports.is_empty());
        assert_eq!(enemies.len(), 1);
        assert_eq!(enemies[0].health, enemies[0].stats.max_health);
        // A whiffed swing sounds different from a connecting one.
        assert_eq!(events.cues(), &[AudioCue::Attack]);
    }

    #[test]
    fn test_kill_removes_enemy_from_registry() {
        let (mut player, mut hearts, mut rng, mut events) = setup();
        player.min_damage = 10;
        player.max_damage = 10;
        player.critical_chance = 0.0;

        let mut enemies = vec![in_range(EnemyKind::Slime)];
        let reports =
            resolve_attack(&mut player, &mut enemies, &mut hearts, &mut rng, &mut events);

        assert!(enemies.is_empty());
        assert!(reports[0].killed);
        assert!(events.cues().contains(&AudioCue::EnemyDefeat));
        assert!(events.cues().contains(&AudioCue::EnemyHit));
    }

    #[test]
    fn test_sequential_kill_scores_escalate() {
        let (mut player, mut hearts, mut rng, mut events) = setup();
        player.min_damage = 10;
        player.max_damage = 10;
        player.critical_chance = 0.0;

        // Three slimes killed over three swings with no combo decay in
        // between: 100, 200, 300 for 600 total.
        let mut gains = Vec::new();
        for _ in 0..3 {
            let before = player.score;
            let mut enemies = vec![in_range(EnemyKind::Slime)];
            resolve_attack(&mut player, &mut enemies, &mut hearts, &mut rng, &mut events);
            gains.push(player.score - before);
        }
        assert_eq!(gains, vec![100, 200, 300]);
        assert_eq!(player.score, 600);
        assert_eq!(player.combo, 3);
    }

    #[test]
    fn test_double_kill_uses_consecutive_combo_values() {
        let (mut player, mut hearts, mut rng, mut events) = setup();
        player.min_damage = 10;
        player.max_damage = 10;
        player.critical_chance = 0.0;

        let mut enemies = vec![in_range(EnemyKind::Slime), in_range(EnemyKind::Slime)];
        let reports =
            resolve_attack(&mut player, &mut enemies, &mut hearts, &mut rng, &mut events);

        assert!(enemies.is_empty());
        assert_eq!(reports[0].score, 100);
        assert_eq!(reports[1].score, 200);
        assert_eq!(player.combo, 2);
    }

    #[test]
    fn test_resistance_halves_with_floor_of_one() {
        let (mut player, mut hearts, mut rng, mut events) = setup();
        player.min_damage = 1;
        player.max_damage = 1;
        player.critical_chance = 0.0;

        // Force the resistance roll to always succeed.
        let mut enemies = vec![in_range(EnemyKind::Goblin)];
        enemies[0].stats.damage_resistance = 1.0;
        enemies[0].health = 100;

        let reports =
            resolve_attack(&mut player, &mut enemies, &mut hearts, &mut rng, &mut events);
        assert!(reports[0].resisted);
        // 1 / 2 floors to 0, clamped back up to 1.
        assert_eq!(reports[0].damage, 1);
        assert_eq!(enemies[0].health, 99);
    }

    #[test]
    fn test_critical_applies_before_resistance() {
        let (mut player, mut hearts, mut rng, mut events) = setup();
        player.min_damage = 3;
        player.max_damage = 3;
        player.critical_chance = 1.0;

        let mut enemies = vec![in_range(EnemyKind::Goblin)];
        enemies[0].stats.damage_resistance = 1.0;
        enemies[0].health = 100;

        let reports =
            resolve_attack(&mut player, &mut enemies, &mut hearts, &mut rng, &mut events);
        let r = &reports[0];
        assert!(r.critical && r.resisted);
        // 3 crit-doubled to 6, then halved to 3.
        assert_eq!(r.damage, 3);
    }

    #[test]
    fn test_heart_drop_requires_missing_health() {
        let (mut player, mut hearts, mut rng, mut events) = setup();
        player.min_damage = 10;
        player.max_damage = 10;
        player.critical_chance = 0.0;

        // Full health: even a guaranteed chance must not roll.
        for _ in 0..50 {
            let mut enemies = vec![in_range(EnemyKind::Goblin)];
            resolve_attack(&mut player, &mut enemies, &mut hearts, &mut rng, &mut events);
        }
        assert!(hearts.is_empty());

        // Hurt player: goblins drop at 25%; 200 kills make a drop all but
        // certain with any seed.
        player.health = 2;
        for _ in 0..200 {
            let mut enemies = vec![in_range(EnemyKind::Goblin)];
            resolve_attack(&mut player, &mut enemies, &mut hearts, &mut rng, &mut events);
        }
        assert!(!hearts.is_empty());
    }
}
