//! Events the simulation emits for external collaborators.
//!
//! The core never talks to an audio backend or a canvas directly. Each
//! tick it accumulates discrete cues and effect descriptions; the host
//! drains them after the tick and feeds them to whatever renderer/audio
//! implementation it has (or drops them in headless runs).

/// Named sound triggers consumed by the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Player took damage.
    Damage,
    /// Sword swing that hit nothing.
    Attack,
    /// Sword swing connected with at least one enemy.
    EnemyHit,
    /// An enemy was defeated.
    EnemyDefeat,
    /// Player entered combat (edge-triggered).
    CombatStart,
    /// Player left combat (edge-triggered).
    CombatEnd,
    /// A heart was picked up and actually healed.
    HeartCollect,
    /// An enemy is very close; rate-limited by the session.
    EnemyNearby,
}

/// Transient visual effects consumed by the renderer collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectEvent {
    /// Floating damage number above a struck enemy.
    DamageNumber {
        /// World-space x of the struck enemy.
        x: f64,
        /// World-space y of the struck enemy.
        y: f64,
        /// Damage dealt after critical/resistance adjustments.
        amount: i32,
        /// Whether the critical roll succeeded.
        critical: bool,
        /// Whether the enemy's resistance roll succeeded.
        resisted: bool,
    },
    /// Kill explosion plus score popup.
    KillBurst {
        /// World-space x of the defeated enemy.
        x: f64,
        /// World-space y of the defeated enemy.
        y: f64,
        /// Score awarded for this kill, combo multiplier applied.
        score: u64,
        /// Combo counter at the moment of the kill.
        combo: u32,
    },
    /// Heart consumed by the player.
    HeartPickup {
        /// World-space x of the heart.
        x: f64,
        /// World-space y of the heart.
        y: f64,
        /// False when the player was already at full health.
        healed: bool,
    },
    /// Player died and was respawned; drives the game-over overlay.
    Respawn,
}

/// Per-tick event accumulator drained by the host after each update.
#[derive(Debug, Default)]
pub struct FrameEvents {
    cues: Vec<AudioCue>,
    effects: Vec<EffectEvent>,
}

impl FrameEvents {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an audio cue.
    pub fn cue(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }

    /// Queue a visual effect.
    pub fn effect(&mut self, effect: EffectEvent) {
        self.effects.push(effect);
    }

    /// Audio cues queued this tick.
    pub fn cues(&self) -> &[AudioCue] {
        &self.cues
    }

    /// Visual effects queued this tick.
    pub fn effects(&self) -> &[EffectEvent] {
        &self.effects
    }

    /// Remove and return everything queued this tick.
    pub fn drain(&mut self) -> (Vec<AudioCue>, Vec<EffectEvent>) {
        (
            std::mem::take(&mut self.cues),
            std::mem::take(&mut self.effects),
        )
    }
}
