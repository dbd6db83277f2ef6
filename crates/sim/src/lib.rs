//! Real-time simulation: player, enemies, combat, collectibles, and the
//! session that advances them one tick per frame.

mod collectibles;
mod combat;
mod enemies;
mod movement;
mod player;
mod session;

pub use collectibles::{CollectibleRegistry, Heart};
pub use combat::{resolve_attack, HitReport};
pub use enemies::{spawn_enemies, update_enemies, Enemy, EnemyKind, EnemyStats};
pub use movement::{apply_movement, starting_position};
pub use player::{update_combat_state, Player};
pub use session::GameSession;
