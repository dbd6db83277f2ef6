//! Deterministic infinite tile world: generators and the memoizing cache.

mod cache;
mod objects;
mod terrain;
mod tile;

pub use cache::*;
pub use objects::*;
pub use terrain::*;
pub use tile::*;
