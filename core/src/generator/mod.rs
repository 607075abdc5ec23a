use crate::*;
use alloc::vec::Vec;
pub use random::*;

mod random;

/// Strategy that decides where the bombs go.
///
/// Implementations must return exactly `config.bombs` distinct, in-bounds positions.
pub trait LayoutGenerator {
    fn generate(self, config: GameConfig) -> Vec<Position>;
}
