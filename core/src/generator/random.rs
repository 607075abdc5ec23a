use super::*;
use alloc::collections::BTreeSet;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Picks bombs uniformly by sampling distinct cell indices without replacement, always terminates.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledLayoutGenerator {
    seed: u64,
}

impl SampledLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for SampledLayoutGenerator {
    fn generate(self, config: GameConfig) -> Vec<Position> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let total = usize::from(config.total_cells());
        let bombs = usize::from(config.bombs);

        let positions: Vec<_> = rand::seq::index::sample(&mut rng, total, bombs)
            .into_iter()
            .map(|index| Position::from_flat_index(index, config.columns))
            .collect();
        log::debug!("sampled {} bombs out of {} cells", positions.len(), total);
        positions
    }
}

/// Draws random positions and throws away the ones that already hold a bomb.
///
/// Slows down as the board fills up, but still terminates because [`GameConfig`] never asks for more bombs than
/// there are cells.
#[derive(Clone, Debug, PartialEq)]
pub struct RejectionLayoutGenerator {
    seed: u64,
}

impl RejectionLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RejectionLayoutGenerator {
    fn generate(self, config: GameConfig) -> Vec<Position> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut taken = BTreeSet::new();
        let mut positions = Vec::with_capacity(usize::from(config.bombs));
        let mut rejected = 0usize;

        while positions.len() < usize::from(config.bombs) {
            let position = Position::random(&mut rng, config.rows, config.columns);
            if taken.insert(position) {
                positions.push(position);
            } else {
                rejected += 1;
            }
        }
        log::debug!(
            "placed {} bombs, rejected {} colliding draws",
            positions.len(),
            rejected
        );
        positions
    }
}
