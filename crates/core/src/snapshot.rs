use arrayvec::ArrayVec;

use crate::game_state::Stats;
use crate::rng::RandomizerKind;
use crate::types::{Piece, QUEUE_CAPACITY, RESERVE_CAPACITY};

/// Owned, allocation-free copy of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Upcoming pieces, front first.
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    /// Reserved pieces, top first.
    pub reserve: ArrayVec<Piece, RESERVE_CAPACITY>,
    pub next_id: u64,
    pub seed: u32,
    pub randomizer: RandomizerKind,
    pub stats: Stats,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.queue.clear();
        self.reserve.clear();
        self.next_id = 0;
        self.seed = 0;
        self.randomizer = RandomizerKind::Uniform;
        self.stats = Stats::default();
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            queue: ArrayVec::new(),
            reserve: ArrayVec::new(),
            next_id: 0,
            seed: 0,
            randomizer: RandomizerKind::Uniform,
            stats: Stats::default(),
        }
    }
}
