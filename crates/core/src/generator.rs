//! Piece generator - random kinds with monotonically increasing ids.

use crate::rng::{BagRandomizer, RandomizerKind, SimpleRng};
use crate::types::{Piece, PieceKind, PIECE_KIND_COUNT};

/// Produces pieces for the upcoming queue.
///
/// The id counter belongs to the generator instance: it starts at 0, is
/// incremented on every [`generate`](PieceGenerator::generate) and is never
/// reset, so ids are strictly increasing and never reused within a generator.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    randomizer: RandomizerKind,
    bag: BagRandomizer,
    next_id: u64,
    seed: u32,
}

impl PieceGenerator {
    /// Uniform generator with the given seed.
    pub fn new(seed: u32) -> Self {
        Self::with_randomizer(seed, RandomizerKind::Uniform)
    }

    pub fn with_randomizer(seed: u32, randomizer: RandomizerKind) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            randomizer,
            bag: BagRandomizer::new(),
            next_id: 0,
            seed,
        }
    }

    /// Create the next piece.
    pub fn generate(&mut self) -> Piece {
        let kind = self.draw_kind();
        let piece = Piece::new(kind, self.next_id);
        self.next_id += 1;
        piece
    }

    fn draw_kind(&mut self) -> PieceKind {
        match self.randomizer {
            RandomizerKind::Uniform => {
                let idx = self.rng.next_range(PIECE_KIND_COUNT as u32) as usize;
                PieceKind::ALL[idx]
            }
            RandomizerKind::Bag7 => self.bag.draw(&mut self.rng),
        }
    }

    /// Id the next generated piece will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn randomizer(&self) -> RandomizerKind {
        self.randomizer
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
