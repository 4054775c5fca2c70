//! RNG module - deterministic randomness for piece kinds
//!
//! Provides a small LCG and the two kind randomizers used by the generator:
//!
//! - **Uniform**: every draw picks one of the 7 kinds independently.
//! - **Bag7**: every run of 7 draws deals each kind exactly once, shuffled.

use crate::types::{PieceKind, PIECE_KIND_COUNT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits cycle with a short period; use the high half.
        (self.next_u32() >> 16) % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Which randomizer a generator draws kinds from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomizerKind {
    #[default]
    Uniform,
    Bag7,
}

impl RandomizerKind {
    /// Parse randomizer name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "uniform" | "random" => Some(RandomizerKind::Uniform),
            "bag7" | "7bag" | "bag" => Some(RandomizerKind::Bag7),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RandomizerKind::Uniform => "uniform",
            RandomizerKind::Bag7 => "bag7",
        }
    }
}

/// 7-bag kind dealer
#[derive(Debug, Clone)]
pub struct BagRandomizer {
    /// Current bag of kinds
    bag: [PieceKind; PIECE_KIND_COUNT],
    /// Index into current bag
    bag_index: usize,
}

impl BagRandomizer {
    /// Create an exhausted bag; the first draw shuffles a fresh one.
    pub fn new() -> Self {
        Self {
            bag: PieceKind::ALL,
            bag_index: PIECE_KIND_COUNT,
        }
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self, rng: &mut SimpleRng) {
        self.bag = PieceKind::ALL;
        rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Draw the next kind, refilling the bag when exhausted
    pub fn draw(&mut self, rng: &mut SimpleRng) -> PieceKind {
        if self.bag_index >= PIECE_KIND_COUNT {
            self.refill_bag(rng);
        }

        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }
}

impl Default for BagRandomizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_next_range_reaches_every_kind() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; PIECE_KIND_COUNT];
        for _ in 0..500 {
            seen[rng.next_range(PIECE_KIND_COUNT as u32) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_bag_draws_all_seven() {
        let mut rng = SimpleRng::new(1);
        let mut bag = BagRandomizer::new();

        let mut drawn = Vec::new();
        for _ in 0..PIECE_KIND_COUNT {
            drawn.push(bag.draw(&mut rng));
        }

        for kind in PieceKind::ALL {
            assert!(drawn.contains(&kind), "Missing piece: {:?}", kind);
        }
        assert_eq!(bag.bag_index, PIECE_KIND_COUNT);
    }

    #[test]
    fn test_bag_auto_refill() {
        let mut rng = SimpleRng::new(1);
        let mut bag = BagRandomizer::new();

        for _ in 0..PIECE_KIND_COUNT + 1 {
            bag.draw(&mut rng);
        }
        assert_eq!(bag.bag_index, 1);
    }

    #[test]
    fn test_randomizer_kind_from_str() {
        assert_eq!(RandomizerKind::from_str("Bag7"), Some(RandomizerKind::Bag7));
        assert_eq!(
            RandomizerKind::from_str("uniform"),
            Some(RandomizerKind::Uniform)
        );
        assert_eq!(RandomizerKind::from_str("srs"), None);
    }
}
