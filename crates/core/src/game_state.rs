//! Game state module - owns the queue, the reserve and the generator
//!
//! Every player action is a composition of container primitives plus
//! generator calls. There is no hidden state between actions: whether an
//! action applies depends only on the current queue and reserve contents.

use crate::generator::PieceGenerator;
use crate::queue::UpcomingQueue;
use crate::rng::RandomizerKind;
use crate::snapshot::GameSnapshot;
use crate::stack::ReserveStack;
use crate::types::{Command, Outcome, Rejection, TRIPLE_SWAP_WIDTH};

/// Construction parameters for [`GameState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub seed: u32,
    pub randomizer: RandomizerKind,
}

/// Per-session action counters.
///
/// Observational only; they never influence whether an action applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Stats {
    pub played: u32,
    pub reserved: u32,
    pub used: u32,
    pub swaps: u32,
    pub triple_swaps: u32,
    pub rejected: u32,
    pub invalid: u32,
}

impl Stats {
    fn record(&mut self, outcome: &Outcome) {
        let counter = match outcome {
            Outcome::Played(_) => &mut self.played,
            Outcome::Reserved(_) => &mut self.reserved,
            Outcome::Used(_) => &mut self.used,
            Outcome::Swapped => &mut self.swaps,
            Outcome::SwappedTriple => &mut self.triple_swaps,
            Outcome::Rejected { .. } => &mut self.rejected,
            Outcome::InvalidCommand(_) => &mut self.invalid,
            Outcome::Exit => return,
        };
        *counter = counter.saturating_add(1);
    }
}

/// Queue, reserve and generator, plus the action dispatcher over them.
#[derive(Debug, Clone)]
pub struct GameState {
    queue: UpcomingQueue,
    reserve: ReserveStack,
    generator: PieceGenerator,
    stats: Stats,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig {
            seed,
            ..GameConfig::default()
        })
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            queue: UpcomingQueue::new(),
            reserve: ReserveStack::new(),
            generator: PieceGenerator::with_randomizer(config.seed, config.randomizer),
            stats: Stats::default(),
            started: false,
        }
    }

    /// Fill the queue to capacity with generated pieces
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        while !self.queue.is_full() {
            let piece = self.generator.generate();
            self.queue.enqueue(piece);
        }
        tracing::info!(
            seed = self.generator.seed(),
            randomizer = self.generator.randomizer().as_str(),
            "game started"
        );
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn queue(&self) -> &UpcomingQueue {
        &self.queue
    }

    /// Direct queue access for setting up specific arrangements.
    pub fn queue_mut(&mut self) -> &mut UpcomingQueue {
        &mut self.queue
    }

    pub fn reserve(&self) -> &ReserveStack {
        &self.reserve
    }

    /// Direct reserve access for setting up specific arrangements.
    pub fn reserve_mut(&mut self) -> &mut ReserveStack {
        &mut self.reserve
    }

    pub fn generator(&self) -> &PieceGenerator {
        &self.generator
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        out.queue.extend(self.queue.iter().copied());
        out.reserve.extend(self.reserve.iter().copied());
        out.next_id = self.generator.next_id();
        out.seed = self.generator.seed();
        out.randomizer = self.generator.randomizer();
        out.stats = self.stats;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    /// Dispatch a numeric menu code.
    ///
    /// Codes that do not name a command yield [`Outcome::InvalidCommand`] and
    /// leave the containers untouched.
    pub fn dispatch(&mut self, code: i64) -> Outcome {
        match Command::from_code(code) {
            Some(command) => self.apply(command),
            None => {
                let outcome = Outcome::InvalidCommand(code);
                self.stats.record(&outcome);
                tracing::debug!(code, "invalid command");
                outcome
            }
        }
    }

    /// Count a line that named no command at all.
    ///
    /// Tallied with out-of-range codes in [`Stats::invalid`]; the containers
    /// are not touched.
    pub fn record_invalid_input(&mut self, text: &str) {
        self.stats.invalid = self.stats.invalid.saturating_add(1);
        tracing::debug!(input = text, "unrecognized input line");
    }

    /// Apply a command and return what happened
    pub fn apply(&mut self, command: Command) -> Outcome {
        let outcome = match command {
            Command::Exit => Outcome::Exit,
            Command::Play => self.play(),
            Command::Reserve => self.reserve_front(),
            Command::UseReserved => self.use_reserved(),
            Command::SwapFront => self.swap_front(),
            Command::SwapTriple => self.swap_triple(),
        };
        self.stats.record(&outcome);
        tracing::debug!(
            command = command.as_str(),
            outcome = ?outcome,
            queue_len = self.queue.len(),
            reserve_len = self.reserve.len(),
            "applied command"
        );
        outcome
    }

    /// Consume the front of the queue and refill it
    pub fn play(&mut self) -> Outcome {
        match self.queue.dequeue() {
            Some(piece) => {
                self.refill_one();
                Outcome::Played(piece)
            }
            None => Outcome::Rejected {
                command: Command::Play,
                reason: Rejection::QueueEmpty,
            },
        }
    }

    /// Move the front of the queue onto the reserve and refill the queue
    ///
    /// A full reserve is checked before anything is dequeued.
    pub fn reserve_front(&mut self) -> Outcome {
        let rejected = |reason| Outcome::Rejected {
            command: Command::Reserve,
            reason,
        };
        if self.reserve.is_full() {
            return rejected(Rejection::ReserveFull);
        }
        let Some(piece) = self.queue.dequeue() else {
            return rejected(Rejection::QueueEmpty);
        };
        self.reserve.push(piece);
        self.refill_one();
        Outcome::Reserved(piece)
    }

    /// Consume the top of the reserve
    pub fn use_reserved(&mut self) -> Outcome {
        match self.reserve.pop() {
            Some(piece) => Outcome::Used(piece),
            None => Outcome::Rejected {
                command: Command::UseReserved,
                reason: Rejection::ReserveEmpty,
            },
        }
    }

    /// Exchange queue front and reserve top in place
    pub fn swap_front(&mut self) -> Outcome {
        match (self.queue.front_mut(), self.reserve.peek_mut()) {
            (Some(front), Some(top)) => {
                std::mem::swap(front, top);
                Outcome::Swapped
            }
            _ => Outcome::Rejected {
                command: Command::SwapFront,
                reason: Rejection::SwapNeedsBoth,
            },
        }
    }

    /// Exchange queue positions 0..3 with reserve depths 0..3 pairwise
    pub fn swap_triple(&mut self) -> Outcome {
        if self.queue.len() < TRIPLE_SWAP_WIDTH || self.reserve.len() < TRIPLE_SWAP_WIDTH {
            return Outcome::Rejected {
                command: Command::SwapTriple,
                reason: Rejection::TripleSwapNeedsThree,
            };
        }
        for i in 0..TRIPLE_SWAP_WIDTH {
            if let (Some(slot), Some(reserved)) =
                (self.queue.get_mut(i), self.reserve.get_from_top_mut(i))
            {
                std::mem::swap(slot, reserved);
            }
        }
        Outcome::SwappedTriple
    }

    fn refill_one(&mut self) {
        if self.queue.is_full() {
            return;
        }
        let piece = self.generator.generate();
        self.queue.enqueue(piece);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Piece, PieceKind, QUEUE_CAPACITY, RESERVE_CAPACITY};

    fn queue_ids(state: &GameState) -> Vec<u64> {
        state.queue().iter().map(|p| p.id).collect()
    }

    fn reserve_ids(state: &GameState) -> Vec<u64> {
        state.reserve().iter().map(|p| p.id).collect()
    }

    fn started() -> GameState {
        let mut state = GameState::new(12345);
        state.start();
        state
    }

    /// Queue [0..5), reserve top-to-bottom [12, 11, 10].
    fn with_full_reserve() -> GameState {
        let mut state = started();
        let reserve = state.reserve_mut();
        reserve.push(Piece::new(PieceKind::S, 10));
        reserve.push(Piece::new(PieceKind::Z, 11));
        reserve.push(Piece::new(PieceKind::J, 12));
        state
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(1);
        assert!(!state.started());
        assert!(state.queue().is_empty());
        assert!(state.reserve().is_empty());
        assert_eq!(state.stats(), Stats::default());
    }

    #[test]
    fn test_start_fills_queue() {
        let state = started();
        assert!(state.queue().is_full());
        assert_eq!(queue_ids(&state), vec![0, 1, 2, 3, 4]);
        assert_eq!(state.generator().next_id(), QUEUE_CAPACITY as u64);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut state = started();
        state.start();
        assert_eq!(state.generator().next_id(), QUEUE_CAPACITY as u64);
    }

    #[test]
    fn test_play_refills() {
        let mut state = started();
        let out = state.play();
        assert_eq!(out.piece().map(|p| p.id), Some(0));
        assert!(matches!(out, Outcome::Played(_)));
        assert_eq!(queue_ids(&state), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_play_on_empty_queue_rejected() {
        let mut state = GameState::new(1);
        assert_eq!(
            state.play(),
            Outcome::Rejected {
                command: Command::Play,
                reason: Rejection::QueueEmpty
            }
        );
        assert_eq!(state.generator().next_id(), 0);
    }

    #[test]
    fn test_reserve_moves_front() {
        let mut state = started();
        let front = *state.queue().front().unwrap();
        assert_eq!(state.reserve_front(), Outcome::Reserved(front));
        assert_eq!(reserve_ids(&state), vec![0]);
        assert_eq!(queue_ids(&state), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reserve_full_checked_before_dequeue() {
        let mut state = with_full_reserve();
        let before = queue_ids(&state);
        assert_eq!(
            state.reserve_front(),
            Outcome::Rejected {
                command: Command::Reserve,
                reason: Rejection::ReserveFull
            }
        );
        assert_eq!(queue_ids(&state), before);
        assert_eq!(state.generator().next_id(), QUEUE_CAPACITY as u64);
    }

    #[test]
    fn test_reserve_with_empty_queue_rejected() {
        let mut state = GameState::new(1);
        assert_eq!(
            state.reserve_front(),
            Outcome::Rejected {
                command: Command::Reserve,
                reason: Rejection::QueueEmpty
            }
        );
        assert!(state.reserve().is_empty());
    }

    #[test]
    fn test_use_reserved() {
        let mut state = with_full_reserve();
        assert_eq!(state.use_reserved().piece().map(|p| p.id), Some(12));
        assert_eq!(reserve_ids(&state), vec![11, 10]);
        assert_eq!(queue_ids(&state).len(), QUEUE_CAPACITY);
    }

    #[test]
    fn test_use_reserved_empty_rejected() {
        let mut state = started();
        assert_eq!(
            state.use_reserved(),
            Outcome::Rejected {
                command: Command::UseReserved,
                reason: Rejection::ReserveEmpty
            }
        );
    }

    #[test]
    fn test_swap_front_exchanges_values() {
        let mut state = with_full_reserve();
        assert_eq!(state.swap_front(), Outcome::Swapped);
        assert_eq!(queue_ids(&state), vec![12, 1, 2, 3, 4]);
        assert_eq!(reserve_ids(&state), vec![0, 11, 10]);
    }

    #[test]
    fn test_swap_front_needs_both() {
        let mut state = started();
        let out = state.swap_front();
        assert_eq!(
            out,
            Outcome::Rejected {
                command: Command::SwapFront,
                reason: Rejection::SwapNeedsBoth
            }
        );
        assert_eq!(queue_ids(&state), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_swap_triple_pairs_positions() {
        let mut state = with_full_reserve();
        assert_eq!(state.swap_triple(), Outcome::SwappedTriple);
        assert_eq!(queue_ids(&state), vec![12, 11, 10, 3, 4]);
        assert_eq!(reserve_ids(&state), vec![0, 1, 2]);
    }

    #[test]
    fn test_swap_triple_across_wraparound() {
        let mut state = with_full_reserve();
        // Advance the ring head so logical positions 0..3 wrap the backing array.
        for _ in 0..4 {
            state.play();
        }
        assert_eq!(queue_ids(&state), vec![4, 5, 6, 7, 8]);
        assert_eq!(state.swap_triple(), Outcome::SwappedTriple);
        assert_eq!(queue_ids(&state), vec![12, 11, 10, 7, 8]);
        assert_eq!(reserve_ids(&state), vec![4, 5, 6]);
    }

    #[test]
    fn test_swap_triple_needs_three_reserved() {
        let mut state = started();
        state.reserve_front();
        state.reserve_front();
        let before_q = queue_ids(&state);
        let before_r = reserve_ids(&state);
        assert_eq!(
            state.swap_triple(),
            Outcome::Rejected {
                command: Command::SwapTriple,
                reason: Rejection::TripleSwapNeedsThree
            }
        );
        assert_eq!(queue_ids(&state), before_q);
        assert_eq!(reserve_ids(&state), before_r);
    }

    #[test]
    fn test_dispatch_codes() {
        let mut state = started();
        assert_eq!(state.dispatch(0), Outcome::Exit);
        assert!(matches!(state.dispatch(1), Outcome::Played(_)));
        assert!(matches!(state.dispatch(2), Outcome::Reserved(_)));
        assert_eq!(state.dispatch(4), Outcome::Swapped);
        assert!(matches!(state.dispatch(3), Outcome::Used(_)));
        assert_eq!(state.dispatch(42), Outcome::InvalidCommand(42));
        assert_eq!(state.dispatch(-1), Outcome::InvalidCommand(-1));
    }

    #[test]
    fn test_invalid_command_leaves_state() {
        let mut state = with_full_reserve();
        let before = state.snapshot();
        state.dispatch(9);
        let after = state.snapshot();
        assert_eq!(before.queue, after.queue);
        assert_eq!(before.reserve, after.reserve);
        assert_eq!(after.stats.invalid, 1);
    }

    #[test]
    fn test_unrecognized_input_counts_as_invalid() {
        let mut state = with_full_reserve();
        let before = state.snapshot();
        state.record_invalid_input("hold");
        state.dispatch(9);
        let after = state.snapshot();
        assert_eq!(before.queue, after.queue);
        assert_eq!(before.reserve, after.reserve);
        assert_eq!(before.next_id, after.next_id);
        assert_eq!(after.stats.invalid, 2);
        assert_eq!(after.stats.rejected, 0);
    }

    #[test]
    fn test_stats_count_outcomes() {
        let mut state = started();
        state.apply(Command::Play);
        state.apply(Command::Reserve);
        state.apply(Command::UseReserved);
        state.apply(Command::UseReserved);
        state.apply(Command::Exit);
        let stats = state.stats();
        assert_eq!(stats.played, 1);
        assert_eq!(stats.reserved, 1);
        assert_eq!(stats.used, 1);
        assert_eq!(stats.rejected, 1);
    }

    #[test]
    fn test_snapshot_orders() {
        let state = with_full_reserve();
        let snap = state.snapshot();
        assert_eq!(snap.queue.len(), QUEUE_CAPACITY);
        assert_eq!(snap.reserve.len(), RESERVE_CAPACITY);
        assert_eq!(snap.queue.first().map(|p| p.id), Some(0));
        assert_eq!(snap.reserve.first().map(|p| p.id), Some(12));
        assert_eq!(snap.next_id, 5);
        assert_eq!(snap.seed, 12345);
    }
}
