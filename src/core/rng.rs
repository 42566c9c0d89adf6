//! Seeded randomness for a match.
//!
//! The rules draw from one ChaCha8 stream per match: the optional deck
//! shuffle at creation and the free tile a Wraithling lands on. Same seed and
//! same inputs give the same match.
//!
//! ```
//! use grid_duel::core::{Coord, GameRng};
//!
//! let tiles = [Coord::new(0, 0).unwrap(), Coord::new(1, 0).unwrap()];
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.pick(&tiles), b.pick(&tiles));
//! ```

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// The match's random stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a deck in place; the front stays the next draw.
    pub fn shuffle_deck<T>(&mut self, deck: &mut VecDeque<T>) {
        deck.make_contiguous().shuffle(&mut self.inner);
    }

    /// One element of `options` chosen uniformly, or `None` if it is empty.
    pub fn pick<T: Copy>(&mut self, options: &[T]) -> Option<T> {
        options.choose(&mut self.inner).copied()
    }

    /// Position in the stream, enough to resume it later.
    #[must_use]
    pub fn checkpoint(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Continue a stream from a checkpoint.
    #[must_use]
    pub fn resume(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serialisable stream position: the seed plus the ChaCha8 word offset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_picks() {
        let options: Vec<u32> = (0..20).collect();
        let mut a = GameRng::new(9);
        let mut b = GameRng::new(9);
        let picks_a: Vec<_> = (0..30).map(|_| a.pick(&options)).collect();
        let picks_b: Vec<_> = (0..30).map(|_| b.pick(&options)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn test_pick_from_empty() {
        let mut rng = GameRng::new(1);
        let none: [u8; 0] = [];
        assert_eq!(rng.pick(&none), None);
        assert_eq!(rng.pick(&[5]), Some(5));
    }

    #[test]
    fn test_shuffle_deck_keeps_cards() {
        let mut rng = GameRng::new(7);
        let mut deck: VecDeque<u32> = (1..=20).collect();
        deck.rotate_left(3);
        rng.shuffle_deck(&mut deck);
        let mut cards: Vec<u32> = deck.into_iter().collect();
        cards.sort_unstable();
        assert_eq!(cards, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_checkpoint_resume() {
        let options: Vec<u32> = (0..1000).collect();
        let mut rng = GameRng::new(42);
        for _ in 0..50 {
            rng.pick(&options);
        }
        let saved = rng.checkpoint();
        let json = serde_json::to_string(&saved).unwrap();
        let expected: Vec<_> = (0..10).map(|_| rng.pick(&options)).collect();

        let mut resumed = GameRng::resume(&serde_json::from_str(&json).unwrap());
        let actual: Vec<_> = (0..10).map(|_| resumed.pick(&options)).collect();
        assert_eq!(expected, actual);
        assert_eq!(resumed.seed(), 42);
    }
}
