//! Deterministic random number generation owned by the game context.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles and deals
//! - **Owned**: Lives inside `Context`, never a process-wide singleton
//! - **Context streams**: Independent sequences for bots and other consumers
//!   so that their draws never disturb the deck shuffle sequence
//!
//! ```
//! use rust_uno::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut deck_a: Vec<u32> = (0..20).collect();
//! let mut deck_b: Vec<u32> = (0..20).collect();
//! a.shuffle(&mut deck_a);
//! b.shuffle(&mut deck_b);
//! assert_eq!(deck_a, deck_b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Seeded RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from OS entropy, for unseeded games.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a named consumer.
    ///
    /// The same label always yields the same stream for the same seed,
    /// regardless of how far this RNG has advanced.
    #[must_use]
    pub fn for_context(&self, label: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        label.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Shuffle a pile in place (uniform Fisher–Yates).
    pub fn shuffle<T>(&mut self, pile: &mut [T]) {
        pile.shuffle(&mut self.inner);
    }

    /// Pick one element uniformly, `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
