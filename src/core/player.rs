//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat index. Seats are numbered in turn order starting at 0.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access, indexable by `PlayerId`.
//! Used for hands, hand sizes and the scoreboard.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier. Player indices are 0-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Seat `id`, counting from 0.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Position in seat order, for indexing.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Every seat at a table of `player_count`, in turn order.
    ///
    /// ```
    /// use rust_uno::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).map(PlayerId::index).collect();
    /// assert_eq!(seats, vec![0, 1, 2]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map(|seat| PlayerId(seat as u8))
    }

    /// The seat that acts after this one.
    ///
    /// Play moves up the seat order, or down it while play is reversed.
    ///
    /// ```
    /// use rust_uno::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(3).next(4, false), PlayerId::new(0));
    /// assert_eq!(PlayerId::new(0).next(4, true), PlayerId::new(3));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize, reversed: bool) -> Self {
        let count = player_count as u8;
        if reversed {
            PlayerId((self.0 + count - 1) % count)
        } else {
            PlayerId((self.0 + 1) % count)
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index())
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use rust_uno::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::with_value(4, 0);
/// scores[PlayerId::new(1)] += 25;
/// assert_eq!(scores[PlayerId::new(1)], 25);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Fill every seat from `init`.
    ///
    /// Panics on an empty table or more seats than `PlayerId` can name.
    pub fn new(player_count: usize, init: impl Fn(PlayerId) -> T) -> Self {
        assert!(
            (1..=usize::from(u8::MAX)).contains(&player_count),
            "PlayerMap needs 1..=255 seats, got {}",
            player_count
        );

        Self {
            data: PlayerId::all(player_count).map(init).collect(),
        }
    }

    /// Every seat starts with a clone of `value`.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Every seat starts with `T::default()`.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.data.len()).zip(self.data.iter())
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Build a new map by projecting every entry.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> PlayerMap<U> {
        PlayerMap {
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
