//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat number. Seats are 1-based, matching the numbers called out
//! at the table ("player 1", "player 2", ...). A `PlayerId` names a position
//! around the shared device, not a person.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a `SmallVec` for O(1) access. Tables are small,
//! so the common case never touches the heap.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Seats stored inline before `PlayerMap` spills to the heap.
const INLINE_SEATS: usize = 10;

/// Seat number, 1-based.
///
/// `PlayerId(0)` is representable but never valid; lookups with it return `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The first seat.
    pub const FIRST: PlayerId = PlayerId(1);

    /// Create a new seat ID.
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// Get the seat number as called at the table (1-based).
    #[must_use]
    pub const fn number(self) -> usize {
        self.0 as usize
    }

    /// Get the storage slot for this seat (0-based).
    ///
    /// Seat 0 maps to `usize::MAX` so that it never hits a slot.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 as usize).wrapping_sub(1)
    }

    /// The seat after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Check whether this seat exists at a table of `player_count` seats.
    #[must_use]
    pub fn is_seated(self, player_count: usize) -> bool {
        (1..=player_count).contains(&self.number())
    }

    /// Iterate over all seats for a table of `player_count` players.
    ///
    /// ```
    /// use liar_game::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[0], PlayerId::new(1));
    /// assert_eq!(seats[3], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// One entry per seat. Use `PlayerMap::new()` with a factory function,
/// or `PlayerMap::with_value()` to initialize all entries to the same value.
///
/// ## Example
///
/// ```
/// use liar_game::core::{PlayerId, PlayerMap};
///
/// let mut confirmed: PlayerMap<bool> = PlayerMap::with_value(4, false);
/// confirmed[PlayerId::new(2)] = true;
///
/// assert!(confirmed[PlayerId::new(2)]);
/// assert_eq!(confirmed.get(PlayerId::new(5)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: SmallVec<[T; INLINE_SEATS]>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Build a PlayerMap from values listed in seat order.
    ///
    /// Returns `None` for an empty list or more than 255 entries.
    pub fn from_seat_order(values: impl IntoIterator<Item = T>) -> Option<Self> {
        let data: SmallVec<[T; INLINE_SEATS]> = values.into_iter().collect();
        if data.is_empty() || data.len() > 255 {
            return None;
        }
        Some(Self { data })
    }

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a seat's data, or `None` if the seat doesn't exist.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8 + 1), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over all seat IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }
}

/// Panics if the seat doesn't exist. Use `get` for unchecked input.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        let p2 = PlayerId::new(2);

        assert_eq!(p1.index(), 0);
        assert_eq!(p2.index(), 1);
        assert_eq!(p2.number(), 2);
        assert_eq!(p1.next(), p2);
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_player_id_is_seated() {
        assert!(PlayerId::new(1).is_seated(3));
        assert!(PlayerId::new(3).is_seated(3));
        assert!(!PlayerId::new(4).is_seated(3));
        assert!(!PlayerId::new(0).is_seated(3));
    }

    #[test]
    fn test_player_id_all() {
        let seats: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(seats, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(4, |p| p.number() * 10);

        assert_eq!(map[PlayerId::new(1)], 10);
        assert_eq!(map[PlayerId::new(4)], 40);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    fn test_player_map_get_out_of_range() {
        let map: PlayerMap<i32> = PlayerMap::with_value(3, 7);

        assert_eq!(map.get(PlayerId::new(3)), Some(&7));
        assert_eq!(map.get(PlayerId::new(4)), None);
        assert_eq!(map.get(PlayerId::new(0)), None);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<bool> = PlayerMap::with_value(2, false);

        map[PlayerId::new(2)] = true;
        if let Some(flag) = map.get_mut(PlayerId::new(1)) {
            *flag = true;
        }

        assert!(map.values().all(|&flag| flag));
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::from_seat_order(['a', 'b', 'c']).unwrap();

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (PlayerId::new(1), &'a'));
        assert_eq!(pairs[2], (PlayerId::new(3), &'c'));
    }

    #[test]
    fn test_player_map_from_empty_seat_order() {
        assert!(PlayerMap::<u8>::from_seat_order(Vec::new()).is_none());
    }

    #[test]
    fn test_player_map_spills_past_inline_capacity() {
        let map: PlayerMap<usize> = PlayerMap::new(20, |p| p.number());
        assert_eq!(map[PlayerId::new(20)], 20);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(2, |p| p.number() as i32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }
}
