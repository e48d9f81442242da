//! Role allocation tests.
//!
//! Composition must hold for every table size, and positions must be
//! uniformly distributed across all arrangements of the role multiset.

use std::collections::HashMap;

use liar_game::core::{GameRng, GameRules, PlayerId};
use liar_game::roles::{Role, RoleAllocator};
use proptest::prelude::*;

/// Exactly one Liar, one Troll from 4 players up, everyone else a Citizen.
#[test]
fn test_composition_for_every_table_size() {
    let allocator = RoleAllocator::default();
    let mut rng = GameRng::new(42);

    for player_count in 3..=10 {
        let roles = allocator.allocate(player_count, &mut rng).unwrap();
        let counts = roles.counts();

        assert_eq!(roles.player_count(), player_count);
        assert_eq!(counts.total(), player_count);
        assert_eq!(counts.liars, 1);
        assert_eq!(counts.trolls, usize::from(player_count > 3));
        assert_eq!(counts.citizens, player_count - 1 - counts.trolls);
    }
}

/// Repeated deals keep the same multiset.
#[test]
fn test_multiset_is_stable_across_deals() {
    let allocator = RoleAllocator::default();
    let mut rng = GameRng::new(7);
    let first = allocator.allocate(6, &mut rng).unwrap().counts();

    for _ in 0..100 {
        assert_eq!(allocator.allocate(6, &mut rng).unwrap().counts(), first);
    }
}

/// Every seat is equally likely to be the Liar.
#[test]
fn test_liar_seat_is_uniform() {
    let allocator = RoleAllocator::default();
    let mut rng = GameRng::new(2024);
    let trials = 10_000;
    let mut hits = [0usize; 5];

    for _ in 0..trials {
        let roles = allocator.allocate(5, &mut rng).unwrap();
        let liar = roles.liar().unwrap();
        hits[liar.index()] += 1;
    }

    // Expected 2000 per seat, standard deviation 40
    for (seat, &count) in hits.iter().enumerate() {
        assert!(
            (1800..=2200).contains(&count),
            "seat {} was the Liar {} times out of {}",
            seat + 1,
            count,
            trials
        );
    }
}

/// Every distinct arrangement of {Liar, Troll, Citizen, Citizen} shows up
/// about equally often.
#[test]
fn test_arrangements_are_uniform() {
    let allocator = RoleAllocator::default();
    let mut rng = GameRng::new(99);
    let trials = 12_000;
    let mut seen: HashMap<Vec<Role>, usize> = HashMap::new();

    for _ in 0..trials {
        let roles = allocator.allocate(4, &mut rng).unwrap();
        let order: Vec<Role> = roles.iter().map(|(_, r)| r).collect();
        *seen.entry(order).or_default() += 1;
    }

    // 4! / 2! = 12 arrangements, expected 1000 each
    assert_eq!(seen.len(), 12);
    for (order, &count) in &seen {
        assert!(
            (850..=1150).contains(&count),
            "arrangement {:?} appeared {} times",
            order,
            count
        );
    }
}

/// Larger bound is a rules change, not a code change.
#[test]
fn test_extended_bound() {
    let allocator = RoleAllocator::new(GameRules::extended());
    let mut rng = GameRng::new(1);

    for player_count in 11..=20 {
        let roles = allocator.allocate(player_count, &mut rng).unwrap();
        assert_eq!(roles.counts().trolls, 1);
        assert!(roles.get(PlayerId::new(player_count as u8)).is_some());
    }
    assert!(allocator.allocate(21, &mut rng).is_err());
}

proptest! {
    #[test]
    fn prop_composition_holds_for_any_seed(player_count in 3usize..=10, seed in any::<u64>()) {
        let allocator = RoleAllocator::default();
        let roles = allocator.allocate(player_count, &mut GameRng::new(seed)).unwrap();
        let counts = roles.counts();

        prop_assert_eq!(counts.liars, 1);
        prop_assert_eq!(counts.trolls, usize::from(player_count >= 4));
        prop_assert_eq!(counts.total(), player_count);
        prop_assert_ne!(roles.liar(), roles.troll());
    }

    #[test]
    fn prop_out_of_bounds_rejected(player_count in prop_oneof![0usize..3, 11usize..64]) {
        let allocator = RoleAllocator::default();
        prop_assert!(allocator.allocate(player_count, &mut GameRng::new(0)).is_err());
    }
}
