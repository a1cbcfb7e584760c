//! Integration tests for the group draw.

use cup_engine::{
    assign_groups, assign_groups_with_rng, group_count, group_label, members_by_group, snake_index,
    EngineError, Entrant, ErrorKind, GroupingConfig, SeedingMode,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn rated_entrants(n: usize) -> Vec<Entrant> {
    // Entrant i has rating 100 - i, so input order is strongest first.
    (0..n)
        .map(|i| Entrant::new(format!("M{i}")).with_rating(100.0 - i as f64))
        .collect()
}

#[test]
fn group_count_prefers_explicit_count() {
    let config = GroupingConfig {
        group_count: Some(3),
        max_group_size: Some(2),
        seeding: SeedingMode::RatingSnake,
    };
    assert_eq!(group_count(20, &config).unwrap(), 3);
}

#[test]
fn group_count_derived_from_max_size() {
    let config = GroupingConfig::with_max_group_size(4, SeedingMode::RatingSnake);
    assert_eq!(group_count(16, &config).unwrap(), 4);
    assert_eq!(group_count(17, &config).unwrap(), 5);
    assert_eq!(group_count(1, &config).unwrap(), 1);
}

#[test]
fn zero_group_count_is_clamped_to_one() {
    let config = GroupingConfig::with_group_count(0, SeedingMode::RatingSnake);
    assert_eq!(group_count(5, &config).unwrap(), 1);
}

#[test]
fn invalid_group_targets_are_configuration_errors() {
    let zero = GroupingConfig::with_max_group_size(0, SeedingMode::RatingSnake);
    let err = group_count(8, &zero).unwrap_err();
    assert_eq!(err, EngineError::InvalidGroupSize);
    assert_eq!(err.kind(), ErrorKind::Configuration);

    let neither = GroupingConfig {
        group_count: None,
        max_group_size: None,
        seeding: SeedingMode::Shuffled,
    };
    assert_eq!(group_count(8, &neither), Err(EngineError::NoGroupTarget));

    let too_many = GroupingConfig::with_group_count(27, SeedingMode::RatingSnake);
    assert_eq!(
        group_count(100, &too_many),
        Err(EngineError::TooManyGroups { groups: 27 })
    );
}

#[test]
fn no_entrants_is_insufficient_data() {
    let config = GroupingConfig::with_group_count(2, SeedingMode::RatingSnake);
    let err = assign_groups(&[], &config).unwrap_err();
    assert_eq!(err, EngineError::NoEntrants);
    assert_eq!(err.kind(), ErrorKind::InsufficientData);
}

#[test]
fn single_entrant_forms_one_group() {
    let entrants = rated_entrants(1);
    let config = GroupingConfig::with_max_group_size(4, SeedingMode::RatingSnake);
    let out = assign_groups(&entrants, &config).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].group, 'A');
}

#[test]
fn snake_index_reverses_every_other_lap() {
    let order: Vec<usize> = (0..9).map(|p| snake_index(p, 3)).collect();
    assert_eq!(order, vec![0, 1, 2, 2, 1, 0, 0, 1, 2]);
    assert!((0..5).all(|p| snake_index(p, 1) == 0));
    assert!((0..5).all(|p| snake_index(p, 0) == 0));
}

#[test]
fn group_labels_stop_at_z() {
    assert_eq!(group_label(0), Some('A'));
    assert_eq!(group_label(25), Some('Z'));
    assert_eq!(group_label(26), None);
    assert_eq!(group_label(300), None);
}

#[test]
fn non_finite_rating_seeds_like_a_missing_one() {
    let nan = Entrant::new("NaN").with_rating(f64::NAN);
    let strong = Entrant::new("Strong").with_rating(50.0);
    let weak = Entrant::new("Weak").with_rating(10.0);
    assert_eq!(nan.seeding_rating(), 0.0);

    let entrants = vec![nan.clone(), strong.clone(), weak.clone()];
    let config = GroupingConfig::with_group_count(2, SeedingMode::RatingSnake);
    let by_group = members_by_group(&assign_groups(&entrants, &config).unwrap());
    assert_eq!(by_group[&'A'], vec![strong.id]);
    assert_eq!(by_group[&'B'], vec![weak.id, nan.id]);
}

#[test]
fn rating_snake_balances_strength() {
    let entrants = rated_entrants(8);
    let config = GroupingConfig::with_group_count(4, SeedingMode::RatingSnake);
    let out = assign_groups(&entrants, &config).unwrap();
    let groups = members_by_group(&out);

    let ids: Vec<_> = entrants.iter().map(|e| e.id).collect();
    assert_eq!(groups[&'A'], vec![ids[0], ids[7]]);
    assert_eq!(groups[&'B'], vec![ids[1], ids[6]]);
    assert_eq!(groups[&'C'], vec![ids[2], ids[5]]);
    assert_eq!(groups[&'D'], vec![ids[3], ids[4]]);
}

#[test]
fn rating_snake_sorts_by_rating_and_keeps_input_order_on_ties() {
    let entrants = vec![
        Entrant::new("low").with_rating(1.0),
        Entrant::new("tie-first").with_rating(5.0),
        Entrant::new("unrated"),
        Entrant::new("tie-second").with_rating(5.0),
    ];
    let config = GroupingConfig::with_group_count(2, SeedingMode::RatingSnake);
    let out = assign_groups(&entrants, &config).unwrap();
    let groups = members_by_group(&out);

    // Order: tie-first, tie-second, low, unrated -> A, B, B, A
    assert_eq!(groups[&'A'], vec![entrants[1].id, entrants[2].id]);
    assert_eq!(groups[&'B'], vec![entrants[3].id, entrants[0].id]);
}

#[test]
fn rating_snake_is_reproducible() {
    let entrants = rated_entrants(11);
    let config = GroupingConfig::with_max_group_size(4, SeedingMode::RatingSnake);
    let a = assign_groups(&entrants, &config).unwrap();
    let b = assign_groups(&entrants, &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn output_is_ordered_by_group_label() {
    let entrants = rated_entrants(10);
    let config = GroupingConfig::with_group_count(3, SeedingMode::RatingSnake);
    let out = assign_groups(&entrants, &config).unwrap();
    let labels: Vec<char> = out.iter().map(|a| a.group).collect();
    let mut sorted = labels.clone();
    sorted.sort();
    assert_eq!(labels, sorted);
    assert_eq!(members_by_group(&out).len(), 3);
}

#[test]
fn shuffled_mode_places_everyone_exactly_once() {
    let entrants = rated_entrants(13);
    let config = GroupingConfig::with_max_group_size(4, SeedingMode::Shuffled);
    let mut rng = StdRng::seed_from_u64(7);
    let out = assign_groups_with_rng(&entrants, &config, &mut rng).unwrap();

    assert_eq!(out.len(), 13);
    let placed: HashSet<_> = out.iter().map(|a| a.entrant_id).collect();
    assert_eq!(placed.len(), 13);
    let groups = members_by_group(&out);
    assert_eq!(groups.len(), 4);
    // Snake dealing keeps group sizes within one of each other.
    let sizes: Vec<usize> = groups.values().map(Vec::len).collect();
    assert!(sizes.iter().max().unwrap() - sizes.iter().min().unwrap() <= 1);
}

#[test]
fn rating_pots_put_one_entrant_per_pot_in_each_group() {
    let entrants = rated_entrants(12);
    let config = GroupingConfig::with_group_count(4, SeedingMode::RatingPots);
    let mut rng = StdRng::seed_from_u64(42);
    let out = assign_groups_with_rng(&entrants, &config, &mut rng).unwrap();
    let groups = members_by_group(&out);

    assert_eq!(groups.len(), 4);
    for members in groups.values() {
        assert_eq!(members.len(), 3);
        // The k-th member came from pot k (entrants 4k..4k+3).
        for (pot, id) in members.iter().enumerate() {
            let index = entrants.iter().position(|e| e.id == *id).unwrap();
            assert_eq!(index / 4, pot);
        }
    }
}
