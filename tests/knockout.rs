//! Integration tests for knockout seeding and pairing.

use cup_engine::{
    seed_knockout, AvoidanceSwap, EngineError, Entrant, EntrantId, ErrorKind, GroupAssignment,
    KnockoutConfig, Standing,
};

/// A table row with the given points (and goals for = points, against = 0).
fn row(group: char, points: i32) -> (GroupAssignment, Standing) {
    let id = Entrant::new(format!("{group}{points}")).id;
    let mut s = Standing::new(id, group);
    s.points = points;
    s.goals_for = points as u32;
    s.finalize();
    (GroupAssignment { entrant_id: id, group }, s)
}

/// Build groups from `(label, points of each member)`.
fn groups(spec: &[(char, Vec<i32>)]) -> (Vec<GroupAssignment>, Vec<Standing>, Vec<Vec<EntrantId>>) {
    let mut assignments = Vec::new();
    let mut standings = Vec::new();
    let mut ids = Vec::new();
    for (group, points) in spec {
        let mut group_ids = Vec::new();
        for &p in points {
            let (a, s) = row(*group, p);
            group_ids.push(a.entrant_id);
            assignments.push(a);
            standings.push(s);
        }
        ids.push(group_ids);
    }
    (assignments, standings, ids)
}

fn config(bracket_size: usize, avoid_same_group: bool) -> KnockoutConfig {
    KnockoutConfig {
        bracket_size,
        avoid_same_group,
    }
}

#[test]
fn winners_then_runners_up_paired_top_vs_bottom() {
    let (assignments, standings, ids) = groups(&[
        ('A', vec![9, 5, 1, 0]),
        ('B', vec![8, 4, 1, 0]),
        ('C', vec![7, 3, 1, 0]),
        ('D', vec![6, 2, 1, 0]),
    ]);
    let draw = seed_knockout(&standings, &assignments, &config(8, false)).unwrap();

    let seeded: Vec<EntrantId> = draw.seeds.iter().map(|s| s.entrant_id).collect();
    assert_eq!(
        seeded,
        vec![ids[0][0], ids[1][0], ids[2][0], ids[3][0], ids[0][1], ids[1][1], ids[2][1], ids[3][1]]
    );
    assert!(draw.seeds[..4].iter().all(|s| s.group_position == 1));
    assert!(draw.seeds[4..].iter().all(|s| s.group_position == 2));

    let pairs: Vec<(EntrantId, EntrantId)> = draw.pairs.iter().map(|p| (p.high, p.low)).collect();
    assert_eq!(
        pairs,
        vec![
            (ids[0][0], ids[3][1]),
            (ids[1][0], ids[2][1]),
            (ids[2][0], ids[1][1]),
            (ids[3][0], ids[0][1]),
        ]
    );
    assert!(draw.swaps.is_empty());
    assert!(draw.unresolved.is_empty());
}

#[test]
fn best_runner_up_fills_the_bracket_and_is_reranked_globally() {
    let (assignments, standings, ids) = groups(&[
        ('A', vec![9, 4, 0]),
        ('B', vec![8, 6, 0]),
        ('C', vec![5, 5, 0]),
    ]);
    // C's runner-up ties its winner on points and goals; ids decide who is first.
    let draw = seed_knockout(&standings, &assignments, &config(4, false)).unwrap();

    let seeded: Vec<EntrantId> = draw.seeds.iter().map(|s| s.entrant_id).collect();
    assert_eq!(seeded.len(), 4);
    assert_eq!(seeded[0], ids[0][0]);
    assert_eq!(seeded[1], ids[1][0]);
    // B's runner-up (6 points) outranks C's winner (5 points) once re-ranked.
    assert_eq!(seeded[2], ids[1][1]);
    assert_eq!(draw.seeds[3].group, 'C');
    assert_eq!(draw.seeds[3].group_position, 1);
    assert!(!seeded.contains(&ids[0][1]));
}

#[test]
fn seed_i_meets_seed_n_plus_one_minus_i() {
    let spec: Vec<(char, Vec<i32>)> = "ABCDEFGH"
        .chars()
        .enumerate()
        .map(|(g, label)| (label, (0..4).map(|p| 40 - (p * 8 + g as i32)).collect()))
        .collect();
    let (assignments, standings, _) = groups(&spec);

    for n in [2usize, 4, 8, 16, 32] {
        let draw = seed_knockout(&standings, &assignments, &config(n, false)).unwrap();
        assert_eq!(draw.seeds.len(), n);
        assert_eq!(draw.pairs.len(), n / 2);
        for (i, pair) in draw.pairs.iter().enumerate() {
            assert_eq!(pair.seed_rank, i + 1);
            assert_eq!(pair.low_seed, n - i);
            assert_eq!(pair.high, draw.seeds[i].entrant_id);
            assert_eq!(pair.low, draw.seeds[n - 1 - i].entrant_id);
        }
    }
}

#[test]
fn same_group_pair_is_swapped_with_next_pair() {
    let (assignments, standings, ids) = groups(&[('A', vec![9, 6]), ('B', vec![8, 7])]);
    // Seeds: 1 = A winner, 2 = B winner, 3 = B runner-up, 4 = A runner-up.
    let plain = seed_knockout(&standings, &assignments, &config(4, false)).unwrap();
    assert_eq!((plain.pairs[0].high, plain.pairs[0].low), (ids[0][0], ids[0][1]));

    let draw = seed_knockout(&standings, &assignments, &config(4, true)).unwrap();
    assert_eq!(draw.swaps, vec![AvoidanceSwap { pair: 1, with_pair: 2 }]);
    assert!(draw.unresolved.is_empty());
    assert_eq!((draw.pairs[0].high, draw.pairs[0].low), (ids[0][0], ids[1][1]));
    assert_eq!(draw.pairs[0].low_seed, 3);
    assert_eq!((draw.pairs[1].high, draw.pairs[1].low), (ids[1][0], ids[0][1]));
    assert_eq!(draw.pairs[1].low_seed, 4);
}

#[test]
fn same_group_pair_falls_back_to_pair_above() {
    let (assignments, standings, ids) = groups(&[
        ('A', vec![100]),
        ('X', vec![90, 80, 40]),
        ('D', vec![70]),
        ('E', vec![60]),
        ('C', vec![50]),
        ('B', vec![30]),
    ]);
    // Seeds: 1 A, 2 X, 3 X, 4 D, 5 E, 6 C, 7 X, 8 B. Pair 2 (2 v 7) clashes and
    // swapping with pair 3 would put 3 v 7 together, so it swaps with pair 1.
    let draw = seed_knockout(&standings, &assignments, &config(8, true)).unwrap();
    assert_eq!(draw.swaps, vec![AvoidanceSwap { pair: 2, with_pair: 1 }]);
    assert!(draw.unresolved.is_empty());

    let seeds: Vec<(usize, usize)> = draw.pairs.iter().map(|p| (p.seed_rank, p.low_seed)).collect();
    assert_eq!(seeds, vec![(1, 7), (2, 8), (3, 6), (4, 5)]);
    assert_eq!((draw.pairs[0].high, draw.pairs[0].low), (ids[0][0], ids[1][2]));
    assert_eq!((draw.pairs[1].high, draw.pairs[1].low), (ids[1][0], ids[5][0]));
}

#[test]
fn conflict_without_a_valid_swap_is_reported() {
    let (assignments, standings, _) = groups(&[('A', vec![3, 0])]);
    let draw = seed_knockout(&standings, &assignments, &config(2, true)).unwrap();
    assert_eq!(draw.pairs.len(), 1);
    assert_eq!(draw.pairs[0].low_seed, 2);
    assert_eq!(draw.unresolved, vec![1]);
    assert!(draw.swaps.is_empty());
}

#[test]
fn bracket_size_must_be_a_power_of_two() {
    let (assignments, standings, _) = groups(&[('A', vec![3, 2, 1, 0]), ('B', vec![3, 2, 1, 0])]);
    for size in [0usize, 1, 6] {
        let err = seed_knockout(&standings, &assignments, &config(size, false)).unwrap_err();
        assert_eq!(err, EngineError::InvalidBracketSize(size));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}

#[test]
fn too_few_qualifiers_is_a_configuration_error() {
    let (assignments, standings, _) = groups(&[('A', vec![3, 0]), ('B', vec![3, 0])]);
    let err = seed_knockout(&standings, &assignments, &config(8, false)).unwrap_err();
    assert_eq!(
        err,
        EngineError::NotEnoughQualifiers {
            needed: 8,
            available: 4
        }
    );
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn unassigned_standings_rows_are_skipped() {
    let (assignments, mut standings, _) = groups(&[('A', vec![3, 0]), ('B', vec![3, 0])]);
    let (_, ghost) = row('A', 99);
    standings.push(ghost.clone());
    let draw = seed_knockout(&standings, &assignments, &config(4, false)).unwrap();
    assert!(draw.seeds.iter().all(|s| s.entrant_id != ghost.entrant_id));
}

#[test]
fn serialized_inputs_reproduce_the_same_bracket() {
    let (assignments, standings, _) = groups(&[
        ('A', vec![7, 4, 4, 1]),
        ('B', vec![9, 3, 3, 0]),
        ('C', vec![6, 6, 2, 1]),
    ]);
    let cfg = config(8, true);
    let direct = seed_knockout(&standings, &assignments, &cfg).unwrap();

    let standings_json = serde_json::to_string(&standings).unwrap();
    let assignments_json = serde_json::to_string(&assignments).unwrap();
    let standings_back: Vec<Standing> = serde_json::from_str(&standings_json).unwrap();
    let assignments_back: Vec<GroupAssignment> = serde_json::from_str(&assignments_json).unwrap();
    let replayed = seed_knockout(&standings_back, &assignments_back, &cfg).unwrap();
    assert_eq!(direct, replayed);
}
