//! Cup engine: group draw, round-robin fixtures, standings, knockout seeding,
//! and a seeded, publicly verifiable prize draw.
//!
//! Every operation is a pure function of its inputs and explicit configuration.
//! The only randomness outside the prize draw is the live group ceremony
//! ([`SeedingMode::Shuffled`] / [`SeedingMode::RatingPots`]), which draws from
//! `rand` and never from the prize draw's generator.

pub mod logic;
pub mod models;

pub use logic::{
    allocate_round_dates, apply_allocation, assign_groups, assign_groups_with_rng, canonicalize,
    canonicalize_text, circle_rounds, compare_standings, compute_standings, draw_audit_csv,
    generate_fixtures, group_count, group_label, group_round_label, group_round_specs, hash_seed,
    knockout_round_label, knockout_round_specs, members_by_group, prize_draw_from_lines,
    rank_within_groups, rounds_for, run_prize_draw, saturdays_between, second_leg_label,
    seed_knockout, shuffle_deterministic, snake_index, verify_draw, write_draw_audit,
    write_standings, AliasTable, AllocatedRound, Allocation, AvoidanceSwap, BracketPair,
    IgnoreReason, IgnoredFixture, KnockoutDraw, RoundSpec, Seed, StandingsReport, TieBreak,
    Xorshift32, TIE_BREAK_CASCADE,
};
pub use models::{
    CompetitionConfig, DrawConfig, DrawId, DrawState, EngineError, Entrant, EntrantId, ErrorKind,
    Fixture, FixtureId, FixtureStatus, GroupAssignment, GroupLabel, GroupingConfig,
    KnockoutConfig, Leg, PointsConfig, ScheduleConfig, SeedingMode, Standing, StandingRow,
    GROUP_LABELS,
};
