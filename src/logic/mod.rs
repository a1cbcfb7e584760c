//! Cup engine logic: canonicalization, groups, fixtures, calendar, standings, knockout, prize draw.

mod audit;
mod calendar;
mod canonicalize;
mod groups;
mod knockout;
mod prize_draw;
mod schedule;
mod standings;

pub use audit::{draw_audit_csv, write_draw_audit, write_standings};
pub use calendar::{
    allocate_round_dates, apply_allocation, group_round_specs, knockout_round_label,
    knockout_round_specs, saturdays_between, AllocatedRound, Allocation, RoundSpec,
};
pub use canonicalize::{canonicalize, canonicalize_text, AliasTable};
pub use groups::{
    assign_groups, assign_groups_with_rng, group_count, group_label, members_by_group,
    snake_index,
};
pub use knockout::{seed_knockout, AvoidanceSwap, BracketPair, KnockoutDraw, Seed};
pub use prize_draw::{
    hash_seed, prize_draw_from_lines, run_prize_draw, shuffle_deterministic, verify_draw,
    Xorshift32,
};
pub use schedule::{
    circle_rounds, generate_fixtures, group_round_label, rounds_for, second_leg_label,
};
pub use standings::{
    compare_standings, compute_standings, rank_within_groups, IgnoreReason, IgnoredFixture,
    StandingsReport, TieBreak, TIE_BREAK_CASCADE,
};
