//! Group fixtures: round-robin per group via the circle method.

use crate::logic::groups::members_by_group;
use crate::models::{
    EntrantId, Fixture, FixtureStatus, GroupAssignment, GroupLabel, Leg, ScheduleConfig,
};

/// Label shown for a group round, e.g. "Group R3".
pub fn group_round_label(round: u32) -> String {
    format!("Group R{}", round)
}

/// Label shown for the return leg of a group round.
pub fn second_leg_label(round: u32) -> String {
    format!("Group R{} (Leg 2)", round)
}

/// Number of rounds a group of `teams` needs for one pass (bye rounds included).
pub fn rounds_for(teams: usize) -> usize {
    if teams < 2 {
        0
    } else {
        teams + teams % 2 - 1
    }
}

/// Generate fixtures for every group in label order.
///
/// Groups with fewer than two members produce nothing. With `double_round`
/// each pairing gets a second-leg fixture with home and away swapped; it keeps
/// the same round number but a distinct label and a `-L2` id suffix.
pub fn generate_fixtures(assignments: &[GroupAssignment], config: &ScheduleConfig) -> Vec<Fixture> {
    let mut fixtures = Vec::new();
    for (group, members) in members_by_group(assignments) {
        let before = fixtures.len();
        for (r, pairs) in circle_rounds(&members).into_iter().enumerate() {
            let round = r as u32 + 1;
            let first_leg = if config.double_round { Leg::First } else { Leg::Single };
            for (slot, &(home, away)) in pairs.iter().enumerate() {
                fixtures.push(new_fixture(
                    format!("{}-{}-R{}-{}", config.season, group, round, slot + 1),
                    group,
                    round,
                    group_round_label(round),
                    first_leg,
                    home,
                    away,
                ));
            }
            if config.double_round {
                for (slot, &(home, away)) in pairs.iter().enumerate() {
                    fixtures.push(new_fixture(
                        format!("{}-{}-R{}-{}-L2", config.season, group, round, slot + 1),
                        group,
                        round,
                        second_leg_label(round),
                        Leg::Second,
                        away,
                        home,
                    ));
                }
            }
        }
        log::debug!(
            "Group {}: {} team(s), {} fixture(s)",
            group,
            members.len(),
            fixtures.len() - before
        );
    }
    fixtures
}

/// Pairings for each round of one single round-robin pass, `(home, away)`.
///
/// Odd groups get a bye slot; a pairing against the bye is dropped. The first
/// team stays fixed while the rest rotate one step per round. In each round the
/// team at position `i` meets the team at `len - 1 - i`, and the one in the first
/// half is at home.
pub fn circle_rounds(teams: &[EntrantId]) -> Vec<Vec<(EntrantId, EntrantId)>> {
    if teams.len() < 2 {
        return Vec::new();
    }
    let mut slots: Vec<Option<EntrantId>> = teams.iter().copied().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let size = slots.len();
    let fixed = slots[0];
    let mut ring = slots[1..].to_vec();

    let mut rounds = Vec::with_capacity(size - 1);
    for _ in 0..size - 1 {
        let order: Vec<Option<EntrantId>> =
            std::iter::once(fixed).chain(ring.iter().copied()).collect();
        let pairs = (0..size / 2)
            .filter_map(|i| match (order[i], order[size - 1 - i]) {
                (Some(home), Some(away)) => Some((home, away)),
                _ => None,
            })
            .collect();
        rounds.push(pairs);
        ring.rotate_right(1);
    }
    rounds
}

fn new_fixture(
    id: String,
    group: GroupLabel,
    round: u32,
    round_label: String,
    leg: Leg,
    home: EntrantId,
    away: EntrantId,
) -> Fixture {
    Fixture {
        id,
        group,
        round,
        round_label,
        leg,
        home,
        away,
        scheduled_on: None,
        home_score: None,
        away_score: None,
        status: FixtureStatus::Pending,
    }
}
