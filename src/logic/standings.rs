//! Group standings: aggregate results into table rows and order them.

use crate::models::{
    EntrantId, Fixture, FixtureId, GroupAssignment, GroupLabel, PointsConfig, Standing,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// One criterion of the ranking cascade.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    Points,
    GoalDifference,
    GoalsFor,
    /// Not a football rule: ascending entrant id, so the order is always total.
    EntrantId,
}

impl TieBreak {
    /// `Less` means `a` ranks above `b`.
    pub fn compare(self, a: &Standing, b: &Standing) -> Ordering {
        match self {
            TieBreak::Points => b.points.cmp(&a.points),
            TieBreak::GoalDifference => b.goal_difference.cmp(&a.goal_difference),
            TieBreak::GoalsFor => b.goals_for.cmp(&a.goals_for),
            TieBreak::EntrantId => a.entrant_id.cmp(&b.entrant_id),
        }
    }
}

/// Criteria applied in order; each only separates rows the previous ones tied.
pub const TIE_BREAK_CASCADE: [TieBreak; 4] = [
    TieBreak::Points,
    TieBreak::GoalDifference,
    TieBreak::GoalsFor,
    TieBreak::EntrantId,
];

/// Full ranking comparison (`Less` = better).
pub fn compare_standings(a: &Standing, b: &Standing) -> Ordering {
    TIE_BREAK_CASCADE
        .iter()
        .map(|criterion| criterion.compare(a, b))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Why a fixture did not count towards the table.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// One or both scores missing: not played yet.
    NotPlayed,
    /// An entrant is not assigned to any group.
    UnknownEntrant,
    /// The two entrants are in different groups.
    CrossGroup,
    /// Home and away are the same entrant.
    SelfPairing,
}

/// A fixture skipped during aggregation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct IgnoredFixture {
    pub fixture_id: FixtureId,
    pub reason: IgnoreReason,
}

/// Ordered standings plus the fixtures that were skipped.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsReport {
    /// Grouped by label, each group ordered by [`TIE_BREAK_CASCADE`], positions filled.
    pub standings: Vec<Standing>,
    pub ignored: Vec<IgnoredFixture>,
}

impl StandingsReport {
    /// Rows of one group, in table order.
    pub fn group(&self, group: GroupLabel) -> impl Iterator<Item = &Standing> {
        self.standings.iter().filter(move |s| s.group == group)
    }

    pub fn get(&self, entrant_id: EntrantId) -> Option<&Standing> {
        self.standings.iter().find(|s| s.entrant_id == entrant_id)
    }
}

/// Compute standings from the full fixture list.
///
/// Every assigned entrant gets a row, played or not. A fixture counts only if
/// both scores are present and both entrants belong to the same group; anything
/// else is skipped and listed in [`StandingsReport::ignored`]. The result is a
/// pure function of the inputs, so it can be rerun whenever results change.
pub fn compute_standings(
    fixtures: &[Fixture],
    assignments: &[GroupAssignment],
    points: &PointsConfig,
) -> StandingsReport {
    let mut rows: Vec<Standing> = Vec::with_capacity(assignments.len());
    let mut index: HashMap<EntrantId, usize> = HashMap::with_capacity(assignments.len());
    for a in assignments {
        index.entry(a.entrant_id).or_insert_with(|| {
            rows.push(Standing::new(a.entrant_id, a.group));
            rows.len() - 1
        });
    }

    let mut ignored = Vec::new();
    for f in fixtures {
        let reason = match (f.score(), index.get(&f.home), index.get(&f.away)) {
            (None, _, _) => Some(IgnoreReason::NotPlayed),
            _ if f.home == f.away => Some(IgnoreReason::SelfPairing),
            (Some(_), None, _) | (Some(_), _, None) => Some(IgnoreReason::UnknownEntrant),
            (Some((home_score, away_score)), Some(&h), Some(&a)) => {
                if rows[h].group != rows[a].group {
                    Some(IgnoreReason::CrossGroup)
                } else {
                    rows[h].record_match(home_score, away_score, points);
                    rows[a].record_match(away_score, home_score, points);
                    None
                }
            }
        };
        if let Some(reason) = reason {
            if reason == IgnoreReason::NotPlayed {
                log::trace!("Fixture {} has no result yet", f.id);
            } else {
                log::warn!("Ignoring fixture {}: {:?}", f.id, reason);
            }
            ignored.push(IgnoredFixture {
                fixture_id: f.id.clone(),
                reason,
            });
        }
    }

    for row in &mut rows {
        row.finalize();
    }

    let standings = rank_within_groups(&rows).into_values().flatten().collect();
    StandingsReport { standings, ignored }
}

/// Split rows by group and order each group, filling in 1-based positions.
pub fn rank_within_groups(standings: &[Standing]) -> BTreeMap<GroupLabel, Vec<Standing>> {
    let mut by_group: BTreeMap<GroupLabel, Vec<Standing>> = BTreeMap::new();
    for s in standings {
        by_group.entry(s.group).or_default().push(s.clone());
    }
    for table in by_group.values_mut() {
        table.sort_by(compare_standings);
        for (i, row) in table.iter_mut().enumerate() {
            row.position = i + 1;
        }
    }
    by_group
}
