//! Fixture, Leg and FixtureStatus for group-stage matches.

use crate::models::entrant::{EntrantId, GroupLabel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier for a fixture. Built from season, group, round and slot so that
/// regenerating a schedule reproduces the same ids.
pub type FixtureId = String;

/// Which leg of a pairing this fixture is.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Leg {
    /// Only meeting (single round-robin).
    #[default]
    Single,
    /// First meeting of a home-and-away pairing.
    First,
    /// Return meeting, home and away swapped.
    Second,
}

/// Where a fixture is in the result-reporting flow. Only the reporting
/// collaborator moves a fixture between states.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureStatus {
    #[default]
    Pending,
    /// One side has reported a score; awaiting confirmation.
    Reported,
    /// Reports disagree; resolved outside the engine.
    Disputed,
    Played,
    /// Awarded without being played; the awarded score is carried as normal.
    Forfeit,
}

/// A single group-stage match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub group: GroupLabel,
    /// Logical round (1-based). Both legs of a pairing share it.
    pub round: u32,
    /// Display label, e.g. "Group R1" or "Group R1 (Leg 2)".
    pub round_label: String,
    pub leg: Leg,
    pub home: EntrantId,
    pub away: EntrantId,
    #[serde(default)]
    pub scheduled_on: Option<NaiveDate>,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    #[serde(default)]
    pub status: FixtureStatus,
}

impl Fixture {
    /// Both scores, if the fixture has a result.
    pub fn score(&self) -> Option<(u32, u32)> {
        Some((self.home_score?, self.away_score?))
    }

    /// Record a final score and mark the fixture played.
    pub fn record_result(&mut self, home_score: u32, away_score: u32) {
        self.home_score = Some(home_score);
        self.away_score = Some(away_score);
        self.status = FixtureStatus::Played;
    }
}
