//! Competition configuration. Every knob is passed in explicitly; the logic
//! never falls back to a built-in value.

use serde::{Deserialize, Serialize};

/// How entrants are ordered before being dealt into groups.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedingMode {
    /// Random order, then snake distribution. Live ceremony, not reproducible.
    Shuffled,
    /// Rating descending (input order breaks ties), then snake distribution.
    RatingSnake,
    /// Rating descending, cut into pots of one entrant per group; each pot is
    /// drawn at random across groups A.. in order.
    RatingPots,
}

/// Group-stage sizing and seeding.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupingConfig {
    /// Number of groups. Takes precedence over `max_group_size`.
    #[serde(default)]
    pub group_count: Option<usize>,
    /// Largest allowed group; the group count is derived as `ceil(n / size)`.
    #[serde(default)]
    pub max_group_size: Option<usize>,
    pub seeding: SeedingMode,
}

impl GroupingConfig {
    pub fn with_group_count(group_count: usize, seeding: SeedingMode) -> Self {
        Self {
            group_count: Some(group_count),
            max_group_size: None,
            seeding,
        }
    }

    pub fn with_max_group_size(max_group_size: usize, seeding: SeedingMode) -> Self {
        Self {
            group_count: None,
            max_group_size: Some(max_group_size),
            seeding,
        }
    }
}

/// Fixture generation settings.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Season code, used as the prefix of fixture ids.
    pub season: String,
    /// Home and away: every pairing is played twice.
    pub double_round: bool,
}

/// Points awarded per result.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PointsConfig {
    pub win: i32,
    pub draw: i32,
    pub loss: i32,
}

impl PointsConfig {
    /// Three points for a win, one for a draw.
    pub fn football() -> Self {
        Self {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}

/// Knockout bracket settings.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutConfig {
    /// Number of qualifiers; must be a power of two.
    pub bracket_size: usize,
    /// Swap pairings so that two entrants from the same group do not meet in
    /// the first knockout round, where a swap can fix it.
    pub avoid_same_group: bool,
}

/// Prize draw settings.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// How many names at the top of the permutation are winners.
    pub winners: usize,
}

/// All knobs for one season, bundled.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CompetitionConfig {
    pub grouping: GroupingConfig,
    pub schedule: ScheduleConfig,
    pub points: PointsConfig,
    pub knockout: KnockoutConfig,
    pub draw: DrawConfig,
}
