//! Standing (one league-table row) and its compact display shape.

use crate::models::config::PointsConfig;
use crate::models::entrant::{EntrantId, GroupLabel};
use serde::{Deserialize, Serialize};

/// One entrant's record within their group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub entrant_id: EntrantId,
    pub group: GroupLabel,
    /// 1-based position within the group once ordered; 0 before ranking.
    #[serde(default)]
    pub position: usize,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: i32,
}

impl Standing {
    /// Zero row for an entrant that has not played yet.
    pub fn new(entrant_id: EntrantId, group: GroupLabel) -> Self {
        Self {
            entrant_id,
            group,
            position: 0,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    /// Apply one match from this entrant's point of view. Counters saturate
    /// rather than wrap on absurd reported scores.
    pub fn record_match(&mut self, scored: u32, conceded: u32, points: &PointsConfig) {
        self.played = self.played.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
        let awarded = if scored > conceded {
            self.won = self.won.saturating_add(1);
            points.win
        } else if scored < conceded {
            self.lost = self.lost.saturating_add(1);
            points.loss
        } else {
            self.drawn = self.drawn.saturating_add(1);
            points.draw
        };
        self.points = self.points.saturating_add(awarded);
    }

    /// Recompute goal difference from the aggregated goal counts.
    pub fn finalize(&mut self) {
        self.goal_difference = goal_difference(self.goals_for, self.goals_against);
    }
}

/// `scored - conceded`, clamped to the `i32` range so the sign is always right.
fn goal_difference(scored: u32, conceded: u32) -> i32 {
    let gd = i64::from(scored) - i64::from(conceded);
    gd.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Compact table row (`p w d l gf ga gd pts`) for display and export.
/// Keeps the short column names out of the core [`Standing`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub pos: usize,
    pub group: GroupLabel,
    pub entrant: EntrantId,
    pub p: u32,
    pub w: u32,
    pub d: u32,
    pub l: u32,
    pub gf: u32,
    pub ga: u32,
    pub gd: i32,
    pub pts: i32,
}

impl From<&Standing> for StandingRow {
    fn from(s: &Standing) -> Self {
        Self {
            pos: s.position,
            group: s.group,
            entrant: s.entrant_id,
            p: s.played,
            w: s.won,
            d: s.drawn,
            l: s.lost,
            gf: s.goals_for,
            ga: s.goals_against,
            gd: s.goal_difference,
            pts: s.points,
        }
    }
}

impl From<&StandingRow> for Standing {
    fn from(r: &StandingRow) -> Self {
        Self {
            entrant_id: r.entrant,
            group: r.group,
            position: r.pos,
            played: r.p,
            won: r.w,
            drawn: r.d,
            lost: r.l,
            goals_for: r.gf,
            goals_against: r.ga,
            goal_difference: goal_difference(r.gf, r.ga),
            points: r.pts,
        }
    }
}
