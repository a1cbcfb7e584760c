//! Entrant and GroupAssignment data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an entrant (used in fixtures, standings and brackets).
pub type EntrantId = Uuid;

/// Group label, one of 'A'..='Z'.
pub type GroupLabel = char;

/// Labels available to groups, in order.
pub const GROUP_LABELS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A registered entrant: the manager, their club, and an optional strength rating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entrant {
    pub id: EntrantId,
    /// Display name of the manager.
    pub manager: String,
    #[serde(default)]
    pub club: Option<String>,
    /// Used only when groups are seeded by rating. Missing ratings rank as 0.
    #[serde(default)]
    pub rating: Option<f64>,
}

impl Entrant {
    /// Create a new entrant with the given manager name and a fresh id.
    pub fn new(manager: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            manager: manager.into(),
            club: None,
            rating: None,
        }
    }

    pub fn with_club(mut self, club: impl Into<String>) -> Self {
        self.club = Some(club.into());
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Rating used for seeding. Missing and non-finite ratings count as 0.
    pub fn seeding_rating(&self) -> f64 {
        self.rating.filter(|r| r.is_finite()).unwrap_or(0.0)
    }
}

/// One entrant placed in one group.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct GroupAssignment {
    pub entrant_id: EntrantId,
    pub group: GroupLabel,
}
