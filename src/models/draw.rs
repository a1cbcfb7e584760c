//! DrawState: a seeded prize draw and how far its reveal has progressed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a draw session held by a caller.
pub type DrawId = Uuid;

/// Result of a prize draw plus reveal progress.
///
/// `full_order` is a pure function of `seed` and `canonical`; `revealed` is the
/// only field that changes afterwards, one step per admin reveal.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DrawState {
    pub seed: String,
    /// Canonicalized entrant names, in first-seen order.
    pub canonical: Vec<String>,
    /// Full seeded permutation of `canonical`. The first `winners` are the winners.
    pub full_order: Vec<String>,
    pub winners: usize,
    #[serde(default)]
    pub revealed: usize,
}

impl DrawState {
    /// The winning names, in prize order.
    pub fn winners(&self) -> &[String] {
        let n = self.winners.min(self.full_order.len());
        &self.full_order[..n]
    }

    /// Winners revealed so far.
    pub fn revealed_winners(&self) -> &[String] {
        let n = self.revealed.min(self.winners().len());
        &self.full_order[..n]
    }

    /// Reveal the next winner. Returns `None` once all winners are shown.
    pub fn reveal_next(&mut self) -> Option<&str> {
        if self.is_complete() {
            return None;
        }
        self.revealed += 1;
        self.full_order.get(self.revealed - 1).map(String::as_str)
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.winners().len()
    }

    /// Hide all winners again (e.g. to rerun the reveal on a big screen).
    pub fn reset_reveal(&mut self) {
        self.revealed = 0;
    }
}
