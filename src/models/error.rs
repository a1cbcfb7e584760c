//! EngineError and its two-way classification.

use serde::{Deserialize, Serialize};

/// Broad class of an [`EngineError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The configuration cannot be satisfied. Fix the configuration, not the data.
    Configuration,
    /// The configuration is fine but there is not enough input yet.
    InsufficientData,
}

/// Errors that can occur during engine operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EngineError {
    /// Neither a group count nor a maximum group size was given.
    NoGroupTarget,
    /// Maximum group size must be at least 1.
    InvalidGroupSize,
    /// Groups are labelled A..Z, so at most 26 can exist.
    TooManyGroups { groups: usize },
    /// Bracket size must be a power of two and at least 2.
    InvalidBracketSize(usize),
    /// Every group could not supply enough qualifiers for the bracket.
    NotEnoughQualifiers { needed: usize, available: usize },
    /// Number of draw winners must be at least 1.
    InvalidWinnerCount,
    /// Grouping needs at least one entrant.
    NoEntrants,
    /// The draw has fewer names than winners requested.
    NotEnoughEntrants { needed: usize, available: usize },
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::NoGroupTarget
            | EngineError::InvalidGroupSize
            | EngineError::TooManyGroups { .. }
            | EngineError::InvalidBracketSize(_)
            | EngineError::NotEnoughQualifiers { .. }
            | EngineError::InvalidWinnerCount => ErrorKind::Configuration,
            EngineError::NoEntrants | EngineError::NotEnoughEntrants { .. } => {
                ErrorKind::InsufficientData
            }
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::NoGroupTarget => {
                write!(f, "Either a group count or a maximum group size is required")
            }
            EngineError::InvalidGroupSize => write!(f, "Maximum group size must be at least 1"),
            EngineError::TooManyGroups { groups } => {
                write!(f, "{} groups requested but only A..Z (26) are available", groups)
            }
            EngineError::InvalidBracketSize(size) => {
                write!(f, "Bracket size {} is not a power of two (minimum 2)", size)
            }
            EngineError::NotEnoughQualifiers { needed, available } => write!(
                f,
                "Bracket needs {} qualifiers but standings only provide {}",
                needed, available
            ),
            EngineError::InvalidWinnerCount => write!(f, "At least one winner must be drawn"),
            EngineError::NoEntrants => write!(f, "No entrants to assign to groups"),
            EngineError::NotEnoughEntrants { needed, available } => write!(
                f,
                "Not enough entrants: need {} for the draw, have {}",
                needed, available
            ),
        }
    }
}

impl std::error::Error for EngineError {}
