//! Data structures for the cup engine: entrants, fixtures, standings, draws, configuration.

mod config;
mod draw;
mod entrant;
mod error;
mod fixture;
mod standing;

pub use config::{
    CompetitionConfig, DrawConfig, GroupingConfig, KnockoutConfig, PointsConfig, ScheduleConfig,
    SeedingMode,
};
pub use draw::{DrawId, DrawState};
pub use entrant::{Entrant, EntrantId, GroupAssignment, GroupLabel, GROUP_LABELS};
pub use error::{EngineError, ErrorKind};
pub use fixture::{Fixture, FixtureId, FixtureStatus, Leg};
pub use standing::{Standing, StandingRow};
