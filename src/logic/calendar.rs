//! Calendar: hand out available dates to rounds, in order.

use crate::logic::schedule::group_round_label;
use crate::models::{Fixture, Leg};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A round waiting for dates: one for a single leg, two for a two-legged tie.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundSpec {
    pub label: String,
    pub two_legged: bool,
}

impl RoundSpec {
    pub fn single(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            two_legged: false,
        }
    }

    pub fn two_legged(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            two_legged: true,
        }
    }

    pub fn dates_needed(&self) -> usize {
        if self.two_legged {
            2
        } else {
            1
        }
    }
}

/// Dates given to one round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AllocatedRound {
    pub label: String,
    pub dates: Vec<NaiveDate>,
}

/// Result of [`allocate_round_dates`]. A short date window leaves trailing
/// rounds in `unallocated`; that is a valid state, not an error.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub rounds: Vec<AllocatedRound>,
    pub unallocated: Vec<String>,
    pub unused_dates: Vec<NaiveDate>,
}

impl Allocation {
    pub fn dates_for(&self, label: &str) -> Option<&[NaiveDate]> {
        self.rounds
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.dates.as_slice())
    }

    /// True when every requested round got its dates.
    pub fn is_complete(&self) -> bool {
        self.unallocated.is_empty()
    }
}

/// Walk `rounds` in order, taking the next one or two dates for each. Stops at
/// the first round the remaining dates cannot cover; that round and all later
/// ones are reported as unallocated.
pub fn allocate_round_dates(dates: &[NaiveDate], rounds: &[RoundSpec]) -> Allocation {
    let mut allocation = Allocation::default();
    let mut next = 0;
    for (i, spec) in rounds.iter().enumerate() {
        let needed = spec.dates_needed();
        if next + needed > dates.len() {
            allocation.unallocated = rounds[i..].iter().map(|r| r.label.clone()).collect();
            break;
        }
        allocation.rounds.push(AllocatedRound {
            label: spec.label.clone(),
            dates: dates[next..next + needed].to_vec(),
        });
        next += needed;
    }
    allocation.unused_dates = dates[next..].to_vec();
    if !allocation.is_complete() {
        log::debug!(
            "Calendar short by {} round(s): {:?}",
            allocation.unallocated.len(),
            allocation.unallocated
        );
    }
    allocation
}

/// Every Saturday from `start` to `end`, both inclusive.
pub fn saturdays_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let offset = (Weekday::Sat.num_days_from_monday() + 7
        - start.weekday().num_days_from_monday())
        % 7;
    let mut out = Vec::new();
    let mut day = start.checked_add_days(Days::new(offset as u64));
    while let Some(d) = day {
        if d > end {
            break;
        }
        out.push(d);
        day = d.checked_add_days(Days::new(7));
    }
    out
}

/// One spec per group round present in `fixtures`, in round order. With home
/// and away legs each round takes two dates.
pub fn group_round_specs(fixtures: &[Fixture], double_round: bool) -> Vec<RoundSpec> {
    let rounds: BTreeSet<u32> = fixtures.iter().map(|f| f.round).collect();
    rounds
        .into_iter()
        .map(|round| RoundSpec {
            label: group_round_label(round),
            two_legged: double_round,
        })
        .collect()
}

/// Name of a knockout round by the number of entrants still in it.
pub fn knockout_round_label(entrants: usize) -> String {
    match entrants {
        2 => "Cup Final".to_string(),
        4 => "Cup SF".to_string(),
        8 => "Cup QF".to_string(),
        n => format!("Cup R{}", n),
    }
}

/// Specs for every knockout round from `bracket_size` down to the final.
/// The final is always a single match.
pub fn knockout_round_specs(bracket_size: usize, two_legged: bool) -> Vec<RoundSpec> {
    let mut specs = Vec::new();
    let mut remaining = bracket_size;
    while remaining >= 2 {
        specs.push(RoundSpec {
            label: knockout_round_label(remaining),
            two_legged: two_legged && remaining > 2,
        });
        remaining /= 2;
    }
    specs
}

/// Write allocated dates onto fixtures. A second leg takes the date of its own
/// label if that label was allocated, otherwise the second date of its round.
/// Fixtures whose round has no date are left untouched. Returns how many were dated.
pub fn apply_allocation(fixtures: &mut [Fixture], allocation: &Allocation) -> usize {
    let mut dated = 0;
    for fixture in fixtures.iter_mut() {
        let own = allocation
            .dates_for(&fixture.round_label)
            .and_then(|d| d.first());
        let date = match fixture.leg {
            Leg::Second => own.or_else(|| {
                allocation
                    .dates_for(&group_round_label(fixture.round))
                    .and_then(|d| d.get(1))
            }),
            Leg::Single | Leg::First => own,
        };
        if let Some(&d) = date {
            fixture.scheduled_on = Some(d);
            dated += 1;
        }
    }
    dated
}
