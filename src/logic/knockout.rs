//! Knockout seeding: qualifiers from group standings, paired top against bottom.

use crate::logic::standings::{compare_standings, rank_within_groups};
use crate::models::{
    EngineError, EntrantId, GroupAssignment, GroupLabel, KnockoutConfig, Standing,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A qualifier and its bracket seed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// 1 is the strongest.
    pub rank: usize,
    pub entrant_id: EntrantId,
    pub group: GroupLabel,
    /// Finishing position in the group (1 = winner).
    pub group_position: usize,
}

/// One first-round tie.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketPair {
    /// Seed of the higher-ranked side; also the pair's slot in the bracket.
    pub seed_rank: usize,
    pub high: EntrantId,
    pub low: EntrantId,
    /// Seed of the lower-ranked side (`N + 1 - seed_rank` unless swapped).
    pub low_seed: usize,
}

/// Two pairs whose low seeds were exchanged to keep group-mates apart.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AvoidanceSwap {
    pub pair: usize,
    pub with_pair: usize,
}

/// Seeds and first-round pairs for the bracket.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutDraw {
    pub seeds: Vec<Seed>,
    pub pairs: Vec<BracketPair>,
    pub swaps: Vec<AvoidanceSwap>,
    /// Seed ranks of pairs still matching two group-mates after avoidance.
    pub unresolved: Vec<usize>,
}

/// Seed the knockout bracket from group standings.
///
/// 1. Bucket entrants by group finishing position: all winners, then all
///    runners-up, and so on. Each bucket is ordered by the standings cascade.
/// 2. Take the first `bracket_size` entrants across the buckets.
/// 3. Re-rank those qualifiers 1..N by the same cascade.
/// 4. Pair seed `i` with seed `N + 1 - i`.
///
/// With `avoid_same_group`, a pair of group-mates has its low seed exchanged
/// with the low seed of the next pair down, or failing that the pair above,
/// provided neither resulting pair matches group-mates. Pairs that cannot be
/// fixed stay as seeded and are listed in [`KnockoutDraw::unresolved`].
///
/// `assignments` is the source of truth for group membership; standings rows
/// for unassigned entrants are skipped.
pub fn seed_knockout(
    standings: &[Standing],
    assignments: &[GroupAssignment],
    config: &KnockoutConfig,
) -> Result<KnockoutDraw, EngineError> {
    let size = config.bracket_size;
    if size < 2 || !size.is_power_of_two() {
        return Err(EngineError::InvalidBracketSize(size));
    }

    let groups: HashMap<EntrantId, GroupLabel> = assignments
        .iter()
        .map(|a| (a.entrant_id, a.group))
        .collect();
    let rows: Vec<Standing> = standings
        .iter()
        .filter_map(|s| {
            let group = *groups.get(&s.entrant_id)?;
            Some(Standing { group, ..s.clone() })
        })
        .collect();

    let tables = rank_within_groups(&rows);
    let deepest = tables.values().map(Vec::len).max().unwrap_or(0);
    let mut candidates: Vec<Standing> = Vec::new();
    for position in 0..deepest {
        let mut bucket: Vec<Standing> = tables
            .values()
            .filter_map(|table| table.get(position).cloned())
            .collect();
        bucket.sort_by(compare_standings);
        candidates.extend(bucket);
    }

    if candidates.len() < size {
        return Err(EngineError::NotEnoughQualifiers {
            needed: size,
            available: candidates.len(),
        });
    }

    candidates.truncate(size);
    candidates.sort_by(compare_standings);
    let seeds: Vec<Seed> = candidates
        .iter()
        .enumerate()
        .map(|(i, s)| Seed {
            rank: i + 1,
            entrant_id: s.entrant_id,
            group: s.group,
            group_position: s.position,
        })
        .collect();

    // (high index, low index) into `seeds`.
    let mut slots: Vec<(usize, usize)> = (0..size / 2).map(|i| (i, size - 1 - i)).collect();
    let mut swaps = Vec::new();
    let mut unresolved = Vec::new();
    if config.avoid_same_group {
        let clash = |high: usize, low: usize| seeds[high].group == seeds[low].group;
        for i in 0..slots.len() {
            if !clash(slots[i].0, slots[i].1) {
                continue;
            }
            // Next pair down first, then the pair above.
            let partner = [Some(i + 1), i.checked_sub(1)]
                .into_iter()
                .flatten()
                .filter(|&j| j < slots.len())
                .find(|&j| !clash(slots[i].0, slots[j].1) && !clash(slots[j].0, slots[i].1));
            match partner {
                Some(j) => {
                    let low = slots[i].1;
                    slots[i].1 = slots[j].1;
                    slots[j].1 = low;
                    swaps.push(AvoidanceSwap {
                        pair: i + 1,
                        with_pair: j + 1,
                    });
                }
                None => {
                    log::warn!(
                        "Seeds {} and {} share group {}; no adjacent swap separates them",
                        seeds[slots[i].0].rank,
                        seeds[slots[i].1].rank,
                        seeds[slots[i].0].group
                    );
                    unresolved.push(i + 1);
                }
            }
        }
    }

    let pairs = slots
        .iter()
        .map(|&(high, low)| BracketPair {
            seed_rank: seeds[high].rank,
            high: seeds[high].entrant_id,
            low: seeds[low].entrant_id,
            low_seed: seeds[low].rank,
        })
        .collect();

    log::debug!(
        "Seeded {} qualifiers from {} group(s), {} swap(s)",
        size,
        tables.len(),
        swaps.len()
    );

    Ok(KnockoutDraw {
        seeds,
        pairs,
        swaps,
        unresolved,
    })
}
