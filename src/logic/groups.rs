//! Group draw: deal entrants into groups A.. with snake (boustrophedon) seeding.

use crate::models::{
    EngineError, Entrant, EntrantId, GroupAssignment, GroupLabel, GroupingConfig, SeedingMode,
    GROUP_LABELS,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Number of groups for `entrant_count` entrants. An explicit group count wins
/// over a maximum group size.
pub fn group_count(entrant_count: usize, config: &GroupingConfig) -> Result<usize, EngineError> {
    let groups = match (config.group_count, config.max_group_size) {
        (Some(count), _) => count.max(1),
        (None, Some(0)) => return Err(EngineError::InvalidGroupSize),
        (None, Some(size)) => entrant_count.div_ceil(size).max(1),
        (None, None) => return Err(EngineError::NoGroupTarget),
    };
    if groups > GROUP_LABELS.len() {
        return Err(EngineError::TooManyGroups { groups });
    }
    Ok(groups)
}

/// Label of the group at `index` (0 -> 'A'), or `None` past 'Z'.
pub fn group_label(index: usize) -> Option<GroupLabel> {
    GROUP_LABELS.chars().nth(index)
}

/// Assign entrants to groups using the thread-local RNG for the random seeding modes.
pub fn assign_groups(
    entrants: &[Entrant],
    config: &GroupingConfig,
) -> Result<Vec<GroupAssignment>, EngineError> {
    assign_groups_with_rng(entrants, config, &mut rand::thread_rng())
}

/// Assign entrants to groups.
///
/// 1. Derive the group count (see [`group_count`]).
/// 2. Order entrants per the seeding mode.
/// 3. Deal them out 0,1,..,g-1, g-1,..,0, 0,1,.. so strength is spread.
///
/// `RatingSnake` never touches `rng`, so its output is reproducible.
/// Output is ordered by group label, then by dealing order within the group.
pub fn assign_groups_with_rng<R: Rng + ?Sized>(
    entrants: &[Entrant],
    config: &GroupingConfig,
    rng: &mut R,
) -> Result<Vec<GroupAssignment>, EngineError> {
    if entrants.is_empty() {
        return Err(EngineError::NoEntrants);
    }
    let groups = group_count(entrants.len(), config)?;

    let mut buckets: Vec<Vec<EntrantId>> = vec![Vec::new(); groups];
    match config.seeding {
        SeedingMode::Shuffled => {
            let mut ordered: Vec<&Entrant> = entrants.iter().collect();
            ordered.shuffle(rng);
            deal_snake(&ordered, &mut buckets);
        }
        SeedingMode::RatingSnake => {
            deal_snake(&by_rating(entrants), &mut buckets);
        }
        SeedingMode::RatingPots => {
            for pot in by_rating(entrants).chunks(groups) {
                let mut bag = pot.to_vec();
                for bucket in buckets.iter_mut() {
                    if bag.is_empty() {
                        break;
                    }
                    let pick = bag.remove(rng.gen_range(0..bag.len()));
                    bucket.push(pick.id);
                }
            }
        }
    }

    log::debug!(
        "Assigned {} entrants to {} group(s) ({:?})",
        entrants.len(),
        groups,
        config.seeding
    );

    Ok(buckets
        .into_iter()
        .zip(GROUP_LABELS.chars())
        .flat_map(|(ids, group)| {
            ids.into_iter()
                .map(move |entrant_id| GroupAssignment { entrant_id, group })
        })
        .collect())
}

/// Group index for the `position`-th entrant dealt across `groups` groups.
/// Zero groups is treated as one, as in [`group_count`].
pub fn snake_index(position: usize, groups: usize) -> usize {
    let groups = groups.max(1);
    let lap = position / groups;
    let offset = position % groups;
    if lap % 2 == 0 {
        offset
    } else {
        groups - 1 - offset
    }
}

/// Members of each group, in assignment order, keyed by label.
pub fn members_by_group(assignments: &[GroupAssignment]) -> BTreeMap<GroupLabel, Vec<EntrantId>> {
    let mut by_group: BTreeMap<GroupLabel, Vec<EntrantId>> = BTreeMap::new();
    for a in assignments {
        by_group.entry(a.group).or_default().push(a.entrant_id);
    }
    by_group
}

/// Rating descending; the stable sort keeps input order among equal ratings.
fn by_rating(entrants: &[Entrant]) -> Vec<&Entrant> {
    let mut ordered: Vec<&Entrant> = entrants.iter().collect();
    ordered.sort_by(|a, b| b.seeding_rating().total_cmp(&a.seeding_rating()));
    ordered
}

fn deal_snake(ordered: &[&Entrant], buckets: &mut [Vec<EntrantId>]) {
    let groups = buckets.len();
    for (position, entrant) in ordered.iter().enumerate() {
        buckets[snake_index(position, groups)].push(entrant.id);
    }
}
