use std::collections::{BTreeMap, HashSet};

use chrono::{Days, NaiveDate};

use crate::{Exercise, MuscleGroup, MuscleGroupStat};

/// Number of days after which a muscle group without training is underworked.
pub const RECENCY_DAYS: u64 = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub muscle_group: MuscleGroup,
    pub exercises: Vec<Exercise>,
    pub reason: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
enum Involvement {
    Secondary,
    Primary,
}

/// Muscle groups which have not been worked within the last week.
///
/// This is independent of the window used for the statistics. The muscle
/// groups are returned in the order of the statistics.
#[must_use]
pub fn underworked(
    stats: &BTreeMap<MuscleGroup, MuscleGroupStat>,
    today: NaiveDate,
) -> Vec<MuscleGroup> {
    let cutoff = today
        .checked_sub_days(Days::new(RECENCY_DAYS))
        .unwrap_or(NaiveDate::MIN);

    stats
        .iter()
        .filter(|(_, stat)| stat.last_worked.is_none_or(|date| date < cutoff))
        .map(|(muscle_group, _)| *muscle_group)
        .collect()
}

/// Suggest exercises of the catalog for each of the given muscle groups.
///
/// Exercises training a muscle group as primary muscle are ranked before
/// exercises training it only as secondary muscle. Exercises of the same rank
/// are ordered by name. Muscle groups without any matching exercise are
/// omitted.
#[must_use]
pub fn suggest(
    muscle_groups: &[MuscleGroup],
    catalog: &[Exercise],
    limit: usize,
) -> Vec<Suggestion> {
    let classified = catalog
        .iter()
        .map(|exercise| (exercise, exercise.classify()))
        .collect::<Vec<_>>();

    muscle_groups
        .iter()
        .filter_map(|muscle_group| {
            let mut candidates = classified
                .iter()
                .filter_map(|(exercise, classification)| {
                    if classification.primary.contains(muscle_group) {
                        Some((Involvement::Primary, *exercise))
                    } else if classification.secondary.contains(muscle_group) {
                        Some((Involvement::Secondary, *exercise))
                    } else {
                        None
                    }
                })
                .collect::<Vec<_>>();

            candidates.sort_by(|(a_involvement, a), (b_involvement, b)| {
                b_involvement
                    .cmp(a_involvement)
                    .then_with(|| a.name.cmp(&b.name))
            });

            let mut names = HashSet::new();
            let exercises = candidates
                .into_iter()
                .filter(|&(_, exercise)| names.insert(exercise.name.as_str()))
                .take(limit)
                .map(|(_, exercise)| exercise.clone())
                .collect::<Vec<_>>();

            if exercises.is_empty() {
                return None;
            }

            Some(Suggestion {
                muscle_group: *muscle_group,
                exercises,
                reason: format!(
                    "You haven't worked your {muscle_group} in the last week. Try these exercises:"
                ),
            })
        })
        .collect()
}
