use std::collections::BTreeSet;

use crate::{MuscleGroup, ReadError, muscle};

pub trait CatalogRepository {
    fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
}

pub trait CatalogService {
    fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;

    fn get_exercise(&self, name: &str) -> Result<Option<Exercise>, ReadError> {
        Ok(self
            .get_exercises()?
            .into_iter()
            .find(|exercise| exercise.name == name))
    }
}

/// Reference catalog entry.
///
/// Muscle names are kept as they appear in the catalog and are only mapped to
/// muscle groups when an exercise is classified.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    pub category: String,
    pub equipment: Option<String>,
    pub primary_muscles: Vec<String>,
    pub secondary_muscles: Vec<String>,
    pub instructions: Vec<String>,
}

impl Exercise {
    /// Map the primary and secondary muscle names to muscle groups.
    ///
    /// Unknown names are dropped. The order of the remaining entries is kept
    /// and repeated muscle groups are not removed.
    #[must_use]
    pub fn classify(&self) -> MuscleClassification {
        MuscleClassification {
            primary: self
                .primary_muscles
                .iter()
                .filter_map(|name| muscle::normalize(name))
                .collect(),
            secondary: self
                .secondary_muscles
                .iter()
                .filter_map(|name| muscle::normalize(name))
                .collect(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MuscleClassification {
    pub primary: Vec<MuscleGroup>,
    pub secondary: Vec<MuscleGroup>,
}

impl MuscleClassification {
    /// Distinct muscle groups engaged either as primary or as secondary muscle.
    #[must_use]
    pub fn muscle_groups(&self) -> BTreeSet<MuscleGroup> {
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .copied()
            .collect()
    }

    #[must_use]
    pub fn engages(&self, muscle_group: MuscleGroup) -> bool {
        self.primary.contains(&muscle_group) || self.secondary.contains(&muscle_group)
    }
}

#[derive(Default, Clone, PartialEq)]
pub struct ExerciseFilter {
    pub name: String,
    pub muscle_groups: BTreeSet<MuscleGroup>,
    pub category: Option<String>,
    pub equipment: Option<String>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        let name = self.name.trim().to_lowercase();
        exercises
            .filter(|e| name.is_empty() || e.name.to_lowercase().contains(&name))
            .filter(|e| {
                self.category
                    .as_ref()
                    .is_none_or(|category| e.category.eq_ignore_ascii_case(category))
            })
            .filter(|e| {
                self.equipment.as_ref().is_none_or(|equipment| {
                    e.equipment
                        .as_ref()
                        .is_some_and(|e| e.eq_ignore_ascii_case(equipment))
                })
            })
            .filter(|e| {
                if self.muscle_groups.is_empty() {
                    return true;
                }
                let muscle_groups = e.classify().muscle_groups();
                self.muscle_groups.is_subset(&muscle_groups)
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.muscle_groups.is_empty()
            && self.category.is_none()
            && self.equipment.is_none()
    }

    pub fn toggle_muscle_group(&mut self, muscle_group: MuscleGroup) {
        if self.muscle_groups.contains(&muscle_group) {
            self.muscle_groups.remove(&muscle_group);
        } else {
            self.muscle_groups.insert(muscle_group);
        }
    }

    pub fn toggle_category(&mut self, category: &str) {
        if self.category.as_deref() == Some(category) {
            self.category = None;
        } else {
            self.category = Some(category.to_string());
        }
    }

    pub fn toggle_equipment(&mut self, equipment: &str) {
        if self.equipment.as_deref() == Some(equipment) {
            self.equipment = None;
        } else {
            self.equipment = Some(equipment.to_string());
        }
    }
}

/// Distinct, non-empty categories of the given exercises in sorted order.
#[must_use]
pub fn categories(exercises: &[Exercise]) -> Vec<&str> {
    exercises
        .iter()
        .map(|e| e.category.as_str())
        .filter(|c| !c.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct, non-empty equipment of the given exercises in sorted order.
#[must_use]
pub fn equipment(exercises: &[Exercise]) -> Vec<&str> {
    exercises
        .iter()
        .filter_map(|e| e.equipment.as_deref())
        .filter(|e| !e.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn exercise(
        name: &str,
        category: &str,
        equipment: Option<&str>,
        primary: &[&str],
        secondary: &[&str],
    ) -> Exercise {
        Exercise {
            name: name.to_string(),
            category: category.to_string(),
            equipment: equipment.map(ToString::to_string),
            primary_muscles: primary.iter().map(ToString::to_string).collect(),
            secondary_muscles: secondary.iter().map(ToString::to_string).collect(),
            instructions: vec![],
        }
    }

    static EXERCISES: std::sync::LazyLock<Vec<Exercise>> = std::sync::LazyLock::new(|| {
        vec![
            exercise(
                "Barbell Bench Press",
                "strength",
                Some("barbell"),
                &["chest"],
                &["triceps", "shoulders"],
            ),
            exercise(
                "Pushups",
                "strength",
                Some("body only"),
                &["chest"],
                &["triceps"],
            ),
            exercise("Plank", "stretching", None, &["abdominals"], &[]),
            exercise(
                "Barbell Squat",
                "powerlifting",
                Some("barbell"),
                &["quadriceps"],
                &["glutes", "hamstrings"],
            ),
        ]
    });

    #[test]
    fn test_exercise_classify() {
        assert_eq!(
            exercise(
                "A",
                "strength",
                None,
                &["Pecs", "unknown", "chest"],
                &["", "delts", "Triceps"]
            )
            .classify(),
            MuscleClassification {
                primary: vec![MuscleGroup::Chest, MuscleGroup::Chest],
                secondary: vec![MuscleGroup::Shoulders, MuscleGroup::Triceps],
            }
        );
    }

    #[test]
    fn test_exercise_classify_empty() {
        assert_eq!(
            Exercise::default().classify(),
            MuscleClassification::default()
        );
    }

    #[test]
    fn test_muscle_classification_muscle_groups() {
        let classification = MuscleClassification {
            primary: vec![MuscleGroup::Chest, MuscleGroup::Triceps],
            secondary: vec![MuscleGroup::Triceps, MuscleGroup::Shoulders],
        };
        assert_eq!(
            classification.muscle_groups(),
            BTreeSet::from([
                MuscleGroup::Chest,
                MuscleGroup::Shoulders,
                MuscleGroup::Triceps
            ])
        );
        assert!(classification.engages(MuscleGroup::Shoulders));
        assert!(!classification.engages(MuscleGroup::Biceps));
    }

    #[rstest]
    #[case(
        ExerciseFilter::default(),
        vec!["Barbell Bench Press", "Pushups", "Plank", "Barbell Squat"]
    )]
    #[case(
        ExerciseFilter { name: "  BARBELL ".to_string(), ..ExerciseFilter::default() },
        vec!["Barbell Bench Press", "Barbell Squat"]
    )]
    #[case(
        ExerciseFilter {
            muscle_groups: BTreeSet::from([MuscleGroup::Triceps]),
            ..ExerciseFilter::default()
        },
        vec!["Barbell Bench Press", "Pushups"]
    )]
    #[case(
        ExerciseFilter {
            muscle_groups: BTreeSet::from([MuscleGroup::Triceps, MuscleGroup::Shoulders]),
            ..ExerciseFilter::default()
        },
        vec!["Barbell Bench Press"]
    )]
    #[case(
        ExerciseFilter { category: Some("Strength".to_string()), ..ExerciseFilter::default() },
        vec!["Barbell Bench Press", "Pushups"]
    )]
    #[case(
        ExerciseFilter { equipment: Some("barbell".to_string()), ..ExerciseFilter::default() },
        vec!["Barbell Bench Press", "Barbell Squat"]
    )]
    #[case(
        ExerciseFilter { name: "row".to_string(), ..ExerciseFilter::default() },
        vec![]
    )]
    fn test_exercise_filter_exercises(
        #[case] filter: ExerciseFilter,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(
            filter
                .exercises(EXERCISES.iter())
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_exercise_filter_is_empty() {
        assert!(ExerciseFilter::default().is_empty());
        assert!(
            ExerciseFilter {
                name: " ".to_string(),
                ..ExerciseFilter::default()
            }
            .is_empty()
        );
        assert!(
            !ExerciseFilter {
                category: Some("strength".to_string()),
                ..ExerciseFilter::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn test_exercise_filter_toggle_muscle_group() {
        let mut filter = ExerciseFilter::default();

        filter.toggle_muscle_group(MuscleGroup::Lats);
        assert_eq!(filter.muscle_groups, BTreeSet::from([MuscleGroup::Lats]));

        filter.toggle_muscle_group(MuscleGroup::Chest);
        assert_eq!(
            filter.muscle_groups,
            BTreeSet::from([MuscleGroup::Chest, MuscleGroup::Lats])
        );

        filter.toggle_muscle_group(MuscleGroup::Lats);
        assert_eq!(filter.muscle_groups, BTreeSet::from([MuscleGroup::Chest]));
    }

    #[test]
    fn test_exercise_filter_toggle_category() {
        let mut filter = ExerciseFilter::default();

        filter.toggle_category("strength");
        assert_eq!(filter.category, Some("strength".to_string()));

        filter.toggle_category("cardio");
        assert_eq!(filter.category, Some("cardio".to_string()));

        filter.toggle_category("cardio");
        assert_eq!(filter.category, None);
    }

    #[test]
    fn test_exercise_filter_toggle_equipment() {
        let mut filter = ExerciseFilter::default();

        filter.toggle_equipment("barbell");
        assert_eq!(filter.equipment, Some("barbell".to_string()));

        filter.toggle_equipment("barbell");
        assert_eq!(filter.equipment, None);
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            categories(&EXERCISES),
            vec!["powerlifting", "strength", "stretching"]
        );
    }

    #[test]
    fn test_equipment() {
        assert_eq!(equipment(&EXERCISES), vec!["barbell", "body only"]);
    }
}
