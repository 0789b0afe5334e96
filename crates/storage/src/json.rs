//! JSON representations of the catalog, the workout history and the settings.
//!
//! Catalog entries follow the layout of common exercise databases. Entries are
//! decoded leniently: missing or `null` fields are replaced by empty values and
//! entries which cannot be decoded at all are skipped.

use chrono::NaiveDate;
use liftlog_domain as domain;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[derive(thiserror::Error, Debug)]
pub enum JsonError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Weight(#[from] domain::WeightError),
    #[error(transparent)]
    Window(#[from] domain::WindowError),
    #[error(transparent)]
    Workout(#[from] domain::WorkoutError),
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Exercise {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    pub equipment: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub primary_muscles: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub secondary_muscles: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub instructions: Vec<String>,
}

impl From<domain::Exercise> for Exercise {
    fn from(value: domain::Exercise) -> Self {
        Self {
            name: value.name,
            category: value.category,
            equipment: value.equipment,
            primary_muscles: value.primary_muscles,
            secondary_muscles: value.secondary_muscles,
            instructions: value.instructions,
        }
    }
}

impl From<Exercise> for domain::Exercise {
    fn from(value: Exercise) -> Self {
        Self {
            name: value.name.trim().to_string(),
            category: value.category,
            equipment: value.equipment.filter(|e| !e.trim().is_empty()),
            primary_muscles: value.primary_muscles,
            secondary_muscles: value.secondary_muscles,
            instructions: value.instructions,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Set {
    pub reps: u32,
    pub weight: f32,
}

impl From<&domain::Set> for Set {
    fn from(value: &domain::Set) -> Self {
        Self {
            reps: value.reps.into(),
            weight: value.weight.into(),
        }
    }
}

impl TryFrom<Set> for domain::Set {
    type Error = domain::WeightError;

    fn try_from(value: Set) -> Result<Self, Self::Error> {
        Ok(Self {
            reps: value.reps.into(),
            weight: domain::Weight::new(value.weight)?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutExercise {
    #[serde(flatten)]
    pub exercise: Exercise,
    #[serde(default)]
    pub sets: Vec<Set>,
}

impl From<&domain::WorkoutExercise> for WorkoutExercise {
    fn from(value: &domain::WorkoutExercise) -> Self {
        Self {
            exercise: value.exercise.clone().into(),
            sets: value.sets.iter().map(Set::from).collect(),
        }
    }
}

impl TryFrom<WorkoutExercise> for domain::WorkoutExercise {
    type Error = domain::WeightError;

    fn try_from(value: WorkoutExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            exercise: value.exercise.into(),
            sets: value
                .sets
                .into_iter()
                .map(domain::Set::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: Uuid,
    pub date: NaiveDate,
    pub exercises: Vec<WorkoutExercise>,
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: *value.id,
            date: value.date,
            exercises: value.exercises.iter().map(WorkoutExercise::from).collect(),
        }
    }
}

impl TryFrom<Workout> for domain::Workout {
    type Error = JsonError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        let draft = domain::WorkoutDraft {
            date: value.date,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::WorkoutExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        };
        Ok(draft.save(value.id.into())?)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub window_days: u32,
    pub suggestions_per_muscle_group: usize,
}

impl From<domain::Settings> for Settings {
    fn from(value: domain::Settings) -> Self {
        Self {
            window_days: value.window.into(),
            suggestions_per_muscle_group: value.suggestions_per_muscle_group,
        }
    }
}

impl TryFrom<Settings> for domain::Settings {
    type Error = domain::WindowError;

    fn try_from(value: Settings) -> Result<Self, Self::Error> {
        Ok(Self {
            window: domain::Window::try_from(value.window_days)?,
            suggestions_per_muscle_group: value.suggestions_per_muscle_group,
        })
    }
}

/// Decode a catalog given as JSON array of exercises.
///
/// Entries which are not objects of the expected shape are skipped.
pub fn decode_catalog(json: &str) -> Result<Vec<domain::Exercise>, JsonError> {
    let values = serde_json::from_str::<Vec<serde_json::Value>>(json)?;
    Ok(values
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| match serde_json::from_value::<Exercise>(value) {
            Ok(exercise) => Some(exercise.into()),
            Err(err) => {
                warn!("skipping malformed catalog entry {i}: {err}");
                None
            }
        })
        .collect())
}

pub fn encode_catalog(exercises: &[domain::Exercise]) -> Result<String, JsonError> {
    Ok(serde_json::to_string(
        &exercises
            .iter()
            .cloned()
            .map(Exercise::from)
            .collect::<Vec<_>>(),
    )?)
}

pub fn decode_workouts(json: &str) -> Result<Vec<domain::Workout>, JsonError> {
    serde_json::from_str::<Vec<Workout>>(json)?
        .into_iter()
        .map(domain::Workout::try_from)
        .collect()
}

pub fn encode_workouts(workouts: &[domain::Workout]) -> Result<String, JsonError> {
    Ok(serde_json::to_string(
        &workouts.iter().map(Workout::from).collect::<Vec<_>>(),
    )?)
}

pub fn decode_settings(json: &str) -> Result<domain::Settings, JsonError> {
    Ok(serde_json::from_str::<Settings>(json)?.try_into()?)
}

pub fn encode_settings(settings: domain::Settings) -> Result<String, JsonError> {
    Ok(serde_json::to_string(&Settings::from(settings))?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::tests::data::{CATALOG_JSON, EXERCISE, EXERCISE_2, WORKOUT, WORKOUTS};

    use super::*;

    #[test]
    fn test_exercise_from() {
        assert_eq!(
            domain::Exercise::from(Exercise::from(EXERCISE.clone())),
            EXERCISE.clone()
        );
    }

    #[test]
    fn test_exercise_serde() {
        let obj = Exercise::from(EXERCISE_2.clone());
        let serialized = json!(obj);
        assert_eq!(serialized["primaryMuscles"], json!(["quadriceps"]));
        let deserialized: Exercise = serde_json::from_value(serialized).unwrap();
        assert_eq!(deserialized, obj);
    }

    #[test]
    fn test_workout_try_from() {
        assert_eq!(
            domain::Workout::try_from(Workout::from(&*WORKOUT)).unwrap(),
            WORKOUT.clone()
        );
    }

    #[test]
    fn test_workout_serde() {
        let serialized = json!(Workout::from(&*WORKOUT));
        assert_eq!(serialized["date"], json!("2020-02-02"));
        assert_eq!(serialized["exercises"][0]["name"], json!("Barbell Bench Press"));
        assert_eq!(
            serialized["exercises"][0]["sets"],
            json!([{"reps": 10, "weight": 100.0}, {"reps": 8, "weight": 100.0}])
        );
    }

    #[test]
    fn test_workout_without_exercises() {
        let workout = Workout {
            id: Uuid::nil(),
            date: NaiveDate::from_ymd_opt(2020, 2, 2).unwrap(),
            exercises: vec![],
        };
        assert!(matches!(
            domain::Workout::try_from(workout),
            Err(JsonError::Workout(domain::WorkoutError::NoExercises))
        ));
    }

    #[test]
    fn test_workout_with_negative_weight() {
        let workout = json!({
            "id": Uuid::nil(),
            "date": "2020-02-02",
            "exercises": [{"name": "A", "sets": [{"reps": 1, "weight": -1.0}]}]
        });
        assert!(matches!(
            domain::Workout::try_from(serde_json::from_value::<Workout>(workout).unwrap()),
            Err(JsonError::Weight(domain::WeightError::Negative))
        ));
    }

    #[test]
    fn test_decode_catalog() {
        let catalog = decode_catalog(CATALOG_JSON).unwrap();

        assert_eq!(
            catalog.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["Barbell Bench Press", "Barbell Squat", "", "Plank"]
        );
        assert_eq!(catalog[0], EXERCISE.clone());
        assert_eq!(catalog[2].primary_muscles, Vec::<String>::new());
        assert_eq!(catalog[3].secondary_muscles, Vec::<String>::new());
        assert_eq!(catalog[3].equipment, None);
    }

    #[rstest]
    #[case("")]
    #[case("{}")]
    #[case("[1, 2")]
    fn test_decode_catalog_invalid(#[case] json: &str) {
        assert!(matches!(decode_catalog(json), Err(JsonError::Json(_))));
    }

    #[test]
    fn test_encode_catalog() {
        let exercises = vec![EXERCISE.clone(), EXERCISE_2.clone()];
        assert_eq!(
            decode_catalog(&encode_catalog(&exercises).unwrap()).unwrap(),
            exercises
        );
    }

    #[test]
    fn test_encode_workouts() {
        assert_eq!(
            decode_workouts(&encode_workouts(&WORKOUTS).unwrap()).unwrap(),
            WORKOUTS.clone()
        );
    }

    #[rstest]
    #[case(domain::Window::Week, 2)]
    #[case(domain::Window::Month, 5)]
    fn test_settings(#[case] window: domain::Window, #[case] suggestions: usize) {
        let settings = domain::Settings {
            window,
            suggestions_per_muscle_group: suggestions,
        };
        assert_eq!(
            decode_settings(&encode_settings(settings).unwrap()).unwrap(),
            settings
        );
    }

    #[test]
    fn test_decode_settings_unsupported_window() {
        assert!(matches!(
            decode_settings(r#"{"window_days": 10, "suggestions_per_muscle_group": 5}"#),
            Err(JsonError::Window(domain::WindowError::Unsupported(10)))
        ));
    }
}
