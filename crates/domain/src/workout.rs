use std::collections::BTreeMap;

use chrono::NaiveDate;
use derive_more::{Deref, Display, Into};
use uuid::Uuid;

use crate::{CreateError, DeleteError, Exercise, ReadError};

pub trait WorkoutRepository {
    fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError>;
    fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

pub trait WorkoutService {
    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    fn save_workout(&self, draft: WorkoutDraft) -> Result<Workout, CreateError>;
    fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

/// A logged workout.
///
/// Workouts only enter the history through [`WorkoutDraft::save`], which
/// guarantees that at least one exercise is present.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub date: NaiveDate,
    pub exercises: Vec<WorkoutExercise>,
}

impl Workout {
    #[must_use]
    pub fn volume(&self) -> f32 {
        self.exercises.iter().map(WorkoutExercise::volume).sum()
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Snapshot of a catalog exercise together with the sets performed.
///
/// Later changes of the catalog do not affect logged exercises.
#[derive(Deref, Debug, Clone, PartialEq)]
pub struct WorkoutExercise {
    #[deref]
    pub exercise: Exercise,
    pub sets: Vec<Set>,
}

impl WorkoutExercise {
    const VOLUME_SCALE: f32 = 1000.0;
    const FALLBACK_ENGAGEMENT: f32 = 1.0;

    #[must_use]
    pub fn new(exercise: &Exercise) -> Self {
        Self {
            exercise: exercise.clone(),
            sets: vec![Set::default()],
        }
    }

    #[must_use]
    pub fn volume(&self) -> f32 {
        self.sets.iter().map(Set::volume).sum()
    }

    /// Contribution of this exercise to the engagement of its primary muscles.
    ///
    /// Exercises without any volume (e.g., body weight exercises) count with a
    /// flat weight of 1. A volume exceeding the range of `f32` yields an
    /// infinite weight, which saturates the engagement of the muscle groups.
    #[must_use]
    pub fn engagement_weight(&self) -> f32 {
        let normalized_volume = self.volume() / Self::VOLUME_SCALE;
        if normalized_volume > 0.0 {
            normalized_volume
        } else {
            Self::FALLBACK_ENGAGEMENT
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Set {
    pub reps: Reps,
    pub weight: Weight,
}

impl Set {
    /// Product of reps and weight, infinite if it exceeds the range of `f32`.
    #[must_use]
    pub fn volume(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let reps = u32::from(self.reps) as f32;
        reps * f32::from(self.weight)
    }
}

impl Default for Set {
    fn default() -> Self {
        Self {
            reps: Reps(10),
            weight: Weight(0.0),
        }
    }
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl From<u32> for Reps {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Ok(Reps(parsed_value)),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be a non-negative integer")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !value.is_finite() {
            return Err(WeightError::NotFinite);
        }

        if value < 0.0 {
            return Err(WeightError::Negative);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must not be negative")]
    Negative,
    #[error("Weight must be a finite number")]
    NotFinite,
    #[error("Weight must be a decimal")]
    ParseError,
}

/// Workout which is still being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDraft {
    pub date: NaiveDate,
    pub exercises: Vec<WorkoutExercise>,
}

impl WorkoutDraft {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            exercises: vec![],
        }
    }

    pub fn add_exercise(&mut self, exercise: &Exercise) {
        self.exercises.push(WorkoutExercise::new(exercise));
    }

    pub fn remove_exercise(&mut self, index: usize) -> Result<WorkoutExercise, WorkoutError> {
        if index >= self.exercises.len() {
            return Err(WorkoutError::ExerciseNotFound(index));
        }
        Ok(self.exercises.remove(index))
    }

    /// Append a set which repeats the values of the previous set.
    pub fn add_set(&mut self, exercise_index: usize) -> Result<(), WorkoutError> {
        let exercise = self.exercise_mut(exercise_index)?;
        let set = exercise.sets.last().copied().unwrap_or_default();
        exercise.sets.push(set);
        Ok(())
    }

    pub fn update_set(
        &mut self,
        exercise_index: usize,
        set_index: usize,
        set: Set,
    ) -> Result<(), WorkoutError> {
        let exercise = self.exercise_mut(exercise_index)?;
        match exercise.sets.get_mut(set_index) {
            Some(s) => {
                *s = set;
                Ok(())
            }
            None => Err(WorkoutError::SetNotFound(set_index)),
        }
    }

    pub fn remove_set(
        &mut self,
        exercise_index: usize,
        set_index: usize,
    ) -> Result<Set, WorkoutError> {
        let exercise = self.exercise_mut(exercise_index)?;
        if set_index >= exercise.sets.len() {
            return Err(WorkoutError::SetNotFound(set_index));
        }
        Ok(exercise.sets.remove(set_index))
    }

    pub fn save(self, id: WorkoutID) -> Result<Workout, WorkoutError> {
        if self.exercises.is_empty() {
            return Err(WorkoutError::NoExercises);
        }

        Ok(Workout {
            id,
            date: self.date,
            exercises: self.exercises,
        })
    }

    fn exercise_mut(&mut self, index: usize) -> Result<&mut WorkoutExercise, WorkoutError> {
        self.exercises
            .get_mut(index)
            .ok_or(WorkoutError::ExerciseNotFound(index))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkoutError {
    #[error("workout contains no exercises")]
    NoExercises,
    #[error("no exercise at position {0}")]
    ExerciseNotFound(usize),
    #[error("no set at position {0}")]
    SetNotFound(usize),
}

/// Group workouts by date, starting with the most recent date.
#[must_use]
pub fn workouts_by_date(workouts: &[Workout]) -> Vec<(NaiveDate, Vec<&Workout>)> {
    let mut dates: BTreeMap<NaiveDate, Vec<&Workout>> = BTreeMap::new();

    for workout in workouts {
        dates.entry(workout.date).or_default().push(workout);
    }

    dates.into_iter().rev().collect()
}
