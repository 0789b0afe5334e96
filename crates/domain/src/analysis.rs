use std::{
    collections::{BTreeMap, BTreeSet},
    slice::Iter,
};

use chrono::{Days, NaiveDate};
use log::debug;

use crate::{HeatLevel, MuscleGroup, Property, ReadError, Suggestion, Workout};

pub trait AnalysisService {
    fn get_muscle_overview(&self, today: NaiveDate) -> Result<MuscleOverview, ReadError>;
}

/// Result of a complete analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct MuscleOverview {
    pub window: Window,
    pub stats: BTreeMap<MuscleGroup, MuscleGroupStat>,
    pub heatmap: BTreeMap<MuscleGroup, HeatLevel>,
    pub underworked: Vec<MuscleGroup>,
    pub suggestions: Vec<Suggestion>,
}

/// Period considered for the analysis.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Window {
    #[default]
    Week = 7,
    Fortnight = 14,
    Month = 30,
}

impl Window {
    #[must_use]
    pub fn days(self) -> u64 {
        self as u64
    }

    /// Engagement which must be reached for a hot and a warm heat level.
    ///
    /// The thresholds grow linearly with the length of the window.
    #[must_use]
    pub fn thresholds(self) -> (f32, f32) {
        match self {
            Window::Week => (6.0, 2.0),
            Window::Fortnight => (12.0, 4.0),
            Window::Month => (24.0, 8.0),
        }
    }

    /// First day which is part of the window ending at `today`.
    #[must_use]
    pub fn cutoff(self, today: NaiveDate) -> NaiveDate {
        today.checked_sub_days(Days::new(self.days())).unwrap_or(NaiveDate::MIN)
    }
}

impl Property for Window {
    fn iter() -> Iter<'static, Window> {
        static WINDOWS: [Window; 3] = [Window::Week, Window::Fortnight, Window::Month];
        WINDOWS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Window::Week => "7 days",
            Window::Fortnight => "14 days",
            Window::Month => "30 days",
        }
    }
}

impl From<Window> for u32 {
    fn from(value: Window) -> Self {
        value as u32
    }
}

impl TryFrom<u32> for Window {
    type Error = WindowError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            7 => Ok(Window::Week),
            14 => Ok(Window::Fortnight),
            30 => Ok(Window::Month),
            _ => Err(WindowError::Unsupported(value)),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Window must be 7, 14 or 30 days ({0} days)")]
    Unsupported(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MuscleGroupStat {
    pub muscle_group: MuscleGroup,
    pub engagement: f32,
    pub last_worked: Option<NaiveDate>,
    pub exercise_count: u32,
}

impl MuscleGroupStat {
    #[must_use]
    pub fn new(muscle_group: MuscleGroup) -> Self {
        Self {
            muscle_group,
            engagement: 0.0,
            last_worked: None,
            exercise_count: 0,
        }
    }

    fn touch(&mut self, date: NaiveDate) {
        if self.last_worked.is_none_or(|last_worked| date > last_worked) {
            self.last_worked = Some(date);
        }
    }
}

/// Accumulate the engagement of each tracked muscle group.
///
/// Only workouts dated on or after the first day of the window are
/// considered. Primary muscles receive the full engagement weight of an
/// exercise, secondary muscles half of it. The result contains an entry for
/// every tracked muscle group.
///
/// Workouts are accumulated in order of date and id, so the result does not
/// depend on the order of the input.
#[must_use]
pub fn analyze(
    workouts: &[Workout],
    window: Window,
    today: NaiveDate,
) -> BTreeMap<MuscleGroup, MuscleGroupStat> {
    let mut stats = MuscleGroup::tracked()
        .map(|m| (m, MuscleGroupStat::new(m)))
        .collect::<BTreeMap<_, _>>();
    let cutoff = window.cutoff(today);
    let mut workouts = workouts
        .iter()
        .filter(|w| w.date >= cutoff)
        .collect::<Vec<_>>();
    workouts.sort_by_key(|w| (w.date, w.id));

    debug!(
        "analyzing {} workouts since {cutoff} ({})",
        workouts.len(),
        window.name()
    );

    for workout in workouts {
        for exercise in &workout.exercises {
            let classification = exercise.classify();
            let engagement = exercise.engagement_weight();
            let mut touched = BTreeSet::new();

            for muscle_group in &classification.primary {
                if let Some(stat) = stats.get_mut(muscle_group) {
                    stat.engagement += engagement;
                    stat.touch(workout.date);
                    touched.insert(*muscle_group);
                }
            }

            for muscle_group in &classification.secondary {
                if let Some(stat) = stats.get_mut(muscle_group) {
                    stat.engagement += engagement / 2.0;
                    stat.touch(workout.date);
                    touched.insert(*muscle_group);
                }
            }

            for muscle_group in touched {
                if let Some(stat) = stats.get_mut(&muscle_group) {
                    stat.exercise_count += 1;
                }
            }
        }
    }

    stats
}
