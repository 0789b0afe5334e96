use chrono::NaiveDate;
use log::{debug, error, info};

use crate::{
    AnalysisService, CatalogRepository, CatalogService, CreateError, DeleteError, Exercise,
    MuscleOverview, ReadError, Settings, SettingsRepository, SettingsService, UpdateError,
    Workout, WorkoutDraft, WorkoutID, WorkoutRepository, WorkoutService, analyze, heatmap,
    suggest, underworked,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NotFound) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(
            self.repository.read_workouts(),
            ReadError,
            "get",
            "workouts"
        )
    }

    fn save_workout(&self, draft: WorkoutDraft) -> Result<Workout, CreateError> {
        let workout = match draft.save(WorkoutID::new()) {
            Ok(workout) => workout,
            Err(err) => {
                debug!("rejected workout: {err}");
                return Err(err.into());
            }
        };
        log_on_error!(
            self.repository.create_workout(workout),
            CreateError,
            "create",
            "workout"
        )
    }

    fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
        log_on_error!(
            self.repository.delete_workout(id),
            DeleteError,
            "delete",
            "workout"
        )
    }
}

impl<R: CatalogRepository> CatalogService for Service<R> {
    fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises(),
            ReadError,
            "get",
            "exercises"
        )
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    fn get_settings(&self) -> Result<Settings, ReadError> {
        log_on_error!(
            self.repository.read_settings(),
            ReadError,
            "get",
            "settings"
        )
    }

    fn set_settings(&self, settings: Settings) -> Result<Settings, UpdateError> {
        log_on_error!(
            self.repository.write_settings(settings),
            UpdateError,
            "set",
            "settings"
        )
    }
}

impl<R> AnalysisService for Service<R>
where
    R: WorkoutRepository + CatalogRepository + SettingsRepository,
{
    fn get_muscle_overview(&self, today: NaiveDate) -> Result<MuscleOverview, ReadError> {
        let settings = self.get_settings()?;
        let workouts = self.get_workouts()?;
        let catalog = self.get_exercises()?;

        let stats = analyze(&workouts, settings.window, today);
        let heatmap = heatmap(&stats, settings.window);
        let underworked = underworked(&stats, today);
        let suggestions = suggest(
            &underworked,
            &catalog,
            settings.suggestions_per_muscle_group,
        );

        info!(
            "{} of {} muscle groups underworked, {} suggestions",
            underworked.len(),
            stats.len(),
            suggestions.len()
        );

        Ok(MuscleOverview {
            window: settings.window,
            stats,
            heatmap,
            underworked,
            suggestions,
        })
    }
}
