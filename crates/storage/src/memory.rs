//! In-process storage keeping every collection as JSON document.

use std::{
    collections::{BTreeMap, VecDeque},
    sync::{Mutex, MutexGuard},
};

use liftlog_domain::{
    CatalogRepository, CreateError, DeleteError, Exercise, ReadError, Settings,
    SettingsRepository, StorageError, UpdateError, Workout, WorkoutID, WorkoutRepository,
};

use crate::{
    json::{self, JsonError},
    log,
};

const KEY_CATALOG: &str = "catalog";
const KEY_WORKOUTS: &str = "workouts";
const KEY_SETTINGS: &str = "settings";
const KEY_LOG: &str = "log";

const MAX_LOG_ENTRIES: usize = 100;

#[derive(Debug, Default)]
pub struct Storage {
    documents: Mutex<BTreeMap<&'static str, String>>,
}

impl Storage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage providing the given JSON document as exercise catalog.
    ///
    /// The catalog is decoded on every read, so an invalid document only
    /// results in an error when the exercises are requested.
    #[must_use]
    pub fn with_catalog(catalog: &str) -> Self {
        Self {
            documents: Mutex::new(BTreeMap::from([(KEY_CATALOG, catalog.to_string())])),
        }
    }

    fn documents(&self) -> Result<MutexGuard<'_, BTreeMap<&'static str, String>>, StorageError> {
        self.documents.lock().map_err(|_| StorageError::Unavailable)
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.documents()?.get(key).cloned())
    }

    fn set(&self, key: &'static str, value: String) -> Result<(), StorageError> {
        self.documents()?.insert(key, value);
        Ok(())
    }

    fn workouts(&self) -> Result<Vec<Workout>, StorageError> {
        match self.get(KEY_WORKOUTS)? {
            Some(document) => json::decode_workouts(&document).map_err(storage_error),
            None => Ok(vec![]),
        }
    }

    fn set_workouts(&self, workouts: &[Workout]) -> Result<(), StorageError> {
        self.set(
            KEY_WORKOUTS,
            json::encode_workouts(workouts).map_err(storage_error)?,
        )
    }
}

fn storage_error(err: JsonError) -> StorageError {
    StorageError::Other(Box::new(err))
}

impl CatalogRepository for Storage {
    fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        match self.get(KEY_CATALOG)? {
            Some(document) => Ok(json::decode_catalog(&document).map_err(storage_error)?),
            None => Ok(vec![]),
        }
    }
}

impl WorkoutRepository for Storage {
    fn read_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        Ok(self.workouts()?)
    }

    fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError> {
        let mut workouts = self.workouts()?;
        if workouts.iter().any(|w| w.id == workout.id) {
            return Err(CreateError::Conflict);
        }
        workouts.push(workout.clone());
        self.set_workouts(&workouts)?;
        Ok(workout)
    }

    fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
        let mut workouts = self.workouts()?;
        let Some(index) = workouts.iter().position(|w| w.id == id) else {
            return Err(StorageError::NotFound.into());
        };
        workouts.remove(index);
        self.set_workouts(&workouts)?;
        Ok(id)
    }
}

impl SettingsRepository for Storage {
    fn read_settings(&self) -> Result<Settings, ReadError> {
        match self.get(KEY_SETTINGS)? {
            Some(document) => Ok(json::decode_settings(&document).map_err(storage_error)?),
            None => Ok(Settings::default()),
        }
    }

    fn write_settings(&self, settings: Settings) -> Result<Settings, UpdateError> {
        self.set(
            KEY_SETTINGS,
            json::encode_settings(settings).map_err(storage_error)?,
        )?;
        Ok(settings)
    }
}

/// Log entries in reverse chronological order, limited to the most recent ones.
#[derive(Debug, Default)]
pub struct Log {
    storage: Storage,
}

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match self
            .storage
            .get(KEY_LOG)
            .map_err(|err| log::Error::Unknown(err.to_string()))?
        {
            Some(document) => serde_json::from_str(&document)
                .map_err(|err| log::Error::Unknown(err.to_string())),
            None => Ok(VecDeque::new()),
        }
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(MAX_LOG_ENTRIES);
        let document =
            serde_json::to_string(&entries).map_err(|err| log::Error::Unknown(err.to_string()))?;
        self.storage
            .set(KEY_LOG, document)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
