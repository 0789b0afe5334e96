use crate::{ReadError, UpdateError, Window};

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, ReadError>;
    fn write_settings(&self, settings: Settings) -> Result<Settings, UpdateError>;
}

pub trait SettingsService {
    fn get_settings(&self) -> Result<Settings, ReadError>;
    fn set_settings(&self, settings: Settings) -> Result<Settings, UpdateError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub window: Window,
    pub suggestions_per_muscle_group: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: Window::Week,
            suggestions_per_muscle_group: 5,
        }
    }
}
