use crate::{ReadError, UpdateError, WeightFormatter, WeightUnit};

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, ReadError>;
    async fn set_settings(&self, settings: Settings) -> Result<Settings, UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, ReadError>;
    async fn write_settings(&self, settings: Settings) -> Result<Settings, UpdateError>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub weight_unit: WeightUnit,
}

impl Settings {
    #[must_use]
    pub fn formatter(self) -> WeightFormatter<impl Fn(f32) -> f32> {
        self.weight_unit.formatter()
    }
}
