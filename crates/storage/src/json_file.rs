use std::{
    collections::VecDeque,
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, NaiveDate, Utc};
use liftlog_domain as domain;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use strum::AsRefStr;

/// Repository storing each store as a JSON document in a data directory.
///
/// Missing files are treated as empty stores. Writes replace the whole document.
#[derive(Debug, Clone)]
pub struct JsonFile {
    dir: PathBuf,
}

impl JsonFile {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, store: &Store) -> PathBuf {
        self.dir.join(format!("{}.json", store.as_ref()))
    }

    pub fn read<V: DeserializeOwned + Default>(&self, store: &Store) -> Result<V, JsonFileError> {
        let path = self.path(store);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("{} does not exist", path.display());
                Ok(V::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn read_all<R, V>(&self, store: &Store) -> Result<Vec<R>, JsonFileError>
    where
        R: From<V>,
        V: DeserializeOwned,
    {
        Ok(self
            .read::<Vec<V>>(store)?
            .into_iter()
            .map(R::from)
            .collect())
    }

    /// Write a document through a temporary file, so that readers never see a partial
    /// document.
    pub fn write<V: Serialize + ?Sized>(
        &self,
        store: &Store,
        value: &V,
    ) -> Result<(), JsonFileError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path(store);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, serde_json::to_vec_pretty(value)?)?;
        fs::rename(&tmp_path, &path)?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}

impl domain::WorkoutRepository for JsonFile {
    async fn read_workouts(&self) -> Result<Vec<domain::Workout>, domain::ReadError> {
        Ok(self.read_all::<domain::Workout, Workout>(&Store::Workouts)?)
    }

    async fn create_workout(
        &self,
        workout: domain::Workout,
    ) -> Result<domain::Workout, domain::CreateError> {
        let mut workouts = self.read::<Vec<Workout>>(&Store::Workouts)?;
        let new = Workout::from(&workout);
        if workouts
            .iter()
            .any(|w| w.template_key == new.template_key && w.completed_at == new.completed_at)
        {
            return Err(domain::CreateError::Conflict);
        }
        workouts.push(new);
        self.write(&Store::Workouts, &workouts)?;
        Ok(workout)
    }
}

impl domain::TemplateRepository for JsonFile {
    async fn read_templates(&self) -> Result<Vec<domain::Template>, domain::ReadError> {
        Ok(self.read_all::<domain::Template, Template>(&Store::Templates)?)
    }

    async fn create_template(
        &self,
        template: domain::Template,
    ) -> Result<domain::Template, domain::CreateError> {
        let mut templates = self.read::<Vec<Template>>(&Store::Templates)?;
        if templates.iter().any(|t| t.key == *template.key) {
            return Err(domain::CreateError::Conflict);
        }
        templates.push(Template::from(&template));
        self.write(&Store::Templates, &templates)?;
        Ok(template)
    }

    async fn replace_template(
        &self,
        template: domain::Template,
    ) -> Result<domain::Template, domain::UpdateError> {
        let mut templates = self.read::<Vec<Template>>(&Store::Templates)?;
        let Some(existing) = templates.iter_mut().find(|t| t.key == *template.key) else {
            return Err(domain::UpdateError::NotFound);
        };
        *existing = Template::from(&template);
        self.write(&Store::Templates, &templates)?;
        Ok(template)
    }
}

impl domain::SettingsRepository for JsonFile {
    async fn read_settings(&self) -> Result<domain::Settings, domain::ReadError> {
        Ok(self.read::<Settings>(&Store::Settings)?.into())
    }

    async fn write_settings(
        &self,
        settings: domain::Settings,
    ) -> Result<domain::Settings, domain::UpdateError> {
        self.write(&Store::Settings, &Settings::from(settings))?;
        Ok(settings)
    }
}

const MAX_LOG_ENTRIES: usize = 100;

impl crate::log::Repository for JsonFile {
    fn read_entries(&self) -> Result<VecDeque<crate::log::Entry>, crate::log::Error> {
        self.read(&Store::Log)
            .map_err(|err| crate::log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: crate::log::Entry) -> Result<(), crate::log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(MAX_LOG_ENTRIES);
        self.write(&Store::Log, &entries)
            .map_err(|err| crate::log::Error::Unknown(err.to_string()))
    }
}

#[derive(thiserror::Error, Debug)]
pub enum JsonFileError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<JsonFileError> for domain::StorageError {
    fn from(value: JsonFileError) -> Self {
        match value {
            JsonFileError::Io(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                domain::StorageError::Unavailable
            }
            JsonFileError::Io(err) => domain::StorageError::Other(err.into()),
            JsonFileError::Json(err) => domain::StorageError::Corrupted(err.to_string()),
        }
    }
}

impl From<JsonFileError> for domain::ReadError {
    fn from(value: JsonFileError) -> Self {
        domain::ReadError::Storage(value.into())
    }
}

impl From<JsonFileError> for domain::CreateError {
    fn from(value: JsonFileError) -> Self {
        domain::CreateError::Storage(value.into())
    }
}

impl From<JsonFileError> for domain::UpdateError {
    fn from(value: JsonFileError) -> Self {
        domain::UpdateError::Storage(value.into())
    }
}

#[derive(AsRefStr)]
pub enum Store {
    #[strum(serialize = "workouts")]
    Workouts,
    #[strum(serialize = "templates")]
    Templates,
    #[strum(serialize = "settings")]
    Settings,
    #[strum(serialize = "log")]
    Log,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Workout {
    #[serde(rename = "type", default)]
    template_key: String,
    #[serde(default)]
    template_name: String,
    date: NaiveDate,
    #[serde(default)]
    exercises: Vec<ExerciseEntry>,
    #[serde(default)]
    volume: Option<f32>,
    #[serde(default)]
    completed_at: DateTime<Utc>,
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            template_key: value.template_key.to_string(),
            template_name: value.template_name.clone(),
            date: value.date,
            exercises: value.exercises.iter().map(ExerciseEntry::from).collect(),
            volume: Some(value.volume),
            completed_at: value.completed_at,
        }
    }
}

impl From<Workout> for domain::Workout {
    fn from(value: Workout) -> Self {
        let exercises = value
            .exercises
            .into_iter()
            .map(domain::ExerciseEntry::from)
            .collect::<Vec<_>>();
        Self {
            template_key: value.template_key.into(),
            template_name: value.template_name,
            date: value.date,
            volume: value
                .volume
                .unwrap_or_else(|| domain::total_volume(&exercises)),
            exercises,
            completed_at: value.completed_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct ExerciseEntry {
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "lenient_count")]
    sets: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    reps: Option<u32>,
    #[serde(default, deserialize_with = "lenient_weight")]
    weight: Option<f32>,
}

/// Accept a non-negative integer or a string holding one. Anything else reads as absent.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(number) => {
            number.as_u64().and_then(|number| u32::try_from(number).ok())
        }
        serde_json::Value::String(string) => string.trim().parse().ok(),
        _ => None,
    })
}

/// Accept a number or a string holding one. Anything else reads as absent.
#[allow(clippy::cast_possible_truncation)]
fn lenient_weight<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f32>, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(number) => number.as_f64().map(|number| number as f32),
        serde_json::Value::String(string) => string.trim().parse().ok(),
        _ => None,
    })
}

impl From<&domain::ExerciseEntry> for ExerciseEntry {
    fn from(value: &domain::ExerciseEntry) -> Self {
        Self {
            name: value.name.to_string(),
            sets: Some(value.sets.into()),
            reps: Some(value.reps.into()),
            weight: Some(value.weight.into()),
        }
    }
}

impl From<ExerciseEntry> for domain::ExerciseEntry {
    fn from(value: ExerciseEntry) -> Self {
        Self {
            name: domain::ExerciseName::new(&value.name),
            sets: domain::Sets::new(value.sets.unwrap_or_default()).unwrap_or_default(),
            reps: domain::Reps::new(value.reps.unwrap_or_default()).unwrap_or_default(),
            weight: domain::Weight::new(value.weight.unwrap_or_default()).unwrap_or_default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct Template {
    key: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    exercises: Vec<ExerciseEntry>,
}

impl From<&domain::Template> for Template {
    fn from(value: &domain::Template) -> Self {
        Self {
            key: value.key.to_string(),
            name: value.name.clone(),
            exercises: value.exercises.iter().map(ExerciseEntry::from).collect(),
        }
    }
}

impl From<Template> for domain::Template {
    fn from(value: Template) -> Self {
        Self {
            key: value.key.into(),
            name: value.name,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::ExerciseEntry::from)
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct Settings {
    #[serde(default)]
    use_kg: bool,
}

impl From<domain::Settings> for Settings {
    fn from(value: domain::Settings) -> Self {
        Self {
            use_kg: value.weight_unit.is_kg(),
        }
    }
}

impl From<Settings> for domain::Settings {
    fn from(value: Settings) -> Self {
        Self {
            weight_unit: domain::WeightUnit::from_use_kg(value.use_kg),
        }
    }
}
