use chrono::{DateTime, NaiveDate, Utc};
use derive_more::{Display, Into};

use crate::{
    CreateError, Insight, ProgressReport, ReadError, TemplateKey, WeightFormatter,
    analyze_all_exercises, analyze_exercise,
};

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError>;

    #[must_use]
    fn analyze_exercise(
        &self,
        exercise_name: &str,
        workouts: &[Workout],
        formatter: &WeightFormatter<impl Fn(f32) -> f32>,
    ) -> Option<Insight> {
        analyze_exercise(exercise_name, workouts, formatter)
    }

    #[must_use]
    fn analyze_all_exercises(
        &self,
        workouts: &[Workout],
        formatter: &WeightFormatter<impl Fn(f32) -> f32>,
    ) -> ProgressReport {
        analyze_all_exercises(workouts, formatter)
    }
}

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError>;
}

/// A finished logging session. Workouts are never modified once stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub template_key: TemplateKey,
    pub template_name: String,
    pub date: NaiveDate,
    pub exercises: Vec<ExerciseEntry>,
    pub volume: f32,
    pub completed_at: DateTime<Utc>,
}

impl Workout {
    #[must_use]
    pub fn new(
        template_key: TemplateKey,
        template_name: String,
        date: NaiveDate,
        exercises: Vec<ExerciseEntry>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            template_key,
            template_name,
            date,
            volume: total_volume(&exercises),
            exercises,
            completed_at,
        }
    }

    #[must_use]
    pub fn contains_exercise(&self, exercise_name: &str) -> bool {
        self.exercises.iter().any(|e| e.name.matches(exercise_name))
    }
}

#[must_use]
pub fn total_volume(exercises: &[ExerciseEntry]) -> f32 {
    exercises.iter().map(ExerciseEntry::volume).sum()
}

/// Order workouts by their date and, within a day, by completion time.
///
/// Workouts which share both keep their relative order.
#[must_use]
pub fn chronological(workouts: &[Workout]) -> Vec<&Workout> {
    let mut sorted = workouts.iter().collect::<Vec<_>>();
    sorted.sort_by_key(|w| (w.date, w.completed_at));
    sorted
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseEntry {
    pub name: ExerciseName,
    pub sets: Sets,
    pub reps: Reps,
    pub weight: Weight,
}

impl ExerciseEntry {
    #[must_use]
    pub fn total_reps(&self) -> u32 {
        u32::from(self.sets) * u32::from(self.reps)
    }

    #[must_use]
    pub fn volume(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let total_reps = self.total_reps() as f32;
        total_reps * f32::from(self.weight)
    }
}

/// Free-text exercise name as entered by the user.
///
/// Names are kept verbatim. Two names refer to the same exercise if they are equal
/// after lowercasing.
#[derive(Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseName(String);

impl ExerciseName {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn key(&self) -> String {
        self.0.to_lowercase()
    }

    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.key() == name.to_lowercase()
    }
}

impl From<&str> for ExerciseName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sets(u32);

impl Sets {
    pub const MAX: u32 = 99;

    pub fn new(value: u32) -> Result<Self, SetsError> {
        if value > Self::MAX {
            return Err(SetsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetsError {
    #[error("Sets must be in the range 0 to 99")]
    OutOfRange,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub const MAX: u32 = 999;

    pub fn new(value: u32) -> Result<Self, RepsError> {
        if value > Self::MAX {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn clamped(value: u32) -> Self {
        Self(value.min(Self::MAX))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
}

/// Weight in the stored unit (pounds).
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub const MAX: f32 = 9999.9;

    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..=Self::MAX).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn clamped(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(0.0, Self::MAX))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 9999.9")]
    OutOfRange,
}
