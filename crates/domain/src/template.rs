use derive_more::{Deref, Display};

use crate::{CreateError, ExerciseEntry, Insight, ReadError, UpdateError, Workout, chronological};

#[allow(async_fn_in_trait)]
pub trait TemplateService {
    async fn get_templates(&self) -> Result<Vec<Template>, ReadError>;
    async fn create_template(&self, template: Template) -> Result<Template, CreateError>;
    async fn replace_template(&self, template: Template) -> Result<Template, UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait TemplateRepository {
    async fn read_templates(&self) -> Result<Vec<Template>, ReadError>;
    async fn create_template(&self, template: Template) -> Result<Template, CreateError>;
    async fn replace_template(&self, template: Template) -> Result<Template, UpdateError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub key: TemplateKey,
    pub name: String,
    pub exercises: Vec<ExerciseEntry>,
}

impl Template {
    #[must_use]
    pub fn new(name: &str, exercises: Vec<ExerciseEntry>) -> Self {
        Self {
            key: TemplateKey::from_name(name),
            name: name.to_string(),
            exercises,
        }
    }

    /// Take over the suggested weight and reps for every entry of the exercise.
    ///
    /// Returns the number of updated entries.
    pub fn apply_insight(&mut self, insight: &Insight) -> usize {
        let mut updated = 0;
        for exercise in self
            .exercises
            .iter_mut()
            .filter(|e| e.name.matches(insight.exercise_name.as_str()))
        {
            exercise.weight = insight.suggested_weight;
            exercise.reps = insight.suggested_reps;
            updated += 1;
        }
        updated
    }
}

#[derive(Deref, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemplateKey(String);

impl TemplateKey {
    /// Derive a key from a display name, e.g. "Leg Day" becomes "leg_day".
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(
            name.split_whitespace()
                .map(str::to_lowercase)
                .collect::<Vec<_>>()
                .join("_"),
        )
    }
}

impl From<&str> for TemplateKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TemplateKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Key of the template used by the most recent workout containing the exercise.
#[must_use]
pub fn template_for_exercise<'a>(
    workouts: &'a [Workout],
    exercise_name: &str,
) -> Option<&'a TemplateKey> {
    chronological(workouts)
        .into_iter()
        .rev()
        .find(|w| w.contains_exercise(exercise_name))
        .map(|w| &w.template_key)
}
