use log::{debug, error, warn};

use crate::{
    CreateError, Insight, ProgressReport, ReadError, Settings, SettingsRepository,
    SettingsService, Template, TemplateRepository, TemplateService, UpdateError, Workout,
    WorkoutRepository, WorkoutService, template_for_exercise,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R>
where
    R: WorkoutRepository + TemplateRepository + SettingsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Analyze all recent exercises, with texts in the unit preferred by the user.
    pub async fn get_progress_report(&self) -> Result<ProgressReport, ReadError> {
        let settings = self.get_settings().await?;
        let workouts = self.get_workouts().await?;
        Ok(self.analyze_all_exercises(&workouts, &settings.formatter()))
    }

    pub async fn get_exercise_insight(
        &self,
        exercise_name: &str,
    ) -> Result<Option<Insight>, ReadError> {
        let settings = self.get_settings().await?;
        let workouts = self.get_workouts().await?;
        Ok(self.analyze_exercise(exercise_name, &workouts, &settings.formatter()))
    }

    /// Take over the suggestion of an insight into the template last used for the exercise.
    pub async fn accept_insight(&self, insight: &Insight) -> Result<Template, UpdateError> {
        let workouts = self.get_workouts().await?;
        let Some(template_key) = template_for_exercise(&workouts, insight.exercise_name.as_str())
        else {
            warn!("no workout contains {}", insight.exercise_name);
            return Err(UpdateError::NotFound);
        };

        let Some(mut template) = self
            .get_templates()
            .await?
            .into_iter()
            .find(|t| t.key == *template_key)
        else {
            warn!("template {template_key} does not exist");
            return Err(UpdateError::NotFound);
        };

        if template.apply_insight(insight) == 0 {
            warn!(
                "template {template_key} does not contain {}",
                insight.exercise_name
            );
            return Err(UpdateError::NotFound);
        }

        debug!(
            "updating {} in template {template_key} to {} x {}",
            insight.exercise_name, insight.suggested_reps, insight.suggested_weight
        );

        self.replace_template(template).await
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Unavailable) => {
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
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(self.repository.read_workouts(), ReadError, "get", "workouts")
    }

    async fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError> {
        log_on_error!(
            self.repository.create_workout(workout),
            CreateError,
            "create",
            "workout"
        )
    }
}

impl<R: TemplateRepository> TemplateService for Service<R> {
    async fn get_templates(&self) -> Result<Vec<Template>, ReadError> {
        log_on_error!(
            self.repository.read_templates(),
            ReadError,
            "get",
            "templates"
        )
    }

    async fn create_template(&self, template: Template) -> Result<Template, CreateError> {
        log_on_error!(
            self.repository.create_template(template),
            CreateError,
            "create",
            "template"
        )
    }

    async fn replace_template(&self, template: Template) -> Result<Template, UpdateError> {
        log_on_error!(
            self.repository.replace_template(template),
            UpdateError,
            "replace",
            "template"
        )
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    async fn get_settings(&self) -> Result<Settings, ReadError> {
        log_on_error!(
            self.repository.read_settings(),
            ReadError,
            "get",
            "settings"
        )
    }

    async fn set_settings(&self, settings: Settings) -> Result<Settings, UpdateError> {
        log_on_error!(
            self.repository.write_settings(settings),
            UpdateError,
            "set",
            "settings"
        )
    }
}
