use chrono::NaiveDate;

use crate::{ExerciseEntry, ExerciseName, Reps, Sets, Weight, Workout, chronological};

/// Number of most recent samples considered per exercise.
pub const ANALYSIS_WINDOW: usize = 8;

/// Number of samples required before an exercise is analyzed at all.
pub const MIN_SAMPLES: usize = 3;

/// Performance of one exercise in a single workout.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSample {
    pub name: ExerciseName,
    pub date: NaiveDate,
    pub sets: Sets,
    pub reps: Reps,
    pub weight: Weight,
    pub volume: f32,
    pub max_weight: Weight,
    pub total_reps: u32,
}

impl ExerciseSample {
    #[must_use]
    pub fn new(date: NaiveDate, entry: &ExerciseEntry) -> Self {
        Self {
            name: entry.name.clone(),
            date,
            sets: entry.sets,
            reps: entry.reps,
            weight: entry.weight,
            volume: entry.volume(),
            max_weight: entry.weight,
            total_reps: entry.total_reps(),
        }
    }
}

/// Collect the most recent samples of an exercise in chronological order.
///
/// Entries are matched case-insensitively. At most `ANALYSIS_WINDOW` samples are
/// returned.
#[must_use]
pub fn exercise_history(workouts: &[Workout], exercise_name: &str) -> Vec<ExerciseSample> {
    let mut samples = chronological(workouts)
        .into_iter()
        .flat_map(|w| {
            w.exercises
                .iter()
                .filter(move |e| e.name.matches(exercise_name))
                .map(move |e| ExerciseSample::new(w.date, e))
        })
        .collect::<Vec<_>>();
    let excess = samples.len().saturating_sub(ANALYSIS_WINDOW);
    samples.drain(..excess);
    samples
}
