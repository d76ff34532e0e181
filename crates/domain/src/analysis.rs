use std::collections::HashSet;

use log::debug;
use strum::{EnumIter, IntoEnumIterator};

use crate::{
    ExerciseName, ExerciseSample, Insight, MIN_SAMPLES, WeightFormatter, Workout, chronological,
    detect_failed_progression, detect_perfect_stagnation, detect_performance_decline,
    detect_volume_plateau, detect_weight_stagnation, exercise_history, rank_by_severity,
};

/// Number of most recent workouts scanned for exercise names.
pub const RECENT_WORKOUTS: usize = 10;

/// Maximum number of insights in a progress report.
pub const MAX_INSIGHTS: usize = 5;

const NO_ISSUES_MESSAGE: &str =
    "You're making great progress! Keep up the excellent momentum. 🚀";
const NO_ISSUES_SUGGESTION: &str = "Continue your current routine and consider tracking your lifts to identify future optimization opportunities.";

/// Stagnation detectors in priority order.
///
/// If several detectors report the same severity, the one listed first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Detector {
    WeightStagnation,
    PerformanceDecline,
    FailedProgression,
    PerfectStagnation,
    VolumePlateau,
}

impl Detector {
    #[must_use]
    pub fn detect(
        self,
        exercise_name: &ExerciseName,
        samples: &[ExerciseSample],
        formatter: &WeightFormatter<impl Fn(f32) -> f32>,
    ) -> Option<Insight> {
        match self {
            Detector::WeightStagnation => {
                detect_weight_stagnation(exercise_name, samples, formatter)
            }
            Detector::PerformanceDecline => {
                detect_performance_decline(exercise_name, samples, formatter)
            }
            Detector::FailedProgression => {
                detect_failed_progression(exercise_name, samples, formatter)
            }
            Detector::PerfectStagnation => {
                detect_perfect_stagnation(exercise_name, samples, formatter)
            }
            Detector::VolumePlateau => detect_volume_plateau(exercise_name, samples, formatter),
        }
    }
}

/// Find the most severe stagnation pattern of a single exercise.
///
/// Exercises with less than `MIN_SAMPLES` samples are not analyzed. Only one insight
/// is returned even if several patterns match.
#[must_use]
pub fn analyze_exercise(
    exercise_name: &str,
    workouts: &[Workout],
    formatter: &WeightFormatter<impl Fn(f32) -> f32>,
) -> Option<Insight> {
    let samples = exercise_history(workouts, exercise_name);

    if samples.len() < MIN_SAMPLES {
        debug!(
            "skipping analysis of {exercise_name}: {} of {MIN_SAMPLES} required samples",
            samples.len()
        );
        return None;
    }

    let name = ExerciseName::new(exercise_name);
    let mut insights = Detector::iter()
        .filter_map(|detector| detector.detect(&name, &samples, formatter))
        .collect::<Vec<_>>();

    rank_by_severity(&mut insights);

    let insight = insights.into_iter().next();
    if let Some(insight) = &insight {
        debug!("{exercise_name}: {} ({})", insight.kind, insight.severity);
    }
    insight
}

/// Analyze every exercise of the recent workouts.
///
/// Exercise names are compared case-insensitively, the first spelling encountered is
/// used for the analysis.
#[must_use]
pub fn analyze_all_exercises(
    workouts: &[Workout],
    formatter: &WeightFormatter<impl Fn(f32) -> f32>,
) -> ProgressReport {
    let sorted = chronological(workouts);
    let recent = &sorted[sorted.len().saturating_sub(RECENT_WORKOUTS)..];

    let mut keys = HashSet::new();
    let exercise_names = recent
        .iter()
        .flat_map(|w| w.exercises.iter().map(|e| &e.name))
        .filter(|name| keys.insert(name.key()))
        .collect::<Vec<_>>();
    let total_exercises_analyzed = exercise_names.len();

    let mut issues = exercise_names
        .iter()
        .filter_map(|name| analyze_exercise(name.as_str(), workouts, formatter))
        .collect::<Vec<_>>();

    if issues.is_empty() {
        return ProgressReport::NoIssues {
            message: NO_ISSUES_MESSAGE.to_string(),
            suggestion: NO_ISSUES_SUGGESTION.to_string(),
            total_exercises_analyzed,
        };
    }

    rank_by_severity(&mut issues);
    issues.truncate(MAX_INSIGHTS);

    debug!(
        "{} of {total_exercises_analyzed} exercises need attention",
        issues.len()
    );

    ProgressReport::Issues {
        summary: summary(issues.len()),
        issues,
        total_exercises_analyzed,
    }
}

fn summary(count: usize) -> String {
    format!(
        "{count} optimization {} detected",
        if count == 1 {
            "opportunity"
        } else {
            "opportunities"
        }
    )
}

/// Result of analyzing all exercises.
///
/// `Issues` always contains at least one insight, ordered from most to least severe.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressReport {
    NoIssues {
        message: String,
        suggestion: String,
        total_exercises_analyzed: usize,
    },
    Issues {
        issues: Vec<Insight>,
        summary: String,
        total_exercises_analyzed: usize,
    },
}

impl ProgressReport {
    #[must_use]
    pub fn has_issues(&self) -> bool {
        matches!(self, ProgressReport::Issues { .. })
    }

    #[must_use]
    pub fn primary_issue(&self) -> Option<&Insight> {
        self.all_issues().first()
    }

    #[must_use]
    pub fn all_issues(&self) -> &[Insight] {
        match self {
            ProgressReport::NoIssues { .. } => &[],
            ProgressReport::Issues { issues, .. } => issues,
        }
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        match self {
            ProgressReport::NoIssues { .. } => None,
            ProgressReport::Issues { summary, .. } => Some(summary),
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            ProgressReport::NoIssues { message, .. } => Some(message),
            ProgressReport::Issues { .. } => None,
        }
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            ProgressReport::NoIssues { suggestion, .. } => Some(suggestion),
            ProgressReport::Issues { .. } => None,
        }
    }

    #[must_use]
    pub fn total_exercises_analyzed(&self) -> usize {
        match self {
            ProgressReport::NoIssues {
                total_exercises_analyzed,
                ..
            }
            | ProgressReport::Issues {
                total_exercises_analyzed,
                ..
            } => *total_exercises_analyzed,
        }
    }
}
