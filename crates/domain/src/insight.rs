use strum::{AsRefStr, Display};

use crate::{ExerciseName, Reps, Weight};

#[derive(Debug, Display, AsRefStr, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum InsightKind {
    WeightStagnation,
    PerformanceDecline,
    FailedProgression,
    VolumePlateau,
    PerfectStagnation,
}

#[derive(Debug, Display, AsRefStr, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Severity {
    #[must_use]
    pub fn rank(self) -> u8 {
        self as u8
    }
}

/// Coaching suggestion for a single exercise.
///
/// `suggested_weight` is always in the stored unit. Only the text fields are
/// rendered in the unit preferred by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub kind: InsightKind,
    pub exercise_name: ExerciseName,
    pub pattern: String,
    pub message: String,
    pub confidence: String,
    pub suggestion: String,
    pub reasoning: String,
    pub suggested_weight: Weight,
    pub suggested_reps: Reps,
    pub severity: Severity,
}

/// Sort insights from most to least severe.
///
/// The sort is stable, so insights of equal severity keep their order.
pub fn rank_by_severity(insights: &mut [Insight]) {
    insights.sort_by(|a, b| b.severity.cmp(&a.severity));
}
