use crate::{
    ExerciseName, ExerciseSample, Insight, InsightKind, Reps, Severity, Weight, WeightFormatter,
    linear_trend,
};

/// Detect a weight which does not move anymore.
///
/// Two patterns are recognized, the first match wins:
///
///  - Oscillation: exactly two distinct weights among the last six samples with at
///    least three changes between them.
///  - Extended plateau: the latest weight was used in at least four of the last five
///    samples.
#[must_use]
pub fn detect_weight_stagnation(
    exercise_name: &ExerciseName,
    samples: &[ExerciseSample],
    formatter: &WeightFormatter<impl Fn(f32) -> f32>,
) -> Option<Insight> {
    detect_oscillation(exercise_name, samples, formatter)
        .or_else(|| detect_extended_plateau(exercise_name, samples, formatter))
}

fn detect_oscillation(
    exercise_name: &ExerciseName,
    samples: &[ExerciseSample],
    formatter: &WeightFormatter<impl Fn(f32) -> f32>,
) -> Option<Insight> {
    let weights = recent(samples, 6)
        .iter()
        .map(|s| s.weight)
        .collect::<Vec<_>>();

    let mut distinct: Vec<Weight> = Vec::new();
    for weight in &weights {
        if !distinct.contains(weight) {
            distinct.push(*weight);
        }
    }
    let [first, second] = distinct.as_slice() else {
        return None;
    };

    let changes = weights.windows(2).filter(|w| w[0] != w[1]).count();
    if changes < 3 {
        return None;
    }

    let (first, second) = (f32::from(*first), f32::from(*second));
    let suggested_weight = Weight::clamped(first.max(second) + 5.0);
    let min_reps = recent(samples, 3)
        .iter()
        .map(|s| u32::from(s.reps))
        .min()
        .unwrap_or_default();

    Some(Insight {
        kind: InsightKind::WeightStagnation,
        exercise_name: exercise_name.clone(),
        pattern: format!(
            "Oscillating between {} and {}",
            formatter.weight_value(first),
            formatter.weight_value(second)
        ),
        message: format!(
            "You've mastered the {} range! Your form and consistency are solid.",
            formatter.weight_value(((first + second) / 2.0).round())
        ),
        confidence: String::from(
            "Oscillating weights shows you're right at your progression threshold - perfect timing to push forward.",
        ),
        suggestion: format!(
            "Try {} for 3-4 reps, then work back up to your target rep range",
            formatter.weight(suggested_weight)
        ),
        reasoning: String::from(
            "Small weight jumps with lower reps help break through plateaus while maintaining good form",
        ),
        suggested_weight,
        suggested_reps: Reps::clamped(min_reps.saturating_sub(2).max(4)),
        severity: Severity::High,
    })
}

fn detect_extended_plateau(
    exercise_name: &ExerciseName,
    samples: &[ExerciseSample],
    formatter: &WeightFormatter<impl Fn(f32) -> f32>,
) -> Option<Insight> {
    let last_weight = samples.last()?.weight;
    let same_weight_count = recent(samples, 5)
        .iter()
        .filter(|s| s.weight == last_weight)
        .count();

    if same_weight_count < 4 {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let avg_reps = recent(samples, 4)
        .iter()
        .map(|s| u32::from(s.reps))
        .sum::<u32>() as f32
        / 4.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let suggested_reps = Reps::clamped(((avg_reps * 0.8).floor() as u32).max(5));
    let increment = if f32::from(last_weight) < 100.0 {
        5.0
    } else {
        10.0
    };
    let suggested_weight = Weight::clamped(f32::from(last_weight) + increment);

    Some(Insight {
        kind: InsightKind::WeightStagnation,
        exercise_name: exercise_name.clone(),
        pattern: format!(
            "{} for {same_weight_count} consecutive workouts",
            formatter.weight(last_weight)
        ),
        message: format!(
            "You've built incredible strength endurance at {}! Time to challenge yourself.",
            formatter.weight(last_weight)
        ),
        confidence: String::from(
            "Consistent performance at this weight proves you're ready for the next level.",
        ),
        suggestion: format!(
            "Ready for {} with {suggested_reps} reps",
            formatter.weight(suggested_weight)
        ),
        reasoning: String::from(
            "Your body has adapted to this load. A controlled weight increase will stimulate new growth.",
        ),
        suggested_weight,
        suggested_reps,
        severity: Severity::High,
    })
}

/// Detect reps that keep dropping at the current weight.
///
/// Among the last five samples (at least four required), the sessions at the latest
/// weight must show non-increasing reps with a total drop of at least two.
#[must_use]
pub fn detect_performance_decline(
    exercise_name: &ExerciseName,
    samples: &[ExerciseSample],
    formatter: &WeightFormatter<impl Fn(f32) -> f32>,
) -> Option<Insight> {
    let recent = recent(samples, 5);
    if recent.len() < 4 {
        return None;
    }

    let current_weight = recent.last()?.weight;
    let reps = recent
        .iter()
        .filter(|s| s.weight == current_weight)
        .map(|s| u32::from(s.reps))
        .collect::<Vec<_>>();

    if reps.len() < 3 {
        return None;
    }

    let is_decline = reps.windows(2).all(|r| r[1] <= r[0]);
    let total_decline = reps[0].saturating_sub(reps[reps.len() - 1]);

    if !is_decline || total_decline < 2 {
        return None;
    }

    let current = f32::from(current_weight);
    let suggested_weight = Weight::clamped((current * 0.85).max(current - 15.0).round());
    let max_reps = reps.iter().copied().max().unwrap_or_default();

    Some(Insight {
        kind: InsightKind::PerformanceDecline,
        exercise_name: exercise_name.clone(),
        pattern: format!(
            "Reps declining: {} at {}",
            reps.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("→"),
            formatter.weight(current_weight)
        ),
        message: String::from(
            "Your body is telling you something important - you've been pushing hard and need strategic recovery.",
        ),
        confidence: String::from(
            "This isn't weakness, it's smart training. Even elite athletes use deload periods to come back stronger.",
        ),
        suggestion: format!(
            "Deload to {} for 8-10 reps, focus on perfect form",
            formatter.weight(suggested_weight)
        ),
        reasoning: String::from(
            "A strategic deload will refresh your nervous system and let you return to heavy weights with renewed strength.",
        ),
        suggested_weight,
        suggested_reps: Reps::clamped((max_reps + 2).min(10)),
        severity: Severity::Medium,
    })
}

/// Detect repeated weight increases which came with fewer reps.
///
/// The suggestion steps back to the midpoint of the latest failed jump, at the reps
/// achieved before it.
#[must_use]
pub fn detect_failed_progression(
    exercise_name: &ExerciseName,
    samples: &[ExerciseSample],
    formatter: &WeightFormatter<impl Fn(f32) -> f32>,
) -> Option<Insight> {
    let recent = recent(samples, 6);
    if recent.len() < 4 {
        return None;
    }

    let attempts = recent
        .windows(2)
        .filter(|pair| pair[1].weight > pair[0].weight && pair[1].reps < pair[0].reps)
        .collect::<Vec<_>>();

    if attempts.len() < 2 {
        return None;
    }

    let last_attempt = attempts.last()?;
    let (before, attempt) = (&last_attempt[0], &last_attempt[1]);
    let suggested_weight = Weight::clamped(
        ((f32::from(before.weight) + f32::from(attempt.weight)) / 2.0).round(),
    );

    Some(Insight {
        kind: InsightKind::FailedProgression,
        exercise_name: exercise_name.clone(),
        pattern: format!(
            "Multiple attempts at {} with reduced reps",
            formatter.weight(attempt.weight)
        ),
        message: String::from(
            "You're pushing your limits - that's exactly how champions are made! Your ambition is admirable.",
        ),
        confidence: String::from(
            "Each attempt at heavier weight is building neural pathways. You're closer to success than you think.",
        ),
        suggestion: format!(
            "Try {} as a stepping stone for {} reps",
            formatter.weight(suggested_weight),
            before.reps
        ),
        reasoning: String::from(
            "Smaller jumps reduce the neurological stress of big weight increases while building confidence.",
        ),
        suggested_weight,
        suggested_reps: before.reps,
        severity: Severity::Medium,
    })
}

/// Detect a flat volume trend over the last five samples.
///
/// The trend counts as flat if its slope is less than 1 % of the mean volume. A mean
/// volume of zero never counts as a plateau.
#[must_use]
pub fn detect_volume_plateau(
    exercise_name: &ExerciseName,
    samples: &[ExerciseSample],
    formatter: &WeightFormatter<impl Fn(f32) -> f32>,
) -> Option<Insight> {
    if samples.len() < 5 {
        return None;
    }

    let volumes = recent(samples, 5)
        .iter()
        .map(|s| s.volume)
        .collect::<Vec<_>>();
    let trend = linear_trend(&volumes)?;

    if trend.mean <= 0.0 || trend.slope.abs() >= trend.mean * 0.01 {
        return None;
    }

    let last = samples.last()?;
    let reps = u32::from(last.reps);
    let weight = f32::from(last.weight);

    let (suggested_weight, suggested_reps, suggestion) = if reps >= 12 {
        let suggested_weight = Weight::clamped(weight + 5.0);
        let suggested_reps = Reps::clamped(reps.saturating_sub(2).max(8));
        (
            suggested_weight,
            suggested_reps,
            format!(
                "Increase weight to {} and reduce reps to {suggested_reps}",
                formatter.weight(suggested_weight)
            ),
        )
    } else if reps <= 6 {
        let suggested_reps = Reps::clamped(reps + 2);
        (
            last.weight,
            suggested_reps,
            format!(
                "Keep {} but increase reps to {suggested_reps}",
                formatter.weight(last.weight)
            ),
        )
    } else {
        let suggested_weight = Weight::clamped(weight + 5.0);
        (
            suggested_weight,
            last.reps,
            format!(
                "Progress to {} for {} reps, or add an extra set",
                formatter.weight(suggested_weight),
                last.reps
            ),
        )
    };

    Some(Insight {
        kind: InsightKind::VolumePlateau,
        exercise_name: exercise_name.clone(),
        pattern: format!(
            "Volume plateaued around {} total {}",
            formatter.volume(trend.mean),
            formatter.unit()
        ),
        message: String::from(
            "You've reached a comfortable training zone. Your consistency is building a strong foundation!",
        ),
        confidence: String::from(
            "Stable volume shows excellent work capacity. Now it's time to challenge that capacity.",
        ),
        suggestion,
        reasoning: String::from(
            "Progressive overload through volume increases will break this plateau and stimulate new growth.",
        ),
        suggested_weight,
        suggested_reps,
        severity: Severity::Low,
    })
}

/// Detect sessions that repeat the same sets, reps and weight.
#[must_use]
pub fn detect_perfect_stagnation(
    exercise_name: &ExerciseName,
    samples: &[ExerciseSample],
    formatter: &WeightFormatter<impl Fn(f32) -> f32>,
) -> Option<Insight> {
    let recent = recent(samples, 4);
    if recent.len() < 3 {
        return None;
    }

    let last = recent.last()?;
    let identical_count = recent
        .iter()
        .filter(|s| s.weight == last.weight && s.reps == last.reps && s.sets == last.sets)
        .count();

    if identical_count < 3 {
        return None;
    }

    let weight = f32::from(last.weight);
    let suggested_weight = Weight::clamped(weight + if weight < 50.0 { 2.5 } else { 5.0 });
    let suggested_reps = Reps::clamped(u32::from(last.reps).saturating_sub(1).max(5));

    Some(Insight {
        kind: InsightKind::PerfectStagnation,
        exercise_name: exercise_name.clone(),
        pattern: format!(
            "Identical {}×{} @ {} for {identical_count} sessions",
            last.sets,
            last.reps,
            formatter.weight(last.weight)
        ),
        message: String::from(
            "You've mastered this exact combination! Your consistency and form are dialed in perfectly.",
        ),
        confidence: String::from(
            "Perfect repetition means your body has fully adapted and is ready for the next challenge.",
        ),
        suggestion: format!(
            "Time to progress: {} for {suggested_reps} reps",
            formatter.weight(suggested_weight)
        ),
        reasoning: String::from(
            "Your body craves progressive overload. This small increase will reignite muscle growth.",
        ),
        suggested_weight,
        suggested_reps,
        severity: Severity::High,
    })
}

fn recent<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{ExerciseEntry, Sets, WeightUnit};

    use super::*;

    fn samples(data: &[(u32, u32, f32)]) -> Vec<ExerciseSample> {
        data.iter()
            .enumerate()
            .map(|(i, (sets, reps, weight))| {
                ExerciseSample::new(
                    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(i as u64),
                    &ExerciseEntry {
                        name: ExerciseName::new("Bench Press"),
                        sets: Sets::new(*sets).unwrap(),
                        reps: Reps::new(*reps).unwrap(),
                        weight: Weight::new(*weight).unwrap(),
                    },
                )
            })
            .collect()
    }

    fn with_reps(reps: &[u32], weight: f32) -> Vec<ExerciseSample> {
        samples(&reps.iter().map(|r| (3, *r, weight)).collect::<Vec<_>>())
    }

    fn with_weights(weights: &[f32], reps: u32) -> Vec<ExerciseSample> {
        samples(&weights.iter().map(|w| (3, reps, *w)).collect::<Vec<_>>())
    }

    fn name() -> ExerciseName {
        ExerciseName::new("Bench Press")
    }

    fn suggestion(insight: &Insight) -> (InsightKind, f32, u32, Severity) {
        (
            insight.kind,
            f32::from(insight.suggested_weight),
            u32::from(insight.suggested_reps),
            insight.severity,
        )
    }

    #[test]
    fn test_recent() {
        assert_eq!(recent(&[1, 2, 3, 4], 2), &[3, 4]);
        assert_eq!(recent(&[1, 2], 5), &[1, 2]);
        assert_eq!(recent::<u8>(&[], 5), &[] as &[u8]);
    }

    #[test]
    fn test_weight_stagnation_oscillation() {
        let insight = detect_weight_stagnation(
            &name(),
            &with_weights(&[100.0, 105.0, 100.0, 105.0, 100.0, 105.0], 8),
            &WeightUnit::Pound.formatter(),
        )
        .unwrap();

        assert_eq!(
            suggestion(&insight),
            (InsightKind::WeightStagnation, 110.0, 6, Severity::High)
        );
        assert_eq!(insight.pattern, "Oscillating between 100lbs and 105lbs");
        assert_eq!(
            insight.message,
            "You've mastered the 103lbs range! Your form and consistency are solid."
        );
        assert_eq!(
            insight.suggestion,
            "Try 110lbs for 3-4 reps, then work back up to your target rep range"
        );
    }

    #[test]
    fn test_weight_stagnation_oscillation_reps_floor() {
        let insight = detect_weight_stagnation(
            &name(),
            &samples(&[
                (3, 5, 100.0),
                (3, 5, 105.0),
                (3, 5, 100.0),
                (3, 4, 105.0),
                (3, 5, 100.0),
                (3, 3, 105.0),
            ]),
            &WeightUnit::Pound.formatter(),
        )
        .unwrap();

        assert_eq!(u32::from(insight.suggested_reps), 4);
    }

    #[test]
    fn test_weight_stagnation_clustered_weights_are_no_oscillation() {
        assert_eq!(
            detect_weight_stagnation(
                &name(),
                &with_weights(&[100.0, 100.0, 100.0, 105.0, 105.0, 105.0], 8),
                &WeightUnit::Pound.formatter(),
            ),
            None
        );
    }

    #[rstest]
    #[case::heavy(200.0, &[8, 8, 9, 8, 8], 210.0, 6)]
    #[case::light(60.0, &[12, 12, 12, 12], 65.0, 9)]
    #[case::low_reps(135.0, &[5, 5, 5, 5, 5], 145.0, 5)]
    fn test_weight_stagnation_extended_plateau(
        #[case] weight: f32,
        #[case] reps: &[u32],
        #[case] expected_weight: f32,
        #[case] expected_reps: u32,
    ) {
        let insight = detect_weight_stagnation(
            &name(),
            &with_reps(reps, weight),
            &WeightUnit::Pound.formatter(),
        )
        .unwrap();

        assert_eq!(
            suggestion(&insight),
            (
                InsightKind::WeightStagnation,
                expected_weight,
                expected_reps,
                Severity::High
            )
        );
    }

    #[test]
    fn test_weight_stagnation_extended_plateau_text() {
        let insight = detect_weight_stagnation(
            &name(),
            &with_reps(&[8, 8, 9, 8, 8], 200.0),
            &WeightUnit::Pound.formatter(),
        )
        .unwrap();

        assert_eq!(insight.pattern, "200lbs for 5 consecutive workouts");
        assert_eq!(insight.suggestion, "Ready for 210lbs with 6 reps");
    }

    #[test]
    fn test_weight_stagnation_progressing() {
        assert_eq!(
            detect_weight_stagnation(
                &name(),
                &with_weights(&[100.0, 105.0, 110.0, 115.0, 120.0], 8),
                &WeightUnit::Pound.formatter(),
            ),
            None
        );
    }

    #[test]
    fn test_performance_decline() {
        let insight = detect_performance_decline(
            &name(),
            &with_reps(&[10, 9, 8, 7], 150.0),
            &WeightUnit::Pound.formatter(),
        )
        .unwrap();

        assert_eq!(
            suggestion(&insight),
            (InsightKind::PerformanceDecline, 135.0, 10, Severity::Medium)
        );
        assert_eq!(insight.pattern, "Reps declining: 10→9→8→7 at 150lbs");
        assert_eq!(
            insight.suggestion,
            "Deload to 135lbs for 8-10 reps, focus on perfect form"
        );
    }

    #[test]
    fn test_performance_decline_percentage_deload() {
        let insight = detect_performance_decline(
            &name(),
            &with_reps(&[6, 6, 5, 4], 60.0),
            &WeightUnit::Pound.formatter(),
        )
        .unwrap();

        assert_eq!(
            suggestion(&insight),
            (InsightKind::PerformanceDecline, 51.0, 8, Severity::Medium)
        );
    }

    #[test]
    fn test_performance_decline_ignores_other_weights() {
        let insight = detect_performance_decline(
            &name(),
            &samples(&[
                (3, 10, 150.0),
                (3, 12, 140.0),
                (3, 9, 150.0),
                (3, 8, 150.0),
            ]),
            &WeightUnit::Pound.formatter(),
        )
        .unwrap();

        assert_eq!(insight.pattern, "Reps declining: 10→9→8 at 150lbs");
    }

    #[rstest]
    #[case::too_few_samples(&[10, 8, 6])]
    #[case::small_drop(&[10, 10, 9, 9])]
    #[case::recovering(&[10, 8, 9, 7])]
    #[case::stable(&[8, 8, 8, 8, 8])]
    fn test_performance_decline_not_detected(#[case] reps: &[u32]) {
        assert_eq!(
            detect_performance_decline(
                &name(),
                &with_reps(reps, 150.0),
                &WeightUnit::Pound.formatter()
            ),
            None
        );
    }

    #[test]
    fn test_failed_progression() {
        let insight = detect_failed_progression(
            &name(),
            &samples(&[(3, 8, 100.0), (3, 6, 110.0), (3, 8, 100.0), (3, 5, 115.0)]),
            &WeightUnit::Pound.formatter(),
        )
        .unwrap();

        assert_eq!(
            suggestion(&insight),
            (InsightKind::FailedProgression, 108.0, 8, Severity::Medium)
        );
        assert_eq!(
            insight.pattern,
            "Multiple attempts at 115lbs with reduced reps"
        );
        assert_eq!(
            insight.suggestion,
            "Try 108lbs as a stepping stone for 8 reps"
        );
    }

    #[rstest]
    #[case::single_attempt(&[(3, 8, 100.0), (3, 6, 110.0), (3, 8, 110.0), (3, 8, 110.0)])]
    #[case::reps_held(&[(3, 8, 100.0), (3, 8, 110.0), (3, 8, 120.0), (3, 8, 130.0)])]
    #[case::too_few_samples(&[(3, 8, 100.0), (3, 6, 110.0), (3, 4, 120.0)])]
    fn test_failed_progression_not_detected(#[case] data: &[(u32, u32, f32)]) {
        assert_eq!(
            detect_failed_progression(&name(), &samples(data), &WeightUnit::Pound.formatter()),
            None
        );
    }

    #[rstest]
    #[case::high_reps(12, 100.0, 105.0, 10, "Increase weight to 105lbs and reduce reps to 10")]
    #[case::low_reps(5, 200.0, 200.0, 7, "Keep 200lbs but increase reps to 7")]
    #[case::medium_reps(8, 150.0, 155.0, 8, "Progress to 155lbs for 8 reps, or add an extra set")]
    fn test_volume_plateau(
        #[case] reps: u32,
        #[case] weight: f32,
        #[case] expected_weight: f32,
        #[case] expected_reps: u32,
        #[case] expected_suggestion: &str,
    ) {
        let insight = detect_volume_plateau(
            &name(),
            &samples(&[
                (4, reps, weight),
                (3, reps, weight),
                (4, reps, weight),
                (3, reps, weight),
                (4, reps, weight),
            ]),
            &WeightUnit::Pound.formatter(),
        )
        .unwrap();

        assert_eq!(
            suggestion(&insight),
            (
                InsightKind::VolumePlateau,
                expected_weight,
                expected_reps,
                Severity::Low
            )
        );
        assert_eq!(insight.suggestion, expected_suggestion);
    }

    #[test]
    fn test_volume_plateau_pattern() {
        let insight = detect_volume_plateau(
            &name(),
            &samples(&[
                (1, 5, 240.0),
                (1, 6, 200.0),
                (1, 8, 150.0),
                (1, 10, 120.0),
                (1, 12, 100.0),
            ]),
            &WeightUnit::Pound.formatter(),
        )
        .unwrap();

        assert_eq!(insight.pattern, "Volume plateaued around 1,200 total lbs");
    }

    #[test]
    fn test_volume_plateau_rising_volume() {
        assert_eq!(
            detect_volume_plateau(
                &name(),
                &with_weights(&[100.0, 105.0, 110.0, 115.0, 120.0], 8),
                &WeightUnit::Pound.formatter(),
            ),
            None
        );
    }

    #[test]
    fn test_volume_plateau_too_few_samples() {
        assert_eq!(
            detect_volume_plateau(
                &name(),
                &with_reps(&[8, 8, 8, 8], 100.0),
                &WeightUnit::Pound.formatter(),
            ),
            None
        );
    }

    #[test]
    fn test_volume_plateau_zero_volume() {
        assert_eq!(
            detect_volume_plateau(
                &name(),
                &samples(&[(0, 0, 0.0); 5]),
                &WeightUnit::Pound.formatter(),
            ),
            None
        );
        assert_eq!(
            detect_volume_plateau(
                &name(),
                &with_reps(&[0, 0, 0, 0, 0, 0], 135.0),
                &WeightUnit::Pound.formatter(),
            ),
            None
        );
    }

    #[rstest]
    #[case::light(&[(3, 10, 40.0); 3], 42.5, 9)]
    #[case::heavy(&[(3, 8, 100.0), (3, 8, 100.0), (3, 7, 100.0), (3, 8, 100.0)], 105.0, 7)]
    #[case::low_reps(&[(5, 5, 225.0); 4], 230.0, 5)]
    fn test_perfect_stagnation(
        #[case] data: &[(u32, u32, f32)],
        #[case] expected_weight: f32,
        #[case] expected_reps: u32,
    ) {
        let insight =
            detect_perfect_stagnation(&name(), &samples(data), &WeightUnit::Pound.formatter())
                .unwrap();

        assert_eq!(
            suggestion(&insight),
            (
                InsightKind::PerfectStagnation,
                expected_weight,
                expected_reps,
                Severity::High
            )
        );
    }

    #[test]
    fn test_perfect_stagnation_text() {
        let insight = detect_perfect_stagnation(
            &name(),
            &samples(&[(3, 10, 40.0); 4]),
            &WeightUnit::Pound.formatter(),
        )
        .unwrap();

        assert_eq!(insight.pattern, "Identical 3×10 @ 40lbs for 4 sessions");
        assert_eq!(insight.suggestion, "Time to progress: 42.5lbs for 9 reps");
    }

    #[rstest]
    #[case::different_sets(&[(3, 8, 100.0), (4, 8, 100.0), (3, 8, 100.0), (4, 8, 100.0)])]
    #[case::too_few_samples(&[(3, 8, 100.0), (3, 8, 100.0)])]
    fn test_perfect_stagnation_not_detected(#[case] data: &[(u32, u32, f32)]) {
        assert_eq!(
            detect_perfect_stagnation(&name(), &samples(data), &WeightUnit::Pound.formatter()),
            None
        );
    }

    #[test]
    fn test_text_uses_display_unit() {
        let formatter = WeightFormatter::new(true, |w| w / 2.205);
        let insight = detect_perfect_stagnation(
            &name(),
            &samples(&[(3, 8, 100.0); 4]),
            &formatter,
        )
        .unwrap();

        assert_eq!(f32::from(insight.suggested_weight), 105.0);
        assert_eq!(insight.pattern, "Identical 3×8 @ 45.4kg for 4 sessions");
        assert_eq!(insight.suggestion, "Time to progress: 47.6kg for 7 reps");
    }
}
