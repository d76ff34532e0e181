#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub slope: f32,
    pub mean: f32,
}

/// Fit an ordinary least-squares line through a series of values.
///
/// The values are placed at x = 1, 2, …, n. At least two values are required.
#[must_use]
pub fn linear_trend(values: &[f32]) -> Option<Trend> {
    if values.len() < 2 {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f32;
    let sum_x = n * (n + 1.) / 2.;
    let sum_xx = n * (n + 1.) * (2. * n + 1.) / 6.;
    let sum_y = values.iter().sum::<f32>();
    #[allow(clippy::cast_precision_loss)]
    let sum_xy = values
        .iter()
        .enumerate()
        .map(|(i, y)| (i + 1) as f32 * y)
        .sum::<f32>();

    Some(Trend {
        slope: (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x),
        mean: sum_y / n,
    })
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::no_value(&[])]
    #[case::one_value(&[100.0])]
    fn test_linear_trend_insufficient_values(#[case] values: &[f32]) {
        assert_eq!(linear_trend(values), None);
    }

    #[rstest]
    #[case::flat(&[2400.0, 2400.0, 2400.0, 2400.0, 2400.0], 0.0, 2400.0)]
    #[case::rising(&[1000.0, 1100.0, 1200.0, 1300.0, 1400.0], 100.0, 1200.0)]
    #[case::falling(&[50.0, 40.0, 30.0], -10.0, 40.0)]
    #[case::alternating(&[2520.0, 2400.0, 2520.0, 2400.0, 2520.0], 0.0, 2472.0)]
    #[case::noisy(&[10.0, 14.0, 9.0, 15.0], 1.0, 12.0)]
    #[case::zero(&[0.0, 0.0, 0.0, 0.0, 0.0], 0.0, 0.0)]
    fn test_linear_trend(#[case] values: &[f32], #[case] slope: f32, #[case] mean: f32) {
        let trend = linear_trend(values).unwrap();
        assert_approx_eq!(trend.slope, slope, 1e-3);
        assert_approx_eq!(trend.mean, mean, 1e-3);
    }
}
