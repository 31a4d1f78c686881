//! Weight validation and normalization shared by the generator stages.

use crate::{Result, error::GeneratorError};

/// Rejects negative, NaN, or infinite weights.
pub(crate) fn validate_weights(weights: &[f64]) -> Result<()> {
    for (index, value) in weights.iter().copied().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(GeneratorError::InvalidWeight { index, value });
        }
    }
    Ok(())
}

/// Scales `values` so they sum to one.
#[expect(
    clippy::float_arithmetic,
    reason = "normalization divides every weight by the total mass"
)]
pub(crate) fn normalize(values: Vec<f64>, context: &'static str) -> Result<Vec<f64>> {
    let total: f64 = values.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(GeneratorError::DegenerateWeights { context });
    }
    Ok(values.into_iter().map(|value| value / total).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn normalize_scales_to_unit_mass() {
        let normalized = normalize(vec![1.0, 3.0], "test").expect("positive mass");
        assert_eq!(normalized, vec![0.25, 0.75]);
    }

    #[rstest]
    #[case::empty(Vec::new())]
    #[case::zeros(vec![0.0, 0.0])]
    #[case::infinite(vec![f64::INFINITY, 1.0])]
    fn normalize_rejects_degenerate_mass(#[case] values: Vec<f64>) {
        let err = normalize(values, "test").expect_err("mass is degenerate");
        assert_eq!(err, GeneratorError::DegenerateWeights { context: "test" });
    }

    #[rstest]
    #[case(vec![0.5, -0.1], 1)]
    #[case(vec![f64::NAN], 0)]
    #[case(vec![1.0, 2.0, f64::NEG_INFINITY], 2)]
    fn validate_weights_reports_first_bad_index(
        #[case] weights: Vec<f64>,
        #[case] expected_index: usize,
    ) {
        let err = validate_weights(&weights).expect_err("weights are invalid");
        assert!(matches!(
            err,
            GeneratorError::InvalidWeight { index, .. } if index == expected_index
        ));
    }

    #[test]
    fn validate_weights_accepts_zeros() {
        assert!(validate_weights(&[0.0, 1.0, 0.0]).is_ok());
    }
}
