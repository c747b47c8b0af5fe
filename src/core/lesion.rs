//! Lesion score bucketing.
//!
//! Thresholds apply to the raw score in `[0, 1]`, lower bound inclusive:
//!
//! | score            | category          |
//! |------------------|-------------------|
//! | `< 0.25`         | `Benign`          |
//! | `[0.25, 0.45)`   | `LikelyBenign`    |
//! | `[0.45, 0.75)`   | `Inconclusive`    |
//! | `[0.75, 0.85)`   | `LikelyMalignant` |
//! | `>= 0.85`        | `Malignant`       |
//!
//! Finite scores outside `[0, 1]` land in the nearest end bucket.

use crate::domain::model::{LesionRiskCategory, LesionScore};
use crate::utils::error::Result;

pub const LIKELY_BENIGN_FROM: f64 = 0.25;
pub const INCONCLUSIVE_FROM: f64 = 0.45;
pub const LIKELY_MALIGNANT_FROM: f64 = 0.75;
pub const MALIGNANT_FROM: f64 = 0.85;

pub struct LesionRiskClassifier;

impl LesionRiskClassifier {
    /// Classifies a raw score, rejecting NaN and infinities.
    pub fn classify(score: f64) -> Result<LesionRiskCategory> {
        LesionScore::new(score).map(Self::classify_score)
    }

    /// Parses and classifies a textual score such as a CLI argument.
    pub fn classify_str(score: &str) -> Result<LesionRiskCategory> {
        score.parse::<LesionScore>().map(Self::classify_score)
    }

    pub fn classify_score(score: LesionScore) -> LesionRiskCategory {
        match score.value() {
            s if s < LIKELY_BENIGN_FROM => LesionRiskCategory::Benign,
            s if s < INCONCLUSIVE_FROM => LesionRiskCategory::LikelyBenign,
            s if s < LIKELY_MALIGNANT_FROM => LesionRiskCategory::Inconclusive,
            s if s < MALIGNANT_FROM => LesionRiskCategory::LikelyMalignant,
            _ => LesionRiskCategory::Malignant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_lower_inclusive() {
        assert_eq!(LesionRiskClassifier::classify(0.2499).unwrap(), LesionRiskCategory::Benign);
        assert_eq!(LesionRiskClassifier::classify(0.25).unwrap(), LesionRiskCategory::LikelyBenign);
        assert_eq!(LesionRiskClassifier::classify(0.45).unwrap(), LesionRiskCategory::Inconclusive);
        assert_eq!(
            LesionRiskClassifier::classify(0.75).unwrap(),
            LesionRiskCategory::LikelyMalignant
        );
        assert_eq!(
            LesionRiskClassifier::classify(0.8499).unwrap(),
            LesionRiskCategory::LikelyMalignant
        );
        assert_eq!(LesionRiskClassifier::classify(0.85).unwrap(), LesionRiskCategory::Malignant);
    }

    #[test]
    fn test_typical_scores() {
        assert_eq!(LesionRiskClassifier::classify(0.10).unwrap(), LesionRiskCategory::Benign);
        assert_eq!(LesionRiskClassifier::classify(0.50).unwrap(), LesionRiskCategory::Inconclusive);
        assert_eq!(LesionRiskClassifier::classify(0.90).unwrap(), LesionRiskCategory::Malignant);
    }

    #[test]
    fn test_out_of_range_scores_use_nearest_bucket() {
        assert_eq!(LesionRiskClassifier::classify(-3.0).unwrap(), LesionRiskCategory::Benign);
        assert_eq!(LesionRiskClassifier::classify(1.0).unwrap(), LesionRiskCategory::Malignant);
        assert_eq!(LesionRiskClassifier::classify(42.0).unwrap(), LesionRiskCategory::Malignant);
    }

    #[test]
    fn test_invalid_input() {
        assert!(LesionRiskClassifier::classify(f64::NAN).unwrap_err().is_invalid_input());
        assert!(LesionRiskClassifier::classify(f64::INFINITY).unwrap_err().is_invalid_input());
        assert!(LesionRiskClassifier::classify_str("x").unwrap_err().is_invalid_input());
        assert_eq!(
            LesionRiskClassifier::classify_str("0.3").unwrap(),
            LesionRiskCategory::LikelyBenign
        );
    }

    #[test]
    fn test_total_and_monotonic_over_unit_interval() {
        let mut previous = LesionRiskCategory::Benign;
        for step in 0..=10_000 {
            let score = step as f64 / 10_000.0;
            let category = LesionRiskClassifier::classify(score).unwrap();
            assert!(category >= previous, "score {} went down to {:?}", score, category);
            previous = category;
        }
        assert_eq!(previous, LesionRiskCategory::Malignant);
    }

    #[test]
    fn test_idempotent() {
        for score in [0.0, 0.25, 0.6, 0.8, 0.99] {
            assert_eq!(
                LesionRiskClassifier::classify(score).unwrap(),
                LesionRiskClassifier::classify(score).unwrap()
            );
        }
    }
}
