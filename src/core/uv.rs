use crate::domain::model::{UvAdvice, UvIndex, UvRiskCategory};
use crate::utils::error::Result;

/// Highest UV index still considered low risk.
pub const LOW_UP_TO: f64 = 2.0;
/// Highest UV index still considered moderate risk.
pub const MODERATE_UP_TO: f64 = 7.0;

/// Maps a UV index to a risk category and its protective advisories.
///
/// Upper bounds are inclusive: `2` is `Low`, `7` is `Moderate`.
pub struct UvRiskAdvisor;

impl UvRiskAdvisor {
    pub fn classify(uv_index: f64) -> Result<UvAdvice> {
        UvIndex::new(uv_index).map(Self::advise)
    }

    pub fn classify_str(uv_index: &str) -> Result<UvAdvice> {
        uv_index.parse::<UvIndex>().map(Self::advise)
    }

    pub fn advise(uv_index: UvIndex) -> UvAdvice {
        let category = Self::category(uv_index);
        UvAdvice {
            category,
            advisories: category.advisories().to_vec(),
        }
    }

    pub fn category(uv_index: UvIndex) -> UvRiskCategory {
        match uv_index.value() {
            v if v <= LOW_UP_TO => UvRiskCategory::Low,
            v if v <= MODERATE_UP_TO => UvRiskCategory::Moderate,
            _ => UvRiskCategory::Severe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::locale::Locale;
    use crate::domain::model::Advisory;

    #[test]
    fn test_boundaries_are_upper_inclusive() {
        assert_eq!(UvRiskAdvisor::classify(2.0).unwrap().category, UvRiskCategory::Low);
        assert_eq!(UvRiskAdvisor::classify(2.01).unwrap().category, UvRiskCategory::Moderate);
        assert_eq!(UvRiskAdvisor::classify(7.0).unwrap().category, UvRiskCategory::Moderate);
        assert_eq!(UvRiskAdvisor::classify(7.01).unwrap().category, UvRiskCategory::Severe);
    }

    #[test]
    fn test_advisory_counts() {
        let low = UvRiskAdvisor::classify(1.0).unwrap();
        assert_eq!(low.category, UvRiskCategory::Low);
        assert_eq!(low.advisories, vec![Advisory::NoProtectionNeeded]);

        let moderate = UvRiskAdvisor::classify(5.0).unwrap();
        assert_eq!(moderate.category, UvRiskCategory::Moderate);
        assert_eq!(moderate.advisories.len(), 2);

        let severe = UvRiskAdvisor::classify(9.0).unwrap();
        assert_eq!(severe.category, UvRiskCategory::Severe);
        assert_eq!(
            severe.advisory_texts(Locale::En),
            vec![
                "Wear sunglasses and SPF 30+ sunscreen",
                "Avoid outdoors at midday",
                "Seek shade at midday",
            ]
        );
    }

    #[test]
    fn test_negative_and_extreme_indices() {
        assert_eq!(UvRiskAdvisor::classify(-0.5).unwrap().category, UvRiskCategory::Low);
        assert_eq!(UvRiskAdvisor::classify(15.0).unwrap().category, UvRiskCategory::Severe);
    }

    #[test]
    fn test_invalid_input() {
        assert!(UvRiskAdvisor::classify(f64::NAN).unwrap_err().is_invalid_input());
        assert!(UvRiskAdvisor::classify_str("sunny").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_monotonic_and_idempotent() {
        let mut previous = UvRiskCategory::Low;
        for step in 0..=1_500 {
            let index = step as f64 / 100.0;
            let advice = UvRiskAdvisor::classify(index).unwrap();
            assert!(advice.category >= previous);
            assert_eq!(advice, UvRiskAdvisor::classify(index).unwrap());
            previous = advice.category;
        }
    }
}
