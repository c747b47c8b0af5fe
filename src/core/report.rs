use crate::core::lesion::LesionRiskClassifier;
use crate::core::uv::UvRiskAdvisor;
use crate::domain::locale::{Locale, Localized, Message};
use crate::domain::model::{LesionRiskCategory, LesionScore, UvAdvice, UvIndex, UvRiskCategory};
use crate::domain::weather::{ExposureLevel, ForecastCondition, WeatherObservation};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Rendered result of a lesion evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct LesionReport {
    pub score: LesionScore,
    pub category: LesionRiskCategory,
    pub label: &'static str,
    pub disclaimer: &'static str,
    pub locale: Locale,
    pub generated_at: DateTime<Utc>,
}

impl LesionReport {
    pub fn new(score: LesionScore, locale: Locale) -> Self {
        let category = LesionRiskClassifier::classify_score(score);
        Self {
            score,
            category,
            label: category.text(locale),
            disclaimer: Message::LesionDisclaimer.text(locale),
            locale,
            generated_at: Utc::now(),
        }
    }
}

/// Rendered UV advice, optionally enriched with the weather around it.
#[derive(Debug, Clone, Serialize)]
pub struct UvReport {
    pub uv_index: UvIndex,
    pub category: UvRiskCategory,
    pub title: &'static str,
    pub color: &'static str,
    pub explanation: &'static str,
    pub advisories: Vec<&'static str>,
    pub exposure: ExposureLevel,
    pub exposure_label: &'static str,
    pub temperature: Option<f64>,
    pub forecast: ForecastCondition,
    pub forecast_label: &'static str,
    pub forecast_icon: &'static str,
    pub locale: Locale,
    pub generated_at: DateTime<Utc>,
}

impl UvReport {
    /// Report for a bare UV index with no weather context.
    pub fn from_index(uv_index: UvIndex, locale: Locale) -> Self {
        Self::from_observation(
            &WeatherObservation {
                uv_index,
                exposure: ExposureLevel::from_uv_index(uv_index),
                temperature: None,
                forecast: ForecastCondition::Unknown,
            },
            locale,
        )
    }

    pub fn from_observation(observation: &WeatherObservation, locale: Locale) -> Self {
        let UvAdvice {
            category,
            advisories,
        } = UvRiskAdvisor::advise(observation.uv_index);

        Self {
            uv_index: observation.uv_index,
            category,
            title: category.text(locale),
            color: category.color(),
            explanation: Message::UvExplanation.text(locale),
            advisories: advisories.iter().map(|a| a.text(locale)).collect(),
            exposure: observation.exposure,
            exposure_label: observation.exposure.text(locale),
            temperature: observation.temperature,
            forecast: observation.forecast,
            forecast_label: observation.forecast.text(locale),
            forecast_icon: observation.forecast.icon(),
            locale,
            generated_at: Utc::now(),
        }
    }
}
