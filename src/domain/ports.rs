use crate::domain::locale::Locale;
use crate::domain::model::{LesionImage, LesionScore};
use crate::domain::weather::{Coordinates, WeatherObservation};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote lesion classifier: one upload, one score.
#[async_trait]
pub trait LesionScorer: Send + Sync {
    async fn score(&self, image: &LesionImage) -> Result<LesionScore>;
}

/// Remote source of UV and weather data for a location.
#[async_trait]
pub trait UvSource: Send + Sync {
    async fn observe(&self, at: Coordinates) -> Result<WeatherObservation>;
}

/// Local key-value storage for user preferences.
pub trait PreferenceStore: Send + Sync {
    fn language(&self) -> Result<Option<Locale>>;
    fn set_language(&self, locale: Locale) -> Result<()>;

    /// Stored language, or `fallback` when nothing has been saved yet.
    fn resolve_locale(&self, fallback: Locale) -> Result<Locale> {
        Ok(self.language()?.unwrap_or(fallback))
    }
}

pub trait ConfigProvider: Send + Sync {
    fn detection_endpoint(&self) -> &str;
    fn weather_endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn default_locale(&self) -> Locale;
}
