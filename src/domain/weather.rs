use crate::domain::locale::{Locale, Localized};
use crate::domain::model::UvIndex;
use crate::utils::error::{Result, ScreeningError};
use serde::{Deserialize, Serialize};

/// Five-level skin cancer risk label reported next to the UV index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExposureLevel {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
    Extreme,
}

impl ExposureLevel {
    pub const ALL: [ExposureLevel; 5] = [
        ExposureLevel::Low,
        ExposureLevel::Moderate,
        ExposureLevel::High,
        ExposureLevel::VeryHigh,
        ExposureLevel::Extreme,
    ];

    pub fn from_uv_index(uv_index: UvIndex) -> Self {
        match uv_index.value() {
            v if v < 3.0 => ExposureLevel::Low,
            v if v < 6.0 => ExposureLevel::Moderate,
            v if v < 8.0 => ExposureLevel::High,
            v if v < 11.0 => ExposureLevel::VeryHigh,
            _ => ExposureLevel::Extreme,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExposureLevel::Low => "Low",
            ExposureLevel::Moderate => "Moderate",
            ExposureLevel::High => "High",
            ExposureLevel::VeryHigh => "Very High",
            ExposureLevel::Extreme => "Extreme",
        }
    }

    /// Inverse of [`ExposureLevel::label`], ignoring case and surrounding spaces.
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(wanted))
    }
}

impl Localized for ExposureLevel {
    fn text(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (_, Locale::En) => self.label(),
            (ExposureLevel::Low, Locale::Es) => "Bajo",
            (ExposureLevel::Moderate, Locale::Es) => "Moderado",
            (ExposureLevel::High, Locale::Es) => "Alto",
            (ExposureLevel::VeryHigh, Locale::Es) => "Muy Alto",
            (ExposureLevel::Extreme, Locale::Es) => "Extremo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastCondition {
    Clear,
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rain,
    Thunderstorm,
    Snow,
    Fog,
    #[default]
    Unknown,
}

impl ForecastCondition {
    /// Lenient parse of a free-form forecast string. Never fails.
    pub fn parse(text: &str) -> Self {
        let text = text.trim().to_ascii_lowercase();
        match text.as_str() {
            "" => ForecastCondition::Unknown,
            t if t.contains("thunder") || t.contains("storm") => ForecastCondition::Thunderstorm,
            t if t.contains("snow") || t.contains("sleet") => ForecastCondition::Snow,
            t if t.contains("rain") || t.contains("drizzle") || t.contains("shower") => {
                ForecastCondition::Rain
            }
            t if t.contains("fog") || t.contains("mist") || t.contains("haze") => {
                ForecastCondition::Fog
            }
            t if t.contains("partly") || t.contains("few clouds") || t.contains("scattered") => {
                ForecastCondition::PartlyCloudy
            }
            t if t.contains("cloud") || t.contains("overcast") => ForecastCondition::Cloudy,
            t if t.contains("sun") => ForecastCondition::Sunny,
            t if t.contains("clear") => ForecastCondition::Clear,
            _ => ForecastCondition::Unknown,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ForecastCondition::Clear => "☀️",
            ForecastCondition::Sunny => "🌞",
            ForecastCondition::PartlyCloudy => "⛅",
            ForecastCondition::Cloudy => "☁️",
            ForecastCondition::Rain => "🌧️",
            ForecastCondition::Thunderstorm => "⛈️",
            ForecastCondition::Snow => "❄️",
            ForecastCondition::Fog => "🌫️",
            ForecastCondition::Unknown => "🌡️",
        }
    }
}

impl Localized for ForecastCondition {
    fn text(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ForecastCondition::Clear, Locale::En) => "Clear",
            (ForecastCondition::Clear, Locale::Es) => "Despejado",
            (ForecastCondition::Sunny, Locale::En) => "Sunny",
            (ForecastCondition::Sunny, Locale::Es) => "Soleado",
            (ForecastCondition::PartlyCloudy, Locale::En) => "Partly Cloudy",
            (ForecastCondition::PartlyCloudy, Locale::Es) => "Parcialmente Nublado",
            (ForecastCondition::Cloudy, Locale::En) => "Cloudy",
            (ForecastCondition::Cloudy, Locale::Es) => "Nublado",
            (ForecastCondition::Rain, Locale::En) => "Rain",
            (ForecastCondition::Rain, Locale::Es) => "Lluvia",
            (ForecastCondition::Thunderstorm, Locale::En) => "Thunderstorm",
            (ForecastCondition::Thunderstorm, Locale::Es) => "Tormenta",
            (ForecastCondition::Snow, Locale::En) => "Snow",
            (ForecastCondition::Snow, Locale::Es) => "Nieve",
            (ForecastCondition::Fog, Locale::En) => "Fog",
            (ForecastCondition::Fog, Locale::Es) => "Niebla",
            (ForecastCondition::Unknown, Locale::En) => "Unknown",
            (ForecastCondition::Unknown, Locale::Es) => "Desconocido",
        }
    }
}

/// A validated latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(ScreeningError::invalid_input(format!(
                "latitude must be within [-90, 90], got {}",
                lat
            )));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(ScreeningError::invalid_input(format!(
                "longitude must be within [-180, 180], got {}",
                lon
            )));
        }
        Ok(Self { lat, lon })
    }
}

/// Weather conditions at a location, as far as the UV advice is concerned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherObservation {
    pub uv_index: UvIndex,
    pub exposure: ExposureLevel,
    /// Degrees Fahrenheit when the service reports it.
    pub temperature: Option<f64>,
    pub forecast: ForecastCondition,
}
