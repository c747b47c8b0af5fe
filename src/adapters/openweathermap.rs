use crate::adapters::http::{build_client, missing_field, read_json};
use crate::core::{Result, UvSource};
use crate::domain::model::UvIndex;
use crate::domain::weather::{Coordinates, ExposureLevel, ForecastCondition, WeatherObservation};
use async_trait::async_trait;
use reqwest::Client;

const SERVICE: &str = "openweathermap";

pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/3.0/onecall";

/// Direct client for the OpenWeatherMap One Call 3.0 API.
///
/// Computes the skin cancer risk label locally instead of relying on the
/// app's weather service.
pub struct OpenWeatherMapClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl OpenWeatherMapClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_seconds)?,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl UvSource for OpenWeatherMapClient {
    async fn observe(&self, at: Coordinates) -> Result<WeatherObservation> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("lat", at.lat.to_string()),
                ("lon", at.lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "imperial".to_string()),
                ("exclude", "minutely,hourly,alerts".to_string()),
            ])
            .send()
            .await?;
        let body = read_json(SERVICE, response).await?;
        observation_from_onecall(&body)
    }
}

/// Picks today's UV index (`daily[0].uvi`) and the current conditions.
pub fn observation_from_onecall(body: &serde_json::Value) -> Result<WeatherObservation> {
    let uvi = body
        .pointer("/daily/0/uvi")
        .ok_or_else(|| missing_field(SERVICE, "daily[0].uvi"))?;
    let uv_index = UvIndex::try_from(uvi)?;

    let forecast = body
        .pointer("/current/weather/0/description")
        .or_else(|| body.pointer("/current/weather/0/main"))
        .and_then(|v| v.as_str())
        .map(ForecastCondition::parse)
        .unwrap_or_default();

    Ok(WeatherObservation {
        uv_index,
        exposure: ExposureLevel::from_uv_index(uv_index),
        temperature: body.pointer("/current/temp").and_then(|v| v.as_f64()),
        forecast,
    })
}
