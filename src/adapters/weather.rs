use crate::adapters::http::{build_client, missing_field, read_json};
use crate::core::{ConfigProvider, Result, UvSource};
use crate::domain::model::UvIndex;
use crate::domain::weather::{Coordinates, ExposureLevel, ForecastCondition, WeatherObservation};
use async_trait::async_trait;
use reqwest::Client;

const SERVICE: &str = "weather";

/// Client for the app's weather endpoint (`GET /weather/weather?lat=..&lon=..`).
pub struct WeatherClient {
    client: Client,
    endpoint: String,
}

impl WeatherClient {
    pub fn new(endpoint: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_seconds)?,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.weather_endpoint(), config.timeout_seconds())
    }
}

#[async_trait]
impl UvSource for WeatherClient {
    async fn observe(&self, at: Coordinates) -> Result<WeatherObservation> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("lat", at.lat), ("lon", at.lon)])
            .send()
            .await?;
        let body = read_json(SERVICE, response).await?;
        observation_from_json(&body)
    }
}

/// Decodes `{uv_index, skin_cancer_risk, temperature?, forecast?}`.
///
/// An absent or unrecognised risk label is recomputed from the index.
pub fn observation_from_json(body: &serde_json::Value) -> Result<WeatherObservation> {
    let uv_index = body
        .get("uv_index")
        .ok_or_else(|| missing_field(SERVICE, "uv_index"))?;
    let uv_index = UvIndex::try_from(uv_index)?;

    let reported = body.get("skin_cancer_risk").and_then(|v| v.as_str());
    let exposure = match reported.and_then(ExposureLevel::from_label) {
        Some(level) => level,
        None => {
            if let Some(label) = reported {
                tracing::warn!("Unknown skin cancer risk label '{}', deriving from UV index", label);
            }
            ExposureLevel::from_uv_index(uv_index)
        }
    };

    Ok(WeatherObservation {
        uv_index,
        exposure,
        temperature: body.get("temperature").and_then(|v| v.as_f64()),
        forecast: body
            .get("forecast")
            .and_then(|v| v.as_str())
            .map(ForecastCondition::parse)
            .unwrap_or_default(),
    })
}
