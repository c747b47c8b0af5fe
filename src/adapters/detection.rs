use crate::adapters::http::{build_client, missing_field, read_json};
use crate::core::{ConfigProvider, LesionScorer, Result};
use crate::domain::model::{LesionImage, LesionScore};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

const SERVICE: &str = "detection";

/// Client for the lesion classification endpoint (`POST /detection/predict`).
pub struct DetectionClient {
    client: Client,
    endpoint: String,
}

impl DetectionClient {
    pub fn new(endpoint: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_seconds)?,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.detection_endpoint(), config.timeout_seconds())
    }
}

#[async_trait]
impl LesionScorer for DetectionClient {
    async fn score(&self, image: &LesionImage) -> Result<LesionScore> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(image.mime_type)?;
        let form = Form::new().part("file", part);

        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).multipart(form).send().await?;
        let body = read_json(SERVICE, response).await?;

        let prediction = body
            .get("prediction")
            .ok_or_else(|| missing_field(SERVICE, "prediction"))?;
        LesionScore::try_from(prediction)
    }
}
