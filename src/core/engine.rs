use crate::core::report::{LesionReport, UvReport};
use crate::core::{LesionScorer, Result, UvSource};
use crate::domain::locale::Locale;
use crate::domain::model::LesionImage;
use crate::domain::weather::Coordinates;

/// Fetches a scalar from a remote service, then classifies and renders it.
///
/// Either side may be `()` when only one kind of report is needed.
pub struct ScreeningEngine<L = (), U = ()> {
    scorer: L,
    uv_source: U,
}

impl<L, U> ScreeningEngine<L, U> {
    pub fn new(scorer: L, uv_source: U) -> Self {
        Self { scorer, uv_source }
    }
}

impl<L: LesionScorer> ScreeningEngine<L, ()> {
    pub fn with_scorer(scorer: L) -> Self {
        Self::new(scorer, ())
    }
}

impl<U: UvSource> ScreeningEngine<(), U> {
    pub fn with_uv_source(uv_source: U) -> Self {
        Self::new((), uv_source)
    }
}

impl<L: LesionScorer, U> ScreeningEngine<L, U> {
    pub async fn lesion_report(&self, image: &LesionImage, locale: Locale) -> Result<LesionReport> {
        tracing::info!("Evaluating lesion image {}", image.file_name);
        tracing::debug!("Uploading {} bytes ({})", image.bytes.len(), image.mime_type);

        let score = self.scorer.score(image).await?;
        let report = LesionReport::new(score, locale);

        tracing::info!(
            "Lesion score {:.4} classified as {:?}",
            score.value(),
            report.category
        );
        Ok(report)
    }
}

impl<L, U: UvSource> ScreeningEngine<L, U> {
    pub async fn uv_report(&self, at: Coordinates, locale: Locale) -> Result<UvReport> {
        tracing::info!("Fetching UV conditions for ({}, {})", at.lat, at.lon);

        let observation = self.uv_source.observe(at).await?;
        let report = UvReport::from_observation(&observation, locale);

        tracing::info!(
            "UV index {} classified as {:?} ({} advisories)",
            observation.uv_index,
            report.category,
            report.advisories.len()
        );
        Ok(report)
    }
}
