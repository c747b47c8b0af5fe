pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::Cli;

pub use adapters::{DetectionClient, FilePreferenceStore, OpenWeatherMapClient, WeatherClient};
pub use config::AppConfig;
pub use core::{engine::ScreeningEngine, lesion::LesionRiskClassifier, uv::UvRiskAdvisor};
pub use domain::locale::{Locale, Localized};
pub use utils::error::{Result, ScreeningError};
