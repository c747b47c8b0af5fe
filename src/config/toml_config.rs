use crate::core::ConfigProvider;
use crate::domain::locale::Locale;
use crate::utils::error::{Result, ScreeningError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DETECTION_ENDPOINT: &str = "https://cac-2024.onrender.com/detection/predict";
pub const DEFAULT_WEATHER_ENDPOINT: &str = "https://cac-2024-api.onrender.com/weather/weather";
pub const DEFAULT_PREFERENCES_PATH: &str = "skin-risk-preferences.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub openweathermap: Option<OpenWeatherMapConfig>,
    pub preferences: PreferencesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub detection_endpoint: String,
    pub weather_endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            detection_endpoint: DEFAULT_DETECTION_ENDPOINT.to_string(),
            weather_endpoint: DEFAULT_WEATHER_ENDPOINT.to_string(),
            timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWeatherMapConfig {
    #[serde(default = "default_owm_endpoint")]
    pub endpoint: String,
    pub api_key: Option<String>,
}

fn default_owm_endpoint() -> String {
    crate::adapters::openweathermap::DEFAULT_ENDPOINT.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    pub path: String,
    pub default_locale: Locale,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_PREFERENCES_PATH.to_string(),
            default_locale: Locale::default(),
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScreeningError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScreeningError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OPENWEATHERMAP_API_KEY})
    ///
    /// Unset variables are left as written so validation can report them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScreeningError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// The OpenWeatherMap endpoint and key, when a usable key is configured.
    pub fn openweathermap_credentials(&self) -> Result<(&str, &str)> {
        let owm = validation::validate_required_field("openweathermap", &self.openweathermap)?;
        let key = validation::validate_required_field("openweathermap.api_key", &owm.api_key)?;
        validation::validate_non_empty_string("openweathermap.api_key", key)?;
        if key.starts_with("${") {
            return Err(ScreeningError::MissingConfigError {
                field: format!("openweathermap.api_key (environment variable {} is not set)", key),
            });
        }
        Ok((owm.endpoint.as_str(), key.as_str()))
    }

    pub fn preferences_path(&self) -> &str {
        &self.preferences.path
    }
}

impl ConfigProvider for AppConfig {
    fn detection_endpoint(&self) -> &str {
        &self.service.detection_endpoint
    }

    fn weather_endpoint(&self) -> &str {
        &self.service.weather_endpoint
    }

    fn timeout_seconds(&self) -> u64 {
        self.service.timeout_seconds
    }

    fn default_locale(&self) -> Locale {
        self.preferences.default_locale
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("service.detection_endpoint", &self.service.detection_endpoint)?;
        validation::validate_url("service.weather_endpoint", &self.service.weather_endpoint)?;
        validation::validate_range("service.timeout_seconds", self.service.timeout_seconds, 1, 300)?;
        validation::validate_path("preferences.path", &self.preferences.path)?;
        if let Some(owm) = &self.openweathermap {
            validation::validate_url("openweathermap.endpoint", &owm.endpoint)?;
        }
        Ok(())
    }
}
