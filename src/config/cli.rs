use crate::config::toml_config::AppConfig;
use crate::domain::locale::Locale;
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "skin-risk")]
#[command(about = "Skin lesion screening and UV exposure advice")]
pub struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Language for labels and advisories (en, es); overrides the stored preference
    #[arg(long, value_parser = parse_locale)]
    pub locale: Option<Locale>,

    #[arg(long)]
    pub detection_endpoint: Option<String>,

    #[arg(long)]
    pub weather_endpoint: Option<String>,

    /// Preference file holding the saved language
    #[arg(long)]
    pub preferences: Option<String>,

    /// Print reports as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Classify a lesion from a score or by uploading an image
    Lesion(LesionArgs),
    /// Advise on UV exposure from an index or a location
    Uv(UvArgs),
    /// Show or change the saved language
    Locale {
        #[command(subcommand)]
        action: LocaleAction,
    },
}

#[derive(Debug, Clone, Args)]
#[command(group(ArgGroup::new("lesion_input").required(true).args(["score", "image"])))]
pub struct LesionArgs {
    /// Malignancy likelihood in [0, 1]
    #[arg(long, allow_negative_numbers = true)]
    pub score: Option<String>,

    /// Image to upload to the classification service
    #[arg(long)]
    pub image: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
#[command(group(ArgGroup::new("uv_input").required(true).args(["index", "lat"])))]
pub struct UvArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub index: Option<String>,

    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Query OpenWeatherMap directly instead of the app weather service
    #[arg(long, requires = "lat")]
    pub upstream: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum LocaleAction {
    Show,
    Set {
        #[arg(value_parser = parse_locale)]
        locale: Locale,
    },
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    s.parse::<Locale>().map_err(|e| e.to_string())
}

impl Cli {
    /// Applies command line overrides on top of the file configuration.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(endpoint) = &self.detection_endpoint {
            tracing::debug!("🔧 detection endpoint overridden to: {}", endpoint);
            config.service.detection_endpoint = endpoint.clone();
        }
        if let Some(endpoint) = &self.weather_endpoint {
            tracing::debug!("🔧 weather endpoint overridden to: {}", endpoint);
            config.service.weather_endpoint = endpoint.clone();
        }
        if let Some(path) = &self.preferences {
            config.preferences.path = path.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lesion_score() {
        let cli = Cli::try_parse_from(["skin-risk", "--locale", "es", "lesion", "--score", "0.5"]).unwrap();
        assert_eq!(cli.locale, Some(Locale::Es));
        match cli.command {
            Command::Lesion(args) => assert_eq!(args.score.as_deref(), Some("0.5")),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_uv_requires_an_input() {
        assert!(Cli::try_parse_from(["skin-risk", "uv"]).is_err());
        assert!(Cli::try_parse_from(["skin-risk", "uv", "--lat", "10"]).is_err());
        let cli = Cli::try_parse_from(["skin-risk", "uv", "--lat", "40.7", "--lon", "-74.0"]).unwrap();
        match cli.command {
            Command::Uv(args) => assert_eq!(args.lon, Some(-74.0)),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_locale() {
        assert!(Cli::try_parse_from(["skin-risk", "locale", "set", "fr"]).is_err());
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let cli = Cli::try_parse_from([
            "skin-risk",
            "--weather-endpoint",
            "http://localhost:9000/weather",
            "uv",
            "--index",
            "3",
        ])
        .unwrap();
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.service.weather_endpoint, "http://localhost:9000/weather");
    }
}
