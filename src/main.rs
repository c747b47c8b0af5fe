use clap::Parser;
use serde::Serialize;
use skin_risk::config::cli::{Command, LesionArgs, LocaleAction, UvArgs};
use skin_risk::core::report::{LesionReport, UvReport};
use skin_risk::core::{ConfigProvider, PreferenceStore};
use skin_risk::domain::model::{LesionImage, LesionScore, UvIndex};
use skin_risk::domain::weather::Coordinates;
use skin_risk::utils::error::ErrorSeverity;
use skin_risk::utils::{logger, validation::Validate};
use skin_risk::{
    AppConfig, Cli, DetectionClient, FilePreferenceStore, Locale, OpenWeatherMapClient,
    ScreeningEngine, ScreeningError, WeatherClient,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI args: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ skin-risk failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

async fn run(cli: Cli) -> skin_risk::Result<()> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            AppConfig::from_file(path)?
        }
        None => AppConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    let store = FilePreferenceStore::new(config.preferences_path());
    let locale = match cli.locale {
        Some(locale) => locale,
        None => store.resolve_locale(config.default_locale())?,
    };
    tracing::debug!("Using locale {}", locale);

    match &cli.command {
        Command::Lesion(args) => lesion(&cli, &config, args, locale).await,
        Command::Uv(args) => uv(&cli, &config, args, locale).await,
        Command::Locale { action } => match action {
            LocaleAction::Show => {
                let stored = store.language()?;
                match stored {
                    Some(l) => println!("{}", l),
                    None => println!("{} (default)", config.default_locale()),
                }
                Ok(())
            }
            LocaleAction::Set { locale } => {
                store.set_language(*locale)?;
                println!("✅ Language set to {}", locale);
                Ok(())
            }
        },
    }
}

async fn lesion(cli: &Cli, config: &AppConfig, args: &LesionArgs, locale: Locale) -> skin_risk::Result<()> {
    let report = match (&args.score, &args.image) {
        (Some(score), _) => LesionReport::new(score.parse::<LesionScore>()?, locale),
        (None, Some(path)) => {
            let image = LesionImage::from_path(path)?;
            let scorer = DetectionClient::from_config(config)?;
            ScreeningEngine::with_scorer(scorer).lesion_report(&image, locale).await?
        }
        (None, None) => {
            return Err(ScreeningError::invalid_input("either --score or --image is required"))
        }
    };

    if cli.json {
        return print_json(&report);
    }
    println!("{}", report.label);
    println!("   score: {:.4}", report.score.value());
    println!("ℹ️  {}", report.disclaimer);
    Ok(())
}

async fn uv(cli: &Cli, config: &AppConfig, args: &UvArgs, locale: Locale) -> skin_risk::Result<()> {
    let report = match (&args.index, args.lat, args.lon) {
        (Some(index), _, _) => UvReport::from_index(index.parse::<UvIndex>()?, locale),
        (None, Some(lat), Some(lon)) => {
            let at = Coordinates::new(lat, lon)?;
            if args.upstream {
                let (endpoint, key) = config.openweathermap_credentials()?;
                let source = OpenWeatherMapClient::new(endpoint, key, config.timeout_seconds())?;
                ScreeningEngine::with_uv_source(source).uv_report(at, locale).await?
            } else {
                let source = WeatherClient::from_config(config)?;
                ScreeningEngine::with_uv_source(source).uv_report(at, locale).await?
            }
        }
        _ => {
            return Err(ScreeningError::invalid_input(
                "either --index or both --lat and --lon are required",
            ))
        }
    };

    if cli.json {
        return print_json(&report);
    }
    match report.temperature {
        Some(t) => println!("{} {}  {:.0}° F", report.forecast_icon, report.forecast_label, t),
        None => println!("{} {}", report.forecast_icon, report.forecast_label),
    }
    println!("UV {} ({}) - {}", report.uv_index, report.exposure_label, report.color);
    println!("{}", report.title);
    println!("{}", report.explanation);
    for advisory in &report.advisories {
        println!("  • {}", advisory);
    }
    Ok(())
}

fn print_json<T: Serialize>(report: &T) -> skin_risk::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

