use crate::domain::locale::{Locale, Localized};
use crate::utils::error::{Result, ScreeningError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Malignancy likelihood reported by the classification service.
///
/// Conventionally in `[0, 1]`; any finite value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct LesionScore(f64);

impl LesionScore {
    pub fn new(value: f64) -> Result<Self> {
        finite("lesion score", value).map(Self)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl FromStr for LesionScore {
    type Err = ScreeningError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(parse_number("lesion score", s)?)
    }
}

impl TryFrom<&serde_json::Value> for LesionScore {
    type Error = ScreeningError;

    /// Accepts a bare number or the batched `[[0.42]]` shape the model emits.
    fn try_from(value: &serde_json::Value) -> Result<Self> {
        Self::new(json_number("lesion score", value)?)
    }
}

/// Solar UV intensity at a location, conventionally 0 to 11+.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct UvIndex(f64);

impl UvIndex {
    pub fn new(value: f64) -> Result<Self> {
        finite("UV index", value).map(Self)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl FromStr for UvIndex {
    type Err = ScreeningError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(parse_number("UV index", s)?)
    }
}

impl TryFrom<&serde_json::Value> for UvIndex {
    type Error = ScreeningError;

    fn try_from(value: &serde_json::Value) -> Result<Self> {
        Self::new(json_number("UV index", value)?)
    }
}

impl fmt::Display for UvIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn finite(what: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScreeningError::invalid_input(format!(
            "{} must be a finite number, got {}",
            what, value
        )))
    }
}

fn parse_number(what: &str, s: &str) -> Result<f64> {
    s.trim().parse::<f64>().map_err(|_| {
        ScreeningError::invalid_input(format!("{} must be numeric, got '{}'", what, s))
    })
}

fn json_number(what: &str, value: &serde_json::Value) -> Result<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64().ok_or_else(|| {
            ScreeningError::invalid_input(format!("{} is not representable: {}", what, n))
        }),
        serde_json::Value::Array(items) if items.len() == 1 => json_number(what, &items[0]),
        other => Err(ScreeningError::invalid_input(format!(
            "{} must be numeric, got {}",
            what, other
        ))),
    }
}

/// Lesion assessment buckets, ordered by increasing concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LesionRiskCategory {
    Benign,
    LikelyBenign,
    Inconclusive,
    LikelyMalignant,
    Malignant,
}

impl LesionRiskCategory {
    pub const ALL: [LesionRiskCategory; 5] = [
        LesionRiskCategory::Benign,
        LesionRiskCategory::LikelyBenign,
        LesionRiskCategory::Inconclusive,
        LesionRiskCategory::LikelyMalignant,
        LesionRiskCategory::Malignant,
    ];

    /// Position in the concern ordering, starting at 0 for `Benign`.
    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl Localized for LesionRiskCategory {
    fn text(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (LesionRiskCategory::Benign, Locale::En) => "Benign",
            (LesionRiskCategory::Benign, Locale::Es) => "Benigno",
            (LesionRiskCategory::LikelyBenign, Locale::En) => "Likely Benign",
            (LesionRiskCategory::LikelyBenign, Locale::Es) => "Probablemente Benigno",
            (LesionRiskCategory::Inconclusive, Locale::En) => "Inconclusive",
            (LesionRiskCategory::Inconclusive, Locale::Es) => "Inconcluso",
            (LesionRiskCategory::LikelyMalignant, Locale::En) => "Likely Malignant",
            (LesionRiskCategory::LikelyMalignant, Locale::Es) => "Probablemente Maligno",
            (LesionRiskCategory::Malignant, Locale::En) => "Malignant",
            (LesionRiskCategory::Malignant, Locale::Es) => "Maligno",
        }
    }
}

/// UV exposure buckets used for protection advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UvRiskCategory {
    Low,
    Moderate,
    Severe,
}

impl UvRiskCategory {
    pub const ALL: [UvRiskCategory; 3] = [
        UvRiskCategory::Low,
        UvRiskCategory::Moderate,
        UvRiskCategory::Severe,
    ];

    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Display color of the UV rating.
    pub fn color(self) -> &'static str {
        match self {
            UvRiskCategory::Low => "green",
            UvRiskCategory::Moderate => "orange",
            UvRiskCategory::Severe => "red",
        }
    }

    /// Recommended actions, in display order.
    pub fn advisories(self) -> &'static [Advisory] {
        match self {
            UvRiskCategory::Low => &[Advisory::NoProtectionNeeded],
            UvRiskCategory::Moderate => &[
                Advisory::SunglassesAndSunscreen,
                Advisory::SeekShadeAtMidday,
            ],
            UvRiskCategory::Severe => &[
                Advisory::SunglassesAndSunscreen,
                Advisory::AvoidOutdoorsAtMidday,
                Advisory::SeekShadeAtMidday,
            ],
        }
    }
}

impl Localized for UvRiskCategory {
    fn text(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (UvRiskCategory::Low, Locale::En) => "Low Skin Cancer Risk",
            (UvRiskCategory::Low, Locale::Es) => "Riesgo Bajo de Cáncer de Piel",
            (UvRiskCategory::Moderate, Locale::En) => "Moderate Skin Cancer Risk",
            (UvRiskCategory::Moderate, Locale::Es) => "Riesgo Moderado de Cáncer de Piel",
            (UvRiskCategory::Severe, Locale::En) => "Severe Skin Cancer Risk",
            (UvRiskCategory::Severe, Locale::Es) => "Riesgo Severo de Cáncer de Piel",
        }
    }
}

/// A recommended protective action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    NoProtectionNeeded,
    SunglassesAndSunscreen,
    AvoidOutdoorsAtMidday,
    SeekShadeAtMidday,
}

impl Localized for Advisory {
    fn text(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Advisory::NoProtectionNeeded, Locale::En) => "No protection needed",
            (Advisory::NoProtectionNeeded, Locale::Es) => "No se necesita protección",
            (Advisory::SunglassesAndSunscreen, Locale::En) => {
                "Wear sunglasses and SPF 30+ sunscreen"
            }
            (Advisory::SunglassesAndSunscreen, Locale::Es) => {
                "Use gafas de sol y protector solar FPS 30+"
            }
            (Advisory::AvoidOutdoorsAtMidday, Locale::En) => "Avoid outdoors at midday",
            (Advisory::AvoidOutdoorsAtMidday, Locale::Es) => {
                "Evite estar al aire libre al mediodía"
            }
            (Advisory::SeekShadeAtMidday, Locale::En) => "Seek shade at midday",
            (Advisory::SeekShadeAtMidday, Locale::Es) => "Busque sombra al mediodía",
        }
    }
}

/// Outcome of the UV advisor: the category plus its ordered advisories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UvAdvice {
    pub category: UvRiskCategory,
    pub advisories: Vec<Advisory>,
}

impl UvAdvice {
    pub fn advisory_texts(&self, locale: Locale) -> Vec<&'static str> {
        self.advisories.iter().map(|a| a.text(locale)).collect()
    }
}

/// An image to upload to the classification service.
#[derive(Debug, Clone)]
pub struct LesionImage {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl LesionImage {
    pub const SUPPORTED_EXTENSIONS: [&'static str; 3] = ["png", "jpg", "jpeg"];

    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let file_name = file_name.into();
        let mime_type = Self::mime_for(&file_name)?;
        if bytes.is_empty() {
            return Err(ScreeningError::invalid_input(format!(
                "image '{}' is empty",
                file_name
            )));
        }
        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                ScreeningError::invalid_input(format!("'{}' is not a file", path.display()))
            })?
            .to_string();
        let bytes = std::fs::read(path)?;
        Self::new(file_name, bytes)
    }

    fn mime_for(file_name: &str) -> Result<&'static str> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("png") => Ok("image/png"),
            Some("jpg") | Some("jpeg") => Ok("image/jpeg"),
            _ => Err(ScreeningError::invalid_input(format!(
                "unsupported image '{}'. Allowed extensions: {}",
                file_name,
                Self::SUPPORTED_EXTENSIONS.join(", ")
            ))),
        }
    }
}
