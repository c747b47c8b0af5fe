use crate::utils::error::{Result, ScreeningError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages the advisory text is available in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ScreeningError;

    /// Accepts bare language codes and region-tagged ones (`es-MX`, `en_US`).
    fn from_str(s: &str) -> Result<Self> {
        let language = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            _ => Err(ScreeningError::InvalidConfigValueError {
                field: "locale".to_string(),
                value: s.to_string(),
                reason: "Supported locales: en, es".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = ScreeningError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Text that can be rendered in every supported [`Locale`].
pub trait Localized {
    fn text(&self, locale: Locale) -> &'static str;
}

/// Fixed copy shown alongside the classification results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    UvExplanation,
    LesionDisclaimer,
}

impl Localized for Message {
    fn text(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Message::UvExplanation, Locale::En) => {
                "UV radiation from the sun can damage skin cell DNA, leading to mutations that \
                 increase the risk of skin cancer. Protecting your skin with sunscreen, clothing, \
                 and shade helps reduce this risk."
            }
            (Message::UvExplanation, Locale::Es) => {
                "La radiación UV del sol puede dañar el ADN de las células de la piel, provocando \
                 mutaciones que aumentan el riesgo de cáncer de piel. Proteger su piel con \
                 protector solar, ropa y sombra ayuda a reducir este riesgo."
            }
            (Message::LesionDisclaimer, Locale::En) => {
                "This assessment is not a medical diagnosis. Consult a dermatologist about any \
                 lesion that concerns you."
            }
            (Message::LesionDisclaimer, Locale::Es) => {
                "Esta evaluación no es un diagnóstico médico. Consulte a un dermatólogo sobre \
                 cualquier lesión que le preocupe."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale_codes() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("ES".parse::<Locale>().unwrap(), Locale::Es);
        assert_eq!("es-MX".parse::<Locale>().unwrap(), Locale::Es);
        assert_eq!(" en_US ".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn test_deserialize_accepts_region_tags() {
        let locale: Locale = serde_json::from_str("\"es-MX\"").unwrap();
        assert_eq!(locale, Locale::Es);
        assert!(serde_json::from_str::<Locale>("\"fr\"").is_err());
        assert_eq!(serde_json::to_string(&Locale::Es).unwrap(), "\"es\"");
    }

    #[test]
    fn test_default_locale_is_english() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::default().to_string(), "en");
    }

    #[test]
    fn test_messages_exist_in_every_locale() {
        for locale in Locale::ALL {
            assert!(!Message::UvExplanation.text(locale).is_empty());
            assert!(!Message::LesionDisclaimer.text(locale).is_empty());
        }
        assert_ne!(
            Message::UvExplanation.text(Locale::En),
            Message::UvExplanation.text(Locale::Es)
        );
    }
}
