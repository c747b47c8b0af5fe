use skin_risk::core::report::UvReport;
use skin_risk::core::PreferenceStore;
use skin_risk::domain::model::{LesionRiskCategory, UvIndex, UvRiskCategory};
use skin_risk::{FilePreferenceStore, LesionRiskClassifier, Locale, Localized, UvRiskAdvisor};
use tempfile::TempDir;

#[test]
fn test_lesion_end_to_end_scores() {
    let cases = [
        (0.10, LesionRiskCategory::Benign),
        (0.50, LesionRiskCategory::Inconclusive),
        (0.90, LesionRiskCategory::Malignant),
    ];
    for (score, expected) in cases {
        assert_eq!(LesionRiskClassifier::classify(score).unwrap(), expected);
    }
}

#[test]
fn test_lesion_boundary_exactness() {
    assert_eq!(LesionRiskClassifier::classify(0.25).unwrap(), LesionRiskCategory::LikelyBenign);
    assert_eq!(LesionRiskClassifier::classify(0.2499).unwrap(), LesionRiskCategory::Benign);
    assert_eq!(LesionRiskClassifier::classify(0.85).unwrap(), LesionRiskCategory::Malignant);
    assert_eq!(
        LesionRiskClassifier::classify(0.8499).unwrap(),
        LesionRiskCategory::LikelyMalignant
    );
}

#[test]
fn test_every_lesion_category_is_reachable() {
    let reached: Vec<LesionRiskCategory> = [0.0, 0.3, 0.6, 0.8, 1.0]
        .into_iter()
        .map(|s| LesionRiskClassifier::classify(s).unwrap())
        .collect();
    assert_eq!(reached, LesionRiskCategory::ALL.to_vec());
}

#[test]
fn test_uv_end_to_end_indices() {
    let cases = [
        (1.0, UvRiskCategory::Low, 1),
        (5.0, UvRiskCategory::Moderate, 2),
        (9.0, UvRiskCategory::Severe, 3),
    ];
    for (index, category, advisories) in cases {
        let advice = UvRiskAdvisor::classify(index).unwrap();
        assert_eq!(advice.category, category);
        assert_eq!(advice.advisories.len(), advisories);
    }
}

#[test]
fn test_uv_boundaries() {
    assert_eq!(UvRiskAdvisor::classify(2.0).unwrap().category, UvRiskCategory::Low);
    assert_eq!(UvRiskAdvisor::classify(2.01).unwrap().category, UvRiskCategory::Moderate);
    assert_eq!(UvRiskAdvisor::classify(7.0).unwrap().category, UvRiskCategory::Moderate);
    assert_eq!(UvRiskAdvisor::classify(7.01).unwrap().category, UvRiskCategory::Severe);
}

#[test]
fn test_invalid_inputs_are_signalled() {
    assert!(LesionRiskClassifier::classify(f64::NAN).unwrap_err().is_invalid_input());
    assert!(LesionRiskClassifier::classify_str("x").unwrap_err().is_invalid_input());
    assert!(UvRiskAdvisor::classify(f64::NAN).unwrap_err().is_invalid_input());
    assert!(UvRiskAdvisor::classify_str("x").unwrap_err().is_invalid_input());
}

#[test]
fn test_advisories_resolve_in_both_locales() {
    let advice = UvRiskAdvisor::classify(9.0).unwrap();
    let english = advice.advisory_texts(Locale::En);
    let spanish = advice.advisory_texts(Locale::Es);
    assert_eq!(english.len(), spanish.len());
    assert_eq!(english[1], "Avoid outdoors at midday");
    assert_eq!(spanish[1], "Evite estar al aire libre al mediodía");
    for category in LesionRiskCategory::ALL {
        assert_ne!(category.text(Locale::En), category.text(Locale::Es));
    }
}

#[test]
fn test_stored_language_drives_report_locale() {
    let dir = TempDir::new().unwrap();
    let store = FilePreferenceStore::new(dir.path().join("preferences.json"));

    let locale = store.resolve_locale(Locale::default()).unwrap();
    let report = UvReport::from_index(UvIndex::new(1.0).unwrap(), locale);
    assert_eq!(report.advisories, vec!["No protection needed"]);

    store.set_language(Locale::Es).unwrap();
    let locale = store.resolve_locale(Locale::default()).unwrap();
    let report = UvReport::from_index(UvIndex::new(1.0).unwrap(), locale);
    assert_eq!(report.advisories, vec!["No se necesita protección"]);
    assert_eq!(report.title, "Riesgo Bajo de Cáncer de Piel");
}

struct ConstantScorer(f64);

#[async_trait::async_trait]
impl skin_risk::core::LesionScorer for ConstantScorer {
    async fn score(
        &self,
        _image: &skin_risk::domain::model::LesionImage,
    ) -> skin_risk::Result<skin_risk::domain::model::LesionScore> {
        skin_risk::domain::model::LesionScore::new(self.0)
    }
}

#[test]
fn test_engine_can_be_driven_without_a_runtime_macro() {
    let image = skin_risk::domain::model::LesionImage::new("lesion.jpg", vec![0xff, 0xd8]).unwrap();
    let engine = skin_risk::ScreeningEngine::with_scorer(ConstantScorer(0.78));

    let report = tokio_test::block_on(engine.lesion_report(&image, Locale::En)).unwrap();
    assert_eq!(report.category, LesionRiskCategory::LikelyMalignant);
    assert_eq!(report.label, "Likely Malignant");
}
