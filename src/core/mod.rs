pub mod engine;
pub mod lesion;
pub mod report;
pub mod uv;

pub use crate::domain::model::{LesionRiskCategory, UvAdvice, UvRiskCategory};
pub use crate::domain::ports::{ConfigProvider, LesionScorer, PreferenceStore, UvSource};
pub use crate::utils::error::Result;
