//! Archive extraction.

pub mod plan;
pub mod stream;
pub mod tar;
pub mod zip;

pub use plan::EXTRACT_PASSWORD_PROMPT;
pub use plan::ExtractOptions;
pub use plan::ExtractionPlan;
pub use zip::PARTIAL_EXTRACTION_WARNING;
