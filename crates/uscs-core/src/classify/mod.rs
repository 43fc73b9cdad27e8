pub mod coarse;
pub mod components;
pub mod engine;
pub mod fine;
pub mod naming;
pub mod outcome;

pub use engine::{classify, classify_with, ClassifyOptions, GradationPolicy};
pub use outcome::{ClassificationResult, SampleReport, SoilPath};
