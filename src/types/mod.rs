// src/types/mod.rs
pub mod analysis;

pub use analysis::{AnalysisReport, DetailedChange};
