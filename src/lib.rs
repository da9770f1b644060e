//! Client for the Intelligent Resume Enhancer service.
//!
//! A session submits a resume document (plus optional job description and
//! comma-separated keywords) as multipart form data and consumes two kinds
//! of results: a structured JSON critique from `/analyze` and a regenerated
//! binary document from `/enhance`, the latter held behind a transient
//! artifact handle until it is downloaded or replaced.

pub mod artifact;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod request;
pub mod session;
pub mod store;
pub mod types;

pub use artifact::{ArtifactStore, EnhancementArtifact};
pub use config::ServiceConfig;
pub use error::EnhancerError;
pub use input::{DocumentInput, InputState};
pub use request::{RequestBuilder, RequestPayload};
pub use session::EnhancerSession;
pub use store::{OperationState, ResultStore};
pub use types::{AnalysisReport, DetailedChange};
