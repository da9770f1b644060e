// src/core/mod.rs
pub mod service_client;

pub use service_client::{EnhancedDocument, EnhancerServiceClient};
