// src/core/service_client.rs
//! HTTP client for the resume enhancer service - multipart in, JSON or
//! binary out depending on the endpoint

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use tracing::{error, info, trace};

use crate::config::ServiceConfig;
use crate::error::EnhancerError;
use crate::request::RequestPayload;
use crate::types::AnalysisReport;

const ANALYZE_ENDPOINT: &str = "/analyze";
const ENHANCE_ENDPOINT: &str = "/enhance";

/// Binary body of a successful /enhance call, before it is wrapped in an
/// artifact handle.
#[derive(Debug)]
pub struct EnhancedDocument {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

pub struct EnhancerServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl EnhancerServiceClient {
    /// Create new service client with configuration
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Send the payload to /analyze and decode the JSON critique.
    pub async fn analyze(&self, payload: &RequestPayload) -> Result<AnalysisReport, EnhancerError> {
        const OP: &str = "analyze";
        let url = format!("{}{}", self.base_url, ANALYZE_ENDPOINT);
        let form = build_form(payload, OP)?;

        info!("Calling analysis service: {}", url);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| EnhancerError::request(OP, e))?;

        let status = response.status();
        trace!("Analyze response status: {}", status);

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Analysis service error response: {}", error_text);
            return Err(EnhancerError::request(
                OP,
                format!("status {}: {}", status, error_text),
            ));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| EnhancerError::request(OP, e))?;

        serde_json::from_str(&response_text).map_err(|e| EnhancerError::decode(OP, e))
    }

    /// Send the payload to /enhance and read the regenerated document back
    /// as opaque bytes.
    pub async fn enhance(
        &self,
        payload: &RequestPayload,
    ) -> Result<EnhancedDocument, EnhancerError> {
        const OP: &str = "enhance";
        let url = format!("{}{}", self.base_url, ENHANCE_ENDPOINT);
        let form = build_form(payload, OP)?;

        info!("Calling enhancement service: {}", url);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| EnhancerError::request(OP, e))?;

        let status = response.status();
        trace!("Enhance response status: {}", status);

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Enhancement service error response: {}", error_text);
            return Err(EnhancerError::request(
                OP,
                format!("status {}: {}", status, error_text),
            ));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        // The body is consumed whole; there is no streaming path.
        let bytes = response
            .bytes()
            .await
            .map_err(|e| EnhancerError::decode(OP, e))?;

        Ok(EnhancedDocument {
            bytes: bytes.to_vec(),
            content_type,
        })
    }
}

/// Both endpoints take the same three-field multipart body: the document,
/// the free-text job description, and the keywords as a JSON array string.
fn build_form(payload: &RequestPayload, operation: &'static str) -> Result<Form, EnhancerError> {
    let file_part = Part::bytes(payload.file_bytes.clone())
        .file_name(payload.file_name.clone())
        .mime_str(payload.content_type)
        .map_err(|e| EnhancerError::request(operation, e))?;

    Ok(Form::new()
        .part("file", file_part)
        .text("job_description", payload.job_description.clone())
        .text("keywords", payload.keywords_json.clone()))
}
