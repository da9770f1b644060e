// src/request.rs
//! Turns the current `InputState` into a transport-ready payload

use crate::error::EnhancerError;
use crate::input::{split_keywords, InputState};

/// Snapshot of one submission. Built fresh per request; later edits to the
/// `InputState` never reach an in-flight call.
#[derive(Debug, Clone)]
pub struct RequestPayload {
    pub file_name: String,
    pub file_bytes: Vec<u8>,
    pub content_type: &'static str,
    pub job_description: String,
    /// The wire format keeps keywords as a JSON-encoded array string, not a
    /// structured multipart field. Both ends agree on this encoding.
    pub keywords_json: String,
}

pub struct RequestBuilder;

impl RequestBuilder {
    /// Package the input for submission. Fails with `MissingInput` when no
    /// document has been selected; this check happens before any network call.
    pub fn build(input: &InputState) -> Result<RequestPayload, EnhancerError> {
        let document = input.document.as_ref().ok_or(EnhancerError::MissingInput)?;

        // A JSON array of strings cannot fail to serialize; going through
        // Value keeps this path infallible.
        let keywords = split_keywords(&input.keywords_raw);
        let keywords_json = serde_json::Value::from(keywords).to_string();

        Ok(RequestPayload {
            file_name: document.file_name.clone(),
            file_bytes: document.bytes.clone(),
            content_type: content_type_for(&document.file_name),
            job_description: input.job_description.clone(),
            keywords_json,
        })
    }
}

/// Content type from the file extension. Unknown extensions are sent as
/// opaque bytes; the service does its own sniffing.
fn content_type_for(file_name: &str) -> &'static str {
    let lower_name = file_name.to_lowercase();
    if lower_name.ends_with(".pdf") {
        "application/pdf"
    } else if lower_name.ends_with(".docx") {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    } else if lower_name.ends_with(".png") {
        "image/png"
    } else if lower_name.ends_with(".jpg") || lower_name.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}
