// src/types/analysis.rs
//! Response shape of the /analyze endpoint

use serde::{Deserialize, Serialize};

/// One suggested edit. Only `change` is guaranteed by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailedChange {
    pub change: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub ats_impact: Option<String>,
}

/// The full analysis critique. Every field is optional on the wire and
/// defaults to empty; the struct is replaced wholesale on each successful
/// analyze call, never patched field by field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub detailed_changes: Vec<DetailedChange>,
    #[serde(default)]
    pub enhanced_text_preview: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal_response() {
        let report: AnalysisReport =
            serde_json::from_str(r#"{"overview":"X","detailed_changes":[{"change":"Y"}]}"#)
                .unwrap();
        assert_eq!(report.overview, "X");
        assert_eq!(report.detailed_changes.len(), 1);
        assert_eq!(report.detailed_changes[0].change, "Y");
        assert_eq!(report.detailed_changes[0].reason, None);
        assert_eq!(report.detailed_changes[0].ats_impact, None);
        assert_eq!(report.enhanced_text_preview, "");
    }

    #[test]
    fn test_decode_empty_object() {
        let report: AnalysisReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report, AnalysisReport::default());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let report: AnalysisReport =
            serde_json::from_str(r#"{"overview":"ok","score":97,"model":"llama"}"#).unwrap();
        assert_eq!(report.overview, "ok");
        assert!(report.detailed_changes.is_empty());
    }

    #[test]
    fn test_decode_full_change_entry() {
        let report: AnalysisReport = serde_json::from_str(
            r#"{"detailed_changes":[{"change":"Quantify impact","reason":"Vague bullet","ats_impact":"high"}]}"#,
        )
        .unwrap();
        let entry = &report.detailed_changes[0];
        assert_eq!(entry.reason.as_deref(), Some("Vague bullet"));
        assert_eq!(entry.ats_impact.as_deref(), Some("high"));
    }
}
