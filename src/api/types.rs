use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Analysis report
// ---------------------------------------------------------------------------

/// The structured scoring result the analysis service returns for one
/// researcher.
///
/// The breakdown is keyed by snake-case category names (e.g.
/// `citation_impact`); a `BTreeMap` keeps iteration order stable so the same
/// report always renders the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub author_name: String,
    pub final_score: f64,
    pub confidence_score: f64,
    pub final_rating: String,
    pub summary: String,
    pub breakdown: BTreeMap<String, BreakdownEntry>,
}

/// One named sub-score/category within an [`AnalysisReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub analysis: String,
    pub score: f64,
}

impl BreakdownEntry {
    /// Whether the score carries positive visual polarity (`>= 0`).
    pub fn is_positive(&self) -> bool {
        self.score >= 0.0
    }
}

// ---------------------------------------------------------------------------
// Error body
// ---------------------------------------------------------------------------

/// Optional JSON body of a non-success response: `{ "error": "..." }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "author_name": "D. Sculley",
        "final_score": 7.2,
        "confidence_score": 0.8,
        "final_rating": "Good",
        "summary": "Consistent output.",
        "breakdown": {
            "citation_impact": { "analysis": "Above average.", "score": 3 }
        }
    }"#;

    #[test]
    fn decodes_well_formed_report() {
        let report: AnalysisReport = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(report.author_name, "D. Sculley");
        assert_eq!(report.final_score, 7.2);
        assert_eq!(report.final_rating, "Good");
        assert_eq!(report.breakdown.len(), 1);
        let entry = &report.breakdown["citation_impact"];
        assert_eq!(entry.analysis, "Above average.");
        assert!(entry.is_positive());
    }

    #[test]
    fn rejects_report_missing_fields() {
        let body = r#"{ "author_name": "X" }"#;
        assert!(serde_json::from_str::<AnalysisReport>(body).is_err());
    }

    #[test]
    fn negative_score_has_negative_polarity() {
        let entry = BreakdownEntry {
            analysis: "Declining citations.".into(),
            score: -1.5,
        };
        assert!(!entry.is_positive());
    }

    #[test]
    fn error_body_field_is_optional() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"Researcher not found."}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Researcher not found."));

        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.error.is_none());
    }
}
