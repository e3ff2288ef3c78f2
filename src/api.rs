use retention_os::AnalysisReport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ApiAnalysisRequest {
    pub text: Option<String>,
    pub request_id: Option<String>,
}

impl ApiAnalysisRequest {
    /// Trimmed content, or an error when nothing is left to analyze.
    pub fn content(&self) -> Result<String, String> {
        let text = self.text.as_deref().unwrap_or_default().trim();
        if text.is_empty() {
            return Err("text is required".to_string());
        }
        Ok(text.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct ApiAnalysisResponse {
    pub request_id: String,
    pub delay_ms: u64,
    pub report: AnalysisReport,
}

impl ApiAnalysisResponse {
    pub fn from_report(report: AnalysisReport, request_id: String, delay_ms: u64) -> Self {
        Self {
            request_id,
            delay_ms,
            report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: Option<&str>) -> ApiAnalysisRequest {
        ApiAnalysisRequest {
            text: text.map(str::to_string),
            request_id: None,
        }
    }

    #[test]
    fn content_is_trimmed() {
        let content = request(Some("  gm builders  \n")).content().unwrap();
        assert_eq!(content, "gm builders");
    }

    #[test]
    fn blank_or_missing_text_is_rejected() {
        assert_eq!(request(Some(" \n\t ")).content().unwrap_err(), "text is required");
        assert_eq!(request(None).content().unwrap_err(), "text is required");
    }

    #[test]
    fn request_parses_from_json() {
        let parsed: ApiAnalysisRequest =
            serde_json::from_str(r#"{"text":"Why do most NFT projects fail?","request_id":"req-1"}"#)
                .unwrap();
        assert_eq!(parsed.request_id.as_deref(), Some("req-1"));
        assert_eq!(parsed.content().unwrap(), "Why do most NFT projects fail?");
    }

    #[test]
    fn response_serializes_report_labels() {
        let report = retention_os::analyze("What if I told you most traders lose money because of one mistake?");
        let response = ApiAnalysisResponse::from_report(report, "req-7".to_string(), 0);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["request_id"], "req-7");
        assert_eq!(json["report"]["hook_analysis"]["current_hook"], "Curiosity Gap");
        assert_eq!(json["report"]["format_recommendation"]["format"], "Short Tweet");
    }
}
