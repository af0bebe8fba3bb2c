use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::profile::{CandidateProfile, Field, Gpa};

/// Free-form readiness analysis, passed through exactly as the service returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnalysisResult(String);

impl AnalysisResult {
    pub fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Scores available once intake is accepted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredAssessment {
    pub profile: CandidateProfile,
    pub interview_score: f64,
    pub gpa_score: f64,
}

/// Final output of a session.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub session_id: Uuid,
    pub field: Field,
    pub subfield: String,
    pub gpa: Gpa,
    pub interview_score: f64,
    pub gpa_score: f64,
    pub analysis: AnalysisResult,
    pub generated_at: DateTime<Utc>,
}

impl AssessmentReport {
    pub fn new(session_id: Uuid, scored: &ScoredAssessment, analysis: AnalysisResult) -> Self {
        Self {
            session_id,
            field: scored.profile.field(),
            subfield: scored.profile.subfield().to_string(),
            gpa: scored.profile.gpa(),
            interview_score: scored.interview_score,
            gpa_score: scored.gpa_score,
            analysis,
            generated_at: Utc::now(),
        }
    }

    /// Plain-text rendering with the score sections followed by the analysis.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Profile Analysis: {} ({})", self.field, self.subfield);
        let _ = writeln!(out);
        let _ = writeln!(out, "Behavioral Interview Performance:");
        let _ = writeln!(out, "  {}", progress_bar(self.interview_score));
        let _ = writeln!(out, "  Score: {:.1}%", self.interview_score);
        let _ = writeln!(out);
        let _ = writeln!(out, "Academic Performance:");
        let _ = writeln!(out, "  {}", progress_bar(self.gpa_score));
        let _ = writeln!(out, "  GPA: {}", self.gpa);
        let _ = writeln!(out);
        let _ = writeln!(out, "Detailed Analysis:");
        let _ = writeln!(out, "{}", self.analysis.as_str());
        out
    }
}

fn progress_bar(percent: f64) -> String {
    const WIDTH: usize = 20;
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored() -> ScoredAssessment {
        ScoredAssessment {
            profile: CandidateProfile::new(
                Field::Editor,
                "Video",
                Gpa::new(3.0).unwrap(),
                vec![2, 1, 2, 0, 0],
            ),
            interview_score: 60.0,
            gpa_score: 75.0,
        }
    }

    #[test]
    fn test_render_text_formats_scores() {
        let report = AssessmentReport::new(
            Uuid::new_v4(),
            &scored(),
            AnalysisResult::new("Strong editing portfolio.".to_string()),
        );
        let text = report.render_text();
        assert!(text.contains("Profile Analysis: Editor (Video)"));
        assert!(text.contains("Score: 60.0%"));
        assert!(text.contains("GPA: 3.0/4.0"));
        assert!(text.contains("[###############-----]"));
        assert!(text.ends_with("Strong editing portfolio.\n"));
    }

    #[test]
    fn test_report_json_keeps_analysis_verbatim() {
        let analysis = "  **1. Skills**\n- Rust  ".to_string();
        let report = AssessmentReport::new(Uuid::nil(), &scored(), AnalysisResult::new(analysis.clone()));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["analysis"], serde_json::json!(analysis));
        assert_eq!(value["field"], "Editor");
        assert_eq!(value["gpa"], 3.0);
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), format!("[{}]", "-".repeat(20)));
        assert_eq!(progress_bar(100.0), format!("[{}]", "#".repeat(20)));
        assert_eq!(progress_bar(150.0), format!("[{}]", "#".repeat(20)));
    }
}
