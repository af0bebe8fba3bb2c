//! Assessment session: Intake → Scored → Analyzed, with reset back to Intake.
//!
//! The session owns the stage; the scorer, extractor and analyzer are invoked
//! at each transition and hold no session state of their own.

use std::fmt;

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::{AnalysisRequest, ProfileAnalyzer};
use crate::document::{Document, DocumentExtractor};
use crate::errors::AppError;
use crate::intake::{IntakeForm, IntakeStatus};
use crate::models::assessment::{AssessmentReport, ScoredAssessment};
use crate::questionnaire::bank::question_bank;
use crate::questionnaire::scoring::score_responses;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    Intake,
    Scored,
    Analyzed,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StageKind::Intake => "intake",
            StageKind::Scored => "scored",
            StageKind::Analyzed => "analyzed",
        })
    }
}

#[derive(Debug, Clone)]
enum Stage {
    Intake,
    Scored(ScoredAssessment),
    Analyzed {
        scored: ScoredAssessment,
        report: AssessmentReport,
    },
}

#[derive(Debug, Clone)]
pub struct AssessmentSession {
    id: Uuid,
    stage: Stage,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            stage: Stage::Intake,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn stage(&self) -> StageKind {
        match self.stage {
            Stage::Intake => StageKind::Intake,
            Stage::Scored(_) => StageKind::Scored,
            Stage::Analyzed { .. } => StageKind::Analyzed,
        }
    }

    pub fn scored(&self) -> Option<&ScoredAssessment> {
        match &self.stage {
            Stage::Intake => None,
            Stage::Scored(scored) | Stage::Analyzed { scored, .. } => Some(scored),
        }
    }

    pub fn report(&self) -> Option<&AssessmentReport> {
        match &self.stage {
            Stage::Analyzed { report, .. } => Some(report),
            _ => None,
        }
    }

    /// Reviews the intake form and, if every question is answered, scores it and
    /// advances to `Scored`. An incomplete form leaves the session in `Intake`.
    pub fn submit_intake(&mut self, form: &IntakeForm) -> Result<IntakeStatus, AppError> {
        if !matches!(self.stage, Stage::Intake) {
            return Err(self.invalid("submit intake"));
        }

        let status = form.review(question_bank())?;
        let profile = match &status {
            IntakeStatus::Incomplete { unanswered } => {
                info!(session_id = %self.id, ?unanswered, "Intake incomplete");
                return Ok(status);
            }
            IntakeStatus::Ready(profile) => profile.clone(),
        };

        let interview_score = score_responses(profile.responses())?;
        let gpa_score = profile.gpa().as_percentage();
        info!(
            session_id = %self.id,
            field = %profile.field(),
            subfield = profile.subfield(),
            interview_score,
            gpa_score,
            "Intake accepted and scored"
        );

        self.stage = Stage::Scored(ScoredAssessment {
            profile,
            interview_score,
            gpa_score,
        });
        Ok(status)
    }

    /// Extracts the resume and requests the readiness analysis.
    ///
    /// Allowed from `Scored`, or from `Analyzed` to re-run with another document.
    /// On failure the session is left in `Scored` so the caller can retry.
    pub async fn analyze(
        &mut self,
        document: &Document,
        extractor: &dyn DocumentExtractor,
        analyzer: &ProfileAnalyzer,
    ) -> Result<&AssessmentReport, AppError> {
        let scored = match &self.stage {
            Stage::Scored(scored) | Stage::Analyzed { scored, .. } => scored.clone(),
            Stage::Intake => return Err(self.invalid("analyze")),
        };
        self.stage = Stage::Scored(scored.clone());

        let resume_text = extractor.extract_text(document).map_err(|e| {
            warn!(session_id = %self.id, "Resume extraction failed: {e}");
            AppError::from(e)
        })?;

        let request = AnalysisRequest {
            resume_text: &resume_text,
            field: scored.profile.field(),
            subfield: scored.profile.subfield(),
            interview_score: scored.interview_score,
            gpa: scored.profile.gpa(),
        };
        let analysis = analyzer.analyze(&request).await.map_err(|e| {
            warn!(session_id = %self.id, "Readiness analysis failed: {e}");
            AppError::from(e)
        })?;

        info!(session_id = %self.id, document = %document.name, "Assessment analyzed");
        let report = AssessmentReport::new(self.id, &scored, analysis);
        self.stage = Stage::Analyzed { scored, report };

        self.report()
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("report missing after analysis")))
    }

    /// Discards all input and returns to `Intake`.
    #[allow(dead_code)] // the one-shot CLI driver never reuses a session
    pub fn reset(&mut self) {
        info!(session_id = %self.id, from = %self.stage(), "Assessment reset");
        self.stage = Stage::Intake;
    }

    fn invalid(&self, action: &'static str) -> AppError {
        AppError::InvalidTransition {
            action,
            stage: self.stage(),
        }
    }
}
