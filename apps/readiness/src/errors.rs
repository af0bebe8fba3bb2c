use thiserror::Error;

use crate::document::ExtractionError;
use crate::intake::IntakeError;
use crate::llm_client::LlmError;
use crate::questionnaire::scoring::ScoringError;
use crate::wizard::StageKind;

/// Application-level error type.
/// Every variant is recoverable: the session falls back to a prior stage.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Intake error: {0}")]
    Intake(#[from] IntakeError),

    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Document error: {0}")]
    Document(#[from] ExtractionError),

    #[error("Analysis service error: {0}")]
    Analysis(#[from] LlmError),

    #[error("Cannot {action} while the assessment is in the {stage} stage")]
    InvalidTransition {
        action: &'static str,
        stage: StageKind,
    },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code for the error class.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Intake(_) => "INTAKE_ERROR",
            AppError::Scoring(_) => "SCORING_ERROR",
            AppError::Document(_) => "DOCUMENT_ERROR",
            AppError::Analysis(_) => "ANALYSIS_ERROR",
            AppError::InvalidTransition { .. } => "INVALID_TRANSITION",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to the candidate. Service and internal failures are
    /// replaced by a generic message; logging the full error is the caller's job.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Intake(e) => e.to_string(),
            AppError::Scoring(e) => e.to_string(),
            AppError::Document(e) => format!(
                "Could not read your resume ({e}). Please upload a different PDF and try again."
            ),
            AppError::Analysis(e) => match e {
                LlmError::RateLimited { .. } => {
                    "The analysis service is busy right now. Please try again shortly.".to_string()
                }
                LlmError::Auth { .. } => {
                    "The analysis service rejected our credentials. Please contact support."
                        .to_string()
                }
                _ => "The analysis service could not complete your assessment. Please try again."
                    .to_string(),
            },
            AppError::InvalidTransition { .. } => self.to_string(),
            AppError::Internal(_) => "An internal error occurred".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_document_and_analysis_errors_are_distinct() {
        let doc: AppError = ExtractionError::NotPdf {
            name: "cv.docx".to_string(),
        }
        .into();
        let llm: AppError = LlmError::EmptyContent.into();
        assert_eq!(doc.code(), "DOCUMENT_ERROR");
        assert_eq!(llm.code(), "ANALYSIS_ERROR");
        assert!(doc.user_message().contains("different PDF"));
        assert!(!llm.user_message().contains("PDF"));
    }

    #[test]
    fn test_rate_limit_message() {
        let err: AppError = LlmError::RateLimited { retries: 1 }.into();
        assert!(err.user_message().contains("busy"));
    }

    #[test]
    fn test_invalid_transition_message_names_stage() {
        let err = AppError::InvalidTransition {
            action: "analyze",
            stage: StageKind::Intake,
        };
        assert_eq!(
            err.user_message(),
            "Cannot analyze while the assessment is in the intake stage"
        );
    }

    #[test]
    fn test_user_message_emits_no_log() {
        let captured = Captured(Arc::new(Mutex::new(Vec::new())));
        let sink = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .finish();

        let analysis: AppError = LlmError::Api {
            status: 500,
            message: "backend exploded".to_string(),
        }
        .into();
        let internal = AppError::Internal(anyhow::anyhow!("report missing"));
        tracing::subscriber::with_default(subscriber, || {
            analysis.user_message();
            internal.user_message();
        });

        assert!(captured.0.lock().unwrap().is_empty());
    }
}
