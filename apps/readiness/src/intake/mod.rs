#![allow(dead_code)]

//! Intake — collects field, subfield, GPA and questionnaire answers, and decides
//! whether the candidate may advance to scoring.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::profile::{CandidateProfile, Field, Gpa};
use crate::questionnaire::bank::Question;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntakeError {
    #[error("GPA must be between 0.0 and 4.0, got {value}")]
    GpaOutOfRange { value: f64 },

    #[error("'{subfield}' is not a subfield of {field}")]
    UnknownSubfield { field: Field, subfield: String },

    #[error("question {question} has no option {index} (options 0-{max})")]
    OptionOutOfRange {
        question: usize,
        index: usize,
        max: usize,
    },

    #[error("{actual} responses submitted but the questionnaire has {expected} questions")]
    TooManyResponses { expected: usize, actual: usize },
}

/// Raw intake as entered. `responses[i]` is `None` while question `i` is unanswered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeForm {
    pub field: Field,
    pub subfield: String,
    pub gpa: f64,
    #[serde(default)]
    pub responses: Vec<Option<usize>>,
}

/// Outcome of reviewing a form: either it can advance, or it is blocked on
/// unanswered questions (1-based numbers).
#[derive(Debug, Clone, PartialEq)]
pub enum IntakeStatus {
    Incomplete { unanswered: Vec<usize> },
    Ready(CandidateProfile),
}

impl IntakeForm {
    pub fn new(field: Field, subfield: impl Into<String>, gpa: f64) -> Self {
        Self {
            field,
            subfield: subfield.into(),
            gpa,
            responses: Vec::new(),
        }
    }

    /// Records the selected option for a zero-based question index.
    pub fn answer(&mut self, question: usize, option: usize) {
        if self.responses.len() <= question {
            self.responses.resize(question + 1, None);
        }
        self.responses[question] = Some(option);
    }

    /// Reads a JSON intake file.
    pub async fn from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read intake file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse intake file {}", path.display()))
    }

    /// Validates the form against the question bank.
    ///
    /// Invalid values are errors. Missing answers are not: they only block
    /// progression and are reported as `IntakeStatus::Incomplete`.
    pub fn review(&self, bank: &[Question]) -> Result<IntakeStatus, IntakeError> {
        let gpa = Gpa::new(self.gpa)?;
        let subfield = self
            .field
            .canonical_subfield(&self.subfield)
            .ok_or_else(|| IntakeError::UnknownSubfield {
                field: self.field,
                subfield: self.subfield.clone(),
            })?;

        if self.responses.len() > bank.len() {
            return Err(IntakeError::TooManyResponses {
                expected: bank.len(),
                actual: self.responses.len(),
            });
        }

        for (i, (response, question)) in self.responses.iter().zip(bank).enumerate() {
            if let Some(index) = *response {
                if index >= question.options.len() {
                    return Err(IntakeError::OptionOutOfRange {
                        question: i + 1,
                        index,
                        max: question.options.len() - 1,
                    });
                }
            }
        }

        let unanswered: Vec<usize> = (0..bank.len())
            .filter(|&i| self.responses.get(i).copied().flatten().is_none())
            .map(|i| i + 1)
            .collect();
        if !unanswered.is_empty() {
            return Ok(IntakeStatus::Incomplete { unanswered });
        }

        let responses = self.responses.iter().flatten().copied().collect();
        Ok(IntakeStatus::Ready(CandidateProfile::new(
            self.field, subfield, gpa, responses,
        )))
    }
}
