// Behavioral questionnaire: the fixed question bank and its scoring.

pub mod bank;
pub mod scoring;
