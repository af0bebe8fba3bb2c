mod analysis;
mod config;
mod document;
mod errors;
mod intake;
mod llm_client;
mod models;
mod questionnaire;
mod state;
mod wizard;

use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::document::Document;
use crate::errors::AppError;
use crate::intake::{IntakeForm, IntakeStatus};
use crate::models::profile::Field;
use crate::questionnaire::bank::question_bank;
use crate::state::AppState;
use crate::wizard::AssessmentSession;

#[derive(Parser)]
#[command(name = "readiness", version, about = "Placement readiness assessment")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the fields, subfields and behavioral questions an intake file must answer
    Questions,
    /// Score an intake file and analyze a resume
    Assess {
        /// JSON intake: {"field", "subfield", "gpa", "responses"}
        #[arg(long)]
        intake: PathBuf,
        /// Resume PDF
        #[arg(long)]
        resume: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Questions => {
            print!("{}", render_catalog());
            Ok(ExitCode::SUCCESS)
        }
        Command::Assess {
            intake,
            resume,
            json,
        } => assess(intake, resume, json).await,
    }
}

async fn assess(intake: PathBuf, resume: PathBuf, json: bool) -> Result<ExitCode> {
    // Load configuration first (fails on a missing API key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting readiness v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_config(config)?;
    info!(
        timeout_secs = state.config.request_timeout_secs,
        max_retries = state.config.max_retries,
        "Analysis service ready"
    );

    let form = IntakeForm::from_path(&intake).await?;
    let mut session = AssessmentSession::new();
    info!(session_id = %session.id(), intake = %intake.display(), "Assessment session started");

    match session.submit_intake(&form) {
        Ok(IntakeStatus::Ready(_)) => {}
        Ok(IntakeStatus::Incomplete { unanswered }) => {
            let numbers: Vec<String> = unanswered.iter().map(|n| format!("Q{n}")).collect();
            eprintln!(
                "Please answer all questions to proceed. Unanswered: {}",
                numbers.join(", ")
            );
            return Ok(ExitCode::from(2));
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Ok(ExitCode::from(2));
        }
    }

    if let Some(scored) = session.scored() {
        eprintln!(
            "Interview score {:.1}%, GPA {:.1}%. Analyzing your complete profile...",
            scored.interview_score, scored.gpa_score
        );
    }

    let document = match Document::from_path(&resume).await {
        Ok(document) => document,
        Err(e) => {
            eprintln!("{}", AppError::from(e).user_message());
            return Ok(ExitCode::FAILURE);
        }
    };

    match session
        .analyze(&document, state.extractor.as_ref(), &state.analyzer)
        .await
    {
        Ok(report) => {
            if json {
                println!("{}", serde_json::to_string_pretty(report)?);
            } else {
                print!("{}", report.render_text());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(code = e.code(), "Assessment failed: {e}");
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Field catalog and question bank, with zero-based option indices as used in intake files.
fn render_catalog() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Fields and subfields:");
    for field in Field::ALL {
        let _ = writeln!(out, "  {}: {}", field, field.subfields().join(", "));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Behavioral interview questions:");
    for (i, question) in question_bank().iter().enumerate() {
        let _ = writeln!(out, "\nQ{}. {}", i + 1, question.prompt);
        for (index, option) in question.options.iter().enumerate() {
            let _ = writeln!(out, "  [{index}] {option}");
        }
    }
    out
}
