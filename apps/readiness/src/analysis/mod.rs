//! Profile Analyzer — builds the readiness prompt and forwards it to the
//! injected text generator. The response is returned untouched.

pub mod prompts;

use std::sync::Arc;

use tracing::{debug, info};

use crate::analysis::prompts::ANALYSIS_PROMPT_TEMPLATE;
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::assessment::AnalysisResult;
use crate::models::profile::{Field, Gpa};

/// Everything the analysis prompt is built from.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisRequest<'a> {
    pub resume_text: &'a str,
    pub field: Field,
    pub subfield: &'a str,
    pub interview_score: f64,
    pub gpa: Gpa,
}

/// Interpolates the request into the prompt template. The resume goes in last so
/// braces inside the resume text are never treated as placeholders.
pub fn build_prompt(request: &AnalysisRequest<'_>) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{field}", request.field.label())
        .replace("{subfield}", request.subfield)
        .replace("{gpa}", &request.gpa.exact())
        .replace(
            "{interview_score}",
            &format!("{:.1}", request.interview_score),
        )
        .replace("{resume_text}", request.resume_text)
}

#[derive(Clone)]
pub struct ProfileAnalyzer {
    generator: Arc<dyn TextGenerator>,
}

impl ProfileAnalyzer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn analyze(&self, request: &AnalysisRequest<'_>) -> Result<AnalysisResult, LlmError> {
        let prompt = build_prompt(request);
        debug!(
            "Analysis prompt built: {} chars ({} from resume)",
            prompt.len(),
            request.resume_text.len()
        );

        let text = self.generator.generate(&prompt).await?;
        if text.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }

        info!(
            field = %request.field,
            subfield = request.subfield,
            "Readiness analysis received ({} chars)",
            text.len()
        );
        Ok(AnalysisResult::new(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records the prompt and replies with a fixed result.
    struct ScriptedGenerator {
        reply: Mutex<Option<Result<String, LlmError>>>,
        seen: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        fn new(reply: Result<String, LlmError>) -> Arc<Self> {
            Arc::new(Self {
                reply: Mutex::new(Some(reply)),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.seen.lock().unwrap().push(prompt.to_string());
            self.reply
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Err(LlmError::EmptyContent))
        }
    }

    fn request(resume_text: &str) -> AnalysisRequest<'_> {
        AnalysisRequest {
            resume_text,
            field: Field::RoboticsEngineer,
            subfield: "Control Systems",
            interview_score: 80.0,
            gpa: Gpa::new(3.5).unwrap(),
        }
    }

    #[test]
    fn test_prompt_interpolates_all_parameters() {
        let prompt = build_prompt(&request("Built a PID controller in Rust."));
        assert!(prompt.starts_with(
            "Analyze this candidate profile for a Robotics Engineer position specializing in Control Systems."
        ));
        assert!(prompt.contains("- GPA: 3.5/4.0"));
        assert!(prompt.contains("- Behavioral Interview Score: 80.0%"));
        assert!(prompt.contains("Built a PID controller in Rust."));
        assert!(prompt.contains("1. Technical skills alignment with Control Systems"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_prompt_keeps_exact_gpa() {
        let mut req = request("resume");
        req.gpa = Gpa::new(3.95).unwrap();
        let prompt = build_prompt(&req);
        assert!(prompt.contains("- GPA: 3.95/4.0"), "got {prompt}");
        assert!(!prompt.contains("4.0/4.0"));
    }

    #[test]
    fn test_resume_placeholders_left_alone() {
        let prompt = build_prompt(&request("Template work: {field} and {gpa}"));
        assert!(prompt.contains("Template work: {field} and {gpa}"));
    }

    #[tokio::test]
    async fn test_analyze_returns_response_verbatim() {
        let reply = "\n## Analysis\nReadiness: 72/100\n".to_string();
        let generator = ScriptedGenerator::new(Ok(reply.clone()));
        let analyzer = ProfileAnalyzer::new(generator.clone());

        let result = analyzer.analyze(&request("resume")).await.unwrap();
        assert_eq!(result.as_str(), reply);
        assert_eq!(generator.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_service_failure_surfaces() {
        let generator = ScriptedGenerator::new(Err(LlmError::RateLimited { retries: 1 }));
        let analyzer = ProfileAnalyzer::new(generator);
        let err = analyzer.analyze(&request("resume")).await.unwrap_err();
        assert!(matches!(err, LlmError::RateLimited { .. }));
    }

    #[tokio::test]
    async fn test_blank_response_is_empty_content() {
        let generator = ScriptedGenerator::new(Ok("   \n".to_string()));
        let analyzer = ProfileAnalyzer::new(generator);
        let err = analyzer.analyze(&request("resume")).await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }
}
