use std::sync::Arc;

use crate::analysis::ProfileAnalyzer;
use crate::config::Config;
use crate::document::{DocumentExtractor, PdfExtractor};
use crate::llm_client::GeminiClient;

/// Services shared by every transition of an assessment session.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub analyzer: ProfileAnalyzer,
    /// Pluggable extractor. Default: PdfExtractor.
    pub extractor: Arc<dyn DocumentExtractor>,
}

impl AppState {
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let llm = GeminiClient::new(&config)?;
        tracing::info!("LLM client initialized (model: {})", llm.model());

        Ok(AppState {
            config,
            analyzer: ProfileAnalyzer::new(Arc::new(llm)),
            extractor: Arc::new(PdfExtractor),
        })
    }
}
