use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        completion_client::OpenAiCompletionClient, study_orchestrator::StudyOrchestrator,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<StudyOrchestrator>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = Arc::new(OpenAiCompletionClient::new(
            config.completion_api_base.clone(),
            config.completion_api_key.clone(),
        ));
        let orchestrator = Arc::new(StudyOrchestrator::new(config.scenarios.clone(), client));

        Self {
            orchestrator,
            config: Arc::new(config),
        }
    }
}
