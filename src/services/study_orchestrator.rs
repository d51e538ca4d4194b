use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;

use crate::config::GenerationConfig;
use crate::errors::{AppError, AppResult};
use crate::models::domain::{QuizAnswers, QuizQuestion, Scenario, ScenarioStatus};
use crate::services::completion_client::CompletionClient;
use crate::services::quiz_grader::{self, GradeOutcome};
use crate::services::{quiz_parser, request_builder, sanitizer};

/// Result of one settled generation.
#[derive(Clone, Debug)]
pub enum GeneratedContent {
    Text(String),
    Quiz(Vec<QuizQuestion>),
}

#[derive(Clone, Debug)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub status: ScenarioStatus,
    pub error: Option<String>,
}

impl ScenarioReport {
    fn from_result(scenario: Scenario, result: &AppResult<GeneratedContent>) -> Self {
        match result {
            Ok(_) => Self {
                scenario,
                status: ScenarioStatus::Done,
                error: None,
            },
            Err(err) => Self {
                scenario,
                status: ScenarioStatus::Failed,
                error: Some(err.to_string()),
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct BatchReport {
    pub explanation: ScenarioReport,
    pub quiz: ScenarioReport,
    pub notes: ScenarioReport,
}

/// Everything the UI renders from, captured under one lock.
#[derive(Clone, Debug)]
pub struct SessionSnapshot {
    pub statuses: HashMap<Scenario, ScenarioStatus>,
    pub any_pending: bool,
    pub explanation: Option<String>,
    pub notes: Option<String>,
    pub quiz: Option<Vec<QuizQuestion>>,
}

#[derive(Default)]
struct SessionState {
    explanation: Option<String>,
    notes: Option<String>,
    quiz: Option<Vec<QuizQuestion>>,
    statuses: HashMap<Scenario, ScenarioStatus>,
}

impl SessionState {
    fn status(&self, scenario: Scenario) -> ScenarioStatus {
        self.statuses.get(&scenario).copied().unwrap_or_default()
    }

    fn set_status(&mut self, scenario: Scenario, status: ScenarioStatus) {
        self.statuses.insert(scenario, status);
    }

    fn any_pending(&self) -> bool {
        Scenario::ALL
            .iter()
            .any(|s| self.status(*s) == ScenarioStatus::Pending)
    }
}

/// Drives the three generation pipelines and holds their result slots.
///
/// Scenario configuration is injected at construction and held immutably;
/// a scenario absent from the map fails with `ConfigMissing` before any
/// network call. Requests are never cancelled: each completed call
/// unconditionally overwrites its scenario's slot (last-resolved-wins).
pub struct StudyOrchestrator {
    configs: HashMap<Scenario, GenerationConfig>,
    client: Arc<dyn CompletionClient>,
    session: RwLock<SessionState>,
}

impl StudyOrchestrator {
    pub fn new(
        configs: HashMap<Scenario, GenerationConfig>,
        client: Arc<dyn CompletionClient>,
    ) -> Self {
        Self {
            configs,
            client,
            session: RwLock::new(SessionState::default()),
        }
    }

    pub async fn generate(&self, scenario: Scenario, text: &str) -> AppResult<GeneratedContent> {
        let config = self
            .configs
            .get(&scenario)
            .ok_or_else(|| AppError::ConfigMissing(scenario.key().to_string()))?;

        {
            let mut session = self.session.write().await;
            if session.status(scenario) == ScenarioStatus::Pending {
                return Err(AppError::Busy(scenario.key().to_string()));
            }
            session.set_status(scenario, ScenarioStatus::Pending);
        }

        let started = Instant::now();
        log::info!(
            "starting {} generation ({} input chars, model {})",
            scenario,
            text.len(),
            config.model
        );

        let request = request_builder::build_request(scenario, config, text);
        let reply = match self.client.complete(request).await {
            Ok(reply) => reply,
            Err(err) => {
                // Transport failure: the scenario's prior content stays as it was.
                let mut session = self.session.write().await;
                session.set_status(scenario, ScenarioStatus::Failed);
                log::error!(
                    "{} generation failed after {}ms: {}",
                    scenario,
                    started.elapsed().as_millis(),
                    err
                );
                return Err(err);
            }
        };

        let content = match scenario {
            Scenario::Quiz => match quiz_parser::parse(&reply) {
                Ok(questions) => GeneratedContent::Quiz(questions),
                Err(err) => {
                    // A failed regeneration does not retain the previous quiz.
                    let mut session = self.session.write().await;
                    session.quiz = None;
                    session.set_status(scenario, ScenarioStatus::Failed);
                    log::error!(
                        "quiz generation failed after {}ms: {}",
                        started.elapsed().as_millis(),
                        err
                    );
                    return Err(err);
                }
            },
            Scenario::Explanation | Scenario::Notes => {
                GeneratedContent::Text(sanitizer::sanitize(&reply))
            }
        };

        {
            let mut session = self.session.write().await;
            match (scenario, &content) {
                (Scenario::Quiz, GeneratedContent::Quiz(questions)) => {
                    session.quiz = Some(questions.clone());
                }
                (Scenario::Explanation, GeneratedContent::Text(body)) => {
                    session.explanation = Some(body.clone());
                }
                (Scenario::Notes, GeneratedContent::Text(body)) => {
                    session.notes = Some(body.clone());
                }
                _ => {}
            }
            session.set_status(scenario, ScenarioStatus::Done);
        }

        log::info!(
            "{} generation succeeded ({} output chars, {}ms)",
            scenario,
            reply.len(),
            started.elapsed().as_millis()
        );

        Ok(content)
    }

    /// Runs the three pipelines concurrently. They race independently; a
    /// failure in one neither cancels nor blocks the others.
    pub async fn generate_all(&self, text: &str) -> BatchReport {
        let (explanation, quiz, notes) = futures::join!(
            self.generate(Scenario::Explanation, text),
            self.generate(Scenario::Quiz, text),
            self.generate(Scenario::Notes, text),
        );

        BatchReport {
            explanation: ScenarioReport::from_result(Scenario::Explanation, &explanation),
            quiz: ScenarioReport::from_result(Scenario::Quiz, &quiz),
            notes: ScenarioReport::from_result(Scenario::Notes, &notes),
        }
    }

    /// Grades the currently loaded quiz. A submission must carry an answer
    /// for every question; partial submissions are rejected here, before the
    /// grader runs.
    pub async fn grade_quiz(&self, answers: &QuizAnswers) -> AppResult<GradeOutcome> {
        let session = self.session.read().await;
        let questions = session
            .quiz
            .as_ref()
            .ok_or_else(|| AppError::NotFound("no quiz has been generated".to_string()))?;

        if answers.len() != questions.len() {
            return Err(AppError::ValidationError(format!(
                "quiz submission requires an answer for every question ({} of {} answered)",
                answers.len(),
                questions.len()
            )));
        }

        Ok(quiz_grader::grade(questions, answers))
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let session = self.session.read().await;
        let statuses = Scenario::ALL
            .iter()
            .map(|s| (*s, session.status(*s)))
            .collect();

        SessionSnapshot {
            statuses,
            any_pending: session.any_pending(),
            explanation: session.explanation.clone(),
            notes: session.notes.clone(),
            quiz: session.quiz.clone(),
        }
    }
}
