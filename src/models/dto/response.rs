use std::collections::HashMap;

use serde::Serialize;

use crate::models::domain::{QuizQuestion, QuizResult, Scenario, ScenarioStatus};
use crate::services::quiz_grader::GradeOutcome;
use crate::services::study_orchestrator::{BatchReport, ScenarioReport, SessionSnapshot};

#[derive(Debug, Serialize)]
pub struct GenerationDto {
    pub scenario: Scenario,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct QuizDto {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Serialize)]
pub struct GradeDto {
    pub results: Vec<QuizResult>,
    pub score: usize,
    pub total: usize,
}

impl From<GradeOutcome> for GradeDto {
    fn from(outcome: GradeOutcome) -> Self {
        GradeDto {
            results: outcome.results,
            score: outcome.score,
            total: outcome.total,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScenarioReportDto {
    pub scenario: Scenario,
    pub status: ScenarioStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ScenarioReport> for ScenarioReportDto {
    fn from(report: ScenarioReport) -> Self {
        ScenarioReportDto {
            scenario: report.scenario,
            status: report.status,
            error: report.error,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BatchDto {
    pub explanation: ScenarioReportDto,
    pub quiz: ScenarioReportDto,
    pub notes: ScenarioReportDto,
}

impl From<BatchReport> for BatchDto {
    fn from(report: BatchReport) -> Self {
        BatchDto {
            explanation: report.explanation.into(),
            quiz: report.quiz.into(),
            notes: report.notes.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionDto {
    pub statuses: HashMap<Scenario, ScenarioStatus>,
    pub any_pending: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Vec<QuizQuestion>>,
}

impl From<SessionSnapshot> for SessionDto {
    fn from(snapshot: SessionSnapshot) -> Self {
        SessionDto {
            statuses: snapshot.statuses,
            any_pending: snapshot.any_pending,
            explanation: snapshot.explanation,
            notes: snapshot.notes,
            quiz: snapshot.quiz,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::sample_questions;

    #[test]
    fn test_session_dto_serializes_status_keys_as_scenario_names() {
        let mut statuses = HashMap::new();
        statuses.insert(Scenario::Quiz, ScenarioStatus::Pending);
        let dto = SessionDto {
            statuses,
            any_pending: true,
            explanation: None,
            notes: None,
            quiz: None,
        };

        let json = serde_json::to_value(&dto).expect("dto should serialize");
        assert_eq!(json["statuses"]["quiz"], "pending");
        assert_eq!(json["any_pending"], true);
        assert!(json.get("explanation").is_none());
    }

    #[test]
    fn test_quiz_dto_exposes_questions() {
        let dto = QuizDto {
            questions: sample_questions(2),
        };
        let json = serde_json::to_value(&dto).expect("dto should serialize");
        assert_eq!(json["questions"][0]["options"]["A"], "Option A");
        assert_eq!(json["questions"][1]["correct_answer"], "B");
    }
}
