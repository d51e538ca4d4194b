//! Interprets a quiz completion reply as structured question data.
//!
//! Parsing is all-or-nothing: a malformed reply, a missing required field,
//! or a correct-answer key outside the option set fails the whole quiz
//! generation with no partial results.

use serde::Deserialize;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{QuizOptions, QuizQuestion};
use crate::services::sanitizer;

#[derive(Deserialize)]
struct QuizPayload {
    questions: Vec<RawQuizQuestion>,
}

#[derive(Deserialize)]
struct RawQuizQuestion {
    question: String,
    options: QuizOptions,
    correct_answer: String,
    explanation: String,
}

pub fn parse(raw: &str) -> AppResult<Vec<QuizQuestion>> {
    let payload: QuizPayload = serde_json::from_str(raw)
        .map_err(|e| AppError::ParseFailure(format!("malformed quiz reply: {}", e)))?;

    payload
        .questions
        .into_iter()
        .enumerate()
        .map(|(index, raw_question)| {
            if raw_question
                .options
                .get(&raw_question.correct_answer)
                .is_none()
            {
                return Err(AppError::ParseFailure(format!(
                    "question {} has correct_answer '{}' outside the option keys {:?}",
                    index,
                    raw_question.correct_answer,
                    QuizOptions::KEYS
                )));
            }

            Ok(QuizQuestion {
                question: raw_question.question,
                options: raw_question.options,
                correct_answer: raw_question.correct_answer,
                explanation: sanitizer::sanitize(&raw_question.explanation),
            })
        })
        .collect()
}
