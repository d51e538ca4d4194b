//! Compares submitted answers to correct answers.
//!
//! Completeness of the submission is the caller's concern; the grader
//! itself treats a missing index as unanswered and scores it incorrect.

use crate::models::domain::{QuizAnswers, QuizQuestion, QuizResult};

#[derive(Debug)]
pub struct GradeOutcome {
    pub results: Vec<QuizResult>,
    pub score: usize,
    pub total: usize,
}

pub fn grade(questions: &[QuizQuestion], answers: &QuizAnswers) -> GradeOutcome {
    let results: Vec<QuizResult> = questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let user_answer = answers.get(&index).cloned().unwrap_or_default();
            let is_correct = user_answer == question.correct_answer;

            QuizResult {
                question: question.question.clone(),
                user_answer,
                correct_answer: question.correct_answer.clone(),
                is_correct,
                explanation: question.explanation.clone(),
            }
        })
        .collect();

    let score = results.iter().filter(|r| r.is_correct).count();
    let total = results.len();

    GradeOutcome {
        results,
        score,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{answers_for, sample_questions};

    #[test]
    fn all_correct_answers_score_full_marks() {
        let questions = sample_questions(3);
        let answers = answers_for(&questions);

        let outcome = grade(&questions, &answers);

        assert_eq!(outcome.score, 3);
        assert_eq!(outcome.total, 3);
        assert!(outcome.results.iter().all(|r| r.is_correct));
    }

    #[test]
    fn unanswered_question_is_empty_and_incorrect() {
        let questions = sample_questions(2);
        let mut answers = answers_for(&questions);
        answers.remove(&1);

        let outcome = grade(&questions, &answers);

        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.results[1].user_answer, "");
        assert!(!outcome.results[1].is_correct);
    }

    #[test]
    fn wrong_key_is_incorrect_by_exact_equality() {
        let questions = sample_questions(1);
        let mut answers = QuizAnswers::new();
        answers.insert(0, "a".to_string()); // case differs from the correct "A"

        let outcome = grade(&questions, &answers);

        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.results[0].user_answer, "a");
        assert!(!outcome.results[0].is_correct);
    }

    #[test]
    fn result_order_matches_question_order() {
        let questions = sample_questions(4);
        // Answers inserted out of order must not affect result order.
        let mut answers = QuizAnswers::new();
        for index in [3usize, 0, 2, 1] {
            answers.insert(index, questions[index].correct_answer.clone());
        }

        let outcome = grade(&questions, &answers);

        for (index, result) in outcome.results.iter().enumerate() {
            assert_eq!(result.question, questions[index].question);
        }
    }

    #[test]
    fn empty_quiz_grades_to_zero_of_zero() {
        let outcome = grade(&[], &QuizAnswers::new());
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.total, 0);
        assert!(outcome.results.is_empty());
    }

    #[test]
    fn results_carry_explanation_snapshot() {
        let questions = sample_questions(1);
        let outcome = grade(&questions, &answers_for(&questions));
        assert_eq!(outcome.results[0].explanation, questions[0].explanation);
    }
}
