#[cfg(test)]
pub mod fixtures {
    use std::collections::HashMap;

    use crate::config::GenerationConfig;
    use crate::models::domain::{QuizAnswers, QuizOptions, QuizQuestion, Scenario};

    /// The quiz reply used across parser, grader and orchestrator tests.
    pub const QUIZ_REPLY: &str = r#"{"questions":[{"question":"What does photosynthesis convert?","options":{"A":"Light to energy","B":"Energy to light","C":"Water to oxygen","D":"CO2 to light"},"correct_answer":"A","explanation":"**Photosynthesis** converts light."}]}"#;

    pub fn scenario_configs() -> HashMap<Scenario, GenerationConfig> {
        let mut configs = HashMap::new();
        for scenario in Scenario::ALL {
            configs.insert(
                scenario,
                GenerationConfig {
                    model: "test-model".to_string(),
                    system_prompt: format!("You are the {} assistant.", scenario),
                    temperature: 0.5,
                    max_tokens: 256,
                },
            );
        }
        configs
    }

    pub fn sample_question(index: usize) -> QuizQuestion {
        let keys = QuizOptions::KEYS;
        QuizQuestion {
            question: format!("Question {}?", index),
            options: QuizOptions {
                a: "Option A".to_string(),
                b: "Option B".to_string(),
                c: "Option C".to_string(),
                d: "Option D".to_string(),
            },
            correct_answer: keys[index % keys.len()].to_string(),
            explanation: format!("Explanation {}", index),
        }
    }

    pub fn sample_questions(count: usize) -> Vec<QuizQuestion> {
        (0..count).map(sample_question).collect()
    }

    /// A complete, all-correct answer mapping for the given questions.
    pub fn answers_for(questions: &[QuizQuestion]) -> QuizAnswers {
        questions
            .iter()
            .enumerate()
            .map(|(index, question)| (index, question.correct_answer.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_sample_questions() {
        let questions = sample_questions(5);
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[0].correct_answer, "A");
        assert_eq!(questions[4].correct_answer, "A");
        assert_eq!(questions[1].correct_answer, "B");
    }

    #[test]
    fn test_fixtures_answers_cover_every_index() {
        let questions = sample_questions(3);
        let answers = answers_for(&questions);
        assert_eq!(answers.len(), 3);
        assert_eq!(answers[&2], questions[2].correct_answer);
    }
}
