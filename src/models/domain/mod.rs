pub mod quiz;
pub mod scenario;

pub use quiz::{QuizAnswers, QuizOptions, QuizQuestion, QuizResult};
pub use scenario::{Scenario, ScenarioStatus};
