pub mod study_handler;

pub use study_handler::{generate, generate_all, get_session, grade_quiz, health_check};
