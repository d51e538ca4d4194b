pub mod completion_client;
pub mod quiz_grader;
pub mod quiz_parser;
pub mod request_builder;
pub mod sanitizer;
pub mod study_orchestrator;
