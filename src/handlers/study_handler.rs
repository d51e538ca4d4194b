use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::Scenario,
        dto::{
            request::{GenerateRequest, SubmitQuizRequest},
            response::{BatchDto, GenerationDto, GradeDto, QuizDto, SessionDto},
        },
    },
    services::study_orchestrator::GeneratedContent,
};

#[get("/api/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[post("/api/generate/{scenario}")]
async fn generate(
    state: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<GenerateRequest>,
) -> Result<HttpResponse, AppError> {
    let scenario = Scenario::from_key(&path)
        .ok_or_else(|| AppError::ValidationError(format!("unknown scenario: {}", path)))?;

    request.validate()?;
    let text = request
        .trimmed_text()
        .ok_or_else(|| AppError::ValidationError("text must not be empty".to_string()))?;

    let content = state.orchestrator.generate(scenario, text).await?;
    match content {
        GeneratedContent::Text(content) => {
            Ok(HttpResponse::Ok().json(GenerationDto { scenario, content }))
        }
        GeneratedContent::Quiz(questions) => Ok(HttpResponse::Ok().json(QuizDto { questions })),
    }
}

#[post("/api/generate-all")]
async fn generate_all(
    state: web::Data<AppState>,
    request: web::Json<GenerateRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let text = request
        .trimmed_text()
        .ok_or_else(|| AppError::ValidationError("text must not be empty".to_string()))?;

    let report = state.orchestrator.generate_all(text).await;
    Ok(HttpResponse::Ok().json(BatchDto::from(report)))
}

#[post("/api/quiz/grade")]
async fn grade_quiz(
    state: web::Data<AppState>,
    request: web::Json<SubmitQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let outcome = state.orchestrator.grade_quiz(&request.answers).await?;
    Ok(HttpResponse::Ok().json(GradeDto::from(outcome)))
}

#[get("/api/session")]
async fn get_session(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let snapshot = state.orchestrator.snapshot().await;
    Ok(HttpResponse::Ok().json(SessionDto::from(snapshot)))
}
