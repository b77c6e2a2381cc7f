use crate::errors::AppError;
use crate::generator::generate_habit_plan;
use crate::models::{HealthResponse, PlanRequest, PlanResponse};
use crate::state::AppState;
use crate::ui::index_page;
use axum::{extract::State, response::Html, Json};
use tracing::info;

pub async fn index() -> Html<&'static str> {
    Html(index_page())
}

pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let bad_habit = payload.bad_habit.trim();
    if bad_habit.is_empty() {
        return Err(AppError::bad_request("Bad habit cannot be empty"));
    }
    let goal = payload.goal.trim();
    if goal.is_empty() {
        return Err(AppError::bad_request("Goal cannot be empty"));
    }

    info!(bad_habit, goal, "generating plan");
    let outcome = generate_habit_plan(&state, bad_habit, goal).await?;

    Ok(Json(PlanResponse {
        bad_habit: payload.bad_habit.clone(),
        goal: payload.goal.clone(),
        duration: outcome.duration,
        plan: outcome.plan,
        motivation: Some(outcome.motivation),
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "Habit Architect".to_string(),
    })
}
