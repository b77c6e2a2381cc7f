use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub bad_habit: String,
    pub goal: String,
}

/// One step of a Tiny Habits plan: "After I [anchor], I will [tiny_behavior]."
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanStep {
    pub step_number: u32,
    pub title: String,
    pub description: String,
    pub anchor: String,
    pub tiny_behavior: String,
    pub celebration: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub bad_habit: String,
    pub goal: String,
    pub duration: f64,
    pub plan: Vec<PlanStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivation: Option<String>,
}

/// Payload shape the upstream model is asked to return.
#[derive(Debug, Deserialize)]
pub struct GeneratedPlan {
    pub plan: Vec<PlanStep>,
    pub motivation: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
