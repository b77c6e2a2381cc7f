use crate::errors::AppError;
use crate::models::{GeneratedPlan, PlanStep};
use crate::state::AppState;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tracing::{error, info};

/// No retry on upstream failure; the user re-submits from the form.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug)]
pub struct GeneratedOutcome {
    pub plan: Vec<PlanStep>,
    pub motivation: String,
    pub duration: f64,
}

/// Asks the upstream text model for a 5-step Tiny Habits plan and parses its
/// JSON reply, tolerating Markdown code fences around it.
pub async fn generate_habit_plan(
    state: &AppState,
    bad_habit: &str,
    goal: &str,
) -> Result<GeneratedOutcome, AppError> {
    let prompt = build_prompt(bad_habit, goal);
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(AppError::internal)?
        .as_secs()
        .to_string();

    let started = Instant::now();
    let response = state
        .http
        .get(&state.upstream_url)
        .query(&[
            ("model", state.model.as_str()),
            ("seed", seed.as_str()),
            ("prompt", prompt.as_str()),
        ])
        .timeout(UPSTREAM_TIMEOUT)
        .send()
        .await
        .map_err(|err| {
            error!("upstream request failed: {err}");
            AppError::upstream(format!("AI Generation Error: {err}"))
        })?;

    let status = response.status();
    if !status.is_success() {
        error!("upstream returned status {status}");
        return Err(AppError::upstream(format!(
            "AI Generation Error: API returned status {}",
            status.as_u16()
        )));
    }

    let raw_text = response.text().await.map_err(|err| {
        error!("failed to read upstream body: {err}");
        AppError::upstream(format!("AI Generation Error: {err}"))
    })?;
    let duration = round2(started.elapsed().as_secs_f64());

    let cleaned = strip_code_fences(raw_text.trim());
    let parsed: GeneratedPlan = serde_json::from_str(&cleaned).map_err(|err| {
        error!("upstream returned unparseable plan: {err}");
        AppError::upstream("AI returned invalid format. Please try again.")
    })?;

    info!(
        steps = parsed.plan.len(),
        duration, "generated plan from upstream"
    );

    Ok(GeneratedOutcome {
        plan: parsed.plan,
        motivation: parsed.motivation,
        duration,
    })
}

/// Models often wrap JSON in ```json fences despite instructions not to.
fn strip_code_fences(text: &str) -> String {
    if !text.starts_with("```") {
        return text.to_string();
    }
    text.lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn build_prompt(bad_habit: &str, goal: &str) -> String {
    format!(
        r#"You are a behavioral psychology expert specializing in BJ Fogg's Tiny Habits methodology.

A user wants to break this bad habit: "{bad_habit}"
Their goal is: "{goal}"

Generate a 5-step "Tiny Habits" plan to help them. Each step must follow the Tiny Habits formula:
"After I [ANCHOR], I will [TINY BEHAVIOR]."

Return your response in EXACTLY this JSON format, with no additional text before or after:
{{
  "plan": [
    {{
      "step_number": 1,
      "title": "Short catchy title for this step",
      "description": "2-3 sentence explanation of why this step works psychologically",
      "anchor": "The existing habit/routine that triggers the new behavior",
      "tiny_behavior": "The small new behavior (must take less than 30 seconds)",
      "celebration": "A small celebration to reinforce the behavior (e.g., smile, fist pump, say 'I did it!')"
    }},
    {{ "step_number": 2, "title": "...", "description": "...", "anchor": "...", "tiny_behavior": "...", "celebration": "..." }},
    {{ "step_number": 3, "title": "...", "description": "...", "anchor": "...", "tiny_behavior": "...", "celebration": "..." }},
    {{ "step_number": 4, "title": "...", "description": "...", "anchor": "...", "tiny_behavior": "...", "celebration": "..." }},
    {{ "step_number": 5, "title": "...", "description": "...", "anchor": "...", "tiny_behavior": "...", "celebration": "..." }}
  ],
  "motivation": "An inspiring 2-3 sentence motivational message about their journey to breaking '{bad_habit}' and achieving '{goal}'"
}}

IMPORTANT: Return ONLY the JSON object. No markdown code fences, no extra text."#
    )
}
