use crate::models::{PlanResponse, PlanStep};

/// Declarative description of one rendered step. Free text is kept as plain
/// strings here; escaping happens when the view is serialized to markup.
#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    pub number: u32,
    pub title: String,
    pub description: String,
    pub recipe: String,
    pub celebration: String,
}

/// Declarative description of the results region for one plan. A UI binding
/// maps this onto concrete elements and scrolls the results into view after
/// insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanView {
    pub bad_habit: String,
    pub goal: String,
    pub duration_text: String,
    pub steps: Vec<StepView>,
    pub motivation: Option<String>,
}

pub fn render_plan(plan: &PlanResponse) -> PlanView {
    PlanView {
        bad_habit: plan.bad_habit.clone(),
        goal: plan.goal.clone(),
        duration_text: format!("Generated in {}s", plan.duration),
        steps: plan.plan.iter().map(render_step).collect(),
        motivation: plan.motivation.clone(),
    }
}

fn render_step(step: &PlanStep) -> StepView {
    StepView {
        number: step.step_number,
        title: step.title.clone(),
        description: step.description.clone(),
        recipe: format!("After I {} → I will {}", step.anchor, step.tiny_behavior),
        celebration: step.celebration.clone(),
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

impl StepView {
    pub fn to_html(&self) -> String {
        format!(
            concat!(
                r#"<div class="timeline-step">"#,
                r#"<div class="step-dot step-{n}">{n}</div>"#,
                r#"<div class="step-card">"#,
                r#"<div class="step-header"><span class="step-number">Step {n}</span></div>"#,
                r#"<h3 class="step-title">{title}</h3>"#,
                r#"<p class="step-description">{description}</p>"#,
                r#"<div class="habit-formula">"#,
                r#"<div class="formula-label">Tiny Habit Recipe</div>"#,
                r#"<div class="formula-text">{recipe}</div>"#,
                r#"</div>"#,
                r#"<div class="celebration-badge">Celebrate: {celebration}</div>"#,
                r#"</div></div>"#
            ),
            n = self.number,
            title = escape_html(&self.title),
            description = escape_html(&self.description),
            recipe = escape_html(&self.recipe),
            celebration = escape_html(&self.celebration),
        )
    }
}

impl PlanView {
    /// Markup fragment for the steps timeline plus the optional motivation
    /// card. Every free-text field passes through `escape_html`.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for step in &self.steps {
            out.push_str(&step.to_html());
        }
        if let Some(motivation) = &self.motivation {
            out.push_str(&format!(
                r#"<div class="motivation-card"><p class="motivation-text">{}</p></div>"#,
                escape_html(motivation)
            ));
        }
        out
    }
}

/// The fixed copy-to-clipboard text template.
pub fn plan_to_text(plan: &PlanResponse) -> String {
    let mut text = String::new();
    text.push_str("🧠 HABIT ARCHITECT — Your Tiny Habits Plan\n");
    text.push_str(&"═".repeat(50));
    text.push_str("\n\n");
    text.push_str(&format!("❌ Bad Habit: {}\n", plan.bad_habit));
    text.push_str(&format!("⭐ Goal: {}\n\n", plan.goal));

    for step in &plan.plan {
        text.push_str(&format!("── Step {}: {} ──\n", step.step_number, step.title));
        text.push_str(&format!("{}\n\n", step.description));
        text.push_str("📌 Tiny Habit Recipe:\n");
        text.push_str(&format!(
            "   After I {} → I will {}\n\n",
            step.anchor, step.tiny_behavior
        ));
        text.push_str(&format!("🎉 Celebrate: {}\n\n", step.celebration));
    }

    if let Some(motivation) = &plan.motivation {
        text.push_str(&"─".repeat(50));
        text.push('\n');
        text.push_str(&format!("🔥 {motivation}\n"));
    }

    text
}
