use crate::clipboard::{copy_with_fallback, Clipboard, ClipboardError};
use crate::errors::ErrorBody;
use crate::models::{PlanRequest, PlanResponse};
use crate::view::{plan_to_text, render_plan, PlanView};
use std::time::Duration;

pub const TOAST_DISPLAY: Duration = Duration::from_millis(2500);
pub const TOAST_FADE: Duration = Duration::from_millis(400);

pub const COPY_CONFIRMATION: &str = "Plan copied to clipboard!";
pub const TRANSPORT_MESSAGE: &str = "Something went wrong. Please try again.";

/// The two required inputs, used as focus targets on validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    BadHabit,
    Goal,
}

impl Field {
    /// Element id the page binding focuses on rejection.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::BadHabit => "badHabit",
            Field::Goal => "goal",
        }
    }
}

#[derive(Debug)]
pub enum SubmitError {
    /// Empty required field; no request was made. `field` is the focus target.
    Validation { field: Field, message: String },
    /// Non-2xx response; message comes from the body's `detail` or the status.
    Server { message: String },
    /// Connectivity or decode failure.
    Transport { message: String },
}

impl SubmitError {
    pub fn message(&self) -> &str {
        match self {
            SubmitError::Validation { message, .. } => message,
            SubmitError::Server { message } => message,
            SubmitError::Transport { message } => message,
        }
    }
}

#[derive(Debug)]
pub enum BackendError {
    /// Non-success status, with the error body's `detail` when one parsed.
    Status { status: u16, detail: Option<String> },
    Transport(String),
}

/// Where plans come from. The real backend is `HttpBackend`; tests substitute
/// a scripted one.
#[allow(async_fn_in_trait)]
pub trait PlanBackend {
    async fn generate(&self, request: &PlanRequest) -> Result<PlanResponse, BackendError>;
}

/// POSTs `/api/generate` on a habit-architect server.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl PlanBackend for HttpBackend {
    async fn generate(&self, request: &PlanRequest) -> Result<PlanResponse, BackendError> {
        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|err| BackendError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .map(|body| body.detail);
            return Err(BackendError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<PlanResponse>()
            .await
            .map_err(|err| BackendError::Transport(err.to_string()))
    }
}

/// A transient notification. Shown for `TOAST_DISPLAY`, then fades over
/// `TOAST_FADE`; at most one exists at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
}

/// Headless form controller for the habit-planning page: owns the single
/// current plan, the busy flag, and the toast. One submission may be in
/// flight at a time; the binding disables the trigger while `is_busy()`.
pub struct PlanController<B> {
    backend: B,
    current: Option<PlanResponse>,
    busy: bool,
    toast: Option<Toast>,
}

impl<B: PlanBackend> PlanController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: None,
            busy: false,
            toast: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn current(&self) -> Option<&PlanResponse> {
        self.current.as_ref()
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Validates, issues the single request, and renders the result. The busy
    /// flag is set for exactly the span of the request; validation rejections
    /// never set it. On success the response becomes the current plan and the
    /// binding scrolls the rendered view into place.
    pub async fn submit(&mut self, bad_habit: &str, goal: &str) -> Result<PlanView, SubmitError> {
        let bad_habit = bad_habit.trim();
        let goal = goal.trim();

        if bad_habit.is_empty() {
            return Err(SubmitError::Validation {
                field: Field::BadHabit,
                message: "Please enter a bad habit you want to break.".to_string(),
            });
        }
        if goal.is_empty() {
            return Err(SubmitError::Validation {
                field: Field::Goal,
                message: "Please enter your goal.".to_string(),
            });
        }

        let request = PlanRequest {
            bad_habit: bad_habit.to_string(),
            goal: goal.to_string(),
        };

        self.busy = true;
        let result = self.backend.generate(&request).await;
        self.busy = false;

        match result {
            Ok(response) => {
                let view = render_plan(&response);
                self.current = Some(response);
                Ok(view)
            }
            Err(BackendError::Status { status, detail }) => Err(SubmitError::Server {
                message: detail.unwrap_or_else(|| format!("Server error ({status})")),
            }),
            Err(BackendError::Transport(_)) => Err(SubmitError::Transport {
                message: TRANSPORT_MESSAGE.to_string(),
            }),
        }
    }

    /// Clears inputs and results; focus returns to the first field.
    pub fn reset(&mut self) -> Field {
        self.current = None;
        self.toast = None;
        Field::BadHabit
    }

    /// Serializes the current plan to the copy template and writes it through
    /// the given strategies. Without a current plan this is a no-op: nothing
    /// is written and no toast appears. Returns whether a copy happened.
    pub fn copy_plan(
        &mut self,
        strategies: &mut [&mut dyn Clipboard],
    ) -> Result<bool, ClipboardError> {
        let Some(plan) = &self.current else {
            return Ok(false);
        };
        let text = plan_to_text(plan);
        copy_with_fallback(strategies, &text)?;
        self.notify(COPY_CONFIRMATION);
        Ok(true)
    }

    /// Replaces any visible toast with a new one.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
        });
    }
}
