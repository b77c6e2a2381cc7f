use std::env;

pub const DEFAULT_UPSTREAM_URL: &str = "https://text.pollinations.ai/";
pub const DEFAULT_MODEL: &str = "openai";

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream_url: String,
    pub model: String,
}

impl AppState {
    pub fn new(upstream_url: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            upstream_url,
            model,
        }
    }

    pub fn from_env() -> Self {
        let upstream_url =
            env::var("HABIT_UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());
        let model = env::var("HABIT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(upstream_url, model)
    }
}
