pub mod app;
pub mod clipboard;
pub mod controller;
pub mod errors;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod state;
pub mod ui;
pub mod view;

pub use app::router;
pub use controller::{HttpBackend, PlanController};
pub use state::AppState;
