// State management module
// Shared server state: credential and generation services

pub mod app_state;

pub use app_state::AppState;
