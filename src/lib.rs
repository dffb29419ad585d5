pub mod aggregate;
pub mod api;
pub mod app;
pub mod auth;
pub mod charts;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod journal;
pub mod models;
pub mod mood;
pub mod sequence;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
