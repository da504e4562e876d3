pub mod api;
pub mod config;
pub mod gui;

// Re-export the main error type for convenience
pub use api::error::ApiError;

// Re-export API client and credential store
pub use api::client::{ApiClient, DashboardApi};
pub use api::credentials::CredentialStore;
pub use api::models::{CommandOutcome, GatheringMode, GatheringStatus, PredictionResult};

// Re-export config
pub use config::{AppConfig, ConfigManager};

pub type DashResult<T> = anyhow::Result<T>;
