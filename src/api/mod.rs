pub mod client;
pub mod credentials;
pub mod error;
pub mod models;

pub use client::{ApiClient, DashboardApi};
pub use credentials::CredentialStore;
pub use error::{ApiError, ApiResult};
pub use models::{CommandOutcome, GatheringMode, GatheringStatus, PredictionResult};
