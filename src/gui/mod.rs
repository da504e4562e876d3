// Core modules
pub mod app_context;
pub mod controller;
pub mod models;
pub mod poller;
pub mod session;
pub mod utils;

// Dioxus UI components
pub mod components;

pub use app_context::AppServices;
pub use controller::{GatheringController, MAX_BATCH_SIZE, MIN_BATCH_SIZE};
pub use models::ActiveView;
pub use poller::{PollEvent, PollHandle, StatusPoller};
pub use session::SessionGuard;

pub use components::MainWindow;
