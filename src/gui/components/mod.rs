pub mod admin_dashboard;
pub mod admin_login;
pub mod control_card;
pub mod home;
pub mod main_window;
pub mod protected;
pub mod stats_card;
pub mod status_card;

pub use admin_dashboard::AdminDashboard;
pub use admin_login::AdminLogin;
pub use control_card::ControlCard;
pub use home::Home;
pub use main_window::MainWindow;
pub use protected::Protected;
pub use stats_card::StatsCard;
pub use status_card::StatusCard;
