use clap::Parser;
use dioxus::prelude::*;
use std::sync::OnceLock;

use cheaterdash::config::{AppConfig, ConfigManager};
use cheaterdash::gui::{components::MainWindow, utils};
use cheaterdash::DashResult;

/// 起動時に確定した設定。appコンポーネントから参照する
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// CheaterBuster admin dashboard
#[derive(Parser, Debug)]
#[command(name = "cheaterdash", version, about)]
struct Args {
    /// CheaterBusterサーバーのベースURL（設定ファイルより優先）
    #[arg(long)]
    base_url: Option<String>,

    /// ログレベル (trace/debug/info/warn/error)
    #[arg(long)]
    log_level: Option<String>,

    /// 設定ファイルのパス（省略時はXDGデフォルト）
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

fn app() -> Element {
    let config = APP_CONFIG.get().cloned().unwrap_or_default();

    rsx! {
        div {
            class: "app",
            style: "
                min-height: 100vh;
                margin: 0;
                padding: 0;
                background: #111827;
            ",

            MainWindow { config }
        }
    }
}

fn main() -> DashResult<()> {
    let args = Args::parse();

    let config_manager = match &args.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new()?,
    };
    let mut config = config_manager.load_or_default();

    // CLIオーバーライド
    if let Some(base_url) = args.base_url {
        config.api_base_url = base_url;
    }

    // ログ初期化。guardはプロセス終了まで保持
    let _log_guard = utils::init_logging(&config.log, args.log_level.as_deref())?;

    tracing::info!("🎬 Starting cheaterdash - CheaterBuster Admin Dashboard");
    tracing::info!(
        "🪟 Window: {}x{} at ({}, {}), maximized: {}",
        config.window.width,
        config.window.height,
        config.window.x,
        config.window.y,
        config.window.maximized
    );

    let window = config.window.clone();
    APP_CONFIG
        .set(config)
        .expect("APP_CONFIG set before launch");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::tao::window::WindowBuilder::new()
                    .with_title("cheaterdash - CheaterBuster Admin Dashboard")
                    .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(
                        window.width as f64,
                        window.height as f64,
                    ))
                    .with_position(dioxus::desktop::tao::dpi::LogicalPosition::new(
                        window.x as f64,
                        window.y as f64,
                    ))
                    .with_maximized(window.maximized)
                    .with_resizable(true),
            ),
        )
        .launch(app);

    Ok(())
}
