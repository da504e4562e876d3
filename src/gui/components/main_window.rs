use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::gui::app_context::AppServices;
use crate::gui::components::{AdminDashboard, AdminLogin, Home, Protected};
use crate::gui::models::ActiveView;

/// メインウィンドウコンポーネント
///
/// ビュー切り替えのルート。共有サービスとアクティブビューのシグナルを
/// コンテキストとして子ツリーに提供します。
#[component]
pub fn MainWindow(config: AppConfig) -> Element {
    let _services = use_context_provider(|| AppServices::new(config.clone()));
    let active_view = use_signal(ActiveView::default);
    use_context_provider(|| active_view);

    tracing::debug!("🖥️ MainWindow: rendering {:?}", active_view());

    rsx! {
        div {
            class: "main-window",
            style: "
                min-height: 100vh;
                background: linear-gradient(135deg, #1f2937 0%, #111827 100%);
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                color: #e5e7eb;
                padding: 24px;
                box-sizing: border-box;
            ",

            match active_view() {
                ActiveView::Home => rsx! { Home {} },
                ActiveView::AdminLogin => rsx! { AdminLogin {} },
                ActiveView::AdminDashboard => rsx! {
                    Protected {
                        AdminDashboard {}
                    }
                },
            }
        }
    }
}
