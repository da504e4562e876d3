use dioxus::prelude::*;
use std::time::Duration;

use crate::api::client::DashboardApi;
use crate::gui::app_context::AppServices;

/// 統計カード
///
/// 総プレイヤー数を独自の間隔で再取得します。他のビューのカウント表示とは
/// 同期しません（それぞれが独立にポーリングする設計）。
#[component]
pub fn StatsCard() -> Element {
    let services = use_context::<AppServices>();
    let mut total_count = use_signal(|| 0u64);

    // このタスクはコンポーネントのスコープに紐づくため、アンマウントで停止する
    use_effect({
        let services = services.clone();
        move || {
            let api = services.api.clone();
            let interval = Duration::from_secs(services.config.poll_interval_secs);
            spawn(async move {
                let mut ticker = tokio::time::interval(interval);
                loop {
                    ticker.tick().await;
                    match api.player_count().await {
                        Ok(n) => total_count.set(n),
                        Err(e) => tracing::warn!("Failed to fetch count: {}", e),
                    }
                }
            });
        }
    });

    rsx! {
        div {
            class: "dashboard-card",
            style: "
                background: #1f2937;
                border: 1px solid #374151;
                border-radius: 12px;
                padding: 20px;
            ",

            h2 { style: "margin: 0 0 12px 0; font-size: 18px;", "Total Statistics" }

            div {
                style: "
                    display: inline-block;
                    background: #111827;
                    border: 1px solid #374151;
                    border-radius: 8px;
                    padding: 16px 32px;
                    text-align: center;
                ",
                div {
                    style: "font-size: 36px; font-weight: 700;",
                    "{total_count}"
                }
                div {
                    style: "color: #9ca3af; font-size: 13px;",
                    "Total in Database"
                }
            }
        }
    }
}
