use dioxus::prelude::*;

use crate::api::client::DashboardApi;
use crate::api::models::PredictionResult;
use crate::gui::app_context::AppServices;
use crate::gui::models::ActiveView;
use crate::gui::utils::format_percent;

/// 公開ホームビュー
///
/// 解析済みプレイヤー数の表示と、Steam IDに対する推論フォーム。
/// どちらのエンドポイントも認証不要です。
#[component]
pub fn Home() -> Element {
    let services = use_context::<AppServices>();
    let mut active_view = use_context::<Signal<ActiveView>>();

    let mut count = use_signal(|| 0u64);
    let mut steam_id = use_signal(String::new);
    let mut result = use_signal(|| None::<PredictionResult>);
    let mut predict_error = use_signal(String::new);
    let mut predicting = use_signal(|| false);

    // マウント時に一度だけカウントを取得
    use_effect({
        let api = services.api.clone();
        move || {
            let api = api.clone();
            spawn(async move {
                match api.player_count().await {
                    Ok(n) => count.set(n),
                    Err(e) => tracing::warn!("Failed to fetch player count: {}", e),
                }
            });
        }
    });

    let api = services.api.clone();
    let on_predict = move |_| {
        if *predicting.read() {
            return;
        }

        let id = steam_id.read().trim().to_string();
        // 直前の結果は新しい送信でクリア
        result.set(None);
        predict_error.set(String::new());

        if id.is_empty() {
            predict_error.set("Please enter a Steam ID".to_string());
            return;
        }

        let api = api.clone();
        spawn(async move {
            predicting.set(true);
            match api.predict(&id).await {
                Ok(prediction) => {
                    tracing::info!("🎯 Prediction for {}: {:?}", id, prediction);
                    result.set(Some(prediction));
                }
                Err(e) => {
                    predict_error.set(format!("Prediction failed: {}", e));
                }
            }
            predicting.set(false);
        });
    };

    rsx! {
        div {
            class: "home",
            style: "max-width: 640px; margin: 0 auto; text-align: center;",

            div {
                style: "text-align: right;",
                button {
                    onclick: move |_| active_view.set(ActiveView::AdminLogin),
                    style: "
                        padding: 6px 14px;
                        background: transparent;
                        color: #9ca3af;
                        border: 1px solid #374151;
                        border-radius: 6px;
                        cursor: pointer;
                    ",
                    "Admin Panel"
                }
            }

            h1 {
                style: "font-size: 42px; margin: 24px 0 8px 0;",
                "CheaterBuster"
            }

            div {
                style: "
                    background: #1f2937;
                    border: 1px solid #374151;
                    border-radius: 12px;
                    padding: 24px;
                    margin: 24px 0;
                ",
                p { style: "margin: 0; color: #9ca3af;", "This model has been trained on" }
                div {
                    style: "font-size: 48px; font-weight: 700; margin: 8px 0;",
                    "{count}"
                }
                p { style: "margin: 0; color: #9ca3af;", "different players!" }
            }

            div {
                style: "
                    background: #1f2937;
                    border: 1px solid #374151;
                    border-radius: 12px;
                    padding: 24px;
                    text-align: left;
                ",
                h2 { style: "margin: 0 0 12px 0; font-size: 18px;", "Check a player" }

                div {
                    style: "display: flex; gap: 8px;",
                    input {
                        r#type: "text",
                        value: "{steam_id}",
                        placeholder: "Steam ID (e.g. 76561198000000000)",
                        style: "
                            flex: 1;
                            padding: 10px;
                            border-radius: 6px;
                            border: 1px solid #4b5563;
                            background: #111827;
                            color: #e5e7eb;
                        ",
                        oninput: move |e| {
                            steam_id.set(e.value());
                            predict_error.set(String::new());
                        },
                    }
                    button {
                        onclick: on_predict,
                        disabled: *predicting.read(),
                        style: "
                            padding: 10px 20px;
                            background: #2563eb;
                            color: white;
                            border: none;
                            border-radius: 6px;
                            cursor: pointer;
                        ",
                        if *predicting.read() { "Analyzing..." } else { "Analyze" }
                    }
                }

                if !predict_error.read().is_empty() {
                    div {
                        style: "margin-top: 10px; color: #f87171; font-size: 14px;",
                        "{predict_error}"
                    }
                }

                PredictionPanel { prediction: result.read().clone() }
            }
        }
    }
}

/// 推論結果の表示パネル（結果が無い間は何も描画しない）
#[component]
fn PredictionPanel(prediction: Option<PredictionResult>) -> Element {
    let Some(prediction) = prediction else {
        return rsx! {};
    };

    let verdict = if prediction.is_flagged() {
        "Likely cheater"
    } else {
        "Likely clean"
    };
    let verdict_color = if prediction.is_flagged() {
        "#f87171"
    } else {
        "#34d399"
    };

    rsx! {
        div {
            style: "
                margin-top: 16px;
                padding: 16px;
                background: #111827;
                border-radius: 8px;
                border: 1px solid #374151;
            ",
            div {
                style: "font-size: 18px; font-weight: 600; color: {verdict_color}; margin-bottom: 8px;",
                "{verdict}"
            }
            div {
                style: "display: flex; gap: 24px; font-size: 14px; color: #9ca3af;",
                div {
                    "Probability: "
                    span { style: "color: #e5e7eb;", {format_percent(prediction.probability)} }
                }
                div {
                    "Confidence: "
                    span { style: "color: #e5e7eb;", {format_percent(prediction.confidence)} }
                }
                div {
                    "Risk level: "
                    span { style: "color: #e5e7eb;", "{prediction.risk_level}" }
                }
            }
        }
    }
}
