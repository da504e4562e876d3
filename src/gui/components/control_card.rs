use dioxus::prelude::*;

use crate::api::models::{GatheringMode, GatheringStatus};
use crate::gui::controller::{MAX_BATCH_SIZE, MIN_BATCH_SIZE};

/// データ収集コントロールカード
///
/// コマンド実行中はボタンを無効化して二重送信を防ぎます（これが唯一の
/// 並行制御。キューイングやキャンセルはしない）。
#[component]
pub fn ControlCard(
    status: Option<GatheringStatus>,
    action_loading: bool,
    on_start: EventHandler<(GatheringMode, u32)>,
    on_stop: EventHandler<()>,
) -> Element {
    let mut mode = use_signal(|| GatheringMode::Random);
    let mut batch_size_input = use_signal(|| "10".to_string());
    let mut input_error = use_signal(String::new);

    let running = status.as_ref().map(|s| s.running).unwrap_or(false);
    let running_mode = status.as_ref().map(|s| s.mode.label()).unwrap_or("");

    let handle_start = move |_| {
        // 呼び出し前のクライアント側バリデーション。最終権限はサーバー
        let parsed = batch_size_input.read().trim().parse::<u32>();
        match parsed {
            Ok(n) if (MIN_BATCH_SIZE..=MAX_BATCH_SIZE).contains(&n) => {
                input_error.set(String::new());
                on_start.call((mode(), n));
            }
            Ok(_) => {
                input_error.set(format!(
                    "Batch size must be between {} and {}",
                    MIN_BATCH_SIZE, MAX_BATCH_SIZE
                ));
            }
            Err(_) => {
                input_error.set("Batch size must be a number".to_string());
            }
        }
    };

    rsx! {
        div {
            class: "dashboard-card",
            style: "
                background: #1f2937;
                border: 1px solid #374151;
                border-radius: 12px;
                padding: 20px;
                margin-bottom: 16px;
            ",

            h2 { style: "margin: 0 0 12px 0; font-size: 18px;", "Data Gathering Control" }

            if !running {
                div {
                    style: "display: flex; gap: 16px; align-items: flex-end; flex-wrap: wrap;",

                    div {
                        label {
                            r#for: "mode",
                            style: "display: block; margin-bottom: 6px; font-size: 14px; color: #9ca3af;",
                            "Gathering Mode:"
                        }
                        select {
                            id: "mode",
                            disabled: action_loading,
                            style: "
                                padding: 8px;
                                border-radius: 6px;
                                border: 1px solid #4b5563;
                                background: #111827;
                                color: #e5e7eb;
                            ",
                            onchange: move |e| {
                                mode.set(match e.value().as_str() {
                                    "BANNED" => GatheringMode::Banned,
                                    _ => GatheringMode::Random,
                                });
                            },
                            option { value: "RANDOM", "Random" }
                            option { value: "BANNED", "Banned" }
                        }
                    }

                    div {
                        label {
                            r#for: "batch-size",
                            style: "display: block; margin-bottom: 6px; font-size: 14px; color: #9ca3af;",
                            "Batch Size:"
                        }
                        input {
                            id: "batch-size",
                            r#type: "number",
                            min: "{MIN_BATCH_SIZE}",
                            max: "{MAX_BATCH_SIZE}",
                            value: "{batch_size_input}",
                            disabled: action_loading,
                            style: "
                                width: 90px;
                                padding: 8px;
                                border-radius: 6px;
                                border: 1px solid #4b5563;
                                background: #111827;
                                color: #e5e7eb;
                            ",
                            oninput: move |e| {
                                batch_size_input.set(e.value());
                                input_error.set(String::new());
                            },
                        }
                    }

                    button {
                        onclick: handle_start,
                        disabled: action_loading,
                        style: "
                            padding: 10px 20px;
                            background: #059669;
                            color: white;
                            border: none;
                            border-radius: 6px;
                            cursor: pointer;
                        ",
                        if action_loading { "Starting..." } else { "Start Gathering" }
                    }
                }

                if !input_error.read().is_empty() {
                    div {
                        style: "margin-top: 10px; color: #f87171; font-size: 14px;",
                        "{input_error}"
                    }
                }
            } else {
                div {
                    p {
                        style: "margin: 0 0 12px 0; color: #9ca3af;",
                        "Data gathering is currently running in "
                        strong { style: "color: #e5e7eb;", "{running_mode}" }
                        " mode."
                    }
                    button {
                        onclick: move |_| on_stop.call(()),
                        disabled: action_loading,
                        style: "
                            padding: 10px 20px;
                            background: #dc2626;
                            color: white;
                            border: none;
                            border-radius: 6px;
                            cursor: pointer;
                        ",
                        if action_loading { "Stopping..." } else { "Stop Gathering" }
                    }
                }
            }
        }
    }
}
