use dioxus::prelude::*;

use crate::api::models::GatheringStatus;
use crate::gui::utils::format_uptime;

/// データ収集ステータスカード
#[component]
pub fn StatusCard(status: Option<GatheringStatus>, last_refreshed: String) -> Element {
    let Some(status) = status else {
        return rsx! {};
    };

    let (state_label, state_color) = if status.running {
        ("RUNNING", "#34d399")
    } else {
        ("STOPPED", "#f87171")
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

            div {
                style: "display: flex; justify-content: space-between; align-items: baseline;",
                h2 { style: "margin: 0 0 12px 0; font-size: 18px;", "Data Gathering Status" }
                if !last_refreshed.is_empty() {
                    span {
                        style: "font-size: 12px; color: #6b7280;",
                        "updated {last_refreshed}"
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 12px;",

                div {
                    span { style: "color: #9ca3af; margin-right: 6px;", "Status:" }
                    span { style: "font-weight: 600; color: {state_color};", "{state_label}" }
                }

                if status.running {
                    div {
                        span { style: "color: #9ca3af; margin-right: 6px;", "Mode:" }
                        span { style: "font-weight: 600;", {status.mode.label()} }
                    }
                    div {
                        span { style: "color: #9ca3af; margin-right: 6px;", "Batch Size:" }
                        span { style: "font-weight: 600;", "{status.batch_size}" }
                    }
                    div {
                        span { style: "color: #9ca3af; margin-right: 6px;", "Uptime:" }
                        span { style: "font-weight: 600;", {format_uptime(status.uptime)} }
                    }
                }

                div {
                    span { style: "color: #9ca3af; margin-right: 6px;", "Profiles Gathered:" }
                    span { style: "font-weight: 600;", "{status.total_profiles_gathered}" }
                }
            }
        }
    }
}
