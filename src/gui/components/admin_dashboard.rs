use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use crate::api::client::DashboardApi;
use crate::api::models::{GatheringMode, GatheringStatus};
use crate::gui::app_context::AppServices;
use crate::gui::components::{ControlCard, StatsCard, StatusCard};
use crate::gui::controller::GatheringController;
use crate::gui::models::ActiveView;
use crate::gui::poller::{PollEvent, PollHandle, StatusPoller};
use crate::gui::utils::format_timestamp;

/// 管理ダッシュボード
///
/// 表示中はステータスポーラーを稼働させ、アンマウント時にハンドル経由で
/// 確実に停止します。資格情報拒否は猶予付き強制ログアウトに繋がります。
#[component]
pub fn AdminDashboard() -> Element {
    let services = use_context::<AppServices>();
    let mut active_view = use_context::<Signal<ActiveView>>();

    let mut status = use_signal(|| None::<GatheringStatus>);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(String::new);
    let mut action_loading = use_signal(|| false);
    let mut last_refreshed = use_signal(String::new);

    let controller = use_hook(|| {
        let api: Arc<dyn DashboardApi> = services.api.clone();
        Arc::new(GatheringController::new(api))
    });

    // ポーリングのキャンセルハンドル。use_dropで確実に解放する
    let poll_handle = use_hook(|| Rc::new(RefCell::new(None::<PollHandle>)));

    use_effect({
        let services = services.clone();
        let poll_handle = poll_handle.clone();
        move || {
            let api: Arc<dyn DashboardApi> = services.api.clone();
            let interval = Duration::from_secs(services.config.poll_interval_secs);
            let (handle, mut events) = StatusPoller::start(api, interval);
            *poll_handle.borrow_mut() = Some(handle);

            let session = services.session.clone();
            spawn(async move {
                while let Some(event) = events.recv().await {
                    match event {
                        PollEvent::Status(new_status) => {
                            status.set(Some(new_status));
                            error.set(String::new());
                            loading.set(false);
                            last_refreshed.set(format_timestamp());
                        }
                        PollEvent::Failed(message) => {
                            error.set(format!("Failed to load gathering status: {}", message));
                            loading.set(false);
                        }
                        PollEvent::CredentialRejected => {
                            error.set("Invalid API key. Please log in again.".to_string());
                            loading.set(false);
                            let session = session.clone();
                            spawn(async move {
                                session.forced_logout().await;
                                active_view.set(ActiveView::AdminLogin);
                            });
                        }
                    }
                }
            });
        }
    });

    use_drop({
        let poll_handle = poll_handle.clone();
        move || {
            if let Some(mut handle) = poll_handle.borrow_mut().take() {
                handle.cancel();
            }
        }
    });

    let on_start = {
        let controller = controller.clone();
        let session = services.session.clone();
        move |(mode, batch_size): (GatheringMode, u32)| {
            if *action_loading.read() {
                return;
            }
            let controller = controller.clone();
            let session = session.clone();
            spawn(async move {
                action_loading.set(true);
                error.set(String::new());
                match controller.start(mode, batch_size).await {
                    Ok(result) => {
                        if !result.outcome.success {
                            error.set(result.outcome.message.clone());
                        }
                        status.set(Some(result.status));
                        last_refreshed.set(format_timestamp());
                    }
                    Err(e) if e.is_credential_failure() => {
                        error.set("Invalid API key. Please log in again.".to_string());
                        spawn(async move {
                            session.forced_logout().await;
                            active_view.set(ActiveView::AdminLogin);
                        });
                    }
                    Err(e) => {
                        error.set(format!("Failed to start gathering: {}", e));
                    }
                }
                action_loading.set(false);
            });
        }
    };

    let on_stop = {
        let controller = controller.clone();
        let session = services.session.clone();
        move |_| {
            if *action_loading.read() {
                return;
            }
            let controller = controller.clone();
            let session = session.clone();
            spawn(async move {
                action_loading.set(true);
                error.set(String::new());
                match controller.stop().await {
                    Ok(result) => {
                        if !result.outcome.success {
                            error.set(result.outcome.message.clone());
                        }
                        status.set(Some(result.status));
                        last_refreshed.set(format_timestamp());
                    }
                    Err(e) if e.is_credential_failure() => {
                        error.set("Invalid API key. Please log in again.".to_string());
                        spawn(async move {
                            session.forced_logout().await;
                            active_view.set(ActiveView::AdminLogin);
                        });
                    }
                    Err(e) => {
                        error.set(format!("Failed to stop gathering: {}", e));
                    }
                }
                action_loading.set(false);
            });
        }
    };

    let session_for_logout = services.session.clone();
    let on_logout = move |_| {
        session_for_logout.logout();
        active_view.set(ActiveView::AdminLogin);
    };

    if *loading.read() && status.read().is_none() {
        return rsx! {
            div {
                style: "text-align: center; padding: 80px; color: #9ca3af;",
                "Loading..."
            }
        };
    }

    rsx! {
        div {
            class: "admin-dashboard",
            style: "max-width: 860px; margin: 0 auto;",

            // ヘッダー
            div {
                style: "
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 20px;
                ",
                h1 { style: "margin: 0; font-size: 26px;", "Admin Dashboard" }
                div {
                    style: "display: flex; gap: 8px;",
                    button {
                        onclick: move |_| active_view.set(ActiveView::Home),
                        style: "
                            padding: 8px 16px;
                            background: transparent;
                            color: #9ca3af;
                            border: 1px solid #374151;
                            border-radius: 6px;
                            cursor: pointer;
                        ",
                        "Home"
                    }
                    button {
                        onclick: on_logout,
                        style: "
                            padding: 8px 16px;
                            background: #dc2626;
                            color: white;
                            border: none;
                            border-radius: 6px;
                            cursor: pointer;
                        ",
                        "Logout"
                    }
                }
            }

            if !error.read().is_empty() {
                div {
                    style: "
                        background: #7f1d1d;
                        color: #fecaca;
                        border-radius: 8px;
                        padding: 12px 16px;
                        margin-bottom: 16px;
                    ",
                    "{error}"
                }
            }

            StatusCard {
                status: status.read().clone(),
                last_refreshed: last_refreshed.read().clone(),
            }

            ControlCard {
                status: status.read().clone(),
                action_loading: *action_loading.read(),
                on_start,
                on_stop,
            }

            StatsCard {}
        }
    }
}
