use dioxus::prelude::*;

use crate::gui::app_context::AppServices;
use crate::gui::models::ActiveView;

/// 管理者ログインビュー
///
/// 入力されたパスワードをそのままAPIキーとして資格情報ストアに保存します。
/// 正しさの検証はしません。最初の認証付き呼び出しがサーバー側で検証します。
#[component]
pub fn AdminLogin() -> Element {
    let services = use_context::<AppServices>();
    let mut active_view = use_context::<Signal<ActiveView>>();

    let mut password = use_signal(String::new);
    let mut error = use_signal(String::new);

    let session = services.session.clone();
    let on_submit = move |_| {
        let value = password.read().clone();
        if value.is_empty() {
            error.set("Please enter a password".to_string());
            return;
        }

        session.login(value);
        active_view.set(ActiveView::AdminDashboard);
    };

    rsx! {
        div {
            class: "admin-login",
            style: "
                max-width: 420px;
                margin: 10vh auto;
                background: #1f2937;
                border: 1px solid #374151;
                border-radius: 12px;
                padding: 32px;
            ",

            h1 {
                style: "margin: 0 0 4px 0; font-size: 24px;",
                "Admin Access"
            }
            p {
                style: "margin: 0 0 20px 0; color: #9ca3af; font-size: 14px;",
                "Enter your API key to continue"
            }

            label {
                r#for: "password",
                style: "display: block; margin-bottom: 6px; font-size: 14px;",
                "API Key"
            }
            input {
                id: "password",
                r#type: "password",
                value: "{password}",
                placeholder: "Enter your API key",
                autofocus: true,
                style: "
                    width: 100%;
                    padding: 10px;
                    border-radius: 6px;
                    border: 1px solid #4b5563;
                    background: #111827;
                    color: #e5e7eb;
                    box-sizing: border-box;
                ",
                oninput: move |e| {
                    password.set(e.value());
                    // 入力中はエラーをクリア
                    error.set(String::new());
                },
            }

            if !error.read().is_empty() {
                div {
                    style: "margin-top: 10px; color: #f87171; font-size: 14px;",
                    "{error}"
                }
            }

            button {
                onclick: on_submit,
                style: "
                    width: 100%;
                    margin-top: 20px;
                    padding: 10px 16px;
                    background: #2563eb;
                    color: white;
                    border: none;
                    border-radius: 6px;
                    cursor: pointer;
                    font-size: 15px;
                ",
                "Access Admin Panel"
            }

            button {
                onclick: move |_| active_view.set(ActiveView::Home),
                style: "
                    width: 100%;
                    margin-top: 10px;
                    padding: 8px 16px;
                    background: transparent;
                    color: #9ca3af;
                    border: 1px solid #374151;
                    border-radius: 6px;
                    cursor: pointer;
                    font-size: 14px;
                ",
                "Back to Home"
            }
        }
    }
}
