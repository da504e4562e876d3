use dioxus::prelude::*;

use crate::gui::app_context::AppServices;
use crate::gui::components::AdminLogin;
use crate::gui::models::ActiveView;

/// 保護ビューのゲート
///
/// 資格情報が無ければログインビューへリダイレクトし、保護コンテンツは
/// 一切描画しません（チラ見えの防止）。値の正しさは検証しない純粋なゲートです。
#[component]
pub fn Protected(children: Element) -> Element {
    let services = use_context::<AppServices>();
    let mut active_view = use_context::<Signal<ActiveView>>();

    let authenticated = services.session.is_authenticated();

    use_effect(move || {
        if !authenticated {
            tracing::info!("🔒 No credential present, redirecting to login");
            active_view.set(ActiveView::AdminLogin);
        }
    });

    if !authenticated {
        return rsx! { AdminLogin {} };
    }

    rsx! {
        {children}
    }
}
