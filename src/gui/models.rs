//! GUI用のデータ構造

/// アクティブなビュー
///
/// URLルーターは使わず、ルートシグナルのビュー切り替えで遷移します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Home,
    AdminLogin,
    AdminDashboard,
}

impl ActiveView {
    pub fn title(&self) -> &'static str {
        match self {
            ActiveView::Home => "CheaterBuster",
            ActiveView::AdminLogin => "Admin Access",
            ActiveView::AdminDashboard => "Admin Dashboard",
        }
    }
}
