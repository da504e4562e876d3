//! セッションガード
//!
//! 保護ビューへのアクセスを資格情報の「存在」だけで判定します。値の正しさは
//! 検証しません。誤った値は最初の認証付き呼び出しが `InvalidCredential` で
//! 弾くため、そこでログアウト経路に入ります。

use std::sync::Arc;
use std::time::Duration;

use crate::api::credentials::CredentialStore;

/// 資格情報拒否時、エラーメッセージを見せてから強制ログアウトするまでの猶予
pub const FORCED_LOGOUT_DELAY: Duration = Duration::from_secs(2);

/// セッションガード
#[derive(Debug, Clone)]
pub struct SessionGuard {
    credentials: Arc<CredentialStore>,
}

impl SessionGuard {
    pub fn new(credentials: Arc<CredentialStore>) -> Self {
        Self { credentials }
    }

    /// 同期的な存在チェック（副作用なし）
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_present()
    }

    /// ログイン: 入力されたパスワードをAPIキーとして保存
    pub fn login(&self, secret: impl Into<String>) {
        self.credentials.set(secret);
    }

    /// ログアウト: 資格情報を即時削除
    pub fn logout(&self) {
        self.credentials.clear();
    }

    /// 強制ログアウト: 猶予を置いてから資格情報を削除
    ///
    /// `InvalidCredential` 検出時に使用。呼び出し側は完了後にログインビューへ
    /// 切り替えます。
    pub async fn forced_logout(&self) {
        tokio::time::sleep(FORCED_LOGOUT_DELAY).await;
        self.logout();
        tracing::info!("🔒 Forced logout completed");
    }
}
