//! 資格情報ストア
//!
//! 運用者パスワード（そのままAPIキーとして使用）をプロセス存続期間だけ保持します。
//! ディスクへの永続化は行いません。再起動で資格情報が消えるのは意図した挙動です。

use parking_lot::Mutex;
use std::sync::Arc;

/// 単一スロットの資格情報ストア
///
/// 書き込みはログイン/ログアウトの2箇所のみ。読み取り側（リクエストクライアント、
/// セッションガード）には `Arc` で共有します。
#[derive(Debug, Default)]
pub struct CredentialStore {
    secret: Mutex<Option<String>>,
}

impl CredentialStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// 資格情報を設定（既存の値は上書き）
    pub fn set(&self, secret: impl Into<String>) {
        let mut slot = self.secret.lock();
        *slot = Some(secret.into());
        tracing::info!("🔑 Credential stored");
    }

    /// 保存されている資格情報を取得
    pub fn get(&self) -> Option<String> {
        self.secret.lock().clone()
    }

    /// 資格情報が設定されているか
    pub fn is_present(&self) -> bool {
        self.secret.lock().is_some()
    }

    /// 資格情報を無条件に削除
    pub fn clear(&self) {
        let mut slot = self.secret.lock();
        if slot.take().is_some() {
            tracing::info!("🗑️ Credential cleared");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let store = CredentialStore::new();
        assert!(store.get().is_none());

        store.set("hunter2");
        assert_eq!(store.get().as_deref(), Some("hunter2"));
        assert!(store.is_present());
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let store = CredentialStore::new();
        store.set("first");
        store.set("second");
        assert_eq!(store.get().as_deref(), Some("second"));
    }

    #[test]
    fn test_set_then_clear_reports_absent() {
        let store = CredentialStore::new();
        store.set("hunter2");
        store.clear();
        assert!(store.get().is_none());
        assert!(!store.is_present());
    }

    #[test]
    fn test_clear_when_empty_is_harmless() {
        let store = CredentialStore::new();
        store.clear();
        store.clear();
        assert!(store.get().is_none());
    }
}
