//! アプリケーションコンテキスト
//!
//! コンポーネントツリーに配る共有サービス一式。資格情報ストアは単一の
//! インスタンスをリクエストクライアントとセッションガードが共有します。

use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::api::credentials::CredentialStore;
use crate::config::AppConfig;
use crate::gui::session::SessionGuard;

#[derive(Clone)]
pub struct AppServices {
    pub api: Arc<ApiClient>,
    pub credentials: Arc<CredentialStore>,
    pub session: SessionGuard,
    pub config: AppConfig,
}

impl AppServices {
    pub fn new(config: AppConfig) -> Self {
        let credentials = CredentialStore::new();
        let api = Arc::new(ApiClient::new(&config.api_base_url, credentials.clone()));
        let session = SessionGuard::new(credentials.clone());

        tracing::info!("🏗️ App services initialized (server: {})", config.api_base_url);

        Self {
            api,
            credentials,
            session,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_services_share_one_credential_store() {
        let services = AppServices::new(AppConfig::default());

        services.session.login("secret");
        // クライアントも同じストアを見ている
        assert_eq!(services.api.credentials().get().as_deref(), Some("secret"));
        assert_eq!(services.credentials.get().as_deref(), Some("secret"));
    }
}
