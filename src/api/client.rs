//! 認証付きリクエストクライアント
//!
//! 資格情報ストアからAPIキーを読み取り、`X-API-Key` ヘッダーとして全呼び出しに
//! 付与します。リトライ・タイムアウト制御は行いません（回復ポリシーは呼び出し側、
//! つまりポーラーとコントローラーが所有します）。

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::credentials::CredentialStore;
use super::error::{ApiError, ApiResult};
use super::models::{CommandOutcome, GatheringMode, GatheringStatus, PredictionResult};

const API_KEY_HEADER: &str = "X-API-Key";

/// ダッシュボードが消費する5つのリモートエンドポイント
///
/// ポーラーとコントローラーはこのトレイト経由で呼び出すため、テストでは
/// フェイク実装に差し替えられます。
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// GET /api/gathering/count（認証不要）
    async fn player_count(&self) -> ApiResult<u64>;

    /// GET /api/gathering/status（要認証）
    async fn gathering_status(&self) -> ApiResult<GatheringStatus>;

    /// POST /api/gathering/start（要認証）
    async fn start_gathering(&self, mode: GatheringMode, batch_size: u32)
        -> ApiResult<CommandOutcome>;

    /// POST /api/gathering/stop（要認証）
    async fn stop_gathering(&self) -> ApiResult<CommandOutcome>;

    /// POST /api/model/predict（認証不要）
    async fn predict(&self, steam_id: &str) -> ApiResult<PredictionResult>;
}

/// reqwestベースのAPIクライアント
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    credentials: Arc<CredentialStore>,
    http_client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, credentials: Arc<CredentialStore>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            credentials,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Arc<CredentialStore> {
        &self.credentials
    }

    fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }

    /// 資格情報を付与したリクエストを構築
    ///
    /// 資格情報が未設定の場合はネットワーク呼び出しを行わず即座に失敗します。
    fn authed(&self, method: Method, path_and_query: &str) -> ApiResult<RequestBuilder> {
        let api_key = self.credentials.get().ok_or(ApiError::Unauthenticated)?;
        Ok(self
            .http_client
            .request(method, self.url(path_and_query))
            .header(API_KEY_HEADER, api_key)
            .header("Content-Type", "application/json"))
    }

    /// リクエストを実行し、HTTPステータスをエラー分類に写像
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if status.as_u16() == 401 {
            // 401はボディの内容によらず資格情報拒否
            return Err(ApiError::InvalidCredential);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("❌ API error: {} - {}", status.as_u16(), body);
            return Err(ApiError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl DashboardApi for ApiClient {
    async fn player_count(&self) -> ApiResult<u64> {
        // countエンドポイントは匿名ホーム画面が使うため認証なしの契約を採用
        let request = self.http_client.get(self.url("/api/gathering/count"));
        self.execute(request).await
    }

    async fn gathering_status(&self) -> ApiResult<GatheringStatus> {
        let request = self.authed(Method::GET, "/api/gathering/status")?;
        self.execute(request).await
    }

    async fn start_gathering(
        &self,
        mode: GatheringMode,
        batch_size: u32,
    ) -> ApiResult<CommandOutcome> {
        let path = format!(
            "/api/gathering/start?mode={}&batchSize={}",
            mode.as_str(),
            batch_size
        );
        tracing::info!("🚀 Starting gathering - mode: {}, batch: {}", mode.as_str(), batch_size);
        let request = self.authed(Method::POST, &path)?;
        self.execute(request).await
    }

    async fn stop_gathering(&self) -> ApiResult<CommandOutcome> {
        tracing::info!("🛑 Stopping gathering");
        let request = self.authed(Method::POST, "/api/gathering/stop")?;
        self.execute(request).await
    }

    async fn predict(&self, steam_id: &str) -> ApiResult<PredictionResult> {
        let path = format!(
            "/api/model/predict?steamId={}",
            urlencoding::encode(steam_id)
        );
        let request = self.http_client.post(self.url(&path));
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8080/", CredentialStore::new());
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(
            client.url("/api/gathering/status"),
            "http://localhost:8080/api/gathering/status"
        );
    }

    #[test]
    fn test_authed_fails_fast_without_credential() {
        let client = ApiClient::new("http://localhost:8080", CredentialStore::new());
        let result = client.authed(Method::GET, "/api/gathering/status");
        assert!(matches!(result, Err(ApiError::Unauthenticated)));
    }

    #[test]
    fn test_steam_id_is_percent_encoded() {
        let encoded = urlencoding::encode("7656 11980/000");
        assert_eq!(encoded, "7656%2011980%2F000");
    }
}
