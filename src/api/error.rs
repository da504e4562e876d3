use thiserror::Error;

/// APIエラー分類
///
/// すべてのリモート呼び出し失敗はこの型に集約されます。
#[derive(Error, Debug)]
pub enum ApiError {
    /// 資格情報が未設定（ネットワーク呼び出し前に検出）
    #[error("No API key found. Please login again.")]
    Unauthenticated,

    /// サーバーが資格情報を拒否した (HTTP 401)
    #[error("Invalid API key. Please login again.")]
    InvalidCredential,

    /// その他の非2xxレスポンス
    #[error("API error: {status} - {body}")]
    Remote { status: u16, body: String },

    /// トランスポートレベルの失敗
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// レスポンスボディのJSONパース失敗
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// 呼び出し前のクライアント側バリデーション失敗
    #[error("Invalid input: {0}")]
    Validation(String),
}

impl ApiError {
    /// 資格情報の拒否・欠落によるエラーかどうか
    pub fn is_credential_failure(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthenticated | ApiError::InvalidCredential
        )
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_failure_classification() {
        assert!(ApiError::Unauthenticated.is_credential_failure());
        assert!(ApiError::InvalidCredential.is_credential_failure());
        assert!(!ApiError::Remote {
            status: 500,
            body: "boom".to_string()
        }
        .is_credential_failure());
        assert!(!ApiError::Validation("bad".to_string()).is_credential_failure());
    }

    #[test]
    fn test_remote_error_display() {
        let err = ApiError::Remote {
            status: 503,
            body: "service unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 503 - service unavailable");
    }
}
