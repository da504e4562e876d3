//! データ収集コントローラー
//!
//! start/stopコマンドの発行と、その後のステータス再取得（リコンサイル）を担当します。
//! コマンド自身のレスポンスは状態の根拠にしません。サーバーのstatusが唯一の真実です。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::api::client::DashboardApi;
use crate::api::error::{ApiError, ApiResult};
use crate::api::models::{CommandOutcome, GatheringMode, GatheringStatus};

/// バッチサイズの許容範囲（サーバー側の制約と同じ。最終的な検証権限はサーバー）
pub const MIN_BATCH_SIZE: u32 = 1;
pub const MAX_BATCH_SIZE: u32 = 50;

/// コマンド実行結果: レスポンスボディと、リコンサイル済みの権威的ステータス
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    pub outcome: CommandOutcome,
    pub status: GatheringStatus,
}

/// データ収集コントローラー
///
/// 同時に実行できるコマンドはインスタンスごとに1つ。UIは
/// `action_in_progress()` を見てボタンを無効化します。
pub struct GatheringController {
    api: Arc<dyn DashboardApi>,
    in_flight: AtomicBool,
}

impl GatheringController {
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self {
            api,
            in_flight: AtomicBool::new(false),
        }
    }

    /// コマンドが実行中かどうか
    pub fn action_in_progress(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// バッチサイズのクライアント側バリデーション
    pub fn validate_batch_size(batch_size: u32) -> ApiResult<()> {
        if !(MIN_BATCH_SIZE..=MAX_BATCH_SIZE).contains(&batch_size) {
            return Err(ApiError::Validation(format!(
                "Batch size must be between {} and {}",
                MIN_BATCH_SIZE, MAX_BATCH_SIZE
            )));
        }
        Ok(())
    }

    /// データ収集を開始し、ステータスを再取得して返す
    ///
    /// 既に実行中のプロセスに対するstartはローカルではガードしません。
    /// サーバーが `success: false` で応答します。
    pub async fn start(&self, mode: GatheringMode, batch_size: u32) -> ApiResult<CommandResult> {
        Self::validate_batch_size(batch_size)?;
        let _guard = self.begin_action()?;

        let outcome = self.api.start_gathering(mode, batch_size).await?;
        let status = self.reconcile().await?;
        Ok(CommandResult { outcome, status })
    }

    /// データ収集を停止し、ステータスを再取得して返す
    pub async fn stop(&self) -> ApiResult<CommandResult> {
        let _guard = self.begin_action()?;

        let outcome = self.api.stop_gathering().await?;
        let status = self.reconcile().await?;
        Ok(CommandResult { outcome, status })
    }

    /// コマンド完了後の権威的ステータス取得
    async fn reconcile(&self) -> ApiResult<GatheringStatus> {
        self.api.gathering_status().await
    }

    fn begin_action(&self) -> ApiResult<ActionGuard<'_>> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            // UI側のボタン無効化が第一の防御。ここは競合時の保険
            return Err(ApiError::Validation(
                "Another action is already in progress".to_string(),
            ));
        }
        Ok(ActionGuard {
            flag: &self.in_flight,
        })
    }
}

/// in-flightフラグをスコープ終了時に確実に戻すガード
struct ActionGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for ActionGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
