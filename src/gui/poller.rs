//! ステータスポーラー
//!
//! 固定間隔でstatusエンドポイントを呼び出し、結果をチャネルで配信します。
//! - 起動直後に1回即時取得、以降は間隔ごとに再取得
//! - キャンセルはハンドル経由で決定的に実行（孤児タイマーを残さない）
//! - 資格情報拒否でループ終了、それ以外のエラーではループ継続

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::MissedTickBehavior;

use crate::api::client::DashboardApi;
use crate::api::models::GatheringStatus;

/// ポーリングイベント
#[derive(Debug, Clone, PartialEq)]
pub enum PollEvent {
    /// 新しいステータス（ローカルコピーを丸ごと置き換える）
    Status(GatheringStatus),
    /// 一時的な失敗。ポーリングは継続する
    Failed(String),
    /// 資格情報が拒否された。ポーリングは終了し、呼び出し側がログアウト処理を行う
    CredentialRejected,
}

/// ポーリングタスクのキャンセルハンドル
///
/// `cancel()` またはドロップでタスクを停止します。
#[derive(Debug)]
pub struct PollHandle {
    cancel_sender: Option<oneshot::Sender<()>>,
}

impl PollHandle {
    pub fn cancel(&mut self) {
        if let Some(sender) = self.cancel_sender.take() {
            let _ = sender.send(());
            tracing::debug!("⏱️ Status poller cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_sender.is_none()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// ステータスポーラー
pub struct StatusPoller;

impl StatusPoller {
    /// ポーリングを開始し、キャンセルハンドルとイベント受信側を返す
    pub fn start(
        api: Arc<dyn DashboardApi>,
        interval: Duration,
    ) -> (PollHandle, mpsc::UnboundedReceiver<PollEvent>) {
        let (event_sender, event_receiver) = mpsc::unbounded_channel();
        let (cancel_sender, cancel_receiver) = oneshot::channel();

        tokio::spawn(poll_loop(api, interval, event_sender, cancel_receiver));

        (
            PollHandle {
                cancel_sender: Some(cancel_sender),
            },
            event_receiver,
        )
    }
}

async fn poll_loop(
    api: Arc<dyn DashboardApi>,
    interval: Duration,
    event_sender: mpsc::UnboundedSender<PollEvent>,
    mut cancel_receiver: oneshot::Receiver<()>,
) {
    // 最初のtickは即時。取得中にtickを跨いだ場合は詰め直さず次の間隔まで遅延
    // （取得の多重発行を防ぐ）
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut fetch_count: u64 = 0;
    tracing::info!("🚀 Status poller started (interval: {:?})", interval);

    loop {
        tokio::select! {
            _ = &mut cancel_receiver => {
                tracing::info!("🛑 Status poller stopped after {} fetches", fetch_count);
                break;
            }
            _ = ticker.tick() => {
                fetch_count += 1;
                match api.gathering_status().await {
                    Ok(status) => {
                        if event_sender.send(PollEvent::Status(status)).is_err() {
                            // 受信側が消えた＝ビューはアンマウント済み
                            break;
                        }
                    }
                    Err(e) if e.is_credential_failure() => {
                        tracing::warn!("🔒 Credential rejected during poll #{}", fetch_count);
                        let _ = event_sender.send(PollEvent::CredentialRejected);
                        break;
                    }
                    Err(e) => {
                        tracing::warn!("⚠️ Poll #{} failed: {}", fetch_count, e);
                        if event_sender.send(PollEvent::Failed(e.to_string())).is_err() {
                            break;
                        }
                    }
                }
            }
        }
    }
}
