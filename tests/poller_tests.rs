//! ステータスポーラーのタイミング・キャンセルテスト
//!
//! tokioの停止クロックで実時間に依存せず検証します。

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use cheaterdash::api::{ApiError, ApiResult};
use cheaterdash::gui::{PollEvent, StatusPoller};
use cheaterdash::{CommandOutcome, DashboardApi, GatheringMode, GatheringStatus, PredictionResult};

fn running_status() -> GatheringStatus {
    GatheringStatus {
        running: true,
        mode: GatheringMode::Random,
        batch_size: 10,
        total_profiles_gathered: 100,
        uptime: 60,
    }
}

/// statusレスポンスを台本どおりに返すフェイクAPI
///
/// 台本が尽きたら成功レスポンスにフォールバックします。
struct FakeApi {
    status_calls: AtomicUsize,
    script: Mutex<VecDeque<ApiResult<GatheringStatus>>>,
}

impl FakeApi {
    fn new(script: Vec<ApiResult<GatheringStatus>>) -> Arc<Self> {
        Arc::new(Self {
            status_calls: AtomicUsize::new(0),
            script: Mutex::new(script.into()),
        })
    }

    fn calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DashboardApi for FakeApi {
    async fn player_count(&self) -> ApiResult<u64> {
        Ok(0)
    }

    async fn gathering_status(&self) -> ApiResult<GatheringStatus> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(running_status()))
    }

    async fn start_gathering(&self, _: GatheringMode, _: u32) -> ApiResult<CommandOutcome> {
        unreachable!("poller never issues commands")
    }

    async fn stop_gathering(&self) -> ApiResult<CommandOutcome> {
        unreachable!("poller never issues commands")
    }

    async fn predict(&self, _: &str) -> ApiResult<PredictionResult> {
        unreachable!("poller never predicts")
    }
}

/// スポーンしたタスクに実行機会を与える（時計は進めない）
async fn settle() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}

const INTERVAL: Duration = Duration::from_secs(5);

#[tokio::test(start_paused = true)]
async fn test_first_fetch_is_immediate() {
    let api = FakeApi::new(vec![]);
    let (_handle, mut events) = StatusPoller::start(api.clone(), INTERVAL);

    settle().await;
    assert_eq!(api.calls(), 1);
    assert_eq!(
        events.try_recv().unwrap(),
        PollEvent::Status(running_status())
    );
}

#[tokio::test(start_paused = true)]
async fn test_fetch_count_matches_elapsed_intervals() {
    let api = FakeApi::new(vec![]);
    let (_handle, _events) = StatusPoller::start(api.clone(), INTERVAL);

    settle().await;
    assert_eq!(api.calls(), 1);

    // 経過時間ごとに 1 + floor(elapsed / interval) 回
    for expected in 2..=4 {
        tokio::time::advance(INTERVAL).await;
        settle().await;
        assert_eq!(api.calls(), expected);
    }

    // 間隔の途中では増えない
    tokio::time::advance(Duration::from_secs(2)).await;
    settle().await;
    assert_eq!(api.calls(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_stops_all_further_fetches() {
    let api = FakeApi::new(vec![]);
    let (mut handle, _events) = StatusPoller::start(api.clone(), INTERVAL);

    settle().await;
    tokio::time::advance(INTERVAL).await;
    settle().await;
    assert_eq!(api.calls(), 2);

    handle.cancel();
    assert!(handle.is_cancelled());

    // キャンセル後はいくら時間が進んでも取得しない
    tokio::time::advance(INTERVAL * 10).await;
    settle().await;
    assert_eq!(api.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_handle_cancels_the_task() {
    let api = FakeApi::new(vec![]);
    let (handle, _events) = StatusPoller::start(api.clone(), INTERVAL);

    settle().await;
    assert_eq!(api.calls(), 1);

    drop(handle);
    settle().await;

    tokio::time::advance(INTERVAL * 10).await;
    settle().await;
    assert_eq!(api.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_transient_error_keeps_polling_alive() {
    let api = FakeApi::new(vec![Err(ApiError::Remote {
        status: 503,
        body: "maintenance".to_string(),
    })]);
    let (_handle, mut events) = StatusPoller::start(api.clone(), INTERVAL);

    settle().await;
    match events.try_recv().unwrap() {
        PollEvent::Failed(message) => assert!(message.contains("503")),
        other => panic!("expected Failed, got {:?}", other),
    }

    // 次のtickでは成功し、ループは生きている
    tokio::time::advance(INTERVAL).await;
    settle().await;
    assert_eq!(api.calls(), 2);
    assert_eq!(
        events.try_recv().unwrap(),
        PollEvent::Status(running_status())
    );
}

#[tokio::test(start_paused = true)]
async fn test_credential_rejection_ends_the_loop() {
    let api = FakeApi::new(vec![Err(ApiError::InvalidCredential)]);
    let (_handle, mut events) = StatusPoller::start(api.clone(), INTERVAL);

    settle().await;
    assert_eq!(events.try_recv().unwrap(), PollEvent::CredentialRejected);

    // リトライせず終了している
    tokio::time::advance(INTERVAL * 5).await;
    settle().await;
    assert_eq!(api.calls(), 1);

    // 送信側は閉じられている
    assert!(matches!(
        events.try_recv(),
        Err(tokio::sync::mpsc::error::TryRecvError::Disconnected)
    ));
}
