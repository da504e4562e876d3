//! APIレスポンスのデータ構造

use serde::{Deserialize, Serialize};

/// データ収集モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GatheringMode {
    #[serde(rename = "RANDOM")]
    Random,
    #[serde(rename = "BANNED")]
    Banned,
}

impl GatheringMode {
    /// クエリパラメータ用の表記
    pub fn as_str(&self) -> &'static str {
        match self {
            GatheringMode::Random => "RANDOM",
            GatheringMode::Banned => "BANNED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GatheringMode::Random => "Random",
            GatheringMode::Banned => "Banned",
        }
    }
}

impl Default for GatheringMode {
    fn default() -> Self {
        GatheringMode::Random
    }
}

/// データ収集プロセスの状態
///
/// サーバーが唯一の真実。ポーリングごとにローカルコピーを丸ごと置き換えます
/// （部分マージはしない）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatheringStatus {
    pub running: bool,
    pub mode: GatheringMode,
    pub batch_size: u32,
    #[serde(default)]
    pub total_profiles_gathered: u64,
    /// 稼働時間（秒）。停止中は0
    #[serde(default)]
    pub uptime: u64,
}

/// start/stopコマンドのレスポンスボディ
///
/// 表示用のみ。状態の根拠としては使わず、必ずstatusを再取得します。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// モデル推論結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// 0 = clean, 1 = cheater
    pub prediction: u8,
    /// [0,1]
    pub probability: f64,
    /// [0,1]
    pub confidence: f64,
    #[serde(rename = "risk_level")]
    pub risk_level: String,
}

impl PredictionResult {
    pub fn is_flagged(&self) -> bool {
        self.prediction == 1
    }
}
