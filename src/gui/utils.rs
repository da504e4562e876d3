// GUI用ユーティリティ関数

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogConfig;

/// ログ初期化
///
/// 環境変数 `RUST_LOG` があればそれを優先し、なければ設定のログレベルを使用。
/// ファイル出力が有効な場合は日次ローテーションで併記します。
/// 戻り値のguardはプロセス終了まで保持してください（ドロップするとファイル出力が止まる）。
pub fn init_logging(
    log_config: &LogConfig,
    level_override: Option<&str>,
) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let default_level = level_override.unwrap_or(&log_config.log_level);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    if log_config.enable_file_logging {
        let log_dir = log_config
            .log_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("cheaterdash"));
        let file_appender = tracing_appender::rolling::daily(log_dir, "cheaterdash.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .try_init()?;
        Ok(Some(guard))
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
        Ok(None)
    }
}

/// [0,1] の確率を表示用パーセントに整形 (0.92 → "92.00%")
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// 稼働秒数の表示用整形
pub fn format_uptime(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {:02}s", seconds / 60, seconds % 60)
    } else {
        format!(
            "{}h {:02}m {:02}s",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    }
}

/// 時刻フォーマット
pub fn format_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.92), "92.00%");
        assert_eq!(format_percent(0.81), "81.00%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(1.0), "100.00%");
        assert_eq!(format_percent(0.5555), "55.55%");
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0), "0s");
        assert_eq!(format_uptime(59), "59s");
        assert_eq!(format_uptime(60), "1m 00s");
        assert_eq!(format_uptime(300), "5m 00s");
        assert_eq!(format_uptime(3661), "1h 01m 01s");
    }

    #[test]
    fn test_format_timestamp_shape() {
        let stamp = format_timestamp();
        assert_eq!(stamp.len(), 8);
        assert_eq!(stamp.matches(':').count(), 2);
    }
}
