use std::io;
use indicatif::{ProgressBar, ProgressStyle};

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌初始化失敗: {}", e)))
}

/// 終端機上的進度條與捲動日誌，只由 UI 執行緒操作
pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
}

impl ProgressManager {
    pub fn new(total: u64, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:40}] {pos}/{len} ({percent}%)")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("##-"),
            );
            pb.set_message("轉換中");
            pb
        };
        ProgressManager { pb, no_progress }
    }

    /// 在進度條上方輸出一行日誌
    pub fn log(&self, line: &str) {
        if self.no_progress {
            println!("{}", line);
        } else {
            self.pb.println(line);
        }
    }

    pub fn update(&self, done: u64, total: u64) {
        self.pb.set_length(total);
        self.pb.set_position(done);
    }

    /// 摘要已寫入日誌，進度條只需停在最終位置
    pub fn finish(&self) {
        if self.no_progress {
            return;
        }
        self.pb.finish();
    }
}

pub fn create_progress_bar(total: u64, no_progress: bool) -> ProgressManager {
    ProgressManager::new(total, no_progress)
}
