use std::fmt;
use std::path::{Path, PathBuf};
use crate::error::ConversionError;

/// 單一檔案的轉換請求
#[derive(Clone, Debug)]
pub struct ConversionRequest {
    pub source: PathBuf,
    pub output_dir: PathBuf,
}

impl ConversionRequest {
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        ConversionRequest {
            source: source.into(),
            output_dir: output_dir.into(),
        }
    }

    /// 輸出目錄預設為來源檔案所在目錄
    pub fn beside_source(source: &Path, output_override: Option<&Path>) -> Self {
        let output_dir = match output_override {
            Some(dir) => dir.to_path_buf(),
            None => source
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        };
        ConversionRequest::new(source, output_dir)
    }

    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}

/// 轉換結果，訊息僅供顯示
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionResult {
    pub success: bool,
    pub message: String,
}

impl ConversionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        ConversionResult { success: true, message: message.into() }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        ConversionResult { success: false, message: message.into() }
    }
}

impl From<ConversionError> for ConversionResult {
    fn from(err: ConversionError) -> Self {
        ConversionResult::failed(err.to_string())
    }
}

/// 批次完成摘要
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub total: usize,
}

impl BatchSummary {
    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.succeeded, self.total)
    }
}

/// 背景工作執行緒傳回 UI 執行緒的事件
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    Log(String),
    Progress { done: usize, total: usize },
    Completed(BatchSummary),
}
