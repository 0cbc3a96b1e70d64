use std::io;
use thiserror::Error;

/// 單一檔案轉換過程中可能發生的錯誤
///
/// `Display` 的內容即為顯示給使用者的訊息，分派器會直接將其收斂為
/// `ConversionResult { success: false, message }`。
#[derive(Error, Debug)]
pub enum ConversionError {
    /// 副檔名不在支援清單中，不會嘗試任何後端
    #[error("不支援的副檔名：{0}")]
    UnsupportedFormat(String),

    /// 此副檔名沒有任何可用的後端
    #[error("找不到任何轉換器（Word 或 LibreOffice）。")]
    BackendUnavailable,

    /// Word 自動化橋接呼叫失敗
    #[error("Word 錯誤：{0}")]
    Word(String),

    /// LibreOffice 以非零狀態結束，內容為 stderr
    #[error("LibreOffice 錯誤：{0}")]
    HeadlessExit(String),

    /// LibreOffice 無法啟動（例如執行檔不存在）
    #[error("LibreOffice 一般錯誤：{0}")]
    HeadlessLaunch(#[from] io::Error),
}
