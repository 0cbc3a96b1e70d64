use std::io;
use std::path::PathBuf;

/// UI 狀態：已選取的檔案與是否正在轉換
///
/// 轉換期間整個 session 會移交給背景執行緒，結束後再交還，
/// 因此轉換中無法變更選取內容。
#[derive(Debug, Clone, Default)]
pub struct ConversionSession {
    selected_files: Vec<PathBuf>,
    output_override: Option<PathBuf>,
    is_converting: bool,
}

impl ConversionSession {
    pub fn new(selected_files: Vec<PathBuf>, output_override: Option<PathBuf>) -> Self {
        ConversionSession {
            selected_files,
            output_override,
            is_converting: false,
        }
    }

    pub fn selected_files(&self) -> &[PathBuf] {
        &self.selected_files
    }

    pub fn output_override(&self) -> Option<&PathBuf> {
        self.output_override.as_ref()
    }

    pub fn is_converting(&self) -> bool {
        self.is_converting
    }

    pub(crate) fn begin(&mut self) -> io::Result<()> {
        if self.is_converting {
            return Err(io::Error::new(io::ErrorKind::WouldBlock, "轉換已在進行中"));
        }
        if self.selected_files.is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "沒有選取任何檔案"));
        }
        self.is_converting = true;
        Ok(())
    }

    pub(crate) fn finish(&mut self) {
        self.is_converting = false;
    }
}
