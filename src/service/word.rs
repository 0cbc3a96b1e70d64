use std::path::{Path, PathBuf};
use log::{error, info};
use crate::error::ConversionError;
use crate::service::headless::background_command;
use crate::service::probe::WORD_BRIDGE_COMMAND;
use crate::service::traits::i_service::WordBridgeTrait;

/// 透過 docx2pdf 驅動 MS Word 進行轉換
pub struct Docx2PdfBridge {
    executable: PathBuf,
}

impl Docx2PdfBridge {
    /// 使用 PATH 中的 docx2pdf
    pub fn new() -> Self {
        Self::with_executable(WORD_BRIDGE_COMMAND)
    }

    pub fn with_executable(executable: impl Into<PathBuf>) -> Self {
        Docx2PdfBridge { executable: executable.into() }
    }
}

impl Default for Docx2PdfBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl WordBridgeTrait for Docx2PdfBridge {
    fn convert(&self, input: &Path, output_dir: &Path) -> Result<(), ConversionError> {
        info!("使用 Word 轉換：{}", input.display());
        let output = background_command(&self.executable)
            .arg(input)
            .arg(output_dir)
            .output()
            .map_err(|e| {
                error!("無法啟動 docx2pdf（{}）：{}", self.executable.display(), e);
                ConversionError::Word(e.to_string())
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!("docx2pdf 結束狀態 {:?}：{}", output.status.code(), stderr);
            return Err(ConversionError::Word(stderr));
        }
        Ok(())
    }
}
