use std::path::{Path, PathBuf};

/// 支援轉換的副檔名，固定不可設定
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SupportedExtension {
    Docx,
    Doc,
    Odt,
    Rtf,
}

impl SupportedExtension {
    pub const ALL: [SupportedExtension; 4] = [
        SupportedExtension::Docx,
        SupportedExtension::Doc,
        SupportedExtension::Odt,
        SupportedExtension::Rtf,
    ];

    /// 依路徑副檔名判斷（不分大小寫）
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "docx" => Some(SupportedExtension::Docx),
            "doc" => Some(SupportedExtension::Doc),
            "odt" => Some(SupportedExtension::Odt),
            "rtf" => Some(SupportedExtension::Rtf),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportedExtension::Docx => ".docx",
            SupportedExtension::Doc => ".doc",
            SupportedExtension::Odt => ".odt",
            SupportedExtension::Rtf => ".rtf",
        }
    }

    /// Word 優先處理的格式
    pub fn prefers_word(&self) -> bool {
        matches!(self, SupportedExtension::Docx | SupportedExtension::Doc)
    }
}

/// 取得路徑的副檔名字串（含點、轉小寫），無副檔名時回傳空字串
pub fn display_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// 主機作業系統類別
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OsFamily {
    Windows,
    MacOs,
    Other,
}

impl OsFamily {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            OsFamily::Windows
        } else if cfg!(target_os = "macos") {
            OsFamily::MacOs
        } else {
            OsFamily::Other
        }
    }
}

/// 啟動時偵測一次的轉換能力快照，之後唯讀
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConverterCapability {
    pub word_available: bool,
    pub headless_path: Option<PathBuf>,
}

impl ConverterCapability {
    pub fn has_any(&self) -> bool {
        self.word_available || self.headless_path.is_some()
    }

    /// 啟動時顯示的相依性檢查結果
    pub fn status_lines(&self) -> Vec<String> {
        let mut status = Vec::new();
        if self.word_available {
            status.push("偵測到 MS Word（docx2pdf）。".to_string());
        } else {
            status.push("未偵測到 MS Word。".to_string());
        }
        match &self.headless_path {
            Some(path) => status.push(format!("偵測到 LibreOffice：{}", path.display())),
            None => status.push("未偵測到 LibreOffice，請安裝以支援 ODT/RTF。".to_string()),
        }
        status
    }
}
