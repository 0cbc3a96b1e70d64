use std::path::Path;
use crate::error::ConversionError;
use crate::models::capability::{ConverterCapability, OsFamily};
use crate::models::conversion::{ConversionRequest, ConversionResult};

// 主機環境接口，偵測器透過它讀取平台資訊，測試時可替換
pub trait HostEnvironment {
    /// 目前作業系統類別
    fn os_family(&self) -> OsFamily;

    /// 檔案路徑是否存在
    fn path_exists(&self, path: &Path) -> bool;

    /// 指令名稱能否在 PATH 中找到
    fn resolves_on_path(&self, command: &str) -> bool;

    /// Word 自動化橋接是否可載入（僅檢查存在，不啟動 Word）
    fn word_bridge_loadable(&self) -> bool;
}

// Word 自動化橋接接口
pub trait WordBridgeTrait: Send + Sync {
    /// 將單一檔案轉為 PDF，輸出同名 .pdf 至 output_dir
    /// # 回傳
    /// - 失敗時返回 ConversionError::Word
    fn convert(&self, input: &Path, output_dir: &Path) -> Result<(), ConversionError>;
}

// 無介面轉換程式（LibreOffice）接口
pub trait HeadlessRunnerTrait: Send + Sync {
    /// 以 executable 執行無介面轉換，阻塞直到子行程結束
    /// # 回傳
    /// - 非零結束狀態返回 HeadlessExit，無法啟動返回 HeadlessLaunch
    fn run(&self, executable: &Path, input: &Path, output_dir: &Path) -> Result<(), ConversionError>;
}

// 分派器接口，批次工作執行緒透過它轉換每個檔案
pub trait DispatcherTrait: Send + Sync {
    fn convert(&self, request: &ConversionRequest, capability: &ConverterCapability) -> ConversionResult;
}
