use std::io;
use crate::facade::conversion_facade::BatchHandle;
use crate::models::session::ConversionSession;

// Facade 接口，負責啟動批次轉換
pub trait ConversionFacadeTrait: Send + Sync {
    /// 在背景執行緒依序轉換 session 中的所有檔案
    /// # 參數
    /// - session: 已選取檔案的 UI 狀態，轉換期間由工作執行緒持有
    /// # 回傳
    /// - 成功時返回批次控制代碼，session 正在轉換或沒有檔案時返回 IO 錯誤
    fn start(&self, session: ConversionSession) -> io::Result<BatchHandle>;
}
