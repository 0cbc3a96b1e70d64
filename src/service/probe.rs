use std::path::{Path, PathBuf};
use log::{info, warn};
use crate::models::capability::{ConverterCapability, OsFamily};
use crate::service::traits::i_service::HostEnvironment;

pub const SOFFICE_COMMAND: &str = "soffice";
pub const WORD_BRIDGE_COMMAND: &str = "docx2pdf";

pub const WINDOWS_SOFFICE_PATHS: [&str; 2] = [
    r"C:\Program Files\LibreOffice\program\soffice.exe",
    r"C:\Program Files (x86)\LibreOffice\program\soffice.exe",
];

pub const MACOS_SOFFICE_PATHS: [&str; 1] = ["/Applications/LibreOffice.app/Contents/MacOS/soffice"];

/// 實際主機環境
pub struct SystemEnvironment;

impl HostEnvironment for SystemEnvironment {
    fn os_family(&self) -> OsFamily {
        OsFamily::current()
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn resolves_on_path(&self, command: &str) -> bool {
        which::which(command).is_ok()
    }

    // docx2pdf 透過 COM 驅動 Word，找得到即視為可用
    fn word_bridge_loadable(&self) -> bool {
        which::which(WORD_BRIDGE_COMMAND).is_ok()
    }
}

/// 偵測目前主機可用的轉換後端
pub fn probe() -> ConverterCapability {
    probe_with(&SystemEnvironment)
}

/// 依給定環境偵測，永不失敗；缺少的能力以 false / None 表示
pub fn probe_with(env: &dyn HostEnvironment) -> ConverterCapability {
    let capability = ConverterCapability {
        word_available: check_word_installed(env),
        headless_path: find_libreoffice(env),
    };
    info!(
        "轉換能力偵測完成：Word={}，LibreOffice={:?}",
        capability.word_available, capability.headless_path
    );
    if !capability.has_any() {
        warn!("找不到任何轉換器，請安裝 MS Word 或 LibreOffice");
    }
    capability
}

/// 僅在 Windows 上且橋接可載入時視為 Word 可用
///
/// 這只是啟發式判斷：橋接存在不代表 Word 已安裝，
/// 真正的失敗會在轉換時由 LibreOffice 備援處理。
pub fn check_word_installed(env: &dyn HostEnvironment) -> bool {
    if env.os_family() != OsFamily::Windows {
        return false;
    }
    env.word_bridge_loadable()
}

pub fn find_libreoffice(env: &dyn HostEnvironment) -> Option<PathBuf> {
    let paths_to_check: &[&str] = match env.os_family() {
        OsFamily::Windows => &WINDOWS_SOFFICE_PATHS,
        OsFamily::MacOs => &MACOS_SOFFICE_PATHS,
        // 其他平台假設 soffice 在 PATH 中，執行時才會知道是否存在
        OsFamily::Other => return Some(PathBuf::from(SOFFICE_COMMAND)),
    };

    if let Some(found) = paths_to_check.iter().map(Path::new).find(|p| env.path_exists(p)) {
        return Some(found.to_path_buf());
    }

    if env.resolves_on_path(SOFFICE_COMMAND) {
        Some(PathBuf::from(SOFFICE_COMMAND))
    } else {
        None
    }
}
