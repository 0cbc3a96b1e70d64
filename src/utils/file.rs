use std::io;
use std::path::{Path, PathBuf};
use log::{info, warn};
use walkdir::WalkDir;
use crate::models::capability::SupportedExtension;

/// 遞迴搜尋目錄中所有支援的文件，依路徑排序
pub fn collect_supported_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("無法讀取目錄項目，跳過：{}", e);
                continue;
            }
        };
        if entry.file_type().is_file() && SupportedExtension::from_path(entry.path()).is_some() {
            files.push(entry.into_path());
        }
    }
    info!("目錄 {} 中找到 {} 個相容檔案", dir.display(), files.len());
    Ok(files)
}

/// 展開輸入：檔案原樣保留（不支援的格式交由轉換時回報），目錄則遞迴搜尋
pub fn expand_inputs(inputs: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let path = Path::new(input);
        if path.is_dir() {
            files.extend(collect_supported_files(path)?);
        } else if path.exists() {
            files.push(path.to_path_buf());
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("輸入路徑 '{}' 不存在", input)
            ));
        }
    }
    Ok(files)
}
