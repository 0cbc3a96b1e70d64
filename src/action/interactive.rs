use dialoguer::{Confirm, Input, Select};
use std::io;
use std::path::Path;

use crate::action::cli::{report_capabilities, run_batch};
use crate::config::config::validate_output_dir;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::models::conversion::BatchSummary;
use crate::service::config_service::ConfigService;
use crate::service::probe::probe;
use crate::utils::file::{collect_supported_files, expand_inputs};
use crate::utils::utils::setup_logging;

pub fn process_interactive_mode() -> io::Result<Option<BatchSummary>> {
    println!("=== 文件轉 PDF：互動模式 ===");
    println!("支援：DOCX、DOC、ODT、RTF");
    setup_logging("info")?;

    let capability = probe();
    report_capabilities(&capability);

    let config = ConfigService::new(Box::new(InteractiveConfigAdapter)).get_config()?;
    let count = expand_inputs(&config.inputs)?.len();
    if !confirm_start(count)? {
        println!("已取消轉換。");
        return Ok(None);
    }
    run_batch(&config, capability).map(Some)
}

/// 0 = 選擇檔案，1 = 選擇資料夾
pub fn get_selection_mode() -> io::Result<usize> {
    Select::new()
        .with_prompt("選擇輸入方式（使用方向鍵選擇，按 Enter 確認）")
        .items(&["選擇檔案 - 指定一個或多個文件", "選擇資料夾 - 遞迴搜尋相容的文件"])
        .default(0)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("輸入方式選擇失敗: {}", e)))
}

/// 每次輸入一個路徑，空白輸入結束；檔名可包含逗號
pub fn get_file_paths() -> io::Result<Vec<String>> {
    let mut files = Vec::new();
    loop {
        let prompt = if files.is_empty() {
            "請輸入檔案路徑（例如：./a.docx）".to_string()
        } else {
            format!("已加入 {} 個檔案，繼續輸入下一個路徑（直接按 Enter 結束）", files.len())
        };
        let require_one = files.is_empty();
        let entry: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(move |input: &String| -> Result<(), String> {
                if require_one && input.trim().is_empty() {
                    return Err("至少需要一個檔案".to_string());
                }
                check_file_entry(input)
            })
            .interact_text()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

        let entry = entry.trim();
        if entry.is_empty() {
            return Ok(files);
        }
        files.push(entry.to_string());
    }
}

/// 空白代表結束輸入；否則必須是存在的檔案
pub fn check_file_entry(input: &str) -> Result<(), String> {
    let input = input.trim();
    if input.is_empty() || Path::new(input).is_file() {
        Ok(())
    } else {
        Err(format!("檔案 '{}' 不存在", input))
    }
}

pub fn get_folder_path() -> io::Result<String> {
    Input::new()
        .with_prompt("請輸入資料夾路徑（例如：./documents）")
        .validate_with(|input: &String| -> Result<(), String> {
            if Path::new(input).is_dir() { Ok(()) } else { Err(format!("資料夾 '{}' 不存在", input)) }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_output_option() -> io::Result<Option<String>> {
    let output: String = Input::new()
        .with_prompt("輸出目錄（留空則輸出至來源檔案所在目錄）")
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                return Ok(());
            }
            validate_output_dir(input.trim()).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("輸出目錄輸入失敗: {}", e)))?;
    let output = output.trim();
    Ok(if output.is_empty() { None } else { Some(output.to_string()) })
}

pub fn confirm_start(count: usize) -> io::Result<bool> {
    Confirm::new()
        .with_prompt(format!("共 {} 個檔案，是否開始轉換為 PDF？", count))
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("確認輸入失敗: {}", e)))
}

// 交互配置適配器
pub struct InteractiveConfigAdapter;

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let inputs = if get_selection_mode()? == 0 {
            let files = get_file_paths()?;
            println!("已選取：{} 個檔案。", files.len());
            files
        } else {
            let folder = get_folder_path()?;
            let found = collect_supported_files(Path::new(&folder))?;
            if found.is_empty() {
                return Err(io::Error::new(io::ErrorKind::InvalidInput, "資料夾中沒有相容的檔案"));
            }
            println!("已選取資料夾：{}（{} 個相容檔案）", folder, found.len());
            vec![folder]
        };
        let output = get_output_option()?;

        Ok(AppConfig {
            inputs,
            output,
            no_progress: false,
            log_level: "info".to_string(),
        })
    }
}
