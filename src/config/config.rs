use clap::Parser;
use std::io;
use std::path::Path;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "doc_to_pdf",
    about = "將 Office 文件（DOCX/DOC/ODT/RTF）轉換為 PDF",
    long_about = "使用 MS Word（Windows，透過 docx2pdf）或 LibreOffice 無介面模式將文件轉換為 PDF。\n輸入可為檔案或目錄，目錄會遞迴搜尋支援的檔案。預設輸出至來源檔案所在目錄。\n不帶任何參數執行時進入互動模式。",
    arg_required_else_help = true
)]
pub struct Cli {
    /// 檔案或目錄，可指定多個
    #[arg(required_unless_present = "show_capabilities")]
    pub inputs: Vec<String>,
    /// 輸出目錄（必須已存在），預設為來源檔案所在目錄
    #[arg(short, long)]
    pub output: Option<String>,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "info", value_parser = ["info", "warn", "error"])]
    pub log_level: String,
    /// 僅顯示偵測到的轉換器後結束
    #[arg(long, default_value_t = false)]
    pub show_capabilities: bool,
}

pub fn validate_input_path(input: &str) -> io::Result<&Path> {
    let path = Path::new(input);
    if !path.exists() {
        log::error!("輸入路徑不存在：{}", input);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("輸入路徑 '{}' 不存在", input)
        ));
    }
    Ok(path)
}

/// 輸出目錄不會自動建立
pub fn validate_output_dir(output: &str) -> io::Result<&Path> {
    let path = Path::new(output);
    if !path.is_dir() {
        log::error!("輸出目錄不存在：{}", output);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("輸出目錄 '{}' 不存在或不是目錄", output)
        ));
    }
    Ok(path)
}
