use std::io;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use clap::Parser;
use crate::action::interactive::process_interactive_mode;
use crate::config::config::Cli;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::capability::ConverterCapability;
use crate::models::conversion::{BatchSummary, UiEvent};
use crate::models::session::ConversionSession;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::service::dispatcher::ConversionDispatcher;
use crate::service::probe::probe;
use crate::utils::file::expand_inputs;
use crate::utils::utils::{create_progress_bar, setup_logging, ProgressManager};

/// 無參數時進入互動模式；回傳 None 表示未執行轉換
pub fn process_args(args: Vec<String>) -> io::Result<Option<BatchSummary>> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> io::Result<Option<BatchSummary>> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let capability = probe();
    report_capabilities(&capability);
    if cli.show_capabilities {
        return Ok(None);
    }

    // 僅提供輸入路徑時使用預設配置
    let is_default_config = cli.output.is_none() && !cli.no_progress && cli.log_level == "info";
    let config_port: Box<dyn ConfigPort> = if is_default_config {
        log::info!("未提供選項參數，使用預設配置：輸出至來源檔案所在目錄");
        Box::new(DefaultConfigAdapter::new(cli.inputs.clone()))
    } else {
        Box::new(CliConfigAdapter::new(cli))
    };

    let config = ConfigService::new(config_port).get_config()?;
    run_batch(&config, capability).map(Some)
}

/// 啟動時的相依性檢查，兩種轉換器都沒有時顯示警告
pub fn report_capabilities(capability: &ConverterCapability) {
    for line in capability.status_lines() {
        println!("{}", line);
    }
    if !capability.has_any() {
        println!("警告：找不到任何轉換器！請安裝 MS Word 或 LibreOffice。");
    }
}

/// 在背景執行緒轉換所有檔案，主執行緒負責顯示日誌與進度
pub fn run_batch(config: &AppConfig, capability: ConverterCapability) -> io::Result<BatchSummary> {
    let files = expand_inputs(&config.inputs)?;
    if files.is_empty() {
        log::warn!("無符合條件的檔案可處理");
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "找不到相容的檔案（DOCX、DOC、ODT、RTF）"));
    }
    println!("已選取 {} 個檔案。", files.len());

    let output_override = config.output.as_ref().map(PathBuf::from);
    let session = ConversionSession::new(files, output_override);
    let total = session.selected_files().len() as u64;

    let facade = ConversionFacade::new(Arc::new(ConversionDispatcher::system()), capability);
    let handle = facade.start(session)?;

    let pm = create_progress_bar(total, config.no_progress);
    let drained = drain_events(&handle.events, &pm);
    let (_session, summary) = handle.wait()?;

    if drained != Some(summary) {
        log::warn!("事件佇列提前關閉，以工作執行緒結果為準：{}", summary);
    }
    println!("轉換流程已完成！");
    Ok(summary)
}

/// 取出工作執行緒的事件直到佇列關閉
pub fn drain_events(events: &Receiver<UiEvent>, pm: &ProgressManager) -> Option<BatchSummary> {
    let mut completed = None;
    for event in events.iter() {
        match event {
            UiEvent::Log(line) => pm.log(&line),
            UiEvent::Progress { done, total } => pm.update(done as u64, total as u64),
            UiEvent::Completed(summary) => {
                pm.finish();
                completed = Some(summary);
            }
        }
    }
    completed
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            inputs: self.cli.inputs.clone(),
            output: self.cli.output.clone(),
            no_progress: self.cli.no_progress,
            log_level: self.cli.log_level.clone(),
        })
    }
}
