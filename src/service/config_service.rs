use std::io;
use crate::config::config::{validate_input_path, validate_output_dir};
use crate::config::ports::{AppConfig, ConfigPort};

// 配置服務：從選定的適配器取得配置，並統一驗證路徑
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        let config = self.config_port.get_config()?;
        validate_config(&config)?;
        log::info!(
            "使用配置：inputs={:?}, output={:?}, no_progress={}, log_level={}",
            config.inputs, config.output, config.no_progress, config.log_level
        );
        Ok(config)
    }
}

/// 所有適配器共用的檢查：至少一個存在的輸入，輸出目錄（若有）必須已存在
pub fn validate_config(config: &AppConfig) -> io::Result<()> {
    if config.inputs.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "未指定任何輸入檔案或目錄"));
    }
    for input in &config.inputs {
        validate_input_path(input)?;
    }
    if let Some(output) = &config.output {
        validate_output_dir(output)?;
    }
    Ok(())
}

// 預設配置適配器：僅指定輸入，輸出至來源目錄
pub struct DefaultConfigAdapter {
    inputs: Vec<String>,
}

impl DefaultConfigAdapter {
    pub fn new(inputs: Vec<String>) -> Self {
        DefaultConfigAdapter { inputs }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            inputs: self.inputs.clone(),
            output: None,
            no_progress: false,
            log_level: "info".to_string(),
        })
    }
}
