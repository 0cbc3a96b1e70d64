use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;
use log::{error, info};
use crate::error::ConversionError;
use crate::service::traits::i_service::HeadlessRunnerTrait;

/// 建立子行程指令；Windows 上不顯示主控台視窗
pub(crate) fn background_command(program: impl AsRef<OsStr>) -> Command {
    #[allow(unused_mut)]
    let mut command = Command::new(program);
    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        const CREATE_NO_WINDOW: u32 = 0x0800_0000;
        command.creation_flags(CREATE_NO_WINDOW);
    }
    command
}

/// soffice --headless --convert-to pdf <input> --outdir <dir>
pub fn build_headless_command(executable: &Path, input: &Path, output_dir: &Path) -> Command {
    let mut command = background_command(executable);
    command
        .arg("--headless")
        .arg("--convert-to")
        .arg("pdf")
        .arg(input)
        .arg("--outdir")
        .arg(output_dir);
    command
}

/// 以子行程執行 LibreOffice，不設逾時
pub struct HeadlessRunner;

impl HeadlessRunner {
    pub fn new() -> Self {
        HeadlessRunner
    }
}

impl Default for HeadlessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessRunnerTrait for HeadlessRunner {
    fn run(&self, executable: &Path, input: &Path, output_dir: &Path) -> Result<(), ConversionError> {
        info!("執行 LibreOffice：{} -> {}", input.display(), output_dir.display());
        let output = build_headless_command(executable, input, output_dir)
            .output()
            .map_err(|e| {
                error!("無法啟動 LibreOffice（{}）：{}", executable.display(), e);
                ConversionError::HeadlessLaunch(e)
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            error!("LibreOffice 結束狀態 {:?}：{}", output.status.code(), stderr.trim());
            return Err(ConversionError::HeadlessExit(stderr));
        }
        Ok(())
    }
}
