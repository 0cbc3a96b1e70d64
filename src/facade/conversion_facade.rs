use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use chrono::Local;
use log::info;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::capability::ConverterCapability;
use crate::models::conversion::{BatchSummary, ConversionRequest, UiEvent};
use crate::models::session::ConversionSession;
use crate::service::traits::i_service::DispatcherTrait;

const SEPARATOR: &str = "------------------------------";

/// 進行中的批次：事件佇列與工作執行緒
pub struct BatchHandle {
    pub events: Receiver<UiEvent>,
    worker: JoinHandle<(ConversionSession, BatchSummary)>,
}

impl BatchHandle {
    /// 等待工作執行緒結束，交還 session
    pub fn wait(self) -> io::Result<(ConversionSession, BatchSummary)> {
        self.worker
            .join()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "轉換工作執行緒異常結束"))
    }
}

pub struct ConversionFacade {
    dispatcher: Arc<dyn DispatcherTrait>,
    capability: ConverterCapability,
}

impl ConversionFacade {
    pub fn new(dispatcher: Arc<dyn DispatcherTrait>, capability: ConverterCapability) -> Self {
        ConversionFacade { dispatcher, capability }
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn start(&self, mut session: ConversionSession) -> io::Result<BatchHandle> {
        session.begin()?;
        let (tx, rx) = mpsc::channel();
        let dispatcher = Arc::clone(&self.dispatcher);
        let capability = self.capability.clone();

        let worker = thread::Builder::new()
            .name("conversion-worker".to_string())
            .spawn(move || {
                let summary = run_conversion(dispatcher.as_ref(), &capability, &session, &tx);
                session.finish();
                (session, summary)
            })?;

        Ok(BatchHandle { events: rx, worker })
    }
}

/// 依選取順序逐一轉換，單一檔案失敗不會中斷批次
pub fn run_conversion(
    dispatcher: &dyn DispatcherTrait,
    capability: &ConverterCapability,
    session: &ConversionSession,
    tx: &Sender<UiEvent>,
) -> BatchSummary {
    let files = session.selected_files();
    let total = files.len();
    let mut succeeded = 0;

    // UI 端可能已關閉佇列，送出失敗時只需繼續轉換
    let send = |event: UiEvent| {
        let _ = tx.send(event);
    };

    send(UiEvent::Log(SEPARATOR.to_string()));
    send(UiEvent::Log(format!("開始轉換...（{}）", Local::now().format("%Y-%m-%d %H:%M:%S"))));
    info!("開始批次轉換，共 {} 個檔案", total);

    for (i, file_path) in files.iter().enumerate() {
        let request = ConversionRequest::beside_source(file_path, session.output_override().map(|p| p.as_path()));
        let result = dispatcher.convert(&request, capability);

        if result.success {
            succeeded += 1;
            send(UiEvent::Log(format!("[OK] {}", result.message)));
        } else {
            send(UiEvent::Log(format!("[錯誤] {}", result.message)));
        }
        send(UiEvent::Progress { done: i + 1, total });
    }

    let summary = BatchSummary { succeeded, total };
    send(UiEvent::Log(SEPARATOR.to_string()));
    send(UiEvent::Log(format!("完成！{} 個檔案已轉換（失敗 {} 個）。", summary, summary.failed())));
    info!("批次轉換完成：{}", summary);
    send(UiEvent::Completed(summary));
    summary
}
