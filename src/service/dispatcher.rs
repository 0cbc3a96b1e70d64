use std::path::Path;
use log::{info, warn};
use crate::error::ConversionError;
use crate::models::capability::{display_extension, ConverterCapability, SupportedExtension};
use crate::models::conversion::{ConversionRequest, ConversionResult};
use crate::service::headless::HeadlessRunner;
use crate::service::traits::i_service::{DispatcherTrait, HeadlessRunnerTrait, WordBridgeTrait};
use crate::service::word::Docx2PdfBridge;

/// 實際用於轉換的後端
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Word,
    LibreOffice,
}

impl Backend {
    pub fn label(&self) -> &'static str {
        match self {
            Backend::Word => "Word",
            Backend::LibreOffice => "LibreOffice",
        }
    }
}

/// 依偵測結果為每個檔案選擇後端並執行
pub struct ConversionDispatcher {
    word: Box<dyn WordBridgeTrait>,
    headless: Box<dyn HeadlessRunnerTrait>,
}

impl ConversionDispatcher {
    pub fn new(word: Box<dyn WordBridgeTrait>, headless: Box<dyn HeadlessRunnerTrait>) -> Self {
        ConversionDispatcher { word, headless }
    }

    /// 使用 docx2pdf 與 LibreOffice 子行程的預設分派器
    pub fn system() -> Self {
        Self::new(Box::new(Docx2PdfBridge::new()), Box::new(HeadlessRunner::new()))
    }

    /// 選擇順序：副檔名檢查 -> Word（docx/doc）-> LibreOffice -> 無轉換器
    pub fn try_convert(
        &self,
        request: &ConversionRequest,
        capability: &ConverterCapability,
    ) -> Result<Backend, ConversionError> {
        let ext = SupportedExtension::from_path(&request.source)
            .ok_or_else(|| ConversionError::UnsupportedFormat(display_extension(&request.source)))?;

        if capability.word_available && ext.prefers_word() {
            return match self.word.convert(&request.source, &request.output_dir) {
                Ok(()) => Ok(Backend::Word),
                Err(e) => match &capability.headless_path {
                    Some(executable) => {
                        warn!("Word 轉換失敗，改用 LibreOffice：{}（{}）", request.source.display(), e);
                        self.run_headless(executable, request)
                    }
                    None => Err(e),
                },
            };
        }

        match &capability.headless_path {
            Some(executable) => self.run_headless(executable, request),
            None => Err(ConversionError::BackendUnavailable),
        }
    }

    fn run_headless(&self, executable: &Path, request: &ConversionRequest) -> Result<Backend, ConversionError> {
        self.headless
            .run(executable, &request.source, &request.output_dir)
            .map(|()| Backend::LibreOffice)
    }
}

impl DispatcherTrait for ConversionDispatcher {
    fn convert(&self, request: &ConversionRequest, capability: &ConverterCapability) -> ConversionResult {
        match self.try_convert(request, capability) {
            Ok(backend) => {
                info!("轉換成功（{}）：{}", backend.label(), request.source.display());
                ConversionResult::ok(format!("已使用 {} 轉換：{}", backend.label(), request.file_name()))
            }
            Err(e) => {
                warn!("轉換失敗：{}：{}", request.source.display(), e);
                e.into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Calls(Arc<Mutex<Vec<String>>>);

    impl Calls {
        fn record(&self, call: String) {
            self.0.lock().unwrap().push(call);
        }

        fn get(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    struct FakeWord {
        calls: Calls,
        fail: bool,
    }

    impl WordBridgeTrait for FakeWord {
        fn convert(&self, input: &Path, _output_dir: &Path) -> Result<(), ConversionError> {
            self.calls.record(format!("word:{}", input.display()));
            if self.fail {
                Err(ConversionError::Word("COM object not registered".to_string()))
            } else {
                Ok(())
            }
        }
    }

    struct FakeHeadless {
        calls: Calls,
        exit_code: i32,
    }

    impl HeadlessRunnerTrait for FakeHeadless {
        fn run(&self, executable: &Path, input: &Path, output_dir: &Path) -> Result<(), ConversionError> {
            self.calls.record(format!(
                "headless:{}:{}:{}",
                executable.display(),
                input.display(),
                output_dir.display()
            ));
            if self.exit_code == 0 {
                Ok(())
            } else {
                Err(ConversionError::HeadlessExit("Error: source file could not be loaded".to_string()))
            }
        }
    }

    fn dispatcher(calls: &Calls, word_fails: bool, exit_code: i32) -> ConversionDispatcher {
        ConversionDispatcher::new(
            Box::new(FakeWord { calls: calls.clone(), fail: word_fails }),
            Box::new(FakeHeadless { calls: calls.clone(), exit_code }),
        )
    }

    fn capability(word: bool, headless: bool) -> ConverterCapability {
        ConverterCapability {
            word_available: word,
            headless_path: headless.then(|| PathBuf::from("soffice")),
        }
    }

    fn request(name: &str) -> ConversionRequest {
        ConversionRequest::new(format!("docs/{}", name), "docs")
    }

    #[test]
    fn test_unsupported_extension_invokes_nothing() {
        let calls = Calls::default();
        let d = dispatcher(&calls, false, 0);
        for name in ["notes.txt", "deck.pptx", "README", "sheet.xlsx"] {
            let result = d.convert(&request(name), &capability(true, true));
            assert!(!result.success);
            assert!(result.message.starts_with("不支援的副檔名"), "{}", result.message);
        }
        assert!(calls.get().is_empty());
    }

    #[test]
    fn test_unsupported_message_names_extension() {
        let calls = Calls::default();
        let result = dispatcher(&calls, false, 0).convert(&request("photo.PNG"), &capability(false, true));
        assert_eq!(result.message, "不支援的副檔名：.png");
    }

    #[test]
    fn test_word_success() {
        let calls = Calls::default();
        let result = dispatcher(&calls, false, 0).convert(&request("report.docx"), &capability(true, true));
        assert!(result.success);
        assert_eq!(result.message, "已使用 Word 轉換：report.docx");
        assert_eq!(calls.get(), vec!["word:docs/report.docx"]);
    }

    #[test]
    fn test_word_failure_without_headless() {
        let calls = Calls::default();
        let result = dispatcher(&calls, true, 0).convert(&request("report.docx"), &capability(true, false));
        assert!(!result.success);
        assert_eq!(result.message, "Word 錯誤：COM object not registered");
        assert_eq!(calls.get(), vec!["word:docs/report.docx"]);
    }

    #[test]
    fn test_word_failure_falls_back_to_headless() {
        let calls = Calls::default();
        let result = dispatcher(&calls, true, 0).convert(&request("legacy.doc"), &capability(true, true));
        assert!(result.success);
        assert_eq!(result.message, "已使用 LibreOffice 轉換：legacy.doc");
        assert_eq!(calls.get(), vec!["word:docs/legacy.doc", "headless:soffice:docs/legacy.doc:docs"]);

        let calls = Calls::default();
        let result = dispatcher(&calls, true, 1).convert(&request("legacy.doc"), &capability(true, true));
        assert!(!result.success);
        assert!(result.message.starts_with("LibreOffice 錯誤"));
        assert_eq!(calls.get().len(), 2);
    }

    #[test]
    fn test_word_skipped_for_odt_and_rtf() {
        let calls = Calls::default();
        let d = dispatcher(&calls, false, 0);
        assert!(d.convert(&request("a.odt"), &capability(true, true)).success);
        assert!(d.convert(&request("b.rtf"), &capability(true, true)).success);
        assert!(calls.get().iter().all(|c| c.starts_with("headless:")));
    }

    #[test]
    fn test_headless_direct_for_odt() {
        let calls = Calls::default();
        let result = dispatcher(&calls, false, 0).convert(&request("essay.odt"), &capability(false, true));
        assert!(result.success);
        assert_eq!(calls.get(), vec!["headless:soffice:docs/essay.odt:docs"]);
    }

    #[test]
    fn test_word_only_cannot_handle_odt() {
        let calls = Calls::default();
        let result = dispatcher(&calls, false, 0).convert(&request("essay.odt"), &capability(true, false));
        assert!(!result.success);
        assert!(result.message.contains("找不到任何轉換器"));
        assert!(calls.get().is_empty());
    }

    #[test]
    fn test_no_converter_for_every_extension() {
        let calls = Calls::default();
        let d = dispatcher(&calls, false, 0);
        for ext in SupportedExtension::ALL {
            let result = d.convert(&request(&format!("file{}", ext.as_str())), &capability(false, false));
            assert!(!result.success);
            assert_eq!(result.message, ConversionError::BackendUnavailable.to_string());
        }
        assert!(calls.get().is_empty());
    }

    #[test]
    fn test_try_convert_reports_backend() {
        let calls = Calls::default();
        let d = dispatcher(&calls, true, 0);
        let backend = d.try_convert(&request("x.docx"), &capability(true, true)).unwrap();
        assert_eq!(backend, Backend::LibreOffice);
        assert!(matches!(
            d.try_convert(&request("x.txt"), &capability(true, true)),
            Err(ConversionError::UnsupportedFormat(_))
        ));
    }
}
