#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use doc_to_pdf::error::ConversionError;
use doc_to_pdf::models::capability::ConverterCapability;
use doc_to_pdf::models::conversion::ConversionRequest;
use doc_to_pdf::service::dispatcher::ConversionDispatcher;
use doc_to_pdf::service::headless::HeadlessRunner;
use doc_to_pdf::service::traits::i_service::{DispatcherTrait, WordBridgeTrait};

/// Word 已「偵測到」但實際無法使用的情況
struct BrokenWord;

impl WordBridgeTrait for BrokenWord {
    fn convert(&self, _input: &Path, _output_dir: &Path) -> Result<(), ConversionError> {
        Err(ConversionError::Word("Invalid class string".to_string()))
    }
}

/// 模擬 soffice：在 --outdir 中建立同名 PDF
fn fake_soffice(dir: &Path) -> PathBuf {
    let path = dir.join("soffice");
    let script = r#"#!/bin/sh
input="$4"
outdir="$6"
name=$(basename "$input")
stem="${name%.*}"
if [ ! -f "$input" ]; then
  echo "Error: source file could not be loaded" >&2
  exit 1
fi
echo "%PDF-1.4" > "$outdir/$stem.pdf"
"#;
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn dispatcher() -> ConversionDispatcher {
    ConversionDispatcher::new(Box::new(BrokenWord), Box::new(HeadlessRunner::new()))
}

#[test]
fn test_odt_converted_next_to_source() {
    let tools = tempfile::tempdir().unwrap();
    let docs = tempfile::tempdir().unwrap();
    let source = docs.path().join("essay.odt");
    fs::write(&source, b"odt").unwrap();

    let capability = ConverterCapability {
        word_available: false,
        headless_path: Some(fake_soffice(tools.path())),
    };
    let request = ConversionRequest::beside_source(&source, None);
    let result = dispatcher().convert(&request, &capability);

    assert!(result.success, "{}", result.message);
    assert!(docs.path().join("essay.pdf").exists());
}

#[test]
fn test_word_failure_falls_back_to_real_process() {
    let tools = tempfile::tempdir().unwrap();
    let docs = tempfile::tempdir().unwrap();
    let source = docs.path().join("report.docx");
    fs::write(&source, b"docx").unwrap();

    let capability = ConverterCapability {
        word_available: true,
        headless_path: Some(fake_soffice(tools.path())),
    };
    let result = dispatcher().convert(&ConversionRequest::beside_source(&source, None), &capability);

    assert!(result.success, "{}", result.message);
    assert!(result.message.contains("LibreOffice"));
    assert!(docs.path().join("report.pdf").exists());
}

#[test]
fn test_process_failure_carries_stderr() {
    let tools = tempfile::tempdir().unwrap();
    let docs = tempfile::tempdir().unwrap();
    let capability = ConverterCapability {
        word_available: false,
        headless_path: Some(fake_soffice(tools.path())),
    };
    let request = ConversionRequest::new(docs.path().join("missing.rtf"), docs.path());
    let result = dispatcher().convert(&request, &capability);

    assert!(!result.success);
    assert!(result.message.contains("source file could not be loaded"), "{}", result.message);
}

#[test]
fn test_missing_executable_is_generic_failure() {
    let docs = tempfile::tempdir().unwrap();
    let source = docs.path().join("a.odt");
    fs::write(&source, b"odt").unwrap();
    let capability = ConverterCapability {
        word_available: false,
        headless_path: Some(docs.path().join("no-soffice-here")),
    };
    let result = dispatcher().convert(&ConversionRequest::beside_source(&source, None), &capability);

    assert!(!result.success);
    assert!(result.message.starts_with("LibreOffice 一般錯誤"), "{}", result.message);
}
