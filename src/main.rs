use std::io;

use doc_to_pdf::action::cli::process_args;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if let Some(summary) = process_args(args)? {
        log::info!("程式執行完成，轉換結果：{}", summary);
    }
    Ok(())
}
