pub mod excel;

use crate::error::Result;
use feedback_ai_common::ClassificationResult;
use std::path::{Path, PathBuf};

const DEFAULT_FILE_STEM: &str = "feedback";

/// 出力先がディレクトリ（または拡張子なし）なら `feedback.xlsx` を付ける
pub fn output_path_for_excel(output: &Path) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.xlsx", DEFAULT_FILE_STEM))
    } else {
        output.to_path_buf()
    }
}

pub fn export_results(results: &[ClassificationResult], output: &Path) -> Result<PathBuf> {
    let output_path = output_path_for_excel(output);
    println!("- Excelを生成中...");
    excel::generate_excel(results, &output_path)?;
    println!("✔ Excel出力: {}", output_path.display());
    Ok(output_path)
}
