//! Excel生成（CLI版）

use crate::error::{FeedbackAiError, Result};
use feedback_ai_common::{generate_excel_buffer, ClassificationResult};
use std::path::Path;

pub fn generate_excel(results: &[ClassificationResult], output_path: &Path) -> Result<()> {
    let buffer = generate_excel_buffer(results)
        .map_err(|e| FeedbackAiError::ExcelGeneration(e.to_string()))?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_path, buffer)?;
    Ok(())
}
