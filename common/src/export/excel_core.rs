//! Excel生成（共通ライブラリ）
//!
//! 分類結果の一覧シートと感情ラベル集計シートを持つブックを生成

use crate::analyzer::count_sentiments;
use crate::error::{Error, Result};
use crate::types::{ClassificationResult, Sentiment};
use rust_xlsxwriter::*;

const RESULTS_SHEET: &str = "Results";
const SUMMARY_SHEET: &str = "Summary";
const HEADERS: [&str; 4] = ["ID", "Comment", "Category", "Sentiment"];

fn xlsx_err(context: &str) -> impl Fn(XlsxError) -> Error + '_ {
    move |e| Error::Excel(format!("{}: {}", context, e))
}

/// 感情ラベルに応じたセル書式
fn sentiment_format(sentiment: Option<Sentiment>) -> Format {
    let (bg, fg) = match sentiment {
        Some(Sentiment::Positive) => (0xD1FAE5, 0x065F46),
        Some(Sentiment::Negative) => (0xFEE2E2, 0x991B1B),
        Some(Sentiment::Error) => (0xFDE68A, 0x92400E),
        _ => (0xF3F4F6, 0x374151),
    };
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(bg))
        .set_font_color(Color::RGB(fg))
        .set_border(FormatBorder::Hair)
}

/// Excelをバッファに生成
///
/// # Arguments
/// * `results` - 分類結果（id順で出力）
pub fn generate_excel_buffer(results: &[ClassificationResult]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    // フォーマット定義
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x6B7280))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let text_format = Format::new()
        .set_text_wrap()
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    // 一覧シート
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(RESULTS_SHEET).map_err(xlsx_err("シート名設定エラー"))?;

        for (col, width) in [(0u16, 6.0), (1, 70.0), (2, 20.0), (3, 12.0)] {
            sheet.set_column_width(col, width).map_err(xlsx_err("列幅設定エラー"))?;
        }

        for (col, header) in HEADERS.iter().enumerate() {
            sheet
                .write_string_with_format(0, col as u16, *header, &header_format)
                .map_err(xlsx_err("ヘッダー書き込みエラー"))?;
        }
        sheet.set_freeze_panes(1, 0).map_err(xlsx_err("ウィンドウ枠固定エラー"))?;

        for (i, r) in results.iter().enumerate() {
            let row = (i + 1) as u32;
            sheet
                .write_number_with_format(row, 0, r.id, &text_format)
                .map_err(xlsx_err("ID書き込みエラー"))?;
            sheet
                .write_string_with_format(row, 1, &r.text, &text_format)
                .map_err(xlsx_err("コメント書き込みエラー"))?;
            sheet
                .write_string_with_format(row, 2, &r.category, &text_format)
                .map_err(xlsx_err("カテゴリ書き込みエラー"))?;
            sheet
                .write_string_with_format(row, 3, &r.sentiment, &sentiment_format(r.sentiment_kind()))
                .map_err(xlsx_err("感情ラベル書き込みエラー"))?;
        }

        if !results.is_empty() {
            sheet
                .autofilter(0, 0, results.len() as u32, (HEADERS.len() - 1) as u16)
                .map_err(xlsx_err("オートフィルタ設定エラー"))?;
        }
    }

    // 集計シート
    {
        let counts = count_sentiments(results);
        let sheet = workbook.add_worksheet();
        sheet.set_name(SUMMARY_SHEET).map_err(xlsx_err("シート名設定エラー"))?;
        sheet.set_column_width(0, 14.0).map_err(xlsx_err("列幅設定エラー"))?;

        sheet
            .write_string_with_format(0, 0, "Sentiment", &header_format)
            .map_err(xlsx_err("ヘッダー書き込みエラー"))?;
        sheet
            .write_string_with_format(0, 1, "Count", &header_format)
            .map_err(xlsx_err("ヘッダー書き込みエラー"))?;

        let mut row = 1u32;
        for sentiment in Sentiment::CHOICES {
            sheet
                .write_string_with_format(row, 0, sentiment.label(), &sentiment_format(Some(sentiment)))
                .map_err(xlsx_err("集計書き込みエラー"))?;
            sheet
                .write_number(row, 1, counts.get(sentiment) as f64)
                .map_err(xlsx_err("集計書き込みエラー"))?;
            row += 1;
        }

        sheet
            .write_string_with_format(row, 0, "Total", &header_format)
            .map_err(xlsx_err("集計書き込みエラー"))?;
        sheet
            .write_number(row, 1, counts.total() as f64)
            .map_err(xlsx_err("集計書き込みエラー"))?;
    }

    // バッファに書き出し
    workbook.save_to_buffer().map_err(xlsx_err("Excel保存エラー"))
}
