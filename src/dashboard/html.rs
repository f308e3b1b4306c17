//! ダッシュボードHTML
//!
//! テンプレートのプレースホルダを置換して1ページを生成する。
//! 並べ替えはクライアント側のJSで行う（数値列は data-val、他は小文字比較）。

use super::DashboardView;
use feedback_ai_common::{ClassificationResult, Sentiment};

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>AI Feedback Dashboard</title>
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;600&display=swap" rel="stylesheet">
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
    <style>
        :root { --primary: #4F46E5; --bg: #F3F4F6; --card-bg: #FFFFFF; --text: #1F2937; --border: #E5E7EB; }
        body { font-family: 'Inter', sans-serif; background-color: var(--bg); color: var(--text); margin: 0; padding: 40px; }
        .layout { max-width: 1000px; margin: 0 auto; display: grid; gap: 20px; }
        .card { background: var(--card-bg); padding: 20px; border-radius: 12px; box-shadow: 0 2px 4px rgba(0,0,0,0.05); }
        .header-card { display: flex; justify-content: space-between; align-items: center; }
        h1 { margin: 0; font-size: 1.5rem; }
        .meta { margin: 5px 0 0 0; color: #666; font-size: 0.9em; }
        .btn { background: var(--primary); color: white; padding: 10px 20px; border-radius: 6px; text-decoration: none; font-weight: 500; }
        .btn:hover { background: #4338ca; }
        .btn.loading { opacity: 0.7; cursor: wait; }
        .chart-container { height: 300px; display: flex; justify-content: center; align-items: center; }
        table { width: 100%; border-collapse: collapse; margin-top: 10px; }
        th { text-align: left; padding: 12px; border-bottom: 2px solid var(--border); color: #6B7280; font-size: 0.85rem; text-transform: uppercase; cursor: pointer; user-select: none; }
        th:hover { color: var(--primary); background: #f9fafb; }
        th::after { content: ' \2195'; font-size: 0.7em; opacity: 0.5; }
        th.asc::after { content: ' \2191'; opacity: 1; }
        th.desc::after { content: ' \2193'; opacity: 1; }
        td { padding: 14px 12px; border-bottom: 1px solid var(--border); }
        td.id { color: #9CA3AF; }
        td.empty { text-align: center; color: #9CA3AF; }
        .badge { padding: 4px 10px; border-radius: 9999px; font-size: 0.75rem; font-weight: 600; text-transform: uppercase; }
        .pos { background: #D1FAE5; color: #065F46; }
        .neg { background: #FEE2E2; color: #991B1B; }
        .neu { background: #F3F4F6; color: #374151; }
        .err { background: #FDE68A; color: #92400E; }
        .category-tag { background: #EEF2FF; color: #4F46E5; padding: 4px 8px; border-radius: 6px; font-weight: 500; font-size: 0.85rem; }
    </style>
</head>
<body>
    <div class="layout">
        <div class="card header-card">
            <div>
                <h1>Feedback Dashboard</h1>
                <p class="meta">__ROW_COUNT__ comments &middot; __UPDATED_AT__</p>
            </div>
            <a href="/run" class="btn" onclick="this.classList.add('loading'); this.innerHTML='Running...';">Run Analysis</a>
        </div>

        <div class="card chart-container">
            <div style="width: 400px; height: 100%;">
                <canvas id="sentimentChart"></canvas>
            </div>
        </div>

        <div class="card">
            <table id="dataTable">
                <thead>
                    <tr>
                        <th data-col="0">ID</th>
                        <th data-col="1">Comment</th>
                        <th data-col="2">Category</th>
                        <th data-col="3">Sentiment</th>
                    </tr>
                </thead>
                <tbody>
__ROWS__
                </tbody>
            </table>
        </div>
    </div>

    <script>
        const sentimentData = __COUNTS_JSON__;

        new Chart(document.getElementById('sentimentChart').getContext('2d'), {
            type: 'doughnut',
            data: {
                labels: ['Positive', 'Negative', 'Neutral'],
                datasets: [{
                    data: [sentimentData.Positive, sentimentData.Negative, sentimentData.Neutral],
                    backgroundColor: ['#10B981', '#EF4444', '#9CA3AF'],
                    borderWidth: 0
                }]
            },
            options: {
                responsive: true,
                maintainAspectRatio: false,
                plugins: {
                    legend: { position: 'right' },
                    title: { display: true, text: 'Sentiment Distribution' }
                }
            }
        });

        let sortState = { col: null, dir: 'asc' };

        function cellValue(row, col) {
            const cell = row.cells[col];
            const val = cell.getAttribute('data-val');
            return val !== null ? parseFloat(val) : cell.textContent.trim().toLowerCase();
        }

        function sortTable(col) {
            const dir = (sortState.col === col && sortState.dir === 'asc') ? 'desc' : 'asc';
            sortState = { col: col, dir: dir };

            const tbody = document.querySelector('#dataTable tbody');
            const rows = Array.from(tbody.querySelectorAll('tr.result-row'));
            rows.sort(function (a, b) {
                const x = cellValue(a, col);
                const y = cellValue(b, col);
                const cmp = x < y ? -1 : (x > y ? 1 : 0);
                return dir === 'asc' ? cmp : -cmp;
            });
            rows.forEach(function (row) { tbody.appendChild(row); });

            document.querySelectorAll('#dataTable th').forEach(function (th) {
                th.classList.remove('asc', 'desc');
                if (parseInt(th.getAttribute('data-col'), 10) === col) th.classList.add(dir);
            });
        }

        document.querySelectorAll('#dataTable th').forEach(function (th) {
            th.addEventListener('click', function () { sortTable(parseInt(th.getAttribute('data-col'), 10)); });
        });
    </script>
</body>
</html>
"##;

const EMPTY_ROW: &str = r#"                    <tr class="empty-row"><td class="empty" colspan="4">No results yet. Click "Run Analysis" to classify the feedback.</td></tr>"#;

/// HTML特殊文字をエスケープ
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 感情ラベルのバッジ（クラス名, 表示名, ランク）
fn sentiment_badge(result: &ClassificationResult) -> (&'static str, &'static str, u8) {
    match result.sentiment_kind() {
        Some(Sentiment::Positive) => ("pos", "Positive", Sentiment::Positive.rank()),
        Some(Sentiment::Negative) => ("neg", "Negative", Sentiment::Negative.rank()),
        Some(Sentiment::Error) => ("err", "Error", Sentiment::Error.rank()),
        // 未知の値はNeutralとして表示（集計と同じ扱い）
        _ => ("neu", "Neutral", Sentiment::Neutral.rank()),
    }
}

fn render_row(result: &ClassificationResult) -> String {
    let (class, label, rank) = sentiment_badge(result);
    format!(
        r#"                    <tr class="result-row">
                        <td class="id" data-val="{id}">#{id}</td>
                        <td>{text}</td>
                        <td><span class="category-tag">{category}</span></td>
                        <td data-val="{rank}"><span class="badge {class}">{label}</span></td>
                    </tr>"#,
        id = result.id,
        text = escape_html(&result.text),
        category = escape_html(&result.category),
        rank = rank,
        class = class,
        label = label,
    )
}

pub(super) fn render_page(view: &DashboardView) -> String {
    let rows = if view.results.is_empty() {
        EMPTY_ROW.to_string()
    } else {
        view.results
            .iter()
            .map(render_row)
            .collect::<Vec<_>>()
            .join("\n")
    };

    let updated_at = view
        .updated_at
        .map(|t| format!("updated {}", t.format("%Y-%m-%d %H:%M:%S")))
        .unwrap_or_else(|| "no data yet".to_string());

    let counts_json = serde_json::to_string(&view.counts).unwrap_or_else(|_| "{}".to_string());

    // 行は最後に差し込む（コメント本文中のプレースホルダ文字列を置換しないため）
    TEMPLATE
        .replace("__UPDATED_AT__", &updated_at)
        .replace("__ROW_COUNT__", &view.results.len().to_string())
        .replace("__COUNTS_JSON__", &counts_json)
        .replace("__ROWS__", &rows)
}
