//! HTML exporter for the consolidated answer key.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use examgen_core::aggregate::AnswerKeyTable;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

const CSS: &str = "\
body { font-family: Arial, sans-serif; margin: 20px; background-color: #f5f5f5; }
.container { max-width: 1200px; margin: 0 auto; background-color: white; padding: 20px;
             border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
h1 { color: #333; text-align: center; margin-bottom: 30px; }
table { width: 100%; border-collapse: collapse; margin: 20px 0; }
th, td { border: 1px solid #ddd; padding: 12px; text-align: center; }
th { background-color: #4472C4; color: white; font-weight: bold; }
tr:nth-child(even) { background-color: #f9f9f9; }
tr:hover { background-color: #f0f0f0; }
.exam-cell { background-color: #D9E2F3; font-weight: bold; }
.info-section { margin-top: 30px; padding: 15px; background-color: #f8f9fa;
                border-left: 4px solid #4472C4; }
.info-section h3 { margin-top: 0; color: #4472C4; }
.info-item { margin: 8px 0; }
.info-label { font-weight: bold; display: inline-block; width: 180px; }
";

/// Render the consolidated answer key as a self-contained HTML page.
pub fn render_answer_key_html(table: &AnswerKeyTable, exam_prefix: &str, duration: &str) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>Respuestas - {}</title>\n",
        html_escape(exam_prefix)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");

    html.push_str(&format!(
        "<h1>Respuestas de Exámenes - {}</h1>\n",
        html_escape(exam_prefix)
    ));

    html.push_str("<table>\n<thead>\n<tr>\n<th>Examen</th>");
    for i in 1..=table.columns {
        html.push_str(&format!("<th>P{i}</th>"));
    }
    html.push_str("\n</tr>\n</thead>\n<tbody>\n");

    for row in &table.rows {
        html.push_str(&format!(
            "<tr><td class=\"exam-cell\">Examen {}</td>",
            row.exam_number
        ));
        for answer in &row.answers {
            let cell = answer.map_or("-".to_string(), |letter| letter.to_string());
            html.push_str(&format!("<td>{cell}</td>"));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");

    html.push_str("<div class=\"info-section\">\n<h3>Información del Examen</h3>\n");
    let items = [
        ("Nombre del examen:", html_escape(exam_prefix)),
        (
            "Fecha de generación:",
            chrono::Local::now().format("%d/%m/%Y %H:%M").to_string(),
        ),
        ("Número de exámenes:", table.rows.len().to_string()),
        ("Preguntas por examen:", table.columns.to_string()),
        ("Tiempo estimado:", html_escape(duration)),
    ];
    for (label, value) in items {
        html.push_str(&format!(
            "<div class=\"info-item\"><span class=\"info-label\">{label}</span> {value}</div>\n"
        ));
    }
    html.push_str("</div>\n</div>\n</body>\n</html>\n");

    html
}

/// Write the consolidated answer key as HTML into `output_dir`.
pub fn write_answer_key_html(
    table: &AnswerKeyTable,
    exam_prefix: &str,
    duration: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    let path = output_dir.join(format!("respuestas_{exam_prefix}_completas.html"));
    std::fs::write(&path, render_answer_key_html(table, exam_prefix, duration))
        .with_context(|| format!("failed to write HTML to {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use examgen_core::aggregate::AnswerKeyRow;

    fn table() -> AnswerKeyTable {
        AnswerKeyTable {
            columns: 2,
            rows: vec![
                AnswerKeyRow {
                    exam_number: 1,
                    answers: vec![Some('B'), Some('D')],
                },
                AnswerKeyRow {
                    exam_number: 2,
                    answers: vec![Some('A'), None],
                },
            ],
        }
    }

    #[test]
    fn page_contains_table_and_footer() {
        let html = render_answer_key_html(&table(), "Parcial", "2 minutos");
        assert!(html.contains("<h1>Respuestas de Exámenes - Parcial</h1>"));
        assert!(html.contains("<th>P1</th><th>P2</th>"));
        assert!(html.contains("Examen 1</td><td>B</td><td>D</td>"));
        assert!(html.contains("<td>-</td>"));
        assert!(html.contains("Tiempo estimado:"));
        assert!(html.contains("2 minutos"));
    }

    #[test]
    fn prefix_is_escaped() {
        let html = render_answer_key_html(&table(), "<script>alert(1)</script>", "1 minutos");
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn file_lands_in_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_answer_key_html(&table(), "Final", "2 minutos", dir.path()).unwrap();
        assert!(path.ends_with("respuestas_Final_completas.html"));
        assert!(std::fs::read_to_string(path).unwrap().contains("<!DOCTYPE html>"));
    }
}
