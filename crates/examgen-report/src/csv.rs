//! CSV exporter for the consolidated answer key.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use examgen_core::aggregate::AnswerKeyTable;

/// Render the consolidated answer key as CSV text.
pub fn render_answer_key_csv(table: &AnswerKeyTable) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["Examen".to_string()];
    header.extend((1..=table.columns).map(|i| format!("P{i}")));
    writer.write_record(&header)?;

    for row in &table.rows {
        let mut record = vec![format!("Examen {}", row.exam_number)];
        record.extend(
            row.answers
                .iter()
                .map(|answer| answer.map_or("-".to_string(), |letter| letter.to_string())),
        );
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush CSV writer: {e}"))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

/// Write the consolidated answer key as CSV into `output_dir`.
pub fn write_answer_key_csv(
    table: &AnswerKeyTable,
    exam_prefix: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    let path = output_dir.join(format!("respuestas_{exam_prefix}_completas.csv"));
    std::fs::write(&path, render_answer_key_csv(table)?)
        .with_context(|| format!("failed to write CSV to {}", path.display()))?;
    Ok(path)
}
