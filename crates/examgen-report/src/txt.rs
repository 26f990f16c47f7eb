//! Plain-text exporters.
//!
//! Per-exam sheets, per-exam answer lists, and the consolidated answer-key
//! table in the fixed-width transposed layout (rows = exams, columns =
//! question positions).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use examgen_core::aggregate::AnswerKeyTable;
use examgen_core::model::Exam;

/// Render one exam as a printable sheet.
pub fn render_exam(exam_prefix: &str, exam: &Exam, alphabet: &str) -> String {
    let mut out = format!("--- EXAMEN {} {} ---\n\n", exam_prefix, exam.number);

    for question in &exam.questions {
        out.push_str(&format!("{}. {}\n", question.number, question.text));
        for (letter, option) in alphabet.chars().zip(&question.options) {
            out.push_str(&format!("   {letter}) {option}\n"));
        }
        out.push('\n');
    }

    out
}

/// Render one exam's answer list.
pub fn render_exam_answers(exam_prefix: &str, exam: &Exam) -> String {
    let mut out = format!("--- RESPUESTAS EXAMEN {} {} ---\n\n", exam_prefix, exam.number);
    for (number, letter) in &exam.answer_key {
        out.push_str(&format!("{number}. {letter})\n"));
    }
    out
}

/// Render the consolidated answer-key table with its info footer.
pub fn render_answer_key(table: &AnswerKeyTable, exam_prefix: &str, duration: &str) -> String {
    let mut out = format!("RESPUESTAS DE EXÁMENES - {exam_prefix}\n");
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");

    let mut header = format!("{:<12}", "Examen");
    for i in 1..=table.columns {
        header.push_str(&format!("{:<4}", format!("P{i}")));
    }
    let width = header.chars().count();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(width));
    out.push('\n');

    for row in &table.rows {
        out.push_str(&format!("{:<12}", format!("Examen {}", row.exam_number)));
        for answer in &row.answers {
            let cell = answer.map_or("-".to_string(), |letter| letter.to_string());
            out.push_str(&format!("{cell:<4}"));
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&"=".repeat(50));
    out.push_str("\nINFORMACIÓN DEL EXAMEN\n");
    out.push_str(&"=".repeat(50));
    out.push('\n');
    out.push_str(&format!("Nombre del examen: {exam_prefix}\n"));
    out.push_str(&format!(
        "Fecha de generación: {}\n",
        chrono::Local::now().format("%d/%m/%Y %H:%M")
    ));
    out.push_str(&format!("Número de exámenes: {}\n", table.rows.len()));
    out.push_str(&format!("Preguntas por examen: {}\n", table.columns));
    out.push_str(&format!("Tiempo estimado: {duration}\n"));

    out
}

/// Write one exam sheet into `output_dir`, returning the file path.
pub fn write_exam_txt(exam_prefix: &str, exam: &Exam, alphabet: &str, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(format!("examen_{}_{}.txt", exam_prefix, exam.number));
    std::fs::write(&path, render_exam(exam_prefix, exam, alphabet))
        .with_context(|| format!("failed to write exam to {}", path.display()))?;
    Ok(path)
}

/// Write one exam's answer list into `output_dir`, returning the file path.
pub fn write_exam_answers_txt(exam_prefix: &str, exam: &Exam, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(format!("respuestas_examen_{}_{}.txt", exam_prefix, exam.number));
    std::fs::write(&path, render_exam_answers(exam_prefix, exam))
        .with_context(|| format!("failed to write answers to {}", path.display()))?;
    Ok(path)
}

/// Write the consolidated answer key into `output_dir`, returning the file path.
pub fn write_answer_key_txt(
    table: &AnswerKeyTable,
    exam_prefix: &str,
    duration: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    let path = output_dir.join(format!("respuestas_{exam_prefix}_completas.txt"));
    std::fs::write(&path, render_answer_key(table, exam_prefix, duration))
        .with_context(|| format!("failed to write answer key to {}", path.display()))?;
    Ok(path)
}
