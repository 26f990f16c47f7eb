//! The `examgen generate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use examgen_core::aggregate::aggregate_answer_keys;
use examgen_core::engine::generate_run;
use examgen_core::model::GenerationParams;
use examgen_core::parser::{load_question_file, validate_questions};
use examgen_core::report::RunReport;
use examgen_core::statistics::{compute_run_statistics, RunStatistics};
use examgen_core::timing::format_exam_duration;
use examgen_providers::config::load_config_from;
use examgen_report::csv::write_answer_key_csv;
use examgen_report::html::write_answer_key_html;
use examgen_report::txt::{write_answer_key_txt, write_exam_answers_txt, write_exam_txt};

/// Replace filesystem-unsafe characters in a folder name.
fn sanitize_folder_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            other => other,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
pub fn execute(
    questions_file: PathBuf,
    exam_prefix: String,
    num_exams: usize,
    questions_per_exam: usize,
    answers: Option<String>,
    time_per_question: Option<f64>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let answers_format = answers.unwrap_or_else(|| config.exam.answers_format.clone());
    anyhow::ensure!(
        matches!(answers_format.as_str(), "txt" | "csv" | "html" | "json"),
        "answers format must be one of: txt, csv, html, json"
    );

    let params = GenerationParams {
        exam_prefix: exam_prefix.clone(),
        num_exams,
        questions_per_exam,
        option_letters: config.exam.option_letters.clone(),
        minutes_per_question: time_per_question.unwrap_or(config.exam.minutes_per_question),
    };
    params.validate()?;

    // Load and strictly validate the bank before generating anything.
    let bank = load_question_file(&questions_file)?;
    validate_questions(&bank)?;
    println!(
        "Cargadas {} preguntas del archivo '{}'.",
        bank.len(),
        questions_file.display()
    );

    let effective_questions = questions_per_exam.min(bank.len());
    if questions_per_exam > bank.len() {
        println!(
            "Advertencia: Solo hay {} preguntas disponibles.",
            bank.len()
        );
    }

    let duration = format_exam_duration(effective_questions, params.minutes_per_question);
    println!("Tiempo estimado por examen: {duration}");

    let exams = generate_run(&bank, &params)?;

    let output_dir = output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "{}{}",
            config.exam.directory_prefix,
            sanitize_folder_name(&exam_prefix)
        ))
    });
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    for exam in &exams {
        let path = write_exam_txt(&exam_prefix, exam, &params.option_letters, &output_dir)?;
        eprintln!("  Examen creado: {}", path.display());
        write_exam_answers_txt(&exam_prefix, exam, &output_dir)?;
    }

    let table = aggregate_answer_keys(&exams);
    let key_path = match answers_format.as_str() {
        "txt" => write_answer_key_txt(&table, &exam_prefix, &duration, &output_dir)?,
        "csv" => write_answer_key_csv(&table, &exam_prefix, &output_dir)?,
        "html" => write_answer_key_html(&table, &exam_prefix, &duration, &output_dir)?,
        "json" => {
            let path = output_dir.join(format!("respuestas_{exam_prefix}_completas.json"));
            RunReport::new(&params, &exams).save_json(&path)?;
            path
        }
        _ => unreachable!("format checked above"),
    };

    print_statistics(&compute_run_statistics(&exams));

    println!(
        "Generados {} exámenes ({}) con {} preguntas cada uno.",
        exams.len(),
        exam_prefix,
        effective_questions
    );
    println!("Archivos guardados en la carpeta: {}", output_dir.display());
    println!("Archivo de respuestas creado: {}", key_path.display());

    Ok(())
}

/// Print the run statistics block to the console.
fn print_statistics(stats: &RunStatistics) {
    println!("\n{}", "=".repeat(60));
    println!("ESTADÍSTICAS DE GENERACIÓN");
    println!("{}", "=".repeat(60));

    println!("\nResumen:");
    println!("  - Total de exámenes: {}", stats.total_exams);
    println!("  - Total de preguntas: {}", stats.total_questions);

    if let Some(reuse) = &stats.question_reuse {
        println!("\nReutilización de preguntas:");
        println!("  - Preguntas únicas: {}", reuse.unique_questions);
        println!("  - Uso promedio: {:.1} veces", reuse.avg_times_used);
        println!("  - Uso máximo: {} veces", reuse.max_times_used);
    }

    if !stats.answer_distribution.is_empty() {
        println!("\nDistribución de respuestas correctas:");
        for (letter, share) in &stats.answer_distribution {
            let bar = "#".repeat((share.percentage / 2.0) as usize);
            println!(
                "  {letter}) {bar:<25} {:5.1}% ({} preguntas)",
                share.percentage, share.count
            );
        }
    }

    if !stats.warnings.is_empty() {
        println!("\nADVERTENCIAS:");
        for warning in &stats.warnings {
            println!("  - {warning}");
        }
    }

    println!("{}\n", "=".repeat(60));
}
