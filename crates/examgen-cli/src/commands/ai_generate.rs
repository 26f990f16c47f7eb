//! The `examgen ai-generate` command.
//!
//! Derives a question bank from a source document through an AI engine,
//! then parses and validates the result before writing it, so a drifting
//! model never produces an unusable bank file.

use std::path::PathBuf;

use anyhow::{Context, Result};

use examgen_providers::config::{create_generator, default_model_for, load_config_from};
use examgen_providers::generator::GenerateRequest;

pub async fn execute(
    document_file: PathBuf,
    num_questions: Option<usize>,
    language: Option<String>,
    engine: Option<String>,
    model: Option<String>,
    output: PathBuf,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let engine = engine.unwrap_or_else(|| config.ai.default_engine.clone());
    let num_questions = num_questions.unwrap_or(config.ai.default_num_questions);
    let language = language.unwrap_or_else(|| config.ai.default_language.clone());
    let model = model.unwrap_or_else(|| default_model_for(&engine).to_string());

    let extension = document_file
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    anyhow::ensure!(
        matches!(extension.as_str(), "txt" | "md" | "markdown"),
        "unsupported source format '.{extension}': use a plain-text or Markdown file"
    );

    let source_text = std::fs::read_to_string(&document_file)
        .with_context(|| format!("failed to read {}", document_file.display()))?;
    anyhow::ensure!(
        !source_text.trim().is_empty(),
        "the source document is empty; nothing to generate questions from"
    );

    let provider_config = config.providers.get(&engine).with_context(|| {
        format!(
            "engine '{engine}' not configured. Available: {:?}",
            config.providers.keys().collect::<Vec<_>>()
        )
    })?;
    let generator = create_generator(&engine, provider_config)?;

    eprintln!("Generando {num_questions} preguntas con {engine} ({model})...");

    let request = GenerateRequest {
        model,
        source_text,
        num_questions,
        language,
        temperature: config.ai.temperature,
    };
    let generated = generator.generate(&request).await?;

    // A model that drifted from the bank format fails here, not at exam time.
    let questions = generated.parse()?;

    std::fs::write(&output, &generated.text)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!(
        "Generadas {} preguntas con {} en '{}'.",
        questions.len(),
        generated.model,
        output.display()
    );
    if questions.len() != num_questions {
        println!(
            "Advertencia: se pidieron {num_questions} preguntas y el modelo devolvió {}.",
            questions.len()
        );
    }

    Ok(())
}
