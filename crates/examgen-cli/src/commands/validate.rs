//! The `examgen validate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use examgen_core::parser::{load_question_file, validate_questions};

pub fn execute(questions_file: PathBuf) -> Result<()> {
    println!("Validando {}...", questions_file.display());

    let questions = load_question_file(&questions_file)?;
    validate_questions(&questions)?;

    let mut table = Table::new();
    table.set_header(vec!["Pregunta #", "Opciones", "Respuesta"]);

    for (i, q) in questions.iter().take(10).enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(q.options.len()),
            Cell::new(q.answer.map_or("N/A".to_string(), |c| c.to_string())),
        ]);
    }
    if questions.len() > 10 {
        table.add_row(vec![Cell::new("..."), Cell::new("..."), Cell::new("...")]);
    }

    println!("{table}");
    println!(
        "\nArchivo válido: {} preguntas cargadas",
        questions.len()
    );

    Ok(())
}
