//! The `examgen init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create examgen.toml
    if std::path::Path::new("examgen.toml").exists() {
        println!("examgen.toml already exists, skipping.");
    } else {
        std::fs::write("examgen.toml", SAMPLE_CONFIG)?;
        println!("Created examgen.toml");
    }

    // Create example questions file
    let example_path = std::path::Path::new("preguntas-ejemplo.txt");
    if example_path.exists() {
        println!("preguntas-ejemplo.txt already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUESTIONS)?;
        println!("Created preguntas-ejemplo.txt");
    }

    println!("\nNext steps:");
    println!("  1. Edit examgen.toml (API keys are only needed for ai-generate)");
    println!("  2. Run: examgen validate preguntas-ejemplo.txt");
    println!("  3. Run: examgen generate preguntas-ejemplo.txt Parcial 3 4");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# examgen configuration

[exam]
option_letters = "ABCD"
minutes_per_question = 1.0
directory_prefix = "Examenes_"
answers_format = "txt"

[ai]
default_engine = "gemini"
default_num_questions = 10
default_language = "español"

[providers.gemini]
type = "gemini"
api_key = "${GOOGLE_API_KEY}"

[providers.ollama]
type = "ollama"
base_url = "http://localhost:11434"
"#;

const EXAMPLE_QUESTIONS: &str = r#"1. ¿Cuánto es 2+2?
A) 3
B) 4
C) 5
D) 6
ANSWER: B

2. ¿Cuál es la capital de Francia?
A) Madrid
B) Roma
C) París
D) Lisboa
ANSWER: C

3. ¿Qué planeta está más cerca del Sol?
A) Venus
B) Marte
C) La Tierra
D) Mercurio
ANSWER: D

4. ¿En qué año llegó el ser humano a la Luna?
A) 1965
B) 1969
C) 1972
D) 1958
ANSWER: B

5. ¿Cuál es el océano más grande?
A) Atlántico
B) Índico
C) Pacífico
D) Ártico
ANSWER: C
"#;
