//! examgen CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "examgen", version, about = "Randomized exam generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate exams from a questions file
    Generate {
        /// Questions file (flat-text bank format)
        questions_file: PathBuf,

        /// Prefix for the exams (e.g. "Parcial", "Final")
        exam_prefix: String,

        /// Number of exams to generate
        num_exams: usize,

        /// Questions per exam
        questions_per_exam: usize,

        /// Consolidated answer-key format: txt, csv, html, json
        /// (default: from config, txt)
        #[arg(long, short = 'a')]
        answers: Option<String>,

        /// Minutes allocated per question (default: from config, 1)
        #[arg(long)]
        time_per_question: Option<f64>,

        /// Output directory (default: Examenes_<prefix>)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },

    /// Validate a questions file
    Validate {
        /// Questions file to validate
        questions_file: PathBuf,
    },

    /// Generate a question bank from a source document with AI
    AiGenerate {
        /// Source file (plain text or Markdown)
        document_file: PathBuf,

        /// Number of questions to generate
        #[arg(long, short = 'n')]
        num_questions: Option<usize>,

        /// Language for the questions
        #[arg(long, short = 'l')]
        language: Option<String>,

        /// AI engine: gemini, ollama
        #[arg(long, short = 'e')]
        engine: Option<String>,

        /// Specific model (e.g. gemini-1.5-pro, llama2)
        #[arg(long, short = 'm')]
        model: Option<String>,

        /// Output file for the generated questions
        #[arg(long, short = 'o', default_value = "preguntas_ia.txt")]
        output: PathBuf,

        /// Config file path
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },

    /// Create a starter config and example questions file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("examgen=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            questions_file,
            exam_prefix,
            num_exams,
            questions_per_exam,
            answers,
            time_per_question,
            output,
            config,
        } => commands::generate::execute(
            questions_file,
            exam_prefix,
            num_exams,
            questions_per_exam,
            answers,
            time_per_question,
            output,
            config,
        ),
        Commands::Validate { questions_file } => commands::validate::execute(questions_file),
        Commands::AiGenerate {
            document_file,
            num_questions,
            language,
            engine,
            model,
            output,
            config,
        } => {
            commands::ai_generate::execute(
                document_file,
                num_questions,
                language,
                engine,
                model,
                output,
                config,
            )
            .await
        }
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
