//! Error types for the exam-assembly core.
//!
//! One variant per failure kind: missing input, grammar violations during
//! parsing, strict-validation failures, and bad generation parameters.
//! All errors propagate synchronously to the caller; the core never retries
//! and never logs-and-continues past a malformed bank.

use thiserror::Error;

/// Errors produced while loading, validating, or assembling exams.
#[derive(Debug, Error)]
pub enum ExamError {
    /// The questions file does not exist.
    #[error("el archivo '{path}' no se encontró")]
    NotFound { path: String },

    /// A structural violation in the question-bank grammar.
    #[error("formato inválido en línea {line}: {message}")]
    Format { line: usize, message: String },

    /// Parsing finished without producing a single question.
    #[error("no se cargó ninguna pregunta; verifica el formato del archivo")]
    EmptyBank,

    /// A parsed question failed strict validation (questions are 1-indexed).
    #[error("pregunta {index}: {message}")]
    Invalid { index: usize, message: String },

    /// Invalid generation parameters, detected before any shuffling occurs.
    #[error("parámetros inválidos: {0}")]
    Configuration(String),
}

impl ExamError {
    /// Returns `true` for grammar/validation failures (as opposed to missing
    /// input or bad parameters).
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            ExamError::Format { .. } | ExamError::EmptyBank | ExamError::Invalid { .. }
        )
    }
}
