//! The question-generator trait and its request/response types.
//!
//! Backends receive source material and return the raw text of a question
//! bank in the flat-file format the core parser accepts, so their output
//! flows straight into `examgen_core::parser::parse_str`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use examgen_core::model::Question;
use examgen_core::parser::{parse_str, validate_questions};

use crate::error::ProviderError;

/// Trait for backends that derive a question bank from source text.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Engine name (e.g. "gemini").
    fn name(&self) -> &str;

    /// Generate a question bank from the request's source material.
    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GeneratedBank>;
}

/// Request to generate questions from source material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Model identifier (e.g. "gemini-1.5-flash").
    pub model: String,
    /// The extracted text of the source document.
    pub source_text: String,
    /// How many questions to ask for.
    pub num_questions: usize,
    /// Language the questions should be written in.
    pub language: String,
    /// Sampling temperature.
    pub temperature: f64,
}

/// A generated question bank, plus accounting data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedBank {
    /// Raw bank text in the flat-file format.
    pub text: String,
    /// Model that actually answered.
    pub model: String,
    /// Token usage reported by the API.
    pub token_usage: TokenUsage,
    /// Latency in milliseconds.
    pub latency_ms: u64,
}

impl GeneratedBank {
    /// Parse and strictly validate the generated text as a question bank.
    ///
    /// Models occasionally drift from the requested format; this is where
    /// that surfaces, before anything gets written to disk.
    pub fn parse(&self) -> Result<Vec<Question>, ProviderError> {
        let questions =
            parse_str(&self.text).map_err(|e| ProviderError::InvalidBank(e.to_string()))?;
        validate_questions(&questions).map_err(|e| ProviderError::InvalidBank(e.to_string()))?;
        Ok(questions)
    }
}

/// Token accounting for one generation call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// System prompt pinning the output to the bank grammar.
pub const BANK_FORMAT_PROMPT: &str = "\
Eres un generador de exámenes. Responde ÚNICAMENTE con preguntas de opción \
múltiple en este formato exacto, sin texto adicional:

1. Texto de la pregunta
A) Primera opción
B) Segunda opción
C) Tercera opción
D) Cuarta opción
ANSWER: X

Separa cada pregunta con una línea en blanco. X es la letra de la opción \
correcta.";

/// Build the user prompt for a generation request.
pub fn build_bank_prompt(request: &GenerateRequest) -> String {
    format!(
        "Basándote en el siguiente texto, genera exactamente {} preguntas de \
         opción múltiple que evalúen la comprensión del contenido. Las \
         preguntas deben ser claras, concisas y directamente relacionadas con \
         los temas más importantes del documento. Genera las preguntas en {}.\n\n\
         Aquí está el texto:\n---\n{}\n---",
        request.num_questions, request.language, request.source_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerateRequest {
        GenerateRequest {
            model: "gemini-1.5-flash".into(),
            source_text: "La fotosíntesis convierte luz en energía química.".into(),
            num_questions: 5,
            language: "español".into(),
            temperature: 0.7,
        }
    }

    #[test]
    fn prompt_carries_count_language_and_source() {
        let prompt = build_bank_prompt(&request());
        assert!(prompt.contains("exactamente 5 preguntas"));
        assert!(prompt.contains("en español"));
        assert!(prompt.contains("fotosíntesis"));
    }

    #[test]
    fn format_prompt_shows_the_grammar() {
        assert!(BANK_FORMAT_PROMPT.contains("ANSWER: X"));
        assert!(BANK_FORMAT_PROMPT.contains("A) "));
    }

    fn bank(text: &str) -> GeneratedBank {
        GeneratedBank {
            text: text.into(),
            model: "test".into(),
            token_usage: TokenUsage::default(),
            latency_ms: 0,
        }
    }

    #[test]
    fn generated_bank_parses() {
        let generated = bank("1. ¿Pregunta?\nA) uno\nB) dos\nANSWER: A\n");
        let questions = generated.parse().unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].answer, Some('A'));
    }

    #[test]
    fn drifted_output_is_rejected() {
        // Prose instead of the bank format.
        let err = bank("Aquí tienes unas preguntas interesantes.").parse().unwrap_err();
        assert!(matches!(err, ProviderError::InvalidBank(_)));

        // Parses, but fails strict validation (no answer line).
        let err = bank("1. ¿Pregunta?\nA) uno\nB) dos\n").parse().unwrap_err();
        assert!(matches!(err, ProviderError::InvalidBank(_)));
    }
}
