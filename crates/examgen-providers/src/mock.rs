//! Mock generator for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::generator::{GenerateRequest, GeneratedBank, QuestionGenerator, TokenUsage};

/// A mock question generator for exercising the pipeline without API calls.
pub struct MockGenerator {
    /// The bank text every call returns.
    bank_text: String,
    /// Number of calls made.
    call_count: AtomicU32,
    /// Last request received.
    last_request: Mutex<Option<GenerateRequest>>,
}

impl MockGenerator {
    /// Create a mock that always returns the given bank text.
    pub fn with_bank(bank_text: &str) -> Self {
        Self {
            bank_text: bank_text.to_string(),
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Number of calls made to this generator.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// The last request made to this generator.
    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GeneratedBank> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_request.lock().unwrap() = Some(request.clone());

        Ok(GeneratedBank {
            text: self.bank_text.clone(),
            model: request.model.clone(),
            token_usage: TokenUsage {
                prompt_tokens: (request.source_text.len() / 4) as u32,
                completion_tokens: (self.bank_text.len() / 4) as u32,
                total_tokens: ((request.source_text.len() + self.bank_text.len()) / 4) as u32,
            },
            latency_ms: 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_bank() {
        let bank = "1. ¿Pregunta?\nA) a\nB) b\nANSWER: A\n";
        let generator = MockGenerator::with_bank(bank);

        let request = GenerateRequest {
            model: "mock-model".into(),
            source_text: "texto".into(),
            num_questions: 1,
            language: "español".into(),
            temperature: 0.0,
        };

        let generated = generator.generate(&request).await.unwrap();
        assert_eq!(generated.text, bank);
        assert_eq!(generator.call_count(), 1);
        assert_eq!(
            generator.last_request().unwrap().model,
            "mock-model".to_string()
        );

        // The mock's output parses with the core parser.
        let questions = examgen_core::parser::parse_str(&generated.text).unwrap();
        assert_eq!(questions.len(), 1);
    }
}
