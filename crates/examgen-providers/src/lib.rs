//! examgen-providers — AI question-generation backends.
//!
//! Implements the `QuestionGenerator` trait for Google Gemini and Ollama,
//! letting examgen derive a question bank from source material through a
//! language model. Generated banks come back in the flat-file format the
//! core parser accepts.

pub mod config;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod mock;
pub mod ollama;

pub use config::{create_generator, load_config, ExamgenConfig, ProviderConfig};
pub use error::ProviderError;
pub use generator::{GenerateRequest, GeneratedBank, QuestionGenerator};
