//! Configuration loading and the provider factory.
//!
//! The configuration is an explicit struct built once at program start and
//! handed to whoever needs it; the core engine never reads it and takes its
//! parameters as plain values.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::gemini::GeminiProvider;
use crate::generator::QuestionGenerator;
use crate::ollama::OllamaProvider;

/// Configuration for a single generation backend.
///
/// Note: Custom Debug impl masks API keys to prevent accidental exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderConfig {
    Gemini {
        api_key: String,
        #[serde(default)]
        base_url: Option<String>,
    },
    Ollama {
        #[serde(default = "default_ollama_url")]
        base_url: String,
    },
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderConfig::Gemini {
                api_key: _,
                base_url,
            } => f
                .debug_struct("Gemini")
                .field("api_key", &"***")
                .field("base_url", base_url)
                .finish(),
            ProviderConfig::Ollama { base_url } => f
                .debug_struct("Ollama")
                .field("base_url", base_url)
                .finish(),
        }
    }
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

/// Exam-generation defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamDefaults {
    /// Option letters, in labeling order.
    #[serde(default = "default_letters")]
    pub option_letters: String,
    /// Minutes allocated per question in the duration estimate.
    #[serde(default = "default_minutes")]
    pub minutes_per_question: f64,
    /// Prefix of the output directory name.
    #[serde(default = "default_dir_prefix")]
    pub directory_prefix: String,
    /// Default consolidated answer-key format.
    #[serde(default = "default_answers_format")]
    pub answers_format: String,
}

fn default_letters() -> String {
    "ABCD".to_string()
}
fn default_minutes() -> f64 {
    1.0
}
fn default_dir_prefix() -> String {
    "Examenes_".to_string()
}
fn default_answers_format() -> String {
    "txt".to_string()
}

impl Default for ExamDefaults {
    fn default() -> Self {
        Self {
            option_letters: default_letters(),
            minutes_per_question: default_minutes(),
            directory_prefix: default_dir_prefix(),
            answers_format: default_answers_format(),
        }
    }
}

/// AI question-generation defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiDefaults {
    /// Engine used when none is requested.
    #[serde(default = "default_engine")]
    pub default_engine: String,
    /// Questions to ask for when no count is given.
    #[serde(default = "default_num_questions")]
    pub default_num_questions: usize,
    /// Language the questions are generated in.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_engine() -> String {
    "gemini".to_string()
}
fn default_num_questions() -> usize {
    10
}
fn default_language() -> String {
    "español".to_string()
}
fn default_temperature() -> f64 {
    0.7
}

impl Default for AiDefaults {
    fn default() -> Self {
        Self {
            default_engine: default_engine(),
            default_num_questions: default_num_questions(),
            default_language: default_language(),
            temperature: default_temperature(),
        }
    }
}

/// Top-level examgen configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExamgenConfig {
    /// Exam-generation defaults.
    #[serde(default)]
    pub exam: ExamDefaults,
    /// AI defaults.
    #[serde(default)]
    pub ai: AiDefaults,
    /// Provider configurations keyed by engine name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

/// The model each engine falls back to when none is requested.
pub fn default_model_for(engine: &str) -> &'static str {
    match engine {
        "ollama" => "llama2",
        _ => "gemini-1.5-flash",
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Resolve env vars in a provider config.
fn resolve_provider_config(config: &ProviderConfig) -> ProviderConfig {
    match config {
        ProviderConfig::Gemini { api_key, base_url } => ProviderConfig::Gemini {
            api_key: resolve_env_vars(api_key),
            base_url: base_url.as_ref().map(|u| resolve_env_vars(u)),
        },
        ProviderConfig::Ollama { base_url } => ProviderConfig::Ollama {
            base_url: resolve_env_vars(base_url),
        },
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `examgen.toml` in the current directory
/// 2. `~/.config/examgen/config.toml`
///
/// Environment variable override: `EXAMGEN_GEMINI_KEY`.
pub fn load_config() -> Result<ExamgenConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<ExamgenConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("examgen.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<ExamgenConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ExamgenConfig::default(),
    };

    // Apply env var override for the Gemini key
    if let Ok(key) = std::env::var("EXAMGEN_GEMINI_KEY") {
        config
            .providers
            .entry("gemini".into())
            .or_insert(ProviderConfig::Gemini {
                api_key: String::new(),
                base_url: None,
            });
        if let Some(ProviderConfig::Gemini { api_key, .. }) = config.providers.get_mut("gemini") {
            *api_key = key;
        }
    }

    // Resolve env vars in all provider configs
    let resolved: HashMap<String, ProviderConfig> = config
        .providers
        .iter()
        .map(|(k, v)| (k.clone(), resolve_provider_config(v)))
        .collect();
    config.providers = resolved;

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("examgen"))
}

/// Create a generator instance from its configuration.
pub fn create_generator(name: &str, config: &ProviderConfig) -> Result<Box<dyn QuestionGenerator>> {
    match config {
        ProviderConfig::Gemini { api_key, base_url } => {
            anyhow::ensure!(
                !api_key.is_empty(),
                "no API key configured for '{name}'; set EXAMGEN_GEMINI_KEY or edit examgen.toml"
            );
            Ok(Box::new(GeminiProvider::new(api_key, base_url.clone())))
        }
        ProviderConfig::Ollama { base_url } => Ok(Box::new(OllamaProvider::new(base_url))),
    }
}
