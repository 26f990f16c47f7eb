//! Core data model types for examgen.
//!
//! These are the fundamental types the whole system uses to represent bank
//! questions, assembled exams, and generation parameters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ExamError;

/// Default option letters, covering the common four-option question.
pub const DEFAULT_ALPHABET: &str = "ABCD";

/// Letters a bank answer may legally use (`A` plus up to seven more).
pub const VALID_ANSWER_LETTERS: &str = "ABCDEFGH";

/// One entry of the question bank, as parsed from the input file.
///
/// Immutable once the bank is loaded: shuffling copies the options into an
/// [`ExamQuestion`], it never reorders the master copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The prompt, with any leading `N. ` ordinal already stripped.
    pub text: String,
    /// Option texts in bank order.
    pub options: Vec<String>,
    /// Correct option letter in bank order. `None` when the block had no
    /// `ANSWER:` line; the validator rejects such questions before assembly.
    #[serde(default)]
    pub answer: Option<char>,
}

impl Question {
    pub fn new(text: impl Into<String>, options: Vec<String>, answer: char) -> Self {
        Self {
            text: text.into(),
            options,
            answer: Some(answer),
        }
    }
}

/// A question as placed into one specific exam: options freshly shuffled,
/// correct letter recomputed for the new order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamQuestion {
    /// 1-based position within the exam (independent of bank position).
    pub number: usize,
    /// The originating question's prompt.
    pub text: String,
    /// Permutation of the source question's options for this exam instance.
    pub options: Vec<String>,
    /// Letter of the correct option under the shuffled order.
    pub answer: char,
}

/// One generated exam variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    /// 1-based ordinal within the generation run.
    pub number: usize,
    /// Seed string that produced this exam, canonically `{prefix}_{number}`.
    pub seed: String,
    /// Questions in exam order.
    pub questions: Vec<ExamQuestion>,
    /// Position → correct letter, keyed by `ExamQuestion::number`.
    pub answer_key: BTreeMap<usize, char>,
}

impl Exam {
    /// The canonical seed for exam `number` of a run with `prefix`.
    pub fn seed_for(prefix: &str, number: usize) -> String {
        format!("{prefix}_{number}")
    }
}

/// Parameters of one generation run, built once by the caller and passed
/// down by value. The engine never reaches into shared configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Prefix used for seeds, file names, and the output directory.
    pub exam_prefix: String,
    /// How many exam variants to generate.
    pub num_exams: usize,
    /// Questions per exam; may exceed the bank size (the whole bank is used).
    pub questions_per_exam: usize,
    /// Option letters, in labeling order.
    #[serde(default = "default_alphabet")]
    pub option_letters: String,
    /// Minutes allocated per question for the duration estimate.
    #[serde(default = "default_minutes")]
    pub minutes_per_question: f64,
}

fn default_alphabet() -> String {
    DEFAULT_ALPHABET.to_string()
}

fn default_minutes() -> f64 {
    1.0
}

impl GenerationParams {
    pub fn new(exam_prefix: impl Into<String>, num_exams: usize, questions_per_exam: usize) -> Self {
        Self {
            exam_prefix: exam_prefix.into(),
            num_exams,
            questions_per_exam,
            option_letters: default_alphabet(),
            minutes_per_question: default_minutes(),
        }
    }

    /// Check the parameters before any assembly work happens.
    pub fn validate(&self) -> Result<(), ExamError> {
        if self.num_exams == 0 {
            return Err(ExamError::Configuration(
                "el número de exámenes debe ser mayor que 0".into(),
            ));
        }
        if self.questions_per_exam == 0 {
            return Err(ExamError::Configuration(
                "el número de preguntas por examen debe ser mayor que 0".into(),
            ));
        }
        if self.option_letters.is_empty() {
            return Err(ExamError::Configuration(
                "el alfabeto de opciones no puede estar vacío".into(),
            ));
        }
        if !(self.minutes_per_question > 0.0) {
            return Err(ExamError::Configuration(
                "los minutos por pregunta deben ser un número positivo".into(),
            ));
        }
        Ok(())
    }
}
