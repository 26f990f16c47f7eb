//! Run statistics.
//!
//! Aggregate numbers over a finished generation run: how correct answers
//! distribute over the letters, and how often bank questions were reused
//! across exams. Exporters and the CLI summary consume this; nothing in the
//! assembly path depends on it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Exam;

/// Distribution thresholds: a letter carrying less than 15% or more than
/// 35% of the correct answers gets flagged as imbalanced.
const MIN_SHARE_PCT: f64 = 15.0;
const MAX_SHARE_PCT: f64 = 35.0;

/// How many leading characters of a question identify it in reuse counting.
const REUSE_KEY_LEN: usize = 50;

/// Statistics over one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Number of exams in the run.
    pub total_exams: usize,
    /// Total question slots across all exams.
    pub total_questions: usize,
    /// Correct-answer counts and shares per letter.
    pub answer_distribution: BTreeMap<char, LetterShare>,
    /// Reuse summary, absent for empty runs.
    pub question_reuse: Option<ReuseStats>,
    /// Human-readable distribution warnings.
    pub warnings: Vec<String>,
}

/// One letter's share of the correct answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterShare {
    pub count: usize,
    /// Percentage of all correct answers, rounded to two decimals.
    pub percentage: f64,
}

/// How often bank questions recur across the run's exams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReuseStats {
    pub unique_questions: usize,
    pub max_times_used: usize,
    pub avg_times_used: f64,
}

/// Compute statistics for a run.
pub fn compute_run_statistics(exams: &[Exam]) -> RunStatistics {
    let mut letter_counts: BTreeMap<char, usize> = BTreeMap::new();
    let mut reuse_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut total_questions = 0usize;

    for exam in exams {
        total_questions += exam.questions.len();
        for question in &exam.questions {
            *letter_counts.entry(question.answer).or_default() += 1;
            let key: String = question.text.chars().take(REUSE_KEY_LEN).collect();
            *reuse_counts.entry(key).or_default() += 1;
        }
    }

    let mut answer_distribution = BTreeMap::new();
    let mut warnings = Vec::new();

    if total_questions > 0 {
        for (&letter, &count) in &letter_counts {
            let percentage =
                (count as f64 / total_questions as f64 * 100.0 * 100.0).round() / 100.0;
            answer_distribution.insert(letter, LetterShare { count, percentage });
        }

        let shares: Vec<f64> = answer_distribution
            .values()
            .map(|share| share.percentage)
            .collect();
        let min_pct = shares.iter().copied().fold(f64::INFINITY, f64::min);
        let max_pct = shares.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if min_pct < MIN_SHARE_PCT || max_pct > MAX_SHARE_PCT {
            warnings.push(format!(
                "Distribución de respuestas desbalanceada. Rango: {min_pct:.1}% - {max_pct:.1}%"
            ));
        }
    }

    let question_reuse = if reuse_counts.is_empty() {
        None
    } else {
        let max_times_used = reuse_counts.values().copied().max().unwrap_or(0);
        let avg = total_questions as f64 / reuse_counts.len() as f64;
        Some(ReuseStats {
            unique_questions: reuse_counts.len(),
            max_times_used,
            avg_times_used: (avg * 100.0).round() / 100.0,
        })
    };

    let stats = RunStatistics {
        total_exams: exams.len(),
        total_questions,
        answer_distribution,
        question_reuse,
        warnings,
    };
    tracing::debug!(
        exams = stats.total_exams,
        questions = stats.total_questions,
        "estadísticas calculadas"
    );
    stats
}
