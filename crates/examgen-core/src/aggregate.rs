//! Answer-key aggregation.
//!
//! Combines the per-exam answer keys of a run into one table for the
//! consolidated exporters: one row per exam, one column per question
//! position up to the widest exam of the run.

use serde::{Deserialize, Serialize};

use crate::model::Exam;

/// Consolidated answer keys for a whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerKeyTable {
    /// Number of question columns (the widest exam's question count).
    pub columns: usize,
    /// One row per exam, ordered by exam number.
    pub rows: Vec<AnswerKeyRow>,
}

/// One exam's answers, padded to the table width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerKeyRow {
    pub exam_number: usize,
    /// Letter per position; `None` where this exam had no question (exams
    /// are shorter than the run maximum when the bank ran out).
    pub answers: Vec<Option<char>>,
}

/// Build the consolidated table from a run's exams.
pub fn aggregate_answer_keys(exams: &[Exam]) -> AnswerKeyTable {
    let columns = exams
        .iter()
        .map(|exam| exam.questions.len())
        .max()
        .unwrap_or(0);

    let mut rows: Vec<AnswerKeyRow> = exams
        .iter()
        .map(|exam| AnswerKeyRow {
            exam_number: exam.number,
            answers: (1..=columns)
                .map(|position| exam.answer_key.get(&position).copied())
                .collect(),
        })
        .collect();
    rows.sort_by_key(|row| row.exam_number);

    AnswerKeyTable { columns, rows }
}
