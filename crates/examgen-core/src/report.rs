//! Run report with JSON persistence.
//!
//! The machine-readable artifact of a generation run: parameters, the
//! consolidated answer-key table, and run statistics, stamped with a run id
//! and creation time.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregate::{aggregate_answer_keys, AnswerKeyTable};
use crate::model::{Exam, GenerationParams};
use crate::statistics::{compute_run_statistics, RunStatistics};
use crate::timing::format_exam_duration;

/// A complete generation-run report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Exam prefix of the run.
    pub exam_prefix: String,
    /// Number of exams generated.
    pub num_exams: usize,
    /// Question count of the widest exam.
    pub questions_per_exam: usize,
    /// Estimated duration string, e.g. "1 hora y 30 minutos".
    pub estimated_duration: String,
    /// Consolidated answer keys.
    pub answer_key: AnswerKeyTable,
    /// Run statistics.
    pub statistics: RunStatistics,
}

impl RunReport {
    /// Build the report for a finished run.
    pub fn new(params: &GenerationParams, exams: &[Exam]) -> Self {
        let answer_key = aggregate_answer_keys(exams);
        let statistics = compute_run_statistics(exams);
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            exam_prefix: params.exam_prefix.clone(),
            num_exams: exams.len(),
            questions_per_exam: answer_key.columns,
            estimated_duration: format_exam_duration(
                answer_key.columns,
                params.minutes_per_question,
            ),
            answer_key,
            statistics,
        }
    }

    /// Save the report as pretty-printed JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: RunReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generate_run;
    use crate::model::Question;

    fn bank() -> Vec<Question> {
        (1..=10)
            .map(|i| {
                Question::new(
                    format!("Pregunta {i}"),
                    vec![
                        format!("a{i}"),
                        format!("b{i}"),
                        format!("c{i}"),
                        format!("d{i}"),
                    ],
                    'A',
                )
            })
            .collect()
    }

    #[test]
    fn report_reflects_run() {
        let params = GenerationParams::new("Parcial", 3, 6);
        let exams = generate_run(&bank(), &params).unwrap();
        let report = RunReport::new(&params, &exams);

        assert_eq!(report.exam_prefix, "Parcial");
        assert_eq!(report.num_exams, 3);
        assert_eq!(report.questions_per_exam, 6);
        assert_eq!(report.estimated_duration, "6 minutos");
        assert_eq!(report.answer_key.rows.len(), 3);
        assert_eq!(report.statistics.total_questions, 18);
    }

    #[test]
    fn json_roundtrip() {
        let params = GenerationParams::new("Final", 2, 4);
        let exams = generate_run(&bank(), &params).unwrap();
        let report = RunReport::new(&params, &exams);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("informe.json");
        report.save_json(&path).unwrap();

        let loaded = RunReport::load_json(&path).unwrap();
        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.exam_prefix, "Final");
        assert_eq!(loaded.answer_key, report.answer_key);
    }
}
