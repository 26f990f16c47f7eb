//! examgen-report — exporters for exams and answer keys.
//!
//! Turns the core's `Exam` and `AnswerKeyTable` structures into the files
//! teachers hand out: per-exam TXT sheets and the consolidated answer key in
//! TXT, CSV, or HTML. The JSON run report lives on
//! `examgen_core::report::RunReport` itself.

pub mod csv;
pub mod html;
pub mod txt;
