//! Question-bank parser.
//!
//! Parses the flat-file bank format: blank-line-delimited blocks of one
//! question line, option lines (`A)` .. `D)`), and an `ANSWER:` line.
//! Parsing is deliberately permissive (a block may lack an answer line, and
//! blocks without options are dropped); [`validate_questions`] is the strict
//! second pass callers run before assembling exams.

use std::path::Path;

use crate::error::ExamError;
use crate::model::{Question, VALID_ANSWER_LETTERS};

/// A question block still being accumulated.
struct Pending {
    text: String,
    options: Vec<String>,
    answer: Option<char>,
}

impl Pending {
    fn into_question(self) -> Question {
        Question {
            text: self.text,
            options: self.options,
            answer: self.answer,
        }
    }
}

/// Finalize the pending block if it collected any options; blocks without
/// options stay pending (blank line) or get discarded by their replacement
/// (new question line).
fn flush(pending: &mut Option<Pending>, questions: &mut Vec<Question>) {
    if pending.as_ref().is_some_and(|p| !p.options.is_empty()) {
        if let Some(p) = pending.take() {
            questions.push(p.into_question());
        }
    }
}

/// Returns the option text when `line` is an option line (`A)` to `D)`,
/// also accepting `A.` style markers, followed by whitespace).
fn option_text(line: &str) -> Option<&str> {
    let mut chars = line.char_indices();
    let (_, marker) = chars.next()?;
    let (_, bracket) = chars.next()?;
    let (pos, sep) = chars.next()?;
    if ('A'..='D').contains(&marker) && (bracket == ')' || bracket == '.') && sep.is_whitespace() {
        Some(line[pos + sep.len_utf8()..].trim())
    } else {
        None
    }
}

/// Strips a leading `N. ` ordinal from a question line, if present.
fn strip_ordinal(line: &str) -> &str {
    let digits = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits > 0 && line[digits..].starts_with('.') {
        line[digits + 1..].trim_start()
    } else {
        line
    }
}

/// Parse a whole bank from a string.
pub fn parse_str(content: &str) -> Result<Vec<Question>, ExamError> {
    parse_lines(content.lines())
}

/// Parse a bank from an iterator of raw text lines.
///
/// A blank line finalizes the current block when it has at least one option;
/// a new question line finalizes the previous block the same way, which is
/// what makes missing blank-line separators tolerable. Blocks whose text line
/// gathered no options are dropped without error; existing banks rely on
/// that behavior.
pub fn parse_lines<'a, I>(lines: I) -> Result<Vec<Question>, ExamError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut questions: Vec<Question> = Vec::new();
    let mut pending: Option<Pending> = None;

    for (idx, raw) in lines.into_iter().enumerate() {
        let line_num = idx + 1;
        let line = raw.trim();

        if line.is_empty() {
            // End of block, but only a block that collected options counts.
            flush(&mut pending, &mut questions);
            continue;
        }

        if let Some(text) = option_text(line) {
            match pending.as_mut() {
                Some(p) => p.options.push(text.to_string()),
                None => {
                    return Err(ExamError::Format {
                        line: line_num,
                        message: "opción detectada sin una pregunta previa".into(),
                    })
                }
            }
        } else if let Some(rest) = line.strip_prefix("ANSWER:") {
            let Some(p) = pending.as_mut() else {
                return Err(ExamError::Format {
                    line: line_num,
                    message: "respuesta detectada sin una pregunta previa".into(),
                });
            };
            let letter = rest.trim().chars().next().ok_or(ExamError::Format {
                line: line_num,
                message: "formato de ANSWER incorrecto".into(),
            })?;
            p.answer = Some(letter);
        } else {
            // A new question line; it also closes the previous block.
            flush(&mut pending, &mut questions);
            pending = Some(Pending {
                text: strip_ordinal(line).to_string(),
                options: Vec::new(),
                answer: None,
            });
        }
    }

    flush(&mut pending, &mut questions);

    if questions.is_empty() {
        return Err(ExamError::EmptyBank);
    }

    Ok(questions)
}

/// Load and parse a question bank from a file.
pub fn load_question_file(path: &Path) -> Result<Vec<Question>, ExamError> {
    let content = std::fs::read_to_string(path).map_err(|_| ExamError::NotFound {
        path: path.display().to_string(),
    })?;
    parse_str(&content)
}

/// Strict validation pass, separate from parsing so callers choose where to
/// enforce it: every question needs non-empty text, at least two options, and
/// an answer letter indexing a real option within `A..H`.
pub fn validate_questions(questions: &[Question]) -> Result<(), ExamError> {
    for (idx, q) in questions.iter().enumerate() {
        let index = idx + 1;
        if q.text.is_empty() {
            return Err(ExamError::Invalid {
                index,
                message: "no tiene texto".into(),
            });
        }
        if q.options.len() < 2 {
            return Err(ExamError::Invalid {
                index,
                message: "debe tener al menos 2 opciones".into(),
            });
        }
        let Some(letter) = q.answer else {
            return Err(ExamError::Invalid {
                index,
                message: "no tiene respuesta".into(),
            });
        };
        match VALID_ANSWER_LETTERS.find(letter) {
            Some(pos) if pos < q.options.len() => {}
            _ => {
                return Err(ExamError::Invalid {
                    index,
                    message: format!("tiene respuesta inválida: {letter}"),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_BANK: &str = "\
1. ¿Cuánto es 2+2?
A) 3
B) 4
C) 5
D) 6
ANSWER: B)

2. ¿Capital de Francia?
A) Madrid
B) Roma
C) París
D) Lisboa
ANSWER: C

3. ¿Color del cielo despejado?
A) Verde
B) Azul
ANSWER: B
";

    #[test]
    fn parse_well_formed_bank() {
        let questions = parse_str(VALID_BANK).unwrap();
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].text, "¿Cuánto es 2+2?");
        assert_eq!(questions[0].options, vec!["3", "4", "5", "6"]);
        assert_eq!(questions[0].answer, Some('B'));
        assert_eq!(questions[1].answer, Some('C'));
        assert_eq!(questions[2].options.len(), 2);
    }

    #[test]
    fn ordinal_prefix_is_stripped() {
        let questions = parse_str("12.   Pregunta sin número\nA) uno\nB) dos\nANSWER: A\n").unwrap();
        assert_eq!(questions[0].text, "Pregunta sin número");

        // No whitespace after the dot still counts as an ordinal.
        let questions = parse_str("3.Texto\nA) x\nB) y\nANSWER: B\n").unwrap();
        assert_eq!(questions[0].text, "Texto");
    }

    #[test]
    fn missing_blank_separators_are_tolerated() {
        let input = "\
Primera pregunta
A) a
B) b
ANSWER: A
Segunda pregunta
A) c
B) d
ANSWER: B
";
        let questions = parse_str(input).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].text, "Primera pregunta");
        assert_eq!(questions[1].text, "Segunda pregunta");
        assert_eq!(questions[1].answer, Some('B'));
    }

    #[test]
    fn orphan_option_is_an_error() {
        let err = parse_str("A) huérfana\n").unwrap_err();
        match err {
            ExamError::Format { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("opción"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn orphan_answer_is_an_error() {
        let input = "Pregunta\nA) a\nB) b\nANSWER: A\n\nANSWER: B\n";
        let err = parse_str(input).unwrap_err();
        assert!(matches!(err, ExamError::Format { line: 6, .. }));
    }

    #[test]
    fn malformed_answer_is_an_error() {
        let err = parse_str("Pregunta\nA) a\nB) b\nANSWER:\n").unwrap_err();
        assert!(matches!(err, ExamError::Format { line: 4, .. }));

        let err = parse_str("Pregunta\nA) a\nB) b\nANSWER:   \n").unwrap_err();
        assert!(matches!(err, ExamError::Format { .. }));
    }

    #[test]
    fn answer_takes_first_character_after_colon() {
        let questions = parse_str("P\nA) a\nB) b\nANSWER: B)\n").unwrap();
        assert_eq!(questions[0].answer, Some('B'));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(parse_str(""), Err(ExamError::EmptyBank)));
        assert!(matches!(parse_str("\n\n\n"), Err(ExamError::EmptyBank)));
    }

    #[test]
    fn optionless_block_is_silently_dropped() {
        let input = "\
Sin opciones

Con opciones
A) a
B) b
ANSWER: A
";
        let questions = parse_str(input).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "Con opciones");

        // Also dropped at end of input.
        let questions = parse_str("Con opciones\nA) a\nB) b\nANSWER: A\n\nColgando\n").unwrap();
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn blank_line_with_optionless_pending_is_a_noop() {
        // The pending question survives the blank line, so the option after
        // it still attaches. Long-standing parser behavior.
        let input = "Pregunta\n\nA) a\nB) b\nANSWER: A\n";
        let questions = parse_str(input).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options, vec!["a", "b"]);
    }

    #[test]
    fn question_without_answer_parses_but_fails_validation() {
        let questions = parse_str("P\nA) a\nB) b\n").unwrap();
        assert_eq!(questions[0].answer, None);
        let err = validate_questions(&questions).unwrap_err();
        assert!(matches!(err, ExamError::Invalid { index: 1, .. }));
    }

    #[test]
    fn validator_accepts_well_formed_bank() {
        let questions = parse_str(VALID_BANK).unwrap();
        assert!(validate_questions(&questions).is_ok());
    }

    #[test]
    fn validator_rejects_letter_beyond_options() {
        // 'C' cannot index a two-option question.
        let q = Question::new("P", vec!["a".into(), "b".into()], 'C');
        let err = validate_questions(&[q]).unwrap_err();
        assert!(matches!(err, ExamError::Invalid { index: 1, .. }));
    }

    #[test]
    fn validator_rejects_letter_outside_valid_range() {
        let q = Question::new("P", vec!["a".into(), "b".into()], 'Z');
        assert!(validate_questions(&[q]).is_err());
    }

    #[test]
    fn validator_rejects_single_option() {
        let q = Question::new("P", vec!["a".into()], 'A');
        assert!(validate_questions(&[q]).is_err());
    }

    #[test]
    fn validator_rejects_empty_text() {
        let q = Question::new("", vec!["a".into(), "b".into()], 'A');
        assert!(validate_questions(&[q]).is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preguntas.txt");
        std::fs::write(&path, VALID_BANK).unwrap();

        let questions = load_question_file(&path).unwrap();
        assert_eq!(questions.len(), 3);

        let err = load_question_file(&dir.path().join("no-existe.txt")).unwrap_err();
        assert!(matches!(err, ExamError::NotFound { .. }));
    }
}
