//! Option shuffling.
//!
//! Pure functions of an injected random source, so determinism stays the
//! caller's responsibility and tests can pass a seeded generator.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ExamError;
use crate::model::Question;

/// Shuffle a question's options and recompute the correct letter.
///
/// Returns the reordered option list and the letter that now labels the
/// correct option. The bank's master copy is never touched.
///
/// When two options share the exact same text, the recomputed letter points
/// at the first matching slot after the shuffle. That first-match-by-text
/// resolution is kept on purpose: answer keys generated for existing banks
/// with duplicate option texts must not change.
pub fn shuffle_options<R: Rng + ?Sized>(
    rng: &mut R,
    question: &Question,
    alphabet: &str,
) -> Result<(Vec<String>, char), ExamError> {
    let letter = question.answer.ok_or_else(|| ExamError::Invalid {
        index: 0,
        message: "no tiene respuesta".into(),
    })?;

    let correct_idx = alphabet
        .find(letter)
        .ok_or_else(|| ExamError::Invalid {
            index: 0,
            message: format!("tiene respuesta inválida: {letter}"),
        })?;
    let correct_text = question
        .options
        .get(correct_idx)
        .ok_or_else(|| ExamError::Invalid {
            index: 0,
            message: format!("la respuesta {letter} no corresponde a ninguna opción"),
        })?
        .clone();

    if question.options.len() > alphabet.chars().count() {
        return Err(ExamError::Configuration(format!(
            "el alfabeto '{alphabet}' es demasiado corto para {} opciones",
            question.options.len()
        )));
    }

    let mut shuffled = question.options.clone();
    shuffled.shuffle(rng);

    let new_idx = shuffled
        .iter()
        .position(|option| *option == correct_text)
        .expect("correct option text must survive the shuffle");
    let new_letter = alphabet
        .chars()
        .nth(new_idx)
        .expect("alphabet length checked against option count");

    Ok((shuffled, new_letter))
}
