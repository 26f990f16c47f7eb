//! Exam assembly.
//!
//! Selects a seeded random subset of the bank, shuffles each question's
//! options, and computes the per-exam answer key. Two calls with the same
//! bank, count, seed, and alphabet produce identical output, across process
//! restarts; determinism holds for this implementation and its locked `rand`
//! version, with no cross-ecosystem PRNG compatibility implied.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::ExamError;
use crate::model::{Exam, ExamQuestion, GenerationParams, Question};
use crate::shuffle::shuffle_options;

/// Build the random generator for a seed string.
///
/// The seed-to-state mapping is fixed: FNV-1a (64-bit) over the UTF-8 bytes
/// of the seed, fed to `StdRng::seed_from_u64`.
pub fn rng_for_seed(seed: &str) -> StdRng {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET;
    for byte in seed.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    StdRng::seed_from_u64(hash)
}

/// Assemble one exam: select `min(count, bank.len())` distinct questions,
/// shuffle each one's options, and number them 1..n in selection order.
///
/// Returns the ordered exam questions and the position → letter answer key.
/// Re-invoking with the same seed reproduces the exact same exam, which is
/// why seeds are scoped per exam rather than per run.
pub fn assemble(
    bank: &[Question],
    count: usize,
    seed: &str,
    alphabet: &str,
) -> Result<(Vec<ExamQuestion>, BTreeMap<usize, char>), ExamError> {
    if count == 0 {
        return Err(ExamError::Configuration(
            "el número de preguntas por examen debe ser mayor que 0".into(),
        ));
    }
    if alphabet.is_empty() {
        return Err(ExamError::Configuration(
            "el alfabeto de opciones no puede estar vacío".into(),
        ));
    }
    if bank.is_empty() {
        return Err(ExamError::EmptyBank);
    }

    if count > bank.len() {
        tracing::warn!(
            requested = count,
            available = bank.len(),
            "el banco tiene menos preguntas de las solicitadas; se usará el banco completo"
        );
    }

    let mut rng = rng_for_seed(seed);
    let take = count.min(bank.len());
    let selected = rand::seq::index::sample(&mut rng, bank.len(), take);

    let mut questions = Vec::with_capacity(take);
    let mut answer_key = BTreeMap::new();

    for (offset, bank_idx) in selected.iter().enumerate() {
        let number = offset + 1;
        let source = &bank[bank_idx];
        let (options, answer) = shuffle_options(&mut rng, source, alphabet).map_err(|e| {
            match e {
                ExamError::Invalid { message, .. } => ExamError::Invalid {
                    index: number,
                    message,
                },
                other => other,
            }
        })?;

        questions.push(ExamQuestion {
            number,
            text: source.text.clone(),
            options,
            answer,
        });
        answer_key.insert(number, answer);
    }

    Ok((questions, answer_key))
}

/// Run a full generation: one [`assemble`] call per exam, strictly
/// sequential, each exam seeded with `{prefix}_{number}`.
pub fn generate_run(bank: &[Question], params: &GenerationParams) -> Result<Vec<Exam>, ExamError> {
    params.validate()?;

    let mut exams = Vec::with_capacity(params.num_exams);
    for number in 1..=params.num_exams {
        let seed = Exam::seed_for(&params.exam_prefix, number);
        let (questions, answer_key) = assemble(
            bank,
            params.questions_per_exam,
            &seed,
            &params.option_letters,
        )?;
        exams.push(Exam {
            number,
            seed,
            questions,
            answer_key,
        });
    }
    Ok(exams)
}
