//! Test and benchmark utilities.
//!
//! This module is only available when the `testutil` feature is enabled.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chunk::ColumnChunk;

/// One already-tokenized field, as a tokenizer would hand it to a column.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Feeds `tokens` to `chunk` in order.
pub fn feed(chunk: &mut ColumnChunk, tokens: &[Token]) {
    for token in tokens {
        match token {
            Token::Integer(v) => chunk.process_integer(*v),
            Token::Float(v) => chunk.process_float(*v),
            Token::Text(s) => chunk.process_categorical(s),
        }
    }
}

/// Deterministic integers spread over every width of the numeric chain.
pub fn generate_integers(seed: u64, count: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| match rng.gen_range(0..4) {
            0 => rng.gen_range(0..=u8::MAX as i64),
            1 => rng.gen_range(i16::MIN as i64..=i16::MAX as i64),
            2 => rng.gen_range(i32::MIN as i64..=i32::MAX as i64),
            _ => rng.r#gen::<i64>(),
        })
        .collect()
}

/// Deterministic numeric tokens with roughly one float in `float_every`.
pub fn generate_numeric_tokens(seed: u64, count: usize, float_every: u32) -> Vec<Token> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            if float_every > 0 && rng.gen_ratio(1, float_every) {
                Token::Float(rng.gen_range(-1000.0..1000.0))
            } else {
                Token::Integer(rng.gen_range(-100_000..100_000))
            }
        })
        .collect()
}

/// Deterministic text tokens drawn from `distinct` labels (`"label-0"`, ...).
pub fn generate_text_tokens(seed: u64, count: usize, distinct: usize) -> Vec<Token> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Token::Text(format!("label-{}", rng.gen_range(0..distinct.max(1)))))
        .collect()
}
