//! Seeded prize draw: a reproducible permutation of the entrant names.
//!
//! The whole contract is fixed so that anyone can recompute a published draw
//! from its seed and name list:
//!
//! - seed hash: djb2 over the UTF-16 code units of the seed,
//!   `h = 5381; h = h * 33 + unit` with 32-bit wraparound;
//! - generator: 32-bit xorshift with left shifts 13, 17 and 5, each output
//!   mapped to `x / 0xFFFFFFFF` as an `f64`;
//! - shuffle: Fisher–Yates from the last index down to 1, swapping `i` with
//!   `j = floor(r * (i + 1))`, `j` clamped to `i`.
//!
//! This generator is private to the draw. Group ceremonies use `rand` instead.

use crate::logic::canonicalize::{canonicalize, AliasTable};
use crate::models::{DrawConfig, DrawState, EngineError};

/// djb2 hash of the seed string.
pub fn hash_seed(seed: &str) -> u32 {
    seed.encode_utf16()
        .fold(5381u32, |h, unit| h.wrapping_mul(33).wrapping_add(u32::from(unit)))
}

/// The draw's pseudo-random generator. A zero state stays zero.
#[derive(Clone, Debug)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x << 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Next value in `[0, 1]`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }
}

/// Permute `items` using only the seed as a source of randomness.
pub fn shuffle_deterministic<T: Clone>(items: &[T], seed: &str) -> Vec<T> {
    let mut rng = Xorshift32::new(hash_seed(seed));
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = ((rng.next_f64() * (i + 1) as f64).floor() as usize).min(i);
        out.swap(i, j);
    }
    out
}

/// Run the prize draw over an already canonical name list.
///
/// The first `config.winners` names of `full_order` are the winners; the rest
/// is kept as the public audit trail. Nothing is revealed yet.
pub fn run_prize_draw(
    canonical: &[String],
    seed: &str,
    config: &DrawConfig,
) -> Result<DrawState, EngineError> {
    if config.winners == 0 {
        return Err(EngineError::InvalidWinnerCount);
    }
    if canonical.len() < config.winners {
        return Err(EngineError::NotEnoughEntrants {
            needed: config.winners,
            available: canonical.len(),
        });
    }
    let full_order = shuffle_deterministic(canonical, seed);
    log::debug!(
        "Prize draw over {} name(s), seed hash {:#010x}",
        canonical.len(),
        hash_seed(seed)
    );
    Ok(DrawState {
        seed: seed.to_string(),
        canonical: canonical.to_vec(),
        full_order,
        winners: config.winners,
        revealed: 0,
    })
}

/// Canonicalize raw entry lines, then run the draw.
pub fn prize_draw_from_lines<S: AsRef<str>>(
    lines: &[S],
    aliases: &AliasTable,
    seed: &str,
    config: &DrawConfig,
) -> Result<DrawState, EngineError> {
    run_prize_draw(&canonicalize(lines, aliases), seed, config)
}

/// Check a published draw: recompute it from its seed and canonical list.
pub fn verify_draw(draw: &DrawState) -> bool {
    draw.full_order == shuffle_deterministic(&draw.canonical, &draw.seed)
}
