//! Deterministic sequence generator
//!
//! A 32-bit counter advanced by a fixed odd increment, mixed with a
//! multiply-xor-shift cascade (mulberry32). Identical seeds yield identical
//! infinite streams on every platform; no system entropy is ever consulted.

/// Weyl increment added to the counter each step.
const INCREMENT: u32 = 0x6D2B_79F5;

/// 2^32, the normalization divisor for [0, 1) output.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Advance `state` once, returning the mixed output word and the new state.
pub fn next_word(state: u32) -> (u32, u32) {
    let t = state.wrapping_add(INCREMENT);
    let mut r = (t ^ (t >> 15)).wrapping_mul(1 | t);
    r ^= r.wrapping_add((r ^ (r >> 7)).wrapping_mul(61 | r));
    (r ^ (r >> 14), t)
}

/// Advance `state` once, returning a value in [0, 1) and the new state.
pub fn next(state: u32) -> (f64, u32) {
    let (word, state) = next_word(state);
    (f64::from(word) / TWO_POW_32, state)
}

/// Iterator form of [`next`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current counter value.
    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn next_f64(&mut self) -> f64 {
        let (value, state) = next(self.state);
        self.state = state;
        value
    }
}

impl Iterator for Mulberry32 {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}
