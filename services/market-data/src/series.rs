//! Price series synthesizer
//!
//! Bounded multiplicative random walk: every point is the previous one scaled
//! by `1 + shock`, with the shock drawn uniformly from
//! `[-volatility, +volatility)`. The shock is applied before each append,
//! including the first, so a one-point series is already one step away from
//! the base value.

use types::asset::PriceSeries;

use crate::rng::Mulberry32;

/// Starting value of every walk, before the first shock.
pub const SERIES_BASE: f64 = 100.0;

/// Synthesize `len` points from `seed`.
///
/// Values stay strictly positive while `volatility < 1`.
pub fn synthesize(seed: u32, len: usize, volatility: f64) -> PriceSeries {
    let mut rng = Mulberry32::new(seed);
    let mut value = SERIES_BASE;
    let mut points = Vec::with_capacity(len);

    for _ in 0..len {
        let shock = (rng.next_f64() - 0.5) * 2.0 * volatility;
        value *= 1.0 + shock;
        points.push(value);
    }

    PriceSeries::new(points)
}
