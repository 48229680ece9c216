//! Random numbers, range normalization and interpolation.

use rand::Rng;

use crate::error::MathError;

/// Random value in `[min, max)`, rounded to `decimals` places if given.
pub fn random_number(min: f64, max: f64, decimals: Option<u32>) -> f64 {
    random_number_with(&mut rand::thread_rng(), min, max, decimals)
}

/// [`random_number`] drawing from `rng`.
pub fn random_number_with<R: Rng + ?Sized>(
    rng: &mut R,
    min: f64,
    max: f64,
    decimals: Option<u32>,
) -> f64 {
    let roll: f64 = rng.r#gen();
    let result = roll * (max - min) + min;
    match decimals {
        Some(places) => round_to(result, places),
        None => result,
    }
}

/// Random integer in `[min, max]`.
pub fn random_int(min: i64, max: i64) -> i64 {
    random_int_with(&mut rand::thread_rng(), min, max)
}

/// [`random_int`] drawing from `rng`.
pub fn random_int_with<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let roll: f64 = rng.r#gen();
    // Widened so the full i64 range does not overflow
    let span = max as f64 - min as f64 + 1.0;
    min.saturating_add((roll * span).floor() as i64)
}

/// Map `value` from the source range onto the target range.
///
/// `value` is clamped into the source range first. A zero-width source
/// range yields NaN.
pub fn normalize(
    value: f64,
    source_min: f64,
    source_max: f64,
    target_min: f64,
    target_max: f64,
) -> Result<f64, MathError> {
    if source_max < source_min || target_max < target_min {
        return Err(MathError::InvalidRange);
    }

    let clamped = value.min(source_max).max(source_min);
    let percentage = (clamped - source_min) / (source_max - source_min);
    Ok(target_min + percentage * (target_max - target_min))
}

/// Linear interpolation between `start` and `end`.
#[inline]
pub fn lerp(start: f64, end: f64, amount: f64) -> f64 {
    (1.0 - amount) * start + amount * end
}

fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
