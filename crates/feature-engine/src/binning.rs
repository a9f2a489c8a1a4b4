//! Clipping and Equal-Width Binning Helpers
//!
//! All binned features share one rule: four equal-width buckets over
//! `[origin, origin + 4*width)`, half-open on the right, with the
//! final bucket closed at the clip ceiling. The clip bounds used by
//! the transformer (0.1, 79, 99.99, ...) are chosen so a raw value
//! can never land on the theoretical maximum of its range, which is
//! what guarantees exactly four buckets.

/// Clip a value into `[lower, upper]`
pub fn clip(value: f64, lower: f64, upper: f64) -> f64 {
    value.clamp(lower, upper)
}

/// Clip a value from above only
pub fn clip_upper(value: f64, upper: f64) -> f64 {
    value.min(upper)
}

/// Bucket index for four equal-width bins starting at `origin`.
///
/// A value at the clip floor falls in bucket 0; a value at or beyond
/// the last boundary falls in bucket 3. Callers clip first, so the
/// clamp only closes the final bucket at the ceiling.
pub fn bin4(value: f64, origin: f64, width: f64) -> u8 {
    let idx = ((value - origin) / width).floor();
    idx.clamp(0.0, 3.0) as u8
}
