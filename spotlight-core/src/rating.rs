//! Star-rating rendering rule.
//!
//! A rating in `[0, 5]` maps to exactly [`STAR_COUNT`] discrete star states:
//! star `i` is full while `i < floor(rating)`, half while `i < rating` (the
//! fractional part reaches into it), and empty otherwise. The function is pure
//! and total; out-of-range input is clamped rather than rejected, since the
//! catalog has already been validated and the only plausible excursions are
//! floating-point representation noise.

use crate::types::StarState;

/// Number of star glyphs in every rating display.
pub const STAR_COUNT: usize = 5;

/// Map a rating to its fixed-length star-state sequence.
pub fn star_states(rating: f64) -> [StarState; STAR_COUNT] {
    let rating = if rating.is_nan() { 0.0 } else { rating.clamp(0.0, 5.0) };
    let mut states = [StarState::Empty; STAR_COUNT];
    for (i, state) in states.iter_mut().enumerate() {
        let position = i as f64;
        *state = if position < rating.floor() {
            StarState::Full
        } else if position < rating {
            StarState::Half
        } else {
            StarState::Empty
        };
    }
    states
}

/// Numeric rating label, rendered at the rating's own precision ("4.9", "5").
pub fn rating_label(rating: f64) -> String {
    format!("{rating}")
}

/// Parenthesized review-count label ("(847 reviews)").
pub fn reviews_label(total_reviews: u32) -> String {
    format!("({total_reviews} reviews)")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
