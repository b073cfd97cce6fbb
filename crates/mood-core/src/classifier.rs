//! Quantization of a signed shift sum into a mood [`Category`].
//!
//! `category = clamp(sign(sum) * ceil(|sum| / neurocity), MIN, MAX)`
//!
//! Ceiling rather than rounding: any nonzero remainder pushes the result
//! one step further from neutral, so a sum of 1 against a neurocity of 100
//! is already one category away. `sign(0) = 0`, so an empty or balanced
//! tracker is always neutral whatever the neurocity.

use mood_types::Category;

/// Classify an aggregate shift. A `neurocity` below 1 is treated as 1.
pub fn classify(sum: i64, neurocity: i32) -> Category {
    if sum == 0 {
        return Category::Neutral;
    }

    let divisor = u64::try_from(neurocity.max(1)).unwrap_or(1);
    let magnitude = sum.unsigned_abs().div_ceil(divisor);
    let steps = i64::try_from(magnitude).unwrap_or(i64::MAX);
    let signed = if sum < 0 { steps.saturating_neg() } else { steps };

    Category::from_clamped(signed)
}
