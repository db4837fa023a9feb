//! Common types shared across scoring modules.

use serde::{Deserialize, Serialize};

/// Tag confidence clamped to the [0.0, 1.0] range.
///
/// Construction always clamps, so a `Confidence` read back out of a
/// [`SuggestedTag`](crate::SuggestedTag) is valid regardless of how large a
/// rule weight or occurrence count was.
///
/// # Examples
///
/// ```
/// use tplscore_scoring::Confidence;
///
/// assert_eq!(Confidence::new(0.75).value(), 0.75);
/// assert_eq!(Confidence::new(1.5).value(), 1.0);
///
/// // Rule weight 0.8 matched twice: 0.8 * (0.6 + 0.2)
/// let c = Confidence::from_occurrences(0.8, 2);
/// assert!((c.value() - 0.64).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f64);

/// Confidence granted by a single match before the rule weight is applied.
const BASE_MATCH_CONFIDENCE: f64 = 0.6;
/// Extra confidence for each occurrence of a rule pattern.
const PER_OCCURRENCE_BONUS: f64 = 0.1;

impl Confidence {
    /// Create a new Confidence, clamping the value to [0.0, 1.0].
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Confidence for a tag rule that matched `occurrences` times.
    ///
    /// Computed as `min(weight * (0.6 + 0.1 * occurrences), 1.0)`.
    #[must_use]
    pub fn from_occurrences(weight: f64, occurrences: usize) -> Self {
        let raw = weight * (BASE_MATCH_CONFIDENCE + PER_OCCURRENCE_BONUS * occurrences as f64);
        Self::new(raw.min(1.0))
    }

    /// Get the inner confidence value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(0.0)
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_clamps_out_of_range() {
        assert_eq!(Confidence::new(1.5).value(), 1.0);
        assert_eq!(Confidence::new(-0.5).value(), 0.0);
        assert_eq!(Confidence::new(0.42).value(), 0.42);
    }

    #[test]
    fn test_single_occurrence_full_weight() {
        let c = Confidence::from_occurrences(1.0, 1);
        assert!((c.value() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_occurrences_saturate_at_one() {
        assert_eq!(Confidence::from_occurrences(1.0, 5).value(), 1.0);
        assert_eq!(Confidence::from_occurrences(1.0, 40).value(), 1.0);
    }

    #[test]
    fn test_low_weight_scales_down() {
        let c = Confidence::from_occurrences(0.5, 1);
        assert!((c.value() - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_display() {
        assert_eq!(Confidence::new(0.756).to_string(), "0.76");
    }

    #[test]
    fn test_confidence_serializes_as_number() {
        let json = serde_json::to_string(&Confidence::new(0.5)).unwrap();
        assert_eq!(json, "0.5");
    }

    #[test]
    fn test_confidence_ordering() {
        assert!(Confidence::new(0.2) < Confidence::new(0.8));
    }
}
