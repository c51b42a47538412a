use crate::core::result::Decision;
use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Whether a product routes mid-band scores to the credit board.
///
/// Most products send scores between the board-review threshold and the
/// approval threshold to manual review. The container product removes
/// that band entirely: anything below the approval threshold is a hard
/// decline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewBand {
    Standard,
    None,
}

/// Scoring thresholds for the approval decision.
///
/// Thresholds are policy, not code: two revisions exist in the union's
/// history and neither is authoritative, so both ship as named
/// configurations and the caller chooses. [`PolicyConfig::current`] is
/// the latest revision and the default.
///
/// # Examples
///
/// ```
/// use appraisal_engine::policy::thresholds::{PolicyConfig, ReviewBand};
/// use appraisal_engine::core::result::Decision;
/// use rust_decimal_macros::dec;
///
/// let policy = PolicyConfig::legacy();
/// assert_eq!(policy.decide(dec!(96), ReviewBand::Standard), Decision::Approved);
/// assert_eq!(policy.decide(dec!(80), ReviewBand::Standard), Decision::NeedsReview);
/// assert_eq!(policy.decide(dec!(80), ReviewBand::None), Decision::Declined);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Revision label, carried through to logs and audit output.
    pub name: String,
    /// Minimum score for outright approval.
    pub approval_threshold: Decimal,
    /// Minimum score for board review (when the product has a band).
    pub board_review_threshold: Decimal,
}

impl PolicyConfig {
    /// Build a configuration, warning when the review band is empty
    /// (board-review threshold at or above the approval threshold means
    /// no score can land in the band).
    pub fn new(
        name: impl Into<String>,
        approval_threshold: Decimal,
        board_review_threshold: Decimal,
    ) -> Self {
        let config = Self {
            name: name.into(),
            approval_threshold,
            board_review_threshold,
        };
        if !config.has_review_band() {
            warn!(
                "policy '{}': board-review threshold {} >= approval threshold {}; \
                 the review band is empty and mid scores will decline",
                config.name, config.board_review_threshold, config.approval_threshold
            );
        }
        config
    }

    /// Latest-revision thresholds: approve at 70, review from 75.
    ///
    /// Note the band is empty under this revision — every score at or
    /// above 70 approves, everything else declines.
    pub fn current() -> Self {
        Self::new("current", dec!(70), dec!(75))
    }

    /// First-revision thresholds: approve at 96, review from 75.
    pub fn legacy() -> Self {
        Self::new("legacy", dec!(96), dec!(75))
    }

    /// True when some score can actually land in the review band.
    pub fn has_review_band(&self) -> bool {
        self.board_review_threshold < self.approval_threshold
    }

    /// Map a final score to a decision under this configuration.
    pub fn decide(&self, score: Decimal, band: ReviewBand) -> Decision {
        if score >= self.approval_threshold {
            Decision::Approved
        } else if band == ReviewBand::Standard && score >= self.board_review_threshold {
            Decision::NeedsReview
        } else {
            Decision::Declined
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_banding() {
        let policy = PolicyConfig::legacy();
        assert_eq!(policy.decide(dec!(100), ReviewBand::Standard), Decision::Approved);
        assert_eq!(policy.decide(dec!(96), ReviewBand::Standard), Decision::Approved);
        assert_eq!(policy.decide(dec!(95.99), ReviewBand::Standard), Decision::NeedsReview);
        assert_eq!(policy.decide(dec!(75), ReviewBand::Standard), Decision::NeedsReview);
        assert_eq!(policy.decide(dec!(74.99), ReviewBand::Standard), Decision::Declined);
        assert!(policy.has_review_band());
    }

    #[test]
    fn test_current_band_is_empty() {
        let policy = PolicyConfig::current();
        assert!(!policy.has_review_band());
        assert_eq!(policy.decide(dec!(70), ReviewBand::Standard), Decision::Approved);
        // 70/75 inverts the band, so nothing routes to review.
        assert_eq!(policy.decide(dec!(69.99), ReviewBand::Standard), Decision::Declined);
    }

    #[test]
    fn test_band_disabled_declines() {
        let policy = PolicyConfig::legacy();
        assert_eq!(policy.decide(dec!(80), ReviewBand::None), Decision::Declined);
        assert_eq!(policy.decide(dec!(96), ReviewBand::None), Decision::Approved);
    }

    #[test]
    fn test_exact_threshold_approves() {
        let policy = PolicyConfig::new("custom", dec!(85), dec!(60));
        assert_eq!(policy.decide(dec!(85), ReviewBand::Standard), Decision::Approved);
        assert_eq!(policy.decide(dec!(84.99), ReviewBand::Standard), Decision::NeedsReview);
        assert_eq!(policy.decide(dec!(59.99), ReviewBand::Standard), Decision::Declined);
    }
}
