use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tri-state appraisal outcome.
///
/// Modeled as a tagged enumeration rather than a nullable boolean so the
/// "no review band" product variant is plain configuration instead of an
/// implicit null-handling special case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Score met or exceeded the approval threshold.
    Approved,
    /// Score fell in the board-review band; requires human adjudication.
    NeedsReview,
    /// Score fell below every threshold.
    Declined,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Decision::Approved => "APPROVED",
            Decision::NeedsReview => "NEEDS REVIEW",
            Decision::Declined => "DECLINED",
        };
        write!(f, "{}", label)
    }
}

/// Outcome category of a single reason line in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonStatus {
    /// The criterion was satisfied and its weight awarded.
    Met,
    /// The criterion was not satisfied (or could not be assessed).
    NotMet,
    /// Informational line; never carries points.
    Info,
}

/// One line of the appraisal audit trail.
///
/// The engine appends exactly one entry per evaluated criterion, in
/// criteria-table order, whether or not the criterion was met — the
/// trail is exhaustive and its ordering is part of the output contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasonEntry {
    pub status: ReasonStatus,
    pub description: String,
    /// Points awarded by this criterion (zero for not-met and
    /// informational lines).
    pub points: Decimal,
}

impl ReasonEntry {
    pub fn met(description: impl Into<String>, points: Decimal) -> Self {
        Self {
            status: ReasonStatus::Met,
            description: description.into(),
            points,
        }
    }

    pub fn not_met(description: impl Into<String>) -> Self {
        Self {
            status: ReasonStatus::NotMet,
            description: description.into(),
            points: Decimal::ZERO,
        }
    }

    pub fn info(description: impl Into<String>) -> Self {
        Self {
            status: ReasonStatus::Info,
            description: description.into(),
            points: Decimal::ZERO,
        }
    }
}

impl fmt::Display for ReasonEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = match self.status {
            ReasonStatus::Met => "✔",
            ReasonStatus::NotMet => "✖",
            ReasonStatus::Info => "ℹ",
        };
        write!(f, "{} {} (+{}%)", mark, self.description, self.points)
    }
}

/// Financial metrics derived once per appraisal and reported with the
/// result.
///
/// Ratio fields are `None` when the relevant denominator is
/// non-positive — "cannot assess affordability" is an explicit state,
/// never a division error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialMetrics {
    /// Amortized monthly payment on the requested loan.
    pub monthly_payment: Decimal,
    /// New payment plus existing monthly debt service.
    pub total_monthly_debt: Decimal,
    /// Estimated net monthly income (flat 80% of gross).
    pub net_monthly_income: Decimal,
    /// Total monthly debt as a fraction of estimated net income.
    pub dti_ratio: Option<Decimal>,
    /// `dti_ratio` expressed as a percentage, 2 decimal places.
    pub dti_percent: Option<Decimal>,
    /// Requested loan as a multiple of gross annual income.
    pub loan_to_annual_income: Option<Decimal>,
}

/// The completed appraisal of one application.
///
/// Immutable once produced. Carries no identity; the caller is
/// responsible for attaching it to whatever persisted record it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppraisalResult {
    /// Product code as supplied by the caller. Stays verbatim even for
    /// codes the engine has no logic for, so the audit record always
    /// names what was requested.
    product_code: String,
    /// Sum of awarded criteria weights, capped at 100.
    score: Decimal,
    /// Sum of all scored weights in the product's table, capped at 100.
    /// Some products are authored with a ceiling below 100.
    max_attainable: Decimal,
    decision: Decision,
    reasons: Vec<ReasonEntry>,
    metrics: FinancialMetrics,
}

impl AppraisalResult {
    pub(crate) fn new(
        product_code: impl Into<String>,
        score: Decimal,
        max_attainable: Decimal,
        decision: Decision,
        reasons: Vec<ReasonEntry>,
        metrics: FinancialMetrics,
    ) -> Self {
        debug_assert!(score >= Decimal::ZERO && score <= Decimal::ONE_HUNDRED);
        Self {
            product_code: product_code.into(),
            score,
            max_attainable,
            decision,
            reasons,
            metrics,
        }
    }

    // --- Accessors ---

    pub fn product_code(&self) -> &str {
        &self.product_code
    }

    pub fn score(&self) -> Decimal {
        self.score
    }

    /// The highest score this product's table can award.
    pub fn max_attainable(&self) -> Decimal {
        self.max_attainable
    }

    pub fn decision(&self) -> Decision {
        self.decision
    }

    /// The ordered, exhaustive audit trail — one entry per criterion.
    pub fn reasons(&self) -> &[ReasonEntry] {
        &self.reasons
    }

    pub fn metrics(&self) -> &FinancialMetrics {
        &self.metrics
    }

    /// Score as a percentage of the product's attainable ceiling, for
    /// display. Tables that top out below 100 still read as "full
    /// marks" here when every scored criterion is met.
    pub fn score_percent_of_max(&self) -> f64 {
        if self.max_attainable == Decimal::ZERO {
            return 0.0;
        }
        let pct = self.score * Decimal::ONE_HUNDRED / self.max_attainable;
        pct.to_string().parse::<f64>().unwrap_or(0.0)
    }

    /// Count of criteria that awarded points.
    pub fn met_count(&self) -> usize {
        self.reasons
            .iter()
            .filter(|r| r.status == ReasonStatus::Met)
            .count()
    }
}

impl fmt::Display for AppraisalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Appraisal Result: {} ===", self.product_code)?;
        writeln!(f, "Score:     {} / {}", self.score, self.max_attainable)?;
        writeln!(f, "Decision:  {}", self.decision)?;
        writeln!(f, "Reasons:")?;
        for reason in &self.reasons {
            writeln!(f, "  {}", reason)?;
        }
        writeln!(f, "Monthly payment:      {}", self.metrics.monthly_payment)?;
        writeln!(f, "Total monthly debt:   {}", self.metrics.total_monthly_debt)?;
        writeln!(f, "Est. net income:      {}", self.metrics.net_monthly_income)?;
        match self.metrics.dti_percent {
            Some(dti) => writeln!(f, "DTI:                  {}%", dti)?,
            None => writeln!(f, "DTI:                  n/a (no income)")?,
        }
        match self.metrics.loan_to_annual_income {
            Some(ratio) => writeln!(f, "Loan / annual income: {}x", ratio)?,
            None => writeln!(f, "Loan / annual income: n/a (no income)")?,
        }
        Ok(())
    }
}
