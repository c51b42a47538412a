use crate::core::application::ApplicationInput;
use crate::core::result::{FinancialMetrics, ReasonEntry};
use crate::engine::kyc;
use crate::finance;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Base fields common to every product's application record.
pub const LOAN_AMOUNT: &str = "loan_amount";
pub const ANNUAL_INTEREST_RATE_PERCENT: &str = "annual_interest_rate_percent";
pub const LOAN_TERM_YEARS: &str = "loan_term_years";
pub const GROSS_MONTHLY_INCOME: &str = "borrower_gross_monthly_income";
pub const EXISTING_MONTHLY_DEBT: &str = "existing_monthly_debt_payments";

/// Which income figure an affordability ceiling is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeBase {
    /// Declared gross monthly income.
    Gross,
    /// Estimated net monthly income (80% of gross).
    Net,
}

/// The predicate of one criterion, expressed as data.
///
/// Criteria tables are interpreted by one generic routine; adding a
/// product means authoring a table, not writing evaluation code.
#[derive(Debug, Clone, PartialEq)]
pub enum Requirement {
    /// A required attachment was supplied (the caller reports file
    /// presence as a flag).
    Document(&'static str),
    /// A system-verified fact attested by the caller.
    SystemCheck(&'static str),
    /// All seven KYC fields present and non-blank.
    FullKyc,
    /// Free-text purpose with a minimum trimmed length
    /// (`min_chars` of 1 means presence-only).
    PurposeStated {
        field: &'static str,
        min_chars: usize,
    },
    /// Requested amount at or under a policy cap.
    AmountWithinCap { cap: Decimal },
    /// Loan term at or under a policy maximum.
    TermWithinYears { max_years: u32 },
    /// Debt service at or under a percentage of monthly income.
    DtiWithin {
        max_percent: Decimal,
        base: IncomeBase,
    },
    /// Requested amount at or under a multiple of annual income.
    LoanToIncomeWithin { max_multiple: Decimal },
}

/// Whether a criterion scores points or is merely reported.
///
/// Policy ceilings are scored for some products and informational for
/// others; the table records the choice, the interpreter honors it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scoring {
    Weighted(Decimal),
    Informational,
}

impl Scoring {
    pub fn weight(&self) -> Decimal {
        match self {
            Scoring::Weighted(w) => *w,
            Scoring::Informational => Decimal::ZERO,
        }
    }
}

/// One entry of a product's criteria table.
#[derive(Debug, Clone, PartialEq)]
pub struct CriteriaItem {
    pub scoring: Scoring,
    pub description: &'static str,
    pub requirement: Requirement,
}

impl CriteriaItem {
    pub fn weighted(weight: Decimal, description: &'static str, requirement: Requirement) -> Self {
        debug_assert!(weight >= Decimal::ZERO);
        Self {
            scoring: Scoring::Weighted(weight),
            description,
            requirement,
        }
    }

    pub fn informational(description: &'static str, requirement: Requirement) -> Self {
        Self {
            scoring: Scoring::Informational,
            description,
            requirement,
        }
    }
}

/// Raw outcome of checking one requirement against one application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Met,
    NotMet,
    /// The relevant denominator was non-positive; affordability cannot
    /// be judged either way.
    CannotAssess,
}

impl Requirement {
    /// Check this requirement against the input and the metrics derived
    /// from it. Returns the outcome plus optional computed detail for
    /// the audit line.
    pub fn check(
        &self,
        input: &ApplicationInput,
        metrics: &FinancialMetrics,
    ) -> (CheckOutcome, Option<String>) {
        match self {
            Requirement::Document(field) | Requirement::SystemCheck(field) => {
                (flag_outcome(input.flag(field)), None)
            }
            Requirement::FullKyc => (flag_outcome(kyc::is_complete(input)), None),
            Requirement::PurposeStated { field, min_chars } => {
                (flag_outcome(input.text_len(field) >= *min_chars), None)
            }
            Requirement::AmountWithinCap { cap } => {
                let amount = input.number_or_zero(LOAN_AMOUNT);
                (
                    flag_outcome(amount <= *cap),
                    Some(format!("requested {}, cap {}", amount, cap)),
                )
            }
            Requirement::TermWithinYears { max_years } => {
                let term = input.number_or_zero(LOAN_TERM_YEARS);
                (
                    flag_outcome(term <= Decimal::from(*max_years)),
                    Some(format!("term {} years, cap {} years", term, max_years)),
                )
            }
            Requirement::DtiWithin { max_percent, base } => {
                let income = match base {
                    IncomeBase::Gross => input.number_or_zero(GROSS_MONTHLY_INCOME),
                    IncomeBase::Net => metrics.net_monthly_income,
                };
                match finance::dti_percent(income, metrics.total_monthly_debt) {
                    Some(dti) => (
                        flag_outcome(dti <= *max_percent),
                        Some(format!("DTI {}%, ceiling {}%", dti, max_percent)),
                    ),
                    None => (CheckOutcome::CannotAssess, None),
                }
            }
            Requirement::LoanToIncomeWithin { max_multiple } => {
                match metrics.loan_to_annual_income {
                    Some(ratio) => (
                        flag_outcome(ratio <= *max_multiple),
                        Some(format!(
                            "{}x annual income, ceiling {}x",
                            ratio, max_multiple
                        )),
                    ),
                    None => (CheckOutcome::CannotAssess, None),
                }
            }
        }
    }
}

fn flag_outcome(met: bool) -> CheckOutcome {
    if met {
        CheckOutcome::Met
    } else {
        CheckOutcome::NotMet
    }
}

impl CriteriaItem {
    /// Evaluate this criterion, producing its audit line. The points on
    /// the returned entry are the caller's score contribution.
    pub fn evaluate(
        &self,
        input: &ApplicationInput,
        metrics: &FinancialMetrics,
    ) -> ReasonEntry {
        let (outcome, detail) = self.requirement.check(input, metrics);
        let description = match &detail {
            Some(d) => format!("{} ({})", self.description, d),
            None => self.description.to_string(),
        };

        match (self.scoring, outcome) {
            (_, CheckOutcome::CannotAssess) => ReasonEntry::not_met(format!(
                "{}: cannot assess without positive income",
                self.description
            )),
            (Scoring::Informational, _) => ReasonEntry::info(description),
            (Scoring::Weighted(weight), CheckOutcome::Met) => {
                ReasonEntry::met(description, weight)
            }
            (Scoring::Weighted(_), CheckOutcome::NotMet) => ReasonEntry::not_met(description),
        }
    }
}
