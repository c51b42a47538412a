use crate::core::application::ApplicationInput;
use crate::core::product::LoanProduct;
use crate::core::result::{AppraisalResult, Decision, FinancialMetrics, ReasonEntry};
use crate::engine::catalog;
use crate::engine::criteria::{
    ANNUAL_INTEREST_RATE_PERCENT, EXISTING_MONTHLY_DEBT, GROSS_MONTHLY_INCOME, LOAN_AMOUNT,
    LOAN_TERM_YEARS,
};
use crate::finance;
use crate::policy::thresholds::PolicyConfig;
use log::{debug, info, warn};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The generic appraisal routine.
///
/// One stateless entry point interprets every product's criteria table;
/// products differ only in policy data, never in evaluation code.
/// Appraisals are pure: the same input, product and policy always yield
/// an identical result.
///
/// # Examples
///
/// ```
/// use appraisal_engine::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let input = ApplicationInput::new()
///     .with_number("loan_amount", dec!(2_000_000))
///     .with_number("annual_interest_rate_percent", dec!(12))
///     .with_number("loan_term_years", dec!(2))
///     .with_number("borrower_gross_monthly_income", dec!(600_000))
///     .with_flag("loan_purpose_document", true)
///     .with_flag("savings_covers_loan_plus_interest", true)
///     .with_flag("loan_amount_blocked_in_savings", true)
///     .with_flag("no_active_default", true);
///
/// let policy = PolicyConfig::legacy();
/// let result = AppraisalEngine::appraise(LoanProduct::WithinSavings, &input, &policy);
///
/// // KYC is missing: 100 - 10 = 90, inside the legacy review band.
/// assert_eq!(result.score(), dec!(90));
/// assert_eq!(result.decision(), Decision::NeedsReview);
/// ```
pub struct AppraisalEngine;

impl AppraisalEngine {
    /// Appraise one application against one product's criteria table.
    ///
    /// Walks the table in order, appending exactly one reason per
    /// criterion; accumulates awarded weights, caps the score at 100,
    /// and maps it through the decision policy.
    pub fn appraise(
        product: LoanProduct,
        input: &ApplicationInput,
        policy: &PolicyConfig,
    ) -> AppraisalResult {
        let metrics = derive_metrics(input);
        let table = catalog::criteria_for(product);

        let mut score = Decimal::ZERO;
        let mut reasons = Vec::with_capacity(table.len());
        for item in &table {
            let reason = item.evaluate(input, &metrics);
            debug!(
                "{}: {:?} '{}' +{}",
                product, reason.status, item.description, reason.points
            );
            score += reason.points;
            reasons.push(reason);
        }
        let score = score.min(Decimal::ONE_HUNDRED);

        let decision = policy.decide(score, catalog::review_band(product));
        info!(
            "appraised {} under policy '{}': score {}/{}, decision {}",
            product,
            policy.name,
            score,
            catalog::max_attainable(product),
            decision
        );

        AppraisalResult::new(
            product.code(),
            score,
            catalog::max_attainable(product),
            decision,
            reasons,
            metrics,
        )
    }

    /// Appraise by raw product code, degrading gracefully on codes the
    /// engine has no logic for: the caller gets a needs-review result
    /// with an explicit reason instead of an error or a panic.
    pub fn appraise_code(
        code: &str,
        input: &ApplicationInput,
        policy: &PolicyConfig,
    ) -> AppraisalResult {
        match LoanProduct::from_code(code) {
            Ok(product) => Self::appraise(product, input, policy),
            Err(err) => {
                warn!("{err}; routing to manual review");
                AppraisalResult::new(
                    code,
                    Decimal::ZERO,
                    Decimal::ZERO,
                    Decision::NeedsReview,
                    vec![ReasonEntry::info(format!(
                        "Appraisal logic not implemented for product code '{code}'; \
                         manual review required"
                    ))],
                    derive_metrics(input),
                )
            }
        }
    }
}

/// Derive the financial metrics once per appraisal, before any
/// criterion is evaluated. Every division is guarded; degenerate
/// denominators surface as `None`, never as an error.
pub(crate) fn derive_metrics(input: &ApplicationInput) -> FinancialMetrics {
    let loan_amount = input.number_or_zero(LOAN_AMOUNT);
    let annual_rate = input.number_or_zero(ANNUAL_INTEREST_RATE_PERCENT);
    let term_years = input
        .number_or_zero(LOAN_TERM_YEARS)
        .to_u32()
        .unwrap_or(0);
    let gross_income = input.number_or_zero(GROSS_MONTHLY_INCOME);
    let existing_debt = input.number_or_zero(EXISTING_MONTHLY_DEBT);

    let monthly_payment = finance::monthly_payment(loan_amount, annual_rate, term_years);
    let total_monthly_debt = monthly_payment + existing_debt;
    let net_monthly_income = finance::net_monthly_income(gross_income);

    let dti_percent = finance::dti_percent(net_monthly_income, total_monthly_debt);
    let dti_ratio = dti_percent.map(|p| (p / Decimal::ONE_HUNDRED).round_dp(4));
    let loan_to_annual_income =
        finance::loan_to_income_ratio(loan_amount, gross_income * dec!(12));

    FinancialMetrics {
        monthly_payment,
        total_monthly_debt,
        net_monthly_income,
        dti_ratio,
        dti_percent,
        loan_to_annual_income,
    }
}
