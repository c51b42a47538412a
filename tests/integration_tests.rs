use appraisal_engine::core::application::ApplicationInput;
use appraisal_engine::core::product::LoanProduct;
use appraisal_engine::core::result::{AppraisalResult, Decision, ReasonStatus};
use appraisal_engine::engine::appraisal::AppraisalEngine;
use appraisal_engine::engine::catalog;
use appraisal_engine::finance;
use appraisal_engine::policy::thresholds::PolicyConfig;
use appraisal_engine::simulation::scenario::generate_complete_application;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn with_kyc(input: ApplicationInput) -> ApplicationInput {
    input
        .with_text("identity_card_number", "ID-778-104-220")
        .with_text("place_of_birth", "Limbe")
        .with_text("current_address", "Mile 4, Limbe")
        .with_text("marital_status", "Married")
        .with_number("duration_with_mfi_years", dec!(6))
        .with_number("num_loans_other_mfi", dec!(0))
        .with_text("profession", "Fishmonger")
}

/// Full pipeline: a well-documented salary-backed application under
/// both threshold revisions.
#[test]
fn full_pipeline_salary_backed_scenario() {
    let input = with_kyc(
        ApplicationInput::new()
            .with_number("loan_amount", dec!(4_000_000))
            .with_number("annual_interest_rate_percent", dec!(15))
            .with_number("loan_term_years", dec!(3))
            .with_number("borrower_gross_monthly_income", dec!(800_000))
            .with_number("existing_monthly_debt_payments", dec!(60_000)),
    )
    .with_flag("loan_purpose_document", true)
    .with_flag("copy_of_effective_service_document", true)
    .with_flag("irrevocable_salary_transfer_document", true)
    .with_flag("salary_passing_union_ge_3_months", true)
    .with_flag("savings_ge_1_10_loan", true);

    // Everything met: 5+15+20+10+20+15+15 = 100.
    let legacy = AppraisalEngine::appraise(LoanProduct::SalaryBacked, &input, &PolicyConfig::legacy());
    assert_eq!(legacy.score(), dec!(100));
    assert_eq!(legacy.decision(), Decision::Approved);
    assert_eq!(legacy.reasons().len(), 7);

    let current = AppraisalEngine::appraise(LoanProduct::SalaryBacked, &input, &PolicyConfig::current());
    assert_eq!(current.score(), dec!(100));
    assert_eq!(current.decision(), Decision::Approved);

    // Reason ordering follows the criteria table and is exhaustive.
    assert_eq!(
        legacy.reasons()[0].description,
        "Purpose of Loan Clearly Defined"
    );
    assert!(legacy
        .reasons()
        .iter()
        .all(|r| r.status != ReasonStatus::Info));
}

/// Degrading one document drops exactly its weight and, near the
/// threshold, the decision.
#[test]
fn dropping_a_document_drops_its_weight() {
    let complete = generate_complete_application(LoanProduct::SalaryBacked);
    let policy = PolicyConfig::legacy();

    let full = AppraisalEngine::appraise(LoanProduct::SalaryBacked, &complete, &policy);
    assert_eq!(full.score(), dec!(100));

    let degraded = complete.clone().with_flag("irrevocable_salary_transfer_document", false);
    let partial = AppraisalEngine::appraise(LoanProduct::SalaryBacked, &degraded, &policy);
    assert_eq!(partial.score(), dec!(80));
    assert_eq!(partial.decision(), Decision::NeedsReview);
}

/// Every product's complete application reaches its table ceiling and
/// approves under the current revision.
#[test]
fn complete_applications_reach_table_ceiling() {
    let policy = PolicyConfig::current();
    for product in LoanProduct::ALL {
        let input = generate_complete_application(product);
        let result = AppraisalEngine::appraise(product, &input, &policy);
        assert_eq!(
            result.score(),
            catalog::max_attainable(product),
            "{product} complete application missed its ceiling"
        );
        assert_eq!(
            result.decision(),
            Decision::Approved,
            "{product} ceiling should approve under current thresholds"
        );
        assert_eq!(
            result.reasons().len(),
            catalog::criteria_for(product).len(),
            "{product} trail must have one entry per criterion"
        );
    }
}

/// Threshold boundary behavior, per the decision policy contract.
#[test]
fn threshold_boundaries() {
    let policy = PolicyConfig::legacy();

    // Salary-backed with everything except the purpose document (5):
    // 95 lands inside the legacy review band [75, 96).
    let input = generate_complete_application(LoanProduct::SalaryBacked)
        .with_flag("loan_purpose_document", false);
    let result = AppraisalEngine::appraise(LoanProduct::SalaryBacked, &input, &policy);
    assert_eq!(result.score(), dec!(95));
    assert_eq!(result.decision(), Decision::NeedsReview);

    // Dropping the salary-transfer document instead (20): 80 is still
    // review; dropping both lands at 75, the band's closed lower edge.
    let input = generate_complete_application(LoanProduct::SalaryBacked)
        .with_flag("loan_purpose_document", false)
        .with_flag("irrevocable_salary_transfer_document", false);
    let result = AppraisalEngine::appraise(LoanProduct::SalaryBacked, &input, &policy);
    assert_eq!(result.score(), dec!(75));
    assert_eq!(result.decision(), Decision::NeedsReview);

    // One point below the band declines.
    let input = generate_complete_application(LoanProduct::WithinSavings)
        .with_flag("loan_purpose_document", false)
        .with_flag("loan_amount_blocked_in_savings", false);
    let result = AppraisalEngine::appraise(LoanProduct::WithinSavings, &input, &policy);
    assert_eq!(result.score(), dec!(60));
    assert_eq!(result.decision(), Decision::Declined);
}

/// Container has no review band: the same mid-band score that routes
/// other products to the board is a hard decline here.
#[test]
fn container_mid_band_score_declines() {
    let policy = PolicyConfig::legacy();

    // Complete minus the bill of lading (25): 75 — inside the band.
    let input = generate_complete_application(LoanProduct::Container)
        .with_flag("bill_of_lading_document", false);
    let result = AppraisalEngine::appraise(LoanProduct::Container, &input, &policy);
    assert_eq!(result.score(), dec!(75));
    assert_eq!(result.decision(), Decision::Declined);

    // The same gap on daily-savings (surety bond, 20) reviews instead.
    let input = generate_complete_application(LoanProduct::DailySavings)
        .with_flag("valid_surety_bond_document", false);
    let result = AppraisalEngine::appraise(LoanProduct::DailySavings, &input, &policy);
    assert_eq!(result.score(), dec!(80));
    assert_eq!(result.decision(), Decision::NeedsReview);
}

/// Zero declared income: affordability criteria report "cannot assess"
/// with zero points; nothing panics and metrics stay defined.
#[test]
fn zero_income_boundary() {
    let input = generate_complete_application(LoanProduct::Express)
        .with_number("borrower_gross_monthly_income", Decimal::ZERO);
    let result =
        AppraisalEngine::appraise(LoanProduct::Express, &input, &PolicyConfig::current());

    // The DTI criterion's 10 points are unreachable: 100 - 10.
    assert_eq!(result.score(), dec!(90));
    assert!(result
        .reasons()
        .iter()
        .any(|r| r.status == ReasonStatus::NotMet && r.description.contains("cannot assess")));
    assert!(result.metrics().dti_percent.is_none());
    assert!(result.metrics().loan_to_annual_income.is_none());
}

/// The amortization figures the metrics are built on.
#[test]
fn amortization_reference_values() {
    assert_eq!(
        finance::monthly_payment(dec!(1_000_000), dec!(12), 5),
        dec!(22_244.45)
    );
    assert_eq!(
        finance::monthly_payment(dec!(1_200_000), dec!(0), 10),
        dec!(10_000.00)
    );
}

/// JSON round trip of a full result preserves everything, including
/// reason order.
#[test]
fn appraisal_result_json_round_trip() {
    let input = generate_complete_application(LoanProduct::Agricultural)
        .with_flag("has_authorization_of_usage", false);
    let result =
        AppraisalEngine::appraise(LoanProduct::Agricultural, &input, &PolicyConfig::legacy());

    let json = serde_json::to_string_pretty(&result).unwrap();
    let back: AppraisalResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["product_code"], "agricultural");
    assert!(value.get("score").is_some());
    assert!(value.get("reasons").is_some());
    assert_eq!(
        value["reasons"].as_array().unwrap().len(),
        catalog::criteria_for(LoanProduct::Agricultural).len()
    );
}

/// Unknown product codes degrade to a needs-review result instead of
/// failing the request.
#[test]
fn unknown_product_code_degrades_gracefully() {
    let result = AppraisalEngine::appraise_code(
        "microleasing",
        &ApplicationInput::new(),
        &PolicyConfig::current(),
    );
    assert_eq!(result.product_code(), "microleasing");
    assert_eq!(result.decision(), Decision::NeedsReview);
    assert_eq!(result.score(), Decimal::ZERO);
    assert!(result.reasons()[0].description.contains("not implemented"));
}

/// Determinism across repeated runs: serialized results are
/// byte-identical.
#[test]
fn repeated_appraisals_are_byte_identical() {
    let input = generate_complete_application(LoanProduct::RealEstate)
        .with_flag("land_title_in_borrowers_name", false);
    let policy = PolicyConfig::legacy();

    let first = AppraisalEngine::appraise(LoanProduct::RealEstate, &input, &policy);
    let second = AppraisalEngine::appraise(LoanProduct::RealEstate, &input, &policy);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
