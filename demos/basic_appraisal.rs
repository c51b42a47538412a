//! Basic appraisal example.
//!
//! Scores one mortgage application under both threshold revisions and
//! prints the audit trail.

use appraisal_engine::prelude::*;
use rust_decimal_macros::dec;

fn main() {
    println!("╔═══════════════════════════════════════════════╗");
    println!("║  appraisal-engine: Basic Appraisal Example    ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    let input = ApplicationInput::new()
        .with_number("loan_amount", dec!(20_000_000))
        .with_number("annual_interest_rate_percent", dec!(12))
        .with_number("loan_term_years", dec!(5))
        .with_number("borrower_gross_monthly_income", dec!(2_500_000))
        .with_number("existing_monthly_debt_payments", dec!(100_000))
        // KYC
        .with_text("identity_card_number", "ID-778-104-220")
        .with_text("place_of_birth", "Limbe")
        .with_text("current_address", "Mile 4, Limbe")
        .with_text("marital_status", "Married")
        .with_number("duration_with_mfi_years", dec!(6))
        .with_number("num_loans_other_mfi", dec!(0))
        .with_text("profession", "Fishmonger")
        // Mortgage criteria — note the missing power of attorney.
        .with_flag("legal_mortgage_agreement_document", true)
        .with_flag("land_title_document", true)
        .with_flag("loan_purpose_document", true)
        .with_flag("supporting_documents", true)
        .with_flag("no_existing_npl", true);

    println!("━━━ Legacy thresholds (approve 96, review 75) ━━━\n");
    let legacy = AppraisalEngine::appraise(LoanProduct::Mortgage, &input, &PolicyConfig::legacy());
    println!("{}", legacy);

    println!("━━━ Current thresholds (approve 70) ━━━\n");
    let current =
        AppraisalEngine::appraise(LoanProduct::Mortgage, &input, &PolicyConfig::current());
    println!("Score:    {}", current.score());
    println!("Decision: {}", current.decision());
}
