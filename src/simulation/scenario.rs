//! Random application fixtures.
//!
//! Generates complete or partially-degraded applications for a product,
//! used by the stress benches and the CLI `generate` command.

use crate::core::application::ApplicationInput;
use crate::core::product::LoanProduct;
use crate::engine::catalog;
use crate::engine::criteria::{
    Requirement, ANNUAL_INTEREST_RATE_PERCENT, EXISTING_MONTHLY_DEBT, GROSS_MONTHLY_INCOME,
    LOAN_AMOUNT, LOAN_TERM_YEARS,
};
use crate::engine::kyc::KYC_FIELDS;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Configuration for generating random applications.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// Probability that any individual criterion field is satisfied.
    pub fill_probability: f64,
    /// Minimum requested loan amount.
    pub min_amount: Decimal,
    /// Maximum requested loan amount.
    pub max_amount: Decimal,
    /// Maximum loan term in years.
    pub max_term_years: u32,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            fill_probability: 0.8,
            min_amount: Decimal::from(100_000),
            max_amount: Decimal::from(50_000_000),
            max_term_years: 10,
        }
    }
}

/// Generate one random application for a product.
///
/// With `fill_probability` of 1.0 every criterion field is satisfied;
/// lower values randomly degrade the application.
pub fn generate_random_application(
    product: LoanProduct,
    config: &ScenarioConfig,
) -> ApplicationInput {
    let mut rng = rand::thread_rng();
    let mut input = ApplicationInput::new();

    let min: f64 = config.min_amount.to_string().parse().unwrap_or(100_000.0);
    let max: f64 = config.max_amount.to_string().parse().unwrap_or(50_000_000.0);
    let amount = Decimal::from_f64_retain(rng.gen_range(min..max))
        .unwrap_or(config.min_amount)
        .round_dp(2);

    input.set(LOAN_AMOUNT, amount);
    input.set(
        ANNUAL_INTEREST_RATE_PERCENT,
        Decimal::from(rng.gen_range(5u32..24)),
    );
    input.set(
        LOAN_TERM_YEARS,
        Decimal::from(rng.gen_range(1..=config.max_term_years)),
    );
    input.set(
        GROSS_MONTHLY_INCOME,
        Decimal::from(rng.gen_range(150_000u64..5_000_000)),
    );
    input.set(
        EXISTING_MONTHLY_DEBT,
        Decimal::from(rng.gen_range(0u64..300_000)),
    );

    if rng.gen_bool(config.fill_probability) {
        fill_kyc(&mut input);
    }

    for item in catalog::criteria_for(product) {
        if !rng.gen_bool(config.fill_probability) {
            continue;
        }
        match item.requirement {
            Requirement::Document(field) | Requirement::SystemCheck(field) => {
                input.set(field, true);
            }
            Requirement::PurposeStated { field, .. } => {
                input.set(field, "Working capital for an established retail stall");
            }
            // Ceilings and ratios are driven by the base numeric fields.
            _ => {}
        }
    }

    input
}

/// Generate one application with every criterion field satisfied.
pub fn generate_complete_application(product: LoanProduct) -> ApplicationInput {
    let mut input = ApplicationInput::new()
        .with_number(LOAN_AMOUNT, dec!(2_000_000))
        .with_number(ANNUAL_INTEREST_RATE_PERCENT, dec!(12))
        .with_number(LOAN_TERM_YEARS, dec!(2))
        .with_number(GROSS_MONTHLY_INCOME, dec!(1_500_000))
        .with_number(EXISTING_MONTHLY_DEBT, dec!(50_000));
    fill_kyc(&mut input);
    for item in catalog::criteria_for(product) {
        match item.requirement {
            Requirement::Document(field) | Requirement::SystemCheck(field) => {
                input.set(field, true);
            }
            Requirement::PurposeStated { field, .. } => {
                input.set(field, "Working capital for an established retail stall");
            }
            _ => {}
        }
    }
    input
}

fn fill_kyc(input: &mut ApplicationInput) {
    for field in KYC_FIELDS {
        match field {
            "duration_with_mfi_years" => input.set(field, dec!(3)),
            "num_loans_other_mfi" => input.set(field, dec!(1)),
            _ => input.set(field, format!("sample {}", field.replace('_', " "))),
        }
    }
}
