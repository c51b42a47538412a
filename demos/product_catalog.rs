//! Walk the product catalogue: criteria counts, weight totals, and how
//! the same sparse application fares product by product.

use appraisal_engine::core::application::ApplicationInput;
use appraisal_engine::engine::catalog;
use appraisal_engine::prelude::*;
use rust_decimal_macros::dec;

fn main() {
    println!("━━━ Product catalogue ━━━\n");
    for product in LoanProduct::ALL {
        let table = catalog::criteria_for(product);
        println!(
            "{:<16} {:>2} criteria, max score {:>3}",
            product.code(),
            table.len(),
            catalog::max_attainable(product),
        );
        for item in &table {
            println!("    {:>3}  {}", item.scoring.weight(), item.description);
        }
        println!();
    }

    // A sparse application: sound financials, full KYC, no documents.
    let input = ApplicationInput::new()
        .with_number("loan_amount", dec!(1_500_000))
        .with_number("annual_interest_rate_percent", dec!(10))
        .with_number("loan_term_years", dec!(1))
        .with_number("borrower_gross_monthly_income", dec!(1_000_000))
        .with_text("identity_card_number", "ID-102-774")
        .with_text("place_of_birth", "Bafoussam")
        .with_text("current_address", "Marché A, Bafoussam")
        .with_text("marital_status", "Married")
        .with_number("duration_with_mfi_years", dec!(5))
        .with_number("num_loans_other_mfi", dec!(2))
        .with_text("profession", "Wholesaler");

    println!("━━━ Same sparse application, every product ━━━\n");
    let policy = PolicyConfig::current();
    for product in LoanProduct::ALL {
        let result = AppraisalEngine::appraise(product, &input, &policy);
        println!(
            "{:<16} score {:>5} / {:>3}  →  {}",
            product.code(),
            result.score(),
            result.max_attainable(),
            result.decision(),
        );
    }
}
