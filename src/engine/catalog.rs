//! The per-product criteria tables.
//!
//! Each table is policy data: an ordered list of (scoring, description,
//! predicate) rows interpreted by the generic evaluation routine in
//! [`crate::engine::appraisal`]. Weights are authored per union policy;
//! a few products deliberately top out below 100.

use crate::core::product::LoanProduct;
use crate::engine::criteria::{CriteriaItem, IncomeBase, Requirement};
use crate::policy::thresholds::ReviewBand;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The fixed, ordered criteria table for a product.
pub fn criteria_for(product: LoanProduct) -> Vec<CriteriaItem> {
    match product {
        LoanProduct::Mortgage => mortgage(),
        LoanProduct::SalaryBacked => salary_backed(),
        LoanProduct::WithinSavings => within_savings(),
        LoanProduct::DailySavings => daily_savings(),
        LoanProduct::StandingOrder => standing_order(),
        LoanProduct::RealEstate => real_estate(),
        LoanProduct::Container => container(),
        LoanProduct::Agricultural => agricultural(),
        LoanProduct::Express => express(),
        LoanProduct::Business => business(),
    }
}

/// Whether the product routes mid-band scores to the credit board.
/// Container loans are the exception: below approval is a hard decline.
pub fn review_band(product: LoanProduct) -> ReviewBand {
    match product {
        LoanProduct::Container => ReviewBand::None,
        _ => ReviewBand::Standard,
    }
}

/// Highest score the product's table can award, capped at 100.
pub fn max_attainable(product: LoanProduct) -> Decimal {
    let total: Decimal = criteria_for(product)
        .iter()
        .map(|item| item.scoring.weight())
        .sum();
    total.min(Decimal::ONE_HUNDRED)
}

fn mortgage() -> Vec<CriteriaItem> {
    vec![
        CriteriaItem::weighted(
            dec!(30),
            "Legal Mortgage Agreement on Land Title",
            Requirement::Document("legal_mortgage_agreement_document"),
        ),
        CriteriaItem::weighted(
            dec!(15),
            "Land Title in Borrower's Name",
            Requirement::Document("land_title_document"),
        ),
        CriteriaItem::weighted(
            dec!(10),
            "Power of Attorney (if applicable)",
            Requirement::Document("power_of_attorney_document"),
        ),
        CriteriaItem::weighted(
            dec!(5),
            "Purpose of Loan Clearly Stated and Valid",
            Requirement::Document("loan_purpose_document"),
        ),
        CriteriaItem::weighted(
            dec!(5),
            "Supporting Documents Uploaded (Site Plan, Quotes)",
            Requirement::Document("supporting_documents"),
        ),
        CriteriaItem::weighted(
            dec!(10),
            "Full KYC (ID, Place of Birth, Address, Profession)",
            Requirement::FullKyc,
        ),
        CriteriaItem::weighted(
            dec!(5),
            "No Existing Non-Performing Loan",
            Requirement::SystemCheck("no_existing_npl"),
        ),
        CriteriaItem::weighted(
            dec!(5),
            "Loan Amount Within Union Policy Cap",
            Requirement::AmountWithinCap {
                cap: dec!(500_000_000),
            },
        ),
        CriteriaItem::weighted(
            dec!(5),
            "Loan Duration Within Union Policy Maximum",
            Requirement::TermWithinYears { max_years: 10 },
        ),
        CriteriaItem::weighted(
            dec!(10),
            "Monthly Repayment Within 40% of Estimated Net Income",
            Requirement::DtiWithin {
                max_percent: dec!(40),
                base: IncomeBase::Net,
            },
        ),
    ]
}

fn salary_backed() -> Vec<CriteriaItem> {
    vec![
        CriteriaItem::weighted(
            dec!(5),
            "Purpose of Loan Clearly Defined",
            Requirement::Document("loan_purpose_document"),
        ),
        CriteriaItem::weighted(
            dec!(15),
            "Copy of Effective Service",
            Requirement::Document("copy_of_effective_service_document"),
        ),
        CriteriaItem::weighted(
            dec!(20),
            "Irrevocable Salary Transfer Document",
            Requirement::Document("irrevocable_salary_transfer_document"),
        ),
        CriteriaItem::weighted(
            dec!(10),
            "Full KYC (ID, Place of Birth, Address, Profession)",
            Requirement::FullKyc,
        ),
        CriteriaItem::weighted(
            dec!(20),
            "Salary Passing Through Union for at Least 3 Months",
            Requirement::SystemCheck("salary_passing_union_ge_3_months"),
        ),
        CriteriaItem::weighted(
            dec!(15),
            "Savings of at Least 10% of Loan Requested",
            Requirement::SystemCheck("savings_ge_1_10_loan"),
        ),
        CriteriaItem::weighted(
            dec!(15),
            "Loan Amount Within 10M Union Policy Cap",
            Requirement::AmountWithinCap {
                cap: dec!(10_000_000),
            },
        ),
    ]
}

fn within_savings() -> Vec<CriteriaItem> {
    vec![
        CriteriaItem::weighted(
            dec!(5),
            "Purpose of Loan Clearly Defined",
            Requirement::Document("loan_purpose_document"),
        ),
        CriteriaItem::weighted(
            dec!(10),
            "Full KYC (ID, Place of Birth, Address, Profession)",
            Requirement::FullKyc,
        ),
        CriteriaItem::weighted(
            dec!(45),
            "Savings Covers Loan Plus Interest for Entire Tenure",
            Requirement::SystemCheck("savings_covers_loan_plus_interest"),
        ),
        CriteriaItem::weighted(
            dec!(35),
            "Loan Amount Blocked in Savings Account",
            Requirement::SystemCheck("loan_amount_blocked_in_savings"),
        ),
        CriteriaItem::weighted(
            dec!(5),
            "No Active Default or Delinquent Loan",
            Requirement::SystemCheck("no_active_default"),
        ),
    ]
}

fn daily_savings() -> Vec<CriteriaItem> {
    vec![
        CriteriaItem::weighted(
            dec!(5),
            "Purpose of Loan Clearly Defined",
            Requirement::Document("loan_purpose_document"),
        ),
        CriteriaItem::weighted(
            dec!(15),
            "Signed Deduction Agreement from Daily Savings",
            Requirement::Document("signed_deduction_agreement_document"),
        ),
        CriteriaItem::weighted(
            dec!(20),
            "Signed Surety Bond with Valid Surety",
            Requirement::Document("valid_surety_bond_document"),
        ),
        CriteriaItem::weighted(
            dec!(10),
            "Full KYC (ID, Place of Birth, Address, Profession)",
            Requirement::FullKyc,
        ),
        CriteriaItem::weighted(
            dec!(20),
            "Daily Savings Active for at Least 6 Months",
            Requirement::SystemCheck("daily_savings_active_ge_6_months"),
        ),
        CriteriaItem::weighted(
            dec!(15),
            "Positive Loan Repayment History",
            Requirement::SystemCheck("positive_loan_repayment_history"),
        ),
        CriteriaItem::weighted(
            dec!(15),
            "Savings Balance of at Least 20% of Loan Requested",
            Requirement::SystemCheck("savings_balance_ge_1_5_loan"),
        ),
    ]
}

fn standing_order() -> Vec<CriteriaItem> {
    vec![
        CriteriaItem::weighted(
            dec!(5),
            "Purpose of Loan Clearly Stated and Valid",
            Requirement::Document("loan_purpose_document"),
        ),
        CriteriaItem::weighted(
            dec!(15),
            "Full KYC (ID, Place of Birth, Address, Profession)",
            Requirement::FullKyc,
        ),
        CriteriaItem::weighted(
            dec!(30),
            "Standing Order Active for at Least 3 Months",
            Requirement::SystemCheck("standing_order_active_ge_3_months"),
        ),
        CriteriaItem::weighted(
            dec!(20),
            "Loan Duration of at Most 1 Year (Policy Restriction)",
            Requirement::SystemCheck("loan_duration_le_1_year"),
        ),
        CriteriaItem::weighted(
            dec!(20),
            "Savings Balance of at Least 20% of Loan Amount",
            Requirement::SystemCheck("savings_balance_ge_1_5_loan"),
        ),
        CriteriaItem::weighted(
            dec!(10),
            "No Existing Default or Delinquency",
            Requirement::SystemCheck("no_existing_default_or_delinquency"),
        ),
    ]
}

// Maximum attainable score is 90 for this product.
fn real_estate() -> Vec<CriteriaItem> {
    vec![
        CriteriaItem::weighted(
            dec!(25),
            "Signed Legal Mortgage Agreement",
            Requirement::Document("legal_mortgage_agreement_document"),
        ),
        CriteriaItem::weighted(
            dec!(20),
            "Land Title Registered in Borrower's Name",
            Requirement::SystemCheck("land_title_in_borrowers_name"),
        ),
        CriteriaItem::weighted(
            dec!(15),
            "Valid Proof of Source of Income",
            Requirement::SystemCheck("valid_proof_of_source_of_income"),
        ),
        CriteriaItem::weighted(
            dec!(10),
            "Full KYC (ID, Place of Birth, Address, Profession)",
            Requirement::FullKyc,
        ),
        CriteriaItem::informational(
            "Loan Duration of at Least 10 Years (Product Floor)",
            Requirement::SystemCheck("loan_duration_ge_10_years"),
        ),
        CriteriaItem::informational(
            "Loan Amount at Most 10% of Paid-Up Capital",
            Requirement::SystemCheck("loan_amount_le_10_percent_paid_up_capital"),
        ),
        CriteriaItem::weighted(
            dec!(10),
            "Debt Service Within 45% of Gross Monthly Income",
            Requirement::DtiWithin {
                max_percent: dec!(45),
                base: IncomeBase::Gross,
            },
        ),
        CriteriaItem::weighted(
            dec!(10),
            "Loan at Most 5x Annual Income",
            Requirement::LoanToIncomeWithin {
                max_multiple: dec!(5),
            },
        ),
    ]
}

fn container() -> Vec<CriteriaItem> {
    vec![
        CriteriaItem::weighted(
            dec!(25),
            "Copy of Bill of Lading",
            Requirement::Document("bill_of_lading_document"),
        ),
        CriteriaItem::weighted(
            dec!(20),
            "Customs Clearance Plan Document",
            Requirement::Document("custom_clearance_plan_document"),
        ),
        CriteriaItem::weighted(
            dec!(20),
            "Savings Balance of at Least 20% of Loan Requested",
            Requirement::SystemCheck("savings_balance_ge_1_5_loan"),
        ),
        CriteriaItem::weighted(
            dec!(15),
            "Valid Proof of Source of Income",
            Requirement::SystemCheck("valid_proof_of_source_of_income"),
        ),
        CriteriaItem::weighted(
            dec!(10),
            "Full KYC (ID, Place of Birth, Address, Profession)",
            Requirement::FullKyc,
        ),
        CriteriaItem::weighted(
            dec!(5),
            "Purpose of Loan Stated",
            Requirement::PurposeStated {
                field: "loan_purpose",
                min_chars: 1,
            },
        ),
        CriteriaItem::weighted(
            dec!(5),
            "Loan at Most 3x Annual Income",
            Requirement::LoanToIncomeWithin {
                max_multiple: dec!(3),
            },
        ),
    ]
}

// Maximum attainable score is 95 for this product.
fn agricultural() -> Vec<CriteriaItem> {
    vec![
        CriteriaItem::weighted(
            dec!(20),
            "Total Cost Estimate of Products and Inputs",
            Requirement::Document("total_cost_estimate_document"),
        ),
        CriteriaItem::weighted(
            dec!(15),
            "Agricultural Land Is Borrower's Personal Property",
            Requirement::SystemCheck("is_land_personal_belonging"),
        ),
        CriteriaItem::weighted(
            dec!(10),
            "Authorization of Land Usage Confirmed",
            Requirement::SystemCheck("has_authorization_of_usage"),
        ),
        CriteriaItem::weighted(
            dec!(15),
            "Savings Balance of at Least 20% of Loan Requested",
            Requirement::SystemCheck("savings_balance_ge_1_5_loan"),
        ),
        CriteriaItem::weighted(
            dec!(10),
            "Valid Proof of Non-Farm Source of Income",
            Requirement::SystemCheck("valid_proof_of_source_of_income"),
        ),
        CriteriaItem::weighted(
            dec!(10),
            "Full KYC (ID, Place of Birth, Address, Profession)",
            Requirement::FullKyc,
        ),
        CriteriaItem::weighted(
            dec!(5),
            "Loan Purpose Category Specified",
            Requirement::PurposeStated {
                field: "loan_purpose_category",
                min_chars: 1,
            },
        ),
        CriteriaItem::weighted(
            dec!(10),
            "Debt Service Within 50% of Estimated Net Income",
            Requirement::DtiWithin {
                max_percent: dec!(50),
                base: IncomeBase::Net,
            },
        ),
    ]
}

fn express() -> Vec<CriteriaItem> {
    vec![
        CriteriaItem::weighted(
            dec!(25),
            "Salary Deduction at Source or Standing Order for Repayment",
            Requirement::SystemCheck("salary_deducted_at_source_or_standing_order"),
        ),
        CriteriaItem::weighted(
            dec!(20),
            "Effective Service Available",
            Requirement::SystemCheck("effective_service_available"),
        ),
        CriteriaItem::weighted(
            dec!(15),
            "Savings Balance of at Least 10% of Loan Requested",
            Requirement::SystemCheck("savings_balance_ge_1_10_loan"),
        ),
        CriteriaItem::weighted(
            dec!(15),
            "No Existing Delinquent Loan",
            Requirement::SystemCheck("no_existing_delinquent_loan"),
        ),
        CriteriaItem::weighted(
            dec!(5),
            "Full KYC (ID, Place of Birth, Address, Profession)",
            Requirement::FullKyc,
        ),
        CriteriaItem::weighted(
            dec!(10),
            "Purpose of Loan Clearly Defined and Valid",
            Requirement::PurposeStated {
                field: "loan_purpose",
                min_chars: 20,
            },
        ),
        CriteriaItem::weighted(
            dec!(10),
            "Debt Service Within 35% of Estimated Net Income",
            Requirement::DtiWithin {
                max_percent: dec!(35),
                base: IncomeBase::Net,
            },
        ),
    ]
}

fn business() -> Vec<CriteriaItem> {
    vec![
        CriteriaItem::weighted(
            dec!(10),
            "Business Registration Certificate",
            Requirement::Document("business_registration_document"),
        ),
        CriteriaItem::weighted(
            dec!(15),
            "Last 3 Years Financial Statements",
            Requirement::Document("financial_statements_document"),
        ),
        CriteriaItem::weighted(
            dec!(15),
            "Detailed Business Plan",
            Requirement::Document("business_plan_document"),
        ),
        CriteriaItem::weighted(
            dec!(15),
            "Business Operational for at Least 3 Years",
            Requirement::SystemCheck("business_operational_min_3_years"),
        ),
        CriteriaItem::weighted(
            dec!(15),
            "Adequate Collateral Independently Assessed",
            Requirement::SystemCheck("adequate_collateral_assessed"),
        ),
        CriteriaItem::weighted(
            dec!(10),
            "Savings Balance of at Least 20% of Loan Requested",
            Requirement::SystemCheck("savings_balance_ge_20_percent_loan"),
        ),
        CriteriaItem::weighted(
            dec!(10),
            "Full KYC (ID, Place of Birth, Address, Profession)",
            Requirement::FullKyc,
        ),
        CriteriaItem::informational(
            "Loan Amount Within Product Cap",
            Requirement::AmountWithinCap {
                cap: dec!(50_000_000),
            },
        ),
        CriteriaItem::weighted(
            dec!(5),
            "Purpose of Loan Clearly Defined and Valid",
            Requirement::PurposeStated {
                field: "loan_purpose",
                min_chars: 20,
            },
        ),
        CriteriaItem::weighted(
            dec!(5),
            "Loan at Most 2x Annual Income",
            Requirement::LoanToIncomeWithin {
                max_multiple: dec!(2),
            },
        ),
    ]
}
