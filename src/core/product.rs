use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors arising from product-code resolution.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("unknown loan product code '{code}'")]
    UnknownCode { code: String },
}

/// The closed enumeration of loan products the engine can appraise.
///
/// Each product maps to exactly one criteria table and one
/// decision-policy profile. Codes follow the union's application
/// records (`mortgage`, `salary_backed`, ...).
///
/// # Examples
///
/// ```
/// use appraisal_engine::core::product::LoanProduct;
///
/// let product: LoanProduct = "standing_order".parse().unwrap();
/// assert_eq!(product, LoanProduct::StandingOrder);
/// assert!("payday".parse::<LoanProduct>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanProduct {
    Mortgage,
    SalaryBacked,
    WithinSavings,
    DailySavings,
    StandingOrder,
    RealEstate,
    Container,
    Agricultural,
    Express,
    Business,
}

impl LoanProduct {
    /// All products, in catalogue order.
    pub const ALL: [LoanProduct; 10] = [
        LoanProduct::Mortgage,
        LoanProduct::SalaryBacked,
        LoanProduct::WithinSavings,
        LoanProduct::DailySavings,
        LoanProduct::StandingOrder,
        LoanProduct::RealEstate,
        LoanProduct::Container,
        LoanProduct::Agricultural,
        LoanProduct::Express,
        LoanProduct::Business,
    ];

    /// The stable wire/storage code for this product.
    pub fn code(&self) -> &'static str {
        match self {
            LoanProduct::Mortgage => "mortgage",
            LoanProduct::SalaryBacked => "salary_backed",
            LoanProduct::WithinSavings => "within_savings",
            LoanProduct::DailySavings => "daily_savings",
            LoanProduct::StandingOrder => "standing_order",
            LoanProduct::RealEstate => "real_estate",
            LoanProduct::Container => "container",
            LoanProduct::Agricultural => "agricultural",
            LoanProduct::Express => "express",
            LoanProduct::Business => "business",
        }
    }

    /// Human-readable product name for display and audit output.
    pub fn display_name(&self) -> &'static str {
        match self {
            LoanProduct::Mortgage => "Mortgage Loan",
            LoanProduct::SalaryBacked => "Salary-Backed Loan",
            LoanProduct::WithinSavings => "Loan Within Savings",
            LoanProduct::DailySavings => "Daily Savings Loan",
            LoanProduct::StandingOrder => "Standing Order Loan",
            LoanProduct::RealEstate => "Real Estate Loan",
            LoanProduct::Container => "Container Loan",
            LoanProduct::Agricultural => "Agricultural Loan",
            LoanProduct::Express => "Express Loan",
            LoanProduct::Business => "Business Loan",
        }
    }

    /// Resolve a wire code to a product.
    pub fn from_code(code: &str) -> Result<Self, ProductError> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.code() == code)
            .ok_or_else(|| ProductError::UnknownCode {
                code: code.to_string(),
            })
    }
}

impl fmt::Display for LoanProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for LoanProduct {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}
