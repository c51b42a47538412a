//! Pure financial arithmetic. No dependencies on the rest of the crate.

pub mod annuity;
pub mod ratios;

pub use annuity::monthly_payment;
pub use ratios::{dti_percent, loan_to_income_ratio, net_monthly_income};
