use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

/// Months per year, as a decimal.
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Amortized monthly payment on a level-payment loan.
///
/// `annual_rate_percent` is a percent-of-100 figure (12 means 12% p.a.);
/// the term is whole years. The payment is rounded to 2 decimal places.
///
/// Conventions for degenerate inputs:
/// - zero term or non-positive principal → zero payment;
/// - zero rate → straight-line `principal / term_months`;
/// - a denominator of zero in the annuity formula (numeric edge case) →
///   straight-line fallback.
///
/// # Examples
///
/// ```
/// use appraisal_engine::finance::monthly_payment;
/// use rust_decimal_macros::dec;
///
/// // 12% p.a. over 5 years: textbook annuity value.
/// assert_eq!(monthly_payment(dec!(1_000_000), dec!(12), 5), dec!(22_244.45));
///
/// // 0% rate: straight line.
/// assert_eq!(monthly_payment(dec!(1_200_000), dec!(0), 10), dec!(10_000.00));
/// ```
pub fn monthly_payment(principal: Decimal, annual_rate_percent: Decimal, term_years: u32) -> Decimal {
    let term_months = Decimal::from(term_years) * MONTHS_PER_YEAR;
    if term_months.is_zero() || principal <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    if annual_rate_percent.is_zero() {
        return (principal / term_months).round_dp(2);
    }

    let monthly_rate = annual_rate_percent / Decimal::ONE_HUNDRED / MONTHS_PER_YEAR;
    let growth = (Decimal::ONE + monthly_rate).powi(i64::from(term_years) * 12);
    let denominator = growth - Decimal::ONE;
    if denominator.is_zero() {
        return (principal / term_months).round_dp(2);
    }

    (principal * monthly_rate * growth / denominator).round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_annuity() {
        // 1,000,000 at 12% p.a. for 5 years = 60 payments at 1%/month.
        assert_eq!(monthly_payment(dec!(1_000_000), dec!(12), 5), dec!(22_244.45));
    }

    #[test]
    fn test_zero_rate_straight_line() {
        assert_eq!(monthly_payment(dec!(1_200_000), dec!(0), 10), dec!(10_000.00));
    }

    #[test]
    fn test_zero_term_is_zero_by_convention() {
        assert_eq!(monthly_payment(dec!(1_000_000), dec!(12), 0), Decimal::ZERO);
    }

    #[test]
    fn test_zero_principal() {
        assert_eq!(monthly_payment(Decimal::ZERO, dec!(12), 5), Decimal::ZERO);
    }

    #[test]
    fn test_payment_scales_with_principal() {
        let single = monthly_payment(dec!(500_000), dec!(10), 3);
        let double = monthly_payment(dec!(1_000_000), dec!(10), 3);
        // Allow a cent of rounding drift from the independent roundings.
        assert!((double - single * dec!(2)).abs() <= dec!(0.01));
    }

    #[test]
    fn test_longer_term_lowers_payment() {
        let short = monthly_payment(dec!(1_000_000), dec!(15), 2);
        let long = monthly_payment(dec!(1_000_000), dec!(15), 8);
        assert!(long < short);
    }

    #[test]
    fn test_two_decimal_places() {
        let payment = monthly_payment(dec!(777_777), dec!(13.5), 4);
        assert_eq!(payment, payment.round_dp(2));
    }
}
