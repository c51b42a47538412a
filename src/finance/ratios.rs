use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Flat net-of-deductions heuristic applied uniformly across products.
const NET_INCOME_FACTOR: Decimal = dec!(0.8);

/// Debt-to-income as a percentage, rounded to 2 decimal places.
///
/// `None` when the income base is non-positive: the caller must treat
/// that as "cannot assess affordability", not as a numeric ratio.
pub fn dti_percent(monthly_income: Decimal, total_monthly_debt: Decimal) -> Option<Decimal> {
    if monthly_income <= Decimal::ZERO {
        return None;
    }
    Some((total_monthly_debt / monthly_income * Decimal::ONE_HUNDRED).round_dp(2))
}

/// Requested loan as a multiple of annual income, rounded to 2 decimal
/// places. Same non-positive-income guard as [`dti_percent`].
pub fn loan_to_income_ratio(loan_amount: Decimal, annual_income: Decimal) -> Option<Decimal> {
    if annual_income <= Decimal::ZERO {
        return None;
    }
    Some((loan_amount / annual_income).round_dp(2))
}

/// Estimated net monthly income: flat 80% of gross.
pub fn net_monthly_income(gross_monthly_income: Decimal) -> Decimal {
    gross_monthly_income * NET_INCOME_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dti_basic() {
        assert_eq!(dti_percent(dec!(400_000), dec!(100_000)), Some(dec!(25.00)));
    }

    #[test]
    fn test_dti_rounds_to_two_places() {
        // 100 / 300 = 33.333...%
        assert_eq!(dti_percent(dec!(300), dec!(100)), Some(dec!(33.33)));
    }

    #[test]
    fn test_dti_zero_income_is_none() {
        assert_eq!(dti_percent(Decimal::ZERO, dec!(100_000)), None);
        assert_eq!(dti_percent(dec!(-5), dec!(100_000)), None);
    }

    #[test]
    fn test_loan_to_income() {
        assert_eq!(
            loan_to_income_ratio(dec!(9_000_000), dec!(3_600_000)),
            Some(dec!(2.50))
        );
        assert_eq!(loan_to_income_ratio(dec!(9_000_000), Decimal::ZERO), None);
    }

    #[test]
    fn test_net_income_factor() {
        assert_eq!(net_monthly_income(dec!(500_000)), dec!(400_000.0));
    }
}
