use crate::core::application::{ApplicationInput, FieldValue};

/// The biographical fields required for full applicant verification.
///
/// Shared by every product's criteria table; only the weight awarded
/// for completeness varies by product.
pub const KYC_FIELDS: [&str; 7] = [
    "identity_card_number",
    "place_of_birth",
    "current_address",
    "marital_status",
    "duration_with_mfi_years",
    "num_loans_other_mfi",
    "profession",
];

/// True when every KYC field is present and, if textual, non-blank
/// after trimming. Numeric fields (MFI tenure, other-MFI loan count)
/// are accepted even at zero — zero is a valid answer, not a gap.
pub fn is_complete(input: &ApplicationInput) -> bool {
    KYC_FIELDS.iter().all(|field| match input.get(field) {
        Some(FieldValue::Text(t)) => !t.trim().is_empty(),
        Some(FieldValue::Number(_)) => true,
        Some(FieldValue::Date(_)) => true,
        Some(FieldValue::Flag(_)) => false,
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn full_kyc() -> ApplicationInput {
        ApplicationInput::new()
            .with_text("identity_card_number", "ID-114-559-200")
            .with_text("place_of_birth", "Bamenda")
            .with_text("current_address", "Commercial Avenue, Bamenda")
            .with_text("marital_status", "Married")
            .with_number("duration_with_mfi_years", dec!(4))
            .with_number("num_loans_other_mfi", dec!(1))
            .with_text("profession", "Trader")
    }

    #[test]
    fn test_all_fields_present() {
        assert!(is_complete(&full_kyc()));
    }

    #[test]
    fn test_missing_field_fails() {
        for field in KYC_FIELDS {
            let mut input = full_kyc();
            let mut rebuilt = ApplicationInput::new();
            for (name, value) in input.iter() {
                if name != field {
                    rebuilt.set(name, value.clone());
                }
            }
            input = rebuilt;
            assert!(!is_complete(&input), "dropping {field} should fail KYC");
        }
    }

    #[test]
    fn test_blank_text_fails() {
        let input = full_kyc().with_text("profession", "  ");
        assert!(!is_complete(&input));
    }

    #[test]
    fn test_zero_numerics_are_valid() {
        let input = full_kyc()
            .with_number("duration_with_mfi_years", Decimal::ZERO)
            .with_number("num_loans_other_mfi", Decimal::ZERO);
        assert!(is_complete(&input));
    }
}
