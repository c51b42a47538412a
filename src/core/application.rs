use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single declared value in a loan application.
///
/// The caller assembles these from whatever source it owns (form
/// submission, API payload, stored record). The engine only cares that
/// the named fields carry a type consistent with the product's criteria
/// table.
///
/// Serialized as a bare JSON scalar, so caller payloads map directly:
/// booleans become flags, numbers become decimal amounts, ISO dates
/// become dates, and everything else is free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A system-verified or document-presence check.
    Flag(bool),
    /// A monetary amount, rate, or count. No implied scaling.
    Number(Decimal),
    /// A calendar date (e.g. date of loan, date of birth).
    Date(NaiveDate),
    /// Free text (identity number, address, stated purpose, ...).
    Text(String),
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

impl From<Decimal> for FieldValue {
    fn from(v: Decimal) -> Self {
        Self::Number(v)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// One applicant's declared facts and attachments for one product.
///
/// A flat mapping from field name to value. This is a value object with
/// no persisted identity: the caller constructs it fresh per appraisal
/// call and discards it afterwards. Absent fields are legal everywhere —
/// the engine treats absence as "not met" or "not provided", never as an
/// error.
///
/// # Examples
///
/// ```
/// use appraisal_engine::core::application::ApplicationInput;
/// use rust_decimal_macros::dec;
///
/// let input = ApplicationInput::new()
///     .with_number("loan_amount", dec!(5_000_000))
///     .with_flag("no_active_default", true)
///     .with_text("profession", "Trader");
///
/// assert_eq!(input.number("loan_amount"), Some(dec!(5_000_000)));
/// assert!(input.flag("no_active_default"));
/// assert!(!input.flag("loan_amount_blocked_in_savings"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationInput {
    // BTreeMap keeps serialization order stable, which keeps appraisal
    // results byte-identical across runs.
    fields: BTreeMap<String, FieldValue>,
}

impl ApplicationInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value under the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn with_number(mut self, name: impl Into<String>, value: Decimal) -> Self {
        self.set(name, value);
        self
    }

    pub fn with_flag(mut self, name: impl Into<String>, value: bool) -> Self {
        self.set(name, value);
        self
    }

    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value.into());
        self
    }

    pub fn with_date(mut self, name: impl Into<String>, value: NaiveDate) -> Self {
        self.set(name, value);
        self
    }

    // --- Accessors ---

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Numeric value of a field, if present and numeric.
    pub fn number(&self, name: &str) -> Option<Decimal> {
        match self.fields.get(name) {
            Some(FieldValue::Number(v)) => Some(*v),
            _ => None,
        }
    }

    /// Numeric value of a field, defaulting to zero when absent.
    pub fn number_or_zero(&self, name: &str) -> Decimal {
        self.number(name).unwrap_or(Decimal::ZERO)
    }

    /// Boolean flag value; absent or non-flag fields read as `false`.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.fields.get(name), Some(FieldValue::Flag(true)))
    }

    /// Text value of a field, if present and textual.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(FieldValue::Text(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        match self.fields.get(name) {
            Some(FieldValue::Date(v)) => Some(*v),
            _ => None,
        }
    }

    /// True when the field holds text that is non-blank after trimming.
    pub fn has_text(&self, name: &str) -> bool {
        self.text(name).is_some_and(|t| !t.trim().is_empty())
    }

    /// Length of the trimmed text under `name`, zero when absent.
    pub fn text_len(&self, name: &str) -> usize {
        self.text(name).map_or(0, |t| t.trim().chars().count())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in stable (name) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, FieldValue)> for ApplicationInput {
    fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_absent_flag_reads_false() {
        let input = ApplicationInput::new();
        assert!(!input.flag("no_existing_npl"));
    }

    #[test]
    fn test_number_accessors() {
        let input = ApplicationInput::new().with_number("loan_amount", dec!(250_000.50));
        assert_eq!(input.number("loan_amount"), Some(dec!(250_000.50)));
        assert_eq!(input.number_or_zero("missing"), Decimal::ZERO);
    }

    #[test]
    fn test_blank_text_is_not_present() {
        let input = ApplicationInput::new()
            .with_text("profession", "   ")
            .with_text("current_address", "Commercial Avenue");
        assert!(!input.has_text("profession"));
        assert!(input.has_text("current_address"));
        assert!(!input.has_text("place_of_birth"));
    }

    #[test]
    fn test_text_len_trims() {
        let input = ApplicationInput::new().with_text("loan_purpose", "  expand shop  ");
        assert_eq!(input.text_len("loan_purpose"), 11);
        assert_eq!(input.text_len("missing"), 0);
    }

    #[test]
    fn test_set_replaces() {
        let mut input = ApplicationInput::new().with_flag("no_active_default", false);
        input.set("no_active_default", true);
        assert!(input.flag("no_active_default"));
    }

    #[test]
    fn test_json_scalars_map_onto_field_values() {
        let json = r#"{
            "loan_amount": "1500000",
            "no_active_default": true,
            "profession": "Farmer",
            "date_of_loan": "2024-03-15"
        }"#;
        let input: ApplicationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.number("loan_amount"), Some(dec!(1_500_000)));
        assert!(input.flag("no_active_default"));
        assert_eq!(input.text("profession"), Some("Farmer"));
        assert!(input.date("date_of_loan").is_some());
    }

    #[test]
    fn test_round_trip_is_stable() {
        let input = ApplicationInput::new()
            .with_number("loan_amount", dec!(1000))
            .with_flag("no_active_default", true)
            .with_text("profession", "Tailor");
        let json = serde_json::to_string(&input).unwrap();
        let back: ApplicationInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, back);
    }
}
