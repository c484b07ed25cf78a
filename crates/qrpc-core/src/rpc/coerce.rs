//! Checked conversions from dynamic RPC results into wrapper return types.

use bitcoin::Amount;
use serde_json::Value;

use crate::error::CoreError;

use super::codec::value_kind;

fn mismatch(method: &'static str, expected: &'static str, found: &Value) -> CoreError {
    CoreError::TypeMismatch {
        method,
        expected,
        found: value_kind(found).to_owned(),
    }
}

pub(super) fn into_string(method: &'static str, value: Value) -> Result<String, CoreError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(mismatch(method, "string", &other)),
    }
}

pub(super) fn into_string_list(
    method: &'static str,
    value: Value,
) -> Result<Vec<String>, CoreError> {
    let Value::Array(items) = value else {
        return Err(mismatch(method, "array of strings", &value));
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(s),
            other => Err(mismatch(method, "array of strings", &other)),
        })
        .collect()
}

pub(super) fn into_u64(method: &'static str, value: Value) -> Result<u64, CoreError> {
    value
        .as_u64()
        .ok_or_else(|| mismatch(method, "non-negative integer", &value))
}

/// Interpret a JSON number as a BTC-denominated amount.
pub(super) fn into_btc_amount(method: &'static str, value: Value) -> Result<Amount, CoreError> {
    let btc = value
        .as_f64()
        .ok_or_else(|| mismatch(method, "BTC amount", &value))?;
    Amount::from_btc(btc).map_err(|e| CoreError::TypeMismatch {
        method,
        expected: "BTC amount",
        found: format!("{btc} ({e})"),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn string_accepts_string_only() {
        assert_eq!(into_string("m", json!("abc")).expect("string"), "abc");
        let err = into_string("m", json!(12)).expect_err("number is not a string");
        assert!(matches!(err, CoreError::TypeMismatch { ref found, .. } if found == "number"));
    }

    #[test]
    fn string_list_checks_every_element() {
        assert_eq!(
            into_string_list("m", json!(["a", "b"])).expect("list"),
            vec!["a".to_owned(), "b".to_owned()]
        );
        assert!(into_string_list("m", json!([])).expect("empty list").is_empty());
        assert!(into_string_list("m", json!(["a", 1])).is_err());
        assert!(into_string_list("m", json!("a")).is_err());
    }

    #[test]
    fn u64_rejects_negative_and_fractional() {
        assert_eq!(into_u64("m", json!(1234)).expect("count"), 1234);
        assert!(into_u64("m", json!(-1)).is_err());
        assert!(into_u64("m", json!(1.5)).is_err());
        assert!(into_u64("m", Value::Null).is_err());
    }

    #[test]
    fn btc_amount_parses_decimal() {
        assert_eq!(
            into_btc_amount("m", json!(21.12345678)).expect("amount"),
            Amount::from_sat(2_112_345_678)
        );
        assert_eq!(into_btc_amount("m", json!(0)).expect("zero"), Amount::ZERO);
    }

    #[test]
    fn btc_amount_rejects_negative_and_strings() {
        let err = into_btc_amount("m", json!(-1.0)).expect_err("negative amount");
        assert!(matches!(err, CoreError::TypeMismatch { .. }));
        let err = into_btc_amount("m", json!("1.0")).expect_err("string amount");
        assert!(matches!(err, CoreError::TypeMismatch { ref found, .. } if found == "string"));
    }
}
