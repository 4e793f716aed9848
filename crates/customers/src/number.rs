//! Phone number field decoding.
//!
//! Clients send the phone number either as a JSON string or as a bare JSON
//! integer. Both are kept as the decimal string form; `null` becomes empty.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

/// `deserialize_with` helper for the `number` field.
pub fn string_or_integer<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawNumber>::deserialize(deserializer).map_err(|_| {
        <D::Error as serde::de::Error>::custom("number must be a string or an integer")
    })?;

    Ok(match raw {
        None => String::new(),
        Some(RawNumber::Text(s)) => s,
        Some(RawNumber::Signed(n)) => n.to_string(),
        Some(RawNumber::Unsigned(n)) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "string_or_integer")]
        number: String,
    }

    fn decode(json: &str) -> Result<String, serde_json::Error> {
        serde_json::from_str::<Holder>(json).map(|h| h.number)
    }

    #[test]
    fn accepts_strings_verbatim() {
        assert_eq!(decode(r#"{"number":"+1 555-0100"}"#).unwrap(), "+1 555-0100");
    }

    #[test]
    fn normalises_integers_to_decimal_strings() {
        assert_eq!(decode(r#"{"number":5550100}"#).unwrap(), "5550100");
        assert_eq!(decode(r#"{"number":18446744073709551615}"#).unwrap(), "18446744073709551615");
    }

    #[test]
    fn null_and_missing_become_empty() {
        assert_eq!(decode(r#"{"number":null}"#).unwrap(), "");
        assert_eq!(decode(r#"{}"#).unwrap(), "");
    }

    #[test]
    fn rejects_other_json_types() {
        let err = decode(r#"{"number":[1,2]}"#).unwrap_err();
        assert!(err.to_string().contains("number must be a string or an integer"));
        assert!(decode(r#"{"number":true}"#).is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any i64 sent as a JSON integer is stored as its decimal text.
            #[test]
            fn integer_numbers_round_trip_as_text(n in any::<i64>()) {
                let json = format!(r#"{{"number":{n}}}"#);
                prop_assert_eq!(decode(&json).unwrap(), n.to_string());
            }
        }
    }
}
