use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Open attribute bag carried by users and groups.
///
/// Keys are provider-defined and never interpreted. Ordered so that
/// serialized payloads are deterministic.
pub type ProfileMap = BTreeMap<String, ProfileValue>;

/// One value in a [`ProfileMap`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileValue {
    /// Explicit `null`.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integral number.
    Integer(i64),
    /// Any number that does not fit `i64`.
    Float(f64),
    /// String scalar.
    String(String),
    /// Ordered list of values.
    Array(Vec<ProfileValue>),
    /// Nested attribute bag.
    Object(ProfileMap),
}

impl ProfileValue {
    /// Returns the string payload when this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for ProfileValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ProfileValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for ProfileValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ProfileValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{ProfileMap, ProfileValue};

    #[test]
    fn nested_values_deserialize_into_variants() {
        let parsed = serde_json::from_str::<ProfileMap>(
            r#"{"costCenter":"cc-12","level":3,"ratio":0.5,"manager":null,
                "remote":true,"tags":["a",1],"address":{"city":"Oslo"}}"#,
        )
        .unwrap_or_default();

        assert_eq!(parsed.get("costCenter"), Some(&ProfileValue::from("cc-12")));
        assert_eq!(parsed.get("level"), Some(&ProfileValue::Integer(3)));
        assert_eq!(parsed.get("ratio"), Some(&ProfileValue::Float(0.5)));
        assert_eq!(parsed.get("manager"), Some(&ProfileValue::Null));
        assert_eq!(parsed.get("remote"), Some(&ProfileValue::Bool(true)));
        assert_eq!(
            parsed.get("tags"),
            Some(&ProfileValue::Array(vec![
                ProfileValue::from("a"),
                ProfileValue::Integer(1)
            ]))
        );
        assert!(matches!(parsed.get("address"), Some(ProfileValue::Object(_))));
    }

    #[test]
    fn serialization_is_key_ordered() {
        let mut profile = ProfileMap::new();
        profile.insert("zeta".to_owned(), ProfileValue::from("z"));
        profile.insert("alpha".to_owned(), ProfileValue::from(1_i64));

        let encoded = serde_json::to_string(&profile).unwrap_or_default();
        assert_eq!(encoded, r#"{"alpha":1,"zeta":"z"}"#);
    }
}
