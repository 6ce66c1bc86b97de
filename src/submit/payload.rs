//! JSON body sent to the form endpoint

use serde::Serialize;
use std::collections::BTreeMap;

/// Every collected field value, keyed by field name.
///
/// Serializes as a flat JSON object of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WaitlistPayload(BTreeMap<String, String>);

impl WaitlistPayload {
    pub fn new(values: BTreeMap<String, String>) -> Self {
        Self(values)
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serializes_as_flat_object() {
        let mut values = BTreeMap::new();
        values.insert("email".to_string(), "user@test.com".to_string());
        values.insert("teamSize".to_string(), "5".to_string());

        let json = serde_json::to_value(WaitlistPayload::new(values)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "email": "user@test.com", "teamSize": "5" })
        );
    }

    #[test]
    fn test_empty_payload() {
        let payload = WaitlistPayload::default();
        assert_eq!(payload.len(), 0);
        assert_eq!(serde_json::to_string(&payload).unwrap(), "{}");
    }

    #[test]
    fn test_get() {
        let mut values = BTreeMap::new();
        values.insert("name".to_string(), "Jo".to_string());
        let payload = WaitlistPayload::new(values);
        assert_eq!(payload.get("name"), Some("Jo"));
        assert_eq!(payload.get("email"), None);
        assert_eq!(payload.len(), 1);
    }
}
