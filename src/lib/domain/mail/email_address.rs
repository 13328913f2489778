//! Email addresses and recipient records

use std::fmt;

use serde_json::{json, Map, Value};

use crate::domain::wire::ToJson;

use super::errors::{Expected, ValidationError};

/// A normalized `{email}` address
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email address
    pub fn new(raw: &str) -> Self {
        Self(raw.to_string())
    }

    /// Normalize a bare string or an object with a string `email` field.
    pub fn from_value(field: &'static str, value: &Value) -> Result<Self, ValidationError> {
        match value {
            Value::String(email) => Ok(Self::new(email)),
            Value::Object(record) => match record.get("email") {
                Some(Value::String(email)) => Ok(Self::new(email)),
                _ => Err(ValidationError::new(field, Expected::StringOrAddress)),
            },
            _ => Err(ValidationError::new(field, Expected::StringOrAddress)),
        }
    }

    /// Get the address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl ToJson for EmailAddress {
    fn to_json(&self) -> Value {
        json!({ "email": self.0 })
    }
}

/// One entry of a recipient list
#[derive(Clone, Debug, PartialEq)]
pub enum Recipient {
    /// A bare address, rendered as `{email}`
    Address(EmailAddress),

    /// A richer address record (e.g. with a `name`), passed through as given
    Record(Map<String, Value>),

    /// Any other value, rendered as `{email: <value>}`
    Wrapped(Value),
}

impl Recipient {
    /// Build a recipient from a value. Strings become addresses, objects with
    /// a string `email` are kept as records and anything else is wrapped.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(email) => Recipient::Address(EmailAddress::new(email)),
            Value::Object(record) if record.get("email").is_some_and(Value::is_string) => {
                Recipient::Record(record.clone())
            }
            other => Recipient::Wrapped(other.clone()),
        }
    }

    /// The recipient's email address
    pub fn email(&self) -> Option<&str> {
        match self {
            Recipient::Address(address) => Some(address.as_str()),
            Recipient::Record(record) => record.get("email").and_then(Value::as_str),
            Recipient::Wrapped(value) => value.as_str(),
        }
    }
}

impl From<EmailAddress> for Recipient {
    fn from(address: EmailAddress) -> Self {
        Recipient::Address(address)
    }
}

impl ToJson for Recipient {
    fn to_json(&self) -> Value {
        match self {
            Recipient::Address(address) => address.to_json(),
            Recipient::Record(record) => Value::Object(record.clone()),
            Recipient::Wrapped(value) => json!({ "email": value }),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_email_address_from_string() -> TestResult {
        let email = EmailAddress::from_value("from", &json!("a@b.com"))?;

        assert_eq!(email.to_json(), json!({"email": "a@b.com"}));

        Ok(())
    }

    #[test]
    fn test_email_address_from_record_keeps_only_email() -> TestResult {
        let email = EmailAddress::from_value("from", &json!({"email": "a@b.com", "name": "A"}))?;

        assert_eq!(email.to_string(), "a@b.com");
        assert_eq!(email.to_json(), json!({"email": "a@b.com"}));

        Ok(())
    }

    #[test]
    fn test_email_address_rejects_other_shapes() {
        for value in [json!(1), json!(null), json!({"email": 1}), json!({}), json!(["a"])] {
            let result = EmailAddress::from_value("from", &value);

            assert_eq!(
                result.unwrap_err(),
                ValidationError::new("from", Expected::StringOrAddress)
            );
        }
    }

    #[test]
    fn test_valid_email_to_string() {
        let email = EmailAddress::new("email@example.com");

        assert_eq!(String::from(email), "email@example.com".to_string());
    }

    #[test]
    fn test_recipient_record_is_passed_through() {
        let record = json!({"email": "c@d.com", "name": "Carol"});
        let recipient = Recipient::from_value(&record);

        assert_eq!(recipient.email(), Some("c@d.com"));
        assert_eq!(recipient.to_json(), record);
    }

    #[test]
    fn test_other_recipient_values_are_wrapped() {
        for value in [json!(123), Value::Null, json!(true), json!({"name": "Carol"})] {
            let recipient = Recipient::from_value(&value);

            assert_eq!(recipient, Recipient::Wrapped(value.clone()));
            assert_eq!(recipient.to_json(), json!({ "email": value }));
        }
    }
}
