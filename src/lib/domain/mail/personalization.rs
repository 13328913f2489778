//! Recipient groups

use serde_json::Value;
use tracing::trace;

use crate::domain::wire::{array_to_json, ToJson, WireNode};

use super::{email_address::Recipient, errors::ValidationError, validation::object};

/// One personalization block: a set of recipients sharing a message variant
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Personalization {
    to: Vec<Recipient>,
    cc: Vec<Recipient>,
    bcc: Vec<Recipient>,
}

impl Personalization {
    /// Create an empty recipient group
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a recipient group from a data record.
    ///
    /// # Arguments
    /// * `data` - An object with optional `to`, `cc` and `bcc` fields.
    ///
    /// # Returns
    /// The group, or a [`ValidationError`] if `data` is not an object.
    pub fn from_data(data: &Value) -> Result<Self, ValidationError> {
        let data = object("personalization", data)?;

        let mut personalization = Self::new();
        personalization.set_to(data.get("to"));
        personalization.set_cc(data.get("cc"));
        personalization.set_bcc(data.get("bcc"));

        Ok(personalization)
    }

    /// Set the `to` recipients. A single value is wrapped into a one-element
    /// list; an absent value leaves the current list in place.
    pub fn set_to(&mut self, value: Option<&Value>) {
        if let Some(to) = recipients(value) {
            trace!(count = to.len(), "setting personalization to");
            self.to = to;
        }
    }

    /// Set the `cc` recipients, with the same rules as [`Self::set_to`].
    pub fn set_cc(&mut self, value: Option<&Value>) {
        if let Some(cc) = recipients(value) {
            self.cc = cc;
        }
    }

    /// Set the `bcc` recipients, with the same rules as [`Self::set_to`].
    pub fn set_bcc(&mut self, value: Option<&Value>) {
        if let Some(bcc) = recipients(value) {
            self.bcc = bcc;
        }
    }

    /// Append a single `to` recipient
    pub fn add_to(&mut self, recipient: impl Into<Recipient>) {
        self.to.push(recipient.into());
    }

    /// The `to` recipients
    pub fn to(&self) -> &[Recipient] {
        &self.to
    }

    /// The `cc` recipients
    pub fn cc(&self) -> &[Recipient] {
        &self.cc
    }

    /// The `bcc` recipients
    pub fn bcc(&self) -> &[Recipient] {
        &self.bcc
    }
}

fn recipients(value: Option<&Value>) -> Option<Vec<Recipient>> {
    value.map(|value| match value {
        Value::Array(items) => items.iter().map(Recipient::from_value).collect(),
        single => vec![Recipient::from_value(single)],
    })
}

impl ToJson for Personalization {
    fn to_json(&self) -> Value {
        let mut fields = vec![WireNode::field("to", array_to_json(&self.to))];

        if !self.cc.is_empty() {
            fields.push(WireNode::field("cc", array_to_json(&self.cc)));
        }

        if !self.bcc.is_empty() {
            fields.push(WireNode::field("bcc", array_to_json(&self.bcc)));
        }

        WireNode::Object(fields).into_snake_case()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::domain::mail::{EmailAddress, Expected};

    use super::*;

    #[test]
    fn test_single_to_is_wrapped() -> TestResult {
        let personalization = Personalization::from_data(&json!({"to": "a@x.com"}))?;

        assert_eq!(personalization.to().len(), 1);
        assert_eq!(
            personalization.to_json(),
            json!({"to": [{"email": "a@x.com"}]})
        );

        Ok(())
    }

    #[test]
    fn test_to_list_keeps_order_and_records() -> TestResult {
        let personalization = Personalization::from_data(&json!({
            "to": ["a@x.com", {"email": "b@x.com", "name": "B"}],
        }))?;

        assert_eq!(
            personalization.to_json(),
            json!({"to": [{"email": "a@x.com"}, {"email": "b@x.com", "name": "B"}]})
        );

        Ok(())
    }

    #[test]
    fn test_absent_to_is_a_no_op() {
        let mut personalization = Personalization::new();
        personalization.set_to(Some(&json!("a@x.com")));
        personalization.set_to(None);

        assert_eq!(personalization.to()[0].email(), Some("a@x.com"));
    }

    #[test]
    fn test_empty_group_still_has_to_list() {
        assert_eq!(Personalization::new().to_json(), json!({"to": []}));
    }

    #[test]
    fn test_cc_and_bcc_are_emitted_when_present() -> TestResult {
        let personalization = Personalization::from_data(&json!({
            "to": "a@x.com",
            "cc": "b@x.com",
            "bcc": ["c@x.com"],
        }))?;

        assert_eq!(
            personalization.to_json(),
            json!({
                "to": [{"email": "a@x.com"}],
                "cc": [{"email": "b@x.com"}],
                "bcc": [{"email": "c@x.com"}],
            })
        );

        Ok(())
    }

    #[test]
    fn test_add_to_appends() {
        let mut personalization = Personalization::new();
        personalization.add_to(EmailAddress::new("a@x.com"));
        personalization.add_to(EmailAddress::new("b@x.com"));

        assert_eq!(personalization.to().len(), 2);
    }

    #[test]
    fn test_non_object_data_is_rejected() {
        let result = Personalization::from_data(&json!("a@x.com"));

        assert_eq!(
            result.unwrap_err(),
            ValidationError::new("personalization", Expected::Object)
        );
    }

    #[test]
    fn test_non_address_to_is_wrapped_as_email() -> TestResult {
        for to in [json!(123), Value::Null, json!({"name": "Carol"})] {
            let personalization = Personalization::from_data(&json!({ "to": to }))?;

            assert_eq!(personalization.to_json(), json!({"to": [{ "email": to }]}));
        }

        Ok(())
    }

    #[test]
    fn test_list_entries_without_address_are_wrapped() -> TestResult {
        let personalization = Personalization::from_data(&json!({"to": ["a@x.com", 7]}))?;

        assert_eq!(
            personalization.to_json(),
            json!({"to": [{"email": "a@x.com"}, {"email": 7}]})
        );

        Ok(())
    }
}
