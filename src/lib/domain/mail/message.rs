//! The outbound mail message

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::domain::wire::{array_to_json, ToJson, WireNode};

use super::{
    content::Content,
    email_address::EmailAddress,
    errors::ValidationError,
    personalization::Personalization,
    validation::{
        array_of_objects, is_falsy, object, optional_string, required, string_map, unsigned,
    },
};

/// An email message being assembled for submission to the provider
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mail {
    from: Option<EmailAddress>,
    reply_to: Option<EmailAddress>,
    subject: Option<String>,
    content: Vec<Content>,
    personalizations: Vec<Personalization>,
    headers: Option<Map<String, Value>>,
    send_at: Option<u64>,
}

impl Mail {
    /// Create an empty message
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a message from a data record.
    ///
    /// # Arguments
    /// * `data` - An object with `from`, `subject`, `text`, `html`, `to`,
    ///   `personalizations`, `replyTo`, `headers` and `sendAt` fields.
    ///   Unrecognised fields are ignored.
    ///
    /// # Returns
    /// The message, or the first [`ValidationError`] encountered.
    pub fn from_data(data: &Value) -> Result<Self, ValidationError> {
        let mut mail = Self::new();
        mail.fill_from_data(data)?;

        Ok(mail)
    }

    /// Apply a data record to this message.
    ///
    /// `personalizations`, when supplied and not `null`, `false`, `0` or `""`,
    /// takes precedence and `to` is ignored; otherwise `to` becomes a single
    /// recipient group.
    pub fn fill_from_data(&mut self, data: &Value) -> Result<(), ValidationError> {
        let data = object("data", data)?;

        debug!(fields = data.len(), "building mail from data");

        self.set_from(data.get("from"))?;
        self.set_subject(data.get("subject"))?;
        self.set_reply_to(data.get("replyTo"))?;
        self.set_headers(data.get("headers"))?;
        self.set_send_at(data.get("sendAt"))?;

        self.add_text_content(data.get("text"))?;
        self.add_html_content(data.get("html"))?;

        match data.get("personalizations") {
            Some(personalizations) if !is_falsy(personalizations) => {
                self.set_personalizations(Some(personalizations))
            }
            _ => self.add_to(data.get("to")),
        }
    }

    /// Set the sender from a string or an object with a string `email`.
    pub fn set_from(&mut self, value: Option<&Value>) -> Result<(), ValidationError> {
        let from = EmailAddress::from_value("from", required("from", value)?)?;

        trace!(from = %from, "setting from");
        self.from = Some(from);

        Ok(())
    }

    /// Set the reply-to address; an absent value is a no-op.
    pub fn set_reply_to(&mut self, value: Option<&Value>) -> Result<(), ValidationError> {
        if let Some(value) = value {
            self.reply_to = Some(EmailAddress::from_value("replyTo", value)?);
        }

        Ok(())
    }

    /// Set the subject; an absent value is a no-op.
    pub fn set_subject(&mut self, value: Option<&Value>) -> Result<(), ValidationError> {
        if let Some(subject) = optional_string("subject", value)? {
            self.subject = Some(subject.to_string());
        }

        Ok(())
    }

    /// Set provider headers; an absent value is a no-op.
    pub fn set_headers(&mut self, value: Option<&Value>) -> Result<(), ValidationError> {
        if let Some(value) = value {
            self.headers = Some(string_map("headers", value)?);
        }

        Ok(())
    }

    /// Set the scheduled send time in unix seconds; an absent value is a no-op.
    pub fn set_send_at(&mut self, value: Option<&Value>) -> Result<(), ValidationError> {
        if let Some(value) = value {
            self.send_at = Some(unsigned("sendAt", value)?);
        }

        Ok(())
    }

    /// Append a body part
    pub fn add_content(&mut self, content: Content) {
        trace!(mime_type = ?content.mime_type, "adding content");
        self.content.push(content);
    }

    /// Append a `text/plain` body part; an absent value is a no-op.
    pub fn add_text_content(&mut self, value: Option<&Value>) -> Result<(), ValidationError> {
        if let Some(text) = optional_string("text", value)? {
            self.add_content(Content::text(text));
        }

        Ok(())
    }

    /// Append a `text/html` body part; an absent value is a no-op.
    pub fn add_html_content(&mut self, value: Option<&Value>) -> Result<(), ValidationError> {
        if let Some(html) = optional_string("html", value)? {
            self.add_content(Content::html(html));
        }

        Ok(())
    }

    /// Replace every recipient group with groups built from `value`, which
    /// must be an array of objects.
    pub fn set_personalizations(&mut self, value: Option<&Value>) -> Result<(), ValidationError> {
        let items = array_of_objects(
            "personalizations",
            required("personalizations", value)?,
        )?;

        let personalizations = items
            .iter()
            .map(Personalization::from_data)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = personalizations.len(), "replacing personalizations");
        self.personalizations = personalizations;

        Ok(())
    }

    /// Append a recipient group
    pub fn add_personalization(&mut self, personalization: Personalization) {
        self.personalizations.push(personalization);
    }

    /// Wrap a recipient value (a single recipient or a list) into one group
    /// and append it.
    pub fn add_to(&mut self, value: Option<&Value>) -> Result<(), ValidationError> {
        let to = required("to", value)?;

        let mut personalization = Personalization::new();
        personalization.set_to(Some(to));
        self.add_personalization(personalization);

        Ok(())
    }

    /// The sender
    pub fn from(&self) -> Option<&EmailAddress> {
        self.from.as_ref()
    }

    /// The reply-to address
    pub fn reply_to(&self) -> Option<&EmailAddress> {
        self.reply_to.as_ref()
    }

    /// The subject
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// The body parts, in insertion order
    pub fn content(&self) -> &[Content] {
        &self.content
    }

    /// The recipient groups
    pub fn personalizations(&self) -> &[Personalization] {
        &self.personalizations
    }

    /// The provider headers
    pub fn headers(&self) -> Option<&Map<String, Value>> {
        self.headers.as_ref()
    }

    /// The scheduled send time
    pub fn send_at(&self) -> Option<u64> {
        self.send_at
    }
}

impl ToJson for Mail {
    fn to_json(&self) -> Value {
        let mut fields = Vec::new();

        if let Some(from) = &self.from {
            fields.push(WireNode::field("from", from.to_json()));
        }

        if let Some(subject) = &self.subject {
            fields.push(WireNode::field("subject", subject.as_str()));
        }

        fields.push(WireNode::field(
            "personalizations",
            array_to_json(&self.personalizations),
        ));

        if !self.content.is_empty() {
            fields.push(WireNode::field("content", array_to_json(&self.content)));
        }

        if let Some(reply_to) = &self.reply_to {
            fields.push(WireNode::field("replyTo", reply_to.to_json()));
        }

        if let Some(headers) = &self.headers {
            fields.push(WireNode::opaque_field("headers", headers.clone()));
        }

        if let Some(send_at) = self.send_at {
            fields.push(WireNode::field("sendAt", send_at));
        }

        WireNode::Object(fields).into_snake_case()
    }
}
