//! Mail construction from already-built messages or raw data

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::{errors::ValidationError, message::Mail};

/// Input accepted by [`Mail::create`]
#[derive(Clone, Debug)]
pub enum MailInput {
    /// An already-built message, returned as is
    Built(Arc<Mail>),

    /// A data record to build a new message from
    Data(Value),

    /// A list of inputs; `None` entries are skipped
    Batch(Vec<Option<MailInput>>),
}

impl From<Value> for MailInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => MailInput::Batch(
                items
                    .into_iter()
                    .map(|item| (!item.is_null()).then(|| MailInput::from(item)))
                    .collect(),
            ),
            data => MailInput::Data(data),
        }
    }
}

impl From<Mail> for MailInput {
    fn from(mail: Mail) -> Self {
        MailInput::Built(Arc::new(mail))
    }
}

impl From<Arc<Mail>> for MailInput {
    fn from(mail: Arc<Mail>) -> Self {
        MailInput::Built(mail)
    }
}

/// Output of [`Mail::create`], mirroring the shape of its input
#[derive(Clone, Debug)]
pub enum Created {
    /// A single message
    Single(Arc<Mail>),

    /// One result per non-empty batch entry, in input order
    Batch(Vec<Created>),
}

impl Created {
    /// Flatten into the list of messages, in input order
    pub fn into_mails(self) -> Vec<Arc<Mail>> {
        match self {
            Created::Single(mail) => vec![mail],
            Created::Batch(items) => items.into_iter().flat_map(Created::into_mails).collect(),
        }
    }

    /// The message, if this is a single result
    pub fn single(self) -> Option<Arc<Mail>> {
        match self {
            Created::Single(mail) => Some(mail),
            Created::Batch(_) => None,
        }
    }
}

impl Mail {
    /// Create messages from built instances, data records or lists of either.
    ///
    /// # Arguments
    /// * `input` - Anything convertible to a [`MailInput`], such as a JSON
    ///   [`Value`] or an existing [`Mail`].
    ///
    /// # Returns
    /// A [`Created`] of the same shape as the input. Built messages are passed
    /// through untouched, so re-wrapping yields the identical [`Arc`]. A `null`
    /// data record yields an empty message.
    pub fn create(input: impl Into<MailInput>) -> Result<Created, ValidationError> {
        match input.into() {
            MailInput::Built(mail) => Ok(Created::Single(mail)),
            MailInput::Data(Value::Null) => Ok(Created::Single(Arc::new(Mail::new()))),
            MailInput::Data(data) => Ok(Created::Single(Arc::new(Mail::from_data(&data)?))),
            MailInput::Batch(items) => {
                debug!(count = items.len(), "creating mail batch");

                items
                    .into_iter()
                    .flatten()
                    .map(Mail::create)
                    .collect::<Result<Vec<_>, _>>()
                    .map(Created::Batch)
            }
        }
    }
}
