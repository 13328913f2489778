//! Mail service

use std::sync::Arc;

use tracing::info;

use crate::domain::wire::ToJson;

use super::{
    errors::SendMailError,
    factory::MailInput,
    message::Mail,
    sender::MailSender,
};

/// Builds messages and hands their payloads to a [`MailSender`]
#[derive(Debug, Clone)]
pub struct MailService<S>
where
    S: MailSender,
{
    sender: Arc<S>,
}

impl<S> MailService<S>
where
    S: MailSender,
{
    /// Create a new mail service
    pub fn new(sender: Arc<S>) -> Self {
        Self { sender }
    }

    /// Build every message in `input` and send each payload in order.
    ///
    /// # Arguments
    /// * `input` - A data record, a built [`Mail`], or a list of either.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] containing the number of payloads sent,
    /// or an [`Err`] containing a [`SendMailError`]. Nothing is sent when any
    /// message fails validation.
    pub async fn send(&self, input: impl Into<MailInput>) -> Result<usize, SendMailError> {
        let mails = Mail::create(input)?.into_mails();

        for (index, mail) in mails.iter().enumerate() {
            let payload = mail.to_json();

            info!(
                index,
                personalizations = mail.personalizations().len(),
                "sending mail payload"
            );

            self.sender.send(&payload).await?;
        }

        Ok(mails.len())
    }
}
