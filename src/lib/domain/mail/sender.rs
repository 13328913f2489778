//! Mail sender seam

use async_trait::async_trait;
use serde_json::Value;

#[cfg(test)]
use mockall::mock;

use super::errors::SendError;

/// Hands provider payloads to a transport
#[async_trait]
pub trait MailSender: Clone + Send + Sync + 'static {
    /// Send a single provider payload
    ///
    /// # Arguments
    /// * `payload` - The JSON produced by [`Mail`](super::Mail)'s `to_json`.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure.
    async fn send(&self, payload: &Value) -> Result<(), SendError>;
}

#[cfg(test)]
mock! {
    pub MailSender {}

    impl Clone for MailSender {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl MailSender for MailSender {
        async fn send(&self, payload: &Value) -> Result<(), SendError>;
    }
}
