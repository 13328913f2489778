//! Writer-backed mail sender

use std::{
    io::Write,
    sync::{Arc, Mutex},
};

use anyhow::anyhow;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::domain::mail::{MailSender, SendError};

use super::OutputConfig;

/// Sends each payload by writing it as a JSON document to `W`
#[derive(Debug)]
pub struct WriterSender<W> {
    writer: Arc<Mutex<W>>,
    config: OutputConfig,
}

impl<W> WriterSender<W>
where
    W: Write + Send + 'static,
{
    /// Create a new writer sender
    pub fn new(writer: W, config: OutputConfig) -> Self {
        Self::from_shared(Arc::new(Mutex::new(writer)), config)
    }

    /// Create a writer sender over a writer shared with the caller
    pub fn from_shared(writer: Arc<Mutex<W>>, config: OutputConfig) -> Self {
        Self { writer, config }
    }
}

impl<W> Clone for WriterSender<W> {
    fn clone(&self) -> Self {
        Self {
            writer: Arc::clone(&self.writer),
            config: self.config.clone(),
        }
    }
}

#[async_trait]
impl<W> MailSender for WriterSender<W>
where
    W: Write + Send + 'static,
{
    async fn send(&self, payload: &Value) -> Result<(), SendError> {
        let rendered = if self.config.pretty {
            serde_json::to_string_pretty(payload)?
        } else {
            serde_json::to_string(payload)?
        };

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| anyhow!("payload writer lock poisoned"))?;

        writeln!(writer, "{}", rendered)?;
        writer.flush()?;

        debug!(bytes = rendered.len(), "wrote mail payload");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_compact_payload_is_one_line() -> TestResult {
        let buffer = Arc::new(Mutex::new(Vec::<u8>::new()));
        let sender = WriterSender::from_shared(Arc::clone(&buffer), OutputConfig::default());

        sender.send(&json!({"from": {"email": "a@b.com"}})).await?;
        sender.send(&json!({"from": {"email": "c@d.com"}})).await?;

        let written = String::from_utf8(buffer.lock().map_err(|e| e.to_string())?.clone())?;
        assert_eq!(
            written,
            "{\"from\":{\"email\":\"a@b.com\"}}\n{\"from\":{\"email\":\"c@d.com\"}}\n"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_pretty_payload() -> TestResult {
        let buffer = Arc::new(Mutex::new(Vec::<u8>::new()));
        let sender =
            WriterSender::from_shared(Arc::clone(&buffer), OutputConfig { pretty: true });

        sender.send(&json!({"subject": "Hi"})).await?;

        let written = String::from_utf8(buffer.lock().map_err(|e| e.to_string())?.clone())?;
        assert_eq!(written, "{\n  \"subject\": \"Hi\"\n}\n");

        Ok(())
    }
}
