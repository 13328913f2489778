#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Renders mail data records as provider payloads

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use mail_payload::{
    domain::mail::MailService,
    infrastructure::output::{OutputConfig, WriterSender},
};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// A JSON file holding a mail data record or a list of them; stdin is read
    /// when omitted
    #[clap(long, env = "MAIL_INPUT")]
    pub input: Option<PathBuf>,

    /// The payload output configuration
    #[clap(flatten)]
    pub output: OutputConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let raw = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let data: Value = serde_json::from_str(&raw).context("mail data is not valid JSON")?;

    let service = MailService::new(Arc::new(WriterSender::new(io::stdout(), args.output)));

    let sent = service.send(data).await?;

    info!(sent, "mail payloads written");

    Ok(())
}
