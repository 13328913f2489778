//! Payload output adapters

mod writer;

use clap::Parser;

pub use writer::WriterSender;

/// Payload output configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct OutputConfig {
    /// Pretty-print each payload instead of writing one compact line
    #[clap(long, env = "MAIL_PRETTY")]
    pub pretty: bool,
}
