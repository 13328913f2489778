//! The mail model: messages, recipient groups and their validation.

mod content;
mod email_address;
mod factory;
mod message;
mod personalization;
mod sender;
mod service;
mod validation;

pub mod errors;

pub use content::{Content, MimeType};
pub use email_address::{EmailAddress, Recipient};
pub use errors::{Expected, SendError, SendMailError, ValidationError};
pub use factory::{Created, MailInput};
pub use message::Mail;
pub use personalization::Personalization;
pub use sender::MailSender;
pub use service::MailService;
