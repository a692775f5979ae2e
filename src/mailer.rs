//! SMTP delivery of the rendered digest.

use async_trait::async_trait;
use lettre::message::{MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::config::SmtpConfig;

/// The digest goes to exactly one inbox.
pub const RECIPIENT: &str = "digest.reader@gmail.com";

/// Fixed subject line for every digest.
pub const SUBJECT: &str = "📰 Your Daily News Digest";

/// Mail delivery, kept behind a trait so the HTTP layer can be wired to a
/// recording double.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> anyhow::Result<()>;
}

/// Sends mail through an authenticated STARTTLS SMTP relay.
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> anyhow::Result<()> {
        let message = Message::builder()
            .from(self.config.email.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .multipart(MultiPart::alternative().singlepart(SinglePart::html(html.to_string())))?;

        let relay = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.server)?
            .port(self.config.port)
            .credentials(Credentials::new(
                self.config.email.clone(),
                self.config.password.clone(),
            ))
            .build();

        relay.send(message).await?;
        info!(recipient = to, "digest email sent");
        Ok(())
    }
}
