use crate::config::RelayConfig;
use crate::domain::model::{MailAddress, OutboundEmail};
use crate::domain::ports::Mailer;
use crate::utils::error::Result;
use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// SMTP-backed mailer: STARTTLS to the configured submission host with
/// the account credentials from the relay config.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn from_config(config: &RelayConfig) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_email.clone(),
                config.smtp_password.clone(),
            ))
            .build();
        Ok(Self { transport })
    }
}

fn mailbox(address: &MailAddress) -> Result<Mailbox> {
    let parsed: Address = address.email.parse()?;
    Ok(Mailbox::new(address.name.clone(), parsed))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<()> {
        let mut builder = Message::builder()
            .from(mailbox(&email.from)?)
            .subject(email.subject.clone());
        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(mailbox(reply_to)?);
        }
        for to in &email.to {
            builder = builder.to(mailbox(to)?);
        }

        let message = builder.multipart(MultiPart::alternative_plain_html(
            email.text_body.clone(),
            email.html_body.clone(),
        ))?;

        self.transport.send(message).await?;
        tracing::debug!(subject = %email.subject, "Email dispatched over SMTP");
        Ok(())
    }
}
