use chrono::{DateTime, Utc};
use lettre::address::{Address, AddressError};
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::SmtpSettings;
use crate::handlers::contact_dtos::ContactMessage;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("invalid mailbox address: {0}")]
    Address(#[from] AddressError),
    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("smtp transport failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Emailed,
    Logged,
}

/// Where accepted contact submissions go.
#[derive(Clone)]
pub enum ContactDelivery {
    /// Nothing is sent. The submission is written to the log and flagged as undelivered.
    LogOnly,
    Smtp {
        transport: AsyncSmtpTransport<Tokio1Executor>,
        from: Mailbox,
        inbox: Mailbox,
    },
}

impl ContactDelivery {
    pub fn smtp(settings: &SmtpSettings, inbox: &str) -> Result<Self, DeliveryError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?
            .credentials(Credentials::new(settings.username.clone(), settings.password.clone()))
            .build();
        Ok(ContactDelivery::Smtp {
            transport,
            from: settings.from.parse()?,
            inbox: inbox.parse()?,
        })
    }

    pub fn describe(&self) -> &'static str {
        match self {
            ContactDelivery::LogOnly => "log-only (submissions are NOT emailed)",
            ContactDelivery::Smtp { .. } => "smtp",
        }
    }

    pub async fn deliver(&self, reference: &str, msg: &ContactMessage) -> Result<DeliveryOutcome, DeliveryError> {
        match self {
            ContactDelivery::LogOnly => {
                warn!(
                    reference,
                    name = %msg.name,
                    email = %msg.email,
                    subject = %msg.subject,
                    message = %msg.message,
                    "Contact submission accepted but not delivered: no SMTP transport configured"
                );
                Ok(DeliveryOutcome::Logged)
            }
            ContactDelivery::Smtp { transport, from, inbox } => {
                let email = compose(reference, msg, Utc::now(), from.clone(), inbox.clone())?;
                transport.send(email).await?;
                info!(reference, "Contact submission emailed to {}", inbox);
                Ok(DeliveryOutcome::Emailed)
            }
        }
    }
}

fn compose(
    reference: &str,
    msg: &ContactMessage,
    received_at: DateTime<Utc>,
    from: Mailbox,
    inbox: Mailbox,
) -> Result<Message, DeliveryError> {
    let mut builder = Message::builder()
        .from(from)
        .to(inbox)
        .subject(format!("[Contacto] {}", msg.subject))
        .header(ContentType::TEXT_PLAIN);

    // The form accepts a few addresses lettre refuses; those just lose the Reply-To.
    if let Ok(address) = msg.email.parse::<Address>() {
        builder = builder.reply_to(Mailbox::new(Some(msg.name.clone()), address));
    }

    let body = format!(
        "Nome: {}\nE-mail: {}\nAssunto: {}\nReferência: {}\nRecebido em: {}\n\n{}\n",
        msg.name,
        msg.email,
        msg.subject,
        reference,
        received_at.format("%Y-%m-%d %H:%M UTC"),
        msg.message
    );
    Ok(builder.body(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Maria Andrade".to_string(),
            email: "maria@techangola.ao".to_string(),
            subject: "Rebranding".to_string(),
            message: "Gostaríamos de uma proposta.".to_string(),
        }
    }

    #[tokio::test]
    async fn log_only_reports_logged() {
        let outcome = ContactDelivery::LogOnly.deliver("ref-1", &message()).await.unwrap();
        assert_eq!(outcome, DeliveryOutcome::Logged);
    }

    #[test]
    fn composed_mail_carries_reply_to_and_reference() {
        let email = compose(
            "ref-42",
            &message(),
            Utc::now(),
            "site@nzinga.ao".parse().unwrap(),
            "info@nzinga.ao".parse().unwrap(),
        )
        .unwrap();
        let raw = String::from_utf8(email.formatted()).unwrap();
        assert!(raw.contains("Reply-To:"));
        assert!(raw.contains("<maria@techangola.ao>"));
        assert!(raw.contains("Subject: [Contacto] Rebranding"));
    }

    #[test]
    fn describe_flags_log_only() {
        assert!(ContactDelivery::LogOnly.describe().contains("NOT emailed"));
    }
}
