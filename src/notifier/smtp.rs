//! SMTP delivery over lettre's async transport.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Message, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};

use crate::models::config::ServerConfig;
use crate::notifier::{EmailMessage, Notifier, NotifierError};

/// [`Notifier`] implementation backed by an implicit-TLS SMTP relay
/// (provider-hosted SMTP on port 465).
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpNotifier {
    /// Builds the transport from server configuration. An unusable host name
    /// surfaces here, at startup, rather than on the first send.
    pub fn new(config: &ServerConfig) -> Result<Self, NotifierError> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.clone(),
        );
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| NotifierError::Transport(e.to_string()))?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            transport,
            from_address: config.smtp_from.clone(),
        })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifierError> {
        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| NotifierError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(message
                .to
                .parse()
                .map_err(|_| NotifierError::InvalidAddress(message.to.clone()))?)
            .subject(message.subject.as_str())
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(message.text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(message.html_body.clone()),
                    ),
            )
            .map_err(|e| NotifierError::Message(e.to_string()))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| NotifierError::Transport(e.to_string()))?;

        Ok(())
    }
}
