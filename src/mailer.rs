use crate::config::Config;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum SendError {
    MissingConfig(&'static str),
    InvalidAddress(String),
    Build(String),
    Transport(String),
}

impl Display for SendError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SendError::MissingConfig(field) => {
                write!(f, "missing email configuration: {}", field)
            }
            SendError::InvalidAddress(address) => write!(f, "invalid email address: {}", address),
            SendError::Build(err) => write!(f, "could not build message: {}", err),
            SendError::Transport(err) => write!(f, "could not send message: {}", err),
        }
    }
}

impl Error for SendError {}

pub trait Mailer {
    fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), SendError>;
}

#[derive(Clone, Debug)]
pub struct SmtpMailer {
    server: String,
    port: u16,
    sender_email: Option<String>,
    sender_password: Option<String>,
}

impl SmtpMailer {
    pub fn new(config: &Config) -> Self {
        SmtpMailer {
            server: config.smtp_server.clone(),
            port: config.smtp_port,
            sender_email: config.sender_email.clone(),
            sender_password: config.sender_password.clone(),
        }
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), SendError> {
        let sender = match self.sender_email.as_deref() {
            Some(sender) if !sender.is_empty() => sender,
            _ => return Err(SendError::MissingConfig("sender email")),
        };
        let password = match self.sender_password.as_deref() {
            Some(password) if !password.is_empty() => password,
            _ => return Err(SendError::MissingConfig("sender password")),
        };
        if to.is_empty() {
            return Err(SendError::MissingConfig("recipient"));
        }

        let message = Message::builder()
            .from(parse_mailbox(sender)?)
            .to(parse_mailbox(to)?)
            .subject(subject)
            .multipart(
                MultiPart::alternative().singlepart(SinglePart::html(html_body.to_string())),
            )
            .map_err(|err| SendError::Build(err.to_string()))?;

        debug!("Sending email to {} via {}:{}", to, self.server, self.port);

        // One SMTP session per message
        let transport = SmtpTransport::starttls_relay(&self.server)
            .map_err(|err| SendError::Transport(err.to_string()))?
            .port(self.port)
            .credentials(Credentials::new(sender.to_string(), password.to_string()))
            .build();

        transport
            .send(&message)
            .map_err(|err| SendError::Transport(err.to_string()))?;

        info!("Sent email to {}", to);
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, SendError> {
    address
        .parse()
        .map_err(|_| SendError::InvalidAddress(address.to_string()))
}

#[cfg(test)]
pub mod test {
    use super::*;
    use mockall::mock;

    mock! {
        pub Mailer {}

        impl Mailer for Mailer {
            fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), SendError>;
        }
    }

    fn mailer(sender_email: Option<&str>, sender_password: Option<&str>) -> SmtpMailer {
        SmtpMailer {
            server: "localhost".to_string(),
            port: 2525,
            sender_email: sender_email.map(|value| value.to_string()),
            sender_password: sender_password.map(|value| value.to_string()),
        }
    }

    #[test]
    fn test_send_missing_sender() {
        for sender in [None, Some("")] {
            let err = mailer(sender, Some("secret"))
                .send("recipient@test.com", "subject", "<p>body</p>")
                .unwrap_err();
            assert!(matches!(err, SendError::MissingConfig("sender email")));
        }
    }

    #[test]
    fn test_send_missing_password() {
        for password in [None, Some("")] {
            let err = mailer(Some("sender@test.com"), password)
                .send("recipient@test.com", "subject", "<p>body</p>")
                .unwrap_err();
            assert!(matches!(err, SendError::MissingConfig("sender password")));
        }
    }

    #[test]
    fn test_send_missing_recipient() {
        let err = mailer(Some("sender@test.com"), Some("secret"))
            .send("", "subject", "<p>body</p>")
            .unwrap_err();
        assert!(matches!(err, SendError::MissingConfig("recipient")));
    }

    #[test]
    fn test_send_invalid_addresses() {
        let err = mailer(Some("not an address"), Some("secret"))
            .send("recipient@test.com", "subject", "<p>body</p>")
            .unwrap_err();
        match err {
            SendError::InvalidAddress(address) => assert_eq!(address, "not an address"),
            _ => unreachable!(),
        }

        let err = mailer(Some("sender@test.com"), Some("secret"))
            .send("not an address", "subject", "<p>body</p>")
            .unwrap_err();
        assert!(matches!(err, SendError::InvalidAddress(_)));
    }
}
