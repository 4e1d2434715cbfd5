use async_trait::async_trait;

use crate::email::application::ports::outgoing::email_sender::EmailSender;

/// Development sender used when no SMTP transport is configured.
/// Bodies are only written to the log when `log_body` is set.
#[derive(Debug, Clone)]
pub struct LogEmailSender {
    log_body: bool,
}

impl LogEmailSender {
    pub fn new(log_body: bool) -> Self {
        Self { log_body }
    }
}

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        if self.log_body {
            tracing::info!(to = %to, subject = %subject, body = %body, "Email not sent (log-only sender)");
        } else {
            tracing::info!(to = %to, subject = %subject, "Email not sent (log-only sender)");
        }
        Ok(())
    }
}
