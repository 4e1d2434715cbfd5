use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::email::application::ports::outgoing::{
    EmailSender, OtpNotificationError, OtpNotifier,
};

#[derive(Clone)]
pub struct OtpEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl fmt::Debug for OtpEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OtpEmailService")
            .field("sender", &"<dyn EmailSender>")
            .finish()
    }
}

impl OtpEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self { sender }
    }

    fn render_body(code: &str, valid_for_minutes: i64) -> String {
        format!(
            "<p>Your verification code is:</p>\
             <h2 style=\"letter-spacing:4px\">{code}</h2>\
             <p>The code expires in {valid_for_minutes} minutes. \
             If you did not request it, you can ignore this email.</p>"
        )
    }
}

#[async_trait]
impl OtpNotifier for OtpEmailService {
    async fn send_otp(
        &self,
        email: &str,
        code: &str,
        valid_for_minutes: i64,
    ) -> Result<(), OtpNotificationError> {
        let body = Self::render_body(code, valid_for_minutes);

        self.sender
            .send_email(email, "Your verification code", &body)
            .await
            .map_err(OtpNotificationError::EmailSendingFailed)
    }
}
