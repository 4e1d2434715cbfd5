pub mod email_sender;
pub mod otp_notifier;

pub use email_sender::EmailSender;
pub use otp_notifier::{OtpNotificationError, OtpNotifier};
