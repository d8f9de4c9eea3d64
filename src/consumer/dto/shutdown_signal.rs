use amqprs::CloseChannel;

///
/// Notification that the channel or the whole connection went down.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShutdownSignal {
    /// `true` when the connection was closed, `false` when only the channel
    pub hard_error: bool,
    pub initiated_by_application: bool,
    pub reply_code: u16,
    pub reply_text: String,
    /// Description of the error that caused shutdown, if any
    pub cause: Option<String>,
}

impl ShutdownSignal {
    pub fn application_initiated(hard_error: bool) -> Self {
        Self {
            hard_error,
            initiated_by_application: true,
            reply_code: 200,
            reply_text: "OK".to_string(),
            cause: None,
        }
    }
}

impl From<&CloseChannel> for ShutdownSignal {
    fn from(close: &CloseChannel) -> Self {
        Self {
            hard_error: false,
            initiated_by_application: false,
            reply_code: close.reply_code(),
            reply_text: close.reply_text().to_string(),
            cause: None,
        }
    }
}
