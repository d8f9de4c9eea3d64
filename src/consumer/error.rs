//!
//! Errors produced while dispatching deliveries
//!

///
/// Failure reported by the consumption function.
/// Dispatcher never propagates it, in manual mode it becomes a requeueing nack.
///
#[derive(Debug, thiserror::Error)]
pub enum ConsumeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("processing error: {0}")]
    Processing(#[from] anyhow::Error),
}

///
/// Failure of the ack/nack call itself. It is not retried.
///
#[derive(Debug, thiserror::Error)]
pub enum AckError {
    #[error("channel error: {0}")]
    Channel(#[from] amqprs::error::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum CancelError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("channel error: {0}")]
    Channel(#[from] amqprs::error::Error),
}
