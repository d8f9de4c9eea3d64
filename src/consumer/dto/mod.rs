mod acknowledgment_mode;
mod consume_outcome;
mod envelope;
mod shutdown_signal;

pub use acknowledgment_mode::AcknowledgmentMode;
pub use consume_outcome::ConsumeOutcome;
pub use envelope::Envelope;
pub use shutdown_signal::ShutdownSignal;
