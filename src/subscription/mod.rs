//!
//! Module that attaches a dispatcher to a queue on an already open channel.
//! Declaring topology and recovering connections is left to the caller.
//!

mod dto;
mod subscription;

pub use dto::SubscriptionConfig;
pub use subscription::Subscription;
