//!
//! Module with user programmable callbacks
//!

mod envelope_consumer;

pub use envelope_consumer::*;
