//! # Web Service
//!
//! Messaging-gateway transport: a Twilio-compatible webhook that feeds the
//! dialogue engine and wraps its reply in a TwiML envelope, plus a static
//! liveness endpoint.

pub mod controllers;
pub mod server;
pub mod twiml;

pub use server::{run, AppState};
pub use twiml::MessagingResponse;
