//! Hosted text-generation providers for dilemma generation and decision
//! commentary.
//!
//! Providers sit behind the [`provider::TextProvider`] trait so the
//! [`client::AiClient`] can try them in order and tests can substitute a
//! fake.

pub mod client;
pub mod config;
pub mod error;
pub mod gemini;
pub mod openai;
pub mod prompts;
pub mod provider;

pub use client::AiClient;
pub use config::AiConfig;
pub use error::AiError;
pub use provider::TextProvider;
