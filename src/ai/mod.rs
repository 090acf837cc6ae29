//! Reply generation against a hosted chat-completion provider
//!
//! This module holds the provider contract:
//! - Tone selection and the system prompt built from it
//! - The completion client (Groq's OpenAI-compatible endpoint)
//! - Decoding of the model's JSON reply into a `ModelResponse`

mod client;
mod prompts;
mod response;
mod tone;

pub use client::{CompletionBackend, CompletionSettings, GroqClient};
pub use prompts::build_system_prompt;
pub use response::{Intent, ModelResponse, parse_response};
pub use tone::Tone;
