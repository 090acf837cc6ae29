//! Application-wide constants for tuning and configuration
//!
//! Centralizes magic numbers to make them discoverable and configurable.

/// Name of the secret/environment key holding the provider API key.
pub const API_KEY_NAME: &str = "GROQ_API_KEY";

/// Service name used for the keyring entry and the config directory.
pub const APP_NAME: &str = "mailreply";

/// Chat-completion endpoint of the hosted provider.
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Small instruction-tuned model pinned for fast replies.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Sampling temperature sent with every completion request.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Upper bound on generated tokens per completion.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

// === Response defaults ===

/// Intent shown when the model omits the `intent` key.
pub const DEFAULT_INTENT: &str = "Unknown";

/// Tone shown when the model omits the `tone` key.
pub const DEFAULT_TONE: &str = "Professional";

// === UI Constants ===

/// Error message display duration in seconds before auto-dismiss.
pub const ERROR_TTL_SECS: u64 = 8;

/// Toast (confirmation) display duration in seconds.
pub const TOAST_TTL_SECS: u64 = 3;

/// Input poll interval for the event loop in milliseconds.
pub const POLL_INTERVAL_MS: u64 = 150;

/// Height in lines of the email input pane.
pub const EMAIL_PANE_HEIGHT: u16 = 10;
