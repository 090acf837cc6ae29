//! Per-session context and the generate action
//!
//! A `Session` owns everything that lives for one interactive run: the
//! resolved credential, the last chosen tone and the last successful result.
//! It is created on session start, passed explicitly to every operation and
//! torn down with `Session::end`.

use thiserror::Error;

use crate::ai::{CompletionBackend, ModelResponse, Tone, build_system_prompt, parse_response};
use crate::credentials::{ApiKey, CredentialResolver, CredentialSource};

/// One generate request: the pasted email exactly as entered, plus the tone
#[derive(Debug, Clone)]
pub struct EmailRequest {
    pub text: String,
    pub tone: Tone,
}

impl EmailRequest {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Outcome tags for a failed generate action
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Missing API key. Add GROQ_API_KEY to secrets.toml or the environment, or enter it manually.")]
    MissingCredential,
    #[error("Please paste an email to analyze.")]
    EmptyInput,
    #[error("An error occurred: {0:#}")]
    ProviderFailure(#[source] anyhow::Error),
    #[error("Failed to parse the model response. Please try again.")]
    DecodeFailure { raw: String },
}

impl GenerateError {
    /// Validation problems are shown as warnings rather than errors
    pub fn is_warning(&self) -> bool {
        matches!(self, GenerateError::EmptyInput)
    }

    /// Raw model output to show for diagnosis, if any
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            GenerateError::DecodeFailure { raw } => Some(raw),
            _ => None,
        }
    }
}

/// The last successfully parsed model output
pub type SessionResult = ModelResponse;

/// Holds at most one `SessionResult`; every write replaces it whole
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    result: Option<SessionResult>,
}

impl ResultStore {
    pub fn set(&mut self, result: SessionResult) -> &SessionResult {
        self.result.insert(result)
    }

    pub fn get(&self) -> Option<&SessionResult> {
        self.result.as_ref()
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    fn clear(&mut self) {
        self.result = None;
    }
}

pub struct Session {
    credential: Option<(ApiKey, CredentialSource)>,
    /// Last tone the user picked
    pub tone: Tone,
    store: ResultStore,
}

impl Session {
    /// Start a session, resolving the credential once
    pub fn start(resolver: &CredentialResolver, tone: Tone) -> Self {
        let credential = resolver.resolve();
        match &credential {
            Some((_, source)) => tracing::info!("Session started, API key loaded from {}", source),
            None => tracing::info!("Session started without an API key"),
        }
        Self::with_credential(credential, tone)
    }

    pub fn with_credential(credential: Option<(ApiKey, CredentialSource)>, tone: Tone) -> Self {
        Self {
            credential,
            tone,
            store: ResultStore::default(),
        }
    }

    /// Tear the session down, dropping the key and the stored result
    pub fn end(mut self) {
        self.credential = None;
        self.store.clear();
        tracing::info!("Session ended");
    }

    pub fn credential_source(&self) -> Option<CredentialSource> {
        self.credential.as_ref().map(|(_, source)| *source)
    }

    /// Use a manually entered key for the rest of this session.
    /// Returns false (and changes nothing) for a blank value.
    pub fn set_manual_key(&mut self, raw: &str) -> bool {
        match ApiKey::new(raw) {
            Some(key) => {
                self.credential = Some((key, CredentialSource::Manual));
                tracing::info!("Using manually entered API key for this session");
                true
            }
            None => false,
        }
    }

    pub fn result(&self) -> Option<&SessionResult> {
        self.store.get()
    }

    pub fn has_result(&self) -> bool {
        self.store.has_result()
    }

    /// Run one generate action: validate, request, parse, store.
    ///
    /// The store is only written after a successful parse; every failure
    /// leaves the previous result untouched.
    pub async fn generate<C: CompletionBackend>(
        &mut self,
        client: &C,
        request: &EmailRequest,
    ) -> Result<&SessionResult, GenerateError> {
        self.tone = request.tone;

        tracing::debug!("Validating generate request");
        let Some((api_key, _)) = &self.credential else {
            tracing::warn!("Generate rejected: no API key");
            return Err(GenerateError::MissingCredential);
        };
        if request.is_blank() {
            tracing::warn!("Generate rejected: empty email");
            return Err(GenerateError::EmptyInput);
        }

        let system_prompt = build_system_prompt(request.tone);
        tracing::info!(tone = %request.tone, model = client.model(), "Requesting reply");

        let raw = client
            .complete(api_key, &system_prompt, &request.text)
            .await
            .map_err(|e| {
                tracing::error!("Completion failed: {:#}", e);
                GenerateError::ProviderFailure(e)
            })?;

        tracing::debug!(chars = raw.chars().count(), "Parsing completion");
        let response = parse_response(&raw).map_err(|e| {
            tracing::error!("{}", e);
            GenerateError::DecodeFailure { raw: e.raw }
        })?;

        tracing::info!(intent = %response.intent, tone = %response.tone, "Reply generated");
        Ok(self.store.set(response))
    }
}
