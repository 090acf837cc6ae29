use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::constants::{API_KEY_NAME, APP_NAME};

/// Provider API key. Never logged, never written anywhere.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw value; blank input yields `None`
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Where the session's API key came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    SecretsFile,
    Keyring,
    Environment,
    /// Typed in by the user for this session only
    Manual,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CredentialSource::SecretsFile => "secrets file",
            CredentialSource::Keyring => "keyring",
            CredentialSource::Environment => "environment",
            CredentialSource::Manual => "manual entry",
        };
        f.write_str(name)
    }
}

/// Debug information about credential sources
#[derive(Debug, Clone)]
pub struct CredentialDebugInfo {
    pub secrets_file: PathBuf,
    pub secrets_file_has_key: bool,
    pub keyring_has_key: bool,
    pub env_var_set: bool,
}

impl fmt::Display for CredentialDebugInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Credential Sources ({}):", API_KEY_NAME)?;
        writeln!(f, "  Secrets file: {}", self.secrets_file.display())?;
        writeln!(
            f,
            "    key: {}",
            if self.secrets_file_has_key { "set" } else { "not set" }
        )?;
        writeln!(
            f,
            "  Keyring: {}",
            if self.keyring_has_key { "set" } else { "not set" }
        )?;
        writeln!(
            f,
            "  Environment var ({}): {}",
            API_KEY_NAME,
            if self.env_var_set { "set" } else { "not set" }
        )?;
        Ok(())
    }
}

/// Resolves the API key from the secret store, then the environment.
///
/// The secret store is the `secrets.toml` file in the config directory
/// followed by the OS keyring; both are keyed by `GROQ_API_KEY`.
pub struct CredentialResolver {
    secrets_file: PathBuf,
    use_keyring: bool,
}

impl CredentialResolver {
    pub fn new() -> Self {
        let secrets_file = crate::config::Config::config_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("secrets.toml");

        Self {
            secrets_file,
            use_keyring: true,
        }
    }

    #[cfg(test)]
    fn with_secrets_file(secrets_file: PathBuf) -> Self {
        Self {
            secrets_file,
            use_keyring: false,
        }
    }

    /// Resolve using the process environment
    pub fn resolve(&self) -> Option<(ApiKey, CredentialSource)> {
        self.resolve_with(|name| env::var(name).ok())
    }

    /// Resolve with an injected environment lookup.
    ///
    /// Returns the first non-empty value; `None` is a normal outcome.
    pub fn resolve_with<F>(&self, env_lookup: F) -> Option<(ApiKey, CredentialSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 1. Secret store: secrets file
        if let Some(key) = self.file_get() {
            return Some((key, CredentialSource::SecretsFile));
        }

        // 2. Secret store: keyring
        if let Some(key) = self.keyring_get() {
            return Some((key, CredentialSource::Keyring));
        }

        // 3. Environment variable
        if let Some(key) = env_lookup(API_KEY_NAME).and_then(ApiKey::new) {
            return Some((key, CredentialSource::Environment));
        }

        None
    }

    /// Get diagnostic info about each credential source
    pub fn debug_info(&self) -> CredentialDebugInfo {
        CredentialDebugInfo {
            secrets_file: self.secrets_file.clone(),
            secrets_file_has_key: self.file_get().is_some(),
            keyring_has_key: self.keyring_get().is_some(),
            env_var_set: env::var(API_KEY_NAME)
                .ok()
                .and_then(ApiKey::new)
                .is_some(),
        }
    }

    /// Read `GROQ_API_KEY` from the secrets file
    fn file_get(&self) -> Option<ApiKey> {
        let content = fs::read_to_string(&self.secrets_file).ok()?;
        let table: toml::Table = match toml::from_str(&content) {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(
                    "Ignoring malformed secrets file {}: {}",
                    self.secrets_file.display(),
                    e
                );
                return None;
            }
        };
        table
            .get(API_KEY_NAME)
            .and_then(|v| v.as_str())
            .and_then(ApiKey::new)
    }

    /// Try to get the key from the OS keyring
    fn keyring_get(&self) -> Option<ApiKey> {
        if !self.use_keyring {
            return None;
        }
        let entry = keyring::Entry::new(APP_NAME, API_KEY_NAME).ok()?;
        entry.get_password().ok().and_then(ApiKey::new)
    }
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::new()
    }
}
