//! Adapter configuration, fixed at process start.

use std::fmt;
use std::time::Duration;

/// Backend used when `API_BASE_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Timeout applied to every outbound backend request.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Which tool surface the process exposes.
///
/// - `Authenticated`: acts on behalf of one configured user; read and write tools
/// - `Public`: no credential; read-only tools over public and featured prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Variant {
    Authenticated,
    Public,
}

impl Variant {
    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::Authenticated => "authenticated",
            Variant::Public => "public",
        }
    }

    /// Whether this variant ever sends the bearer credential.
    pub const fn uses_credential(self) -> bool {
        matches!(self, Variant::Authenticated)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the dispatcher needs, passed by construction.
#[derive(Clone)]
pub struct AdapterConfig {
    pub variant: Variant,
    /// Backend base URL without the `/api/v1` prefix
    pub base_url: String,
    credential: Option<String>,
    pub timeout: Duration,
}

impl AdapterConfig {
    pub fn new(variant: Variant, base_url: impl Into<String>) -> Self {
        Self {
            variant,
            base_url: base_url.into(),
            credential: None,
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }

    /// Attach the bearer token. Ignored by the public variant and when blank.
    pub fn with_credential(mut self, token: Option<String>) -> Self {
        let accepted = self.variant.uses_credential();
        self.credential = token
            .map(|t| t.trim().to_string())
            .filter(|t| accepted && !t.is_empty());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self::new(Variant::Authenticated, DEFAULT_API_BASE_URL)
    }
}

impl fmt::Debug for AdapterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterConfig")
            .field("variant", &self.variant)
            .field("base_url", &self.base_url)
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_variant_drops_credential() {
        let config = AdapterConfig::new(Variant::Public, DEFAULT_API_BASE_URL)
            .with_credential(Some("secret".to_string()));
        assert!(config.credential().is_none());
    }

    #[test]
    fn test_blank_credential_is_treated_as_missing() {
        let config = AdapterConfig::default().with_credential(Some("   ".to_string()));
        assert!(config.credential().is_none());

        let config = AdapterConfig::default().with_credential(Some(" tok ".to_string()));
        assert_eq!(config.credential(), Some("tok"));
    }

    #[test]
    fn test_debug_redacts_credential() {
        let config = AdapterConfig::default().with_credential(Some("secret".to_string()));
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
