//! Desk configuration
//!
//! Read from an optional TOML file, then overridden by the `API_KEY`
//! environment variable and command-line flags.
//!
//! ```toml
//! [annotation]
//! model = "gemini-2.5-flash"
//! default_stance = "قبول الطلب شكلاً وموضوعاً"
//!
//! [desk]
//! initial_role = "counsel"
//! record_status_changes = true
//! ```

use crate::error::DeskError;
use ldesk_annotate::backend::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use ldesk_annotate::{Annotator, GeminiBackend, StaticBackend, DEFAULT_STANCE};
use ldesk_case::{Role, StoreOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Environment variable holding the generator credential
pub const API_KEY_VAR: &str = "API_KEY";

/// Text returned by the offline backend
pub const OFFLINE_RESPONSE: &str = "وضع عدم الاتصال: لم يتم استدعاء المساعد الذكي.";

/// Desk configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// AI annotation settings
    pub annotation: AnnotationConfig,
    /// Desk behaviour
    pub desk: DeskSettings,
}

/// AI annotation settings
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationConfig {
    /// Generator credential; unset means every request short-circuits
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// Service host
    pub endpoint: String,
    /// Stance used for drafts when none is given
    pub default_stance: String,
}

impl fmt::Debug for AnnotationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotationConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("default_stance", &self.default_stance)
            .finish()
    }
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_stance: DEFAULT_STANCE.to_string(),
        }
    }
}

/// Desk behaviour settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskSettings {
    /// Role active at startup
    pub initial_role: Role,
    /// Load the three example cases at startup
    pub seed: bool,
    /// Append a log entry on every status change
    pub record_status_changes: bool,
}

impl Default for DeskSettings {
    fn default() -> Self {
        Self {
            initial_role: Role::President,
            seed: true,
            record_status_changes: false,
        }
    }
}

impl DeskConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// - `DeskError::Config` on malformed TOML or unknown values
    pub fn from_toml_str(text: &str) -> Result<Self, DeskError> {
        toml::from_str(text).map_err(|e| DeskError::Config(e.to_string()))
    }

    /// Load from `path`
    ///
    /// # Errors
    /// - `DeskError::Config` if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, DeskError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| DeskError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load from `path` if given, defaults otherwise
    ///
    /// # Errors
    /// Same as [`DeskConfig::load`]
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, DeskError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Apply overrides from the process environment
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_env_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from `lookup`
    #[must_use]
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(API_KEY_VAR).filter(|k| !k.trim().is_empty()) {
            self.annotation.api_key = Some(key);
        }
        self
    }

    /// With credential
    #[inline]
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.annotation.api_key = Some(key.into());
        self
    }

    /// With initial role
    #[inline]
    #[must_use]
    pub fn with_initial_role(mut self, role: Role) -> Self {
        self.desk.initial_role = role;
        self
    }

    /// With status-change audit entries
    #[inline]
    #[must_use]
    pub fn with_status_audit(mut self, enabled: bool) -> Self {
        self.desk.record_status_changes = enabled;
        self
    }

    /// Store options derived from the desk settings
    #[must_use]
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions::default().with_status_audit(self.desk.record_status_changes)
    }

    /// Check if a non-blank credential is configured
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.annotation
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }

    /// Build the annotator
    ///
    /// Offline mode answers every request with [`OFFLINE_RESPONSE`]. Without
    /// a credential the annotator is unconfigured.
    ///
    /// # Errors
    /// - `DeskError::Backend` if the HTTP client cannot be built
    pub fn build_annotator(&self, offline: bool) -> Result<Annotator, DeskError> {
        if offline {
            return Ok(Annotator::new(Arc::new(StaticBackend::new(OFFLINE_RESPONSE))));
        }
        let Some(key) = self.annotation.api_key.as_deref().filter(|_| self.has_credential()) else {
            tracing::info!("no API key configured, AI actions will report it");
            return Ok(Annotator::unconfigured());
        };

        let backend = GeminiBackend::new(key)?
            .with_endpoint(self.annotation.endpoint.as_str())
            .with_model(self.annotation.model.as_str());
        Ok(Annotator::new(Arc::new(backend)))
    }
}
