//! 凭据解析：每次调用时从进程环境读取 API 密钥。
//!
//! Credential resolution. The key is read at call time, never cached, and any
//! failure to read it collapses into an empty value. An empty credential is a
//! normal state: it routes the mediator to its offline copy.

use std::env;

/// Default environment variable holding the generation API key.
pub const DEFAULT_CREDENTIAL_VAR: &str = "API_KEY";

/// Source of the API credential.
///
/// Implementations must not fail and must not retain state between calls.
pub trait CredentialResolver: Send + Sync + std::fmt::Debug {
    /// Returns the current credential, or an empty string when absent.
    fn resolve(&self) -> String;
}

/// Reads the credential from a process environment variable.
#[derive(Debug, Clone)]
pub struct EnvCredentialResolver {
    var: String,
}

impl EnvCredentialResolver {
    pub fn new() -> Self {
        Self::with_var(DEFAULT_CREDENTIAL_VAR)
    }

    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvCredentialResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialResolver for EnvCredentialResolver {
    fn resolve(&self) -> String {
        // NotPresent and NotUnicode are both "absent".
        env::var(&self.var).unwrap_or_default()
    }
}

/// A fixed credential, for hosts that inject configuration themselves.
#[derive(Clone, Default)]
pub struct StaticCredential(String);

impl StaticCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn empty() -> Self {
        Self(String::new())
    }
}

impl std::fmt::Debug for StaticCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.0.is_empty() { "empty" } else { "<redacted>" };
        f.debug_tuple("StaticCredential").field(&state).finish()
    }
}

impl CredentialResolver for StaticCredential {
    fn resolve(&self) -> String {
        self.0.clone()
    }
}

/// Serializes tests that touch the process environment; setenv is not
/// thread-safe against concurrent reads.
#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
