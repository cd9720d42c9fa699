use serde::Serialize;
use thiserror::Error;

use crate::store::{CookieStore, StoreError};
use crate::util::domain::normalize_domain;
use crate::util::expire;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CookieError {
    #[error("cookie name must not be empty")]
    EmptyName,

    #[error("invalid cookie domain: {0:?}")]
    InvalidDomain(String),
}

/// What `set_domain` does when the domain normalizer rejects the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainPolicy {
    /// Leave the domain field unchanged.
    #[default]
    Keep,
    /// Clear the domain field, leaving the cookie host-scoped.
    Clear,
    /// Fail the call with [`CookieError::InvalidDomain`].
    Fail,
}

impl DomainPolicy {
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "keep" => Some(Self::Keep),
            "clear" => Some(Self::Clear),
            "fail" => Some(Self::Fail),
            _ => None,
        }
    }
}

impl std::fmt::Display for DomainPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keep => write!(f, "keep"),
            Self::Clear => write!(f, "clear"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// An HTTP cookie as a value object.
///
/// Fields are private so two invariants always hold: `name` is never empty,
/// and `domain`, when set, is normalizer output (canonical leading-dot form),
/// never raw caller input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cookie {
    name: String,
    value: String,
    #[serde(rename = "expiresAt")]
    expires_at: i64,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<String>,
    secure: bool,
    #[serde(rename = "httpOnly")]
    http_only: bool,
}

impl Cookie {
    /// Creates a session-ish cookie: path `/`, expiring now, no domain,
    /// neither secure nor http-only.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self, CookieError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CookieError::EmptyName);
        }
        Ok(Self {
            name,
            value: value.into(),
            expires_at: expire::unix_now(),
            path: "/".to_string(),
            domain: None,
            secure: false,
            http_only: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the cookie. Empty input is silently ignored.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !name.is_empty() {
            self.name = name;
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Expiration as Unix seconds.
    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }

    pub fn set_expires_at(&mut self, timestamp: i64) {
        self.expires_at = timestamp;
    }

    /// Sets the expiration to `seconds` from now, saturating at the i64
    /// bounds.
    pub fn expires_in(&mut self, seconds: i64) {
        self.expires_at = expire::unix_now().saturating_add(seconds);
    }

    pub fn is_expired(&self) -> bool {
        expire::is_past(self.expires_at)
    }

    /// Seconds until expiration; negative once the cookie has expired.
    pub fn remaining_time(&self) -> i64 {
        expire::seconds_until(self.expires_at)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    /// The canonical cookie domain, if any.
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// Normalizes `raw` and stores the canonical result. When normalization
    /// rejects the input, `policy` decides whether the field is kept,
    /// cleared, or the call fails.
    pub fn set_domain(&mut self, raw: &str, policy: DomainPolicy) -> Result<(), CookieError> {
        match normalize_domain(raw) {
            Some(domain) => {
                self.domain = Some(domain);
                Ok(())
            }
            None => match policy {
                DomainPolicy::Keep => Ok(()),
                DomainPolicy::Clear => {
                    self.domain = None;
                    Ok(())
                }
                DomainPolicy::Fail => Err(CookieError::InvalidDomain(raw.to_string())),
            },
        }
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    pub fn set_secure(&mut self, secure: bool) {
        self.secure = secure;
    }

    pub fn is_http_only(&self) -> bool {
        self.http_only
    }

    pub fn set_http_only(&mut self, http_only: bool) {
        self.http_only = http_only;
    }

    /// Fetches a cookie from the store by name. The stored domain is passed
    /// through the normalizer again; for well-formed stores this is a no-op
    /// since canonical domains are fixed points.
    pub fn load(store: &dyn CookieStore, name: &str) -> Option<Self> {
        let mut cookie = store.get(name)?;
        cookie.domain = cookie.domain.as_deref().and_then(normalize_domain);
        Some(cookie)
    }

    /// Writes the cookie to the store, then reads back the stored record.
    pub fn save(&self, store: &mut dyn CookieStore) -> Result<Option<Self>, StoreError> {
        store.set(self)?;
        Ok(Self::load(store, &self.name))
    }

    /// Removes the cookie from the store. No-op when absent.
    pub fn delete(&self, store: &mut dyn CookieStore) {
        store.delete(&self.name);
    }
}

/// Builder for [`Cookie`] with the same defaults as [`Cookie::new`].
#[derive(Debug, Clone)]
pub struct CookieOptions {
    name: String,
    value: String,
    expires_at: Option<i64>,
    path: String,
    domain: Option<String>,
    secure: bool,
    http_only: bool,
    domain_policy: DomainPolicy,
}

impl CookieOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            expires_at: None,
            path: "/".to_string(),
            domain: None,
            secure: false,
            http_only: false,
            domain_policy: DomainPolicy::default(),
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn expires_at(mut self, timestamp: i64) -> Self {
        self.expires_at = Some(timestamp);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Raw domain input; normalized by [`CookieOptions::build`].
    pub fn domain(mut self, raw: impl Into<String>) -> Self {
        self.domain = Some(raw.into());
        self
    }

    pub fn domain_policy(mut self, policy: DomainPolicy) -> Self {
        self.domain_policy = policy;
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    pub fn build(self) -> Result<Cookie, CookieError> {
        let mut cookie = Cookie::new(self.name, self.value)?;
        cookie.set_path(self.path);
        if let Some(timestamp) = self.expires_at {
            cookie.set_expires_at(timestamp);
        }
        cookie.set_secure(self.secure);
        cookie.set_http_only(self.http_only);
        if let Some(raw) = &self.domain {
            cookie.set_domain(raw, self.domain_policy)?;
        }
        Ok(cookie)
    }
}
