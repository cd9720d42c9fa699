use std::collections::HashMap;

use thiserror::Error;

use crate::types::Cookie;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("cookie rejected by store: {0}")]
    Rejected(String),
}

/// Key-value access to wherever cookies actually live: the incoming cookie
/// table of a request, a test fixture, a browser profile. Keyed by cookie
/// name.
pub trait CookieStore {
    fn get(&self, name: &str) -> Option<Cookie>;

    fn set(&mut self, cookie: &Cookie) -> Result<(), StoreError>;

    fn delete(&mut self, name: &str);
}

/// In-memory reference store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cookies: HashMap<String, Cookie>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl CookieStore for MemoryStore {
    fn get(&self, name: &str) -> Option<Cookie> {
        self.cookies.get(name).cloned()
    }

    fn set(&mut self, cookie: &Cookie) -> Result<(), StoreError> {
        self.cookies.insert(cookie.name().to_string(), cookie.clone());
        Ok(())
    }

    fn delete(&mut self, name: &str) {
        self.cookies.remove(name);
    }
}
