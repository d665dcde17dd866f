//! Access token registry.
//!
//! Tokens are opaque UUIDv4 strings handed out by `GET /auth`. Issued tokens
//! are kept up to a capacity; past it the oldest issued token is forgotten.
//! Registered tokens (the debug token) are pinned and never evicted.

use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;

use uuid::Uuid;

use crate::config::DEFAULT_MAX_TOKENS;

#[derive(Debug, Default)]
struct Tokens {
    /// Token -> issue order
    entries: HashMap<String, usize>,
    /// Evictable tokens, oldest first
    issued: VecDeque<String>,
    next_order: usize,
}

impl Tokens {
    fn insert(&mut self, token: String) -> usize {
        let order = self.next_order;
        self.next_order += 1;
        self.entries.insert(token, order);
        order
    }
}

/// In-memory token store shared by all request handlers.
#[derive(Debug)]
pub struct TokenRegistry {
    tokens: RwLock<Tokens>,
    capacity: usize,
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_TOKENS)
    }
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `capacity` issued tokens (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: RwLock::new(Tokens::default()),
            capacity: capacity.max(1),
        }
    }

    /// Issue and register a fresh token, evicting the oldest issued one when full.
    pub fn issue(&self) -> String {
        let token = Uuid::new_v4().to_string();
        let mut tokens = self.tokens.write().unwrap_or_else(|e| e.into_inner());
        while tokens.issued.len() >= self.capacity {
            match tokens.issued.pop_front() {
                Some(oldest) => {
                    tokens.entries.remove(&oldest);
                }
                None => break,
            }
        }
        tokens.insert(token.clone());
        tokens.issued.push_back(token.clone());
        token
    }

    /// Register a pinned token (the debug token). Re-registering is a no-op.
    pub fn register(&self, token: String) {
        let mut tokens = self.tokens.write().unwrap_or_else(|e| e.into_inner());
        if !tokens.entries.contains_key(&token) {
            tokens.insert(token);
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.read().entries.contains_key(token)
    }

    /// Issue order (0 for the first token ever registered).
    pub fn order(&self, token: &str) -> Option<usize> {
        self.read().entries.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Tokens> {
        self.tokens.read().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_returns_uuid_v4() {
        let registry = TokenRegistry::new();
        let token = registry.issue();
        let parsed = Uuid::parse_str(&token).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert!(registry.contains(&token));
    }

    #[test]
    fn test_order_follows_issue_sequence() {
        let registry = TokenRegistry::new();
        registry.register("dev-token".into());
        let second = registry.issue();
        assert_eq!(registry.order("dev-token"), Some(0));
        assert_eq!(registry.order(&second), Some(1));

        registry.register("dev-token".into());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_oldest_issued_token_is_evicted() {
        let registry = TokenRegistry::with_capacity(2);
        let first = registry.issue();
        let second = registry.issue();
        let third = registry.issue();

        assert!(!registry.contains(&first));
        assert!(registry.contains(&second));
        assert!(registry.contains(&third));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.order(&third), Some(2));
    }

    #[test]
    fn test_pinned_token_survives_eviction() {
        let registry = TokenRegistry::with_capacity(1);
        registry.register("dev-token".into());
        for _ in 0..5 {
            registry.issue();
        }
        assert!(registry.contains("dev-token"));
        assert_eq!(registry.len(), 2);
    }
}
