//! Persisted bearer credential with lazy expiry

use super::clock::{Clock, SystemClock};
use super::codec::{decode_token, encode_token};
use super::credentials::Credentials;
use super::storage::KeyValueStore;
use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use tracing::{debug, warn};

/// What the backing storage currently holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStatus {
    /// No token entry
    Absent,
    /// Something is stored but cannot be read as a credential
    Malformed,
    Expired { expires_at: i64 },
    Valid { token: String, expires_at: i64 },
}

/// Owner of the single persisted credential record.
///
/// The record is two entries: the obfuscated token and its absolute expiry
/// in epoch milliseconds. A record is valid iff both parse and
/// `now <= expires_at`. Reading an expired record deletes it.
#[derive(Debug)]
pub struct TokenStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    config: SessionConfig,
}

impl<S: KeyValueStore> TokenStore<S, SystemClock> {
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> TokenStore<S, C> {
    pub fn with_clock(storage: S, clock: C) -> Self {
        Self::with_config(storage, clock, SessionConfig::default())
    }

    pub fn with_config(storage: S, clock: C, config: SessionConfig) -> Self {
        Self {
            storage,
            clock,
            config,
        }
    }

    /// Persist `token`, valid for `expires_in_secs` from now.
    ///
    /// A zero or negative lifetime stores a record that is already (or about
    /// to be) expired. The previous token entry is removed before the new
    /// expiry is written and the token goes last, so an interrupted write
    /// leaves no readable credential rather than a mismatched one.
    pub fn set(&self, token: &str, expires_in_secs: i64) -> SessionResult<()> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }

        let expires_at = self
            .clock
            .now_millis()
            .saturating_add(expires_in_secs.saturating_mul(1000));

        self.storage.remove_item(&self.config.token_key)?;
        self.storage
            .set_item(&self.config.expires_key, &expires_at.to_string())?;
        self.storage
            .set_item(&self.config.token_key, &encode_token(token))?;

        debug!(expires_at, "Stored session token");
        Ok(())
    }

    /// Persist `token` with the configured default lifetime
    pub fn set_default(&self, token: &str) -> SessionResult<()> {
        self.set(token, self.config.default_ttl_secs)
    }

    /// The raw token if a valid record is present. Purges an expired record.
    pub fn get(&self) -> Option<String> {
        match self.peek() {
            TokenStatus::Valid { token, .. } => Some(token),
            TokenStatus::Expired { expires_at } => {
                debug!(expires_at, "Session token expired, purging");
                self.clear();
                None
            }
            TokenStatus::Absent | TokenStatus::Malformed => None,
        }
    }

    /// Inspect the stored record without modifying storage
    pub fn peek(&self) -> TokenStatus {
        let encoded = match self.storage.get_item(&self.config.token_key) {
            Ok(Some(encoded)) => encoded,
            Ok(None) => return TokenStatus::Absent,
            Err(e) => {
                warn!("Failed to read session token: {e}");
                return TokenStatus::Absent;
            }
        };

        let Some(token) = decode_token(&encoded) else {
            warn!("Stored session token is not in the expected format");
            return TokenStatus::Malformed;
        };

        let expires_at = match self.storage.get_item(&self.config.expires_key) {
            Ok(Some(raw)) => match raw.trim().parse::<i64>() {
                Ok(expires_at) => expires_at,
                Err(_) => {
                    warn!("Stored session expiry is not a timestamp");
                    return TokenStatus::Malformed;
                }
            },
            Ok(None) => return TokenStatus::Malformed,
            Err(e) => {
                warn!("Failed to read session expiry: {e}");
                return TokenStatus::Absent;
            }
        };

        if self.clock.now_millis() > expires_at {
            TokenStatus::Expired { expires_at }
        } else {
            TokenStatus::Valid { token, expires_at }
        }
    }

    /// Purge the record if it has expired. Returns whether anything was purged.
    pub fn reconcile(&self) -> bool {
        if let TokenStatus::Expired { expires_at } = self.peek() {
            debug!(expires_at, "Session token expired, purging");
            self.clear();
            true
        } else {
            false
        }
    }

    /// Absolute expiry of the current valid record
    pub fn expires_at(&self) -> Option<i64> {
        match self.peek() {
            TokenStatus::Valid { expires_at, .. } => Some(expires_at),
            _ => None,
        }
    }

    /// Remove both entries. Safe to call when nothing is stored.
    pub fn clear(&self) {
        for key in [&self.config.token_key, &self.config.expires_key] {
            if let Err(e) = self.storage.remove_item(key) {
                warn!("Failed to remove {key}: {e}");
            }
        }
        debug!("Cleared session token");
    }
}

impl<S: KeyValueStore, C: Clock> Credentials for TokenStore<S, C> {
    fn token(&self) -> Option<String> {
        self.get()
    }

    fn store(&self, token: &str, expires_in_secs: i64) -> SessionResult<()> {
        self.set(token, expires_in_secs)
    }

    fn clear(&self) {
        TokenStore::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{ManualClock, MemoryStore, MockKeyValueStore};
    use std::rc::Rc;

    const START: i64 = 1_700_000_000_000;

    fn store() -> (TokenStore<Rc<MemoryStore>, ManualClock>, Rc<MemoryStore>, ManualClock) {
        let backing = Rc::new(MemoryStore::new());
        let clock = ManualClock::new(START);
        let store = TokenStore::with_clock(Rc::clone(&backing), clock.clone());
        (store, backing, clock)
    }

    #[test]
    fn test_set_then_get_returns_token() {
        let (store, _, _) = store();
        for (token, ttl) in [("abc123", 1), ("eyJ.x.y", 3600), ("t", 86_400 * 30)] {
            store.set(token, ttl).unwrap();
            assert_eq!(store.get().as_deref(), Some(token));
        }
    }

    #[test]
    fn test_token_expires_and_is_purged() {
        let (store, backing, clock) = store();
        store.set("abc123", 1).unwrap();
        assert_eq!(store.get().as_deref(), Some("abc123"));

        clock.advance(1100);
        assert_eq!(store.get(), None);
        assert_eq!(backing.get_item("auth_token_v1").unwrap(), None);
        assert_eq!(backing.get_item("auth_expires_v1").unwrap(), None);
        assert!(backing.is_empty());
    }

    #[test]
    fn test_token_valid_at_exact_expiry() {
        let (store, _, clock) = store();
        store.set("tok", 1).unwrap();

        clock.advance(1000);
        assert_eq!(store.get().as_deref(), Some("tok"));

        clock.advance(1);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_persisted_layout() {
        let (store, backing, _) = store();
        store.set("tok", 3600).unwrap();

        assert_eq!(
            backing.get_item("auth_token_v1").unwrap().as_deref(),
            Some("YnJrX3Rvaw==")
        );
        assert_eq!(
            backing.get_item("auth_expires_v1").unwrap(),
            Some((START + 3_600_000).to_string())
        );
        assert_eq!(store.expires_at(), Some(START + 3_600_000));
    }

    #[test]
    fn test_set_default_uses_configured_ttl() {
        let backing = MemoryStore::new();
        let clock = ManualClock::new(START);
        let config = SessionConfig {
            default_ttl_secs: 10,
            ..SessionConfig::default()
        };
        let store = TokenStore::with_config(&backing, clock.clone(), config);

        store.set_default("tok").unwrap();
        assert_eq!(store.expires_at(), Some(START + 10_000));

        clock.advance(10_001);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_set_overwrites_previous_record() {
        let (store, backing, clock) = store();
        store.set("first", 1).unwrap();
        store.set("second", 60).unwrap();

        clock.advance(5_000);
        assert_eq!(store.get().as_deref(), Some("second"));
        assert_eq!(backing.len(), 2);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (store, backing, _) = store();
        store.clear();
        assert_eq!(store.get(), None);

        store.set("tok", 3600).unwrap();
        store.clear();
        store.clear();
        assert_eq!(store.get(), None);
        assert!(backing.is_empty());
    }

    #[test]
    fn test_get_without_set_returns_none() {
        let (store, _, _) = store();
        assert_eq!(store.get(), None);
        assert_eq!(store.peek(), TokenStatus::Absent);
    }

    #[test]
    fn test_non_positive_ttl_is_not_an_error() {
        let (store, _, clock) = store();
        store.set("tok", -5).unwrap();
        assert_eq!(store.get(), None);

        store.set("tok", 0).unwrap();
        clock.advance(1);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let (store, backing, _) = store();
        assert_eq!(store.set("", 3600), Err(SessionError::EmptyToken));
        assert!(backing.is_empty());
    }

    #[test]
    fn test_corrupt_token_reads_as_absent() {
        let (store, backing, _) = store();
        store.set("tok", 3600).unwrap();

        for garbage in ["not base64 at all!", "aGVsbG8=", "", "{\"token\":\"x\"}"] {
            backing.set_item("auth_token_v1", garbage).unwrap();
            assert_eq!(store.get(), None, "garbage {garbage:?}");
            assert_eq!(store.peek(), TokenStatus::Malformed);
        }
    }

    #[test]
    fn test_corrupt_or_missing_expiry_reads_as_absent() {
        let (store, backing, _) = store();
        store.set("tok", 3600).unwrap();

        backing.set_item("auth_expires_v1", "tomorrow").unwrap();
        assert_eq!(store.get(), None);

        backing.remove_item("auth_expires_v1").unwrap();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_peek_is_pure_and_reconcile_purges() {
        let (store, backing, clock) = store();
        store.set("tok", 1).unwrap();
        clock.advance(2_000);

        assert_eq!(
            store.peek(),
            TokenStatus::Expired {
                expires_at: START + 1_000
            }
        );
        assert_eq!(backing.len(), 2);

        assert!(store.reconcile());
        assert!(backing.is_empty());
        assert!(!store.reconcile());
    }

    #[test]
    fn test_custom_keys() {
        let backing = MemoryStore::new();
        let config = SessionConfig {
            token_key: "t".into(),
            expires_key: "e".into(),
            ..SessionConfig::default()
        };
        let store = TokenStore::with_config(&backing, ManualClock::new(START), config);

        store.set("tok", 60).unwrap();
        assert!(backing.get_item("t").unwrap().is_some());
        assert!(backing.get_item("e").unwrap().is_some());
        assert!(backing.get_item("auth_token_v1").unwrap().is_none());
    }

    #[test]
    fn test_storage_read_failure_reads_as_absent() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get_item()
            .returning(|_| Err(SessionError::storage("access denied")));
        mock.expect_remove_item().never();

        let store = TokenStore::with_clock(mock, ManualClock::new(START));
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_storage_write_failure_is_reported() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_remove_item().returning(|_| Ok(()));
        mock.expect_set_item()
            .withf(|key, _| key == "auth_expires_v1")
            .times(1)
            .returning(|_, _| Err(SessionError::storage("quota exceeded")));

        let store = TokenStore::with_clock(mock, ManualClock::new(START));
        assert_eq!(
            store.set("tok", 60),
            Err(SessionError::storage("quota exceeded"))
        );
    }

    #[test]
    fn test_clear_attempts_both_keys_despite_failures() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_remove_item()
            .withf(|key| key == "auth_token_v1")
            .times(1)
            .returning(|_| Err(SessionError::storage("denied")));
        mock.expect_remove_item()
            .withf(|key| key == "auth_expires_v1")
            .times(1)
            .returning(|_| Ok(()));

        let store = TokenStore::with_clock(mock, ManualClock::new(START));
        store.clear();
    }

    #[test]
    fn test_valid_read_never_writes() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get_item()
            .withf(|key| key == "auth_token_v1")
            .returning(|_| Ok(Some(encode_token("tok"))));
        mock.expect_get_item()
            .withf(|key| key == "auth_expires_v1")
            .returning(|_| Ok(Some((START + 60_000).to_string())));
        mock.expect_set_item().never();
        mock.expect_remove_item().never();

        let store = TokenStore::with_clock(mock, ManualClock::new(START));
        assert_eq!(store.get().as_deref(), Some("tok"));
    }

    #[test]
    fn test_credentials_impl_delegates() {
        let (store, _, _) = store();
        let credentials: &dyn Credentials = &store;

        credentials.store("tok", 60).unwrap();
        assert_eq!(credentials.token().as_deref(), Some("tok"));
        credentials.clear();
        assert_eq!(credentials.token(), None);
    }
}
