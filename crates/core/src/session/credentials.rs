//! Narrow credential interface shared by the HTTP layer and the route guard

use crate::error::SessionResult;
use std::rc::Rc;
use std::sync::Arc;

/// Access to the current bearer credential.
///
/// `token` never fails: anything other than a valid, unexpired credential
/// reads as `None`.
pub trait Credentials {
    fn token(&self) -> Option<String>;
    fn store(&self, token: &str, expires_in_secs: i64) -> SessionResult<()>;
    fn clear(&self);
}

impl<T: Credentials + ?Sized> Credentials for &T {
    fn token(&self) -> Option<String> {
        (**self).token()
    }

    fn store(&self, token: &str, expires_in_secs: i64) -> SessionResult<()> {
        (**self).store(token, expires_in_secs)
    }

    fn clear(&self) {
        (**self).clear();
    }
}

impl<T: Credentials + ?Sized> Credentials for Rc<T> {
    fn token(&self) -> Option<String> {
        (**self).token()
    }

    fn store(&self, token: &str, expires_in_secs: i64) -> SessionResult<()> {
        (**self).store(token, expires_in_secs)
    }

    fn clear(&self) {
        (**self).clear();
    }
}

impl<T: Credentials + ?Sized> Credentials for Arc<T> {
    fn token(&self) -> Option<String> {
        (**self).token()
    }

    fn store(&self, token: &str, expires_in_secs: i64) -> SessionResult<()> {
        (**self).store(token, expires_in_secs)
    }

    fn clear(&self) {
        (**self).clear();
    }
}
