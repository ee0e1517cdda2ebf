//! Session token lifecycle and route authorization
//!
//! A [`TokenStore`] owns the single persisted bearer credential. The
//! [`SessionGuard`] decides navigation purely from the store's current
//! validity. Both are constructed once and passed explicitly to whoever
//! needs them; there is no ambient session state.
//!
//! Two tabs writing the same backing storage are not coordinated: the last
//! write wins.

mod clock;
mod codec;
mod credentials;
mod guard;
mod storage;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use codec::{TOKEN_PREFIX, decode_token, encode_token};
pub use credentials::Credentials;
pub use guard::{Decision, SessionGuard, SessionState};
pub use storage::{KeyValueStore, MemoryStore};
pub use store::{TokenStatus, TokenStore};

#[cfg(test)]
pub use storage::MockKeyValueStore;
