//! Brokerage admin client core: session token lifecycle, route guard and
//! client-side listing filters

pub mod config;
pub mod error;
pub mod listings;
pub mod session;

pub use config::{RouteConfig, SessionConfig};
pub use error::{SessionError, SessionResult};
pub use listings::{
    ListStore, ListingFilter, Mortgage, MortgageFilter, PropertyKind, RealEstate,
    RealEstateFilter, Rental, RentalFilter, UserProfile,
};
pub use session::{
    Clock, Credentials, Decision, KeyValueStore, ManualClock, MemoryStore, SessionGuard,
    SessionState, SystemClock, TokenStatus, TokenStore,
};
