//! Brokerage resources and client-side filtering of fetched lists

mod filter;
mod models;
mod store;

pub use filter::{ListingFilter, MortgageFilter, RealEstateFilter, RentalFilter};
pub use models::{Mortgage, PropertyKind, RealEstate, Rental, UserProfile};
pub use store::ListStore;
