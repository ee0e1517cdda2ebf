//! Client-side filters over cached lists.
//!
//! Every criterion is optional; an all-`None` filter matches everything.
//! Text search is a case-insensitive substring match and blank search text
//! is ignored.

use super::models::{Mortgage, PropertyKind, RealEstate, Rental};
use rust_decimal::Decimal;

pub trait ListingFilter<T> {
    fn matches(&self, item: &T) -> bool;
}

fn search_matches(search: Option<&str>, fields: &[&str]) -> bool {
    let Some(needle) = search.map(str::trim).filter(|s| !s.is_empty()) else {
        return true;
    };
    let needle = needle.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

fn at_least<T: PartialOrd>(value: T, min: Option<T>) -> bool {
    min.is_none_or(|min| value >= min)
}

fn at_most<T: PartialOrd>(value: T, max: Option<T>) -> bool {
    max.is_none_or(|max| value <= max)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RealEstateFilter {
    /// Matched against title, address and city
    pub search: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub kind: Option<PropertyKind>,
    pub min_bedrooms: Option<u32>,
}

impl ListingFilter<RealEstate> for RealEstateFilter {
    fn matches(&self, item: &RealEstate) -> bool {
        search_matches(
            self.search.as_deref(),
            &[item.title.as_str(), item.address.as_str(), item.city.as_str()],
        ) && at_least(item.price, self.min_price)
            && at_most(item.price, self.max_price)
            && self.kind.is_none_or(|kind| kind == item.kind)
            && at_least(item.bedrooms, self.min_bedrooms)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RentalFilter {
    /// Matched against title, address and city
    pub search: Option<String>,
    pub max_monthly_rent: Option<Decimal>,
    pub min_bedrooms: Option<u32>,
    pub furnished: Option<bool>,
}

impl ListingFilter<Rental> for RentalFilter {
    fn matches(&self, item: &Rental) -> bool {
        search_matches(
            self.search.as_deref(),
            &[item.title.as_str(), item.address.as_str(), item.city.as_str()],
        ) && at_most(item.monthly_rent, self.max_monthly_rent)
            && at_least(item.bedrooms, self.min_bedrooms)
            && self.furnished.is_none_or(|furnished| furnished == item.furnished)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MortgageFilter {
    /// Matched against product name and lender
    pub search: Option<String>,
    pub max_interest_rate: Option<Decimal>,
    pub min_term_years: Option<u32>,
    pub max_term_years: Option<u32>,
    /// Keep products able to lend at least this much
    pub loan_amount: Option<Decimal>,
}

impl ListingFilter<Mortgage> for MortgageFilter {
    fn matches(&self, item: &Mortgage) -> bool {
        search_matches(self.search.as_deref(), &[item.name.as_str(), item.lender.as_str()])
            && at_most(item.interest_rate, self.max_interest_rate)
            && at_least(item.term_years, self.min_term_years)
            && at_most(item.term_years, self.max_term_years)
            && self.loan_amount.is_none_or(|amount| amount <= item.max_amount)
    }
}
