use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    House,
    Apartment,
    Land,
    Commercial,
    #[serde(other)]
    Other,
}

impl PropertyKind {
    pub const ALL: [Self; 5] = [
        Self::House,
        Self::Apartment,
        Self::Land,
        Self::Commercial,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::House => "house",
            Self::Apartment => "apartment",
            Self::Land => "land",
            Self::Commercial => "commercial",
            Self::Other => "other",
        }
    }
}

/// Property offered for sale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RealEstate {
    pub id: i64,
    pub title: String,
    pub address: String,
    pub city: String,
    pub kind: PropertyKind,
    pub price: Decimal,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub area_sqm: Option<Decimal>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub listed_at: Option<DateTime<Utc>>,
}

/// Property offered for rent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rental {
    pub id: i64,
    pub title: String,
    pub address: String,
    pub city: String,
    pub monthly_rent: Decimal,
    #[serde(default)]
    pub deposit: Option<Decimal>,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub furnished: bool,
    #[serde(default)]
    pub available_from: Option<NaiveDate>,
}

/// Mortgage product offered by a lender
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mortgage {
    pub id: i64,
    pub name: String,
    pub lender: String,
    /// Annual rate in percent
    pub interest_rate: Decimal,
    pub term_years: u32,
    pub max_amount: Decimal,
    #[serde(default)]
    pub min_down_payment_percent: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_estate_from_backend_json() {
        let json = r#"{
            "id": 7,
            "title": "Sunny house",
            "address": "1 Main St",
            "city": "Lisbon",
            "kind": "house",
            "price": 250000,
            "bedrooms": 3
        }"#;

        let item: RealEstate = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, PropertyKind::House);
        assert_eq!(item.price, Decimal::from(250_000));
        assert_eq!(item.area_sqm, None);
    }

    #[test]
    fn test_unknown_kind_maps_to_other() {
        let kind: PropertyKind = serde_json::from_str(r#""castle""#).unwrap();
        assert_eq!(kind, PropertyKind::Other);
    }

    #[test]
    fn test_mortgage_accepts_string_decimals() {
        let json = r#"{
            "id": 1,
            "name": "Fixed 30",
            "lender": "First Bank",
            "interest_rate": "3.75",
            "term_years": 30,
            "max_amount": "500000.00"
        }"#;

        let mortgage: Mortgage = serde_json::from_str(json).unwrap();
        assert_eq!(mortgage.interest_rate, Decimal::new(375, 2));
        assert_eq!(mortgage.term_years, 30);
    }
}
