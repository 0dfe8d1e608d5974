// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between the browser and the server functions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "db-tools")]
use sqlx::FromRow;

/// Select value used by the category control for "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// Business listing (matches the businesses table)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db-tools", derive(FromRow))]
pub struct Business {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Canonical stored category value, e.g. `food_and_drink`
    pub category: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub image_url: Option<String>,
    /// Free-text product catalog, searched alongside name and description
    pub products: Option<String>,
    pub rating: Decimal,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category selection coming from the filter control
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Parse the value of the category `<select>`
    pub fn from_select_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value.to_string())
        }
    }

    pub fn select_value(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(label) => label,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Named(label) => Some(label),
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All Categories"),
            CategoryFilter::Named(label) => write!(f, "{}", label),
        }
    }
}

/// The three filter values the directory page reacts to
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryFilters {
    pub search: String,
    pub category: CategoryFilter,
    pub location: String,
}

impl DirectoryFilters {
    pub fn search_text(&self) -> Option<&str> {
        non_blank(&self.search)
    }

    pub fn location_text(&self) -> Option<&str> {
        non_blank(&self.location)
    }

    /// True when no filter criterion has been expressed yet
    pub fn is_default(&self) -> bool {
        self.search_text().is_none()
            && self.category == CategoryFilter::All
            && self.location_text().is_none()
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Business from the JSON seed file (flexible schema)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BusinessImport {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub image_url: Option<String>,
    pub products: Option<String>,
    pub rating: Option<f64>,
    pub owner_id: Option<Uuid>,
}

impl BusinessImport {
    pub fn into_business(self, now: DateTime<Utc>) -> Business {
        let rating = self
            .rating
            .and_then(Decimal::from_f64_retain)
            .map(|r| r.round_dp(1))
            .unwrap_or_default();

        Business {
            id: Uuid::new_v4(),
            name: self.name,
            description: self.description,
            category: self.category,
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            phone: self.phone,
            email: self.email,
            website: self.website,
            image_url: self.image_url,
            products: self.products,
            rating,
            owner_id: self.owner_id.unwrap_or_else(Uuid::nil),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Contents of the seed file: category names plus businesses
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DirectorySeed {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub businesses: Vec<BusinessImport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_default() {
        let filters = DirectoryFilters::default();
        assert!(filters.is_default());
        assert_eq!(filters.category, CategoryFilter::All);
    }

    #[test]
    fn test_whitespace_filters_count_as_empty() {
        let filters = DirectoryFilters {
            search: "   ".to_string(),
            category: CategoryFilter::All,
            location: "\t".to_string(),
        };
        assert!(filters.is_default());
        assert_eq!(filters.search_text(), None);
    }

    #[test]
    fn test_any_single_filter_is_not_default() {
        let search = DirectoryFilters { search: "coffee".into(), ..Default::default() };
        let category = DirectoryFilters {
            category: CategoryFilter::Named("Food & Drink".into()),
            ..Default::default()
        };
        let location = DirectoryFilters { location: "Austin".into(), ..Default::default() };

        assert!(!search.is_default());
        assert!(!category.is_default());
        assert!(!location.is_default());
    }

    #[test]
    fn test_category_select_value_mapping() {
        assert_eq!(CategoryFilter::from_select_value("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_select_value(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_select_value("Health"),
            CategoryFilter::Named("Health".into())
        );
        assert_eq!(CategoryFilter::All.select_value(), "all");
        assert_eq!(CategoryFilter::Named("Retail".into()).select_value(), "Retail");
    }

    #[test]
    fn test_import_into_business() {
        let import = BusinessImport {
            name: "Bean There".to_string(),
            description: None,
            category: "food_and_drink".to_string(),
            address: None,
            city: Some("Austin".to_string()),
            state: Some("TX".to_string()),
            zip_code: None,
            phone: None,
            email: None,
            website: None,
            image_url: None,
            products: Some("espresso, pastries".to_string()),
            rating: Some(4.66),
            owner_id: None,
        };

        let now = chrono::DateTime::from_timestamp(0, 0).unwrap();
        let business = import.into_business(now);

        assert_eq!(business.name, "Bean There");
        assert_eq!(business.rating, Decimal::new(47, 1));
        assert_eq!(business.owner_id, Uuid::nil());
        assert_eq!(business.created_at, now);
    }

    #[test]
    fn test_seed_deserialization_defaults() {
        let seed: DirectorySeed = serde_json::from_str("{}").unwrap();
        assert!(seed.categories.is_empty());
        assert!(seed.businesses.is_empty());
    }
}
