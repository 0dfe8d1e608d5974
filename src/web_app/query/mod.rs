// web_app/query/mod.rs - Structured business queries
//
// The page never assembles query text. Filters compile into a small
// predicate tree over a closed set of business fields; each store adapter
// decides how to evaluate it (bound SQL parameters for PostgreSQL, direct
// evaluation for the in-memory store).

pub mod terms;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::web_app::model::{Business, DirectoryFilters};

pub use terms::{display_category, expand_search_terms, normalize_category};

/// Columns of the businesses collection that queries may reference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessField {
    Name,
    Description,
    Products,
    Category,
    City,
    State,
    Rating,
}

impl BusinessField {
    /// Fields searched by the free-text clause
    pub const SEARCHABLE: [BusinessField; 3] =
        [BusinessField::Name, BusinessField::Description, BusinessField::Products];

    /// Fields matched by the location clause
    pub const LOCATION: [BusinessField; 2] = [BusinessField::City, BusinessField::State];

    pub fn column(self) -> &'static str {
        match self {
            BusinessField::Name => "name",
            BusinessField::Description => "description",
            BusinessField::Products => "products",
            BusinessField::Category => "category",
            BusinessField::City => "city",
            BusinessField::State => "state",
            BusinessField::Rating => "rating",
        }
    }

    /// Text value of the field, `None` for NULL or non-text columns
    pub fn text_of(self, business: &Business) -> Option<&str> {
        match self {
            BusinessField::Name => Some(&business.name),
            BusinessField::Description => business.description.as_deref(),
            BusinessField::Products => business.products.as_deref(),
            BusinessField::Category => Some(&business.category),
            BusinessField::City => business.city.as_deref(),
            BusinessField::State => business.state.as_deref(),
            BusinessField::Rating => None,
        }
    }

    /// Ascending comparison of two businesses on this field; NULLs sort last
    pub fn compare(self, a: &Business, b: &Business) -> Ordering {
        match self {
            BusinessField::Rating => a.rating.cmp(&b.rating),
            field => match (field.text_of(a), field.text_of(b)) {
                (Some(x), Some(y)) => x.cmp(y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

impl std::fmt::Display for BusinessField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// Filter expression over business rows
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    /// Exact equality
    Eq { field: BusinessField, value: String },
    /// Case-insensitive substring match; the needle is raw user text
    ContainsCi { field: BusinessField, needle: String },
    Or(Vec<Predicate>),
    And(Vec<Predicate>),
}

impl Predicate {
    pub fn eq(field: BusinessField, value: impl Into<String>) -> Self {
        Predicate::Eq { field, value: value.into() }
    }

    pub fn contains_ci(field: BusinessField, needle: impl Into<String>) -> Self {
        Predicate::ContainsCi { field, needle: needle.into() }
    }

    /// Evaluate against a single row. An empty `Or` matches nothing and an
    /// empty `And` matches everything, as in SQL.
    pub fn matches(&self, business: &Business) -> bool {
        match self {
            Predicate::Eq { field, value } => field.text_of(business) == Some(value.as_str()),
            Predicate::ContainsCi { field, needle } => field
                .text_of(business)
                .map(|text| text.to_lowercase().contains(&needle.to_lowercase()))
                .unwrap_or(false),
            Predicate::Or(items) => items.iter().any(|p| p.matches(business)),
            Predicate::And(items) => items.iter().all(|p| p.matches(business)),
        }
    }

    /// Number of leaf comparisons in the tree
    pub fn leaf_count(&self) -> usize {
        match self {
            Predicate::Eq { .. } | Predicate::ContainsCi { .. } => 1,
            Predicate::Or(items) | Predicate::And(items) => {
                items.iter().map(Predicate::leaf_count).sum()
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: BusinessField,
    pub direction: Direction,
}

impl Default for OrderBy {
    fn default() -> Self {
        OrderBy { field: BusinessField::Rating, direction: Direction::Desc }
    }
}

/// A read of the businesses collection: every clause AND-ed, then ordered
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessQuery {
    pub clauses: Vec<Predicate>,
    pub order: OrderBy,
}

impl BusinessQuery {
    /// Compile page filters into a query.
    ///
    /// Returns `None` for default filters: the page shows nothing until at
    /// least one criterion is set, so no read is issued.
    pub fn from_filters(filters: &DirectoryFilters) -> Option<Self> {
        if filters.is_default() {
            return None;
        }

        let mut clauses = Vec::new();

        if let Some(search) = filters.search_text() {
            let alternatives = expand_search_terms(search)
                .into_iter()
                .flat_map(|term| {
                    BusinessField::SEARCHABLE
                        .into_iter()
                        .map(move |field| Predicate::contains_ci(field, term.clone()))
                })
                .collect();
            clauses.push(Predicate::Or(alternatives));
        }

        if let Some(label) = filters.category.label() {
            clauses.push(Predicate::eq(BusinessField::Category, normalize_category(label)));
        }

        if let Some(location) = filters.location_text() {
            clauses.push(Predicate::Or(
                BusinessField::LOCATION
                    .into_iter()
                    .map(|field| Predicate::contains_ci(field, location))
                    .collect(),
            ));
        }

        Some(BusinessQuery { clauses, order: OrderBy::default() })
    }

    /// The AND of all clauses as a single predicate
    pub fn predicate(&self) -> Predicate {
        Predicate::And(self.clauses.clone())
    }

    pub fn matches(&self, business: &Business) -> bool {
        self.clauses.iter().all(|clause| clause.matches(business))
    }

    /// Sort rows according to `order`; stable for ties
    pub fn sort(&self, rows: &mut [Business]) {
        let OrderBy { field, direction } = self.order;
        rows.sort_by(|a, b| {
            let ord = field.compare(a, b);
            match direction {
                Direction::Asc => ord,
                Direction::Desc => ord.reverse(),
            }
        });
    }
}
