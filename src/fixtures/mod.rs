// fixtures/mod.rs - Table fixtures for the directory store
//
// Each table is described once: the DDL the server runs at startup to make
// sure the collections exist, and a small sample data set used by the
// PostgreSQL integration tests.

pub mod tables;

pub use tables::{BusinessCategoriesTable, BusinessesTable};

/// A table the directory store reads from
pub trait FixtureTable {
    /// Table name as referenced by queries
    const NAME: &'static str;

    /// Idempotent DDL, executed in order
    fn schema_sql() -> &'static [&'static str];

    /// Sample rows for integration tests, executed in order
    fn sample_sql() -> &'static [&'static str];
}

/// Schema statements for every table, in dependency order
pub fn all_schema_sql() -> Vec<&'static str> {
    BusinessCategoriesTable::schema_sql()
        .iter()
        .chain(BusinessesTable::schema_sql())
        .copied()
        .collect()
}

/// Sample data statements for every table, in dependency order
pub fn all_sample_sql() -> Vec<&'static str> {
    BusinessCategoriesTable::sample_sql()
        .iter()
        .chain(BusinessesTable::sample_sql())
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_created_before_businesses() {
        let statements = all_schema_sql();
        let categories = statements
            .iter()
            .position(|s| s.contains("CREATE TABLE IF NOT EXISTS business_categories"))
            .unwrap();
        let businesses = statements
            .iter()
            .position(|s| s.contains("CREATE TABLE IF NOT EXISTS businesses"))
            .unwrap();
        assert!(categories < businesses);
    }

    #[test]
    fn test_schema_is_idempotent_ddl() {
        for statement in all_schema_sql() {
            assert!(statement.contains("IF NOT EXISTS"), "not idempotent: {}", statement);
        }
    }
}
