// fixtures/tables/businesses.rs
//
// The two collections behind the directory page: `business_categories`
// (names offered by the category filter) and `businesses` (the listings).

use crate::fixtures::FixtureTable;

pub struct BusinessCategoriesTable;

impl FixtureTable for BusinessCategoriesTable {
    const NAME: &'static str = "business_categories";

    fn schema_sql() -> &'static [&'static str] {
        &[r#"
            CREATE TABLE IF NOT EXISTS business_categories (
                id SERIAL PRIMARY KEY,
                name VARCHAR(100) NOT NULL UNIQUE
            )
            "#]
    }

    fn sample_sql() -> &'static [&'static str] {
        &[r#"
            INSERT INTO business_categories (name)
            VALUES
                ('Food & Drink'),
                ('Automotive'),
                ('Health & Wellness'),
                ('Home Services'),
                ('Retail')
            ON CONFLICT (name) DO NOTHING
            "#]
    }
}

pub struct BusinessesTable;

impl FixtureTable for BusinessesTable {
    const NAME: &'static str = "businesses";

    fn schema_sql() -> &'static [&'static str] {
        &[
            r#"
            CREATE TABLE IF NOT EXISTS businesses (
                id UUID PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                description TEXT,
                category VARCHAR(100) NOT NULL,
                address TEXT,
                city VARCHAR(100),
                state VARCHAR(100),
                zip_code VARCHAR(20),
                phone VARCHAR(50),
                email VARCHAR(255),
                website TEXT,
                image_url TEXT,
                products TEXT,
                rating NUMERIC(2, 1) NOT NULL DEFAULT 0,
                owner_id UUID NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            r#"
            CREATE INDEX IF NOT EXISTS businesses_rating_idx ON businesses (rating DESC)
            "#,
            r#"
            CREATE INDEX IF NOT EXISTS businesses_category_idx ON businesses (category)
            "#,
        ]
    }

    fn sample_sql() -> &'static [&'static str] {
        &[r#"
            INSERT INTO businesses (
                id, name, description, category, address, city, state, zip_code,
                phone, email, website, image_url, products, rating, owner_id
            )
            VALUES
                (
                    '00000000-0000-0000-0000-000000000001',
                    'Bean There Coffee',
                    'Neighborhood roastery with single-origin pour overs',
                    'food_and_drink',
                    '12 Elm St', 'Austin', 'TX', '78701',
                    '512-555-0101', 'hello@beanthere.example', 'https://beanthere.example', NULL,
                    'espresso, cold brew, pastries',
                    4.8,
                    '00000000-0000-0000-0000-0000000000aa'
                ),
                (
                    '00000000-0000-0000-0000-000000000002',
                    'Daily Grind Cafe',
                    'Breakfast, lunch and a quiet place to work',
                    'food_and_drink',
                    '400 Congress Ave', 'Austin', 'TX', '78701',
                    NULL, NULL, NULL, NULL,
                    'latte, sandwiches',
                    4.1,
                    '00000000-0000-0000-0000-0000000000aa'
                ),
                (
                    '00000000-0000-0000-0000-000000000003',
                    'Lone Star Auto Repair',
                    'Brakes, tires and engine diagnostics',
                    'automotive',
                    '9 Industrial Blvd', 'Dallas', 'TX', '75201',
                    '214-555-0199', NULL, NULL, NULL,
                    NULL,
                    4.5,
                    '00000000-0000-0000-0000-0000000000bb'
                ),
                (
                    '00000000-0000-0000-0000-000000000004',
                    '100% Juice Bar',
                    'Cold-pressed juice and smoothies',
                    'food_and_drink',
                    NULL, 'Portland', 'OR', '97205',
                    NULL, NULL, NULL, NULL,
                    'green_juice, acai bowls',
                    3.9,
                    '00000000-0000-0000-0000-0000000000cc'
                ),
                (
                    '00000000-0000-0000-0000-000000000005',
                    'Evergreen Family Clinic',
                    'Walk-in medical care for all ages',
                    'health_and_wellness',
                    '77 Pine Rd', 'Portland', 'ME', '04101',
                    NULL, NULL, NULL, NULL,
                    NULL,
                    4.6,
                    '00000000-0000-0000-0000-0000000000dd'
                )
            ON CONFLICT (id) DO NOTHING
            "#]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_names() {
        assert_eq!(BusinessesTable::NAME, "businesses");
        assert_eq!(BusinessCategoriesTable::NAME, "business_categories");
    }

    #[test]
    fn test_businesses_schema_has_searchable_columns() {
        let ddl = BusinessesTable::schema_sql()[0];
        for column in ["name", "description", "products", "category", "city", "state", "rating"] {
            assert!(ddl.contains(column), "missing column {}", column);
        }
    }

    #[test]
    fn test_sample_rows_cover_like_metacharacters() {
        let rows = BusinessesTable::sample_sql()[0];
        assert!(rows.contains("100% Juice Bar"));
        assert!(rows.contains("green_juice"));
    }
}
