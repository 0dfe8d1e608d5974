// web_app/api/queries.rs - PostgreSQL implementation of DirectoryStore
//
// Predicates are rendered with `QueryBuilder`: column names come from the
// closed `BusinessField` enum and every user-supplied value is a bound
// parameter. Substring needles additionally have LIKE metacharacters
// escaped so `%` and `_` typed by a user match literally.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::web_app::error::Result;
use crate::web_app::model::Business;
use crate::web_app::query::{BusinessQuery, Direction, Predicate};
use crate::web_app::store::DirectoryStore;

const BUSINESS_COLUMNS: &str = "id, name, description, category, address, city, state, \
                                zip_code, phone, email, website, image_url, products, \
                                rating, owner_id, created_at, updated_at";

/// Escape `\`, `%` and `_` so the text matches literally inside ILIKE
pub fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for ch in needle.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Append `predicate` to the WHERE clause being built
pub fn push_predicate(builder: &mut QueryBuilder<'static, Postgres>, predicate: &Predicate) {
    match predicate {
        Predicate::Eq { field, value } => {
            builder.push(field.column()).push(" = ").push_bind(value.clone());
        }
        Predicate::ContainsCi { field, needle } => {
            builder
                .push(field.column())
                .push(" ILIKE ")
                .push_bind(format!("%{}%", escape_like(needle)))
                .push(" ESCAPE '\\'");
        }
        Predicate::Or(items) => push_group(builder, items, " OR ", "FALSE"),
        Predicate::And(items) => push_group(builder, items, " AND ", "TRUE"),
    }
}

fn push_group(
    builder: &mut QueryBuilder<'static, Postgres>,
    items: &[Predicate],
    separator: &str,
    identity: &str,
) {
    if items.is_empty() {
        builder.push(identity);
        return;
    }
    builder.push("(");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            builder.push(separator);
        }
        push_predicate(builder, item);
    }
    builder.push(")");
}

/// Build the full SELECT for a business query
pub fn build_business_select(query: &BusinessQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {} FROM businesses WHERE ", BUSINESS_COLUMNS));
    push_predicate(&mut builder, &query.predicate());

    let direction = match query.order.direction {
        Direction::Asc => "ASC",
        Direction::Desc => "DESC",
    };
    builder
        .push(" ORDER BY ")
        .push(query.order.field.column())
        .push(" ")
        .push(direction);
    builder
}

/// Directory store backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgDirectory {
    pool: PgPool,
}

impl PgDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DirectoryStore for PgDirectory {
    async fn list_categories(&self) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT name FROM business_categories ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!("Loaded {} categories", names.len());
        Ok(names)
    }

    async fn fetch_businesses(&self, query: &BusinessQuery) -> Result<Vec<Business>> {
        let mut builder = build_business_select(query);
        tracing::debug!("Business query: {}", builder.sql());

        let rows = builder
            .build_query_as::<Business>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::query::BusinessField;

    #[test]
    fn test_escape_like_metacharacters() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("green_juice"), "green\\_juice");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_empty_groups_render_identity() {
        let mut builder = QueryBuilder::new("");
        push_predicate(&mut builder, &Predicate::Or(vec![]));
        assert_eq!(builder.sql(), "FALSE");

        let mut builder = QueryBuilder::new("");
        push_predicate(&mut builder, &Predicate::And(vec![]));
        assert_eq!(builder.sql(), "TRUE");
    }

    #[test]
    fn test_equality_uses_bound_parameter() {
        let mut builder = QueryBuilder::new("");
        push_predicate(&mut builder, &Predicate::eq(BusinessField::Category, "x' OR 1=1 --"));
        assert_eq!(builder.sql(), "category = $1");
    }
}
