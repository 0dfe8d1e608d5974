// web_app/api/db.rs - Database pool setup, schema bootstrap, and seeding

use std::path::Path;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::fixtures;
use crate::web_app::error::{DirectoryError, Result};
use crate::web_app::model::DirectorySeed;

/// Create a PostgreSQL connection pool
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Create the directory tables if they do not exist yet
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    for statement in fixtures::all_schema_sql() {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::info!("Directory schema is ready");
    Ok(())
}

/// Seed categories and businesses from a JSON file when the businesses
/// table is empty. Returns the number of businesses inserted.
pub async fn seed_if_empty(pool: &PgPool, seed_path: &Path) -> Result<usize> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM businesses")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        tracing::info!("Directory already contains {} businesses, skipping seed.", count);
        return Ok(0);
    }

    tracing::info!("Seeding directory from {}...", seed_path.display());

    let raw = std::fs::read_to_string(seed_path).map_err(|source| DirectoryError::Io {
        path: seed_path.display().to_string(),
        source,
    })?;
    let seed: DirectorySeed = serde_json::from_str(&raw)?;

    seed_directory(pool, seed).await
}

/// Insert a seed in a single transaction
pub async fn seed_directory(pool: &PgPool, seed: DirectorySeed) -> Result<usize> {
    let mut tx = pool.begin().await?;

    for name in &seed.categories {
        sqlx::query("INSERT INTO business_categories (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(name)
            .execute(&mut *tx)
            .await?;
    }

    let now = chrono::Utc::now();
    let total = seed.businesses.len();

    for import in seed.businesses {
        let business = import.into_business(now);
        sqlx::query(
            r#"
            INSERT INTO businesses (
                id, name, description, category, address, city, state, zip_code,
                phone, email, website, image_url, products, rating, owner_id,
                created_at, updated_at
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8,
                $9, $10, $11, $12, $13, $14, $15,
                $16, $17
            )
            "#,
        )
        .bind(business.id)
        .bind(&business.name)
        .bind(&business.description)
        .bind(&business.category)
        .bind(&business.address)
        .bind(&business.city)
        .bind(&business.state)
        .bind(&business.zip_code)
        .bind(&business.phone)
        .bind(&business.email)
        .bind(&business.website)
        .bind(&business.image_url)
        .bind(&business.products)
        .bind(business.rating)
        .bind(business.owner_id)
        .bind(business.created_at)
        .bind(business.updated_at)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!("Directory seeded with {} businesses.", total);
    Ok(total)
}
