// web_app/api/mod.rs - Server-side data access (SSR only)
//
// - db.rs: pool creation, schema bootstrap, seeding
// - queries.rs: PostgreSQL implementation of DirectoryStore

pub mod db;
pub mod queries;

pub use queries::PgDirectory;
