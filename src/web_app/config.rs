// web_app/config.rs - Server configuration from the environment
//
// Values are read after `dotenv` has loaded `.env`, so local development
// only needs a `.env` file next to Cargo.toml.

use std::env;
use std::path::PathBuf;

use crate::web_app::error::{DirectoryError, Result};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_SEED_PATH: &str = "data/businesses.json";

/// Which backend serves the directory collections
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres { database_url: String, max_connections: u32 },
    Memory,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub backend: StoreBackend,
    /// JSON seed used for the memory store and to fill an empty database
    pub seed_path: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed_path = lookup("DIRECTORY_SEED_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_PATH));

        let backend = match lookup("DIRECTORY_STORE").as_deref().unwrap_or("postgres") {
            "memory" => StoreBackend::Memory,
            "postgres" => {
                let database_url = lookup("DATABASE_URL").ok_or_else(|| {
                    DirectoryError::Config("DATABASE_URL must be set for the postgres store".into())
                })?;
                let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
                    None => DEFAULT_MAX_CONNECTIONS,
                    Some(raw) => raw.parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                        DirectoryError::Config(format!(
                            "DATABASE_MAX_CONNECTIONS must be a positive integer, got '{}'",
                            raw
                        ))
                    })?,
                };
                StoreBackend::Postgres { database_url, max_connections }
            }
            other => {
                return Err(DirectoryError::Config(format!(
                    "unknown DIRECTORY_STORE '{}' (expected 'postgres' or 'memory')",
                    other
                )))
            }
        };

        Ok(ServerConfig { backend, seed_path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_postgres_is_default_backend() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/dir")]))
                .unwrap();
        assert_eq!(
            config.backend,
            StoreBackend::Postgres {
                database_url: "postgres://localhost/dir".into(),
                max_connections: 5
            }
        );
        assert_eq!(config.seed_path, PathBuf::from("data/businesses.json"));
    }

    #[test]
    fn test_postgres_requires_database_url() {
        let err = ServerConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_memory_backend() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("DIRECTORY_STORE", "memory"),
            ("DIRECTORY_SEED_PATH", "/tmp/seed.json"),
        ]))
        .unwrap();
        assert_eq!(config.backend, StoreBackend::Memory);
        assert_eq!(config.seed_path, PathBuf::from("/tmp/seed.json"));
    }

    #[test]
    fn test_bad_values_are_rejected() {
        assert!(ServerConfig::from_lookup(lookup_from(&[("DIRECTORY_STORE", "redis")])).is_err());
        assert!(ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://x"),
            ("DATABASE_MAX_CONNECTIONS", "lots"),
        ]))
        .is_err());
        assert!(ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://x"),
            ("DATABASE_MAX_CONNECTIONS", "0"),
        ]))
        .is_err());
    }
}
