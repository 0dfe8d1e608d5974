// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Shared data types (used by both client and server)
// - query/: Structured predicate builder and search-term utilities (shared)
// - state.rs: Pure page state machine behind the directory page (shared)
// - store.rs: Data store abstraction and in-memory implementation (shared)
// - error.rs: Error type shared by stores and server code
// - server_fns.rs: Server function declarations (both client and server)
// - config.rs / api/: Configuration, PostgreSQL adapter, seeding (SSR only)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod error;
pub mod model;
pub mod query;
pub mod state;
pub mod store;

// Server function declarations - must be available to both client and server
// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

#[cfg(feature = "ssr")]
pub mod config;

// API module for database queries and server-side logic (SSR only)
#[cfg(feature = "ssr")]
pub mod api;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
