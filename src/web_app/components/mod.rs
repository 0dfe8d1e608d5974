// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Page chrome and small atomic components (NavBar, Footer, StarRating, EmptyState)
// - toast.rs: Transient notifications (Toaster context + viewport)
// - search.rs: Directory filter controls (search text, category, location)
// - business.rs: Business result card and its loading skeleton

pub mod business;
pub mod common;
pub mod search;
pub mod toast;

// Re-export commonly used components for convenience
pub use business::*;
pub use common::*;
pub use search::*;
pub use toast::*;
