// web_app/pages/mod.rs - Page components module
//
// - DirectoryPage: search and browse local businesses

pub mod directory;

// Re-export page components
pub use directory::DirectoryPage;
