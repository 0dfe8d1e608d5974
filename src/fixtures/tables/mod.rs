// fixtures/tables/mod.rs
//
// One module per table; each exposes a unit struct implementing FixtureTable.

pub mod businesses;

pub use businesses::{BusinessCategoriesTable, BusinessesTable};
