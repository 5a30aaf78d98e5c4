//! Request building for the export API

pub mod query;

pub use query::SearchFilters;
