pub mod filter;

pub use filter::{filter_catalog, matches_term, CatalogFilter};
