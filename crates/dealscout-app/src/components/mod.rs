//! UI components for the search page.

mod grid;
mod search;

pub use grid::ProductGrid;
pub use search::SearchView;
