mod search_filters;

pub use search_filters::SearchFilters;
