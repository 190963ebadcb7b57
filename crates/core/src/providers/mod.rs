pub mod queries;
pub mod traits;

// API provider implementations
pub mod graphql;
