pub mod aggregate;
pub mod chart;
pub mod dashboard;
pub mod profile;
pub mod session;
pub mod settings;
pub mod summary;
pub mod transaction;
