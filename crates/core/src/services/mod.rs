pub mod aggregation_service;
pub mod chart_service;
pub mod display_service;
pub mod fetch_service;
