pub mod api;
pub mod models;
pub mod report;
pub mod states;
pub mod stats;
