pub mod api;
pub mod cohort;
pub mod config;
pub mod corpus;
pub mod curator;
pub mod error;
pub mod profile;
pub mod scorer;
pub mod stats;
pub mod table;
// cmd and reports belong to the binary crate (main.rs).
