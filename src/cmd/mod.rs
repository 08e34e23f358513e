pub mod analyze;
pub mod build;
pub mod tokenize;
