pub mod benchmark;
pub mod dataset;
pub mod error;
pub mod probe;
pub mod report;
pub mod suite;
