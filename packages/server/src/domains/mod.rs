// Business domains
pub mod ideas;
pub mod ingestion;
pub mod people;
pub mod tools;
