// Jotline - SMS capture service
//
// Inbound SMS/MMS messages and authenticated JSON requests become
// idea/person/tool records in Postgres. Classification is a handful of
// prefix heuristics; everything downstream is a straight insert.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
