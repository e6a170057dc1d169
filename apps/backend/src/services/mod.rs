//! Backend services

pub mod enrich;
