//! HTTP route handlers

pub mod account;
pub mod auth;
pub mod quiz;
pub mod words;
