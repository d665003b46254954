//! Letter counting, language table and translation client

pub mod client;
pub mod config;
pub mod errors;
pub mod languages;
pub mod letters;
pub mod models;
