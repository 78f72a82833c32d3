pub mod config;
pub mod dictionary;
pub mod error;
pub mod types;
pub mod utils;
