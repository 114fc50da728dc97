pub mod api;
pub mod embedding;
pub mod error;
pub mod redis;
