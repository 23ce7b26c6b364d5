//! HTTP client module for regscan

pub mod client;
pub use client::HttpClient;
