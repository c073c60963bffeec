//! Front-end to the remote classification service.

pub mod client;
pub mod config;

pub use client::{SearchClient, SearchError, SearchKind};
pub use config::SearchConfig;
