//! Database models backing the museum repository.

pub mod artwork;
pub mod exhibition;
pub mod museum;

#[cfg(feature = "server")]
pub mod config;
