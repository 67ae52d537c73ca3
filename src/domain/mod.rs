pub mod artwork;
pub mod exhibition;
pub mod museum;
pub mod types;
