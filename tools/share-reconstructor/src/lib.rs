//! Reconstructs Shamir secrets from share documents on disk.

pub mod config;
pub mod output;
pub mod runner;
