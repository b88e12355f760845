pub mod config;
pub mod error;
pub mod keyspace;
pub mod target;
