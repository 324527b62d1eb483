pub mod config;
pub mod content;
pub mod festival;
pub mod inference;
pub mod movies;
pub mod retry;
pub mod server;
