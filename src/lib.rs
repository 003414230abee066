pub mod config;
pub mod trello;

pub use trello::{ApiError, Client, Query};
