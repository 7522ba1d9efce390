pub mod config;
pub mod error;
pub mod extractor;
pub mod header;
pub mod state;
pub mod traits;
pub mod types;
mod utils;
