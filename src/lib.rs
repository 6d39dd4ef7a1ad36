pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;
pub mod updater;
pub mod utils;

pub use error::UpdateError;
pub use types::{DrawRecord, Lottery};
