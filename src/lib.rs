pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod ops;
pub mod output;
pub mod paginate;
pub mod resolve;

pub use error::{Error, Result};
