//! State structures for the prediction protocol

pub mod config;
pub mod prediction;
pub mod user_option;

pub use config::*;
pub use prediction::*;
pub use user_option::*;
