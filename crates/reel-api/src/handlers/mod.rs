//! HTTP request handlers.

pub mod generate;
pub mod health;

pub use generate::generate_media;
pub use health::health;
