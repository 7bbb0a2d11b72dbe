pub mod ai;
pub mod classify;
pub mod config;
pub mod error;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "server")]
pub mod server;

pub use classify::{classify_item, classify_static, Category, Classification, ClassifyMethod};
pub use error::AppError;
