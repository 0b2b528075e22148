//! registry-core
//!
//! Business logic and services for the event registry.
//! Depends on registry-domain. No CLI, no terminal I/O, no direct storage
//! interactions; persistence goes through the [`storage::TranscriptLog`]
//! seam.

pub mod app;
pub mod error;
pub mod parser_service;
pub mod print_service;
pub mod storage;
pub mod submission_service;
pub mod time;

pub use app::*;
pub use error::CoreError;
pub use parser_service::*;
pub use print_service::*;
pub use submission_service::*;

#[cfg(test)]
mod tests;
