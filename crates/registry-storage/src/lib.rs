//! registry-storage
//!
//! Filesystem persistence for the event registry: the fixed-format
//! item-list loader, the append-only transcript log, and default path
//! resolution. Returns [`registry_core::CoreError`] like the rest of the
//! stack.

pub mod item_list;
pub mod log;
pub mod paths;

pub use item_list::{load_item_lines, MAX_LINES};
pub use log::FileTranscriptLog;
pub use paths::{default_item_list_path, default_log_path};
