//! registry-domain
//!
//! Pure domain models for the event registry (items, layout, submissions,
//! transcript, pages). No I/O, no CLI, no storage. Only data types.

pub mod item;
pub mod layout;
pub mod page;
pub mod submission;

pub use item::*;
pub use layout::*;
pub use page::*;
pub use submission::*;
