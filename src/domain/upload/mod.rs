//! Upload module - input slots and the batch they become.
//!
//! - `FileHandle` - a selected file's name, type, and bytes
//! - `SlotManager` - ordered, append-only list of input slots
//! - `BatchRequest` - validated, ordered snapshot of the slots

mod batch_request;
mod file_handle;
mod slot_manager;

pub use batch_request::BatchRequest;
pub use file_handle::{FileHandle, DEFAULT_CONTENT_TYPE};
pub use slot_manager::{InputSlot, SlotManager};
