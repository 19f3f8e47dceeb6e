//! Results module - stored batch results and their visibility.

mod result_store;
mod visibility;

pub use result_store::{ResultOrigin, ResultStore};
pub use visibility::VisibilityMap;
